//! Account loading.

use crate::error::AccountError;
use crate::project::{Project, User};

/// The signed-in user and their projects, in account order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub user: User,
    pub projects: Vec<Project>,
}

/// Somewhere the account can be fetched from.
pub trait AccountSource {
    /// Fetch the current user and their projects.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError`] when the account cannot be fetched.
    fn fetch(&self) -> Result<Account, AccountError>;
}

/// Load the account, never failing.
///
/// On error the user is unauthenticated and `placeholder` is the only
/// project. When the account has no projects, `placeholder` is inserted at
/// the front. Either way there is always at least one project to render
/// credentials for.
pub fn load_account<S: AccountSource + ?Sized>(source: &S, placeholder: &Project) -> Account {
    match source.fetch() {
        Ok(mut account) => {
            if account.projects.is_empty() {
                tracing::debug!("Account has no projects, using placeholder");
                account.projects.insert(0, placeholder.clone());
            }
            tracing::info!(
                projects = account.projects.len(),
                authenticated = account.user.is_authenticated,
                "Loaded account"
            );
            account
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load account, using placeholder");
            Account {
                user: User::default(),
                projects: vec![placeholder.clone()],
            }
        }
    }
}
