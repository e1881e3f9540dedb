//! HTTP account client.

use std::time::Duration;

use dx_config::{AccountConfig, HttpConfig};
use ureq::Agent;

use crate::account::{Account, AccountSource};
use crate::error::AccountError;
use crate::project::{Project, UserResponse};

/// Fetches the account from `{api_url}/user/`.
///
/// The request carries the configured session cookie, if any, so the
/// endpoint can identify the signed-in user.
pub struct AccountClient {
    agent: Agent,
    api_url: String,
    session_cookie: Option<String>,
}

impl AccountClient {
    /// Create a client. `timeout` of `None` means no timeout.
    #[must_use]
    pub fn new(api_url: &str, session_cookie: Option<String>, timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            api_url: api_url.trim_end_matches('/').to_owned(),
            session_cookie,
        }
    }

    /// Create a client from the `[account]` and `[http]` config sections.
    #[must_use]
    pub fn from_config(account: &AccountConfig, http: &HttpConfig) -> Self {
        Self::new(
            &account.api_url,
            account.session_cookie.clone(),
            http.timeout_secs.map(Duration::from_secs),
        )
    }

    fn user_url(&self) -> String {
        format!("{}/user/", self.api_url)
    }
}

impl AccountSource for AccountClient {
    fn fetch(&self) -> Result<Account, AccountError> {
        let url = self.user_url();
        tracing::debug!(url = %url, "Fetching account");

        let mut request = self.agent.get(&url).header("Accept", "application/json");
        if let Some(cookie) = &self.session_cookie {
            request = request.header("Cookie", cookie);
        }
        let response = request.call()?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(AccountError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let resp: UserResponse = body.read_json()?;
        Ok(Account {
            user: resp.user,
            projects: resp.projects.into_iter().map(Project::from).collect(),
        })
    }
}
