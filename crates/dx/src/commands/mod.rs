//! CLI command implementations.

pub(crate) mod browse;
pub(crate) mod dsn;
pub(crate) mod projects;
pub(crate) mod render;
pub(crate) mod search;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use dx_config::{CliSettings, Config, StateBackend, StateConfig};
use dx_selector::{AccountClient, Project, ProjectSelector, User, load_account};
use dx_store::{FileStore, NullStore, StateStore};

use crate::error::CliError;

pub(crate) use browse::BrowseArgs;
pub(crate) use dsn::DsnArgs;
pub(crate) use projects::{ProjectsArgs, SelectArgs};
pub(crate) use render::RenderArgs;
pub(crate) use search::SearchArgs;

/// Account and state overrides shared by commands that load projects.
#[derive(Args, Debug, Default)]
pub(crate) struct AccountArgs {
    /// Account API URL (overrides config).
    #[arg(long, env = "DX_API_URL")]
    api_url: Option<String>,

    /// Session cookie sent with the account request (overrides config).
    #[arg(long, env = "DX_SESSION_COOKIE", hide_env_values = true)]
    session_cookie: Option<String>,

    /// Directory holding the remembered project (overrides config).
    #[arg(long)]
    state_dir: Option<PathBuf>,
}

impl AccountArgs {
    pub(crate) fn settings(&self) -> CliSettings {
        CliSettings {
            api_url: self.api_url.clone(),
            session_cookie: self.session_cookie.clone(),
            state_dir: self.state_dir.clone(),
            ..Default::default()
        }
    }
}

pub(crate) fn load_config(path: Option<&Path>, settings: &CliSettings) -> Result<Config, CliError> {
    Ok(Config::load(path, Some(settings))?)
}

/// Load the account and build a selector over the configured state store.
///
/// Nothing is selected yet; callers restore or select explicitly.
pub(crate) fn load_projects(config: &Config) -> (User, ProjectSelector) {
    let client = AccountClient::from_config(&config.account, &config.http);
    let account = load_account(&client, &Project::placeholder(&config.credentials));

    let selector = ProjectSelector::new(
        account.projects,
        state_store(&config.state_resolved),
        config.credentials.storage_key.clone(),
    );
    (account.user, selector)
}

fn state_store(state: &StateConfig) -> Arc<dyn StateStore> {
    match state.backend {
        StateBackend::File => Arc::new(FileStore::new(state.dir.clone())),
        StateBackend::None => Arc::new(NullStore),
    }
}
