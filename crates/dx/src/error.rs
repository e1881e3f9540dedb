//! CLI error types.

use dx_config::ConfigError;
use dx_dsn::DsnError;
use dx_navigator::{NavigatorError, NetworkError};
use dx_page::PageError;
use dx_search::SearchError;
use dx_selector::SelectorError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Dsn(#[from] DsnError),

    #[error("{0}")]
    Page(#[from] PageError),

    #[error("{0}")]
    Selector(#[from] SelectorError),

    #[error("{0}")]
    Search(#[from] SearchError),

    #[error("{0}")]
    Navigator(#[from] NavigatorError),

    #[error("{0}")]
    Network(#[from] NetworkError),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Validation(String),
}
