//! Error types for account loading and selection.

/// Error fetching the account.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Transport failure or undecodable body.
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// The account endpoint answered with an error status.
    #[error("HTTP {status}: {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },
}

/// Error selecting a project.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// No loaded project has the requested id or connection string.
    #[error("unknown project: {0}")]
    UnknownProject(String),
}
