//! Error types for navigation.

use dx_page::PageError;

/// Error fetching a page.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Transport failure.
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// The server answered with an error status.
    #[error("HTTP {status} for {url}")]
    HttpResponse {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}

/// Error setting up a page controller.
#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    /// The initial page or a configured selector is unusable.
    #[error(transparent)]
    Page(#[from] PageError),

    /// The site base URL or the current path is not a valid URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
