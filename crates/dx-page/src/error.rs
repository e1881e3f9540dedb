//! Error types for page handling.

/// Error from page rewriting or fragment extraction.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A fetched document lacks a required region.
    #[error("missing {region} fragment in fetched page")]
    MissingFragment {
        /// Region name ("content" or "sidebar").
        region: &'static str,
    },

    /// A configured CSS selector could not be parsed.
    #[error("invalid selector {selector:?}: {message}")]
    Selector {
        /// The selector as configured.
        selector: String,
        /// Parser message.
        message: String,
    },

    /// Streaming HTML rewrite failed.
    #[error("HTML rewrite failed")]
    Rewrite(#[from] lol_html::errors::RewritingError),

    /// Rewritten output was not valid UTF-8.
    #[error("rewritten HTML is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A base URL could not be parsed.
    #[error("invalid base URL")]
    Url(#[from] url::ParseError),
}

impl PageError {
    pub(crate) fn selector(selector: &str, message: impl ToString) -> Self {
        Self::Selector {
            selector: selector.to_owned(),
            message: message.to_string(),
        }
    }
}
