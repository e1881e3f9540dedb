//! Page fetching.

use std::time::Duration;

use dx_config::HttpConfig;
use ureq::Agent;
use url::Url;

use crate::error::NetworkError;

/// Fetches the HTML of a page.
pub trait PageFetcher {
    /// Fetch `url` and return its body.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] on transport failure or an error status.
    fn fetch(&self, url: &Url) -> Result<String, NetworkError>;
}

/// Blocking HTTP page fetcher.
pub struct UreqFetcher {
    agent: Agent,
}

impl UreqFetcher {
    /// Create a fetcher. `timeout` of `None` means no timeout.
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }

    #[must_use]
    pub fn from_config(http: &HttpConfig) -> Self {
        Self::new(http.timeout_secs.map(Duration::from_secs))
    }
}

impl PageFetcher for UreqFetcher {
    fn fetch(&self, url: &Url) -> Result<String, NetworkError> {
        tracing::debug!(url = %url, "Fetching page");

        let response = self
            .agent
            .get(url.as_str())
            .header("Accept", "text/html")
            .call()?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(NetworkError::HttpResponse {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.into_body().read_to_string()?)
    }
}
