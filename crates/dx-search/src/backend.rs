//! Search backends.

use std::time::Duration;

use dx_config::HttpConfig;
use ureq::Agent;

use crate::model::SearchResult;

/// Search error.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Transport failure or undecodable body.
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// The backend answered with an error status.
    #[error("HTTP {status}: {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },
}

/// Something that answers multi-site queries.
pub trait SearchBackend {
    /// Query `sites` for `query`. Results come back in site order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] when the backend cannot be queried.
    fn query(&self, query: &str, sites: &[String]) -> Result<Vec<SearchResult>, SearchError>;
}

/// Backend reached over HTTP: `GET {endpoint}?q=…&sites=a,b,c` returning a
/// JSON array of [`SearchResult`].
pub struct HttpSearchBackend {
    agent: Agent,
    endpoint: String,
}

impl HttpSearchBackend {
    /// Create a backend. `timeout` of `None` means no timeout.
    #[must_use]
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.to_owned(),
        }
    }

    #[must_use]
    pub fn from_config(endpoint: &str, http: &HttpConfig) -> Self {
        Self::new(endpoint, http.timeout_secs.map(Duration::from_secs))
    }
}

impl SearchBackend for HttpSearchBackend {
    fn query(&self, query: &str, sites: &[String]) -> Result<Vec<SearchResult>, SearchError> {
        tracing::debug!(query, sites = %sites.join(","), "Querying search backend");

        let response = self
            .agent
            .get(&self.endpoint)
            .query("q", query)
            .query("sites", sites.join(","))
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(SearchError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body.read_json()?)
    }
}
