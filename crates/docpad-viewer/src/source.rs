//! Document sources.
//!
//! [`DocumentSource`] is the controller's only way to the network, which lets
//! tests substitute a canned source.

use std::time::Duration;

use docpad_storage::Documentation;
use ureq::Agent;

use crate::error::FetchError;

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Something a document can be fetched from.
pub trait DocumentSource: Send + Sync {
    /// Fetch and parse the document at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on network failure, non-2xx status, or a body
    /// that is not a documentation JSON object.
    fn fetch(&self, url: &str) -> Result<Documentation, FetchError>;
}

/// Blocking HTTP GET source.
pub struct HttpSource {
    agent: Agent,
}

impl HttpSource {
    /// Create a source with the given overall request timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self { agent }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Documentation, FetchError> {
        tracing::debug!(url, "Fetching documentation");
        let mut response = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .call()?;
        let body = response.body_mut().read_to_string()?;
        let documentation = Documentation::from_json(&body)?;
        tracing::debug!(url, pages = documentation.len(), "Fetched documentation");
        Ok(documentation)
    }
}
