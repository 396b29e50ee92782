//! Canned document source for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use docpad_storage::Documentation;

use crate::error::FetchError;
use crate::source::DocumentSource;

#[derive(Debug, Clone)]
enum Response {
    Document(Documentation),
    Body(String),
    Status(u16),
}

/// [`DocumentSource`] answering from a fixed table of URLs.
///
/// Unknown URLs fail like an unreachable host. Every requested URL is
/// recorded and available through [`StaticSource::calls`].
///
/// # Example
///
/// ```ignore
/// use docpad_viewer::{DocumentSource, StaticSource};
///
/// let source = StaticSource::new().with_status("https://example.com/x.json", 404);
/// assert!(source.fetch("https://example.com/x.json").is_err());
/// ```
#[derive(Debug, Default)]
pub struct StaticSource {
    responses: RwLock<HashMap<String, Response>>,
    calls: RwLock<Vec<String>>,
}

impl StaticSource {
    /// Create a source that knows no URLs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `documentation` at `url`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, url: impl Into<String>, documentation: Documentation) -> Self {
        self.insert(url.into(), Response::Document(documentation));
        self
    }

    /// Serve a raw body at `url`, parsed like a real response.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url.into(), Response::Body(body.into()));
        self
    }

    /// Answer `url` with an HTTP error status.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.insert(url.into(), Response::Status(status));
        self
    }

    /// URLs requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    fn insert(&self, url: String, response: Response) {
        self.responses.write().unwrap().insert(url, response);
    }
}

impl DocumentSource for StaticSource {
    fn fetch(&self, url: &str) -> Result<Documentation, FetchError> {
        self.calls.write().unwrap().push(url.to_owned());
        let response = self.responses.read().unwrap().get(url).cloned();
        match response {
            Some(Response::Document(documentation)) => Ok(documentation),
            Some(Response::Body(body)) => Ok(Documentation::from_json(&body)?),
            Some(Response::Status(status)) => Err(ureq::Error::StatusCode(status).into()),
            None => Err(ureq::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("no route to {url}"),
            ))
            .into()),
        }
    }
}
