//! HTTP client for the locations API.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::location::Location;

/// Failure modes when talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered outside the 2xx range.
    #[error("server responded with status {status}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
    },
    /// The response body was not the expected JSON shape.
    #[error("could not decode response body: {0}")]
    Decode(#[source] reqwest::Error),
    /// The configured base URL cannot host relative paths.
    #[error("invalid base URL: {0}")]
    InvalidBase(#[source] url::ParseError),
}

/// Read access to the published location collection.
#[async_trait]
pub trait LocationsClient: Send + Sync {
    /// Fetch every location record.
    async fn list(&self) -> Result<Vec<Location>, ClientError>;
}

/// [`LocationsClient`] backed by a real HTTP endpoint.
pub struct HttpLocationsClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpLocationsClient {
    /// Create a client rooted at `base`, e.g. `https://example.org/`.
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    fn locations_url(&self) -> Result<Url, ClientError> {
        self.base
            .join("api/locations")
            .map_err(ClientError::InvalidBase)
    }
}

#[async_trait]
impl LocationsClient for HttpLocationsClient {
    async fn list(&self) -> Result<Vec<Location>, ClientError> {
        let url = self.locations_url()?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }
        response.json().await.map_err(ClientError::Decode)
    }
}
