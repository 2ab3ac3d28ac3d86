//! HTTP record source.
//!
//! One plain `GET` of the configured URL; no query parameters, headers or
//! auth. The body must be a JSON array of records.

use crate::model::{FetchError, Record};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Default endpoint serving the post collection.
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Fetches the record collection from an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Option<Duration>,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    /// Abort the request if it has not completed within `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Issue the request and decode the records.
    ///
    /// # Errors
    ///
    /// - `FetchError::Network` for transport failures
    /// - `FetchError::Status` for non-2xx responses
    /// - `FetchError::Timeout` when the configured timeout elapses
    /// - `FetchError::Decode` when the body is not a JSON array of records
    pub async fn fetch(&self) -> Result<Vec<Record>, FetchError> {
        let client = Client::builder().build()?;

        info!(url = %self.url, "Fetching records");
        let request = self.request(&client);
        let body = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| FetchError::Timeout(limit))??,
            None => request.await?,
        };

        let records: Vec<Record> =
            serde_json::from_str(&body).map_err(|e| FetchError::decode(&self.url, e))?;
        info!(count = records.len(), "Fetched records");
        Ok(records)
    }

    async fn request(&self, client: &Client) -> Result<String, FetchError> {
        let response = client.get(&self.url).send().await?;
        let status = response.status();
        debug!(%status, "Response received");

        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_source_has_no_timeout() {
        let source = HttpSource::new(DEFAULT_URL);
        assert_eq!(source.url(), DEFAULT_URL);
        assert_eq!(source.timeout(), None);
    }

    #[test]
    fn with_timeout_sets_limit() {
        let source = HttpSource::new("http://localhost").with_timeout(Some(Duration::from_secs(3)));
        assert_eq!(source.timeout(), Some(Duration::from_secs(3)));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Port 9 (discard) on loopback is essentially never listening
        let source = HttpSource::new("http://127.0.0.1:9/posts")
            .with_timeout(Some(Duration::from_secs(5)));
        let err = source.fetch().await.unwrap_err();
        assert!(
            matches!(err, FetchError::Network(_) | FetchError::Timeout(_)),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn invalid_url_is_network_error() {
        let err = HttpSource::new("not a url").fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "unexpected error: {err:?}");
    }
}
