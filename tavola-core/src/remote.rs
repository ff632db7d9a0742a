//! HTTP client for the remote document store.
//!
//! Two access patterns: fetching a single document by path, and
//! appending a document to a named collection. An absent document is
//! data-level "nothing published yet", not an error. No automatic
//! retries.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Collection receiving contact-form messages.
pub const MESSAGES_COLLECTION: &str = "messages";
/// Collection receiving reservation requests.
pub const RESERVATIONS_COLLECTION: &str = "reservations";

/// Errors from remote document operations.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
struct CreatedDocument {
    id: String,
}

/// Client for the document store backing the site content.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl DocumentClient {
    /// Creates a client for the given server, optionally authenticated.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the full URL for a document or collection path.
    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => req.header("Authorization", format!("Bearer {}", key)),
            None => req,
        }
    }

    /// Fetches a document by path.
    ///
    /// Returns `Ok(None)` when the document does not exist (HTTP 404);
    /// pages render their fallback content in that case.
    pub async fn fetch_document<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, RemoteError> {
        let url = self.build_url(path);
        debug!(%url, "fetching document");

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(|e| RemoteError::Connection(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status().as_u16()));
        }

        let value = response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(Some(value))
    }

    /// Appends a document to a collection.
    ///
    /// The server assigns the document id and creation timestamp;
    /// the assigned id is returned.
    pub async fn add_document<T: Serialize>(
        &self,
        collection: &str,
        document: &T,
    ) -> Result<String, RemoteError> {
        let url = self.build_url(collection);
        debug!(%url, "appending document");

        let response = self
            .authorize(self.http.post(&url))
            .json(document)
            .send()
            .await
            .map_err(|e| RemoteError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status().as_u16()));
        }

        let created = response
            .json::<CreatedDocument>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(created.id)
    }
}
