//! Read-only reader for the restaurant configuration and catalog.
//!
//! Fetches the single remote document by its fixed path and exposes
//! the snapshot to pages. The reader moves through
//! `idle -> loading -> ready | error`; `refresh` re-runs the fetch
//! from either terminal state. An absent document is an empty
//! snapshot, not an error.

use tracing::warn;

use crate::models::{Category, MenuItem, RestaurantConfig, RestaurantDocument, Testimonial};
use crate::remote::{DocumentClient, RemoteError};

/// Fetch lifecycle of the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Configuration/catalog reader.
#[derive(Debug)]
pub struct CatalogReader {
    client: DocumentClient,
    doc_path: String,
    state: ReaderState,
    error: Option<String>,
    snapshot: RestaurantDocument,
}

impl CatalogReader {
    /// Creates an idle reader for the document at `doc_path`.
    pub fn new(client: DocumentClient, doc_path: impl Into<String>) -> Self {
        Self {
            client,
            doc_path: doc_path.into(),
            state: ReaderState::Idle,
            error: None,
            snapshot: RestaurantDocument::default(),
        }
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Message from the last failed fetch, if the reader is in error.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Re-fetches the document.
    ///
    /// On failure the previous snapshot is kept so pages can keep
    /// rendering stale content next to the error indication.
    pub async fn refresh(&mut self) -> Result<(), RemoteError> {
        self.state = ReaderState::Loading;
        let result = self
            .client
            .fetch_document::<RestaurantDocument>(&self.doc_path)
            .await;
        self.apply_fetch_result(result)
    }

    fn apply_fetch_result(
        &mut self,
        result: Result<Option<RestaurantDocument>, RemoteError>,
    ) -> Result<(), RemoteError> {
        match result {
            Ok(Some(doc)) => {
                self.snapshot = doc;
                self.error = None;
                self.state = ReaderState::Ready;
                Ok(())
            }
            Ok(None) => {
                // Nothing published yet; pages fall back to defaults
                self.snapshot = RestaurantDocument::default();
                self.error = None;
                self.state = ReaderState::Ready;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, path = %self.doc_path, "catalog fetch failed");
                self.error = Some(e.to_string());
                self.state = ReaderState::Error;
                Err(e)
            }
        }
    }

    pub fn document(&self) -> &RestaurantDocument {
        &self.snapshot
    }

    pub fn config(&self) -> Option<&RestaurantConfig> {
        self.snapshot.config.as_ref()
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.snapshot.menu
    }

    pub fn categories(&self) -> &[Category] {
        &self.snapshot.categories
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.snapshot.testimonials
    }

    pub fn story(&self) -> Option<&str> {
        self.snapshot.story.as_deref()
    }

    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.snapshot.find_item(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> CatalogReader {
        let client = DocumentClient::new("https://store.example/api", None);
        CatalogReader::new(client, "restaurant/main")
    }

    fn sample_doc() -> RestaurantDocument {
        serde_json::from_str(
            r#"{"menu":[{"id":"1","name":"Margherita","price":10.0}],"story":"hi"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let reader = reader();
        assert_eq!(reader.state(), ReaderState::Idle);
        assert!(reader.menu().is_empty());
        assert!(reader.config().is_none());
        assert!(reader.error().is_none());
    }

    #[test]
    fn test_successful_fetch_is_ready() {
        let mut reader = reader();
        reader.state = ReaderState::Loading;

        reader.apply_fetch_result(Ok(Some(sample_doc()))).unwrap();

        assert_eq!(reader.state(), ReaderState::Ready);
        assert_eq!(reader.menu().len(), 1);
        assert_eq!(reader.story(), Some("hi"));
        assert_eq!(reader.find_item("1").unwrap().name, "Margherita");
    }

    #[test]
    fn test_absent_document_is_ready_with_empty_snapshot() {
        let mut reader = reader();
        reader.state = ReaderState::Loading;

        reader.apply_fetch_result(Ok(None)).unwrap();

        assert_eq!(reader.state(), ReaderState::Ready);
        assert!(reader.menu().is_empty());
        assert!(reader.error().is_none());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_snapshot() {
        let mut reader = reader();
        reader.apply_fetch_result(Ok(Some(sample_doc()))).unwrap();

        reader.state = ReaderState::Loading;
        let result = reader.apply_fetch_result(Err(RemoteError::Status(500)));

        assert!(result.is_err());
        assert_eq!(reader.state(), ReaderState::Error);
        assert!(reader.error().unwrap().contains("500"));
        // Stale snapshot still renders
        assert_eq!(reader.menu().len(), 1);
    }

    #[test]
    fn test_refresh_recovers_from_error() {
        let mut reader = reader();
        reader.apply_fetch_result(Err(RemoteError::Status(500))).ok();
        assert_eq!(reader.state(), ReaderState::Error);

        reader.state = ReaderState::Loading;
        reader.apply_fetch_result(Ok(Some(sample_doc()))).unwrap();
        assert_eq!(reader.state(), ReaderState::Ready);
        assert!(reader.error().is_none());
    }
}
