use async_trait::async_trait;

use super::{DocumentKey, DocumentQuery, StoreError};
use crate::data::store::Document;

/// The boundary to the backing document store. The store is constructed
/// once at startup and passed in wherever it is needed; implementations
/// must be safe for concurrent use by multiple in-flight requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Point lookup of a single document. Returns `Ok(None)` when no
    /// document exists under `key`; a keyed lookup yields at most one
    /// document.
    async fn get(&self, key: &DocumentKey) -> Result<Option<Document>, StoreError>;

    /// Filtered or unfiltered scan over one collection. An empty result is
    /// a valid outcome, not an error. No ordering is guaranteed.
    async fn find(&self, query: DocumentQuery) -> Result<Vec<Document>, StoreError>;
}
