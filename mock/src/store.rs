use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use flock::prelude::*;
use parking_lot::RwLock;

/// An in-memory `DocumentStore`. Documents are keyed by their `id`
/// attribute; reads are counted so tests can assert how many store calls
/// an operation issued.
pub struct InMemoryStore {
    collections: RwLock<HashMap<Collection, BTreeMap<String, Document>>>,
    reads: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            collections: RwLock::new(HashMap::new()),
            reads: AtomicUsize::new(0),
        }
    }

    /// Insert (or replace) a document. The document must carry a string
    /// `id` attribute.
    pub fn insert(&self, collection: Collection, document: Document) {
        let id = document
            .id()
            .expect("documents in the mock store need a string `id`")
            .to_owned();
        self.collections
            .write()
            .entry(collection)
            .or_default()
            .insert(id, document);
    }

    /// How many `get`/`find` calls this store has served.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, key: &DocumentKey) -> Result<Option<Document>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .collections
            .read()
            .get(&key.collection)
            .and_then(|docs| docs.get(&key.id))
            .cloned())
    }

    async fn find(&self, query: DocumentQuery) -> Result<Vec<Document>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let collections = self.collections.read();
        let docs = collections
            .get(&query.collection)
            .map(|docs| docs.values())
            .into_iter()
            .flatten();
        Ok(match &query.filter {
            Some(filter) => docs.filter(|doc| filter.matches(doc)).cloned().collect(),
            None => docs.cloned().collect(),
        })
    }
}

/// A store on which every call fails with the configured error. For
/// testing the failure paths of the resolver core.
pub struct FailingStore {
    error: fn() -> StoreError,
}

impl FailingStore {
    pub fn new(error: fn() -> StoreError) -> Self {
        FailingStore { error }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn get(&self, _key: &DocumentKey) -> Result<Option<Document>, StoreError> {
        Err((self.error)())
    }

    async fn find(&self, _query: DocumentQuery) -> Result<Vec<Document>, StoreError> {
        Err((self.error)())
    }
}
