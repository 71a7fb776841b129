use std::collections::HashMap;

use flock::prelude::*;
use parking_lot::Mutex;

/// A request-scoped cache of documents looked up from the store, keyed by
/// `(collection, id)`. Within one response tree the same document is often
/// referenced more than once (many tweets by the same author each resolve
/// `Tweet.user`); the cache makes sure each key is fetched at most once
/// per request.
///
/// An entry of `None` records a confirmed miss, so a dangling reference is
/// also looked up only once. Store errors are never cached. The cache must
/// not outlive a request; the store is treated as externally consistent
/// only for that long.
#[derive(Clone)]
pub struct DocumentCache {
    documents: Arc<Mutex<HashMap<DocumentKey, Option<Document>>>>,
    disabled: bool,
}

impl CheapClone for DocumentCache {}

impl DocumentCache {
    pub fn new() -> Self {
        Self::with_disabled(ENV_VARS.query_cache_disabled())
    }

    fn with_disabled(disabled: bool) -> Self {
        DocumentCache {
            documents: Arc::new(Mutex::new(HashMap::new())),
            disabled,
        }
    }

    /// Read-through point lookup: serve `key` from the cache, or issue one
    /// `store.get` and remember the outcome, present or absent.
    pub async fn get_document(
        &self,
        store: &dyn DocumentStore,
        key: &DocumentKey,
    ) -> Result<Option<Document>, StoreError> {
        if self.disabled {
            return store.get(key).await;
        }

        if let Some(hit) = self.documents.lock().get(key) {
            return Ok(hit.clone());
        }

        let document = store.get(key).await?;
        self.documents
            .lock()
            .insert(key.clone(), document.clone());
        Ok(document)
    }

    /// Feed a document seen in a scan into the cache, so a later keyed
    /// lookup of the same document issues no store call. Documents without
    /// a string `id` cannot be addressed by key and are skipped.
    pub fn hydrate(&self, collection: Collection, document: &Document) {
        if self.disabled {
            return;
        }

        if let Some(id) = document.id() {
            let key = DocumentKey::new(collection, id);
            self.documents
                .lock()
                .entry(key)
                .or_insert_with(|| Some(document.clone()));
        }
    }
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use flock_mock::InMemoryStore;
    use serde_json::json;

    use super::*;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(map) => Document::from(map),
            _ => panic!("test documents must be JSON objects"),
        }
    }

    fn store_with_user() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.insert(
            Collection::Users,
            document(json!({ "id": "u1", "name": "Ada" })),
        );
        store
    }

    #[tokio::test]
    async fn second_lookup_of_the_same_key_hits_the_store_once() {
        let store = store_with_user();
        let cache = DocumentCache::with_disabled(false);
        let key = DocumentKey::user("u1");

        let first = cache.get_document(&store, &key).await.unwrap();
        let second = cache.get_document(&store, &key).await.unwrap();

        assert_eq!(first, second);
        assert!(first.is_some());
        assert_eq!(1, store.read_count());
    }

    #[tokio::test]
    async fn confirmed_misses_are_cached() {
        let store = store_with_user();
        let cache = DocumentCache::with_disabled(false);
        let key = DocumentKey::user("missing");

        assert_eq!(None, cache.get_document(&store, &key).await.unwrap());
        assert_eq!(None, cache.get_document(&store, &key).await.unwrap());
        assert_eq!(1, store.read_count());
    }

    #[tokio::test]
    async fn hydrated_documents_are_served_without_a_store_call() {
        let store = store_with_user();
        let cache = DocumentCache::with_disabled(false);
        let doc = document(json!({ "id": "t1", "userId": "u1" }));

        cache.hydrate(Collection::Tweets, &doc);

        let hit = cache
            .get_document(&store, &DocumentKey::tweet("t1"))
            .await
            .unwrap();
        assert_eq!(Some(doc), hit);
        assert_eq!(0, store.read_count());
    }

    #[tokio::test]
    async fn hydrate_skips_documents_without_a_string_id() {
        let store = store_with_user();
        let cache = DocumentCache::with_disabled(false);

        cache.hydrate(Collection::Tweets, &document(json!({ "likes": 1 })));

        assert_eq!(
            None,
            cache
                .get_document(&store, &DocumentKey::tweet("t1"))
                .await
                .unwrap()
        );
        assert_eq!(1, store.read_count());
    }

    #[tokio::test]
    async fn disabled_cache_goes_to_the_store_every_time() {
        let store = store_with_user();
        let cache = DocumentCache::with_disabled(true);
        let key = DocumentKey::user("u1");

        cache.get_document(&store, &key).await.unwrap();
        cache.get_document(&store, &key).await.unwrap();

        assert_eq!(2, store.read_count());
    }
}
