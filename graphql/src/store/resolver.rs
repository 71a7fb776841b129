use std::time::Instant;

use flock::prelude::*;
use serde::de::DeserializeOwned;

use crate::store::DocumentCache;

/// A resolver that fetches entities and their relations from a
/// `DocumentStore`. One resolver is created per request; its clones share
/// the request-scoped document cache. Each relation is resolved lazily
/// with exactly one store operation, and not-found outcomes stay in the
/// success channel as `Ok(None)`.
#[derive(Clone)]
pub struct StoreResolver {
    logger: Logger,
    store: Arc<dyn DocumentStore>,
    cache: DocumentCache,
}

impl CheapClone for StoreResolver {}

impl StoreResolver {
    pub fn new(logger: &Logger, store: Arc<dyn DocumentStore>) -> Self {
        StoreResolver {
            logger: logger.new(o!("component" => "StoreResolver")),
            store,
            cache: DocumentCache::new(),
        }
    }

    /// Unfiltered scan of the tweet collection. An empty collection yields
    /// an empty list; a store failure surfaces as `StoreQueryError` like
    /// everywhere else.
    pub async fn all_tweets(&self) -> Result<Vec<Tweet>, QueryExecutionError> {
        let start = Instant::now();
        let docs = self
            .store
            .find(DocumentQuery::scan(Collection::Tweets))
            .await?;
        let tweets = self.parse_tweets(docs)?;
        self.log_timing("tweets", tweets.len(), start);
        Ok(tweets)
    }

    /// Resolve `User.tweets`: exactly the tweets whose `userId` equals
    /// `user_id`, in whatever order the store yields them. A user with no
    /// tweets gets an empty list, not an error.
    pub async fn tweets_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Tweet>, QueryExecutionError> {
        let start = Instant::now();
        let query = DocumentQuery::equal(Collection::Tweets, "userId", user_id);
        let docs = self.store.find(query).await?;
        let tweets = self.parse_tweets(docs)?;
        self.log_timing("User.tweets", tweets.len(), start);
        Ok(tweets)
    }

    /// Resolve `Tweet.user` by following the unmodeled foreign key. The
    /// store enforces no referential integrity, so the reference may
    /// dangle; that is `Ok(None)`, distinct from a store failure.
    pub async fn user_for_tweet(
        &self,
        tweet: &Tweet,
    ) -> Result<Option<User>, QueryExecutionError> {
        self.lookup_user("Tweet.user", &tweet.user_id).await
    }

    /// Root-level user lookup. Unlike `user_for_tweet` the id comes from
    /// request input, so it is validated before any store call is issued.
    pub async fn user_by_id(&self, id: &str) -> Result<Option<User>, QueryExecutionError> {
        if id.trim().is_empty() {
            return Err(QueryExecutionError::InvalidArgument {
                field: "id",
                message: "must be a non-empty string".to_owned(),
            });
        }
        self.lookup_user("user", id).await
    }

    async fn lookup_user(
        &self,
        operation: &str,
        id: &str,
    ) -> Result<Option<User>, QueryExecutionError> {
        let start = Instant::now();
        let key = DocumentKey::user(id);
        let user = self
            .cache
            .get_document(self.store.as_ref(), &key)
            .await?
            .map(|doc| parse_entity(Collection::Users, doc))
            .transpose()?;
        self.log_timing(operation, user.is_some() as usize, start);
        Ok(user)
    }

    fn parse_tweets(&self, docs: Vec<Document>) -> Result<Vec<Tweet>, QueryExecutionError> {
        docs.into_iter()
            .map(|doc| {
                self.cache.hydrate(Collection::Tweets, &doc);
                parse_entity(Collection::Tweets, doc)
            })
            .collect()
    }

    fn log_timing(&self, operation: &str, results: usize, start: Instant) {
        if ENV_VARS.log_query_timing() {
            debug!(self.logger, "Query timing";
                "operation" => operation,
                "results" => results,
                "elapsed_ms" => start.elapsed().as_millis() as u64
            );
        }
    }
}

/// Turn a raw document into a typed entity, failing loudly on a document
/// that does not match the declared shape.
fn parse_entity<T: DeserializeOwned>(
    collection: Collection,
    doc: Document,
) -> Result<T, QueryExecutionError> {
    let id = doc.id().unwrap_or("(no id)").to_owned();
    doc.into_entity()
        .map_err(|source| QueryExecutionError::MalformedEntity {
            collection,
            id,
            source,
        })
}
