use flock::prelude::*;

use crate::store::StoreResolver;

/// Maps the two root operations to resolver calls. One dispatcher is
/// created per request; the transport layer parses and validates the
/// request, then invokes these per root field.
pub struct QueryDispatcher {
    resolver: StoreResolver,
}

impl QueryDispatcher {
    pub fn new(logger: &Logger, store: Arc<dyn DocumentStore>) -> Self {
        QueryDispatcher {
            resolver: StoreResolver::new(logger, store),
        }
    }

    /// The resolver backing this dispatcher, for resolving the relation
    /// fields of the entities a root operation returned.
    pub fn resolver(&self) -> &StoreResolver {
        &self.resolver
    }

    /// The `tweets` root operation.
    pub async fn tweets(&self) -> Result<Vec<Tweet>, QueryExecutionError> {
        self.resolver.all_tweets().await
    }

    /// The `user(id)` root operation. A missing argument is a validation
    /// failure; an id that matches no user is `Ok(None)`.
    pub async fn user(&self, id: Option<&str>) -> Result<Option<User>, QueryExecutionError> {
        let id = id.ok_or(QueryExecutionError::MissingArgument { field: "id" })?;
        self.resolver.user_by_id(id).await
    }
}
