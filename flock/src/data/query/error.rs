use thiserror::Error;

use crate::components::store::{Collection, StoreError};

/// Error caused while resolving a query. Every store-facing operation
/// classifies its failures through this one taxonomy; a keyed lookup that
/// finds nothing is not an error and stays in the success channel as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum QueryExecutionError {
    /// The backing store failed.
    #[error("failed to resolve store query: {0}")]
    StoreQueryError(#[from] StoreError),

    /// A required argument was not provided. Raised before any store call
    /// is attempted.
    #[error("no value provided for required argument: {field}")]
    MissingArgument { field: &'static str },

    /// An argument was provided but does not pass validation. Raised
    /// before any store call is attempted.
    #[error("invalid value provided for argument `{field}`: {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },

    /// A stored document does not deserialize into its declared entity
    /// shape. Partial or coerced records are never returned.
    #[error("document {collection}/{id} does not match the entity shape for `{collection}`: {source}")]
    MalformedEntity {
        collection: Collection,
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl QueryExecutionError {
    /// Returns true if the failure was detected before reaching the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. } | Self::InvalidArgument { .. }
        )
    }

    /// Returns true if the backing store failed.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Self::StoreQueryError(_))
    }
}
