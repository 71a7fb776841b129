/// The root operations exposed to the transport layer.
mod query;

/// Resolution of documents and relations from the store.
mod store;

pub use crate::query::QueryDispatcher;
pub use crate::store::{DocumentCache, StoreResolver};

/// A prelude that makes all resolver types available.
pub mod prelude {
    pub use super::{DocumentCache, QueryDispatcher, StoreResolver};
}
