/// Data types for dealing with storing documents and the entities they
/// deserialize into.
pub mod store;

/// Query errors.
pub mod query;
