mod store;

pub use crate::store::{FailingStore, InMemoryStore};
