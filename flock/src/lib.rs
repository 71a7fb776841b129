/// Traits and types for all system components.
pub mod components;

/// Common data types used throughout flock.
pub mod data;

/// Environment variables that influence runtime behavior.
pub mod env;

/// Root logger constructors.
pub mod log;

mod cheap_clone;

pub use crate::cheap_clone::CheapClone;

/// A prelude that makes all system component traits and data types available.
///
/// Add the following code to import all traits and data types listed below at once.
///
/// ```
/// use flock::prelude::*;
/// ```
pub mod prelude {
    pub use ::anyhow::{self, anyhow};
    pub use async_trait::async_trait;
    pub use lazy_static::lazy_static;
    pub use serde_derive::{Deserialize, Serialize};
    pub use serde_json;
    pub use slog::{self, crit, debug, error, info, o, trace, warn, Logger};
    pub use std::fmt::Debug;
    pub use std::sync::Arc;
    pub use tokio;

    pub use crate::cheap_clone::CheapClone;
    pub use crate::components::store::{
        Collection, DocumentFilter, DocumentKey, DocumentQuery, DocumentStore, StoreError,
    };
    pub use crate::data::query::QueryExecutionError;
    pub use crate::data::store::{Document, Tweet, User, Value};
    pub use crate::env::{EnvVars, ENV_VARS};
}
