mod error;

pub use error::QueryExecutionError;
