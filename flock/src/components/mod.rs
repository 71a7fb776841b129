/// The document store boundary.
pub mod store;
