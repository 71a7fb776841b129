mod cache;
mod resolver;

pub use cache::DocumentCache;
pub use resolver::StoreResolver;
