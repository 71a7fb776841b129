mod err;
mod traits;

pub use err::StoreError;
pub use traits::DocumentStore;

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::data::store::{Document, Value};

/// The collections the store holds. Keys and queries name collections
/// through this enum so that a lookup can never address a collection that
/// does not exist.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Users,
    Tweets,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Tweets => "tweets",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key by which an individual document in the store can be accessed.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentKey {
    /// The collection holding the document.
    pub collection: Collection,

    /// ID of the individual document.
    pub id: String,
}

impl DocumentKey {
    pub fn new(collection: Collection, id: impl Into<String>) -> Self {
        DocumentKey {
            collection,
            id: id.into(),
        }
    }

    pub fn user(id: impl Into<String>) -> Self {
        DocumentKey::new(Collection::Users, id)
    }

    pub fn tweet(id: impl Into<String>) -> Self {
        DocumentKey::new(Collection::Tweets, id)
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// Supported types of document filters. Equality on a single attribute is
/// the only predicate the resolver core needs.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentFilter {
    Equal(String, Value),
}

impl DocumentFilter {
    pub fn equal(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        DocumentFilter::Equal(attribute.into(), value.into())
    }

    /// Whether `document` satisfies this filter. An absent attribute never
    /// matches.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            DocumentFilter::Equal(attribute, value) => document.get(attribute) == Some(value),
        }
    }
}

/// A query for documents in a store. A query without a filter is an
/// unfiltered scan of the whole collection.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentQuery {
    /// The collection to search.
    pub collection: Collection,

    /// Filter to filter documents by.
    pub filter: Option<DocumentFilter>,
}

impl DocumentQuery {
    /// An unfiltered scan over `collection`.
    pub fn scan(collection: Collection) -> Self {
        DocumentQuery {
            collection,
            filter: None,
        }
    }

    /// A scan over `collection` keeping documents whose `attribute` equals
    /// `value`.
    pub fn equal(
        collection: Collection,
        attribute: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        DocumentQuery {
            collection,
            filter: Some(DocumentFilter::equal(attribute, value)),
        }
    }
}
