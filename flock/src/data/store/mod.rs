use std::fmt;

use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};
use serde_json::Map;

pub use serde_json::Value;

/// A schema-less record as the store yields it: a set of named attributes
/// with JSON values. The store does not enforce any shape; turning a
/// `Document` into a typed entity can fail and has to be checked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new() -> Self {
        Document(Map::new())
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute)
    }

    /// The `id` attribute, if present and a string. Documents without a
    /// string id cannot be addressed by key.
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    pub fn set(&mut self, attribute: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(attribute.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deserialize this document into a typed entity, consuming it. The
    /// caller is responsible for classifying a failure; see
    /// `QueryExecutionError::MalformedEntity`.
    pub fn into_entity<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0))
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Document(map)
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Document(iter.into_iter().collect())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

/// A user profile. Created and mutated externally; read-only here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub screen_name: String,
    pub statuses_count: u64,
}

/// A single tweet. `user_id` references `User.id`, but the store enforces
/// no referential integrity; the reference may dangle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub likes: u64,
}
