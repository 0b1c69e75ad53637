//! Data models for the user service.
//!
//! This module contains the user record served by the local store and the
//! composite response body assembled by the aggregation endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Phone number.
    pub phone: String,
}

impl User {
    /// Creates a new user record.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// The built-in catalog used when no users are configured.
pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@email.com", "081234567890"),
        User::new(2, "Jane Smith", "jane@email.com", "081234567891"),
        User::new(3, "Bob Johnson", "bob@email.com", "081234567892"),
    ]
}

/// A response body assembled per request from local and remote data.
///
/// Fields keep insertion order when serialized. Each field stands on its
/// own; none of them refers to another.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CompositeResult {
    fields: Map<String, Value>,
}

impl CompositeResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any previous value under the same name.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }
}

#[cfg(test)]
impl CompositeResult {
    /// Returns the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the string stored under `name`, if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Returns true if a field named `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
