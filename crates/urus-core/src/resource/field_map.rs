//! Validated field container for resource records.
//!
//! This module provides [`FieldMap`], a type that guarantees a record's
//! fields form a JSON object. Interpretation of individual fields is left
//! to the resource schema.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, InvalidInputError};

/// A validated set of record fields.
///
/// This type guarantees the value is a JSON object. The invariant is
/// enforced at construction and deserialization time, so downstream code
/// can index fields without re-checking the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap(Value);

impl FieldMap {
    /// Create a new `FieldMap` from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object.
    pub fn new(value: Value) -> Result<Self, Error> {
        if !value.is_object() {
            return Err(Error::InvalidInput(InvalidInputError::FieldMap {
                reason: "record fields must be a JSON object".to_string(),
            }));
        }
        Ok(Self(value))
    }

    /// Create an empty field map.
    pub fn empty() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }

    /// Get a field value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Get a field as a string slice, if present and string-valued.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Get a field as a boolean, if present and boolean-valued.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.0.get(name).and_then(Value::as_bool)
    }

    /// Get a reference to the inner JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume and return the inner JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Serialize for FieldMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        FieldMap::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_object() {
        let fields = FieldMap::new(json!({
            "name": "Spring banner",
            "description": "front page"
        }))
        .unwrap();

        assert_eq!(fields.get_str("name"), Some("Spring banner"));
        assert_eq!(fields.get_str("missing"), None);
    }

    #[test]
    fn bool_accessor() {
        let fields = FieldMap::new(json!({"isFeatured": true})).unwrap();
        assert_eq!(fields.get_bool("isFeatured"), Some(true));
        assert_eq!(fields.get_bool("title"), None);
    }

    #[test]
    fn not_object_fails() {
        assert!(FieldMap::new(json!([1, 2, 3])).is_err());
        assert!(FieldMap::new(json!(null)).is_err());
        assert!(FieldMap::new(json!("string")).is_err());
    }

    #[test]
    fn deserialize_invalid_fails() {
        let result: Result<FieldMap, _> = serde_json::from_str("[1,2]");
        assert!(result.is_err());
    }

    #[test]
    fn serialize_roundtrip() {
        let original = json!({"title": "Open day", "type": "Event"});
        let fields = FieldMap::new(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&fields).unwrap(), original);
    }
}
