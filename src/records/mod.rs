// records/mod.rs
use crate::errors::{GroupError, Result};
use crate::group::Typename;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

pub const DEFAULT_DISCRIMINANT: &str = "__typename";

/// A JSON object whose discriminant field has been checked to hold a string.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    typename: String,
    fields: Map<String, Value>,
}

impl Record {
    /// Builds a record from the `index`th input value, reading the discriminant from `field`.
    pub fn from_value(index: usize, value: Value, field: &str) -> Result<Self> {
        let fields = match value {
            Value::Object(fields) => fields,
            _ => return Err(GroupError::NotAnObject { index }),
        };

        let typename = match fields.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(GroupError::NonStringDiscriminant {
                    index,
                    field: field.to_string(),
                    found: other.to_string(),
                })
            }
            None => {
                return Err(GroupError::MissingDiscriminant {
                    index,
                    field: field.to_string(),
                })
            }
        };

        Ok(Record { typename, fields })
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Typename for Record {
    fn typename(&self) -> &str {
        &self.typename
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
