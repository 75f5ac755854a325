use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single CRM custom field.
///
/// A `None` value and a missing field both mean "not set". An empty string is
/// a value in its own right: the store needs it to erase what was there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Field carrying an explicit null.
    pub fn null(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}
