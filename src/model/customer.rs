use serde::{Deserialize, Serialize};

/// A customer record as the backend serves it.
///
/// `phone_number` crosses the wire as `phoneNumber`; the backend speaks
/// camelCase JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
}

impl Customer {
    /// Creates an unsaved customer with the given attributes.
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            phone_number: Some(phone_number.into()),
        }
    }
}
