use serde::{Deserialize, Serialize};

/// A coffee record as the backend serves it.
///
/// Every attribute is optional: a blank form starts with nothing set, and a
/// patch body carries only the fields it changes. `id` is absent until the
/// server assigns one, and is omitted from request bodies while absent so
/// that create never sends an id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Coffee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl Coffee {
    /// Creates an unsaved coffee with the given attributes.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            price: Some(price),
        }
    }
}
