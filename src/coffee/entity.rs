//! Descriptor implementation for the Coffee record kind.
//!
//! This is what plugs [`Coffee`] into the generic
//! [`EntityService`](crate::framework::EntityService) and
//! [`EntityResolver`](crate::framework::EntityResolver): its collection
//! path, its identity, and its form constraints.

use crate::form::{rules, FieldError};
use crate::framework::RestEntity;
use crate::model::Coffee;

impl RestEntity for Coffee {
    const RESOURCE: &'static str = "coffees";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn blank() -> Self {
        Self::default()
    }

    /// Form constraints: name between 10 and 50 characters, price between
    /// 5 and 10. Unset fields pass.
    fn validate(&self) -> Vec<FieldError> {
        [
            rules::min_length("name", self.name.as_deref(), 10),
            rules::max_length("name", self.name.as_deref(), 50),
            rules::min_value("price", self.price, 5.0),
            rules::max_value("price", self.price, 10.0),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_coffee_is_valid() {
        assert!(Coffee::blank().validate().is_empty());
        assert_eq!(Coffee::blank().id(), None);
    }

    #[test]
    fn name_and_price_constraints_are_reported_per_field() {
        let coffee = Coffee::new("short", 12.0);
        let errors = coffee.validate();
        assert_eq!(
            errors,
            vec![
                FieldError::new("name", "minlength"),
                FieldError::new("price", "max"),
            ]
        );
    }

    #[test]
    fn in_range_coffee_is_valid() {
        let coffee = Coffee::new("Medium roast house blend", 7.5);
        assert!(coffee.validate().is_empty());
    }

    #[test]
    fn create_body_omits_absent_id() {
        let body = serde_json::to_value(Coffee::new("Medium roast house blend", 7.5)).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "Medium roast house blend");
    }

    #[test]
    fn sparse_body_deserializes_with_defaults() {
        let coffee: Coffee = serde_json::from_value(serde_json::json!({ "id": 123 })).unwrap();
        assert_eq!(coffee.id, Some(123));
        assert_eq!(coffee.name, None);
        assert_eq!(coffee.price, None);
    }
}
