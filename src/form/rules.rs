//! Constraint helpers for declarative per-field validation.
//!
//! Each helper checks one constraint against one optional field value and
//! yields a [`FieldError`] on violation. A record kind's `validate` is a
//! flat list of these calls:
//!
//! ```ignore
//! fn validate(&self) -> Vec<FieldError> {
//!     [
//!         rules::min_length("name", self.name.as_deref(), 10),
//!         rules::max_length("name", self.name.as_deref(), 50),
//!         rules::min_value("price", self.price, 5.0),
//!         rules::max_value("price", self.price, 10.0),
//!     ]
//!     .into_iter()
//!     .flatten()
//!     .collect()
//! }
//! ```

use super::FieldError;

/// String must be at least `min` characters. Unset passes.
pub fn min_length(field: &'static str, value: Option<&str>, min: usize) -> Option<FieldError> {
    match value {
        Some(s) if s.chars().count() < min => Some(FieldError::new(field, "minlength")),
        _ => None,
    }
}

/// String must be at most `max` characters. Unset passes.
pub fn max_length(field: &'static str, value: Option<&str>, max: usize) -> Option<FieldError> {
    match value {
        Some(s) if s.chars().count() > max => Some(FieldError::new(field, "maxlength")),
        _ => None,
    }
}

/// Number must be at least `min`. Unset passes.
pub fn min_value(field: &'static str, value: Option<f64>, min: f64) -> Option<FieldError> {
    match value {
        Some(n) if n < min => Some(FieldError::new(field, "min")),
        _ => None,
    }
}

/// Number must be at most `max`. Unset passes.
pub fn max_value(field: &'static str, value: Option<f64>, max: f64) -> Option<FieldError> {
    match value {
        Some(n) if n > max => Some(FieldError::new(field, "max")),
        _ => None,
    }
}
