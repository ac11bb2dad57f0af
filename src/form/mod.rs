//! Declarative form state and per-field validation.
//!
//! Validation is a pure client-side gate: a record that fails its
//! constraints is never handed to the service layer. Constraints are
//! declared per field by each record kind's
//! [`RestEntity::validate`](crate::framework::RestEntity::validate)
//! implementation, built from the rule helpers in [`rules`]. Unset fields
//! always pass; every attribute in this client is nullable.

pub mod rules;

use crate::framework::entity::RestEntity;

/// One failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field the constraint is declared on.
    pub field: &'static str,
    /// The constraint that failed, e.g. `minlength`.
    pub constraint: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, constraint: &'static str) -> Self {
        Self { field, constraint }
    }
}

/// The editable working copy a record is bound to while a form is open.
///
/// Patching copies the resolved record's fields in; mutation during editing
/// goes through [`EditForm::edit`]; saving reads the value back out merged
/// onto a blank template.
#[derive(Debug, Clone)]
pub struct EditForm<T: RestEntity> {
    value: T,
}

impl<T: RestEntity> Default for EditForm<T> {
    fn default() -> Self {
        Self { value: T::blank() }
    }
}

impl<T: RestEntity> EditForm<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the record's fields into the form. Fields the record does not
    /// carry end up at their blank defaults.
    pub fn patch_value(&mut self, record: &T) {
        self.value = record.clone();
    }

    /// Mutates the working copy, as field bindings would during editing.
    pub fn edit(&mut self, change: impl FnOnce(&mut T)) {
        change(&mut self.value);
    }

    /// The record built from current form values merged onto a blank
    /// template.
    pub fn raw_value(&self) -> T {
        self.value.clone()
    }

    /// Every failed constraint, in field declaration order.
    pub fn errors(&self) -> Vec<FieldError> {
        self.value.validate()
    }

    /// Whether submission may proceed.
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}
