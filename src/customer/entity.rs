//! Descriptor implementation for the Customer record kind.

use crate::form::FieldError;
use crate::framework::RestEntity;
use crate::model::Customer;

impl RestEntity for Customer {
    const RESOURCE: &'static str = "customers";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn blank() -> Self {
        Self::default()
    }

    /// Customers carry no form constraints.
    fn validate(&self) -> Vec<FieldError> {
        Vec::new()
    }
}
