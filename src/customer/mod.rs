//! Customer-specific wiring over the generic engine.

pub mod entity;

use std::sync::Arc;

use crate::framework::{EntityResolver, EntityService, Transport};
use crate::model::Customer;
use crate::nav::Navigator;

pub type CustomerService = EntityService<Customer>;
pub type CustomerResolver = EntityResolver<Customer>;

/// Creates the customer service and its route resolver.
pub fn new(
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
) -> (CustomerService, CustomerResolver) {
    let service = EntityService::new(transport);
    let resolver = EntityResolver::new(service.clone(), navigator);
    (service, resolver)
}
