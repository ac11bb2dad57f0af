//! Coffee-specific wiring over the generic engine.

pub mod entity;

use std::sync::Arc;

use crate::framework::{EntityResolver, EntityService, Transport};
use crate::model::Coffee;
use crate::nav::Navigator;

pub type CoffeeService = EntityService<Coffee>;
pub type CoffeeResolver = EntityResolver<Coffee>;

/// Creates the coffee service and its route resolver.
pub fn new(
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
) -> (CoffeeService, CoffeeResolver) {
    let service = EntityService::new(transport);
    let resolver = EntityResolver::new(service.clone(), navigator);
    (service, resolver)
}
