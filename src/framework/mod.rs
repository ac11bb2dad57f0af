//! Generic engine for the entity CRUD lifecycle.
//!
//! This module provides the core building blocks shared by every record kind:
//! the descriptor trait, the REST service, the route resolver, and the
//! transport seam they all talk through.
//!
//! # Main Components
//!
//! - [`RestEntity`] - Trait a record kind implements to be managed by the engine
//! - [`EntityService`] - Generic CRUD service over the REST backend
//! - [`EntityResolver`] - Route-activation prefetch with not-found redirect
//! - [`Transport`] / [`HttpTransport`] - The HTTP seam and its production impl
//! - [`ServiceError`] - Common error taxonomy
//!
//! # Testing
//!
//! See [`mock`] for scripting the transport and recording navigation without
//! a backend or a router.

pub mod entity;
pub mod error;
pub mod mock;
pub mod resolver;
pub mod service;
pub mod transport;

// Re-export core types for convenience
pub use entity::RestEntity;
pub use error::ServiceError;
pub use resolver::EntityResolver;
pub use service::{EntityService, QueryResponse};
pub use transport::{HttpTransport, Method, RestRequest, RestResponse, Transport, TransportError};
