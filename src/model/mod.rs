//! Pure record structs, one per entity kind managed by the console.

pub mod coffee;
pub mod customer;

pub use coffee::*;
pub use customer::*;
