//! The entity-kind descriptor trait.
//!
//! # Architecture Note
//! The original admin client repeated the whole list/update/delete/resolve
//! lifecycle once per record kind, as near-identical copies. By defining a
//! contract ([`RestEntity`]) that every record kind (Coffee, Customer, ...)
//! must satisfy, we write the service, resolver, and view logic *once* and
//! instantiate it per kind via configuration instead of code duplication.
//!
//! A `RestEntity` is the descriptor for one kind: its REST collection path,
//! its identity extraction, its blank-record template for new-entity forms,
//! and its declarative validation rules.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::form::FieldError;

/// Trait implemented by every record kind managed by the generic engine.
///
/// # Identity
/// Identity is an optional numeric id: absent means the record is new and
/// unsaved, present means it exists server-side. Everything that routes a
/// record (create vs. update, row keys, collection merging) keys off this
/// single method.
pub trait RestEntity:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Plural collection segment under `api/` (e.g. `"coffees"`).
    const RESOURCE: &'static str;

    /// Server-assigned identity, if the record has been persisted.
    fn id(&self) -> Option<i64>;

    /// A freshly constructed empty record, used as the new-entity form
    /// template and as the base every save merges form values onto.
    fn blank() -> Self;

    /// Declarative per-field constraint check. Unset fields always pass;
    /// an empty result means the record may be submitted.
    fn validate(&self) -> Vec<FieldError>;
}
