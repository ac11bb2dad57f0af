//! Error types shared by the generic engine.

use thiserror::Error;

use crate::framework::transport::TransportError;

/// Errors that can occur while driving an entity operation.
///
/// An empty-bodied `find` is *not* an error; it is a valid "not found"
/// response and surfaces as `Ok(None)`. Client-side validation failures never
/// reach the service layer at all; they are gated in the form.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The request failed below the status-code level.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a status the operation does not accept.
    #[error("unexpected status {status} from {path}")]
    UnexpectedStatus { status: u16, path: String },

    /// A success response was missing the record body the operation requires,
    /// or the body did not match the record shape.
    #[error("undecodable response body: {0}")]
    Decode(String),

    /// An update-shaped operation was handed a record that has no identity.
    /// Unsaved records must be routed to create.
    #[error("record has no id; cannot {0}")]
    MissingId(&'static str),

    /// Create was handed a record that already has a server-side identity.
    #[error("a new record cannot already have an id")]
    IdOnCreate,
}
