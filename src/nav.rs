//! The navigation seam.
//!
//! The client never navigates on its own; it asks the embedding
//! application's router through this trait. Production wires whatever router
//! the host has; tests use
//! [`RecordingNavigator`](crate::framework::mock::RecordingNavigator).

/// External navigation collaborator.
pub trait Navigator: Send + Sync {
    /// Return to the previous view (after a successful save, or from a
    /// detail view).
    fn back(&self);

    /// Redirect to the fixed not-found route.
    fn go_to_not_found(&self);
}
