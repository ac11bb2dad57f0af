//! Delete confirmation dialog.

use tracing::debug;

use crate::framework::{EntityService, RestEntity};

/// How a delete dialog was closed.
///
/// An explicit outcome instead of a loosely-typed sentinel: callers match on
/// the variant rather than comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The record was deleted; the caller should refresh its collection.
    Deleted,
    /// The dialog closed without deleting (cancelled, or the delete failed).
    Cancelled,
}

/// Holds the target record until the user confirms or cancels.
pub struct DeleteDialog<T: RestEntity> {
    service: EntityService<T>,
    pub record: T,
}

impl<T: RestEntity> DeleteDialog<T> {
    pub fn new(service: EntityService<T>, record: T) -> Self {
        Self { service, record }
    }

    /// Deletes the record and closes the dialog. A failed delete closes
    /// without the `Deleted` signal; there is no retry.
    pub async fn confirm_delete(self) -> DialogOutcome {
        let Some(id) = self.record.id() else {
            // An unsaved record has nothing to delete server-side.
            return DialogOutcome::Cancelled;
        };
        match self.service.delete(id).await {
            Ok(()) => DialogOutcome::Deleted,
            Err(error) => {
                debug!(entity_type = T::RESOURCE, %id, %error, "Delete not confirmed");
                DialogOutcome::Cancelled
            }
        }
    }

    /// Closes the dialog without touching the backend.
    pub fn cancel(self) -> DialogOutcome {
        DialogOutcome::Cancelled
    }
}
