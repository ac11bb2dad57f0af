//! Collection view: loads and displays one kind's records and hosts the
//! delete flow.

use crate::framework::{EntityService, RestEntity};
use crate::view::delete::{DeleteDialog, DialogOutcome};

/// The list component for one record kind.
///
/// `records` stays `None` until the first successful load; a failed load
/// leaves it exactly as it was. Surfacing the failure to a human is the
/// embedding application's alert collaborator, not this layer.
pub struct ListView<T: RestEntity> {
    service: EntityService<T>,
    pub records: Option<Vec<T>>,
    pub is_loading: bool,
}

impl<T: RestEntity> ListView<T> {
    pub fn new(service: EntityService<T>) -> Self {
        Self {
            service,
            records: None,
            is_loading: false,
        }
    }

    /// Replaces the in-memory collection with a fresh fetch.
    pub async fn load_all(&mut self) {
        self.is_loading = true;
        match self.service.query().await {
            Ok(response) => {
                self.records = Some(response.records);
                self.is_loading = false;
            }
            Err(_) => {
                self.is_loading = false;
            }
        }
    }

    /// Stable per-row identity key across reloads.
    pub fn track_id(record: &T) -> Option<i64> {
        record.id()
    }

    /// Opens the confirmation dialog for one record. The caller drives the
    /// dialog and reports how it closed via [`ListView::on_dialog_closed`].
    pub fn open_delete_dialog(&self, record: T) -> DeleteDialog<T> {
        DeleteDialog::new(self.service.clone(), record)
    }

    /// Reacts to the dialog closing. A `Deleted` outcome re-fetches the
    /// whole collection; consistency comes from the reload, not from local
    /// removal.
    pub async fn on_dialog_closed(&mut self, outcome: DialogOutcome) {
        if outcome == DialogOutcome::Deleted {
            self.load_all().await;
        }
    }
}
