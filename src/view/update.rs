//! Edit/create form view.

use std::sync::Arc;

use tracing::instrument;

use crate::form::EditForm;
use crate::framework::{EntityService, RestEntity, ServiceError};
use crate::nav::Navigator;

/// Why a save attempt did or did not go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was persisted and back-navigation was triggered.
    Saved,
    /// The form failed validation; nothing reached the network.
    Invalid,
    /// A save was already in flight; this attempt was dropped.
    AlreadySaving,
}

/// The update component: binds a record to a form and submits create or
/// update, routed by identity.
pub struct UpdateView<T: RestEntity> {
    service: EntityService<T>,
    navigator: Arc<dyn Navigator>,
    pub form: EditForm<T>,
    pub is_saving: bool,
}

impl<T: RestEntity> UpdateView<T> {
    pub fn new(service: EntityService<T>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            service,
            navigator,
            form: EditForm::new(),
            is_saving: false,
        }
    }

    /// Binds the record handed over through route data into the form.
    pub fn on_init(&mut self, record: &T) {
        self.form.patch_value(record);
    }

    /// Submits the form. A record with an id goes to update, a record
    /// without one goes to create. Success clears the saving flag and
    /// navigates back; failure clears the flag and returns the error with
    /// no navigation and no retry.
    #[instrument(skip(self), fields(entity_type = T::RESOURCE))]
    pub async fn save(&mut self) -> Result<SaveOutcome, ServiceError> {
        if self.is_saving {
            return Ok(SaveOutcome::AlreadySaving);
        }
        if !self.form.is_valid() {
            return Ok(SaveOutcome::Invalid);
        }

        self.is_saving = true;
        let record = self.form.raw_value();
        let result = if record.id().is_some() {
            self.service.update(&record).await
        } else {
            self.service.create(&record).await
        };
        self.is_saving = false;

        match result {
            Ok(_) => {
                self.navigator.back();
                Ok(SaveOutcome::Saved)
            }
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{MockTransport, NavEvent, RecordingNavigator};
    use crate::framework::{Method, Transport, TransportError};
    use crate::model::Coffee;
    use serde_json::json;

    fn update_view(
        transport: &Arc<MockTransport>,
        navigator: &Arc<RecordingNavigator>,
    ) -> UpdateView<Coffee> {
        UpdateView::new(
            EntityService::new(transport.clone() as Arc<dyn Transport>),
            navigator.clone() as Arc<dyn Navigator>,
        )
    }

    #[tokio::test]
    async fn record_without_id_goes_to_create() {
        let transport = Arc::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());
        transport
            .expect(Method::Post, "api/coffees")
            .return_json_status(201, json!({ "id": 9, "name": "House blend, medium", "price": 6.0 }));

        let mut view = update_view(&transport, &navigator);
        view.on_init(&Coffee::new("House blend, medium", 6.0));

        assert_eq!(view.save().await.unwrap(), SaveOutcome::Saved);
        assert!(!view.is_saving);
        assert_eq!(navigator.events(), vec![NavEvent::Back]);
        transport.verify();
    }

    #[tokio::test]
    async fn record_with_id_goes_to_update() {
        let transport = Arc::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());
        transport
            .expect(Method::Put, "api/coffees/9")
            .return_json(json!({ "id": 9, "name": "House blend, medium", "price": 6.0 }));

        let mut view = update_view(&transport, &navigator);
        view.on_init(&Coffee {
            id: Some(9),
            ..Coffee::new("House blend, medium", 6.0)
        });

        assert_eq!(view.save().await.unwrap(), SaveOutcome::Saved);
        assert_eq!(navigator.events(), vec![NavEvent::Back]);
        transport.verify();
    }

    #[tokio::test]
    async fn failed_save_clears_the_flag_and_does_not_navigate() {
        let transport = Arc::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());
        transport
            .expect(Method::Post, "api/coffees")
            .return_err(TransportError::Network("connection refused".into()));

        let mut view = update_view(&transport, &navigator);
        view.on_init(&Coffee::new("House blend, medium", 6.0));

        let result = view.save().await;
        assert!(matches!(result, Err(ServiceError::Transport(_))));
        assert!(!view.is_saving);
        assert!(navigator.events().is_empty());
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_network() {
        let transport = Arc::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());

        let mut view = update_view(&transport, &navigator);
        view.on_init(&Coffee::new("short", 6.0));

        assert_eq!(view.save().await.unwrap(), SaveOutcome::Invalid);
        assert!(!view.is_saving);
        assert!(navigator.events().is_empty());
        transport.verify();
    }

    #[tokio::test]
    async fn in_flight_save_drops_a_second_attempt() {
        let transport = Arc::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut view = update_view(&transport, &navigator);
        view.is_saving = true;

        assert_eq!(view.save().await.unwrap(), SaveOutcome::AlreadySaving);
        transport.verify();
    }

    #[tokio::test]
    async fn form_edits_flow_into_the_saved_record() {
        let transport = Arc::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());
        transport
            .expect(Method::Put, "api/coffees/9")
            .return_json(json!({ "id": 9, "name": "Dark roast espresso", "price": 8.0 }));

        let mut view = update_view(&transport, &navigator);
        view.on_init(&Coffee {
            id: Some(9),
            ..Coffee::new("House blend, medium", 6.0)
        });
        view.form.edit(|coffee| {
            coffee.name = Some("Dark roast espresso".into());
            coffee.price = Some(8.0);
        });

        assert_eq!(view.save().await.unwrap(), SaveOutcome::Saved);
        transport.verify();
    }
}
