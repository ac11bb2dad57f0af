//! Route-activation prefetch.
//!
//! Before an edit or detail view activates, its route resolver produces the
//! record the view will bind to. The resolver runs once per activation: it
//! starts resolving and ends resolved, with no intermediate states.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::framework::entity::RestEntity;
use crate::framework::error::ServiceError;
use crate::framework::service::EntityService;
use crate::nav::Navigator;

/// Prefetches a single record (or constructs an empty one) for a route.
pub struct EntityResolver<T: RestEntity> {
    service: EntityService<T>,
    navigator: Arc<dyn Navigator>,
}

impl<T: RestEntity> EntityResolver<T> {
    pub fn new(service: EntityService<T>, navigator: Arc<dyn Navigator>) -> Self {
        Self { service, navigator }
    }

    /// Resolve the record for a route whose `id` parameter may be absent.
    ///
    /// - No `id`: resolves immediately with a blank record; no network call.
    /// - `id` present and the backend returns a body: resolves with it.
    /// - `id` present and the body is empty: redirects to the not-found
    ///   route and resolves with no value.
    /// - Transport failure: propagates to the caller, no local recovery.
    #[instrument(skip(self), fields(entity_type = T::RESOURCE))]
    pub async fn resolve(&self, id: Option<i64>) -> Result<Option<T>, ServiceError> {
        let Some(id) = id else {
            debug!("Resolving blank record");
            return Ok(Some(T::blank()));
        };

        match self.service.find(id).await? {
            Some(record) => Ok(Some(record)),
            None => {
                warn!(%id, "Record not found, redirecting");
                self.navigator.go_to_not_found();
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{MockTransport, NavEvent, RecordingNavigator};
    use crate::framework::transport::{Method, Transport, TransportError};
    use crate::model::Coffee;
    use serde_json::json;

    fn resolver(
        transport: &Arc<MockTransport>,
        navigator: &Arc<RecordingNavigator>,
    ) -> EntityResolver<Coffee> {
        EntityResolver::new(
            EntityService::new(transport.clone() as Arc<dyn Transport>),
            navigator.clone() as Arc<dyn Navigator>,
        )
    }

    #[tokio::test]
    async fn missing_id_resolves_a_blank_record_without_a_request() {
        let transport = Arc::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());

        let resolved = resolver(&transport, &navigator).resolve(None).await.unwrap();

        assert_eq!(resolved, Some(Coffee::blank()));
        assert!(navigator.events().is_empty());
        transport.verify();
    }

    #[tokio::test]
    async fn present_id_resolves_the_found_record() {
        let transport = Arc::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());
        transport
            .expect(Method::Get, "api/coffees/123")
            .return_json(json!({ "id": 123 }));

        let resolved = resolver(&transport, &navigator)
            .resolve(Some(123))
            .await
            .unwrap();

        assert_eq!(resolved.and_then(|c| c.id), Some(123));
        assert!(navigator.events().is_empty());
        transport.verify();
    }

    #[tokio::test]
    async fn empty_body_redirects_to_not_found_and_resolves_nothing() {
        let transport = Arc::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());
        transport
            .expect(Method::Get, "api/coffees/123")
            .return_status(200);

        let resolved = resolver(&transport, &navigator)
            .resolve(Some(123))
            .await
            .unwrap();

        assert_eq!(resolved, None);
        assert_eq!(navigator.events(), vec![NavEvent::NotFound]);
    }

    #[tokio::test]
    async fn transport_failure_propagates_without_a_redirect() {
        let transport = Arc::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());
        transport
            .expect(Method::Get, "api/coffees/123")
            .return_err(TransportError::Network("connection reset".into()));

        let result = resolver(&transport, &navigator).resolve(Some(123)).await;

        assert!(matches!(result, Err(ServiceError::Transport(_))));
        assert!(navigator.events().is_empty());
    }
}
