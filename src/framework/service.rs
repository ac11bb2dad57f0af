//! The generic entity service.
//!
//! # Architecture Note
//! This is the "engine" half of the admin client. It owns no state beyond a
//! handle to the [`Transport`]; every operation is a single request/response
//! exchange with the backend, routed by the [`RestEntity`] descriptor.
//!
//! The same struct serves every record kind. `EntityService<Coffee>` and
//! `EntityService<Customer>` differ only in the descriptor, which is the
//! whole point: the lifecycle is written once.

use std::collections::HashMap;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::framework::entity::RestEntity;
use crate::framework::error::ServiceError;
use crate::framework::transport::{Method, RestRequest, RestResponse, Transport};

/// A collection response: the records plus the transport metadata that rode
/// along with them (pagination headers and the like, opaque to this layer).
#[derive(Debug, Clone)]
pub struct QueryResponse<T> {
    pub records: Vec<T>,
    pub headers: HashMap<String, String>,
}

/// Generic CRUD service for one record kind.
pub struct EntityService<T: RestEntity> {
    transport: Arc<dyn Transport>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: RestEntity> Clone for EntityService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            _kind: PhantomData,
        }
    }
}

impl<T: RestEntity> EntityService<T> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _kind: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("api/{}", T::RESOURCE)
    }

    fn record_path(id: i64) -> String {
        format!("api/{}/{}", T::RESOURCE, id)
    }

    /// Create a new record. The record must not carry an id; the body is sent
    /// minus the id field and the server-assigned full record is returned.
    pub async fn create(&self, record: &T) -> Result<T, ServiceError> {
        if record.id().is_some() {
            warn!(entity_type = T::RESOURCE, "Create rejected: id already set");
            return Err(ServiceError::IdOnCreate);
        }
        debug!(entity_type = T::RESOURCE, ?record, "Create");

        let body = serde_json::to_value(record).map_err(|e| ServiceError::Decode(e.to_string()))?;
        let request = RestRequest::new(Method::Post, Self::collection_path()).with_body(body);
        let response = self.transport.send(request).await?;

        let created = Self::expect_record(response, Self::collection_path())?;
        info!(entity_type = T::RESOURCE, id = ?created.id(), "Created");
        Ok(created)
    }

    /// Replace an existing record. The record must carry an id.
    pub async fn update(&self, record: &T) -> Result<T, ServiceError> {
        let id = record.id().ok_or(ServiceError::MissingId("update"))?;
        debug!(entity_type = T::RESOURCE, %id, ?record, "Update");

        let body = serde_json::to_value(record).map_err(|e| ServiceError::Decode(e.to_string()))?;
        let request = RestRequest::new(Method::Put, Self::record_path(id)).with_body(body);
        let response = self.transport.send(request).await?;

        let updated = Self::expect_record(response, Self::record_path(id))?;
        info!(entity_type = T::RESOURCE, %id, "Updated");
        Ok(updated)
    }

    /// Patch an existing record, sending only the fields the patch carries.
    /// The patch must carry an id.
    pub async fn partial_update(&self, patch: &T) -> Result<T, ServiceError> {
        let id = patch.id().ok_or(ServiceError::MissingId("partial_update"))?;
        debug!(entity_type = T::RESOURCE, %id, ?patch, "PartialUpdate");

        let body = serde_json::to_value(patch).map_err(|e| ServiceError::Decode(e.to_string()))?;
        let request = RestRequest::new(Method::Patch, Self::record_path(id)).with_body(body);
        let response = self.transport.send(request).await?;

        let updated = Self::expect_record(response, Self::record_path(id))?;
        info!(entity_type = T::RESOURCE, %id, "Patched");
        Ok(updated)
    }

    /// Fetch one record. A 404 or an empty success body both mean "not
    /// found" and surface as `Ok(None)`, not as an error.
    pub async fn find(&self, id: i64) -> Result<Option<T>, ServiceError> {
        let path = Self::record_path(id);
        let response = self
            .transport
            .send(RestRequest::new(Method::Get, path.clone()))
            .await?;

        if response.status == 404 {
            debug!(entity_type = T::RESOURCE, %id, found = false, "Find");
            return Ok(None);
        }
        if !response.is_success() {
            warn!(entity_type = T::RESOURCE, %id, status = response.status, "Find failed");
            return Err(ServiceError::UnexpectedStatus {
                status: response.status,
                path,
            });
        }

        match response.body {
            Some(value) => {
                let record: T = serde_json::from_value(value)
                    .map_err(|e| ServiceError::Decode(e.to_string()))?;
                debug!(entity_type = T::RESOURCE, %id, found = true, "Find");
                Ok(Some(record))
            }
            None => {
                debug!(entity_type = T::RESOURCE, %id, found = false, "Find");
                Ok(None)
            }
        }
    }

    /// Fetch the full collection plus its transport metadata.
    pub async fn query(&self) -> Result<QueryResponse<T>, ServiceError> {
        let path = Self::collection_path();
        let response = self
            .transport
            .send(RestRequest::new(Method::Get, path.clone()))
            .await?;

        if !response.is_success() {
            warn!(entity_type = T::RESOURCE, status = response.status, "Query failed");
            return Err(ServiceError::UnexpectedStatus {
                status: response.status,
                path,
            });
        }

        let value = response
            .body
            .ok_or_else(|| ServiceError::Decode("empty collection body".into()))?;
        let records: Vec<T> =
            serde_json::from_value(value).map_err(|e| ServiceError::Decode(e.to_string()))?;
        debug!(entity_type = T::RESOURCE, size = records.len(), "Query");

        Ok(QueryResponse {
            records,
            headers: response.headers,
        })
    }

    /// Remove one record.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let path = Self::record_path(id);
        let response = self
            .transport
            .send(RestRequest::new(Method::Delete, path.clone()))
            .await?;

        if !response.is_success() {
            warn!(entity_type = T::RESOURCE, %id, status = response.status, "Delete failed");
            return Err(ServiceError::UnexpectedStatus {
                status: response.status,
                path,
            });
        }
        info!(entity_type = T::RESOURCE, %id, "Deleted");
        Ok(())
    }

    /// Append every candidate whose id is not already present among the
    /// collection's entries. Pure collection helper, no I/O.
    ///
    /// Order of existing elements is preserved; appended candidates follow
    /// input order, first seen wins. Candidates without an id never match
    /// anything and are always appended. `None` candidates are skipped.
    pub fn merge_unique(
        collection: Vec<T>,
        candidates: impl IntoIterator<Item = Option<T>>,
    ) -> Vec<T> {
        let mut seen: HashSet<i64> = collection.iter().filter_map(RestEntity::id).collect();
        let mut merged = collection;

        for candidate in candidates.into_iter().flatten() {
            match candidate.id() {
                Some(id) => {
                    if seen.insert(id) {
                        merged.push(candidate);
                    }
                }
                // An unsaved record can never collide with anything.
                None => merged.push(candidate),
            }
        }
        merged
    }

    fn expect_record(response: RestResponse, path: String) -> Result<T, ServiceError> {
        if !response.is_success() {
            return Err(ServiceError::UnexpectedStatus {
                status: response.status,
                path,
            });
        }
        let value = response
            .body
            .ok_or_else(|| ServiceError::Decode("expected a record body".into()))?;
        serde_json::from_value(value).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockTransport;
    use crate::model::Coffee;
    use serde_json::json;

    fn service(transport: &Arc<MockTransport>) -> EntityService<Coffee> {
        EntityService::new(transport.clone() as Arc<dyn Transport>)
    }

    fn saved(id: i64) -> Coffee {
        Coffee {
            id: Some(id),
            ..Coffee::default()
        }
    }

    // --- Identity invariants ---

    #[tokio::test]
    async fn create_rejects_a_record_that_already_has_an_id() {
        let transport = Arc::new(MockTransport::new());
        let result = service(&transport).create(&saved(1)).await;
        assert_eq!(result, Err(ServiceError::IdOnCreate));
        transport.verify();
    }

    #[tokio::test]
    async fn update_rejects_a_record_without_an_id() {
        let transport = Arc::new(MockTransport::new());
        let result = service(&transport).update(&Coffee::default()).await;
        assert_eq!(result, Err(ServiceError::MissingId("update")));
        transport.verify();
    }

    #[tokio::test]
    async fn partial_update_rejects_a_patch_without_an_id() {
        let transport = Arc::new(MockTransport::new());
        let result = service(&transport).partial_update(&Coffee::default()).await;
        assert_eq!(result, Err(ServiceError::MissingId("partial_update")));
        transport.verify();
    }

    // --- Wire exchanges ---

    #[tokio::test]
    async fn create_posts_to_the_collection_and_returns_the_assigned_record() {
        let transport = Arc::new(MockTransport::new());
        transport
            .expect(Method::Post, "api/coffees")
            .return_json_status(201, json!({ "id": 5, "name": "House blend, medium", "price": 6.0 }));

        let created = service(&transport)
            .create(&Coffee::new("House blend, medium", 6.0))
            .await
            .unwrap();
        assert_eq!(created.id, Some(5));
        transport.verify();
    }

    #[tokio::test]
    async fn partial_update_patches_the_record_path() {
        let transport = Arc::new(MockTransport::new());
        transport
            .expect(Method::Patch, "api/coffees/5")
            .return_json(json!({ "id": 5, "name": "Dark roast espresso", "price": 6.0 }));

        let patch = Coffee {
            id: Some(5),
            name: Some("Dark roast espresso".into()),
            price: None,
        };
        let updated = service(&transport).partial_update(&patch).await.unwrap();
        assert_eq!(updated.name.as_deref(), Some("Dark roast espresso"));
        transport.verify();
    }

    #[tokio::test]
    async fn find_returns_the_record_when_the_body_is_present() {
        let transport = Arc::new(MockTransport::new());
        transport
            .expect(Method::Get, "api/coffees/123")
            .return_json(json!({ "id": 123 }));

        let found = service(&transport).find(123).await.unwrap();
        assert_eq!(found, Some(saved(123)));
    }

    #[tokio::test]
    async fn find_maps_an_empty_success_body_to_none() {
        let transport = Arc::new(MockTransport::new());
        transport
            .expect(Method::Get, "api/coffees/123")
            .return_status(200);

        assert_eq!(service(&transport).find(123).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_maps_404_to_none() {
        let transport = Arc::new(MockTransport::new());
        transport
            .expect(Method::Get, "api/coffees/123")
            .return_status(404);

        assert_eq!(service(&transport).find(123).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_surfaces_other_statuses_as_errors() {
        let transport = Arc::new(MockTransport::new());
        transport
            .expect(Method::Get, "api/coffees/123")
            .return_status(500);

        let result = service(&transport).find(123).await;
        assert_eq!(
            result,
            Err(ServiceError::UnexpectedStatus {
                status: 500,
                path: "api/coffees/123".into(),
            })
        );
    }

    #[tokio::test]
    async fn query_returns_records_and_passes_headers_through() {
        let transport = Arc::new(MockTransport::new());
        transport
            .expect(Method::Get, "api/coffees")
            .header("x-total-count", "2")
            .return_json(json!([{ "id": 1 }, { "id": 2 }]));

        let response = service(&transport).query().await.unwrap();
        assert_eq!(response.records, vec![saved(1), saved(2)]);
        assert_eq!(response.headers.get("x-total-count").map(String::as_str), Some("2"));
    }

    #[tokio::test]
    async fn delete_accepts_204() {
        let transport = Arc::new(MockTransport::new());
        transport
            .expect(Method::Delete, "api/coffees/7")
            .return_status(204);

        service(&transport).delete(7).await.unwrap();
        transport.verify();
    }

    // --- merge_unique ---

    #[test]
    fn merge_adds_a_record_to_an_empty_collection() {
        let merged = EntityService::<Coffee>::merge_unique(vec![], [Some(saved(123))]);
        assert_eq!(merged, vec![saved(123)]);
    }

    #[test]
    fn merge_skips_a_record_the_collection_already_contains() {
        let merged =
            EntityService::<Coffee>::merge_unique(vec![saved(123), saved(456)], [Some(saved(123))]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_appends_a_record_the_collection_is_missing() {
        let merged = EntityService::<Coffee>::merge_unique(vec![saved(456)], [Some(saved(123))]);
        assert_eq!(merged, vec![saved(456), saved(123)]);
    }

    #[test]
    fn merge_keeps_appended_candidates_unique() {
        let merged = EntityService::<Coffee>::merge_unique(
            vec![saved(123)],
            [Some(saved(123)), Some(saved(456)), Some(saved(2184))],
        );
        assert_eq!(merged, vec![saved(123), saved(456), saved(2184)]);
    }

    #[test]
    fn merge_first_seen_candidate_wins() {
        let merged =
            EntityService::<Coffee>::merge_unique(vec![], [Some(saved(9)), Some(saved(9))]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn merge_skips_absent_candidates() {
        let merged =
            EntityService::<Coffee>::merge_unique(vec![], [None, Some(saved(123)), None]);
        assert_eq!(merged, vec![saved(123)]);
    }

    #[test]
    fn merge_with_only_absent_candidates_returns_the_collection_unchanged() {
        let collection = vec![saved(123)];
        let merged = EntityService::<Coffee>::merge_unique(collection.clone(), [None, None]);
        assert_eq!(merged, collection);
    }

    #[test]
    fn merge_always_appends_records_without_an_id() {
        let unsaved = Coffee::new("House blend, medium", 6.0);
        let merged = EntityService::<Coffee>::merge_unique(
            vec![saved(1)],
            [Some(unsaved.clone()), Some(unsaved.clone())],
        );
        assert_eq!(merged.len(), 3);
    }
}
