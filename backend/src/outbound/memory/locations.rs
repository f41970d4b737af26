//! In-memory location repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{LocationRepository, LocationStoreError};
use crate::domain::{Location, LocationPatch, NewLocation};

/// Process-lifetime location store keyed by generated UUID strings.
#[derive(Debug, Default)]
pub struct InMemoryLocationRepository {
    records: RwLock<HashMap<String, Location>>,
}

impl InMemoryLocationRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn list(&self) -> Result<Vec<Location>, LocationStoreError> {
        let guard = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(guard.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Location>, LocationStoreError> {
        let guard = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(guard.get(id).cloned())
    }

    async fn create(&self, fields: NewLocation) -> Result<Location, LocationStoreError> {
        let id = Uuid::new_v4().to_string();
        let location = Location::from_new(id.clone(), fields);
        let mut guard = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.insert(id, location.clone());
        Ok(location)
    }

    async fn update(
        &self,
        id: &str,
        patch: LocationPatch,
    ) -> Result<Option<Location>, LocationStoreError> {
        let mut guard = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(guard.get_mut(id).map(|location| {
            patch.apply_to(location);
            location.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, LocationStoreError> {
        let mut guard = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(guard.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationStatus;
    use rstest::rstest;

    fn fields(title: &str) -> NewLocation {
        NewLocation {
            title: title.to_owned(),
            address: "ул. Парковая, 1".to_owned(),
            kind: "Парк".to_owned(),
            status: LocationStatus::Active,
            description: None,
            lat: 56.125,
            lng: 94.555,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let repo = InMemoryLocationRepository::new();
        let first = repo.create(fields("a")).await.expect("create first");
        let second = repo.create(fields("b")).await.expect("create second");
        assert_ne!(first.id, second.id);
        assert_eq!(repo.list().await.expect("list").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn update_merges_and_returns_record() {
        let repo = InMemoryLocationRepository::new();
        let created = repo.create(fields("a")).await.expect("create");
        let patch = LocationPatch {
            title: Some("b".to_owned()),
            ..LocationPatch::default()
        };
        let updated = repo
            .update(&created.id, patch)
            .await
            .expect("update")
            .expect("record exists");
        assert_eq!(updated.title, "b");
        assert_eq!(updated.address, created.address);
    }

    #[rstest]
    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let repo = InMemoryLocationRepository::new();
        let missing = repo
            .update("nope", LocationPatch::default())
            .await
            .expect("update");
        assert_eq!(missing, None);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_prior_existence() {
        let repo = InMemoryLocationRepository::new();
        let created = repo.create(fields("a")).await.expect("create");
        assert!(repo.delete(&created.id).await.expect("first delete"));
        assert!(!repo.delete(&created.id).await.expect("second delete"));
        assert_eq!(repo.find_by_id(&created.id).await.expect("find"), None);
    }
}
