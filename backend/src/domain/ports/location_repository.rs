//! Port abstraction for location persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Location, LocationPatch, NewLocation};

/// Persistence errors raised by location repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationStoreError {
    /// Query or mutation failed during execution.
    #[error("location store query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl LocationStoreError {
    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Keyed collection of location records with store-assigned identifiers.
///
/// Listing order is unspecified; callers must not rely on it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Return every stored location.
    async fn list(&self) -> Result<Vec<Location>, LocationStoreError>;

    /// Fetch a location by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Location>, LocationStoreError>;

    /// Assign a fresh identifier and store the record, returning it in full.
    async fn create(&self, fields: NewLocation) -> Result<Location, LocationStoreError>;

    /// Merge the supplied fields onto an existing record.
    ///
    /// Returns `None` when no record carries `id`.
    async fn update(
        &self,
        id: &str,
        patch: LocationPatch,
    ) -> Result<Option<Location>, LocationStoreError>;

    /// Remove a record, reporting whether one existed.
    async fn delete(&self, id: &str) -> Result<bool, LocationStoreError>;
}
