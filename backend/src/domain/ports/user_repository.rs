//! Port abstraction for user persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{NewUser, User};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserStoreError {
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl UserStoreError {
    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Keyed collection of user records with store-assigned identifiers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserStoreError>;

    /// Fetch a user by username. Adapters may scan linearly; the collection
    /// is small and nothing enforces uniqueness.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError>;

    /// Assign a fresh identifier and store the record, returning it in full.
    async fn create(&self, fields: NewUser) -> Result<User, UserStoreError>;
}
