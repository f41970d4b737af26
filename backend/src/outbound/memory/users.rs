//! In-memory user repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{UserRepository, UserStoreError};
use crate::domain::{NewUser, User};

/// Process-lifetime user store keyed by generated UUID strings.
///
/// Duplicate usernames are not rejected; see [`crate::domain::user`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserStoreError> {
        let guard = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(guard.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError> {
        let guard = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(guard.values().find(|user| user.username == username).cloned())
    }

    async fn create(&self, fields: NewUser) -> Result<User, UserStoreError> {
        let id = Uuid::new_v4().to_string();
        let user = User::from_new(id.clone(), fields);
        let mut guard = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.insert(id, user.clone());
        Ok(user)
    }
}
