//! User records held by the store.
//!
//! The schema declares an intent that `username` be unique, but no code path
//! enforces it and no endpoint exposes user management. The store-level
//! operations exist so a future registration flow can build on them without
//! reshaping the persistence boundary.

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Opaque unique identifier assigned by the store.
    pub id: String,
    /// Login name; uniqueness is a schema intent, not enforced here.
    pub username: String,
    /// Stored verbatim; hashing is out of scope for this service.
    pub password: String,
}

/// Fields accepted when creating a user. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Login name.
    pub username: String,
    /// Password as supplied.
    pub password: String,
}

impl User {
    /// Materialise a record from creation fields and a store-assigned id.
    #[must_use]
    pub fn from_new(id: impl Into<String>, fields: NewUser) -> Self {
        Self {
            id: id.into(),
            username: fields.username,
            password: fields.password,
        }
    }
}
