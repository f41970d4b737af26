//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LocationRepository, UserRepository};
use crate::outbound::memory::{InMemoryLocationRepository, InMemoryUserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Location record store.
    pub locations: Arc<dyn LocationRepository>,
    /// User record store; no endpoint exposes it yet.
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state over explicit port implementations.
    #[must_use]
    pub fn new(locations: Arc<dyn LocationRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { locations, users }
    }

    /// Construct state backed by fresh in-memory stores.
    ///
    /// Used by the server bootstrap and by tests; seeding is the caller's
    /// responsibility.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryLocationRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }
}
