//! In-memory adapters backing the repository ports.
//!
//! Collections live for the lifetime of the process and reset on restart.
//! The locks make concurrent access safe even though the deployment handles
//! one request at a time; poisoned locks are recovered rather than panicking
//! because the guarded data stays consistent across these short critical
//! sections.

mod locations;
mod users;

pub use locations::InMemoryLocationRepository;
pub use users::InMemoryUserRepository;
