//! Zelenomap backend library modules.
//!
//! The layout follows a hexagonal arrangement: `domain` holds the entities
//! and ports, `inbound` the HTTP adapter, `outbound` the store adapters.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seed;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-scoped tracing middleware.
pub use middleware::trace::Trace;
