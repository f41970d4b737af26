//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod locations;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Assemble the `/api` scope with every location endpoint registered.
///
/// Shared between the server bootstrap and the integration tests so both
/// exercise identical routing.
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .service(locations::list_locations)
        .service(locations::get_location)
        .service(locations::create_location)
        .service(locations::update_location)
        .service(locations::delete_location)
}
