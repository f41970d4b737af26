//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct aggregating every HTTP endpoint and the
//! schema wrappers for domain types. The generated specification feeds the
//! Swagger UI served at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::locations::{
    CreateLocationRequest, LocationDto, UpdateLocationRequest,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Zelenomap backend API",
        description = "CRUD interface over Zelenogorsk points of interest and health probes.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::locations::list_locations,
        crate::inbound::http::locations::get_location,
        crate::inbound::http::locations::create_location,
        crate::inbound::http::locations::update_location,
        crate::inbound::http::locations::delete_location,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LocationDto,
        CreateLocationRequest,
        UpdateLocationRequest,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "locations", description = "Operations over point-of-interest records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
