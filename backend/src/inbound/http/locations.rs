//! Locations API handlers.
//!
//! ```text
//! GET    /api/locations
//! GET    /api/locations/{id}
//! POST   /api/locations
//! PATCH  /api/locations/{id}
//! DELETE /api/locations/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::LocationStoreError;
use crate::domain::{Error, Location, LocationPatch, LocationStatus, NewLocation};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    double_option, optional_status, optional_text, require_number, require_text,
};
use crate::inbound::http::ApiResult;

/// Wire representation of a stored location.
///
/// `description` is serialised as an explicit `null` when absent, matching
/// the published JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    /// Opaque unique identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Display title.
    #[schema(example = "Городской парк")]
    pub title: String,
    /// Street address.
    #[schema(example = "ул. Парковая, 1")]
    pub address: String,
    /// Category text.
    #[serde(rename = "type")]
    #[schema(example = "Парк")]
    pub kind: String,
    /// Lifecycle status, `active` or `inactive`.
    #[schema(example = "active")]
    pub status: String,
    /// Optional description, `null` when absent.
    pub description: Option<String>,
    /// Latitude in WGS84.
    #[schema(example = 56.125)]
    pub lat: f64,
    /// Longitude in WGS84.
    #[schema(example = 94.555)]
    pub lng: f64,
}

impl From<Location> for LocationDto {
    fn from(value: Location) -> Self {
        Self {
            id: value.id,
            title: value.title,
            address: value.address,
            kind: value.kind,
            status: value.status.as_str().to_owned(),
            description: value.description,
            lat: value.lat,
            lng: value.lng,
        }
    }
}

/// Create request body for `POST /api/locations`.
///
/// Every field deserialises as optional so validation can report precise
/// field-level failures instead of a generic deserialisation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateLocationRequest {
    /// Display title; required.
    pub title: Option<String>,
    /// Street address; required.
    pub address: Option<String>,
    /// Category text; required.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Lifecycle status; defaults to `active`.
    pub status: Option<String>,
    /// Optional description; blank values are stored as `null`.
    pub description: Option<String>,
    /// Latitude; required.
    pub lat: Option<f64>,
    /// Longitude; required.
    pub lng: Option<f64>,
}

impl CreateLocationRequest {
    fn into_new_location(self) -> Result<NewLocation, Error> {
        Ok(NewLocation {
            title: require_text("title", self.title)?,
            address: require_text("address", self.address)?,
            kind: require_text("type", self.kind)?,
            status: optional_status("status", self.status)?.unwrap_or(LocationStatus::Active),
            // Blank descriptions collapse to null, as the original data
            // pipeline did.
            description: self
                .description
                .filter(|text| !text.trim().is_empty()),
            lat: require_number("lat", self.lat)?,
            lng: require_number("lng", self.lng)?,
        })
    }
}

/// Patch request body for `PATCH /api/locations/{id}`.
///
/// Any subset of the create fields; supplied fields are validated with the
/// same rules and merged onto the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateLocationRequest {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement address.
    pub address: Option<String>,
    /// Replacement category text.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Replacement status.
    pub status: Option<String>,
    /// Replacement description; an explicit `null` clears the stored value.
    #[serde(default, deserialize_with = "double_option::deserialize")]
    pub description: Option<Option<String>>,
    /// Replacement latitude.
    pub lat: Option<f64>,
    /// Replacement longitude.
    pub lng: Option<f64>,
}

impl UpdateLocationRequest {
    fn into_patch(self) -> Result<LocationPatch, Error> {
        Ok(LocationPatch {
            title: optional_text("title", self.title)?,
            address: optional_text("address", self.address)?,
            kind: optional_text("type", self.kind)?,
            status: optional_status("status", self.status)?,
            description: self.description,
            lat: self.lat,
            lng: self.lng,
        })
    }
}

fn store_failure(err: LocationStoreError) -> Error {
    error!(error = %err, "location store failure");
    Error::internal(format!("location store failed: {err}"))
}

fn location_not_found() -> Error {
    Error::not_found("Location not found")
}

/// List every stored location.
#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "All locations", body = [LocationDto]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["locations"],
    operation_id = "listLocations"
)]
#[get("/locations")]
pub async fn list_locations(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<LocationDto>>> {
    let records = state.locations.list().await.map_err(store_failure)?;
    Ok(web::Json(records.into_iter().map(LocationDto::from).collect()))
}

/// Fetch a single location by identifier.
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    params(("id" = String, Path, description = "Location identifier")),
    responses(
        (status = 200, description = "The location", body = LocationDto),
        (status = 404, description = "Unknown identifier"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["locations"],
    operation_id = "getLocation"
)]
#[get("/locations/{id}")]
pub async fn get_location(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<LocationDto>> {
    let id = path.into_inner();
    let record = state
        .locations
        .find_by_id(&id)
        .await
        .map_err(store_failure)?
        .ok_or_else(location_not_found)?;
    Ok(web::Json(record.into()))
}

/// Create a location, assigning a fresh identifier.
#[utoipa::path(
    post,
    path = "/api/locations",
    request_body = CreateLocationRequest,
    responses(
        (status = 201, description = "Created location", body = LocationDto),
        (status = 400, description = "Validation failure"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["locations"],
    operation_id = "createLocation"
)]
#[post("/locations")]
pub async fn create_location(
    state: web::Data<HttpState>,
    payload: web::Json<CreateLocationRequest>,
) -> ApiResult<HttpResponse> {
    let fields = payload.into_inner().into_new_location()?;
    let created = state.locations.create(fields).await.map_err(store_failure)?;
    Ok(HttpResponse::Created().json(LocationDto::from(created)))
}

/// Merge a partial update onto an existing location.
#[utoipa::path(
    patch,
    path = "/api/locations/{id}",
    params(("id" = String, Path, description = "Location identifier")),
    request_body = UpdateLocationRequest,
    responses(
        (status = 200, description = "Updated location", body = LocationDto),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Unknown identifier"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["locations"],
    operation_id = "updateLocation"
)]
#[patch("/locations/{id}")]
pub async fn update_location(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateLocationRequest>,
) -> ApiResult<web::Json<LocationDto>> {
    let id = path.into_inner();
    let patch = payload.into_inner().into_patch()?;
    let updated = state
        .locations
        .update(&id, patch)
        .await
        .map_err(store_failure)?
        .ok_or_else(location_not_found)?;
    Ok(web::Json(updated.into()))
}

/// Delete a location.
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    params(("id" = String, Path, description = "Location identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown identifier"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["locations"],
    operation_id = "deleteLocation"
)]
#[delete("/locations/{id}")]
pub async fn delete_location(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let existed = state.locations.delete(&id).await.map_err(store_failure)?;
    if existed {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(location_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{LocationStoreError, MockLocationRepository};
    use crate::outbound::memory::InMemoryUserRepository;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn mock_state(locations: MockLocationRepository) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(locations),
            Arc::new(InMemoryUserRepository::new()),
        ))
    }

    #[actix_web::test]
    async fn store_failures_surface_as_redacted_500() {
        let mut repo = MockLocationRepository::new();
        repo.expect_list()
            .returning(|| Err(LocationStoreError::query("disk on fire")));

        let app = test::init_service(
            App::new()
                .app_data(mock_state(repo))
                .service(crate::inbound::http::api_scope()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/locations").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.get("message"), Some(&json!("Internal server error")));
    }

    #[actix_web::test]
    async fn create_rejects_unknown_status() {
        let repo = MockLocationRepository::new();
        let app = test::init_service(
            App::new()
                .app_data(mock_state(repo))
                .service(crate::inbound::http::api_scope()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/locations")
            .set_json(json!({
                "title": "t", "address": "a", "type": "k",
                "status": "paused", "lat": 56.1, "lng": 94.5
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.pointer("/details/field"), Some(&json!("status")));
    }

    #[core::prelude::v1::test]
    fn blank_create_description_collapses_to_null() {
        let request = CreateLocationRequest {
            title: Some("t".to_owned()),
            address: Some("a".to_owned()),
            kind: Some("k".to_owned()),
            description: Some("   ".to_owned()),
            lat: Some(56.1),
            lng: Some(94.5),
            ..CreateLocationRequest::default()
        };
        let fields = request.into_new_location().expect("valid request");
        assert_eq!(fields.description, None);
        assert_eq!(fields.status, LocationStatus::Active);
    }

    #[core::prelude::v1::test]
    fn patch_distinguishes_null_from_absent_description() {
        let with_null: UpdateLocationRequest =
            serde_json::from_value(json!({ "description": null })).expect("deserialise");
        assert_eq!(with_null.description, Some(None));

        let absent: UpdateLocationRequest =
            serde_json::from_value(json!({})).expect("deserialise");
        assert_eq!(absent.description, None);
    }
}
