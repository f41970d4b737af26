//! Backend entry-point: wires the locations REST API, health probes, and
//! OpenAPI docs over an in-memory record store.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use zelenomap_backend::Trace;
use zelenomap_backend::config::ServerSettings;
#[cfg(debug_assertions)]
use zelenomap_backend::doc::ApiDoc;
use zelenomap_backend::inbound::http::health::{HealthState, live, ready};
use zelenomap_backend::inbound::http::state::HttpState;
use zelenomap_backend::inbound::http;
use zelenomap_backend::seed::seed_sample_locations;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServerSettings::load_from_iter(std::env::args_os()).map_err(std::io::Error::other)?;

    let state = HttpState::in_memory();
    seed_sample_locations(state.locations.as_ref())
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(state.clone(), server_health_state.clone()))
        .bind((settings.host(), settings.port))?;

    health_state.mark_ready();
    server.run().await
}

fn build_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(web::Data::new(state))
        .app_data(health_state)
        .wrap(Trace)
        .service(http::api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
