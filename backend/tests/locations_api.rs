//! End-to-end tests for the locations REST API over a seeded in-memory store.

use std::collections::HashSet;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use zelenomap_backend::Trace;
use zelenomap_backend::inbound::http::api_scope;
use zelenomap_backend::inbound::http::state::HttpState;
use zelenomap_backend::seed::seed_sample_locations;

async fn seeded_app()
-> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let state = HttpState::in_memory();
    seed_sample_locations(state.locations.as_ref())
        .await
        .expect("seeding succeeds");

    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(api_scope()),
    )
    .await
}

fn valid_create_body() -> Value {
    json!({
        "title": "Кинотеатр",
        "address": "ул. Мира, 7",
        "type": "Культура",
        "lat": 56.121,
        "lng": 94.561
    })
}

async fn list_locations(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
) -> Vec<Value> {
    let res = test::call_service(
        app,
        test::TestRequest::get().uri("/api/locations").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    body.as_array().cloned().expect("array body")
}

#[actix_web::test]
async fn fresh_store_serves_the_five_seed_locations() {
    let app = seeded_app().await;
    let locations = list_locations(&app).await;
    assert_eq!(locations.len(), 5);

    let mut ids = HashSet::new();
    for location in &locations {
        let id = location
            .get("id")
            .and_then(Value::as_str)
            .expect("non-null id");
        assert!(!id.is_empty());
        ids.insert(id.to_owned());

        let lat = location.get("lat").and_then(Value::as_f64).expect("lat");
        let lng = location.get("lng").and_then(Value::as_f64).expect("lng");
        assert!((56.10..=56.14).contains(&lat), "lat {lat}");
        assert!((94.52..=94.60).contains(&lng), "lng {lng}");
        assert_eq!(location.get("status"), Some(&json!("active")));
    }
    assert_eq!(ids.len(), 5, "ids are unique");
}

#[actix_web::test]
async fn create_returns_201_with_a_fresh_unique_id() {
    let app = seeded_app().await;
    let before: HashSet<String> = list_locations(&app)
        .await
        .iter()
        .filter_map(|l| l.get("id").and_then(Value::as_str).map(str::to_owned))
        .collect();

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/locations")
            .set_json(valid_create_body())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(res).await;
    let id = created
        .get("id")
        .and_then(Value::as_str)
        .expect("created id");
    assert!(!before.contains(id), "id must be freshly generated");
    assert_eq!(created.get("title"), Some(&json!("Кинотеатр")));
}

#[actix_web::test]
async fn create_without_description_stores_null() {
    let app = seeded_app().await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/locations")
            .set_json(valid_create_body())
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(res).await;
    assert_eq!(created.get("description"), Some(&Value::Null));
    let id = created.get("id").and_then(Value::as_str).expect("id");

    // The stored record reads back with the same null.
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/locations/{id}"))
            .to_request(),
    )
    .await;
    let fetched: Value = test::read_body_json(res).await;
    assert_eq!(fetched.get("description"), Some(&Value::Null));
}

#[actix_web::test]
async fn create_defaults_status_to_active() {
    let app = seeded_app().await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/locations")
            .set_json(valid_create_body())
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(res).await;
    assert_eq!(created.get("status"), Some(&json!("active")));
}

#[actix_web::test]
async fn unknown_ids_return_404_for_get_patch_and_delete() {
    let app = seeded_app().await;
    let uri = "/api/locations/no-such-id";

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("code"), Some(&json!("not_found")));

    let res = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(uri)
            .set_json(json!({ "title": "B" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(&app, test::TestRequest::delete().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn patch_changes_only_the_supplied_fields() {
    let app = seeded_app().await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/locations")
            .set_json(json!({
                "title": "A",
                "address": "ул. Мира, 7",
                "type": "Культура",
                "lat": 56.121,
                "lng": 94.561
            }))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(res).await;
    let id = created.get("id").and_then(Value::as_str).expect("id");

    let res = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/locations/{id}"))
            .set_json(json!({ "title": "B" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(res).await;
    assert_eq!(updated.get("title"), Some(&json!("B")));
    assert_eq!(updated.get("address"), created.get("address"));
    assert_eq!(updated.get("lat"), created.get("lat"));
    assert_eq!(updated.get("lng"), created.get("lng"));
}

#[actix_web::test]
async fn delete_succeeds_once_then_404s() {
    let app = seeded_app().await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/locations")
            .set_json(valid_create_body())
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(res).await;
    let id = created.get("id").and_then(Value::as_str).expect("id");
    let uri = format!("/api/locations/{id}");

    let res = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let body = test::read_body(res).await;
    assert!(body.is_empty(), "204 carries no body");

    let res = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn invalid_create_adds_no_record_and_names_the_field() {
    let app = seeded_app().await;
    let before = list_locations(&app).await.len();

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/locations")
            .set_json(json!({
                "address": "ул. Мира, 7",
                "type": "Культура",
                "lat": 56.121,
                "lng": 94.561
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    assert_eq!(body.pointer("/details/field"), Some(&json!("title")));
    assert_eq!(
        body.pointer("/details/code"),
        Some(&json!("missing_field"))
    );

    assert_eq!(list_locations(&app).await.len(), before);
}

#[actix_web::test]
async fn patch_with_explicit_null_clears_the_description() {
    let app = seeded_app().await;
    let mut body = valid_create_body();
    if let Some(map) = body.as_object_mut() {
        map.insert("description".to_owned(), json!("старое описание"));
    }
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/locations")
            .set_json(body)
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(res).await;
    let id = created.get("id").and_then(Value::as_str).expect("id");

    let res = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/locations/{id}"))
            .set_json(json!({ "description": null }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(res).await;
    assert_eq!(updated.get("description"), Some(&Value::Null));
}

#[actix_web::test]
async fn error_responses_carry_a_trace_identifier() {
    let app = seeded_app().await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/locations/no-such-id")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key("trace-id"));
    let body: Value = test::read_body_json(res).await;
    assert!(body.get("traceId").and_then(Value::as_str).is_some());
}
