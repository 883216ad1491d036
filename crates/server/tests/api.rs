//! Router-level tests for the PeerConnect HTTP API.
//!
//! Every test builds a fresh router around its own in-memory engine and drives
//! it with `tower::ServiceExt::oneshot`, so nothing binds a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use peerconnect::{Engine, PeerConnectConfig};
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

// Demo ids: assigned in seed order.
const ALICE: u64 = 1;
const BOB: u64 = 2;
const CAROL: u64 = 3;

fn seeded_app() -> Router {
    let mut engine_config = PeerConnectConfig::default();
    engine_config.store.seed_demo = true;
    let engine = Engine::from_config(&engine_config).expect("seeded engine");
    app_with(engine)
}

fn empty_app() -> Router {
    app_with(Engine::in_memory())
}

fn app_with(engine: Engine) -> Router {
    let state = ServerState::with_engine(ServerConfig::default(), engine);
    build_router(Arc::new(state))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn names(profiles: &Value) -> Vec<String> {
    profiles
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["full_name"].as_str().expect("name").to_string())
        .collect()
}

#[tokio::test]
async fn api_info_and_health_respond() {
    let app = seeded_app();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "PeerConnect API is live");

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profiles"], 3);

    let (status, body) = get(&app, "/metadata").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profiles"], 3);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = empty_app();
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn user_crud_round_trip() {
    let app = empty_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({
            "full_name": "Dana Dev",
            "email": "dana@example.com",
            "skills": ["rust", "", 7, "sql"],
            "interests": null,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["skills"], json!(["rust", "sql"]));
    assert_eq!(created["interests"], json!([]));

    let (status, fetched) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        Method::PATCH,
        "/users/1",
        Some(json!({ "headline": "Systems", "interests": ["ml"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["headline"], "Systems");
    assert_eq!(updated["interests"], json!(["ml"]));
    assert_eq!(updated["skills"], json!(["rust", "sql"]));

    let (status, cleared) = send(
        &app,
        Method::PATCH,
        "/users/1",
        Some(json!({ "headline": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["headline"], Value::Null);

    let (status, _) = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "User 1 not found.");
}

#[tokio::test]
async fn listing_pages_in_id_order() {
    let app = seeded_app();

    let (status, all) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&all), ["Alice Data", "Bob Analyst", "Carol ML"]);

    let (_, page) = get(&app, "/users?skip=1&limit=1").await;
    assert_eq!(names(&page), ["Bob Analyst"]);
}

#[tokio::test]
async fn duplicate_email_is_rejected_ignoring_case() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "full_name": "Alice Again", "email": "ALICE@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn invalid_payloads_are_unprocessable() {
    let app = empty_app();

    for payload in [
        json!({ "full_name": "A", "email": "a@example.com" }),
        json!({ "full_name": "Ann Lee", "email": "not-an-email" }),
        json!({ "full_name": "Ann Lee", "email": "ann@example.com", "github_url": "ftp://x" }),
        json!({ "full_name": "Ann Lee", "email": "ann@example.com", "colab_url": "https://exa<mple>.com" }),
        json!({ "full_name": "Ann Lee" }),
        json!({ "full_name": "Ann Lee", "email": "ann@example.com", "skills": "python" }),
    ] {
        let (status, body) = send(&app, Method::POST, "/users", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "payload {payload}");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    let (status, _) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = empty_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn match_lists_users_in_store_order() {
    let app = seeded_app();

    let (status, body) = get(&app, &format!("/users/match/{ALICE}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subject_id"], ALICE);
    assert_eq!(body["total"], 2);
    assert_eq!(names(&body["matches"]), ["Bob Analyst", "Carol ML"]);
}

#[tokio::test]
async fn recommend_ranks_by_score() {
    let app = seeded_app();

    let (status, body) = get(&app, &format!("/users/recommend/{ALICE}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let hits = body["recommendations"].as_array().unwrap();
    assert_eq!(hits[0]["rank"], 1);
    assert_eq!(hits[0]["profile"]["id"], CAROL);
    assert_eq!(hits[0]["score"], 6);
    assert_eq!(hits[0]["cross"], 2);
    assert_eq!(hits[0]["common"], 2);

    assert_eq!(hits[1]["rank"], 2);
    assert_eq!(hits[1]["profile"]["id"], BOB);
    assert_eq!(hits[1]["score"], 4);
    assert_eq!(hits[1]["common"], 0);
}

#[tokio::test]
async fn unknown_subject_is_not_found() {
    let app = seeded_app();
    for uri in ["/users/match/99", "/users/recommend/99", "/users/99/match/1"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"]["message"], "User 99 not found.");
    }

    let (status, _) = get(&app, "/users/1/match/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pair_match_checks_both_directions() {
    let app = seeded_app();

    let (status, body) = get(&app, &format!("/users/{BOB}/match/{ALICE}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_match"], true);

    // Bob wants python, Carol teaches it.
    let (_, body) = get(&app, &format!("/users/{BOB}/match/{CAROL}")).await;
    assert_eq!(body["is_match"], true);
}

#[tokio::test]
async fn pair_match_rejects_self_comparison() {
    let app = seeded_app();
    let (status, body) = get(&app, &format!("/users/{ALICE}/match/{ALICE}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_numeric_ids_are_unprocessable() {
    let app = seeded_app();
    for uri in ["/users/abc", "/users/recommend/abc", "/users/1/match/x"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn unknown_routes_use_the_error_envelope() {
    let app = empty_app();
    let (status, body) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Route not found.");
}
