//! Wire-level tests: the axum router over the in-memory backend.
//!
//! These verify the HTTP contract — camelCase bodies, bearer auth,
//! and the status mapping (400/401/403/404) — without a database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use cmc_control::adapters::auth::{Argon2PasswordHasher, JwtTokenService, DEFAULT_TOKEN_TTL_DAYS};
use cmc_control::adapters::http::{router, AppState};
use cmc_control::adapters::memory::MemoryBackend;
use cmc_control::ports::{PasswordHasher, TokenService};
use secrecy::SecretString;

async fn test_app() -> (Router, AppState) {
    let backend = MemoryBackend::new();
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        &SecretString::new("integration-test-secret-32-bytes-min!".to_string()),
        DEFAULT_TOKEN_TTL_DAYS,
    ));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let state = AppState::new(backend.ports(), tokens, hasher);

    state
        .identity
        .bootstrap_master("thiago", "271205", "Thiago")
        .await
        .unwrap();

    (router(state.clone()), state)
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": username, "password": password })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_open() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, request("GET", "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let (app, _) = test_app().await;

    let (status, _) = send(&app, request("GET", "/api/stores", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        request("GET", "/api/stores", Some("not-a-real-token"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_login_and_store_lifecycle() {
    let (app, _) = test_app().await;

    let (status, registered) = send(
        &app,
        request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({ "username": "ana", "password": "123456", "name": "Ana" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(registered["role"], "user");
    assert!(registered.get("passwordHash").is_none());

    let token = login(&app, "ana", "123456").await;

    let (status, store) = send(
        &app,
        request(
            "POST",
            "/api/stores",
            Some(&token),
            Some(json!({ "name": "Paris6" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(store["name"], "Paris6");
    assert!(store["ownerId"].is_string());
    assert!(store["createdAt"].is_string());

    let (status, stores) = send(&app, request("GET", "/api/stores", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stores.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn registration_policy_maps_to_400() {
    let (app, _) = test_app().await;

    for (username, password) in [("Ana1", "123456"), ("ana", "12345"), ("ana", "abcdef")] {
        let (status, body) = send(
            &app,
            request(
                "POST",
                "/api/auth/register",
                None,
                Some(json!({ "username": username, "password": password, "name": "Ana" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{username}/{password}");
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }
}

#[tokio::test]
async fn login_failure_is_401_and_generic() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": "thiago", "password": "000000" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status2, body2) = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": "nobody", "password": "271205" })),
        ),
    )
    .await;
    assert_eq!(status2, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], body2["error"]);
}

#[tokio::test]
async fn revenue_total_is_server_computed_even_when_client_lies() {
    let (app, _) = test_app().await;
    let master = login(&app, "thiago", "271205").await;

    let (_, store) = send(
        &app,
        request(
            "POST",
            "/api/stores",
            Some(&master),
            Some(json!({ "name": "Paris6" })),
        ),
    )
    .await;
    let store_id = store["id"].as_str().unwrap().to_string();

    let (status, revenue) = send(
        &app,
        request(
            "POST",
            "/api/daily-revenues",
            Some(&master),
            Some(json!({
                "storeId": store_id,
                "date": "2024-05-01",
                "salon": 500,
                "delivery": 200,
                "serviceCharge": 70,
                "total": 99999
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(revenue["total"], 770.0);
    assert_eq!(revenue["serviceCharge"], 70.0);

    // Upsert: same date again, one row, latest values.
    let (_, second) = send(
        &app,
        request(
            "POST",
            "/api/daily-revenues",
            Some(&master),
            Some(json!({
                "storeId": store_id,
                "date": "2024-05-01",
                "salon": 100
            })),
        ),
    )
    .await;
    assert_eq!(second["total"], 100.0);
    assert_eq!(second["id"], revenue["id"]);

    let (_, listed) = send(
        &app,
        request(
            "GET",
            &format!("/api/daily-revenues/store/{store_id}"),
            Some(&master),
            None,
        ),
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn foreign_store_access_maps_to_403() {
    let (app, _) = test_app().await;
    let master = login(&app, "thiago", "271205").await;

    let (_, store) = send(
        &app,
        request(
            "POST",
            "/api/stores",
            Some(&master),
            Some(json!({ "name": "Paris6" })),
        ),
    )
    .await;
    let store_id = store["id"].as_str().unwrap().to_string();

    send(
        &app,
        request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({ "username": "ana", "password": "123456", "name": "Ana" })),
        ),
    )
    .await;
    let ana = login(&app, "ana", "123456").await;

    let (status, body) = send(
        &app,
        request(
            "GET",
            &format!("/api/transactions/store/{store_id}"),
            Some(&ana),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    // A nonexistent store is indistinguishable from a denied one.
    let (status, _) = send(
        &app,
        request(
            "GET",
            "/api/transactions/store/550e8400-e29b-41d4-a716-446655440099",
            Some(&ana),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn grant_toggle_over_the_wire() {
    let (app, state) = test_app().await;
    let master = login(&app, "thiago", "271205").await;

    let (_, store) = send(
        &app,
        request(
            "POST",
            "/api/stores",
            Some(&master),
            Some(json!({ "name": "Paris6" })),
        ),
    )
    .await;
    let store_id = store["id"].as_str().unwrap().to_string();

    let (_, ana_user) = send(
        &app,
        request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({ "username": "ana", "password": "123456", "name": "Ana" })),
        ),
    )
    .await;
    let ana_id = ana_user["id"].as_str().unwrap().to_string();
    let ana = login(&app, "ana", "123456").await;

    // Ana cannot toggle grants.
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/user-store-access/toggle",
            Some(&ana),
            Some(json!({ "userId": ana_id, "storeId": store_id })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Master grants; ana sees the store.
    let (status, toggled) = send(
        &app,
        request(
            "POST",
            "/api/user-store-access/toggle",
            Some(&master),
            Some(json!({ "userId": ana_id, "storeId": store_id })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["action"], "added");

    let (_, visible) = send(&app, request("GET", "/api/stores", Some(&ana), None)).await;
    assert_eq!(visible.as_array().unwrap().len(), 1);

    // The registry lists the grant for the master.
    let (status, grants) = send(
        &app,
        request("GET", "/api/user-store-access", Some(&master), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(grants[&ana_id][0], store["id"]);

    // Second toggle removes; ana is locked out again.
    let (_, toggled) = send(
        &app,
        request(
            "POST",
            "/api/user-store-access/toggle",
            Some(&master),
            Some(json!({ "userId": ana_id, "storeId": store_id })),
        ),
    )
    .await;
    assert_eq!(toggled["action"], "removed");

    let (status, _) = send(
        &app,
        request(
            "GET",
            &format!("/api/daily-revenues/store/{store_id}"),
            Some(&ana),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // State is shared with the service layer, not a parallel copy.
    assert!(state.stores.list(&cmc_control::domain::foundation::Principal::new(
        ana_id.parse().unwrap(),
        "ana",
        cmc_control::domain::foundation::Role::User,
    ))
    .await
    .unwrap()
    .is_empty());
}

#[tokio::test]
async fn dead_ids_map_to_404() {
    let (app, _) = test_app().await;
    let master = login(&app, "thiago", "271205").await;

    let (status, body) = send(
        &app,
        request(
            "DELETE",
            "/api/transactions/550e8400-e29b-41d4-a716-446655440099",
            Some(&master),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "RECORD_NOT_FOUND");
}

#[tokio::test]
async fn dashboard_summary_over_the_wire() {
    let (app, _) = test_app().await;
    let master = login(&app, "thiago", "271205").await;

    let (_, store) = send(
        &app,
        request(
            "POST",
            "/api/stores",
            Some(&master),
            Some(json!({ "name": "Paris6" })),
        ),
    )
    .await;
    let store_id = store["id"].as_str().unwrap().to_string();

    send(
        &app,
        request(
            "POST",
            "/api/daily-revenues",
            Some(&master),
            Some(json!({
                "storeId": store_id,
                "date": "2024-05-01",
                "salon": 700,
                "delivery": 200,
                "serviceCharge": 100
            })),
        ),
    )
    .await;

    let (_, group) = send(
        &app,
        request(
            "POST",
            "/api/product-groups",
            Some(&master),
            Some(json!({ "storeId": store_id, "name": "Proteins", "cmcTarget": 30 })),
        ),
    )
    .await;

    send(
        &app,
        request(
            "POST",
            "/api/transactions",
            Some(&master),
            Some(json!({
                "storeId": store_id,
                "type": "PURCHASE",
                "description": "Beef",
                "amount": 300,
                "date": "2024-05-02",
                "groupId": group["id"]
            })),
        ),
    )
    .await;

    let (status, summary) = send(
        &app,
        request(
            "GET",
            &format!("/api/dashboard/store/{store_id}/summary?month=2024-05"),
            Some(&master),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["monthlyRevenue"], 1000.0);
    assert_eq!(summary["monthlyPurchases"], 300.0);
    assert_eq!(summary["cmc"], 30.0);

    // Malformed month is a validation failure.
    let (status, _) = send(
        &app,
        request(
            "GET",
            &format!("/api/dashboard/store/{store_id}/summary?month=2024-13"),
            Some(&master),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn transaction_requires_group() {
    let (app, _) = test_app().await;
    let master = login(&app, "thiago", "271205").await;

    let (_, store) = send(
        &app,
        request(
            "POST",
            "/api/stores",
            Some(&master),
            Some(json!({ "name": "Paris6" })),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/transactions",
            Some(&master),
            Some(json!({
                "storeId": store["id"],
                "type": "EXPENSE",
                "description": "Rent",
                "amount": 1500,
                "date": "2024-05-05"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}
