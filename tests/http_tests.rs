//! HTTP-level tests for the lookup endpoints.
//!
//! These prove the wire contract end to end: Basic auth gating, the
//! envelope shapes for 401/400/404/200, phone normalization through URL
//! decoding, pre-flight handling, and the static cross-origin headers.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http_body_util::BodyExt;
use rust_lookup_api::config::Config;
use rust_lookup_api::dataset::Dataset;
use rust_lookup_api::handlers::{self, AppState};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

// ── Test app builder ───────────────────────────────────────────

fn test_config() -> Config {
    Config {
        port: 0,
        basic_user: "svc".to_string(),
        basic_pass: "secret".to_string(),
        accounts_path: String::new(),
        orders_path: String::new(),
    }
}

fn build_test_app() -> axum::Router {
    let accounts = Dataset::from_records(vec![
        json!({
            "accountId": "ACCT-1",
            "name": "Avery Collins",
            "email": "avery.collins@example.com",
            "phone": "+1+555+1234",
            "membershipTier": "gold",
            "balanceDue": 42.5
        }),
        json!({
            "accountId": "ACCT-2",
            "email": "morgan.reyes@example.com",
            "balanceDue": "not-a-number"
        }),
    ]);
    let orders = Dataset::from_records(vec![json!({
        "id": "ORD-1",
        "email": "avery.collins@example.com",
        "phone": "+1+555+1234",
        "status": "in_transit",
        "items": [
            {"sku": "MUG", "itemName": "Mug", "cost": 12.99, "qty": 2}
        ]
    })]);

    let state = Arc::new(AppState {
        config: test_config(),
        accounts,
        orders,
    });
    handlers::router(state)
}

fn basic_auth(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, pass)))
}

fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

// ── Helper to read response body ───────────────────────────────

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        json!({ "raw": String::from_utf8_lossy(&bytes).to_string() })
    })
}

// ── Tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_no_auth() {
    let app = build_test_app();
    let resp = app.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_auth_header_is_401_with_challenge() {
    let app = build_test_app();
    let resp = app
        .oneshot(get("/api/v1/accounts?accountId=ACCT-1", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"AccountLookup\""
    );
    // Cross-origin headers are present on error responses too
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    assert_eq!(body_json(resp).await, json!({"error": "Unauthorized"}));
}

#[tokio::test]
async fn test_bad_credentials_and_bad_scheme_look_identical() {
    let app = build_test_app();
    let wrong = app
        .oneshot(get(
            "/api/v1/accounts?accountId=ACCT-1",
            Some(&basic_auth("svc", "wrong")),
        ))
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let wrong_body = body_json(wrong).await;

    let app = build_test_app();
    let scheme = app
        .oneshot(get("/api/v1/accounts?accountId=ACCT-1", Some("Bearer tok")))
        .await
        .unwrap();
    assert_eq!(scheme.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(scheme).await, wrong_body);
}

#[tokio::test]
async fn test_no_query_key_is_400_with_guidance() {
    let app = build_test_app();
    let resp = app
        .oneshot(get("/api/v1/accounts", Some(&basic_auth("svc", "secret"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(
        body_json(resp).await,
        json!({
            "error": "BadRequest",
            "message": "Provide one of: phone, email, or accountId",
            "count": 0,
            "accounts": []
        })
    );
}

#[tokio::test]
async fn test_email_lookup_is_case_insensitive_and_coerced() {
    let app = build_test_app();
    let resp = app
        .oneshot(get(
            "/api/v1/accounts?email=AVERY.COLLINS@example.com",
            Some(&basic_auth("svc", "secret")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 1);
    let account = &body["accounts"][0];
    assert_eq!(account["accountId"], "ACCT-1");
    assert_eq!(account["balanceDue"], 42.5);
    // Fields absent from the source record are defaulted, not omitted
    assert_eq!(account["accountType"], "");
    assert_eq!(account["billingAddress"]["line1"], "");
    assert_eq!(account["billingPeriod"]["start"], "");
}

#[tokio::test]
async fn test_phone_lookup_normalizes_url_decoded_value() {
    // %2B1%20555%201234 decodes to "+1 555 1234", normalized to "+1+555+1234"
    let app = build_test_app();
    let resp = app
        .oneshot(get(
            "/api/v1/accounts?phone=%2B1%20555%201234",
            Some(&basic_auth("svc", "secret")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["accounts"][0]["accountId"], "ACCT-1");
}

#[tokio::test]
async fn test_unknown_account_id_is_404() {
    let app = build_test_app();
    let resp = app
        .oneshot(get(
            "/api/v1/accounts?accountId=ZZZ",
            Some(&basic_auth("svc", "secret")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({
            "error": "NotFound",
            "message": "No matching account found",
            "count": 0,
            "accounts": []
        })
    );
}

#[tokio::test]
async fn test_account_id_wins_over_other_keys() {
    // Documented priority order: accountId > email > phone. The email here
    // belongs to ACCT-1 but the accountId selects ACCT-2.
    let app = build_test_app();
    let resp = app
        .oneshot(get(
            "/api/v1/accounts?email=avery.collins@example.com&accountId=ACCT-2",
            Some(&basic_auth("svc", "secret")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["accounts"][0]["accountId"], "ACCT-2");
    // Non-numeric stored balance surfaces as null, not an error
    assert_eq!(body["accounts"][0]["balanceDue"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_orders_endpoint_envelope_and_realm() {
    let app = build_test_app();
    let resp = app
        .oneshot(get("/api/v1/orders?id=ORD-1", Some(&basic_auth("svc", "secret"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 1);
    let order = &body["orders"][0];
    assert_eq!(order["status"], "in_transit");
    assert_eq!(order["items"][0]["qty"], 2);
    assert_eq!(order["items"][0]["description"], "");
    assert_eq!(order["carrier"], "");
    assert_eq!(order["deliveryAddress"]["city"], "");

    // Orders endpoint advertises its own realm
    let app = build_test_app();
    let resp = app.oneshot(get("/api/v1/orders?id=ORD-1", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"WISMO-Demo\""
    );
}

#[tokio::test]
async fn test_orders_bad_request_uses_orders_collection_key() {
    let app = build_test_app();
    let resp = app
        .oneshot(get("/api/v1/orders", Some(&basic_auth("svc", "secret"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({
            "error": "BadRequest",
            "message": "Provide one of: id, email, or phone",
            "count": 0,
            "orders": []
        })
    );
}

#[tokio::test]
async fn test_preflight_short_circuits_with_cors_headers() {
    for uri in ["/api/v1/accounts", "/api/v1/orders"] {
        let app = build_test_app();
        // No Authorization header, no query: pre-flight bypasses both checks
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_METHODS)
                .unwrap(),
            "GET, OPTIONS"
        );
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
                .unwrap(),
            "Content-Type, Authorization"
        );
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }
}
