use crate::config::Config;
use crate::dataset::Dataset;
use crate::endpoints;
use crate::errors::AppError;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

/// Shared application state injected into handlers.
///
/// Datasets are loaded once at startup and never mutated, so the state is
/// shared behind an `Arc` with no locking.
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Account records served by `/api/v1/accounts`.
    pub accounts: Dataset,
    /// Order records served by `/api/v1/orders`.
    pub orders: Dataset,
}

/// Health check endpoint.
///
/// Returns the service status and version. Unauthenticated.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-lookup-api",
            "version": "0.1.0"
        })),
    )
}

/// GET /api/v1/accounts
///
/// Basic-auth-gated account lookup by one of `accountId`, `email`, `phone`
/// (priority in that order).
///
/// # Arguments
///
/// * `state` - The application state.
/// * `headers` - Request headers (for the `Authorization` header).
/// * `params` - Query parameters carrying the lookup key.
///
/// # Returns
///
/// * `Result<Json<serde_json::Value>, AppError>` - `{count, accounts: [...]}`
///   or an envelope error.
pub async fn get_accounts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::info!(
        "GET /api/v1/accounts - keys: {:?}",
        params.keys().collect::<Vec<_>>()
    );

    let body = endpoints::ACCOUNTS.handle(
        state.accounts.records(),
        authorization_header(&headers),
        &params,
        &state.config.basic_user,
        &state.config.basic_pass,
    )?;
    Ok(Json(body))
}

/// GET /api/v1/orders
///
/// Basic-auth-gated order/shipment lookup by one of `id`, `email`, `phone`
/// (priority in that order).
///
/// # Arguments
///
/// * `state` - The application state.
/// * `headers` - Request headers (for the `Authorization` header).
/// * `params` - Query parameters carrying the lookup key.
///
/// # Returns
///
/// * `Result<Json<serde_json::Value>, AppError>` - `{count, orders: [...]}`
///   or an envelope error.
pub async fn get_orders(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::info!(
        "GET /api/v1/orders - keys: {:?}",
        params.keys().collect::<Vec<_>>()
    );

    let body = endpoints::ORDERS.handle(
        state.orders.records(),
        authorization_header(&headers),
        &params,
        &state.config.basic_user,
        &state.config.basic_pass,
    )?;
    Ok(Json(body))
}

/// OPTIONS pre-flight handler: bare 200, no body. The cross-origin headers
/// are attached by the response-header layers in [`router`].
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// Builds the application router with its middleware stack.
///
/// The cross-origin policy is fixed and static, so it is applied as
/// overriding response headers on every response (success, error, and
/// pre-flight alike) rather than negotiated per request.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/accounts", get(get_accounts).options(preflight))
        .route("/api/v1/orders", get(get_orders).options(preflight))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Request size limit: 1MB max payload (lookup requests carry no body)
                .layer(RequestBodyLimitLayer::new(1024 * 1024))
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("GET, OPTIONS"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static("Content-Type, Authorization"),
                )),
        )
}
