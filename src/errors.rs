use axum::{
    http::{header::WWW_AUTHENTICATE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use std::fmt;

/// Request-level error taxonomy.
///
/// These are the only error kinds a request can produce; malformed query
/// values are absorbed by normalization rather than rejected, and no code
/// path surfaces a 5xx.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Missing/malformed Authorization header or credential mismatch.
    /// All causes are deliberately indistinguishable in the response.
    Unauthorized { realm: &'static str },
    /// No recognized lookup key was supplied.
    BadRequest {
        collection: &'static str,
        message: &'static str,
    },
    /// A recognized key was supplied but matched zero records.
    NotFound {
        collection: &'static str,
        message: &'static str,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized { realm } => write!(f, "Unauthorized (realm {})", realm),
            AppError::BadRequest { message, .. } => write!(f, "Bad request: {}", message),
            AppError::NotFound { message, .. } => write!(f, "Not found: {}", message),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into its envelope response.
    ///
    /// 400 and 404 envelopes carry the endpoint's collection key with an
    /// empty array so callers always see the same body shape as on success.
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized { realm } => {
                tracing::warn!("Unauthorized request (realm {})", realm);
                (
                    StatusCode::UNAUTHORIZED,
                    [(WWW_AUTHENTICATE, format!("Basic realm=\"{}\"", realm))],
                    Json(json!({ "error": "Unauthorized" })),
                )
                    .into_response()
            }
            AppError::BadRequest {
                collection,
                message,
            } => (
                StatusCode::BAD_REQUEST,
                Json(empty_envelope("BadRequest", message, collection)),
            )
                .into_response(),
            AppError::NotFound {
                collection,
                message,
            } => (
                StatusCode::NOT_FOUND,
                Json(empty_envelope("NotFound", message, collection)),
            )
                .into_response(),
        }
    }
}

fn empty_envelope(error: &str, message: &str, collection: &str) -> Value {
    let mut body = Map::new();
    body.insert("error".to_string(), Value::from(error));
    body.insert("message".to_string(), Value::from(message));
    body.insert("count".to_string(), Value::from(0));
    body.insert(collection.to_string(), Value::Array(Vec::new()));
    Value::Object(body)
}
