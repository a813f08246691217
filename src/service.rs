use crate::auth;
use crate::errors::AppError;
use crate::lookup::{self, LookupKey};
use crate::shape::{self, Field};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Declarative description of one lookup endpoint.
///
/// Both endpoints are instances of this single component; the per-request
/// pipeline (auth gate, key resolution, filter, projection, status
/// selection) lives in [`LookupEndpoint::handle`] and is shared.
#[derive(Debug)]
pub struct LookupEndpoint {
    /// Realm constant for the `WWW-Authenticate` challenge.
    pub realm: &'static str,
    /// Envelope key the matched records are returned under.
    pub collection: &'static str,
    /// Recognized lookup keys, in priority order.
    pub keys: &'static [LookupKey],
    /// Output-shape whitelist applied to every matched record.
    pub shape: &'static [Field],
    /// Guidance text for the 400 envelope.
    pub missing_key_message: &'static str,
    /// Entity-specific text for the 404 envelope.
    pub not_found_message: &'static str,
}

impl LookupEndpoint {
    /// Resolves one request against an immutable dataset.
    ///
    /// Pure function of its inputs: no shared mutable state, each stage
    /// feeds the next.
    ///
    /// # Arguments
    ///
    /// * `records` - The endpoint's dataset, in load order.
    /// * `authorization` - Raw `Authorization` header value, if present.
    /// * `params` - Decoded query parameters.
    /// * `expected_user` / `expected_pass` - Configured Basic credentials.
    ///
    /// # Returns
    ///
    /// * `Ok(envelope)` - `{count, <collection>: [...]}` with at least one
    ///   normalized record.
    /// * `Err(AppError)` - one of the three envelope errors (401/400/404).
    pub fn handle(
        &self,
        records: &[Value],
        authorization: Option<&str>,
        params: &HashMap<String, String>,
        expected_user: &str,
        expected_pass: &str,
    ) -> Result<Value, AppError> {
        if !auth::verify_basic(authorization, expected_user, expected_pass) {
            return Err(AppError::Unauthorized { realm: self.realm });
        }

        let (key, value) =
            lookup::resolve_key(self.keys, params).ok_or(AppError::BadRequest {
                collection: self.collection,
                message: self.missing_key_message,
            })?;
        tracing::debug!("Resolved lookup key '{}' for {}", key.name, self.collection);

        let matches = lookup::filter(records, key, &value);
        if matches.is_empty() {
            return Err(AppError::NotFound {
                collection: self.collection,
                message: self.not_found_message,
            });
        }

        let items: Vec<Value> = matches
            .iter()
            .map(|record| shape::project(record, self.shape))
            .collect();

        let mut body = Map::new();
        body.insert("count".to_string(), Value::from(items.len()));
        body.insert(self.collection.to_string(), Value::Array(items));
        Ok(Value::Object(body))
    }
}
