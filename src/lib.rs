//! Basic-auth-gated record lookup API.
//!
//! Serves two read-only lookup endpoints (customer accounts and
//! order/shipment records) over static JSON datasets. Both endpoints are
//! instances of one generic lookup pipeline: Basic-auth gate, priority-ordered
//! query-key resolution, stable single-key filter, allow-list field
//! projection, and envelope/status selection.
//!
//! # Modules
//!
//! - `auth`: Basic authorization header verification.
//! - `config`: Configuration management.
//! - `dataset`: Immutable record store loaded at startup.
//! - `endpoints`: Declarative configuration of the two endpoints.
//! - `errors`: Envelope error types.
//! - `handlers`: HTTP request handlers and router.
//! - `lookup`: Query-key resolution and dataset filtering.
//! - `service`: The shared lookup pipeline.
//! - `shape`: Output-shape projection and field coercion.

pub mod auth;
pub mod config;
pub mod dataset;
pub mod endpoints;
pub mod errors;
pub mod handlers;
pub mod lookup;
pub mod service;
pub mod shape;
