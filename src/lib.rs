//! In-memory invoice microservice.
//!
//! Exposes a small JSON HTTP API for creating and retrieving invoice
//! ("factura") records held in a process-local map. Records are created
//! once, never mutated, and live only as long as the process.
//!
//! # Endpoints
//!
//! ```text
//! POST /facturas       create an invoice       -> 201 + record
//! GET  /facturas/:id   fetch one invoice       -> 200 / 404
//! GET  /facturas       full id -> record map   -> 200
//! GET  /               service info            -> 200
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`invoice`]: Invoice record and in-memory store
//! - [`api`]: HTTP API handlers and routes
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod invoice;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
