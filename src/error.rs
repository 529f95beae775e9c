//! Unified error types for the invoice service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the invoice service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// API request error.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Metrics recorder installation error.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Create request missing `cliente` or `total`.
    #[error("incomplete invoice data")]
    IncompleteData,

    /// No invoice stored under the requested id.
    #[error("invoice {id} not found")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },
}

/// JSON body returned for every API error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Client-facing error message.
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::IncompleteData => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Message exposed to clients. Kept stable: clients match on it.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::IncompleteData => "Datos incompletos",
            ApiError::NotFound { .. } => "Factura no encontrada",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.public_message().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
