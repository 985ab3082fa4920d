//! Unified error types for the adder service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Startup and server lifecycle errors.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(String),

    /// IO error (bind, accept, serve).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while validating an `/add` request.
///
/// Both variants are terminal for the request and surface as HTTP 400.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    /// `a`, `b` or both are absent from the query string.
    #[error("Missing required query parameters: 'a' and 'b'")]
    MissingParameter,

    /// `a` or `b` is present but not a finite number.
    #[error("Invalid number format. 'a' and 'b' must be numbers.")]
    InvalidFormat {
        /// Raw value of `a`.
        a: String,
        /// Raw value of `b`.
        b: String,
    },
}

impl AddError {
    /// Label used for the `outcome` metric dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            AddError::MissingParameter => "missing_parameter",
            AddError::InvalidFormat { .. } => "invalid_format",
        }
    }
}

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    /// Build an error body from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl IntoResponse for AddError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
