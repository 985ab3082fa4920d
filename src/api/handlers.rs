//! HTTP API handlers.

use axum::{extract::RawQuery, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::calculator::{AddInputs, AddResult, RawOperands};
use crate::error::{AddError, ErrorResponse};
use crate::metrics;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
}

/// Successful `/add` response.
#[derive(Debug, Serialize)]
pub struct AddResponse {
    /// Parsed operands.
    pub inputs: AddInputs,
    /// Computed sum.
    pub result: AddResult,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    metrics::inc_health_requests();
    debug!("Health check");
    Json(HealthResponse { status: "healthy" })
}

/// Add handler - sums query parameters `a` and `b`.
///
/// Example: `/add?a=10&b=20`.
pub async fn add(RawQuery(query): RawQuery) -> Result<Json<AddResponse>, AddError> {
    let _timer = metrics::timer_add();
    let raw = RawOperands::from_query(query.as_deref());

    let inputs = match AddInputs::parse(&raw) {
        Ok(inputs) => inputs,
        Err(e) => {
            match &e {
                AddError::MissingParameter => {
                    warn!("Add request failed: Missing 'a' or 'b' parameter.");
                }
                AddError::InvalidFormat { a, b } => {
                    error!(a = %a, b = %b, "Add request failed: Invalid number format");
                }
            }
            metrics::inc_add_requests(e.kind());
            return Err(e);
        }
    };

    let result = inputs.sum();
    info!(
        a = inputs.a,
        b = inputs.b,
        sum = result.sum,
        "Successfully processed /add request"
    );
    metrics::inc_add_requests(metrics::OUTCOME_SUCCESS);

    Ok(Json(AddResponse { inputs, result }))
}

/// Fallback for unknown routes - JSON 404.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn add_handler_returns_inputs_and_sum() {
        let Json(response) = add(RawQuery(Some("a=5&b=10".to_string())))
            .await
            .unwrap();
        assert_eq!(response.inputs, AddInputs { a: 5.0, b: 10.0 });
        assert_eq!(response.result, AddResult { sum: 15.0 });
    }

    #[tokio::test]
    async fn add_handler_without_query_is_missing_parameter() {
        let err = add(RawQuery(None)).await.unwrap_err();
        assert_eq!(err, AddError::MissingParameter);
    }

    #[test]
    fn add_response_serializes_nested_shape() {
        let response = AddResponse {
            inputs: AddInputs { a: 2.5, b: -1.5 },
            result: AddResult { sum: 1.0 },
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"inputs": {"a": 2.5, "b": -1.5}, "result": {"sum": 1.0}})
        );
    }
}
