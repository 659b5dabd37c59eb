//! API error responses
//!
//! Every failure a handler can produce is rendered as HTTP 400 with a
//! `{ "error": kind, "message": text }` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pricer_core::types::PricingError;
use pricer_models::instruments::InstrumentError;
use pricer_models::strategies::StrategyError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub error: String,
    /// Human-readable description
    pub message: String,
}

/// Handler errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure reported by the valuation library.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Lattice request exceeding the configured step bound.
    #[error("steps must not exceed {max}, got {steps}")]
    StepLimit {
        /// Requested steps
        steps: usize,
        /// Configured bound
        max: usize,
    },
}

impl ApiError {
    /// Machine-readable kind used in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Pricing(err) => err.kind(),
            ApiError::StepLimit { .. } => "invalid_input",
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl From<InstrumentError> for ApiError {
    fn from(err: InstrumentError) -> Self {
        ApiError::Pricing(err.into())
    }
}

impl From<StrategyError> for ApiError {
    fn from(err: StrategyError) -> Self {
        ApiError::Pricing(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = self.kind(), message = %self, "request rejected");

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: match &self {
                ApiError::Pricing(err) => err.message().to_string(),
                other => other.to_string(),
            },
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pricing_error_renders_400() {
        let err = ApiError::from(PricingError::UnsupportedInstrument(
            "closed form requires European exercise".to_string(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.error, "unsupported_instrument");
        assert_eq!(body.message, "closed form requires European exercise");
    }

    #[test]
    fn test_step_limit_kind() {
        let err = ApiError::StepLimit {
            steps: 20_000,
            max: 5_000,
        };
        assert_eq!(err.kind(), "invalid_input");
        assert_eq!(err.to_string(), "steps must not exceed 5000, got 20000");
    }

    #[test]
    fn test_strategy_error_is_invalid_input() {
        let err = ApiError::from(StrategyError::EmptyStrategy);
        assert_eq!(err.kind(), "invalid_input");
    }
}
