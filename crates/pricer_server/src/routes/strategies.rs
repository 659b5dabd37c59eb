//! Multi-leg strategy endpoints
//!
//! Named strategies read flat strike/premium fields; the custom endpoint
//! takes an explicit list of legs.

use std::str::FromStr;

use axum::{extract::Path, response::Json, routing::post, Router};
use pricer_models::strategies::{
    evaluate_strategy, Leg, StrategyError, StrategyKind, StrategyQuotes, StrategyReport,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

/// Body of a named-strategy request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedStrategyRequest {
    /// Strikes, premiums and sizes
    #[serde(flatten)]
    pub quotes: StrategyQuotes,
    /// Underlying price at expiry
    #[serde(default)]
    pub underlying_price: Option<f64>,
}

/// Body of a custom-strategy request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomStrategyRequest {
    /// Optional label echoed in the report
    #[serde(default)]
    pub name: Option<String>,
    /// Legs in evaluation order
    pub legs: Vec<Leg>,
    /// Underlying price at expiry
    #[serde(default)]
    pub underlying_price: Option<f64>,
}

fn underlying(price: Option<f64>) -> Result<f64, StrategyError> {
    price.ok_or(StrategyError::MissingQuote {
        name: "underlyingPrice",
    })
}

/// Build the strategy routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/strategies/custom", post(custom_strategy_handler))
        .route("/api/v1/strategies/{strategy}", post(named_strategy_handler))
}

/// POST /api/v1/strategies/{strategy} - named strategy profit/loss at expiry
async fn named_strategy_handler(
    Path(strategy): Path<String>,
    Json(request): Json<NamedStrategyRequest>,
) -> Result<Json<StrategyReport>, ApiError> {
    let kind = StrategyKind::from_str(&strategy)?;
    let report = kind.evaluate(&request.quotes, underlying(request.underlying_price)?)?;

    tracing::debug!(
        strategy = %kind,
        legs = report.legs.len(),
        profit_loss = report.profit_loss,
        "strategy evaluated"
    );
    Ok(Json(report))
}

/// POST /api/v1/strategies/custom - arbitrary ordered legs
async fn custom_strategy_handler(
    Json(request): Json<CustomStrategyRequest>,
) -> Result<Json<StrategyReport>, ApiError> {
    let name = request.name.unwrap_or_else(|| "custom".to_string());
    let report = evaluate_strategy(name, &request.legs, underlying(request.underlying_price)?)?;

    tracing::debug!(
        strategy = %report.strategy,
        legs = report.legs.len(),
        profit_loss = report.profit_loss,
        "custom strategy evaluated"
    );
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::routes::test_support::post_json;
    use approx::assert_relative_eq;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    fn router() -> Router {
        routes().with_state(AppState::new(Arc::new(ServerConfig::default())))
    }

    #[tokio::test]
    async fn test_iron_condor() {
        let (status, body) = post_json(
            router(),
            "/api/v1/strategies/iron-condor",
            json!({
                "longPutStrikePrice": 90,
                "longPutPremiumPrice": 1.0,
                "shortPutStrikePrice": 95,
                "shortPutPremiumPrice": 2.5,
                "shortCallStrikePrice": 105,
                "shortCallPremiumPrice": 2.0,
                "longCallStrikePrice": 110,
                "longCallPremiumPrice": 0.8,
                "underlyingPrice": 100,
                "positionSizeEachOptionType": 2
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["strategy"], "iron-condor");
        assert_eq!(body["legs"].as_array().unwrap().len(), 4);
        assert_relative_eq!(body["profitLoss"].as_f64().unwrap(), 540.0, epsilon = 1e-9);
        assert_eq!(body["legs"][0]["direction"], "long");
        assert_eq!(body["legs"][0]["type"], "put");
    }

    #[tokio::test]
    async fn test_collar_camel_case_path() {
        let (status, body) = post_json(
            router(),
            "/api/v1/strategies/collar",
            json!({
                "stockInitialPrice": 100,
                "shareSize": 100,
                "longPutStrikePrice": 95,
                "longPutPremiumPrice": 2.0,
                "shortCallStrikePrice": 110,
                "shortCallPremiumPrice": 2.5,
                "underlyingPrice": 80
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["legs"][0]["type"], "stock");
        assert_relative_eq!(body["profitLoss"].as_f64().unwrap(), -450.0, epsilon = 1e-9);

        let (status, _) = post_json(
            router(),
            "/api/v1/strategies/longStraddle",
            json!({
                "longPutStrikePrice": 100,
                "longPutPremiumPrice": 3.0,
                "longCallStrikePrice": 100,
                "longCallPremiumPrice": 4.0,
                "underlyingPrice": 100
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_straddle_with_distinct_strikes() {
        let (status, body) = post_json(
            router(),
            "/api/v1/strategies/long-straddle",
            json!({
                "longPutStrikePrice": 95,
                "longPutPremiumPrice": 3.0,
                "longCallStrikePrice": 100,
                "longCallPremiumPrice": 4.0,
                "underlyingPrice": 90
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // put finishes 5 in the money against 7 of premium
        assert_relative_eq!(body["profitLoss"].as_f64().unwrap(), -200.0, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn test_unknown_strategy() {
        let (status, body) = post_json(
            router(),
            "/api/v1/strategies/butterfly",
            json!({ "underlyingPrice": 100 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
        assert_eq!(body["message"], "Unknown strategy: butterfly");
    }

    #[tokio::test]
    async fn test_missing_quote() {
        let (status, body) = post_json(
            router(),
            "/api/v1/strategies/bull-call-spread",
            json!({
                "longCallStrikePrice": 100,
                "longCallPremiumPrice": 4.0,
                "underlyingPrice": 100
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Missing required field: shortCallStrikePrice");
    }

    #[tokio::test]
    async fn test_custom_strategy() {
        let (status, body) = post_json(
            router(),
            "/api/v1/strategies/custom",
            json!({
                "legs": [
                    { "type": "stock", "premium": 40, "positionSize": 100 },
                    { "direction": "short", "type": "call", "strike": 45, "premium": 1.5 }
                ],
                "underlyingPrice": 50
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["strategy"], "custom");
        // stock +1000, call premium +150, call assigned -500
        assert_relative_eq!(body["profitLoss"].as_f64().unwrap(), 650.0, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn test_custom_strategy_rejects_empty_legs() {
        let (status, body) = post_json(
            router(),
            "/api/v1/strategies/custom",
            json!({ "legs": [], "underlyingPrice": 50 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Strategy has no legs");
    }
}
