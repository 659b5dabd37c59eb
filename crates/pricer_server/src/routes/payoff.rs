//! Single-leg profit/loss endpoint

use std::str::FromStr;

use axum::{response::Json, routing::post, Router};
use pricer_models::instruments::PayoffType;
use pricer_models::strategies::{
    option_payoff, Direction, Leg, OptionPayoff, StrategyError, DEFAULT_CONTRACT_SIZE,
    DEFAULT_POSITION_SIZE,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

/// One option leg and the underlying price at expiry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionPayoffRequest {
    /// "call" or "put"
    pub option_type: Option<String>,
    /// Long (default) or short
    pub direction: Option<Direction>,
    /// Premium paid or received per share
    #[serde(alias = "premium")]
    pub initial_price: Option<f64>,
    /// Strike
    #[serde(alias = "strike")]
    pub strike_price: Option<f64>,
    /// Underlying price at expiry
    pub underlying_price: Option<f64>,
    /// Shares per contract
    pub contract_size: Option<f64>,
    /// Contracts held
    pub position_size: Option<f64>,
}

fn require(value: Option<f64>, name: &'static str) -> Result<f64, StrategyError> {
    value.ok_or(StrategyError::MissingQuote { name })
}

impl OptionPayoffRequest {
    /// Builds the leg and extracts the underlying price.
    pub fn to_leg(&self) -> Result<(Leg, f64), ApiError> {
        let option_type = self
            .option_type
            .as_deref()
            .ok_or(StrategyError::MissingQuote { name: "optionType" })?;
        let payoff = PayoffType::from_str(option_type)?;

        let leg = Leg::option(
            self.direction.unwrap_or_default(),
            payoff,
            require(self.strike_price, "strikePrice")?,
            require(self.initial_price, "initialPrice")?,
        )
        .with_contract_size(self.contract_size.unwrap_or(DEFAULT_CONTRACT_SIZE))
        .with_position_size(self.position_size.unwrap_or(DEFAULT_POSITION_SIZE));

        Ok((leg, require(self.underlying_price, "underlyingPrice")?))
    }
}

/// Build the payoff routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/payoff/option", post(option_payoff_handler))
}

/// POST /api/v1/payoff/option - profit/loss of one option leg at expiry
async fn option_payoff_handler(
    Json(request): Json<OptionPayoffRequest>,
) -> Result<Json<OptionPayoff>, ApiError> {
    let (leg, underlying) = request.to_leg()?;
    let payoff = option_payoff(&leg, underlying)?;

    tracing::debug!(
        kind = leg.kind().as_str(),
        direction = %leg.direction(),
        profit_loss = payoff.profit_loss_total,
        "option payoff"
    );
    Ok(Json(payoff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::routes::test_support::post_json;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    fn router() -> Router {
        routes().with_state(AppState::new(Arc::new(ServerConfig::default())))
    }

    #[tokio::test]
    async fn test_long_call_defaults() {
        let (status, body) = post_json(
            router(),
            "/api/v1/payoff/option",
            json!({
                "optionType": "call",
                "initialPrice": 3.0,
                "strikePrice": 100.0,
                "underlyingPrice": 110.0
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profitLossPerShare"], 7.0);
        assert_eq!(body["profitLossTotal"], 700.0);
    }

    #[tokio::test]
    async fn test_short_put_with_sizes() {
        let (status, body) = post_json(
            router(),
            "/api/v1/payoff/option",
            json!({
                "optionType": "put",
                "direction": "short",
                "initialPrice": 2.0,
                "strikePrice": 50.0,
                "underlyingPrice": 45.0,
                "contractSize": 10,
                "positionSize": 4
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profitLossPerShare"], -3.0);
        assert_eq!(body["profitLossTotal"], -120.0);
    }

    #[tokio::test]
    async fn test_missing_underlying() {
        let (status, body) = post_json(
            router(),
            "/api/v1/payoff/option",
            json!({ "optionType": "call", "initialPrice": 3.0, "strikePrice": 100.0 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
        assert_eq!(body["message"], "Missing required field: underlyingPrice");
    }

    #[tokio::test]
    async fn test_negative_premium_rejected() {
        let (status, body) = post_json(
            router(),
            "/api/v1/payoff/option",
            json!({
                "optionType": "call",
                "initialPrice": -1.0,
                "strikePrice": 100.0,
                "underlyingPrice": 100.0
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid premium: -1");
    }
}
