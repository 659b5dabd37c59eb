//! Option valuation endpoints
//!
//! Closed-form Black-Scholes and the three binomial lattices.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    response::Json,
    routing::post,
    Router,
};
use pricer_models::engine::{price_closed_form, price_lattice, ClosedFormValuation, LatticeValuation};
use pricer_models::instruments::{ContractSpec, ExerciseStyle, InstrumentError, PayoffType};
use pricer_models::lattice::LatticeModel;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

/// Contract fields accepted by the valuation endpoints.
///
/// Short field names (`undPrice`, `vol`, `intRate`) are primary; the long
/// forms are accepted as aliases. `timeDays` takes precedence over
/// `timeYears`. `exerciseStyle` takes precedence over `amEuro`, where
/// `amEuro = true` means European.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractRequest {
    /// "call" or "put"
    pub option_type: Option<String>,
    /// European flag
    pub am_euro: Option<bool>,
    /// "european" or "american"
    pub exercise_style: Option<String>,
    /// Underlying price
    #[serde(alias = "underlyingPrice", alias = "stockPrice")]
    pub und_price: Option<f64>,
    /// Strike
    #[serde(alias = "strikePrice")]
    pub strike: Option<f64>,
    /// Volatility
    #[serde(alias = "volatility")]
    pub vol: Option<f64>,
    /// Risk-free rate
    #[serde(alias = "riskFreeRate", alias = "riskFreeInterestRate")]
    pub int_rate: Option<f64>,
    /// Continuous dividend or foreign yield
    #[serde(rename = "yield", alias = "dividendYield")]
    pub dividend_yield: Option<f64>,
    /// Time to maturity in days
    pub time_days: Option<f64>,
    /// Time to maturity in years
    #[serde(alias = "timeToMaturity")]
    pub time_years: Option<f64>,
    /// Lattice steps
    pub steps: Option<usize>,
}

impl ContractRequest {
    fn exercise(&self) -> Result<ExerciseStyle, InstrumentError> {
        match (&self.exercise_style, self.am_euro) {
            (Some(style), _) => ExerciseStyle::from_str(style),
            (None, Some(is_european)) => Ok(ExerciseStyle::from_is_european(is_european)),
            (None, None) => Ok(ExerciseStyle::European),
        }
    }

    /// Validates the request into a contract.
    pub fn to_contract(&self) -> Result<ContractSpec, InstrumentError> {
        let mut builder = ContractSpec::builder()
            .dividend_yield(self.dividend_yield.unwrap_or(0.0))
            .exercise(self.exercise()?);

        if let Some(option_type) = &self.option_type {
            builder = builder.payoff(PayoffType::from_str(option_type)?);
        }
        if let Some(price) = self.und_price {
            builder = builder.underlying_price(price);
        }
        if let Some(strike) = self.strike {
            builder = builder.strike(strike);
        }
        if let Some(vol) = self.vol {
            builder = builder.volatility(vol);
        }
        if let Some(rate) = self.int_rate {
            builder = builder.risk_free_rate(rate);
        }
        match (self.time_days, self.time_years) {
            (Some(days), _) => builder = builder.time_days(days),
            (None, Some(years)) => builder = builder.time_years(years),
            (None, None) => {}
        }
        if let Some(steps) = self.steps {
            builder = builder.steps(steps);
        }

        builder.build()
    }
}

/// Build the valuation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/valuation/black-scholes", post(black_scholes_handler))
        .route("/api/v1/valuation/lattice/{model}", post(lattice_handler))
}

/// POST /api/v1/valuation/black-scholes - closed-form European price
async fn black_scholes_handler(
    Json(request): Json<ContractRequest>,
) -> Result<Json<ClosedFormValuation>, ApiError> {
    let contract = request.to_contract()?;
    let valuation = price_closed_form(&contract)?;

    tracing::debug!(
        payoff = %contract.payoff(),
        price = valuation.price,
        "closed-form valuation"
    );
    Ok(Json(valuation))
}

/// POST /api/v1/valuation/lattice/{model} - binomial lattice price and trees
async fn lattice_handler(
    State(state): State<AppState>,
    Path(model): Path<String>,
    Json(request): Json<ContractRequest>,
) -> Result<Json<LatticeValuation>, ApiError> {
    let model = LatticeModel::from_str(&model)?;

    let max = state.config.max_lattice_steps;
    if let Some(steps) = request.steps {
        if steps > max {
            return Err(ApiError::StepLimit { steps, max });
        }
    }

    let contract = request.to_contract()?;
    let valuation = price_lattice(&contract, model)?;

    tracing::debug!(
        model = %model,
        exercise = %contract.exercise(),
        steps = contract.steps(),
        price = valuation.price,
        "lattice valuation"
    );
    Ok(Json(valuation))
}
