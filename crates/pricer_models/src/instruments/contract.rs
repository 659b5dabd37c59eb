//! Contract specification shared by the closed-form and lattice pricers.
//!
//! A [`ContractSpec`] is immutable once built. Use [`ContractSpecBuilder`] to
//! construct one; all range checks run in [`ContractSpecBuilder::build`].

use pricer_core::types::time_from_days;

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;
use super::payoff::PayoffType;

/// Time to maturity as supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Maturity {
    Years(f64),
    Days(f64),
}

/// Immutable per-request contract inputs.
///
/// # Invariants
/// - `underlying_price > 0`, `strike > 0`, `volatility > 0`, `time_to_maturity > 0`
/// - `risk_free_rate` and `dividend_yield` are finite
/// - `steps >= 1` when present
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{ContractSpec, ExerciseStyle, PayoffType};
///
/// let contract = ContractSpec::builder()
///     .payoff(PayoffType::Put)
///     .underlying_price(100.0)
///     .strike(95.0)
///     .volatility(0.25)
///     .risk_free_rate(0.03)
///     .time_days(73.0)
///     .steps(101)
///     .exercise(ExerciseStyle::American)
///     .build()
///     .expect("valid contract");
///
/// assert!((contract.time_to_maturity() - 0.2).abs() < 1e-12);
/// assert_eq!(contract.steps(), Some(101));
/// assert_eq!(contract.dividend_yield(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContractSpec {
    payoff: PayoffType,
    underlying_price: f64,
    strike: f64,
    volatility: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
    time_to_maturity: f64,
    steps: Option<usize>,
    exercise: ExerciseStyle,
}

impl ContractSpec {
    /// Creates a new contract builder.
    #[inline]
    pub fn builder() -> ContractSpecBuilder {
        ContractSpecBuilder::default()
    }

    /// Returns the payoff type.
    #[inline]
    pub fn payoff(&self) -> PayoffType {
        self.payoff
    }

    /// Returns the current underlying price (S).
    #[inline]
    pub fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    /// Returns the strike (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the continuously compounded risk-free rate (r).
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the continuous dividend or foreign yield (q).
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the time to maturity in years (T).
    #[inline]
    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    /// Returns the lattice step count, if one was specified.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.steps
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise(&self) -> ExerciseStyle {
        self.exercise
    }

    /// Returns the lattice step count or an error when none was given.
    ///
    /// # Errors
    /// `InstrumentError::MissingField` if the contract carries no step count.
    pub fn require_steps(&self) -> Result<usize, InstrumentError> {
        self.steps
            .ok_or(InstrumentError::MissingField { name: "steps" })
    }

    /// Length of one lattice step in years.
    ///
    /// # Errors
    /// `InstrumentError::MissingField` if the contract carries no step count.
    pub fn step_length(&self) -> Result<f64, InstrumentError> {
        Ok(self.time_to_maturity / self.require_steps()? as f64)
    }

    /// Returns a copy of this contract with a different exercise style.
    pub fn with_exercise(mut self, exercise: ExerciseStyle) -> Self {
        self.exercise = exercise;
        self
    }

    /// Returns a copy of this contract with a different payoff type.
    pub fn with_payoff(mut self, payoff: PayoffType) -> Self {
        self.payoff = payoff;
        self
    }
}

/// Builder for [`ContractSpec`].
///
/// Payoff, underlying price, strike, volatility, risk-free rate and maturity
/// are required. Yield defaults to 0 and exercise style to European.
#[derive(Clone, Debug, Default)]
pub struct ContractSpecBuilder {
    payoff: Option<PayoffType>,
    underlying_price: Option<f64>,
    strike: Option<f64>,
    volatility: Option<f64>,
    risk_free_rate: Option<f64>,
    dividend_yield: f64,
    maturity: Option<Maturity>,
    steps: Option<usize>,
    exercise: ExerciseStyle,
}

impl ContractSpecBuilder {
    /// Sets the payoff type.
    #[inline]
    pub fn payoff(mut self, payoff: PayoffType) -> Self {
        self.payoff = Some(payoff);
        self
    }

    /// Sets the current underlying price.
    #[inline]
    pub fn underlying_price(mut self, price: f64) -> Self {
        self.underlying_price = Some(price);
        self
    }

    /// Sets the strike.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the annualised volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the continuously compounded risk-free rate.
    #[inline]
    pub fn risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = Some(rate);
        self
    }

    /// Sets the continuous dividend or foreign yield.
    #[inline]
    pub fn dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Sets the time to maturity in years.
    #[inline]
    pub fn time_years(mut self, years: f64) -> Self {
        self.maturity = Some(Maturity::Years(years));
        self
    }

    /// Sets the time to maturity in calendar days (ACT/365F).
    #[inline]
    pub fn time_days(mut self, days: f64) -> Self {
        self.maturity = Some(Maturity::Days(days));
        self
    }

    /// Sets the lattice step count.
    #[inline]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the exercise style.
    #[inline]
    pub fn exercise(mut self, exercise: ExerciseStyle) -> Self {
        self.exercise = exercise;
        self
    }

    /// Builds and validates the contract.
    ///
    /// # Errors
    ///
    /// - `InstrumentError::MissingField` for any unset required field
    /// - `InstrumentError::InvalidUnderlying`, `InvalidStrike`,
    ///   `InvalidVolatility`, `InvalidExpiry` for non-positive or non-finite values
    /// - `InstrumentError::InvalidSteps` for a zero step count
    /// - `InstrumentError::InvalidParameter` for a non-finite rate or yield
    pub fn build(self) -> Result<ContractSpec, InstrumentError> {
        let payoff = self
            .payoff
            .ok_or(InstrumentError::MissingField { name: "optionType" })?;
        let underlying_price = self
            .underlying_price
            .ok_or(InstrumentError::MissingField { name: "underlyingPrice" })?;
        let strike = self
            .strike
            .ok_or(InstrumentError::MissingField { name: "strike" })?;
        let volatility = self
            .volatility
            .ok_or(InstrumentError::MissingField { name: "volatility" })?;
        let risk_free_rate = self
            .risk_free_rate
            .ok_or(InstrumentError::MissingField { name: "riskFreeRate" })?;
        let maturity = self
            .maturity
            .ok_or(InstrumentError::MissingField { name: "timeToMaturity" })?;

        if !underlying_price.is_finite() || underlying_price <= 0.0 {
            return Err(InstrumentError::InvalidUnderlying {
                price: underlying_price,
            });
        }
        if !strike.is_finite() || strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(InstrumentError::InvalidVolatility { volatility });
        }
        if !risk_free_rate.is_finite() {
            return Err(InstrumentError::InvalidParameter {
                message: format!("risk-free rate must be finite, got {risk_free_rate}"),
            });
        }
        if !self.dividend_yield.is_finite() {
            return Err(InstrumentError::InvalidParameter {
                message: format!("yield must be finite, got {}", self.dividend_yield),
            });
        }

        let time_to_maturity = match maturity {
            Maturity::Years(years) => years,
            Maturity::Days(days) => time_from_days(days)?,
        };
        if !time_to_maturity.is_finite() || time_to_maturity <= 0.0 {
            return Err(InstrumentError::InvalidExpiry {
                expiry: time_to_maturity,
            });
        }

        if let Some(steps) = self.steps {
            if steps == 0 {
                return Err(InstrumentError::InvalidSteps { steps });
            }
        }

        Ok(ContractSpec {
            payoff,
            underlying_price,
            strike,
            volatility,
            risk_free_rate,
            dividend_yield: self.dividend_yield,
            time_to_maturity,
            steps: self.steps,
            exercise: self.exercise,
        })
    }
}
