//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes(-Merton) model for pricing European
//! call and put options on an underlying paying a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! With q = 0 these reduce to the textbook Black-Scholes formulas.

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::PayoffType;

/// Black-Scholes model for European option pricing.
///
/// Market state (spot, rate, volatility, yield) is validated once at
/// construction; contract terms (strike, expiry) are validated per call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0).unwrap();
/// let put_price = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
    /// Continuous dividend yield (q)
    dividend_yield: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model with zero dividend yield.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    /// - `AnalyticalError::InvalidParameter` if rate is not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidParameter {
                name: "rate",
                value: rate,
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
            dividend_yield: 0.0,
        })
    }

    /// Sets the continuous dividend (or foreign) yield.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidParameter` if `dividend_yield` is not finite.
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Result<Self, AnalyticalError> {
        if !dividend_yield.is_finite() {
            return Err(AnalyticalError::InvalidParameter {
                name: "dividend yield",
                value: dividend_yield,
            });
        }
        self.dividend_yield = dividend_yield;
        Ok(self)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    fn check_terms(strike: f64, expiry: f64) -> Result<(), AnalyticalError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if !expiry.is_finite() || expiry <= 0.0 {
            return Err(AnalyticalError::InvalidExpiry { expiry });
        }
        Ok(())
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidExpiry` if expiry <= 0
    pub fn d1(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        Self::check_terms(strike, expiry)?;

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate - self.dividend_yield + 0.5 * self.volatility * self.volatility)
            * expiry;

        Ok((log_moneyness + drift) / vol_sqrt_t)
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    ///
    /// # Errors
    /// Same as [`BlackScholes::d1`].
    pub fn d2(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        Ok(self.d1(strike, expiry)? - self.volatility * expiry.sqrt())
    }

    /// Computes European call option price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0).unwrap();
    /// assert!((price - 10.450583572185565).abs() < 1e-9);
    /// ```
    pub fn price_call(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        let d2 = d1 - self.volatility * expiry.sqrt();

        let discount = (-self.rate * expiry).exp();
        let carry = (-self.dividend_yield * expiry).exp();

        Self::finite(self.spot * carry * norm_cdf(d1) - strike * discount * norm_cdf(d2))
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0).unwrap();
    /// assert!((price - 5.573526022256971).abs() < 1e-9);
    /// ```
    pub fn price_put(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        let d2 = d1 - self.volatility * expiry.sqrt();

        let discount = (-self.rate * expiry).exp();
        let carry = (-self.dividend_yield * expiry).exp();

        Self::finite(strike * discount * norm_cdf(-d2) - self.spot * carry * norm_cdf(-d1))
    }

    /// Prices a European option of the given payoff type.
    pub fn price(
        &self,
        payoff: PayoffType,
        strike: f64,
        expiry: f64,
    ) -> Result<f64, AnalyticalError> {
        match payoff {
            PayoffType::Call => self.price_call(strike, expiry),
            PayoffType::Put => self.price_put(strike, expiry),
        }
    }

    fn finite(value: f64) -> Result<f64, AnalyticalError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(AnalyticalError::NumericalInstability {
                message: format!("Black-Scholes produced non-finite price {value}"),
            })
        }
    }
}
