//! Binomial lattice parameterizations.
//!
//! Every model shares `dt = T / n` and the step discount factor `exp(-r·dt)`
//! and differs only in how it places the up/down factors and the risk-neutral
//! probability:
//!
//! | Model | up | down | p_up |
//! |---|---|---|---|
//! | Cox-Ross-Rubinstein | e^(σ√dt) | 1/up | (e^((r-q)dt) - down)/(up - down) |
//! | Jarrow-Rudd | e^((r-q-σ²/2)dt + σ√dt) | e^((r-q-σ²/2)dt - σ√dt) | 1/2 |
//! | Leisen-Reimer | e^((r-q)dt)·h₁/h₂ | e^((r-q)dt)·(1-h₁)/(1-h₂) | h₂ |
//!
//! with `h₁ = h(d₁)`, `h₂ = h(d₂)` the Peizer-Pratt inversion of the
//! Black-Scholes terms over the full maturity.

use std::fmt;
use std::str::FromStr;

use super::error::LatticeError;
use super::parameters::LatticeParameters;
use crate::analytical::BlackScholes;
use crate::instruments::{ContractSpec, InstrumentError};

/// Closed set of lattice parameterizations.
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeModel;
///
/// let model: LatticeModel = "lr".parse().unwrap();
/// assert_eq!(model, LatticeModel::LeisenReimer);
/// assert!(model.requires_odd_steps());
/// assert_eq!(LatticeModel::JarrowRudd.name(), "jarrow_rudd");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatticeModel {
    /// Cox-Ross-Rubinstein (1979): symmetric log-moves, drift in the probability.
    #[cfg_attr(feature = "serde", serde(rename = "crr", alias = "cox_ross_rubinstein"))]
    CoxRossRubinstein,

    /// Jarrow-Rudd (1983): equal probabilities, drift in the moves.
    #[cfg_attr(feature = "serde", serde(rename = "jarrow_rudd", alias = "jr"))]
    JarrowRudd,

    /// Leisen-Reimer (1996): strike-centred tree via Peizer-Pratt inversion.
    #[cfg_attr(feature = "serde", serde(rename = "leisen_reimer", alias = "lr"))]
    LeisenReimer,
}

impl LatticeModel {
    /// All supported models.
    pub const ALL: [LatticeModel; 3] = [
        LatticeModel::CoxRossRubinstein,
        LatticeModel::JarrowRudd,
        LatticeModel::LeisenReimer,
    ];

    /// Canonical identifier, as used in routes and serialised output.
    pub fn name(&self) -> &'static str {
        match self {
            LatticeModel::CoxRossRubinstein => "crr",
            LatticeModel::JarrowRudd => "jarrow_rudd",
            LatticeModel::LeisenReimer => "leisen_reimer",
        }
    }

    /// Whether the model only admits odd step counts.
    #[inline]
    pub fn requires_odd_steps(&self) -> bool {
        matches!(self, LatticeModel::LeisenReimer)
    }

    /// Derives up/down factors, probabilities and discounting for a contract.
    ///
    /// # Errors
    /// - `LatticeError::Instrument` if the contract carries no step count
    /// - `LatticeError::EvenSteps` for Leisen-Reimer with an even step count
    /// - `LatticeError::ProbabilityOutOfRange` if the inputs admit no
    ///   risk-neutral measure on this grid (e.g. CRR with `|r - q|·dt` too
    ///   large for `σ√dt`)
    /// - `LatticeError::InversionSaturated` for Leisen-Reimer when `d1` or `d2`
    ///   is so far from zero that the Peizer-Pratt inversion rounds to 0 or 1
    pub fn derive_parameters(
        &self,
        contract: &ContractSpec,
    ) -> Result<LatticeParameters, LatticeError> {
        let steps = contract.require_steps()?;
        if steps == 0 {
            return Err(LatticeError::InvalidSteps { steps });
        }
        if self.requires_odd_steps() && steps % 2 == 0 {
            return Err(LatticeError::EvenSteps { steps });
        }

        let dt = contract.step_length()?;
        let vol = contract.volatility();
        let carry = contract.risk_free_rate() - contract.dividend_yield();
        let discount = (-contract.risk_free_rate() * dt).exp();
        let growth = (carry * dt).exp();

        let (up, down, p_up) = match self {
            LatticeModel::CoxRossRubinstein => {
                let up = (vol * dt.sqrt()).exp();
                let down = 1.0 / up;
                (up, down, (growth - down) / (up - down))
            }
            LatticeModel::JarrowRudd => {
                let drift = (carry - 0.5 * vol * vol) * dt;
                let diffusion = vol * dt.sqrt();
                ((drift + diffusion).exp(), (drift - diffusion).exp(), 0.5)
            }
            LatticeModel::LeisenReimer => {
                let bs = BlackScholes::new(contract.underlying_price(), contract.risk_free_rate(), vol)?
                    .with_dividend_yield(contract.dividend_yield())?;
                let expiry = contract.time_to_maturity();
                let h1 = saturation_checked(bs.d1(contract.strike(), expiry)?, steps)?;
                let h2 = saturation_checked(bs.d2(contract.strike(), expiry)?, steps)?;
                (growth * h1 / h2, growth * (1.0 - h1) / (1.0 - h2), h2)
            }
        };

        LatticeParameters::new(dt, discount, up, down, p_up)
    }
}

impl fmt::Display for LatticeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LatticeModel {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "crr" | "cox_ross_rubinstein" | "coxrossrubinstein" => {
                Ok(LatticeModel::CoxRossRubinstein)
            }
            "jr" | "jarrow_rudd" | "jarrowrudd" => Ok(LatticeModel::JarrowRudd),
            "lr" | "leisen_reimer" | "leisenreimer" => Ok(LatticeModel::LeisenReimer),
            _ => Err(InstrumentError::InvalidParameter {
                message: format!("unknown lattice model: {s}"),
            }),
        }
    }
}

/// Peizer-Pratt (method 2) inversion of a normal quantile onto an `n`-step
/// binomial probability.
///
/// h(z) = 1/2 + sign(z)/2 · √(1 - exp(-(z / (n + 1/3 + 0.1/(n+1)))² · (n + 1/6)))
///
/// # Examples
/// ```
/// use pricer_models::lattice::peizer_pratt_inversion;
///
/// assert_eq!(peizer_pratt_inversion(0.0, 7), 0.5);
/// let h = peizer_pratt_inversion(0.5, 7);
/// assert!((h + peizer_pratt_inversion(-0.5, 7) - 1.0).abs() < 1e-15);
/// ```
pub fn peizer_pratt_inversion(z: f64, steps: usize) -> f64 {
    if z == 0.0 {
        return 0.5;
    }
    let n = steps as f64;
    let scaled = z / (n + 1.0 / 3.0 + 0.1 / (n + 1.0));
    let spread = (1.0 - (-scaled * scaled * (n + 1.0 / 6.0)).exp()).sqrt();
    0.5 + z.signum() * 0.5 * spread
}

/// Peizer-Pratt inversion that rejects results outside the open unit interval.
fn saturation_checked(z: f64, steps: usize) -> Result<f64, LatticeError> {
    let h = peizer_pratt_inversion(z, steps);
    if h > 0.0 && h < 1.0 {
        Ok(h)
    } else {
        Err(LatticeError::InversionSaturated {
            z,
            steps,
            probability: h,
        })
    }
}
