//! Backward induction over a recombining underlying tree.
//!
//! Children of node `(i, j)` are `(i+1, j)` (up) and `(i+1, j+1)` (down).

use super::error::LatticeError;
use super::parameters::LatticeParameters;
use super::tree::{node_count, offset, PriceTree};
use crate::instruments::{ExerciseStyle, PayoffType};

/// Rolls option values back from the terminal layer to the root.
///
/// Terminal nodes take the intrinsic payoff. Every earlier node takes the
/// discounted expectation of its two children and, for American exercise,
/// the larger of that and immediate exercise at the node's underlying price.
/// The returned tree has the same shape as `underlying`; its root is the
/// option price.
///
/// # Errors
/// - `LatticeError::InvalidStrike` if `strike` is non-positive or not finite
/// - `LatticeError::NonFinite` if any node value is NaN or infinite
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, PayoffType};
/// use pricer_models::lattice::{backward_induction, build_underlying_tree, LatticeParameters};
///
/// let params = LatticeParameters::new(1.0, 0.95, 1.2, 0.8, 0.6).unwrap();
/// let tree = build_underlying_tree(100.0, 1.2, 0.8, 1).unwrap();
/// let option = backward_induction(&tree, 100.0, PayoffType::Call, ExerciseStyle::European, &params)
///     .unwrap();
/// assert!((option.root() - 11.4).abs() < 1e-12);
/// ```
pub fn backward_induction(
    underlying: &PriceTree,
    strike: f64,
    payoff: PayoffType,
    exercise: ExerciseStyle,
    params: &LatticeParameters,
) -> Result<PriceTree, LatticeError> {
    if !strike.is_finite() || strike <= 0.0 {
        return Err(LatticeError::InvalidStrike { strike });
    }

    let steps = underlying.steps();
    let spots = underlying.as_slice();
    let mut values = vec![0.0; node_count(steps)];

    let terminal = offset(steps);
    for (value, &spot) in values[terminal..].iter_mut().zip(&spots[terminal..]) {
        *value = payoff.intrinsic(spot, strike);
    }

    let disc_up = params.step_discount_factor() * params.up_probability();
    let disc_down = params.step_discount_factor() * params.down_probability();
    let early_exercise = exercise.allows_early_exercise();

    for i in (0..steps).rev() {
        let here = offset(i);
        let next = offset(i + 1);
        for j in 0..=i {
            let continuation = values[next + j] * disc_up + values[next + j + 1] * disc_down;
            values[here + j] = if early_exercise {
                continuation.max(payoff.intrinsic(spots[here + j], strike))
            } else {
                continuation
            };
        }
    }

    let option_tree = PriceTree::from_arena(steps, values);
    if let Some((level, node)) = option_tree.first_non_finite() {
        return Err(LatticeError::NonFinite { level, node });
    }
    Ok(option_tree)
}
