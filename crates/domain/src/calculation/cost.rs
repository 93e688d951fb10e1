//! Cost engine - active and real cost of a single priced entity.

use thiserror::Error;

use crate::entities::{Adder, Modifier};
use crate::value_objects::round_for_cost;

/// Pricing failures the caller must decide how to handle.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CostError {
    /// `1 + limitation_sum` is not a finite positive divisor
    #[error("limitation sum {limitation_sum} leaves no valid cost denominator")]
    InvalidModifierSum { limitation_sum: f64 },
}

/// Sum of advantage values.
pub fn advantage_sum(modifiers: &[Modifier]) -> f64 {
    modifiers
        .iter()
        .filter(|m| m.is_advantage)
        .map(|m| m.value)
        .sum()
}

/// Sum of limitation magnitudes (limitations count by absolute value).
pub fn limitation_sum(modifiers: &[Modifier]) -> f64 {
    modifiers
        .iter()
        .filter(|m| m.is_limitation)
        .map(|m| m.value.abs())
        .sum()
}

/// Linear sum of adder contributions, unrounded.
pub fn adder_cost(adders: &[Adder]) -> f64 {
    adders.iter().map(Adder::contribution).sum()
}

/// `roundForCost(base * (1 + advantages))`.
pub fn active_cost(base_cost: f64, modifiers: &[Modifier]) -> i32 {
    round_for_cost(base_cost * (1.0 + advantage_sum(modifiers)))
}

/// `roundForCost(active / (1 + limitations))`.
///
/// With no limitations the active cost passes through unchanged. A
/// denominator that is not finite and positive is an error, never a division.
/// Limitations count by magnitude, so from a document this only happens when
/// their sum overflows to infinity.
pub fn real_cost(active_cost: i32, modifiers: &[Modifier]) -> Result<i32, CostError> {
    let limitation_sum = limitation_sum(modifiers);
    if limitation_sum == 0.0 {
        return Ok(active_cost);
    }
    let denominator = 1.0 + limitation_sum;
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(CostError::InvalidModifierSum { limitation_sum });
    }
    Ok(round_for_cost(active_cost as f64 / denominator))
}

/// Like [`real_cost`], but a denominator that is invalid or below `floor`
/// is replaced by `floor`.
pub fn real_cost_with_floor(active_cost: i32, modifiers: &[Modifier], floor: f64) -> i32 {
    let limitation_sum = limitation_sum(modifiers);
    if limitation_sum == 0.0 {
        return active_cost;
    }
    let denominator = 1.0 + limitation_sum;
    let denominator = if denominator.is_finite() && denominator >= floor {
        denominator
    } else {
        floor
    };
    round_for_cost(active_cost as f64 / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blast_with_advantage_and_limitation() {
        let modifiers = vec![Modifier::advantage(0.5), Modifier::limitation(-0.25)];
        let active = active_cost(60.0, &modifiers);
        assert_eq!(active, 90);
        assert_eq!(real_cost(active, &modifiers), Ok(72));
    }

    #[test]
    fn active_cost_without_modifiers_rounds_base() {
        assert_eq!(active_cost(12.0, &[]), 12);
        assert_eq!(active_cost(12.5, &[]), 12);
        assert_eq!(active_cost(12.6, &[]), 13);
    }

    #[test]
    fn real_cost_without_limitations_is_identity() {
        let advantages_only = vec![Modifier::advantage(1.0)];
        assert_eq!(real_cost(45, &[]), Ok(45));
        assert_eq!(real_cost(45, &advantages_only), Ok(45));
    }

    #[test]
    fn limitations_count_by_magnitude() {
        // -0.5 and +0.5 written as a limitation both reduce cost
        let modifiers = vec![Modifier::limitation(-0.5), Modifier::limitation(0.5)];
        assert_eq!(limitation_sum(&modifiers), 1.0);
        assert_eq!(real_cost(60, &modifiers), Ok(30));
    }

    #[test]
    fn half_point_real_cost_rounds_down() {
        // 25 / 2 = 12.5
        let modifiers = vec![Modifier::limitation(-1.0)];
        assert_eq!(real_cost(25, &modifiers), Ok(12));
    }

    #[test]
    fn non_finite_limitation_is_rejected() {
        let modifiers = vec![Modifier::limitation(f64::INFINITY)];
        assert!(matches!(
            real_cost(60, &modifiers),
            Err(CostError::InvalidModifierSum { .. })
        ));
        let modifiers = vec![Modifier::limitation(f64::NAN)];
        assert!(real_cost(60, &modifiers).is_err());
    }

    #[test]
    fn floor_replaces_invalid_denominator() {
        let modifiers = vec![Modifier::limitation(f64::INFINITY)];
        assert_eq!(real_cost_with_floor(60, &modifiers, 2.0), 30);

        let valid = vec![Modifier::limitation(-0.25)];
        assert_eq!(real_cost_with_floor(90, &valid, 0.01), 72);
        assert_eq!(real_cost_with_floor(90, &[], 0.01), 90);
    }

    #[test]
    fn adder_cost_is_linear_and_signed() {
        let adders = vec![
            Adder::new(5.0),
            Adder::leveled(0.0, 3, 2.0),
            Adder::new(-2.5),
        ];
        assert_eq!(adder_cost(&adders), 8.5);
        assert_eq!(adder_cost(&[]), 0.0);
    }

    #[test]
    fn advantage_sum_ignores_limitations() {
        let modifiers = vec![
            Modifier::advantage(0.25),
            Modifier::advantage(0.5),
            Modifier::limitation(-1.0),
        ];
        assert_eq!(advantage_sum(&modifiers), 0.75);
    }
}
