//! Half-rounding rules used throughout point math.
//!
//! Costs round halves down and effects round halves up, so an exact half
//! always lands in the player's favour. The fractional part usually comes out
//! of a floating-point division, so "exactly half" is checked with a tolerance.

const HALF_TOLERANCE: f64 = 1e-4;

fn is_half(value: f64) -> bool {
    let fraction = value - value.floor();
    (fraction - 0.5).abs() < HALF_TOLERANCE
}

/// Round a point cost: nearest whole number, halves go down.
///
/// Results saturate at the `i32` bounds; NaN rounds to zero.
pub fn round_for_cost(value: f64) -> i32 {
    if is_half(value) {
        value.floor() as i32
    } else {
        value.round() as i32
    }
}

/// Round an effect (dice, levels, bonuses): nearest whole number, halves go up.
///
/// Saturates like [`round_for_cost`].
pub fn round_for_effect(value: f64) -> i32 {
    if is_half(value) {
        value.ceil() as i32
    } else {
        value.round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_rounds_exact_half_down() {
        assert_eq!(round_for_cost(2.5), 2);
        assert_eq!(round_for_cost(17.5), 17);
        assert_eq!(round_for_cost(0.5), 0);
    }

    #[test]
    fn effect_rounds_exact_half_up() {
        assert_eq!(round_for_effect(2.5), 3);
        assert_eq!(round_for_effect(17.5), 18);
        assert_eq!(round_for_effect(0.5), 1);
    }

    #[test]
    fn near_half_within_tolerance_counts_as_half() {
        let value = 35.0 / 2.0 + 0.000_05;
        assert_eq!(round_for_cost(value), value.floor() as i32);
        assert_eq!(round_for_effect(value), value.ceil() as i32);
    }

    #[test]
    fn non_half_values_round_to_nearest() {
        for value in [2.4, 2.6, 10.0, 71.999, 0.49, -1.2, -1.7] {
            assert_eq!(round_for_cost(value), value.round() as i32, "cost {}", value);
            assert_eq!(round_for_effect(value), value.round() as i32, "effect {}", value);
        }
    }

    #[test]
    fn negative_halves_follow_floor_and_ceil() {
        assert_eq!(round_for_cost(-2.5), -3);
        assert_eq!(round_for_effect(-2.5), -2);
    }

    #[test]
    fn just_outside_tolerance_is_not_a_half() {
        assert_eq!(round_for_cost(2.5002), 3);
        assert_eq!(round_for_effect(2.4998), 2);
    }

    #[test]
    fn out_of_range_values_saturate() {
        assert_eq!(round_for_cost(1e12), i32::MAX);
        assert_eq!(round_for_cost(-1e12), i32::MIN);
        assert_eq!(round_for_effect(f64::INFINITY), i32::MAX);
        assert_eq!(round_for_cost(f64::NAN), 0);
    }
}
