//! Damage dice notation and parsing
//!
//! Supports Hero-style d6 notation like "12d6", "2½d6", "2 1/2d6", "1d6+1".
//! A half die is rolled as 1d3; a pip is a flat +1 or -1.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::round_for_cost;

/// Error when parsing a dice notation string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The notation string is empty
    #[error("Empty dice notation")]
    Empty,
    /// Invalid format - expected Nd6, N½d6 or Nd6+1
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Zero dice with no half die
    #[error("Dice count must be at least a half die")]
    InvalidDiceCount,
}

/// A parsed damage dice expression like "2½d6" or "3d6+1"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageDice {
    /// Whole d6 rolled
    pub dice: u32,
    /// An extra half die (1d3)
    pub half_die: bool,
    /// Flat adjustment after rolling
    pub pips: i32,
}

impl DamageDice {
    /// The neutral value returned when notation cannot be read.
    pub const NONE: DamageDice = DamageDice {
        dice: 0,
        half_die: false,
        pips: 0,
    };

    pub fn new(dice: u32, half_die: bool, pips: i32) -> Self {
        Self {
            dice,
            half_die,
            pips,
        }
    }

    /// Parse a dice notation string.
    ///
    /// Supported formats:
    /// - "Nd6" / "d6" - N whole dice (shorthand for one)
    /// - "N½d6", "N 1/2d6", "N.5d6", "½d6" - with an extra half die
    /// - "Nd6+1" / "Nd6-1" - with a pip adjustment
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let mut normalized = normalized.replace('½', ".5").replace(" 1/2", ".5");
        if let Some(rest) = normalized.strip_prefix("1/2") {
            normalized = format!("0.5{}", rest);
        }
        let compact: String = normalized.chars().filter(|c| !c.is_whitespace()).collect();

        let d_pos = compact.find('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let (dice, half_die) = parse_count(&compact[..d_pos], input)?;
        if dice == 0 && !half_die {
            return Err(DiceParseError::InvalidDiceCount);
        }

        let after_d = &compact[d_pos + 1..];
        let (size_str, pips) = match after_d.find(['+', '-']) {
            Some(sign_pos) => {
                let pips: i32 = after_d[sign_pos..].parse().map_err(|_| {
                    DiceParseError::InvalidFormat(format!(
                        "Invalid pip adjustment: '{}'",
                        &after_d[sign_pos..]
                    ))
                })?;
                (&after_d[..sign_pos], pips)
            }
            None => (after_d, 0),
        };

        if size_str != "6" {
            return Err(DiceParseError::InvalidFormat(format!(
                "Only d6 are supported, got 'd{}'",
                size_str
            )));
        }

        Ok(Self {
            dice,
            half_die,
            pips,
        })
    }

    /// Parse, returning [`DamageDice::NONE`] when the notation is malformed.
    ///
    /// A bad damage field on one power must never block the rest of the sheet.
    pub fn parse_lenient(input: &str) -> Self {
        Self::parse(input).unwrap_or(Self::NONE)
    }

    /// Dice bought with `points` active points at `points_per_die` per whole die.
    ///
    /// Leftover points buy a half die at two thirds of a die, or a pip at one third.
    pub fn from_active_points(points: f64, points_per_die: f64) -> Self {
        if points <= 0.0 || points_per_die <= 0.0 {
            return Self::NONE;
        }
        const EPSILON: f64 = 1e-6;
        let dice = (points / points_per_die + EPSILON).floor();
        let remainder = points - dice * points_per_die;
        let (half_die, pips) = if remainder + EPSILON >= points_per_die * 2.0 / 3.0 {
            (true, 0)
        } else if remainder + EPSILON >= points_per_die / 3.0 {
            (false, 1)
        } else {
            (false, 0)
        };
        Self {
            dice: dice as u32,
            half_die,
            pips,
        }
    }

    /// Active points these dice cost at `points_per_die` per whole die.
    pub fn active_points(&self, points_per_die: f64) -> i32 {
        let whole = self.dice as f64 * points_per_die;
        let half = if self.half_die {
            points_per_die * 2.0 / 3.0
        } else {
            0.0
        };
        let pips = self.pips as f64 * points_per_die / 3.0;
        round_for_cost(whole + half + pips)
    }

    /// Mean roll: 3.5 per die, 2 for the half die, plus pips.
    pub fn average(&self) -> f64 {
        let half = if self.half_die { 2.0 } else { 0.0 };
        self.dice as f64 * 3.5 + half + self.pips as f64
    }

    /// Whether this is the neutral no-dice value.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

fn parse_count(count: &str, input: &str) -> Result<(u32, bool), DiceParseError> {
    if count.is_empty() {
        return Ok((1, false));
    }
    let invalid =
        || DiceParseError::InvalidFormat(format!("Invalid dice count in '{}'", input.trim()));

    match count.split_once('.') {
        Some((whole, fraction)) => {
            if fraction != "5" {
                return Err(invalid());
            }
            let dice = if whole.is_empty() {
                0
            } else {
                whole.parse().map_err(|_| invalid())?
            };
            Ok((dice, true))
        }
        None => Ok((count.parse().map_err(|_| invalid())?, false)),
    }
}

impl fmt::Display for DamageDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.dice, self.half_die) {
            (0, true) => write!(f, "½d6")?,
            (n, true) => write!(f, "{}½d6", n)?,
            (n, false) => write!(f, "{}d6", n)?,
        }
        if self.pips > 0 {
            write!(f, "+{}", self.pips)?;
        } else if self.pips < 0 {
            write!(f, "{}", self.pips)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_dice() {
        assert_eq!(DamageDice::parse("12d6"), Ok(DamageDice::new(12, false, 0)));
        assert_eq!(DamageDice::parse(" 4D6 "), Ok(DamageDice::new(4, false, 0)));
        assert_eq!(DamageDice::parse("d6"), Ok(DamageDice::new(1, false, 0)));
    }

    #[test]
    fn parse_half_die_spellings() {
        let expected = DamageDice::new(2, true, 0);
        assert_eq!(DamageDice::parse("2½d6"), Ok(expected));
        assert_eq!(DamageDice::parse("2 1/2d6"), Ok(expected));
        assert_eq!(DamageDice::parse("2.5d6"), Ok(expected));
        assert_eq!(DamageDice::parse("½d6"), Ok(DamageDice::new(0, true, 0)));
        assert_eq!(DamageDice::parse("1/2d6"), Ok(DamageDice::new(0, true, 0)));
    }

    #[test]
    fn parse_pips() {
        assert_eq!(DamageDice::parse("1d6+1"), Ok(DamageDice::new(1, false, 1)));
        assert_eq!(DamageDice::parse("3d6-1"), Ok(DamageDice::new(3, false, -1)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(DamageDice::parse(""), Err(DiceParseError::Empty));
        assert_eq!(DamageDice::parse("0d6"), Err(DiceParseError::InvalidDiceCount));
        assert!(matches!(
            DamageDice::parse("lots"),
            Err(DiceParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            DamageDice::parse("2d8"),
            Err(DiceParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            DamageDice::parse("2.3d6"),
            Err(DiceParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            DamageDice::parse("1d6+x"),
            Err(DiceParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn parse_lenient_returns_none_on_garbage() {
        assert_eq!(DamageDice::parse_lenient("not dice"), DamageDice::NONE);
        assert!(DamageDice::parse_lenient("").is_none());
        assert_eq!(DamageDice::parse_lenient("6d6"), DamageDice::new(6, false, 0));
    }

    #[test]
    fn from_active_points_normal_attack() {
        assert_eq!(DamageDice::from_active_points(60.0, 5.0), DamageDice::new(12, false, 0));
        assert_eq!(DamageDice::from_active_points(0.0, 5.0), DamageDice::NONE);
    }

    #[test]
    fn from_active_points_killing_attack() {
        assert_eq!(DamageDice::from_active_points(45.0, 15.0), DamageDice::new(3, false, 0));
        assert_eq!(DamageDice::from_active_points(50.0, 15.0), DamageDice::new(3, false, 1));
        assert_eq!(DamageDice::from_active_points(40.0, 15.0), DamageDice::new(2, true, 0));
    }

    #[test]
    fn active_points_inverts_from_active_points() {
        assert_eq!(DamageDice::new(2, true, 0).active_points(15.0), 40);
        assert_eq!(DamageDice::new(3, false, 1).active_points(15.0), 50);
        assert_eq!(DamageDice::new(12, false, 0).active_points(5.0), 60);
    }

    #[test]
    fn average_counts_half_die_as_two() {
        assert_eq!(DamageDice::new(2, true, 1).average(), 10.0);
    }

    #[test]
    fn display_format() {
        assert_eq!(DamageDice::new(12, false, 0).to_string(), "12d6");
        assert_eq!(DamageDice::new(2, true, 0).to_string(), "2½d6");
        assert_eq!(DamageDice::new(0, true, 0).to_string(), "½d6");
        assert_eq!(DamageDice::new(1, false, 1).to_string(), "1d6+1");
        assert_eq!(DamageDice::new(3, false, -1).to_string(), "3d6-1");
    }
}
