//! Lenient field deserializers for user-edited character documents.
//!
//! Documents arrive half-finished while a player is still editing them, so a
//! numeric field may hold a number, a numeric string, `null`, or garbage.
//! Anything that is not a finite number reads as zero (or `None` for the
//! optional variants) instead of failing the whole document.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Any JSON-ish scalar, captured without failing.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Loose {
    fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Loose::Int(i) => *i as f64,
            Loose::Float(f) => *f,
            Loose::Text(s) => s.trim().parse::<f64>().ok()?,
            Loose::Bool(_) | Loose::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    fn as_i32(&self) -> Option<i32> {
        self.as_f64()
            .map(|v| v.trunc().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            Loose::Bool(b) => Some(*b),
            Loose::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" => Some(true),
                "false" | "no" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Number or `0.0`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?.as_f64().unwrap_or(0.0))
}

/// Number or `None`.
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?.as_f64())
}

/// Integer (fractions truncated) or `0`.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?.as_i32().unwrap_or(0))
}

/// Integer (fractions truncated) or `None`.
pub fn lenient_opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?.as_i32())
}

/// Boolean or `false`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?.as_bool().unwrap_or(false))
}

/// Boolean or `None`, for flags whose absence means something other than `false`.
pub fn lenient_opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?.as_bool())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_f64")]
        cost: f64,
        #[serde(default, deserialize_with = "lenient_opt_f64")]
        cached: Option<f64>,
        #[serde(default, deserialize_with = "lenient_i32")]
        levels: i32,
        #[serde(default, deserialize_with = "lenient_opt_i32")]
        pd: Option<i32>,
        #[serde(default, deserialize_with = "lenient_bool")]
        carried: bool,
        #[serde(default, deserialize_with = "lenient_opt_bool")]
        affects: Option<bool>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).expect("probe should always deserialize")
    }

    #[test]
    fn missing_fields_take_defaults() {
        let p = probe("{}");
        assert_eq!(p.cost, 0.0);
        assert_eq!(p.cached, None);
        assert_eq!(p.levels, 0);
        assert_eq!(p.pd, None);
        assert!(!p.carried);
        assert_eq!(p.affects, None);
    }

    #[test]
    fn numbers_and_numeric_strings_are_read() {
        let p = probe(r#"{"cost": "12.5", "cached": 30, "levels": 7.9, "pd": "4"}"#);
        assert_eq!(p.cost, 12.5);
        assert_eq!(p.cached, Some(30.0));
        assert_eq!(p.levels, 7);
        assert_eq!(p.pd, Some(4));
    }

    #[test]
    fn garbage_reads_as_zero_or_none() {
        let p = probe(r#"{"cost": "lots", "cached": null, "levels": [1, 2], "pd": {"x": 1}}"#);
        assert_eq!(p.cost, 0.0);
        assert_eq!(p.cached, None);
        assert_eq!(p.levels, 0);
        assert_eq!(p.pd, None);
    }

    #[test]
    fn boolean_strings_are_accepted() {
        let p = probe(r#"{"carried": "Yes", "affects": "false"}"#);
        assert!(p.carried);
        assert_eq!(p.affects, Some(false));

        let p = probe(r#"{"carried": 1, "affects": "maybe"}"#);
        assert!(!p.carried);
        assert_eq!(p.affects, None);
    }
}
