//! Engine settings read from the environment.

use std::path::PathBuf;

use pointforge_domain::{DomainError, LimitationPolicy};

pub const CATALOG_PATH_VAR: &str = "POINTFORGE_CATALOG_PATH";
pub const CHARACTER_PATH_VAR: &str = "POINTFORGE_CHARACTER_PATH";
pub const LIMITATION_POLICY_VAR: &str = "POINTFORGE_LIMITATION_POLICY";
pub const LIMITATION_FLOOR_VAR: &str = "POINTFORGE_LIMITATION_FLOOR";
pub const CACHE_CAPACITY_VAR: &str = "POINTFORGE_CACHE_CAPACITY";

const DEFAULT_CATALOG_PATH: &str = "catalog.json";
const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Runtime configuration for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub catalog_path: PathBuf,
    pub character_path: Option<PathBuf>,
    pub limitation_policy: LimitationPolicy,
    /// Report cache entries; zero disables the cache
    pub cache_capacity: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            character_path: None,
            limitation_policy: LimitationPolicy::Reject,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EngineSettings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Unparseable values fall back to
    /// defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let clamp = value(LIMITATION_FLOOR_VAR)
            .and_then(|raw| {
                raw.parse::<f64>()
                    .map_err(|e| DomainError::parse(e.to_string()))
                    .and_then(LimitationPolicy::clamp_with)
                    .map_err(|e| {
                        tracing::warn!(value = %raw, error = %e, "{LIMITATION_FLOOR_VAR} rejected, using default");
                    })
                    .ok()
            })
            .unwrap_or_else(LimitationPolicy::clamp);

        let limitation_policy = match value(LIMITATION_POLICY_VAR) {
            None => defaults.limitation_policy,
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "reject" => LimitationPolicy::Reject,
                "clamp" => clamp,
                _ => {
                    tracing::warn!(value = %raw, "{LIMITATION_POLICY_VAR} must be 'reject' or 'clamp', using default");
                    defaults.limitation_policy
                }
            },
        };

        let cache_capacity = value(CACHE_CAPACITY_VAR)
            .and_then(|raw| {
                raw.parse::<usize>()
                    .map_err(|_| {
                        tracing::warn!(value = %raw, "{CACHE_CAPACITY_VAR} is not a count, using default");
                    })
                    .ok()
            })
            .unwrap_or(defaults.cache_capacity);

        Self {
            catalog_path: value(CATALOG_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            character_path: value(CHARACTER_PATH_VAR).map(PathBuf::from),
            limitation_policy,
            cache_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> EngineSettings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(settings(&[]), EngineSettings::default());
    }

    #[test]
    fn reads_all_variables() {
        let settings = settings(&[
            (CATALOG_PATH_VAR, "/data/hero.json"),
            (CHARACTER_PATH_VAR, "sheets/nighthawk.json"),
            (LIMITATION_POLICY_VAR, "Clamp"),
            (LIMITATION_FLOOR_VAR, "0.5"),
            (CACHE_CAPACITY_VAR, "0"),
        ]);
        assert_eq!(settings.catalog_path, PathBuf::from("/data/hero.json"));
        assert_eq!(
            settings.character_path,
            Some(PathBuf::from("sheets/nighthawk.json"))
        );
        assert_eq!(settings.limitation_policy, LimitationPolicy::Clamp { floor: 0.5 });
        assert_eq!(settings.cache_capacity, 0);
    }

    #[test]
    fn clamp_without_floor_uses_default_floor() {
        let settings = settings(&[(LIMITATION_POLICY_VAR, "clamp")]);
        assert_eq!(settings.limitation_policy, LimitationPolicy::clamp());
    }

    #[test]
    fn unparseable_values_fall_back() {
        let settings = settings(&[
            (LIMITATION_POLICY_VAR, "ignore"),
            (LIMITATION_FLOOR_VAR, "-1"),
            (CACHE_CAPACITY_VAR, "lots"),
            (CATALOG_PATH_VAR, "   "),
        ]);
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn invalid_floor_keeps_default_clamp() {
        for floor in ["0", "-1", "inf", "wide"] {
            let settings = settings(&[(LIMITATION_POLICY_VAR, "clamp"), (LIMITATION_FLOOR_VAR, floor)]);
            assert_eq!(settings.limitation_policy, LimitationPolicy::clamp(), "floor {floor}");
        }
    }
}
