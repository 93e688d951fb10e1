//! Test fixtures loader for JSON files under `test_data/`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::load_fixture;
//!
//! #[test]
//! fn nighthawk_has_powers() {
//!     let character: Character = load_fixture("characters/nighthawk.json");
//!     assert!(!character.powers.is_empty());
//! }
//! ```

use std::path::PathBuf;

/// Absolute path of a fixture under `test_data/`.
pub fn fixture_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path)
}

/// Load a JSON fixture from the `test_data/` directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = fixture_path(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// Load a fixture and return Option instead of panicking.
pub fn try_load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> Option<T> {
    let content = std::fs::read_to_string(fixture_path(path)).ok()?;
    serde_json::from_str(&content).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointforge_domain::{CatalogDocument, Character};

    #[test]
    fn fixtures_parse() {
        let catalog: CatalogDocument = load_fixture("catalog.json");
        assert!(!catalog.abilities.is_empty());

        let character: Character = load_fixture("characters/nighthawk.json");
        assert_eq!(character.name, "Nighthawk");
        assert_eq!(character.equipment.len(), 3);
    }

    #[test]
    fn missing_fixture_is_none() {
        assert!(try_load_fixture::<Character>("characters/nobody.json").is_none());
    }
}
