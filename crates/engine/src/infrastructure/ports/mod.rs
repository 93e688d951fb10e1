//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Ports exist for:
//! - The rules catalog (could swap a JSON file for a bundled data set)
//! - Character documents (could swap a directory for a document store)

mod error;
mod sources;

pub use error::SourceError;
pub use sources::{CatalogSource, CharacterSource};

#[cfg(test)]
pub use sources::{MockCatalogSource, MockCharacterSource};
