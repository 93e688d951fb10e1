//! Character sheet operation errors.

use crate::infrastructure::ports::SourceError;
use pointforge_domain::DomainError;

/// Errors that can occur during character sheet operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Invalid configuration for {entity}: limitation sum {limitation_sum} cannot be priced")]
    InvalidConfiguration { entity: String, limitation_sum: f64 },

    #[error("Character could not be fingerprinted: {0}")]
    Fingerprint(#[from] serde_json::Error),
}

impl CharacterSheetError {
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
