//! Document source ports.

use async_trait::async_trait;
use pointforge_domain::{Character, RulesCatalog};

use super::error::SourceError;

/// Supplies the rules catalog, loaded once per process.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load_catalog(&self) -> Result<RulesCatalog, SourceError>;
}

/// Supplies character documents by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterSource: Send + Sync {
    async fn load_character(&self, id: &str) -> Result<Character, SourceError>;
}
