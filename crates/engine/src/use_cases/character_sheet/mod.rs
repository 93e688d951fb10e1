//! Character sheet use cases.
//!
//! Prices a character against the rules catalog, then builds the full sheet
//! report: cost breakdown, points summary, derived stat modifications, and
//! effective characteristics.

mod error;
mod report;

pub use error::CharacterSheetError;
pub use report::{PowerSummary, SheetReport};

use std::sync::Arc;

use pointforge_domain::calculation::containment_flags;
use pointforge_domain::derivation::{effective_with, unrecognized_powers};
use pointforge_domain::{
    cost_breakdown, derive_stat_modifications, points_summary, price_character, price_entity,
    Character, DomainError, EffectiveCharacteristic, LimitationPolicy, PricedCharacter,
    PricedEntity, Pricing, RulesCatalog, Stat,
};

use crate::infrastructure::cache::{fingerprint, DocumentCache};
use crate::infrastructure::ports::{CatalogSource, CharacterSource};

/// Reports keyed by character document fingerprint.
pub type ReportCache = DocumentCache<SheetReport>;

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    catalog: Arc<RulesCatalog>,
    characters: Arc<dyn CharacterSource>,
    policy: LimitationPolicy,
    cache: ReportCache,
}

impl CharacterSheetUseCases {
    pub fn new(
        catalog: Arc<RulesCatalog>,
        characters: Arc<dyn CharacterSource>,
        policy: LimitationPolicy,
        cache_capacity: usize,
    ) -> Self {
        Self {
            catalog,
            characters,
            policy,
            cache: ReportCache::new(cache_capacity),
        }
    }

    /// Load the catalog once and build the use cases around it.
    pub async fn load(
        catalogs: &dyn CatalogSource,
        characters: Arc<dyn CharacterSource>,
        policy: LimitationPolicy,
        cache_capacity: usize,
    ) -> Result<Self, CharacterSheetError> {
        let catalog = catalogs.load_catalog().await?;
        tracing::info!(
            abilities = catalog.ability_count(),
            modifiers = catalog.modifier_count(),
            "Rules catalog loaded"
        );
        Ok(Self::new(
            Arc::new(catalog),
            characters,
            policy,
            cache_capacity,
        ))
    }

    pub fn catalog(&self) -> &RulesCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> LimitationPolicy {
        self.policy
    }

    pub fn cache(&self) -> &ReportCache {
        &self.cache
    }

    /// Price every entity, logging each one the policy had to act on.
    fn price_logged(&self, character: &Character) -> PricedCharacter {
        let priced = price_character(character, &self.catalog, self.policy);
        for issue in &priced.issues {
            tracing::warn!(
                character = %character.name,
                entity = %issue.entity,
                limitation_sum = issue.limitation_sum,
                clamped = issue.clamped,
                "Limitations leave no valid cost denominator"
            );
        }
        priced
    }

    /// Price under the configured policy, failing on any rejected entity.
    fn price_checked(&self, character: &Character) -> Result<PricedCharacter, CharacterSheetError> {
        let priced = self.price_logged(character);
        match priced.issues.iter().find(|issue| !issue.clamped) {
            Some(issue) => Err(CharacterSheetError::InvalidConfiguration {
                entity: issue.entity.clone(),
                limitation_sum: issue.limitation_sum,
            }),
            None => Ok(priced),
        }
    }

    /// Price all entities of a character under the configured policy.
    ///
    /// Under `Reject`, any entity with an invalid limitation total fails the
    /// whole call.
    pub fn price(&self, character: &Character) -> Result<Character, CharacterSheetError> {
        self.price_checked(character).map(|priced| priced.character)
    }

    /// Price a single entity against the catalog.
    ///
    /// Ignores the configured policy: an invalid limitation total is always
    /// an error here.
    pub fn price_entity(&self, entity: &PricedEntity) -> Result<Pricing, CharacterSheetError> {
        let pricing = price_entity(entity, &self.catalog).map_err(DomainError::from)?;
        Ok(pricing)
    }

    /// Build the sheet report for a character.
    ///
    /// Reports are cached by document fingerprint when the cache is enabled.
    pub fn report(&self, character: &Character) -> Result<SheetReport, CharacterSheetError> {
        let key = if self.cache.is_enabled() {
            let key = fingerprint(character)?;
            if let Some(report) = self.cache.get(&key) {
                tracing::debug!(character = %character.name, "Report cache hit");
                return Ok(SheetReport::clone(&report));
            }
            Some(key)
        } else {
            None
        };

        let report = self.build_report(character)?;
        if let Some(key) = key {
            self.cache.insert(key, report.clone());
        }
        Ok(report)
    }

    /// Load a character by id and report on it.
    pub async fn report_by_id(&self, id: &str) -> Result<SheetReport, CharacterSheetError> {
        let character = self.characters.load_character(id).await?;
        self.report(&character)
    }

    /// Effective value of one stat, given its document code (e.g., "STR").
    pub fn effective_characteristic(
        &self,
        character: &Character,
        code: &str,
    ) -> Result<EffectiveCharacteristic, CharacterSheetError> {
        let stat: Stat = code.parse()?;
        let modifications = derive_stat_modifications(character);
        Ok(effective_with(character, &modifications, stat))
    }

    fn build_report(&self, character: &Character) -> Result<SheetReport, CharacterSheetError> {
        let PricedCharacter { character, issues } = self.price_checked(character)?;

        for (power, err) in character
            .powers
            .iter()
            .filter_map(|power| power.parsed_damage().err().map(|err| (power, err)))
        {
            tracing::debug!(
                character = %character.name,
                power = %power.name(),
                error = %err,
                "Unreadable damage notation, reported without dice"
            );
        }

        for power in unrecognized_powers(&character) {
            tracing::debug!(
                character = %character.name,
                power = %power.name(),
                "No derivation rule for power, skipped"
            );
        }

        let breakdown = cost_breakdown(&character);
        let points = points_summary(&character);
        let modifications = derive_stat_modifications(&character);
        let characteristics = Stat::CHARACTERISTICS
            .iter()
            .map(|&stat| (stat, effective_with(&character, &modifications, stat)))
            .collect();
        let powers = character
            .powers
            .iter()
            .zip(containment_flags(&character.powers))
            .map(|(power, contained)| PowerSummary::from_power(power, contained))
            .collect();

        tracing::info!(
            character = %character.name,
            spent = breakdown.total,
            available = points.available,
            modifications = modifications.len(),
            "Character priced"
        );

        Ok(SheetReport {
            name: character.name.clone(),
            breakdown,
            points,
            modifications,
            characteristics,
            powers,
            issues,
        })
    }
}
