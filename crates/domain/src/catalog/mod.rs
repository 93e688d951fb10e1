//! Rules catalog - read-only ability and modifier definitions.
//!
//! The catalog is reference data supplied by the host. It is built once and
//! passed explicitly to pricing; nothing in the domain looks it up globally,
//! so tests can substitute a catalog of their own.

mod definitions;

pub use definitions::{
    AbilityCategory, AbilityDefinition, AdderDefinition, ModifierDefinition, ModifierOption,
    OptionDefinition,
};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calculation::adder_cost;
use crate::entities::{Modifier, PricedEntity};

/// Serialized catalog shape: two flat definition lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogDocument {
    pub abilities: Vec<AbilityDefinition>,
    pub modifiers: Vec<ModifierDefinition>,
}

/// Immutable lookup of ability and modifier definitions by identifier.
///
/// Identifiers are matched case-insensitively ("blast" finds "BLAST").
#[derive(Debug, Clone, Default)]
pub struct RulesCatalog {
    abilities: HashMap<String, AbilityDefinition>,
    modifiers: HashMap<String, ModifierDefinition>,
}

fn key(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}

impl RulesCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parsed catalog document. Later duplicates replace earlier ones.
    pub fn from_document(document: CatalogDocument) -> Self {
        document
            .abilities
            .into_iter()
            .fold(Self::new(), Self::with_ability)
            .with_modifiers(document.modifiers)
    }

    pub fn with_ability(mut self, definition: AbilityDefinition) -> Self {
        self.abilities.insert(key(&definition.id), definition);
        self
    }

    pub fn with_modifier(mut self, definition: ModifierDefinition) -> Self {
        self.modifiers.insert(key(&definition.id), definition);
        self
    }

    fn with_modifiers(self, definitions: Vec<ModifierDefinition>) -> Self {
        definitions.into_iter().fold(self, Self::with_modifier)
    }

    pub fn ability(&self, id: &str) -> Option<&AbilityDefinition> {
        self.abilities.get(&key(id))
    }

    pub fn modifier(&self, id: &str) -> Option<&ModifierDefinition> {
        self.modifiers.get(&key(id))
    }

    /// Whether the catalog defines this ability type.
    pub fn knows(&self, ability_type: &str) -> bool {
        self.abilities.contains_key(&key(ability_type))
    }

    pub fn ability_count(&self) -> usize {
        self.abilities.len()
    }

    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    /// Definition for an entity's declared type.
    pub fn definition_for(&self, entity: &PricedEntity) -> Option<&AbilityDefinition> {
        entity
            .entity_type
            .as_deref()
            .and_then(|ability_type| self.ability(ability_type))
    }

    /// Cost of an entity before any modifiers.
    ///
    /// With a definition: the selected option's base cost (or the definition's),
    /// plus `levels * lvlCost`, plus the entity's adders. Without one, the
    /// entity's own base cost plus its adders.
    pub fn raw_cost(&self, entity: &PricedEntity) -> f64 {
        let adders = adder_cost(&entity.adders);
        match self.definition_for(entity) {
            Some(definition) => {
                let base = entity
                    .option_id
                    .as_deref()
                    .and_then(|option_id| definition.option(option_id))
                    .map(|option| option.base_cost)
                    .unwrap_or(definition.base_cost);
                base + entity.levels() as f64 * definition.lvl_cost + adders
            }
            None => entity.base_cost + adders,
        }
    }

    /// A modifier's effective multiplier: the chosen option's value when the
    /// option resolves, otherwise the value written on the modifier.
    pub fn modifier_value(&self, modifier: &Modifier) -> f64 {
        modifier
            .id
            .as_deref()
            .and_then(|id| self.modifier(id))
            .zip(modifier.option_id.as_deref())
            .and_then(|(definition, option_id)| definition.option(option_id))
            .map(|option| option.value)
            .unwrap_or(modifier.value)
    }

    /// Copy of `modifiers` with each value resolved through the catalog.
    pub fn resolve_modifiers(&self, modifiers: &[Modifier]) -> Vec<Modifier> {
        modifiers
            .iter()
            .map(|modifier| Modifier {
                value: self.modifier_value(modifier),
                ..modifier.clone()
            })
            .collect()
    }
}
