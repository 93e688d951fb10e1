//! Entity and character pricing against a rules catalog.

use serde::{Deserialize, Serialize};

use super::cost::{active_cost, real_cost, real_cost_with_floor, CostError};
use crate::catalog::{AbilityCategory, RulesCatalog};
use crate::entities::{Character, Priced, PricedEntity};
use crate::error::DomainError;

/// Smallest denominator `Clamp` divides by unless told otherwise.
pub const DEFAULT_LIMITATION_FLOOR: f64 = 0.01;

/// The three prices of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub raw_cost: f64,
    pub active_cost: i32,
    pub real_cost: i32,
}

/// What to do when limitations leave no valid cost denominator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "policy")]
pub enum LimitationPolicy {
    /// Leave the entity unpriced and report it
    #[default]
    Reject,
    /// Divide by `floor` instead, and report it
    Clamp { floor: f64 },
}

impl LimitationPolicy {
    pub fn clamp() -> Self {
        Self::Clamp {
            floor: DEFAULT_LIMITATION_FLOOR,
        }
    }

    /// `Clamp` with a custom floor, which must be finite and positive.
    pub fn clamp_with(floor: f64) -> Result<Self, DomainError> {
        if floor.is_finite() && floor > 0.0 {
            Ok(Self::Clamp { floor })
        } else {
            Err(DomainError::validation(format!(
                "limitation floor must be a positive number, got {floor}"
            )))
        }
    }
}

/// Price one entity: raw cost from the catalog, modifier values resolved
/// through the catalog, then active and real cost.
pub fn price_entity(entity: &PricedEntity, catalog: &RulesCatalog) -> Result<Pricing, CostError> {
    let raw_cost = catalog.raw_cost(entity);
    let modifiers = catalog.resolve_modifiers(&entity.modifiers);
    let active = active_cost(raw_cost, &modifiers);
    Ok(Pricing {
        raw_cost,
        active_cost: active,
        real_cost: real_cost(active, &modifiers)?,
    })
}

/// Price one entity, never failing: invalid denominators become `floor`.
pub fn price_entity_clamped(entity: &PricedEntity, catalog: &RulesCatalog, floor: f64) -> Pricing {
    let raw_cost = catalog.raw_cost(entity);
    let modifiers = catalog.resolve_modifiers(&entity.modifiers);
    let active = active_cost(raw_cost, &modifiers);
    Pricing {
        raw_cost,
        active_cost: active,
        real_cost: real_cost_with_floor(active, &modifiers, floor),
    }
}

/// An entity whose limitations could not be priced as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingIssue {
    pub category: AbilityCategory,
    pub entity: String,
    pub limitation_sum: f64,
    /// True when the entity was priced with the clamped denominator
    pub clamped: bool,
}

/// A character with every cost cache refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedCharacter {
    pub character: Character,
    pub issues: Vec<PricingIssue>,
}

impl PricedCharacter {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

fn write_pricing(entity: &mut PricedEntity, pricing: Pricing) {
    entity.active_cost = Some(f64::from(pricing.active_cost));
    entity.real_cost = Some(f64::from(pricing.real_cost));
}

fn price_section<T: Priced>(
    items: &mut [T],
    category: AbilityCategory,
    catalog: &RulesCatalog,
    policy: LimitationPolicy,
    issues: &mut Vec<PricingIssue>,
) {
    for item in items {
        let entity = item.priced_mut();
        match price_entity(entity, catalog) {
            Ok(pricing) => write_pricing(entity, pricing),
            Err(CostError::InvalidModifierSum { limitation_sum }) => {
                let clamped = match policy {
                    LimitationPolicy::Reject => false,
                    LimitationPolicy::Clamp { floor } => {
                        let pricing = price_entity_clamped(entity, catalog, floor);
                        write_pricing(entity, pricing);
                        true
                    }
                };
                issues.push(PricingIssue {
                    category,
                    entity: entity.name.clone(),
                    limitation_sum,
                    clamped,
                });
            }
        }
    }
}

/// Price every entity in the six cost sections of a character.
///
/// Returns a copy; the input is left untouched. Under `Reject`, entities
/// with an invalid limitation total keep whatever caches they had.
pub fn price_character(
    character: &Character,
    catalog: &RulesCatalog,
    policy: LimitationPolicy,
) -> PricedCharacter {
    let mut priced = character.clone();
    let mut issues = Vec::new();

    price_section(
        &mut priced.characteristics,
        AbilityCategory::Characteristic,
        catalog,
        policy,
        &mut issues,
    );
    price_section(&mut priced.skills, AbilityCategory::Skill, catalog, policy, &mut issues);
    price_section(&mut priced.perks, AbilityCategory::Perk, catalog, policy, &mut issues);
    price_section(&mut priced.talents, AbilityCategory::Talent, catalog, policy, &mut issues);
    price_section(
        &mut priced.martial_arts,
        AbilityCategory::MartialManeuver,
        catalog,
        policy,
        &mut issues,
    );
    price_section(&mut priced.powers, AbilityCategory::Power, catalog, policy, &mut issues);

    PricedCharacter {
        character: priced,
        issues,
    }
}
