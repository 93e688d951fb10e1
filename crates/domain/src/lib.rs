//! Point-cost accounting and stat derivation for point-buy character sheets.
//!
//! Everything here is pure: functions take a [`Character`] (and, for pricing,
//! a [`RulesCatalog`]) and return plain values. The crate performs no I/O
//! and keeps no global state.

pub mod calculation;
pub mod catalog;
pub mod common;
pub mod derivation;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use calculation::{
    active_cost, adder_cost, available_points, calculate_power_total, cost_breakdown,
    points_summary, price_character, price_entity, real_cost, total_points_spent, CostBreakdown,
    CostError, LimitationPolicy, PointsSummary, PricedCharacter, Pricing, PricingIssue,
};
pub use catalog::{AbilityCategory, AbilityDefinition, CatalogDocument, ModifierDefinition, RulesCatalog};
pub use derivation::{derive_stat_modifications, effective_characteristic, effective_characteristics};
pub use entities::{
    Adder, BasicConfiguration, Character, Characteristic, Disadvantage, Equipment, Modifier, Power,
    PowerKind, Priced, PricedEntity,
};
pub use error::DomainError;
pub use value_objects::{
    round_for_cost, round_for_effect, stat_total, DamageDice, DiceParseError,
    EffectiveCharacteristic, Stat, StatModification,
};
