//! Aggregation engine - category totals without double counting.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::{Character, Power, Priced};

/// Flat sum of `realCost ?? baseCost` over a section.
pub fn category_total<T: Priced>(items: &[T]) -> f64 {
    items.iter().map(|item| item.priced().cost()).sum()
}

/// For each entry, whether its parent is another entry of the same section.
///
/// Membership is checked against the ids present in `items`, so a dangling
/// or cross-section `parentId` does not contain. An entry naming itself as
/// parent is not contained.
pub fn containment_flags<T: Priced>(items: &[T]) -> Vec<bool> {
    let ids: HashSet<&str> = items
        .iter()
        .filter_map(|item| item.priced().id.as_deref())
        .collect();

    items
        .iter()
        .map(Priced::priced)
        .map(|entity| match entity.parent_id.as_deref() {
            Some(parent) => entity.id.as_deref() != Some(parent) && ids.contains(parent),
            None => false,
        })
        .collect()
}

/// Sum over a section, skipping contained entries.
pub fn contained_total<T: Priced>(items: &[T]) -> f64 {
    items
        .iter()
        .zip(containment_flags(items))
        .filter(|(_, contained)| !contained)
        .map(|(item, _)| item.priced().cost())
        .sum()
}

/// Containment-aware total of a power list.
pub fn calculate_power_total(powers: &[Power]) -> f64 {
    contained_total(powers)
}

/// Per-section totals plus the grand total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub characteristics: f64,
    pub skills: f64,
    pub perks: f64,
    pub talents: f64,
    pub martial_arts: f64,
    pub powers: f64,
    pub total: f64,
}

pub fn cost_breakdown(character: &Character) -> CostBreakdown {
    let characteristics = category_total(&character.characteristics);
    let skills = category_total(&character.skills);
    let perks = category_total(&character.perks);
    let talents = category_total(&character.talents);
    let martial_arts = category_total(&character.martial_arts);
    let powers = calculate_power_total(&character.powers);

    CostBreakdown {
        characteristics,
        skills,
        perks,
        talents,
        martial_arts,
        powers,
        total: characteristics + skills + perks + talents + martial_arts + powers,
    }
}

pub fn total_points_spent(character: &Character) -> f64 {
    cost_breakdown(character).total
}
