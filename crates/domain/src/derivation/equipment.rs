//! Equipment pass - stacking characteristics, non-stacking defenses.
//!
//! Characteristic sub-powers stack like any other bonus. Defensive gear does
//! not: across every carried item only the single best rPD and the single
//! best rED survive, each credited to the item that supplied it.

use super::rules::characteristic_bonus;
use crate::entities::{Equipment, Power, PowerKind};
use crate::value_objects::{Stat, StatModification};

/// A defense value competing for the equipment slot.
#[derive(Debug, Clone, PartialEq)]
struct Candidate {
    source: String,
    amount: i32,
}

fn best(current: Option<Candidate>, source: &str, amount: i32) -> Option<Candidate> {
    match current {
        Some(held) if held.amount >= amount => Some(held),
        _ if amount > 0 => Some(Candidate {
            source: source.to_string(),
            amount,
        }),
        held => held,
    }
}

/// Running state of the equipment fold.
#[derive(Debug, Default)]
struct EquipmentPass {
    stacking: Vec<StatModification>,
    best_pd: Option<Candidate>,
    best_ed: Option<Candidate>,
}

impl EquipmentPass {
    fn offer_defense(self, source: &str, pd: i32, ed: i32) -> Self {
        Self {
            best_pd: best(self.best_pd, source, pd),
            best_ed: best(self.best_ed, source, ed),
            ..self
        }
    }

    fn absorb_sub_power(mut self, item: &Equipment, power: &Power) -> Self {
        match power.kind() {
            PowerKind::Characteristic(stat) => {
                self.stacking
                    .extend(characteristic_bonus(power, stat, Some(item.name())));
                self
            }
            PowerKind::ResistantProtection {
                pd_levels,
                ed_levels,
            } => {
                let half = power.levels().div_euclid(2);
                self.offer_defense(
                    item.name(),
                    pd_levels.unwrap_or(half),
                    ed_levels.unwrap_or(half),
                )
            }
            _ => self,
        }
    }

    fn absorb(self, item: &Equipment) -> Self {
        if item.is_compound() {
            item.sub_powers
                .iter()
                .fold(self, |pass, power| pass.absorb_sub_power(item, power))
        } else if item.is_legacy_defensive() {
            let levels = item.legacy_defense_levels();
            self.offer_defense(item.name(), levels, levels)
        } else {
            self
        }
    }

    fn finish(self) -> Vec<StatModification> {
        let defenses = [
            (Stat::ResistantPd, self.best_pd),
            (Stat::ResistantEd, self.best_ed),
        ]
        .into_iter()
        .filter_map(|(stat, candidate)| {
            candidate.map(|c| StatModification::new(c.source, stat, c.amount))
        });

        self.stacking.into_iter().chain(defenses).collect()
    }
}

/// Modifications contributed by carried equipment.
///
/// Characteristic bonuses come first in discovery order, then at most one
/// rPD and one rED.
pub fn equipment_modifications(equipment: &[Equipment]) -> Vec<StatModification> {
    equipment
        .iter()
        .filter(|item| item.carried)
        .fold(EquipmentPass::default(), EquipmentPass::absorb)
        .finish()
}
