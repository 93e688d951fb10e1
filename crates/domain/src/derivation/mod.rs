//! Stat derivation engine.
//!
//! Walks a character's powers and carried equipment and produces a flat,
//! provenance-tagged list of [`StatModification`]s. The result is a pure
//! function of the character: nothing is cached and nothing is written back.
//!
//! Order is discovery order: powers as listed, then equipment bonuses, then
//! the winning equipment defenses.

mod equipment;
mod rules;

pub use equipment::equipment_modifications;
pub use rules::{compound_source, power_modifications, GROWTH_DCV_THRESHOLDS};

pub use crate::value_objects::stat_total;

use crate::entities::{Character, Power, PowerKind};
use crate::value_objects::{EffectiveCharacteristic, Stat, StatModification};

/// Display name of the power containing `power`, if its parent is another
/// power on the same sheet.
fn parent_name<'a>(character: &'a Character, power: &Power) -> Option<&'a str> {
    let parent_id = power.parent_id()?;
    if power.id() == Some(parent_id) {
        return None;
    }
    character.power(parent_id).map(Power::name)
}

/// Every stat modification the character's powers and equipment grant.
pub fn derive_stat_modifications(character: &Character) -> Vec<StatModification> {
    character
        .powers
        .iter()
        .flat_map(|power| power_modifications(power, parent_name(character, power)))
        .chain(equipment_modifications(&character.equipment))
        .collect()
}

/// Powers the derivation engine has no rule for.
pub fn unrecognized_powers(character: &Character) -> impl Iterator<Item = &Power> {
    character
        .powers
        .iter()
        .filter(|power| power.kind() == PowerKind::Unrecognized)
}

/// Stored value, derived bonus, and effective total of one stat.
pub fn effective_characteristic(character: &Character, stat: Stat) -> EffectiveCharacteristic {
    let modifications = derive_stat_modifications(character);
    effective_with(character, &modifications, stat)
}

/// Every buyable characteristic, deriving modifications once.
pub fn effective_characteristics(character: &Character) -> Vec<(Stat, EffectiveCharacteristic)> {
    let modifications = derive_stat_modifications(character);
    Stat::CHARACTERISTICS
        .iter()
        .map(|&stat| (stat, effective_with(character, &modifications, stat)))
        .collect()
}

/// Effective value of `stat` against modifications already derived.
pub fn effective_with(
    character: &Character,
    modifications: &[StatModification],
    stat: Stat,
) -> EffectiveCharacteristic {
    EffectiveCharacteristic::new(
        character.characteristic_value(stat),
        stat_total(modifications, stat),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Characteristic, Equipment, PricedEntity};

    fn armor_item(name: &str, pd: i32) -> Equipment {
        Equipment::new(PricedEntity::new(name, 0.0))
            .carried()
            .with_sub_power(Power::leveled("Plating", "ARMOR", pd).with_defense_levels(Some(pd), Some(0)))
    }

    fn hero() -> Character {
        let mut character = Character::default();
        character
            .characteristics
            .push(Characteristic::new(Stat::Str, 20, 10.0));
        character.powers = vec![
            Power::leveled("Titan Form", "MULTIFORM", 0).with_id("titan"),
            Power::leveled("Mighty Arms", "STR", 10)
                .with_id("arms")
                .with_parent("titan"),
            Power::leveled("Growth", "GROWTH", 6).with_id("grow"),
            Power::leveled("Tough Hide", "RESISTANT_PROTECTION", 4),
        ];
        character.equipment = vec![armor_item("Vest", 5), armor_item("Plate", 8)];
        character
    }

    #[test]
    fn equipment_rpd_keeps_only_the_best_item() {
        let mut character = Character::default();
        character.equipment = vec![armor_item("Vest", 5), armor_item("Plate", 8)];

        let rpd: Vec<_> = derive_stat_modifications(&character)
            .into_iter()
            .filter(|m| m.stat() == Stat::ResistantPd)
            .collect();

        assert_eq!(rpd, vec![StatModification::new("Plate", Stat::ResistantPd, 8)]);
    }

    #[test]
    fn power_and_equipment_defenses_add() {
        let modifications = derive_stat_modifications(&hero());
        assert_eq!(stat_total(&modifications, Stat::ResistantPd), 4 + 8);
    }

    #[test]
    fn nested_characteristic_credits_parent_power() {
        let modifications = derive_stat_modifications(&hero());
        let arms = modifications
            .iter()
            .find(|m| m.stat() == Stat::Str && m.amount() == 10)
            .expect("mighty arms bonus");
        assert_eq!(arms.source(), "Titan Form (compound)");
    }

    #[test]
    fn dangling_parent_keeps_own_name() {
        let mut character = Character::default();
        character
            .powers
            .push(Power::leveled("Mighty Arms", "STR", 10).with_parent("gone"));
        let modifications = derive_stat_modifications(&character);
        assert_eq!(modifications[0].source(), "Mighty Arms");
    }

    #[test]
    fn effective_strength_adds_all_bonuses() {
        let strength = effective_characteristic(&hero(), Stat::Str);
        assert_eq!(strength.base(), 20);
        assert_eq!(strength.bonus(), 10 + 30);
        assert_eq!(strength.effective(), 60);
    }

    #[test]
    fn effective_characteristics_cover_every_characteristic() {
        let all = effective_characteristics(&hero());
        assert_eq!(all.len(), Stat::CHARACTERISTICS.len());
        let dcv = all
            .iter()
            .find(|(stat, _)| *stat == Stat::Dcv)
            .map(|(_, value)| value.effective());
        assert_eq!(dcv, Some(-1));
    }

    #[test]
    fn oversized_levels_in_document_saturate() {
        let character: Character = serde_json::from_str(
            r#"{
                "characteristics": [{"type": "STR", "totalValue": 20}],
                "powers": [
                    {"name": "Dense", "type": "DENSITYINCREASE", "levels": 30000000},
                    {"name": "Growth", "type": "GROWTH", "levels": 1e12}
                ]
            }"#,
        )
        .expect("character should deserialize");

        let modifications = derive_stat_modifications(&character);
        assert_eq!(stat_total(&modifications, Stat::Mass), i32::MAX);

        let strength = effective_characteristic(&character, Stat::Str);
        assert_eq!(strength.bonus(), i32::MAX);
        assert_eq!(strength.effective(), i32::MAX);
    }

    #[test]
    fn derivation_is_idempotent() {
        let character = hero();
        assert_eq!(
            derive_stat_modifications(&character),
            derive_stat_modifications(&character)
        );
    }

    #[test]
    fn unrecognized_powers_are_listed() {
        let character = hero();
        let names: Vec<&str> = unrecognized_powers(&character).map(Power::name).collect();
        assert_eq!(names, vec!["Titan Form"]);
    }
}
