//! Power entity - a priced ability with a resolved derivation category.

use serde::{Deserialize, Serialize};

use super::power_kind::PowerKind;
use super::priced::{Priced, PricedEntity};
use crate::common::{lenient_opt_bool, lenient_opt_i32};
use crate::error::DomainError;
use crate::value_objects::DamageDice;

/// A power on a character sheet.
///
/// The document's loosely typed fields (`type`, `pdLevels`, `edLevels`) are
/// resolved into a [`PowerKind`] when the power is read, so derivation never
/// probes for optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PowerRecord", into = "PowerRecord")]
pub struct Power {
    entity: PricedEntity,
    kind: PowerKind,
    affects_primary: bool,
    affects_total: bool,
    damage: Option<String>,
}

impl Power {
    /// Create a power, classifying it from the entity's type and name.
    pub fn new(entity: PricedEntity) -> Self {
        let kind = PowerKind::resolve(entity.entity_type.as_deref(), &entity.name, None, None);
        Self {
            entity,
            kind,
            affects_primary: true,
            affects_total: true,
            damage: None,
        }
    }

    /// Shorthand for a typed power with levels.
    pub fn leveled(name: impl Into<String>, power_type: impl Into<String>, levels: i32) -> Self {
        Self::new(
            PricedEntity::new(name, 0.0)
                .with_type(power_type)
                .with_levels(levels),
        )
    }

    /// Re-classify with an explicit PD/ED split.
    pub fn with_defense_levels(mut self, pd_levels: Option<i32>, ed_levels: Option<i32>) -> Self {
        self.kind = PowerKind::resolve(
            self.entity.entity_type.as_deref(),
            &self.entity.name,
            pd_levels,
            ed_levels,
        );
        self
    }

    pub fn with_affects_primary(mut self, affects_primary: bool) -> Self {
        self.affects_primary = affects_primary;
        self
    }

    pub fn with_affects_total(mut self, affects_total: bool) -> Self {
        self.affects_total = affects_total;
        self
    }

    pub fn with_damage(mut self, damage: impl Into<String>) -> Self {
        self.damage = Some(damage.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = Some(id.into());
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.entity.parent_id = Some(parent_id.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn entity(&self) -> &PricedEntity {
        &self.entity
    }

    pub fn id(&self) -> Option<&str> {
        self.entity.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.entity.parent_id.as_deref()
    }

    pub fn levels(&self) -> i32 {
        self.entity.levels()
    }

    pub fn kind(&self) -> PowerKind {
        self.kind
    }

    /// Whether bonuses to primary characteristics apply (absent = yes).
    pub fn affects_primary(&self) -> bool {
        self.affects_primary
    }

    /// Whether bonuses to defense and movement totals apply (absent = yes).
    pub fn affects_total(&self) -> bool {
        self.affects_total
    }

    /// Raw damage notation as written on the sheet.
    pub fn damage(&self) -> Option<&str> {
        self.damage.as_deref()
    }

    /// Parsed damage dice; malformed notation reads as no dice.
    pub fn damage_dice(&self) -> Option<DamageDice> {
        self.damage.as_deref().map(DamageDice::parse_lenient)
    }

    /// Strictly parsed damage dice, `None` when the power has no damage.
    pub fn parsed_damage(&self) -> Result<Option<DamageDice>, DomainError> {
        self.damage
            .as_deref()
            .map(|notation| DamageDice::parse(notation).map_err(DomainError::from))
            .transpose()
    }
}

impl Priced for Power {
    fn priced(&self) -> &PricedEntity {
        &self.entity
    }

    fn priced_mut(&mut self) -> &mut PricedEntity {
        &mut self.entity
    }
}

/// Document shape of a power.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PowerRecord {
    #[serde(flatten)]
    entity: PricedEntity,
    #[serde(
        default,
        deserialize_with = "lenient_opt_bool",
        skip_serializing_if = "Option::is_none"
    )]
    affects_primary: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_bool",
        skip_serializing_if = "Option::is_none"
    )]
    affects_total: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_i32",
        skip_serializing_if = "Option::is_none"
    )]
    pd_levels: Option<i32>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_i32",
        skip_serializing_if = "Option::is_none"
    )]
    ed_levels: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    damage: Option<String>,
}

impl From<PowerRecord> for Power {
    fn from(record: PowerRecord) -> Self {
        let kind = PowerKind::resolve(
            record.entity.entity_type.as_deref(),
            &record.entity.name,
            record.pd_levels,
            record.ed_levels,
        );
        Self {
            entity: record.entity,
            kind,
            affects_primary: record.affects_primary.unwrap_or(true),
            affects_total: record.affects_total.unwrap_or(true),
            damage: record.damage,
        }
    }
}

impl From<Power> for PowerRecord {
    fn from(power: Power) -> Self {
        let (pd_levels, ed_levels) = power.kind.defense_levels();
        Self {
            entity: power.entity,
            affects_primary: (!power.affects_primary).then_some(false),
            affects_total: (!power.affects_total).then_some(false),
            pd_levels,
            ed_levels,
            damage: power.damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Stat;

    #[test]
    fn deserialize_resolves_kind_once() {
        let power: Power = serde_json::from_str(
            r#"{
                "id": "rp",
                "name": "Tough Skin",
                "type": "RESISTANT_PROTECTION",
                "levels": 10,
                "pdLevels": 6,
                "edLevels": "4",
                "affectsTotal": "yes"
            }"#,
        )
        .expect("power should deserialize");

        assert_eq!(
            power.kind(),
            PowerKind::ResistantProtection {
                pd_levels: Some(6),
                ed_levels: Some(4)
            }
        );
        assert!(power.affects_primary());
        assert!(power.affects_total());
        assert_eq!(power.levels(), 10);
    }

    #[test]
    fn absent_flags_default_to_affecting() {
        let power: Power =
            serde_json::from_str(r#"{"name": "Big", "type": "STR", "levels": 5, "affectsPrimary": false}"#)
                .expect("power should deserialize");
        assert_eq!(power.kind(), PowerKind::Characteristic(Stat::Str));
        assert!(!power.affects_primary());
        assert!(power.affects_total());
    }

    #[test]
    fn parsed_damage_surfaces_bad_notation() {
        let bolt = Power::leveled("Fire Bolt", "BLAST", 12).with_damage("12d6");
        assert_eq!(bolt.parsed_damage(), Ok(Some(DamageDice::new(12, false, 0))));

        let fizzle = Power::leveled("Fizzle", "BLAST", 1).with_damage("lots");
        assert!(matches!(fizzle.parsed_damage(), Err(DomainError::Parse(_))));
        assert_eq!(fizzle.damage_dice(), Some(DamageDice::NONE));

        assert_eq!(Power::leveled("Flight", "FLIGHT", 10).parsed_damage(), Ok(None));
    }

    #[test]
    fn serialize_writes_document_shape_back() {
        let power = Power::leveled("Armor", "ARMOR", 8)
            .with_defense_levels(Some(8), Some(6))
            .with_affects_total(false);
        let json = serde_json::to_value(&power).expect("power serializes");

        assert_eq!(json["type"], "ARMOR");
        assert_eq!(json["pdLevels"], 8);
        assert_eq!(json["edLevels"], 6);
        assert_eq!(json["affectsTotal"], false);
        assert!(json.get("affectsPrimary").is_none());

        let back: Power = serde_json::from_value(json).expect("power deserializes");
        assert_eq!(back, power);
    }

    #[test]
    fn damage_dice_is_lenient() {
        let power = Power::leveled("Blast", "BLAST", 12).with_damage("12d6");
        assert_eq!(power.damage_dice(), Some(DamageDice::new(12, false, 0)));

        let broken = power.with_damage("twelve dice");
        assert_eq!(broken.damage_dice(), Some(DamageDice::NONE));
    }
}
