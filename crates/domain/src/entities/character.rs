//! Character aggregate - the document the engine computes over.

use serde::{Deserialize, Serialize};

use super::equipment::Equipment;
use super::power::Power;
use super::priced::{Priced, PricedEntity};
use crate::common::{lenient_f64, lenient_i32, lenient_opt_f64};
use crate::value_objects::Stat;

/// Campaign point settings for a character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicConfiguration {
    /// Starting points granted by the campaign
    #[serde(deserialize_with = "lenient_f64")]
    pub base_points: f64,
    /// Cap on points earned from disadvantages
    #[serde(deserialize_with = "lenient_f64")]
    pub disad_points: f64,
    /// Experience earned in play
    #[serde(deserialize_with = "lenient_f64")]
    pub experience: f64,
}

impl BasicConfiguration {
    pub fn new(base_points: f64, disad_points: f64, experience: f64) -> Self {
        Self {
            base_points,
            disad_points,
            experience,
        }
    }
}

/// A bought characteristic with its stored total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristic {
    #[serde(flatten)]
    pub entity: PricedEntity,
    /// Total value as stored on the sheet (base plus bought levels)
    #[serde(default, deserialize_with = "lenient_i32")]
    pub total_value: i32,
}

impl Characteristic {
    pub fn new(stat: Stat, total_value: i32, base_cost: f64) -> Self {
        Self {
            entity: PricedEntity::new(stat.display_name(), base_cost).with_type(stat.code()),
            total_value,
        }
    }

    /// The stat this entry buys, if its type code names one.
    pub fn stat(&self) -> Option<Stat> {
        self.entity.entity_type.as_deref()?.parse().ok()
    }
}

impl Priced for Characteristic {
    fn priced(&self) -> &PricedEntity {
        &self.entity
    }

    fn priced_mut(&mut self) -> &mut PricedEntity {
        &mut self.entity
    }
}

/// A complication that grants points instead of costing them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DisadvantageRecord")]
pub struct Disadvantage {
    pub id: Option<String>,
    pub name: String,
    pub points: f64,
}

/// Sheets store the grant as `points`, `realCost`, or `baseCost`; first present wins.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DisadvantageRecord {
    id: Option<String>,
    name: String,
    #[serde(deserialize_with = "lenient_opt_f64")]
    points: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    real_cost: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    base_cost: Option<f64>,
}

impl From<DisadvantageRecord> for Disadvantage {
    fn from(record: DisadvantageRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            points: record
                .points
                .or(record.real_cost)
                .or(record.base_cost)
                .unwrap_or(0.0),
        }
    }
}

impl Disadvantage {
    pub fn new(name: impl Into<String>, points: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            points,
        }
    }
}

/// The aggregate root: one character sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub name: String,
    pub basic_configuration: BasicConfiguration,
    pub characteristics: Vec<Characteristic>,
    pub skills: Vec<PricedEntity>,
    pub perks: Vec<PricedEntity>,
    pub talents: Vec<PricedEntity>,
    pub martial_arts: Vec<PricedEntity>,
    pub powers: Vec<Power>,
    pub disadvantages: Vec<Disadvantage>,
    pub equipment: Vec<Equipment>,
}

impl Character {
    pub fn new(name: impl Into<String>, configuration: BasicConfiguration) -> Self {
        Self {
            name: name.into(),
            basic_configuration: configuration,
            ..Self::default()
        }
    }

    /// Find a power by id.
    pub fn power(&self, id: &str) -> Option<&Power> {
        self.powers.iter().find(|p| p.id() == Some(id))
    }

    /// Stored total of a characteristic, or zero when the sheet lacks it.
    pub fn characteristic_value(&self, stat: Stat) -> i32 {
        self.characteristics
            .iter()
            .find(|c| c.stat() == Some(stat))
            .map(|c| c.total_value)
            .unwrap_or(0)
    }
}
