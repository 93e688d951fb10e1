//! Priced entities - anything on a sheet that costs character points.

use serde::{Deserialize, Serialize};

use crate::common::{lenient_bool, lenient_f64, lenient_i32, lenient_opt_f64, lenient_opt_i32};

/// A fixed or leveled add-on bundled into an ability's base cost.
///
/// Adders carry no sign constraint: a catalog may define adders that make an
/// ability cheaper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Adder {
    pub id: Option<String>,
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub base_cost: f64,
    #[serde(deserialize_with = "lenient_i32")]
    pub levels: i32,
    #[serde(deserialize_with = "lenient_f64")]
    pub lvl_cost: f64,
}

impl Adder {
    pub fn new(base_cost: f64) -> Self {
        Self {
            base_cost,
            ..Self::default()
        }
    }

    pub fn leveled(base_cost: f64, levels: i32, lvl_cost: f64) -> Self {
        Self {
            base_cost,
            levels,
            lvl_cost,
            ..Self::default()
        }
    }

    /// `baseCost + levels * lvlCost`
    pub fn contribution(&self) -> f64 {
        self.base_cost + self.levels as f64 * self.lvl_cost
    }
}

/// An advantage or limitation attached to a priced entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Modifier {
    pub id: Option<String>,
    pub name: String,
    /// Signed fractional multiplier (e.g., 0.5 for +½, -0.25 for -¼)
    #[serde(deserialize_with = "lenient_f64")]
    pub value: f64,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_advantage: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_limitation: bool,
    #[serde(deserialize_with = "lenient_opt_i32")]
    pub levels: Option<i32>,
    pub adders: Vec<Adder>,
    /// One choice out of the catalog-defined option set for this modifier
    pub option_id: Option<String>,
}

impl Modifier {
    pub fn advantage(value: f64) -> Self {
        Self {
            value,
            is_advantage: true,
            ..Self::default()
        }
    }

    pub fn limitation(value: f64) -> Self {
        Self {
            value,
            is_limitation: true,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_option(mut self, option_id: impl Into<String>) -> Self {
        self.option_id = Some(option_id.into());
        self
    }
}

/// Any ability or trait with a point cost.
///
/// `active_cost` and `real_cost` are cached results written back by pricing;
/// documents may carry stale or missing values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricedEntity {
    pub id: Option<String>,
    pub name: String,
    /// Catalog identifier (e.g., "BLAST", "STR", "ACROBATICS")
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub base_cost: f64,
    #[serde(deserialize_with = "lenient_opt_i32")]
    pub levels: Option<i32>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub active_cost: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub real_cost: Option<f64>,
    /// Containing entity, when this entity is a slot of a framework
    pub parent_id: Option<String>,
    /// Selected catalog option for the ability itself
    pub option_id: Option<String>,
    pub modifiers: Vec<Modifier>,
    pub adders: Vec<Adder>,
}

impl PricedEntity {
    pub fn new(name: impl Into<String>, base_cost: f64) -> Self {
        Self {
            name: name.into(),
            base_cost,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn with_levels(mut self, levels: i32) -> Self {
        self.levels = Some(levels);
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_real_cost(mut self, real_cost: f64) -> Self {
        self.real_cost = Some(real_cost);
        self
    }

    pub fn with_active_cost(mut self, active_cost: f64) -> Self {
        self.active_cost = Some(active_cost);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_adder(mut self, adder: Adder) -> Self {
        self.adders.push(adder);
        self
    }

    /// Levels, with absence read as zero.
    pub fn levels(&self) -> i32 {
        self.levels.unwrap_or(0)
    }

    /// What this entity charges against the budget: the cached real cost,
    /// else the base cost.
    pub fn cost(&self) -> f64 {
        self.real_cost.unwrap_or(self.base_cost)
    }
}

/// Access to the priced core of a sheet entry.
///
/// Lets aggregation treat skills, powers, characteristics, and equipment
/// uniformly.
pub trait Priced {
    fn priced(&self) -> &PricedEntity;

    fn priced_mut(&mut self) -> &mut PricedEntity;
}

impl Priced for PricedEntity {
    fn priced(&self) -> &PricedEntity {
        self
    }

    fn priced_mut(&mut self) -> &mut PricedEntity {
        self
    }
}
