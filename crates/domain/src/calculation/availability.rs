//! Availability calculator - points left to spend.

use serde::{Deserialize, Serialize};

use super::aggregation::total_points_spent;
use crate::entities::Character;

/// Points granted by all disadvantages, before the campaign cap.
pub fn disadvantage_total(character: &Character) -> f64 {
    character.disadvantages.iter().map(|d| d.points).sum()
}

/// Disadvantage points that actually count: `min(total, disadPoints)`.
pub fn disadvantages_earned(character: &Character) -> f64 {
    disadvantage_total(character).min(character.basic_configuration.disad_points)
}

/// `basePoints + experience + earned disadvantages - points spent`
pub fn available_points(character: &Character) -> f64 {
    points_summary(character).available
}

/// Every input to the availability figure, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsSummary {
    pub base_points: f64,
    pub experience: f64,
    pub disadvantages_total: f64,
    pub disadvantages_earned: f64,
    pub points_spent: f64,
    pub available: f64,
}

pub fn points_summary(character: &Character) -> PointsSummary {
    let config = &character.basic_configuration;
    let earned = disadvantages_earned(character);
    let spent = total_points_spent(character);

    PointsSummary {
        base_points: config.base_points,
        experience: config.experience,
        disadvantages_total: disadvantage_total(character),
        disadvantages_earned: earned,
        points_spent: spent,
        available: config.base_points + config.experience + earned - spent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{BasicConfiguration, Disadvantage, PricedEntity};

    fn character() -> Character {
        let mut character = Character::new("Nighthawk", BasicConfiguration::new(400.0, 150.0, 0.0));
        character.disadvantages = vec![
            Disadvantage::new("Hunted", 120.0),
            Disadvantage::new("Secret Identity", 80.0),
        ];
        character.skills.push(PricedEntity::new("Everything", 380.0));
        character
    }

    #[test]
    fn disadvantages_are_capped() {
        let character = character();
        assert_eq!(disadvantage_total(&character), 200.0);
        assert_eq!(disadvantages_earned(&character), 150.0);
    }

    #[test]
    fn available_points_scenario() {
        assert_eq!(available_points(&character()), 170.0);
    }

    #[test]
    fn experience_adds_to_budget() {
        let mut character = character();
        character.basic_configuration.experience = 15.0;
        let summary = points_summary(&character);
        assert_eq!(summary.points_spent, 380.0);
        assert_eq!(summary.available, 185.0);
    }

    #[test]
    fn under_cap_earns_everything() {
        let mut character = character();
        character.disadvantages.truncate(1);
        assert_eq!(disadvantages_earned(&character), 120.0);
    }
}
