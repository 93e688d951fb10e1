//! Point-cost calculation: single-entity costs, section totals, and the
//! remaining budget.

mod aggregation;
mod availability;
mod cost;
mod pricing;

pub use aggregation::{
    calculate_power_total, category_total, contained_total, containment_flags, cost_breakdown,
    total_points_spent, CostBreakdown,
};
pub use availability::{
    available_points, disadvantage_total, disadvantages_earned, points_summary, PointsSummary,
};
pub use cost::{
    active_cost, adder_cost, advantage_sum, limitation_sum, real_cost, real_cost_with_floor,
    CostError,
};
pub use pricing::{
    price_character, price_entity, price_entity_clamped, LimitationPolicy, PricedCharacter,
    Pricing, PricingIssue, DEFAULT_LIMITATION_FLOOR,
};
