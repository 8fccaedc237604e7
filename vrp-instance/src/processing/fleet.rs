#[cfg(test)]
#[path = "../../tests/unit/processing/fleet_test.rs"]
mod fleet_test;

use crate::config::PreprocessingConfig;
use crate::utils::Float;

/// Estimates fleet size as a trivial bin packing lower bound on box demand with a safety margin.
pub fn get_default_fleet_size(
    total_demand_box: Float,
    vehicle_capacity_box: Float,
    config: &PreprocessingConfig,
) -> usize {
    let lower_bound = (config.fleet_safety_factor() * total_demand_box / vehicle_capacity_box).ceil().max(0.);

    lower_bound as usize + config.fleet_extra_vehicles()
}
