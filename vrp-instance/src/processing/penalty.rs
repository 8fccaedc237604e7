#[cfg(test)]
#[path = "../../tests/unit/processing/penalty_test.rs"]
mod penalty_test;

use crate::models::Penalties;
use crate::utils::{Float, ScaleError, ScaleQuantity};

/// Min accepted value for max distance and max demands.
pub const MIN_SCALE_VALUE: Float = 0.1;
/// Max accepted value for max distance and max demands.
pub const MAX_SCALE_VALUE: Float = 100_000.;

/// Min value of initial capacity penalty.
pub const MIN_PENALTY: Float = 0.1;
/// Max value of initial capacity penalty.
pub const MAX_PENALTY: Float = 1000.;

/// Rejects instances with arbitrarily small or large distances or demands.
pub fn check_numerical_scale(max_dist: Float, max_demand_box: Float, max_demand_wt: Float) -> Result<(), ScaleError> {
    [
        (ScaleQuantity::Distance, max_dist),
        (ScaleQuantity::DemandBox, max_demand_box),
        (ScaleQuantity::DemandWeight, max_demand_wt),
    ]
    .into_iter()
    .try_for_each(|(quantity, value)| {
        // NOTE NaN is rejected as well
        if (MIN_SCALE_VALUE..=MAX_SCALE_VALUE).contains(&value) { Ok(()) } else { Err(ScaleError { quantity, value }) }
    })
}

/// Returns initial penalties which make a unit of capacity excess comparable to a max distance.
pub fn calibrate_penalties(max_dist: Float, max_demand_box: Float, max_demand_wt: Float) -> Penalties {
    Penalties {
        duration: 1.,
        capacity_box: (max_dist / max_demand_box).clamp(MIN_PENALTY, MAX_PENALTY),
        capacity_wt: (max_dist / max_demand_wt).clamp(MIN_PENALTY, MAX_PENALTY),
    }
}
