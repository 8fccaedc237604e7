#[cfg(test)]
#[path = "../../tests/unit/models/customer_test.rs"]
mod customer_test;

use crate::utils::Float;
use serde::Serialize;
use std::f64::consts::PI;

/// An amount of discrete angle values in a half turn.
pub const ANGLE_RESOLUTION: i32 = 32768;

/// Represents a node of the instance: the depot (index 0) or a customer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// A zero-based id.
    pub id: usize,
    /// X coordinate.
    pub coord_x: Float,
    /// Y coordinate.
    pub coord_y: Float,
    /// Demand expressed in boxes (volume).
    pub demand_box: Float,
    /// Demand expressed in weight.
    pub demand_wt: Float,
    /// Service duration.
    pub service_duration: Float,
    /// Angle relative to the depot in `[0, 32768)`, used by sweep-like heuristics.
    pub polar_angle: i32,
}

/// Returns the polar angle of `point` around `origin` encoded as an integer in `[0, 32768)`.
///
/// The angle of the origin itself is zero.
pub fn get_polar_angle(origin: (Float, Float), point: (Float, Float)) -> i32 {
    let angle = (point.1 - origin.1).atan2(point.0 - origin.0);

    positive_mod((ANGLE_RESOLUTION as Float * angle / PI) as i32)
}

/// Wraps given value around into `[0, 32768)`.
pub fn positive_mod(value: i32) -> i32 {
    value.rem_euclid(ANGLE_RESOLUTION)
}
