//! Preprocessing configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::utils::{Float, InstanceError, InstanceResult};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// Default amount of nearest customers kept per customer for granular search.
pub const DEFAULT_GRANULAR_SIZE: usize = 20;

/// Default ratio applied to the trivial bin packing lower bound of the fleet size.
pub const DEFAULT_FLEET_SAFETY_FACTOR: Float = 1.2;

/// Default amount of vehicles added on top of the fleet size estimate.
pub const DEFAULT_FLEET_EXTRA_VEHICLES: usize = 2;

/// A preprocessing configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreprocessingConfig {
    /// Max amount of nearest customers used by granular search. Default is 20.
    pub granular_size: Option<usize>,
    /// Specifies how the fleet size is estimated when not given.
    pub fleet: Option<FleetConfig>,
}

/// A fleet size estimation configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetConfig {
    /// A safety factor. Default is 1.2.
    pub safety_factor: Option<Float>,
    /// Extra vehicles. Default is 2.
    pub extra_vehicles: Option<usize>,
}

impl PreprocessingConfig {
    /// Returns granular size.
    pub fn granular_size(&self) -> usize {
        self.granular_size.unwrap_or(DEFAULT_GRANULAR_SIZE)
    }

    /// Returns fleet safety factor.
    pub fn fleet_safety_factor(&self) -> Float {
        self.fleet.as_ref().and_then(|fleet| fleet.safety_factor).unwrap_or(DEFAULT_FLEET_SAFETY_FACTOR)
    }

    /// Returns amount of extra vehicles.
    pub fn fleet_extra_vehicles(&self) -> usize {
        self.fleet.as_ref().and_then(|fleet| fleet.extra_vehicles).unwrap_or(DEFAULT_FLEET_EXTRA_VEHICLES)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> InstanceResult<PreprocessingConfig> {
    serde_json::from_reader(reader).map_err(|err| InstanceError::invalid_value("config", &err.to_string()))
}
