#[cfg(test)]
#[path = "../../tests/unit/models/instance_test.rs"]
mod instance_test;

use crate::config::PreprocessingConfig;
use crate::format::InstanceReader;
use crate::models::{Customer, TimeMatrix};
use crate::utils::{Environment, Float, InstanceError, InstanceResult};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Demand statistics accumulated over all nodes, depot included.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandStatistics {
    /// Max box demand.
    pub max_demand_box: Float,
    /// Max weight demand.
    pub max_demand_wt: Float,
    /// Total box demand.
    pub total_demand_box: Float,
    /// Total weight demand.
    pub total_demand_wt: Float,
}

impl DemandStatistics {
    /// Accounts demand of a node.
    pub fn add(&mut self, customer: &Customer) {
        self.max_demand_box = self.max_demand_box.max(customer.demand_box);
        self.max_demand_wt = self.max_demand_wt.max(customer.demand_wt);
        self.total_demand_box += customer.demand_box;
        self.total_demand_wt += customer.demand_wt;
    }
}

/// Initial penalty coefficients for constraint violations.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalties {
    /// Penalty per unit of excess duration.
    pub duration: Float,
    /// Penalty per unit of excess box capacity.
    pub capacity_box: Float,
    /// Penalty per unit of excess weight capacity.
    pub capacity_wt: Float,
}

/// A preprocessed VRP instance ready to be consumed by a route optimizer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// All nodes in parse order, index 0 is the depot.
    pub clients: Vec<Customer>,
    /// Directed travel times between nodes.
    pub time_cost: TimeMatrix,
    /// Granular neighbors of each customer in ascending id order, the depot entry is empty.
    pub correlated_vertices: Vec<Vec<usize>>,

    /// Amount of customers (depot excluded).
    pub nb_clients: usize,
    /// Amount of available vehicles.
    pub nb_vehicles: usize,
    /// Vehicle capacity in boxes.
    pub vehicle_capacity_box: Float,
    /// Vehicle capacity in weight.
    pub vehicle_capacity_wt: Float,
    /// Route duration limit, if any.
    pub duration_limit: Option<Float>,

    /// Max box demand.
    pub max_demand_box: Float,
    /// Max weight demand.
    pub max_demand_wt: Float,
    /// Total box demand.
    pub total_demand_box: Float,
    /// Total weight demand.
    pub total_demand_wt: Float,
    /// Max travel time.
    pub max_dist: Float,

    /// Initial duration penalty.
    pub penalty_duration: Float,
    /// Initial box capacity penalty.
    pub penalty_capacity_box: Float,
    /// Initial weight capacity penalty.
    pub penalty_capacity_wt: Float,

    /// Whether travel times are rounded to integers.
    pub is_rounding_integer: bool,
    /// Whether route duration is constrained.
    pub is_duration_constraint: bool,
}

impl Instance {
    /// Reads and preprocesses an instance from the file.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        nb_vehicles: Option<usize>,
        environment: &Environment,
        config: &PreprocessingConfig,
    ) -> InstanceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|err| InstanceError::FileOpen { path: path.display().to_string(), reason: err.to_string() })?;

        BufReader::new(file).read_instance(nb_vehicles, environment, config).map_err(|err| match err {
            InstanceError::FileOpen { reason, .. } => {
                InstanceError::FileOpen { path: path.display().to_string(), reason }
            }
            err => err,
        })
    }

    /// Returns the depot.
    pub fn depot(&self) -> &Customer {
        &self.clients[0]
    }

    /// Returns customers without the depot.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.clients.iter().skip(1)
    }

    /// Returns granular neighbors of the node.
    pub fn correlated(&self, index: usize) -> &[usize] {
        self.correlated_vertices.get(index).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Returns initial penalties.
    pub fn penalties(&self) -> Penalties {
        Penalties {
            duration: self.penalty_duration,
            capacity_box: self.penalty_capacity_box,
            capacity_wt: self.penalty_capacity_wt,
        }
    }

    /// Serializes the instance as json string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Reads and preprocesses an instance from the file using the default configuration and an
/// environment seeded with `seed`. The environment is returned for downstream stochastic stages.
pub fn load_instance<P: AsRef<Path>>(
    path: P,
    nb_vehicles: Option<usize>,
    seed: u64,
) -> InstanceResult<(Instance, Environment)> {
    let environment = Environment::new_with_seed(seed);
    let instance = Instance::from_path(path, nb_vehicles, &environment, &PreprocessingConfig::default())?;

    Ok((instance, environment))
}
