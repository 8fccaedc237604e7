//! Contains preprocessing steps which turn read data into an instance ready for search.

mod fleet;
pub use self::fleet::*;

mod neighborhood;
pub use self::neighborhood::*;

mod penalty;
pub use self::penalty::*;

use crate::config::PreprocessingConfig;
use crate::format::InstanceData;
use crate::models::Instance;
use crate::utils::{Environment, InstanceResult, Timer};

/// Estimates fleet size if needed, validates numerical scale, builds granular neighborhood and
/// calibrates penalties.
pub(crate) fn preprocess(
    data: InstanceData,
    nb_vehicles: Option<usize>,
    environment: &Environment,
    config: &PreprocessingConfig,
) -> InstanceResult<Instance> {
    let InstanceData { header, clients, demands, time_cost, max_dist } = data;
    let logger = &environment.logger;

    let nb_vehicles = match nb_vehicles {
        Some(nb_vehicles) => nb_vehicles,
        None => {
            let nb_vehicles =
                get_default_fleet_size(demands.total_demand_box, header.vehicle_capacity_box, config);
            (logger)(format!("fleet size was not specified, default initialization to: {nb_vehicles}").as_str());
            nb_vehicles
        }
    };

    check_numerical_scale(max_dist, demands.max_demand_box, demands.max_demand_wt)?;

    (logger)("calculate correlated vertices");
    let granular_size = config.granular_size();
    let correlated_vertices = Timer::measure_duration_with_callback(
        || create_correlated_vertices(&time_cost, granular_size),
        |duration| (logger)(format!("correlated vertices created in {}ms", duration.as_millis()).as_str()),
    );

    let penalties = calibrate_penalties(max_dist, demands.max_demand_box, demands.max_demand_wt);

    Ok(Instance {
        clients,
        time_cost,
        correlated_vertices,
        nb_clients: header.nb_clients,
        nb_vehicles,
        vehicle_capacity_box: header.vehicle_capacity_box,
        vehicle_capacity_wt: header.vehicle_capacity_wt,
        duration_limit: header.duration_limit,
        max_demand_box: demands.max_demand_box,
        max_demand_wt: demands.max_demand_wt,
        total_demand_box: demands.total_demand_box,
        total_demand_wt: demands.total_demand_wt,
        max_dist,
        penalty_duration: penalties.duration,
        penalty_capacity_box: penalties.capacity_box,
        penalty_capacity_wt: penalties.capacity_wt,
        is_rounding_integer: true,
        is_duration_constraint: header.duration_limit.is_some(),
    })
}
