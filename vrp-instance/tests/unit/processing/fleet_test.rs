use super::*;
use crate::config::FleetConfig;

#[test]
fn can_estimate_fleet_size_with_default_margin() {
    let config = PreprocessingConfig::default();

    for (total_demand, capacity, expected) in
        [(100., 30., 6), (120., 30., 7), (0., 30., 2), (30., 30., 4), (1., 1000., 3)]
    {
        let fleet_size = get_default_fleet_size(total_demand, capacity, &config);

        assert_eq!(fleet_size, expected, "unexpected fleet size for ({total_demand}, {capacity})");
    }
}

#[test]
fn can_estimate_fleet_size_with_configured_margin() {
    let config = PreprocessingConfig {
        granular_size: None,
        fleet: Some(FleetConfig { safety_factor: Some(1.), extra_vehicles: Some(0) }),
    };

    assert_eq!(get_default_fleet_size(100., 30., &config), 4);
    assert_eq!(get_default_fleet_size(90., 30., &config), 3);
}
