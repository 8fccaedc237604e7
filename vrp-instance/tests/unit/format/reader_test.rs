use super::*;
use crate::helpers::*;
use crate::utils::{ErrorKind, FormatError};

fn create_text_reader(text: &str) -> InstanceTextReader<&[u8]> {
    InstanceTextReader::new(BufReader::new(text.as_bytes()), test_logger())
}

fn create_header_text(lines: &[&str]) -> String {
    let mut builder = InstanceBuilder::default();
    lines.iter().for_each(|line| {
        builder.add_header_line(line);
    });

    builder.build()
}

#[test]
fn can_read_header_with_all_fields() {
    let text =
        create_header_text(&["DIMENSION : 6", "CAPACITY : 30 25.5", "DURATION : 1000", "SERVICE_TIME : 10"]);
    let mut reader = create_text_reader(text.as_str());

    let header = reader.read_header().expect("cannot read header");

    assert_eq!(
        header,
        Header { nb_clients: 5, vehicle_capacity_box: 30., vehicle_capacity_wt: 25.5, duration_limit: Some(1000.) }
    );
    assert_eq!(reader.service_time, Some(10.));
}

#[test]
fn can_read_header_without_optional_fields() {
    let text = create_header_text(&["CAPACITY : 30 20", "DIMENSION : 2"]);
    let mut reader = create_text_reader(text.as_str());

    let header = reader.read_header().expect("cannot read header");

    assert_eq!(header.nb_clients, 1);
    assert_eq!(header.duration_limit, None);
}

#[test]
fn can_fail_on_unknown_header_token_without_reading_further() {
    let text = create_header_text(&["DIMENSION : 6", "FOO : 1", "CAPACITY : 30 20"]);
    let mut reader = create_text_reader(text.as_str());

    let result = reader.read_header();

    assert_eq!(result, Err(FormatError::UnexpectedToken { token: "FOO".to_string(), expected: None }.into()));
    assert_eq!(reader.tokens.next_token(), Ok(Some(":".to_string())));
    assert_eq!(reader.vehicle_capacity, (None, None));
}

#[test]
fn can_fail_on_missing_or_invalid_header_fields() {
    for (lines, expected) in [
        (vec!["CAPACITY : 30 20"], InstanceError::missing_field("DIMENSION")),
        (vec!["DIMENSION : 1", "CAPACITY : 30 20"], InstanceError::missing_field("DIMENSION")),
        (vec!["DIMENSION : 0", "CAPACITY : 30 20"], InstanceError::missing_field("DIMENSION")),
        (vec!["DIMENSION : 5"], InstanceError::missing_field("CAPACITY (box)")),
        (vec!["DIMENSION : 5", "CAPACITY : inf 20"], InstanceError::invalid_value("CAPACITY (box)", "inf")),
        (vec!["DIMENSION : 5", "CAPACITY : 30 0"], InstanceError::invalid_value("CAPACITY (weight)", "0")),
        (vec!["DIMENSION : five"], InstanceError::invalid_value("DIMENSION", "five")),
    ] {
        let text = create_header_text(&lines);
        let mut reader = create_text_reader(text.as_str());

        let result = reader.read_header();

        assert_eq!(result, Err(expected));
    }
}

#[test]
fn can_fail_on_header_without_node_section() {
    let mut reader = create_text_reader("NAME\nCOMMENT\nTYPE\nDIMENSION : 5\n");

    let result = reader.read_header();

    assert_eq!(result, Err(InstanceError::unexpected_eof("NODE_SECTION")));
}

#[test]
fn can_read_nodes_with_polar_angles_and_demand_statistics() {
    let text = InstanceBuilder::default()
        .set_dimension(5)
        .set_capacity(100., 100.)
        .add_node((1, 10., 10., 0., 0., 0.))
        .add_node((2, 20., 10., 5., 7.5, 1.))
        .add_node((3, 10., 20., 15., 2.5, 2.))
        .add_node((4, 10., 0., 10., 3., 3.))
        .add_node((5, 0., 0., 1., 1., 4.))
        .build();
    let mut reader = create_text_reader(text.as_str());
    let header = reader.read_header().expect("cannot read header");

    let (clients, demands) = reader.read_nodes(header.nb_clients).expect("cannot read nodes");

    assert_eq!(clients.len(), 5);
    assert_eq!(clients.iter().map(|c| c.id).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    // depot: 0, east: 0, north: half of pi, south: wraps around, south-west: -3/4 of pi wraps around
    assert_eq!(clients.iter().map(|c| c.polar_angle).collect::<Vec<_>>(), vec![0, 0, 16384, 16384, 8192]);
    assert_eq!(clients[2].service_duration, 2.);
    assert_eq!(
        demands,
        DemandStatistics { max_demand_box: 15., max_demand_wt: 7.5, total_demand_box: 31., total_demand_wt: 14. }
    );
}

#[test]
fn can_fail_on_zero_node_id() {
    let text =
        InstanceBuilder::default().set_dimension(2).set_capacity(1., 1.).add_node((0, 0., 0., 0., 0., 0.)).build();
    let mut reader = create_text_reader(text.as_str());
    let header = reader.read_header().expect("cannot read header");

    let result = reader.read_nodes(header.nb_clients);

    assert_eq!(result.map(|_| ()), Err(InstanceError::invalid_value("node id", "0")));
}

fn create_two_nodes_builder() -> InstanceBuilder {
    let mut builder = InstanceBuilder::default();
    builder
        .set_dimension(2)
        .set_capacity(10., 10.)
        .add_node((1, 0., 0., 0., 0., 0.))
        .add_node((2, 3., 4., 1., 1., 0.));

    builder
}

fn read_until_travel_times(text: &str) -> (InstanceTextReader<&[u8]>, usize) {
    let mut reader = create_text_reader(text);
    let header = reader.read_header().expect("cannot read header");
    reader.read_nodes(header.nb_clients).expect("cannot read nodes");

    (reader, header.nb_clients)
}

#[test]
fn can_read_asymmetric_travel_times() {
    let text = create_two_nodes_builder()
        .add_travel_time(2, 1, 4.)
        .add_travel_time(1, 1, 0.)
        .add_travel_time(1, 2, 5.5)
        .add_travel_time(2, 2, 0.)
        .build();
    let (mut reader, nb_clients) = read_until_travel_times(text.as_str());

    let (time_cost, max_dist) = reader.read_travel_times(nb_clients).expect("cannot read travel times");

    assert_eq!(time_cost.len(), 4);
    assert_eq!(time_cost.get(0, 1), 5.5);
    assert_eq!(time_cost.get(1, 0), 4.);
    assert_eq!(max_dist, 5.5);
}

#[test]
fn can_overwrite_travel_time_with_last_duplicate() {
    let text = create_two_nodes_builder()
        .add_travel_time(1, 2, 7.)
        .add_travel_time(2, 1, 3.)
        .add_travel_time(1, 2, 2.)
        .add_travel_time(1, 1, 0.)
        .build();
    let (mut reader, nb_clients) = read_until_travel_times(text.as_str());

    let (time_cost, max_dist) = reader.read_travel_times(nb_clients).expect("cannot read travel times");

    assert_eq!(time_cost.get(0, 1), 2.);
    assert_eq!(time_cost.get(1, 1), 0.);
    assert_eq!(max_dist, 7.);
}

#[test]
fn can_fail_on_wrong_travel_time_section() {
    let text = create_two_nodes_builder().build().replace("TRAVEL_TIME_SECTION", "EDGE_WEIGHT_SECTION");
    let (mut reader, nb_clients) = read_until_travel_times(text.as_str());

    let result = reader.read_travel_times(nb_clients);

    assert_eq!(
        result.map(|_| ()),
        Err(InstanceError::unexpected_token("EDGE_WEIGHT_SECTION", Some("TRAVEL_TIME_SECTION")))
    );
}

#[test]
fn can_fail_on_travel_time_index_out_of_range() {
    let text = create_two_nodes_builder().add_travel_time(1, 3, 1.).build();
    let (mut reader, nb_clients) = read_until_travel_times(text.as_str());

    let result = reader.read_travel_times(nb_clients);

    assert_eq!(result.map(|_| ()), Err(InstanceError::invalid_value("travel time index", "3")));
}

#[test]
fn can_fail_on_missing_travel_times() {
    let text = create_two_nodes_builder().add_travel_time(1, 1, 0.).set_depot_section("").build();
    let (mut reader, nb_clients) = read_until_travel_times(text.as_str());

    let result = reader.read_travel_times(nb_clients);

    assert_eq!(result.map(|_| ()).map_err(|err| err.kind()), Err(ErrorKind::Format));
}

fn read_depot_section(depot_section: &str) -> InstanceResult<()> {
    let text = create_two_nodes_builder().set_travel_times_fn(|_, _| 1.).set_depot_section(depot_section).build();
    let (mut reader, nb_clients) = read_until_travel_times(text.as_str());
    reader.read_travel_times(nb_clients).expect("cannot read travel times");

    reader.read_depot()
}

#[test]
fn can_read_depot_section() {
    assert_eq!(read_depot_section("DEPOT_SECTION\n1\n-1\nEOF\n"), Ok(()));
    assert_eq!(read_depot_section("DEPOT_SECTION 1 EOF EOF"), Ok(()));
    // NOTE third token is not checked
    assert_eq!(read_depot_section("DEPOT_SECTION\n 1\n anything\n EOF"), Ok(()));
}

#[test]
fn can_fail_on_wrong_depot_section() {
    for (depot_section, expected) in [
        ("NODE_SECTION\n1\n-1\nEOF\n", InstanceError::unexpected_token("NODE_SECTION", Some("DEPOT_SECTION"))),
        ("DEPOT_SECTION\n2\n-1\nEOF\n", InstanceError::unexpected_token("2", Some("1"))),
        ("DEPOT_SECTION\n1\n-1\nEND\n", InstanceError::unexpected_token("END", Some("EOF"))),
        ("DEPOT_SECTION\n1\n-1\n", InstanceError::unexpected_eof("EOF")),
    ] {
        assert_eq!(read_depot_section(depot_section), Err(expected));
    }
}

#[test]
fn can_log_processed_sections() {
    let (logger, messages) = create_capturing_logger();
    let text = create_line_instance_builder().build();
    let mut reader = InstanceTextReader::new(BufReader::new(text.as_bytes()), logger);

    reader.read_data().expect("cannot read data");

    assert_eq!(
        messages.borrow().clone(),
        vec![
            "process header",
            "nr of clients (excluding depot): 4",
            "process node section",
            "process travel times section",
            "process depot section",
        ]
    );
}

#[test]
fn can_read_instance_from_string() {
    let instance = read_test_instance(create_line_instance_builder().build(), Some(3)).expect("cannot read instance");

    assert_eq!(instance.nb_clients, 4);
    assert_eq!(instance.nb_vehicles, 3);
    assert_eq!(instance.clients.len(), 5);
    assert!(!instance.is_duration_constraint);
    assert!(instance.is_rounding_integer);
}

#[test]
fn can_fail_on_huge_dimension() {
    let text = "NAME\nCOMMENT\nTYPE\nDIMENSION : 9223372036854775807\nCAPACITY : 10 10\nNODE_SECTION\n1 0 0 0 0 0\n";

    let result = read_test_instance(text.to_string(), None);

    assert_eq!(result.map(|_| ()), Err(InstanceError::invalid_value("DIMENSION", "9223372036854775807")));
}

#[test]
fn can_fail_on_large_dimension_without_node_records() {
    let text = "NAME\nCOMMENT\nTYPE\nDIMENSION : 100000000\nCAPACITY : 10 10\nNODE_SECTION\n1 0 0 0 0 0\n";

    let result = read_test_instance(text.to_string(), None);

    assert_eq!(result.map(|_| ()), Err(InstanceError::unexpected_eof("node id")));
}

#[test]
fn can_fail_on_non_finite_values() {
    let mut nan_demand = create_line_instance_builder();
    nan_demand
        .add_header_line("DIMENSION : 6")
        .add_node((6, 1., 1., Float::NAN, 1., 0.))
        .set_euclidean_travel_times();
    let mut infinite_time = create_line_instance_builder();
    infinite_time.set_travel_times_fn(|i, j| if (i, j) == (1, 2) { Float::INFINITY } else { 1. });

    for (text, expected) in [
        (nan_demand.build(), InstanceError::invalid_value("node demand (box)", "NaN")),
        (infinite_time.build(), InstanceError::invalid_value("travel time", "inf")),
    ] {
        assert_eq!(read_test_instance(text, Some(1)).map(|_| ()), Err(expected));
    }
}

#[test]
fn can_fail_on_zero_vehicles() {
    let result = read_test_instance(create_line_instance_builder().build(), Some(0));

    assert_eq!(result.map(|_| ()), Err(InstanceError::invalid_value("nb_vehicles", "0")));
}

#[test]
fn can_fail_on_invalid_utf8_as_format_error() {
    let mut bytes = create_line_instance_builder().build().into_bytes();
    let position = bytes.windows(2).position(|window| window == b"2 ").expect("cannot find node record");
    bytes[position + 2] = 0xff;

    let result = BufReader::new(bytes.as_slice()).read_instance(
        None,
        &create_test_environment(),
        &PreprocessingConfig::default(),
    );

    assert!(matches!(
        result,
        Err(InstanceError::Format(FormatError::InvalidValue { ref field, .. })) if field == "input"
    ));
}
