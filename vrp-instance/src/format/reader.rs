#[cfg(test)]
#[path = "../../tests/unit/format/reader_test.rs"]
mod reader_test;

use crate::config::PreprocessingConfig;
use crate::format::TokenReader;
use crate::models::{Customer, DemandStatistics, Instance, TimeMatrix, get_polar_angle};
use crate::processing::preprocess;
use crate::utils::{Environment, Float, InfoLogger, InstanceError, InstanceResult};
use std::io::{BufReader, Read};

/// The one-based depot index which is the only one supported.
const DEPOT_INDEX: &str = "1";

/// A trait to read and preprocess an instance.
pub trait InstanceReader {
    /// Reads instance. When `nb_vehicles` is `None`, the fleet size is estimated from demand. A zero
    /// vehicle count is rejected.
    fn read_instance(
        self,
        nb_vehicles: Option<usize>,
        environment: &Environment,
        config: &PreprocessingConfig,
    ) -> InstanceResult<Instance>;
}

impl<R: Read> InstanceReader for BufReader<R> {
    fn read_instance(
        self,
        nb_vehicles: Option<usize>,
        environment: &Environment,
        config: &PreprocessingConfig,
    ) -> InstanceResult<Instance> {
        read_instance_format(self, nb_vehicles, environment, config)
    }
}

impl InstanceReader for String {
    fn read_instance(
        self,
        nb_vehicles: Option<usize>,
        environment: &Environment,
        config: &PreprocessingConfig,
    ) -> InstanceResult<Instance> {
        read_instance_format(BufReader::new(self.as_bytes()), nb_vehicles, environment, config)
    }
}

fn read_instance_format<R: Read>(
    reader: BufReader<R>,
    nb_vehicles: Option<usize>,
    environment: &Environment,
    config: &PreprocessingConfig,
) -> InstanceResult<Instance> {
    if nb_vehicles == Some(0) {
        return Err(InstanceError::invalid_value("nb_vehicles", "0"));
    }

    let data = InstanceTextReader::new(reader, environment.logger.clone()).read_data()?;

    preprocess(data, nb_vehicles, environment, config)
}

/// Instance metadata.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Header {
    pub nb_clients: usize,
    pub vehicle_capacity_box: Float,
    pub vehicle_capacity_wt: Float,
    pub duration_limit: Option<Float>,
}

/// Keeps everything read from the input before preprocessing.
pub(crate) struct InstanceData {
    pub header: Header,
    pub clients: Vec<Customer>,
    pub demands: DemandStatistics,
    pub time_cost: TimeMatrix,
    pub max_dist: Float,
}

struct InstanceTextReader<R: Read> {
    tokens: TokenReader<R>,
    logger: InfoLogger,
    dimension: Option<i64>,
    vehicle_capacity: (Option<Float>, Option<Float>),
    duration_limit: Option<Float>,
    service_time: Option<Float>,
}

impl<R: Read> InstanceTextReader<R> {
    fn new(reader: BufReader<R>, logger: InfoLogger) -> Self {
        Self {
            tokens: TokenReader::new(reader),
            logger,
            dimension: None,
            vehicle_capacity: (None, None),
            duration_limit: None,
            service_time: None,
        }
    }

    fn read_data(&mut self) -> InstanceResult<InstanceData> {
        let header = self.read_header()?;
        let (clients, demands) = self.read_nodes(header.nb_clients)?;
        let (time_cost, max_dist) = self.read_travel_times(header.nb_clients)?;
        self.read_depot()?;

        Ok(InstanceData { header, clients, demands, time_cost, max_dist })
    }

    fn read_header(&mut self) -> InstanceResult<Header> {
        self.tokens.skip_lines(3)?;
        (self.logger)("process header");

        loop {
            let key = self.tokens.read_token("NODE_SECTION")?;
            match key.as_str() {
                "NODE_SECTION" => break,
                "DIMENSION" => {
                    self.read_separator(&key)?;
                    self.dimension = Some(self.tokens.read_value("DIMENSION")?);
                }
                "CAPACITY" => {
                    self.read_separator(&key)?;
                    let capacity_box = self.tokens.read_value("CAPACITY (box)")?;
                    let capacity_wt = self.tokens.read_value("CAPACITY (weight)")?;
                    self.vehicle_capacity = (Some(capacity_box), Some(capacity_wt));
                }
                "DURATION" => {
                    self.read_separator(&key)?;
                    self.duration_limit = Some(self.tokens.read_value("DURATION")?);
                }
                "SERVICE_TIME" => {
                    self.read_separator(&key)?;
                    self.service_time = Some(self.tokens.read_value("SERVICE_TIME")?);
                }
                _ => return Err(InstanceError::unexpected_token(&key, None)),
            }
        }

        // NOTE the depot is counted as a node in the dimension
        let nb_clients = match self.dimension {
            Some(dimension) if dimension > 1 => usize::try_from(dimension - 1)
                .ok()
                .filter(|&nb_clients| get_matrix_len(nb_clients).is_some())
                .ok_or_else(|| InstanceError::invalid_value("DIMENSION", &dimension.to_string()))?,
            _ => return Err(InstanceError::missing_field("DIMENSION")),
        };

        let vehicle_capacity_box = get_capacity(self.vehicle_capacity.0, "CAPACITY (box)")?;
        let vehicle_capacity_wt = get_capacity(self.vehicle_capacity.1, "CAPACITY (weight)")?;

        if let Some(service_time) = self.service_time {
            (self.logger)(format!("service time: {service_time}").as_str());
        }
        (self.logger)(format!("nr of clients (excluding depot): {nb_clients}").as_str());

        Ok(Header { nb_clients, vehicle_capacity_box, vehicle_capacity_wt, duration_limit: self.duration_limit })
    }

    fn read_nodes(&mut self, nb_clients: usize) -> InstanceResult<(Vec<Customer>, DemandStatistics)> {
        (self.logger)("process node section");

        // NOTE the dimension is not trusted to preallocate storage
        let mut clients: Vec<Customer> = Vec::new();
        let mut demands = DemandStatistics::default();

        for _ in 0..=nb_clients {
            let mut customer = self.read_customer()?;

            // NOTE the depot is the angular reference for all nodes, including itself
            let origin = clients.first().unwrap_or(&customer);
            let origin = (origin.coord_x, origin.coord_y);
            customer.polar_angle = get_polar_angle(origin, (customer.coord_x, customer.coord_y));

            demands.add(&customer);
            clients.push(customer);
        }

        Ok((clients, demands))
    }

    fn read_customer(&mut self) -> InstanceResult<Customer> {
        let id_token = self.tokens.read_token("node id")?;
        let id = match id_token.parse::<usize>() {
            Ok(id) if id > 0 => id - 1,
            _ => return Err(InstanceError::invalid_value("node id", &id_token)),
        };

        Ok(Customer {
            id,
            coord_x: self.read_finite("node x")?,
            coord_y: self.read_finite("node y")?,
            demand_box: self.read_finite("node demand (box)")?,
            demand_wt: self.read_finite("node demand (weight)")?,
            service_duration: self.read_finite("node service duration")?,
            polar_angle: 0,
        })
    }

    fn read_travel_times(&mut self, nb_clients: usize) -> InstanceResult<(TimeMatrix, Float)> {
        self.tokens.expect_token("TRAVEL_TIME_SECTION")?;
        (self.logger)("process travel times section");

        let nb_cells = get_matrix_len(nb_clients)
            .ok_or_else(|| InstanceError::invalid_value("DIMENSION", &nb_clients.to_string()))?;
        let size = nb_clients + 1;
        let mut time_cost = TimeMatrix::new(size);
        let mut max_dist: Float = 0.;

        for _ in 0..nb_cells {
            let from = self.read_node_index(size)?;
            let to = self.read_node_index(size)?;
            let time = self.read_finite("travel time")?;

            if time > max_dist {
                max_dist = time;
            }

            // NOTE duplicates are not detected: the last triplet wins
            time_cost.set(from, to, time);
        }

        Ok((time_cost, max_dist))
    }

    fn read_node_index(&mut self, size: usize) -> InstanceResult<usize> {
        let token = self.tokens.read_token("travel time index")?;
        match token.parse::<usize>() {
            Ok(index) if (1..=size).contains(&index) => Ok(index - 1),
            _ => Err(InstanceError::invalid_value("travel time index", &token)),
        }
    }

    fn read_depot(&mut self) -> InstanceResult<()> {
        self.tokens.expect_token("DEPOT_SECTION")?;
        (self.logger)("process depot section");

        let depot_index = self.tokens.read_token("depot index")?;
        if depot_index != DEPOT_INDEX {
            return Err(InstanceError::unexpected_token(&depot_index, Some(DEPOT_INDEX)));
        }

        // NOTE the depot list terminator is read, but not checked
        self.tokens.read_token("depot section end")?;
        self.tokens.expect_token("EOF")
    }

    fn read_finite(&mut self, field: &str) -> InstanceResult<Float> {
        let value: Float = self.tokens.read_value(field)?;
        if value.is_finite() { Ok(value) } else { Err(InstanceError::invalid_value(field, &value.to_string())) }
    }

    fn read_separator(&mut self, key: &str) -> InstanceResult<()> {
        self.tokens.read_token(format!("separator after {key}").as_str()).map(|_| ())
    }
}

/// Returns the amount of travel time cells or `None` if it does not fit into memory addressing.
fn get_matrix_len(nb_clients: usize) -> Option<usize> {
    nb_clients.checked_add(1).and_then(|size| size.checked_mul(size))
}

fn get_capacity(capacity: Option<Float>, field: &str) -> InstanceResult<Float> {
    match capacity {
        Some(capacity) if capacity.is_finite() && capacity > 0. => Ok(capacity),
        Some(capacity) => Err(InstanceError::invalid_value(field, &capacity.to_string())),
        None => Err(InstanceError::missing_field(field)),
    }
}
