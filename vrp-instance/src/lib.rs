//! This crate reads a two-dimensional capacitated vehicle routing problem instance (box and weight
//! demands, optional route duration limit, explicit travel time matrix) and prepares it for a route
//! optimizer based on granular search.
//!
//! # Preprocessing
//!
//! Apart from reading the data, the following is done:
//! - **fleet size** is estimated from total box demand if it is not specified by the caller
//! - **numerical scale** of distances and demands is validated
//! - **granular neighborhood**: for each customer, the nearest customers are found and the relation
//!   is made symmetric
//! - **penalties**: initial capacity penalties are calibrated from distance and demand magnitudes
//!
//! # Example
//!
//! ```
//! use vrp_instance::prelude::*;
//!
//! let text = "NAME : example\nCOMMENT : none\nTYPE : CVRP2D\n\
//!             DIMENSION : 3\nCAPACITY : 10 20\nNODE_SECTION\n\
//!             1 0 0 0 0 0\n2 1 0 4 5 0\n3 0 1 6 7 0\n\
//!             TRAVEL_TIME_SECTION\n\
//!             1 1 0\n1 2 10\n1 3 10\n2 1 10\n2 2 0\n2 3 5\n3 1 10\n3 2 5\n3 3 0\n\
//!             DEPOT_SECTION\n1\n-1\nEOF\n";
//!
//! let environment = Environment::new_with_seed(42);
//! let instance = text
//!     .to_string()
//!     .read_instance(None, &environment, &PreprocessingConfig::default())
//!     .expect("cannot read instance");
//!
//! assert_eq!(instance.nb_clients, 2);
//! assert_eq!(instance.correlated(1), &[2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/loading_test.rs"]
mod loading_test;

pub mod config;
pub mod format;
pub mod models;
pub mod prelude;
pub mod processing;
pub mod utils;
