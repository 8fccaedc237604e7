//! This module reimports commonly used types.

pub use crate::config::{PreprocessingConfig, read_config};
pub use crate::format::InstanceReader;
pub use crate::models::{Customer, Instance, Penalties, TimeMatrix, load_instance};
pub use crate::utils::{Environment, Float, InfoLogger, InstanceError, InstanceResult, Random};
