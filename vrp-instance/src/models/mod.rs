//! Contains models produced by the instance loading.

mod customer;
pub use self::customer::*;

mod instance;
pub use self::instance::*;

mod matrix;
pub use self::matrix::*;
