//! Contains logic to read the instance text format.
//!
//! The format is token based: three leading lines are ignored, then a key-value header terminated by
//! `NODE_SECTION`, node records, `TRAVEL_TIME_SECTION` with `(i, j, time)` triplets and, finally,
//! `DEPOT_SECTION`.

mod reader;
pub use self::reader::*;

mod tokens;
pub(crate) use self::tokens::TokenReader;
