/// Alias to a scalar floating type.
///
/// NOTE: all instance values (coordinates, demands, travel times) are kept as `f64`, the penalty
/// calibration relies on their magnitude being in a "normal" range.
pub type Float = f64;
