//! Fixed-point scaling shared by every payload codec.
//!
//! Analog quantities travel in two encodings: signed centi-units (an i16
//! holding the value times 100) for control targets, and step-scaled
//! bytes (a u8 counting increments of a named step) for profile node
//! fields. Both saturate on encode: out-of-range values pin to the edge
//! of the representable range rather than wrapping or failing.

/// Centi-unit scale factor for i16 quantities.
pub const CENTI: f32 = 100.0;

/// Temperature step for node fields, in degrees Celsius.
pub const TEMP_STEP_C: f32 = 0.5;

/// Pressure step for node fields, in bar.
pub const PRESSURE_STEP_BAR: f32 = 0.1;

/// Flow step for node fields, in ml/s.
pub const FLOW_STEP_ML_S: f32 = 0.1;

/// Volume step for node fields, in ml.
pub const VOLUME_STEP_ML: f32 = 1.0;

/// Energy step for node fields, in device units.
pub const ENERGY_STEP: f32 = 1.0;

/// Encode a quantity as signed centi-units.
///
/// Rounds half away from zero, then saturates at the i16 range.
/// NaN encodes as 0.
pub fn encode_centi(value: f32) -> i16 {
    (value * CENTI).round() as i16
}

/// Decode signed centi-units back to a quantity.
pub fn decode_centi(raw: i16) -> f32 {
    raw as f32 / CENTI
}

/// Encode a quantity as a count of `step`-sized increments, saturating
/// at 0 and 255. NaN encodes as 0.
pub fn encode_step(value: f32, step: f32) -> u8 {
    (value / step).round() as u8
}

/// Decode a `step`-scaled byte back to a quantity.
pub fn decode_step(raw: u8, step: f32) -> f32 {
    raw as f32 * step
}
