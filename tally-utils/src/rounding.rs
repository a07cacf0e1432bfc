/// Round to two decimal places, the precision used for all reported hour
/// values.
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
