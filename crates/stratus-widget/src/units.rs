/// Convert a Celsius temperature to Fahrenheit.
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}
