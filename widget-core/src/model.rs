use serde::{Deserialize, Serialize};

/// Unit every snapshot is currently produced in.
pub const CELSIUS: &str = "C";

/// The single current weather result held by the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in `unit` degrees.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Wind speed in km/h.
    pub wind: f64,
    pub description: String,
    pub location: String,
    pub unit: String,
}
