use serde::{Deserialize, Serialize};

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// A single wind and temperature sample, applied uniformly along a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindObservation {
    pub speed_meters_per_second: f64,
    /// Direction the wind blows from, degrees clockwise from north.
    pub direction_degrees: i32,
    pub temperature_kelvin: f64,
}

impl WindObservation {
    pub fn new(
        speed_meters_per_second: f64,
        direction_degrees: i32,
        temperature_kelvin: f64,
    ) -> Self {
        Self {
            speed_meters_per_second: speed_meters_per_second.max(0.0),
            direction_degrees: direction_degrees.rem_euclid(360),
            temperature_kelvin,
        }
    }

    pub fn temperature_celsius(&self) -> f64 {
        kelvin_to_celsius(self.temperature_kelvin)
    }
}

/// Wind exposure at one path sample point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateWeatherImpact {
    pub relative_wind_direction_degrees: f64,
    pub headwind_percent: f64,
    pub tailwind_percent: f64,
    pub crosswind_percent: f64,
}

/// Headwind/tailwind/crosswind percentages of a whole path.
///
/// `Incomplete` marks an impact whose wind breakdown is unknown, e.g. one
/// deserialized from a source that omitted the percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WindPercentages {
    Complete {
        headwind: f64,
        tailwind: f64,
        crosswind: f64,
    },
    Incomplete,
}

impl WindPercentages {
    pub fn headwind(&self) -> Option<f64> {
        match self {
            WindPercentages::Complete { headwind, .. } => Some(*headwind),
            WindPercentages::Incomplete => None,
        }
    }

    pub fn tailwind(&self) -> Option<f64> {
        match self {
            WindPercentages::Complete { tailwind, .. } => Some(*tailwind),
            WindPercentages::Incomplete => None,
        }
    }

    pub fn crosswind(&self) -> Option<f64> {
        match self {
            WindPercentages::Complete { crosswind, .. } => Some(*crosswind),
            WindPercentages::Incomplete => None,
        }
    }
}

/// Path-level summary: mean wind percentages plus the shared weather sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathWeatherImpact {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Meters per second.
    pub wind_speed: f64,
    pub wind: WindPercentages,
}

impl PathWeatherImpact {
    pub fn new(
        temperature: f64,
        wind_speed: f64,
        headwind: f64,
        tailwind: f64,
        crosswind: f64,
    ) -> Self {
        Self {
            temperature,
            wind_speed,
            wind: WindPercentages::Complete {
                headwind,
                tailwind,
                crosswind,
            },
        }
    }

    pub fn incomplete(temperature: f64, wind_speed: f64) -> Self {
        Self {
            temperature,
            wind_speed,
            wind: WindPercentages::Incomplete,
        }
    }
}
