//! Synthetic wind observations.

use headwind::models::{KELVIN_OFFSET, WindObservation};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Samples wind observations around a typical speed and temperature.
///
/// Directions are uniform over the compass; speeds and temperatures are
/// normally distributed, with speeds clamped at zero.
#[derive(Debug, Clone, Copy)]
pub struct WindGenerator {
    /// Mean wind speed in m/s.
    mean_speed: f64,
    speed_std_dev: f64,
    /// Mean temperature in °C.
    mean_temperature: f64,
    temperature_std_dev: f64,
}

impl WindGenerator {
    pub fn new(mean_speed: f64, mean_temperature: f64) -> Self {
        Self {
            mean_speed,
            speed_std_dev: mean_speed * 0.25,
            mean_temperature,
            temperature_std_dev: 3.0,
        }
    }

    /// Light air on a mild day.
    pub fn calm() -> Self {
        Self::new(1.0, 20.0)
    }

    /// Moderate breeze (~5 m/s), cool.
    pub fn breezy() -> Self {
        Self::new(5.0, 14.0)
    }

    /// Gale force, well above the windy threshold.
    pub fn gale() -> Self {
        Self {
            speed_std_dev: 1.0,
            ..Self::new(18.0, 8.0)
        }
    }

    /// Samples an observation with a random direction.
    pub fn sample(&self, rng: &mut impl Rng) -> WindObservation {
        let direction = rng.gen_range(0..360);
        self.sample_from(direction, rng)
    }

    /// Samples an observation blowing from `direction` degrees.
    pub fn sample_from(&self, direction: i32, rng: &mut impl Rng) -> WindObservation {
        let speed = sample_normal(self.mean_speed, self.speed_std_dev, rng).max(0.0);
        let celsius = sample_normal(self.mean_temperature, self.temperature_std_dev, rng);
        WindObservation::new(speed, direction, celsius + KELVIN_OFFSET)
    }
}

fn sample_normal(mean: f64, std_dev: f64, rng: &mut impl Rng) -> f64 {
    match Normal::new(mean, std_dev) {
        Ok(normal) if std_dev > 0.0 => normal.sample(rng),
        _ => mean,
    }
}
