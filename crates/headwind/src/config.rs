//! Environment configuration for the `headwind` binary.

use std::env;

use anyhow::{Context, bail};

use crate::{models::WindObservation, weather::OPENWEATHER_ENDPOINT};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub weather_endpoint: String,
    /// Fixed observation that replaces the network lookup.
    pub wind_override: Option<WindObservation>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("OPENWEATHER_API_KEY").ok();
        let weather_endpoint =
            env::var("WEATHER_ENDPOINT").unwrap_or_else(|_| OPENWEATHER_ENDPOINT.to_string());
        let wind_override = match env::var("HEADWIND_WIND") {
            Ok(value) => Some(parse_wind(&value).context("Invalid HEADWIND_WIND")?),
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            weather_endpoint,
            wind_override,
        })
    }
}

/// Parses `speed,direction,temperatureKelvin`, e.g. `4.5,270,288.15`.
pub fn parse_wind(value: &str) -> anyhow::Result<WindObservation> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [speed, direction, temperature] = parts.as_slice() else {
        bail!("expected speed,direction,temperatureKelvin but got {value:?}");
    };

    let speed: f64 = speed.parse().context("wind speed")?;
    let direction: i32 = direction.parse().context("wind direction")?;
    let temperature: f64 = temperature.parse().context("temperature")?;

    if speed < 0.0 {
        bail!("wind speed must not be negative");
    }

    Ok(WindObservation::new(speed, direction, temperature))
}
