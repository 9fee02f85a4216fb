//! Weather providers: where the single wind sample of an analysis comes from.

use async_trait::async_trait;
use geo::Point;
use serde::Deserialize;

use crate::{errors::WeatherError, models::WindObservation};

pub const OPENWEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// One-shot lookup of the current wind and temperature at a point.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch(&self, coordinate: Point<f64>) -> Result<WindObservation, WeatherError>;
}

/// Provider that always answers with the same observation.
#[derive(Debug, Clone, Copy)]
pub struct StaticWeather(pub WindObservation);

#[async_trait]
impl WeatherProvider for StaticWeather {
    async fn fetch(&self, _coordinate: Point<f64>) -> Result<WindObservation, WeatherError> {
        Ok(self.0)
    }
}

/// Response from the OpenWeatherMap current weather API (fields we use).
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: Option<MainBlock>,
    wind: Option<WindBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: Option<f64>,
    deg: Option<f64>,
}

/// Client for the OpenWeatherMap current weather endpoint.
///
/// Temperatures come back in Kelvin, the endpoint's default unit.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: OPENWEATHER_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Sets a custom endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn parse_response(text: &str) -> Result<WindObservation, WeatherError> {
        let parsed: CurrentWeatherResponse = serde_json::from_str(text)?;

        let temperature = parsed
            .main
            .and_then(|m| m.temp)
            .ok_or(WeatherError::MissingField("main.temp"))?;
        let wind = parsed.wind.ok_or(WeatherError::MissingField("wind"))?;
        let speed = wind.speed.ok_or(WeatherError::MissingField("wind.speed"))?;
        // calm readings omit the direction
        let direction = wind.deg.unwrap_or(0.0).round() as i32;

        Ok(WindObservation::new(speed, direction, temperature))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, coordinate: Point<f64>) -> Result<WindObservation, WeatherError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("lat", coordinate.y().to_string()),
                ("lon", coordinate.x().to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        Self::parse_response(&text)
    }
}
