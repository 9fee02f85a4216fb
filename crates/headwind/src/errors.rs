use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImpactError {
    #[error("Path has no usable average coordinate")]
    InvalidAverageCoordinate,

    #[error("Cannot aggregate an empty set of coordinate impacts")]
    EmptyImpactSet,

    #[error(transparent)]
    WeatherProvider(#[from] WeatherError),

    #[error("Analysis was cancelled")]
    Cancelled,
}

/// Errors surfaced by a [`crate::weather::WeatherProvider`].
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Weather service responded with status {0}")]
    Status(u16),

    #[error("Weather response is missing `{0}`")]
    MissingField(&'static str),

    #[error("Weather provider error: {0}")]
    Other(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum PathError {
    #[error("GPX parsing error: {0}")]
    Gpx(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No track points found in GPX file")]
    NoPoints,
}
