//! Comfort score and rule-based riding advice for an analyzed path.
//!
//! All temperatures here are degrees Celsius, matching
//! [`PathWeatherImpact::temperature`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{PathWeatherImpact, WindPercentages};

/// Tunables for [`cycling_score_with`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Temperature at which the temperature term peaks.
    pub ideal_temperature_celsius: f64,
    /// Degrees of deviation per unit of the temperature sigmoid.
    pub temperature_scale: f64,
    /// Meters per second per unit of the wind speed sigmoid.
    pub wind_speed_scale: f64,
    pub temperature_weight: f64,
    pub wind_speed_weight: f64,
    pub wind_balance_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            ideal_temperature_celsius: 23.0,
            temperature_scale: 5.0,
            wind_speed_scale: 4.0,
            temperature_weight: 0.4,
            wind_speed_weight: 0.4,
            wind_balance_weight: 0.2,
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Maps a non-negative distance from the ideal onto `(0, 1]`, 1 at the ideal.
fn closeness(distance: f64) -> f64 {
    2.0 * (1.0 - sigmoid(distance))
}

/// Comfort score with the default weights. See [`cycling_score_with`].
pub fn cycling_score(impact: &PathWeatherImpact) -> f64 {
    cycling_score_with(impact, &ScoringConfig::default())
}

/// Weighted blend of three terms:
/// - temperature closeness to the ideal, in `(0, 1]`
/// - wind calmness, in `(0, 1]`
/// - wind balance `tailwind - headwind - crosswind` mapped from `[-200, 200]`
///   to `[0, 1]`; since tailwind is at most 100 it never exceeds 0.75
///
/// With the default weights the score lies in `(0, 0.95]`. An impact with
/// incomplete wind data scores the balance term as neutral (0.5).
pub fn cycling_score_with(impact: &PathWeatherImpact, config: &ScoringConfig) -> f64 {
    let temperature_term = closeness(
        (impact.temperature - config.ideal_temperature_celsius).abs() / config.temperature_scale,
    );
    let wind_speed_term = closeness(impact.wind_speed.max(0.0) / config.wind_speed_scale);

    let balance_term = match impact.wind {
        WindPercentages::Complete {
            headwind,
            tailwind,
            crosswind,
        } => ((tailwind - headwind - crosswind).clamp(-200.0, 200.0) + 200.0) / 400.0,
        WindPercentages::Incomplete => 0.5,
    };

    config.temperature_weight * temperature_term
        + config.wind_speed_weight * wind_speed_term
        + config.wind_balance_weight * balance_term
}

/// Riding advice, in order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    DataIncomplete,
    Windy,
    Freezing,
    StrongHeadwind,
    UnstableCrosswind,
    HotWithTailwind,
    FavorableTailwind,
    Hot,
    Favorable,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::DataIncomplete => "Weather data is incomplete, unable to give advice.",
            Advisory::Windy => "It is very windy. Consider postponing your ride.",
            Advisory::Freezing => "It is freezing. Watch out for ice and dress warmly.",
            Advisory::StrongHeadwind => "Strong headwind along the route. Expect a tough ride.",
            Advisory::UnstableCrosswind => {
                "Strong crosswind along the route. Hold your line, it may be unstable."
            }
            Advisory::HotWithTailwind => {
                "Tailwind will help, but it is hot. Bring plenty of water."
            }
            Advisory::FavorableTailwind => "Tailwind along the route. Enjoy the ride!",
            Advisory::Hot => "It is hot. Stay hydrated.",
            Advisory::Favorable => "Conditions look good for cycling.",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Wind speed (m/s) above which riding is discouraged.
pub const WINDY_SPEED: f64 = 10.0;
/// Temperature (°C) below which roads may be icy.
pub const FREEZING_TEMPERATURE: f64 = 0.0;
/// Temperature (°C) above which heat becomes a concern.
pub const HOT_TEMPERATURE: f64 = 30.0;
/// Mean wind percentage above which a component dominates.
pub const DOMINANT_PERCENT: f64 = 50.0;

/// First matching rule wins.
pub fn cycling_advisory(impact: &PathWeatherImpact) -> Advisory {
    let WindPercentages::Complete {
        headwind,
        tailwind,
        crosswind,
    } = impact.wind
    else {
        return Advisory::DataIncomplete;
    };

    if impact.wind_speed > WINDY_SPEED {
        Advisory::Windy
    } else if impact.temperature < FREEZING_TEMPERATURE {
        Advisory::Freezing
    } else if headwind > DOMINANT_PERCENT {
        Advisory::StrongHeadwind
    } else if crosswind > DOMINANT_PERCENT {
        Advisory::UnstableCrosswind
    } else if tailwind > DOMINANT_PERCENT && impact.temperature > HOT_TEMPERATURE {
        Advisory::HotWithTailwind
    } else if tailwind > DOMINANT_PERCENT {
        Advisory::FavorableTailwind
    } else if impact.temperature > HOT_TEMPERATURE {
        Advisory::Hot
    } else {
        Advisory::Favorable
    }
}
