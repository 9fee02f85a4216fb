//! Headwind, tailwind and crosswind exposure along a cycling route.
//!
//! One wind sample is taken at the route's average coordinate and applied to
//! every point of the route:
//!
//! ```rust,ignore
//! use headwind::prelude::*;
//!
//! let path = RoutePath::from_lat_lon(&[(40.0, -105.0), (40.01, -105.0)]);
//! let weather = StaticWeather(WindObservation::new(4.0, 200, 288.15));
//!
//! let analysis = analyze_impact(&path, &weather).await?;
//! println!("{}", cycling_advisory(&analysis.path_impact));
//! ```

pub mod config;
pub mod errors;
pub mod geometry;
pub mod impact;
pub mod models;
pub mod overlay;
pub mod path;
pub mod scoring;
pub mod weather;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::errors::{ImpactError, PathError, WeatherError};
    pub use crate::geometry::{
        crosswind_percent, headwind_percent, relative_wind_angle, tailwind_percent,
    };
    pub use crate::impact::{
        AnalysisHandle, ImpactAnalysis, analyze_impact, compute_coordinate_impacts,
        compute_path_impact, spawn_analysis,
    };
    pub use crate::models::{
        CoordinateWeatherImpact, PathWeatherImpact, WindObservation, WindPercentages,
    };
    pub use crate::overlay::{
        PathSegmentOverlay, Rgb, build_overlay_segments, color_for_percentage, overlay_to_geojson,
    };
    pub use crate::path::{PathProvider, RoutePath};
    pub use crate::scoring::{
        Advisory, ScoringConfig, cycling_advisory, cycling_score, cycling_score_with,
    };
    pub use crate::weather::{OpenWeatherClient, StaticWeather, WeatherProvider};
}
