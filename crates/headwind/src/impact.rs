//! Aggregation of per-point wind exposure into a path-level impact.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    errors::ImpactError,
    geometry::coordinate_impact,
    models::{CoordinateWeatherImpact, PathWeatherImpact, WindObservation},
    path::PathProvider,
    weather::WeatherProvider,
};

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactAnalysis {
    pub coordinate_impacts: Vec<CoordinateWeatherImpact>,
    pub path_impact: PathWeatherImpact,
}

/// One impact per heading, in the same order.
pub fn compute_coordinate_impacts(
    headings: &[i32],
    wind: &WindObservation,
) -> Vec<CoordinateWeatherImpact> {
    headings
        .iter()
        .map(|&heading| coordinate_impact(heading, wind))
        .collect()
}

/// Mean of each wind percentage, paired with the sample's temperature (converted
/// to Celsius) and wind speed.
pub fn compute_path_impact(
    impacts: &[CoordinateWeatherImpact],
    wind: &WindObservation,
) -> Result<PathWeatherImpact, ImpactError> {
    if impacts.is_empty() {
        return Err(ImpactError::EmptyImpactSet);
    }

    let count = impacts.len() as f64;
    let (headwind, tailwind, crosswind) = impacts.iter().fold(
        (0.0, 0.0, 0.0),
        |(head, tail, cross), impact| {
            (
                head + impact.headwind_percent,
                tail + impact.tailwind_percent,
                cross + impact.crosswind_percent,
            )
        },
    );

    Ok(PathWeatherImpact::new(
        wind.temperature_celsius(),
        wind.speed_meters_per_second,
        headwind / count,
        tailwind / count,
        crosswind / count,
    ))
}

/// Samples the weather once at the path's average coordinate and computes
/// both the per-point and the path-level impact.
pub async fn analyze_impact<P, W>(path: &P, weather: &W) -> Result<ImpactAnalysis, ImpactError>
where
    P: PathProvider + ?Sized,
    W: WeatherProvider + ?Sized,
{
    let Some(average) = path.average_coordinate() else {
        return Err(ImpactError::InvalidAverageCoordinate);
    };
    if !(average.x().is_finite() && average.y().is_finite()) {
        return Err(ImpactError::InvalidAverageCoordinate);
    }

    debug!(
        "Sampling weather at ({:.5}, {:.5}) for {} points",
        average.y(),
        average.x(),
        path.heading_angles().len()
    );

    let wind = weather.fetch(average).await.inspect_err(|e| {
        warn!("Weather provider failed: {e}");
    })?;

    info!(
        "Wind {:.1} m/s from {}°, {:.1}°C",
        wind.speed_meters_per_second,
        wind.direction_degrees,
        wind.temperature_celsius()
    );

    let coordinate_impacts = compute_coordinate_impacts(path.heading_angles(), &wind);
    let path_impact = compute_path_impact(&coordinate_impacts, &wind)?;

    Ok(ImpactAnalysis {
        coordinate_impacts,
        path_impact,
    })
}

/// Handle to an analysis running on the tokio runtime.
///
/// Dropping the handle detaches the task; [`AnalysisHandle::cancel`] aborts it.
#[derive(Debug)]
pub struct AnalysisHandle {
    task: JoinHandle<Result<ImpactAnalysis, ImpactError>>,
}

impl AnalysisHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the analysis. A cancelled run yields [`ImpactError::Cancelled`].
    pub async fn join(self) -> Result<ImpactAnalysis, ImpactError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(ImpactError::Cancelled),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}

/// Starts [`analyze_impact`] in the background. Must be called within a tokio runtime.
pub fn spawn_analysis<P, W>(path: P, weather: Arc<W>) -> AnalysisHandle
where
    P: PathProvider + Send + Sync + 'static,
    W: WeatherProvider + ?Sized + 'static,
{
    let task = tokio::spawn(async move { analyze_impact(&path, weather.as_ref()).await });
    AnalysisHandle { task }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use geo::Point;

    use super::*;
    use crate::{errors::WeatherError, path::RoutePath, weather::StaticWeather};

    /// Records every coordinate it is asked about.
    struct RecordingWeather {
        observation: WindObservation,
        calls: AtomicUsize,
        last: Mutex<Option<Point<f64>>>,
    }

    #[async_trait]
    impl WeatherProvider for RecordingWeather {
        async fn fetch(&self, coordinate: Point<f64>) -> Result<WindObservation, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(coordinate);
            Ok(self.observation)
        }
    }

    struct FailingWeather;

    #[async_trait]
    impl WeatherProvider for FailingWeather {
        async fn fetch(&self, _coordinate: Point<f64>) -> Result<WindObservation, WeatherError> {
            Err(WeatherError::Status(503))
        }
    }

    struct NeverWeather;

    #[async_trait]
    impl WeatherProvider for NeverWeather {
        async fn fetch(&self, _coordinate: Point<f64>) -> Result<WindObservation, WeatherError> {
            std::future::pending().await
        }
    }

    fn northbound() -> RoutePath {
        RoutePath::from_lat_lon(&[(40.0, -105.0), (40.01, -105.0), (40.02, -105.0)])
    }

    #[test]
    fn test_coordinate_impacts_length_and_order() {
        let wind = WindObservation::new(4.0, 0, 290.0);
        let impacts = compute_coordinate_impacts(&[0, 180, 90], &wind);
        assert_eq!(impacts.len(), 3);
        assert_eq!(impacts[0].headwind_percent, 100.0);
        assert_eq!(impacts[1].tailwind_percent, 100.0);
        assert_eq!(impacts[2].crosswind_percent, 100.0);
    }

    #[test]
    fn test_coordinate_impacts_empty() {
        let wind = WindObservation::new(4.0, 0, 290.0);
        assert!(compute_coordinate_impacts(&[], &wind).is_empty());
    }

    #[test]
    fn test_path_impact_empty_is_error() {
        let wind = WindObservation::new(4.0, 0, 290.0);
        let result = compute_path_impact(&[], &wind);
        assert!(matches!(result, Err(ImpactError::EmptyImpactSet)));
    }

    #[test]
    fn test_path_impact_identical_impacts() {
        let wind = WindObservation::new(4.0, 30, 290.0);
        let impacts = compute_coordinate_impacts(&[0; 7], &wind);
        let path = compute_path_impact(&impacts, &wind).unwrap();

        assert_eq!(path.wind.headwind(), Some(impacts[0].headwind_percent));
        assert_eq!(path.wind.tailwind(), Some(impacts[0].tailwind_percent));
        assert_eq!(path.wind.crosswind(), Some(impacts[0].crosswind_percent));
    }

    #[test]
    fn test_path_impact_means_and_units() {
        let wind = WindObservation::new(6.5, 0, 283.15);
        let impacts = compute_coordinate_impacts(&[0, 180], &wind);
        let path = compute_path_impact(&impacts, &wind).unwrap();

        assert_eq!(path.wind.headwind(), Some(50.0));
        assert_eq!(path.wind.tailwind(), Some(50.0));
        assert_eq!(path.wind.crosswind(), Some(0.0));
        assert!((path.temperature - 10.0).abs() < 1e-9);
        assert_eq!(path.wind_speed, 6.5);
    }

    #[tokio::test]
    async fn test_analyze_fetches_once_at_average() {
        let path = northbound();
        let weather = RecordingWeather {
            observation: WindObservation::new(3.0, 0, 290.0),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        };

        let analysis = analyze_impact(&path, &weather).await.unwrap();

        assert_eq!(weather.calls.load(Ordering::SeqCst), 1);
        let sampled = weather.last.lock().unwrap().unwrap();
        assert!((sampled.y() - 40.01).abs() < 1e-9);
        assert!((sampled.x() + 105.0).abs() < 1e-9);

        assert_eq!(analysis.coordinate_impacts.len(), 3);
        assert_eq!(analysis.path_impact.wind.headwind(), Some(100.0));
    }

    #[tokio::test]
    async fn test_analyze_empty_path() {
        let weather = StaticWeather(WindObservation::new(3.0, 0, 290.0));
        let result = analyze_impact(&RoutePath::default(), &weather).await;
        assert!(matches!(result, Err(ImpactError::InvalidAverageCoordinate)));
    }

    #[tokio::test]
    async fn test_analyze_propagates_provider_error() {
        let result = analyze_impact(&northbound(), &FailingWeather).await;
        assert!(matches!(
            result,
            Err(ImpactError::WeatherProvider(WeatherError::Status(503)))
        ));
    }

    #[tokio::test]
    async fn test_spawned_analysis_completes() {
        let weather = Arc::new(StaticWeather(WindObservation::new(3.0, 180, 290.0)));
        let handle = spawn_analysis(northbound(), weather);
        let analysis = handle.join().await.unwrap();
        assert_eq!(analysis.path_impact.wind.tailwind(), Some(100.0));
    }

    #[tokio::test]
    async fn test_spawned_analysis_cancel() {
        let handle = spawn_analysis(northbound(), Arc::new(NeverWeather));
        handle.cancel();
        assert!(matches!(handle.join().await, Err(ImpactError::Cancelled)));
    }
}
