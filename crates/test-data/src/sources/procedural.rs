//! Procedural route generation.

use std::f64::consts::TAU;

use geo::{Destination, Haversine, Point};
use headwind::path::RoutePath;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::{BoundingBox, Region};

/// Shape of a generated route. Bearings are degrees clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoutePattern {
    /// Straight line along one bearing.
    Straight { bearing: f64 },
    /// Half the distance out along `bearing`, then the same way back.
    OutAndBack { bearing: f64 },
    /// Clockwise circle starting at its northernmost point.
    Loop,
    /// Random walk with momentum, bouncing off the region bounds.
    Wander,
}

/// Configuration for procedural route generation.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Target distance in meters.
    pub distance_meters: f64,
    /// Starting point (lat, lon). If None, random within bounds.
    pub start_point: Option<(f64, f64)>,
    /// Geographic bounds for wandering routes.
    pub bounds: BoundingBox,
    /// GPS position jitter standard deviation in meters.
    pub gps_jitter_m: f64,
    /// Distance between route points in meters.
    pub point_spacing_m: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            distance_meters: 5000.0,
            start_point: None,
            bounds: Region::BOULDER,
            gps_jitter_m: 0.0,
            point_spacing_m: 100.0,
        }
    }
}

/// Generates synthetic routes with a known shape.
pub struct ProceduralGenerator {
    config: RouteConfig,
    pattern: RoutePattern,
}

impl ProceduralGenerator {
    pub fn new(pattern: RoutePattern) -> Self {
        Self {
            config: RouteConfig::default(),
            pattern,
        }
    }

    /// Creates a generator for a specific region.
    pub fn for_region(bounds: BoundingBox, pattern: RoutePattern) -> Self {
        Self {
            config: RouteConfig {
                bounds,
                ..Default::default()
            },
            pattern,
        }
    }

    /// Sets the target distance.
    pub fn with_distance(mut self, meters: f64) -> Self {
        self.config.distance_meters = meters;
        self
    }

    /// Sets the starting point.
    pub fn with_start(mut self, lat: f64, lon: f64) -> Self {
        self.config.start_point = Some((lat, lon));
        self
    }

    /// Sets GPS jitter amount.
    pub fn with_gps_jitter(mut self, meters: f64) -> Self {
        self.config.gps_jitter_m = meters;
        self
    }

    /// Sets point spacing.
    pub fn with_point_spacing(mut self, meters: f64) -> Self {
        self.config.point_spacing_m = meters;
        self
    }

    /// Generates a route ready for analysis.
    pub fn generate(&self, rng: &mut impl Rng) -> RoutePath {
        RoutePath::from_lat_lon(&self.generate_path(rng))
    }

    /// Generates the `(lat, lon)` coordinates of a route.
    pub fn generate_path(&self, rng: &mut impl Rng) -> Vec<(f64, f64)> {
        let (lat, lon) = self
            .config
            .start_point
            .unwrap_or_else(|| self.config.bounds.random_point(rng));
        let start = Point::new(lon, lat);

        let points = match self.pattern {
            RoutePattern::Straight { bearing } => self.straight(start, bearing),
            RoutePattern::OutAndBack { bearing } => self.out_and_back(start, bearing),
            RoutePattern::Loop => self.circle(start),
            RoutePattern::Wander => self.wander(start, rng),
        };

        self.apply_jitter(points, rng)
    }

    fn step_count(&self, distance: f64) -> usize {
        (distance / self.config.point_spacing_m).ceil().max(1.0) as usize
    }

    fn straight(&self, start: Point<f64>, bearing: f64) -> Vec<Point<f64>> {
        let steps = self.step_count(self.config.distance_meters);
        let step = self.config.distance_meters / steps as f64;
        (0..=steps)
            .map(|i| Haversine.destination(start, bearing, step * i as f64))
            .collect()
    }

    fn out_and_back(&self, start: Point<f64>, bearing: f64) -> Vec<Point<f64>> {
        let half = self.config.distance_meters / 2.0;
        let steps = self.step_count(half);
        let step = half / steps as f64;

        let mut points: Vec<Point<f64>> = (0..=steps)
            .map(|i| Haversine.destination(start, bearing, step * i as f64))
            .collect();
        let back: Vec<Point<f64>> = points.iter().rev().skip(1).copied().collect();
        points.extend(back);
        points
    }

    /// The start point is the northernmost point; riding clockwise means
    /// heading east first.
    fn circle(&self, start: Point<f64>) -> Vec<Point<f64>> {
        let radius = self.config.distance_meters / TAU;
        let center = Haversine.destination(start, 180.0, radius);
        let steps = self.step_count(self.config.distance_meters).max(8);

        (0..=steps)
            .map(|i| {
                let angle = 360.0 * i as f64 / steps as f64;
                Haversine.destination(center, angle, radius)
            })
            .collect()
    }

    fn wander(&self, start: Point<f64>, rng: &mut impl Rng) -> Vec<Point<f64>> {
        let bounds = &self.config.bounds;
        let mut points = vec![start];
        let mut current = start;
        let mut bearing: f64 = rng.gen_range(0.0..360.0);
        let mut total_distance = 0.0;

        while total_distance < self.config.distance_meters {
            bearing += rng.gen_range(-17.0..17.0);
            let step = self.config.point_spacing_m * rng.gen_range(0.8..1.2);
            let mut next = Haversine.destination(current, bearing, step);

            if !bounds.contains(next.y(), next.x()) {
                bearing += 180.0;
                next = Haversine.destination(current, bearing, step);
            }

            current = next;
            points.push(current);
            total_distance += step;
        }

        points
    }

    fn apply_jitter(&self, points: Vec<Point<f64>>, rng: &mut impl Rng) -> Vec<(f64, f64)> {
        let sigma = self.config.gps_jitter_m / 111_000.0;
        let jitter = Normal::new(0.0, sigma).ok().filter(|_| sigma > 0.0);

        points
            .into_iter()
            .map(|p| match &jitter {
                Some(normal) => (p.y() + normal.sample(rng), p.x() + normal.sample(rng)),
                None => (p.y(), p.x()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headwind::path::PathProvider;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_straight_route_headings() {
        let mut rng = StdRng::seed_from_u64(1);
        let path = ProceduralGenerator::new(RoutePattern::Straight { bearing: 0.0 })
            .with_start(40.0, -105.3)
            .with_distance(2000.0)
            .generate(&mut rng);

        assert_eq!(path.len(), 21);
        assert!(path.heading_angles().iter().all(|&h| h == 0));
    }

    #[test]
    fn test_out_and_back_reverses() {
        let mut rng = StdRng::seed_from_u64(1);
        let path = ProceduralGenerator::new(RoutePattern::OutAndBack { bearing: 0.0 })
            .with_start(40.0, -105.3)
            .with_distance(2000.0)
            .generate(&mut rng);

        let headings = path.heading_angles();
        assert_eq!(path.len(), 21);
        assert!(headings[..10].iter().all(|&h| h == 0));
        assert!(headings[10..].iter().all(|&h| h == 180));

        let first = path.coordinates()[0];
        let last = path.coordinates()[20];
        assert!((first.y() - last.y()).abs() < 1e-9);
    }

    #[test]
    fn test_loop_covers_all_directions() {
        let mut rng = StdRng::seed_from_u64(1);
        let path = ProceduralGenerator::new(RoutePattern::Loop)
            .with_start(51.5, 3.8)
            .with_distance(6000.0)
            .generate(&mut rng);

        let headings = path.heading_angles();
        assert!((headings[0] - 90).abs() <= 10, "first heading {}", headings[0]);
        for quadrant in 0..4 {
            let lo = quadrant * 90;
            assert!(
                headings.iter().any(|h| (lo..lo + 90).contains(h)),
                "no heading in [{lo}, {})",
                lo + 90
            );
        }
    }

    #[test]
    fn test_wander_stays_near_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let coords = ProceduralGenerator::for_region(Region::ZEELAND, RoutePattern::Wander)
            .with_distance(10_000.0)
            .generate_path(&mut rng);

        assert!(coords.len() > 50);
        for (lat, lon) in coords {
            assert!((51.2..51.8).contains(&lat));
            assert!((3.3..4.3).contains(&lon));
        }
    }

    #[test]
    fn test_jitter_moves_points() {
        let mut rng = StdRng::seed_from_u64(3);
        let clean = ProceduralGenerator::new(RoutePattern::Straight { bearing: 90.0 })
            .with_start(40.0, -105.3)
            .generate_path(&mut rng);
        let noisy = ProceduralGenerator::new(RoutePattern::Straight { bearing: 90.0 })
            .with_start(40.0, -105.3)
            .with_gps_jitter(5.0)
            .generate_path(&mut rng);

        assert_eq!(clean.len(), noisy.len());
        assert!(clean.iter().zip(&noisy).any(|(a, b)| a != b));
    }
}
