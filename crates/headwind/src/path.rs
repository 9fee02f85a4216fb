//! Route geometry: ordered coordinates with a direction of travel at each one.

use std::io::Read;

use geo::{Bearing, Centroid, Haversine, MultiPoint, Point};
use gpx::{read, Gpx};

use crate::errors::PathError;

/// Source of the geometry an analysis runs over.
///
/// `heading_angles` and `coordinates` have the same length. Points are
/// `geo` points, so `x` is longitude and `y` latitude.
pub trait PathProvider {
    /// Direction of travel at each point, whole degrees in `[0, 360)`.
    fn heading_angles(&self) -> &[i32];

    fn coordinates(&self) -> &[Point<f64>];

    /// Representative point used to sample the weather for the whole path.
    fn average_coordinate(&self) -> Option<Point<f64>>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePath {
    coordinates: Vec<Point<f64>>,
    headings: Vec<i32>,
}

impl RoutePath {
    pub fn new(coordinates: Vec<Point<f64>>) -> Self {
        let headings = headings_for(&coordinates);
        Self {
            coordinates,
            headings,
        }
    }

    /// Builds a path from `(lat, lon)` pairs.
    pub fn from_lat_lon(coords: &[(f64, f64)]) -> Self {
        Self::new(
            coords
                .iter()
                .map(|&(lat, lon)| Point::new(lon, lat))
                .collect(),
        )
    }

    /// Reads every track point of a GPX document, in file order.
    pub fn from_gpx(reader: impl Read) -> Result<Self, PathError> {
        let gpx: Gpx =
            read(reader).map_err(|e| PathError::Gpx(format!("Failed to parse GPX: {}", e)))?;

        let points: Vec<Point<f64>> = gpx
            .tracks
            .iter()
            .flat_map(|track| &track.segments)
            .flat_map(|segment| &segment.points)
            .map(|wpt| wpt.point())
            .collect();

        if points.is_empty() {
            return Err(PathError::NoPoints);
        }

        tracing::debug!("Loaded {} track points from GPX", points.len());
        Ok(Self::new(points))
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl PathProvider for RoutePath {
    fn heading_angles(&self) -> &[i32] {
        &self.headings
    }

    fn coordinates(&self) -> &[Point<f64>] {
        &self.coordinates
    }

    fn average_coordinate(&self) -> Option<Point<f64>> {
        MultiPoint::new(self.coordinates.clone()).centroid()
    }
}

/// Heading at each point: the initial bearing towards the next point. The last
/// point keeps the heading of the leg that reached it; a lone point faces north.
fn headings_for(coordinates: &[Point<f64>]) -> Vec<i32> {
    let mut headings: Vec<i32> = coordinates
        .windows(2)
        .map(|pair| whole_degrees(Haversine.bearing(pair[0], pair[1])))
        .collect();

    if !coordinates.is_empty() {
        headings.push(headings.last().copied().unwrap_or(0));
    }

    headings
}

fn whole_degrees(bearing: f64) -> i32 {
    (bearing.round() as i32).rem_euclid(360)
}
