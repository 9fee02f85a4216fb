//! Colored route segments for map display, red for headwind and green for none.

use geo::Point;
use serde::Serialize;
use serde_json::{Value, json};

use crate::models::CoordinateWeatherImpact;

/// Color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const GRAY: Rgb = Rgb {
        red: 0.5,
        green: 0.5,
        blue: 0.5,
    };

    /// `#rrggbb` form, as used by GeoJSON styling properties.
    pub fn to_hex(self) -> String {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }
}

/// Linear green-to-red ramp over `[0, 100]` percent.
pub fn color_for_percentage(percent: f64) -> Rgb {
    let red = (percent / 100.0).clamp(0.0, 1.0);
    Rgb {
        red,
        green: 1.0 - red,
        blue: 0.0,
    }
}

/// A line between two adjacent path points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegmentOverlay {
    pub start: Point<f64>,
    pub end: Point<f64>,
    pub color: Rgb,
}

/// One segment per pair of adjacent coordinates, colored by the headwind at
/// the segment's first point. Stops early when there are fewer impacts than
/// segments.
pub fn build_overlay_segments(
    impacts: &[CoordinateWeatherImpact],
    coordinates: &[Point<f64>],
) -> Vec<PathSegmentOverlay> {
    let segment_count = coordinates.len().saturating_sub(1);
    if impacts.len() < segment_count {
        tracing::warn!(
            "Only {} impacts for {} segments, overlay is truncated",
            impacts.len(),
            segment_count
        );
    }

    coordinates
        .windows(2)
        .zip(impacts)
        .map(|(pair, impact)| PathSegmentOverlay {
            start: pair[0],
            end: pair[1],
            color: segment_color(impact),
        })
        .collect()
}

fn segment_color(impact: &CoordinateWeatherImpact) -> Rgb {
    if impact.headwind_percent.is_finite() {
        color_for_percentage(impact.headwind_percent)
    } else {
        Rgb::GRAY
    }
}

/// GeoJSON FeatureCollection of the segments, one LineString each.
pub fn overlay_to_geojson(segments: &[PathSegmentOverlay]) -> Value {
    let features: Vec<Value> = segments
        .iter()
        .map(|segment| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [
                        [segment.start.x(), segment.start.y()],
                        [segment.end.x(), segment.end.y()]
                    ]
                },
                "properties": {
                    "stroke": segment.color.to_hex()
                }
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features
    })
}
