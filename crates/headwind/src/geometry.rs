//! Reduction of a heading and a wind direction to headwind, tailwind and
//! crosswind percentages.
//!
//! Angles are whole degrees. A relative wind angle of 0 means the wind blows
//! from straight ahead, 180 means straight from behind.
//!
//! Percentages are rounded to the nearest whole percent. At exactly 90 and 270
//! degrees the wind is pure crosswind: both headwind and tailwind are zero.

use crate::models::{CoordinateWeatherImpact, WindObservation};

/// Wind direction relative to the direction of travel, in `[0, 360)`.
pub fn relative_wind_angle(heading: i32, wind_direction: i32) -> i32 {
    (wind_direction - heading).rem_euclid(360)
}

/// Share of the wind opposing travel. Non-zero only for angles in
/// `(270, 360) ∪ [0, 90)`.
pub fn headwind_percent(relative_angle: i32) -> f64 {
    let angle = relative_angle.rem_euclid(360);
    if !(90..=270).contains(&angle) {
        let theta = f64::from(angle).to_radians();
        to_percent((1.0 + theta.cos()) / 2.0)
    } else {
        0.0
    }
}

/// Share of the wind pushing from behind. Non-zero only for angles in `(90, 270)`.
pub fn tailwind_percent(relative_angle: i32) -> f64 {
    let angle = relative_angle.rem_euclid(360);
    if (91..270).contains(&angle) {
        let theta = f64::from(angle).to_radians();
        to_percent((1.0 - theta.cos()) / 2.0)
    } else {
        0.0
    }
}

/// Share of the wind acting sideways. Peaks at 90 and 270, zero at 0 and 180.
pub fn crosswind_percent(relative_angle: i32) -> f64 {
    let theta = f64::from(relative_angle.rem_euclid(360)).to_radians();
    to_percent((1.0 - (2.0 * theta).cos()) / 2.0)
}

/// Wind exposure for a single heading under the given observation.
pub fn coordinate_impact(heading: i32, wind: &WindObservation) -> CoordinateWeatherImpact {
    let angle = relative_wind_angle(heading, wind.direction_degrees);
    CoordinateWeatherImpact {
        relative_wind_direction_degrees: f64::from(angle),
        headwind_percent: headwind_percent(angle),
        tailwind_percent: tailwind_percent(angle),
        crosswind_percent: crosswind_percent(angle),
    }
}

fn to_percent(fraction: f64) -> f64 {
    (fraction * 100.0).round().clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_angle_in_range() {
        for heading in (-720..=720).step_by(37) {
            for wind in (-720..=720).step_by(41) {
                let angle = relative_wind_angle(heading, wind);
                assert!((0..360).contains(&angle), "{heading} {wind} -> {angle}");
            }
        }
    }

    #[test]
    fn test_relative_angle_negative_intermediate() {
        assert_eq!(relative_wind_angle(90, 0), 270);
        assert_eq!(relative_wind_angle(350, 10), 20);
        assert_eq!(relative_wind_angle(10, 350), 340);
        assert_eq!(relative_wind_angle(0, 360), 0);
    }

    #[test]
    fn test_wind_from_ahead() {
        assert_eq!(headwind_percent(0), 100.0);
        assert_eq!(tailwind_percent(0), 0.0);
        assert_eq!(crosswind_percent(0), 0.0);
    }

    #[test]
    fn test_wind_from_behind() {
        assert_eq!(headwind_percent(180), 0.0);
        assert_eq!(tailwind_percent(180), 100.0);
        assert_eq!(crosswind_percent(180), 0.0);
    }

    #[test]
    fn test_pure_crosswind() {
        assert_eq!(crosswind_percent(90), 100.0);
        assert_eq!(crosswind_percent(270), 100.0);
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        // (1 + cos 90°) / 2 would be 50%, but 90 and 270 belong to neither range
        assert_eq!(headwind_percent(90), 0.0);
        assert_eq!(headwind_percent(270), 0.0);
        assert_eq!(tailwind_percent(90), 0.0);
        assert_eq!(tailwind_percent(270), 0.0);

        assert_eq!(headwind_percent(89), 51.0);
        assert_eq!(headwind_percent(271), 51.0);
        assert_eq!(tailwind_percent(91), 51.0);
        assert_eq!(tailwind_percent(269), 51.0);
    }

    #[test]
    fn test_headwind_and_tailwind_disjoint() {
        for angle in 0..360 {
            let head = headwind_percent(angle);
            let tail = tailwind_percent(angle);
            assert!(head == 0.0 || tail == 0.0, "angle {angle}");
            assert!((0.0..=100.0).contains(&head));
            assert!((0.0..=100.0).contains(&tail));
            assert!((0.0..=100.0).contains(&crosswind_percent(angle)));
        }
    }

    #[test]
    fn test_rounding_not_truncation() {
        // (1 + cos 20°) / 2 = 0.9698..., truncation would give 96
        assert_eq!(headwind_percent(20), 97.0);
        // (1 + cos 30°) / 2 = 0.9330...
        assert_eq!(headwind_percent(30), 93.0);
        // (1 - cos 60°) / 2 = 0.25
        assert_eq!(crosswind_percent(30), 25.0);
    }

    #[test]
    fn test_coordinate_impact_examples() {
        let wind = WindObservation::new(5.0, 0, 290.0);
        let impact = coordinate_impact(0, &wind);
        assert_eq!(impact.relative_wind_direction_degrees, 0.0);
        assert_eq!(impact.headwind_percent, 100.0);
        assert_eq!(impact.tailwind_percent, 0.0);
        assert_eq!(impact.crosswind_percent, 0.0);

        let wind = WindObservation::new(5.0, 180, 290.0);
        let impact = coordinate_impact(0, &wind);
        assert_eq!(impact.relative_wind_direction_degrees, 180.0);
        assert_eq!(impact.headwind_percent, 0.0);
        assert_eq!(impact.tailwind_percent, 100.0);
        assert_eq!(impact.crosswind_percent, 0.0);
    }
}
