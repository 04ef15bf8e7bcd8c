//! Read-only helpers for heads-up displays.
//!
//! Compass bearings here are clockwise from north, where north is world −Z
//! (the direction a boat with heading 0 faces). Boat headings run
//! counter-clockwise, so they are negated before bucketing; the wind angle is
//! already a clockwise "from" bearing.

use std::f32::consts::{FRAC_PI_4, TAU};

const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Eight-point compass label for a clockwise bearing (rad), 45° per bucket.
pub fn compass_point(bearing: f32) -> &'static str {
    let b = bearing.rem_euclid(TAU);
    let idx = (b / FRAC_PI_4).round() as usize % POINTS.len();
    POINTS[idx]
}

/// Compass label for the direction the bow points.
pub fn heading_compass(heading: f32) -> &'static str {
    compass_point(-heading)
}

/// Compass label for where the wind comes from.
pub fn wind_compass(wind_angle: f32) -> &'static str {
    compass_point(wind_angle)
}

/// Speed shown to the helm, in knots.
pub fn speed_readout(speed: f32) -> f32 {
    speed.abs() * 0.6
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn cardinal_points() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(FRAC_PI_2), "E");
        assert_eq!(compass_point(PI), "S");
        assert_eq!(compass_point(-FRAC_PI_2), "W");
        assert_eq!(compass_point(FRAC_PI_4), "NE");
    }

    #[test]
    fn buckets_are_centred_on_points() {
        let just_under = FRAC_PI_4 * 0.5 - 0.01;
        let just_over = FRAC_PI_4 * 0.5 + 0.01;
        assert_eq!(compass_point(just_under), "N");
        assert_eq!(compass_point(just_over), "NE");
        assert_eq!(compass_point(TAU - 0.01), "N");
    }

    #[test]
    fn port_turn_swings_heading_west() {
        assert_eq!(heading_compass(0.0), "N");
        assert_eq!(heading_compass(FRAC_PI_2), "W");
        assert_eq!(heading_compass(-FRAC_PI_2), "E");
    }

    #[test]
    fn readout_ignores_direction() {
        assert!((speed_readout(-5.0) - 3.0).abs() < 1e-6);
    }
}
