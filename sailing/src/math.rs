use std::f32::consts::{PI, TAU};

pub use bevy_math::{Vec2, Vec3};

/// Reduce an angle to (-π, π].
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    let r = (a + PI).rem_euclid(TAU) - PI;
    if r <= -PI {
        r + TAU
    } else {
        r
    }
}

/// Linear blend with `t` capped at 1 so large steps land on `b` instead of overshooting.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.min(1.0)
}

/// Shortest-path angular blend; never sweeps the long way round.
#[inline]
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    let diff = wrap_angle(b - a);
    wrap_angle(a + diff * t.min(1.0))
}

/// Per-tick exponential smoothing toward `target`.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate.clamp(0.0, 1.0)
}

#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, rate: f32) -> Vec3 {
    current.lerp(target, rate.clamp(0.0, 1.0))
}

/// Wind arrival direction seen from the boat, wrapped to (-π, π].
/// 0 = wind from astern, ±π = wind from dead ahead.
///
/// Headings increase counter-clockwise while the wind angle is a "from" bearing,
/// so the two are summed rather than subtracted.
#[inline]
pub fn relative_wind_angle(wind_from: f32, heading: f32) -> f32 {
    wrap_angle(wind_from + PI + heading)
}

/// Unit forward vector on the (x, z) water plane. Heading 0 points toward −Z.
#[inline]
pub fn forward_vector(heading: f32) -> Vec2 {
    let (s, c) = heading.sin_cos();
    Vec2::new(-s, -c)
}

/// Unit starboard vector on the (x, z) water plane.
#[inline]
pub fn right_vector(heading: f32) -> Vec2 {
    let (s, c) = heading.sin_cos();
    Vec2::new(c, -s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_stays_in_half_open_range() {
        for i in -200..=200 {
            let a = i as f32 * 0.173;
            let w = wrap_angle(a);
            assert!(w > -PI && w <= PI, "wrap_angle({a}) = {w}");
            assert!((w.sin() - a.sin()).abs() < 1e-3 && (w.cos() - a.cos()).abs() < 1e-3);
        }
        assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
        assert!((wrap_angle(PI) - PI).abs() < 1e-6);
    }

    #[test]
    fn lerp_angle_takes_short_way_across_seam() {
        let a = PI - 0.1;
        let b = -PI + 0.1;
        let mid = lerp_angle(a, b, 0.5);
        // Short path crosses ±π, long path would pass through 0.
        assert!(mid.abs() > PI - 0.01, "mid={mid}");
    }

    #[test]
    fn forward_and_right_are_orthonormal() {
        for i in 0..16 {
            let h = i as f32 * 0.4;
            let f = forward_vector(h);
            let r = right_vector(h);
            assert!((f.length() - 1.0).abs() < 1e-6);
            assert!(f.dot(r).abs() < 1e-6);
        }
        let f0 = forward_vector(0.0);
        assert!(f0.x.abs() < 1e-6 && (f0.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn relative_wind_zero_when_from_astern() {
        // Heading 0 faces −Z; wind angle π comes from astern.
        assert!(relative_wind_angle(PI, 0.0).abs() < 1e-6);
        assert!((relative_wind_angle(0.0, 0.0).abs() - PI).abs() < 1e-6);
    }
}
