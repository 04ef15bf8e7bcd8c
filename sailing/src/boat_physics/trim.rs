use std::f32::consts::PI;

use crate::math::lerp;

/// Trim band edges (absolute relative wind, rad).
pub const RUN_BAND_END: f32 = PI / 5.0; // 36°
pub const REACH_BAND_END: f32 = PI * 0.65; // 117°

pub const RUN_TRIM: f32 = PI * 0.44;
pub const REACH_TRIM: f32 = PI * 0.20;
pub const CLOSE_HAULED_TRIM: f32 = PI * 0.05;

/// Signed main-sail target for a relative wind in (-π, π].
///
/// Eased out on a run, sheeted in close-hauled; the boom always swings to
/// leeward, i.e. opposite the sign of `rel`.
pub fn sail_trim_target(rel: f32) -> f32 {
    let side = if rel >= 0.0 { -1.0 } else { 1.0 };
    let abs_rel = rel.abs();
    let magnitude = if abs_rel < RUN_BAND_END {
        RUN_TRIM
    } else if abs_rel < REACH_BAND_END {
        let t = (abs_rel - RUN_BAND_END) / (REACH_BAND_END - RUN_BAND_END);
        lerp(RUN_TRIM, REACH_TRIM, t)
    } else {
        let t = (abs_rel - REACH_BAND_END) / (PI - REACH_BAND_END);
        lerp(REACH_TRIM, CLOSE_HAULED_TRIM, t)
    };
    side * magnitude
}
