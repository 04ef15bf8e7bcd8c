//! Wind regime generator and polar speed curve.
//!
//! The wind angle is the direction the wind blows *from*. It is kept wrapped to
//! (-π, π] and is compared against boat headings only through
//! [`relative_wind_angle`], which the sail-trim code shares.

use std::f32::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::math::{lerp, lerp_angle, relative_wind_angle, wrap_angle};
use crate::WindSpec;

/// Polar band breakpoints (absolute relative wind angle, radians).
pub const DEAD_RUN_END: f32 = PI / 4.0; // 45°
pub const BROAD_REACH_END: f32 = PI / 3.0; // 60°
pub const BEAM_REACH_END: f32 = 2.0 * PI / 3.0; // 120°
pub const NO_GO_START: f32 = 5.0 * PI / 6.0; // 150°

/// Polar multipliers.
pub const DEAD_RUN_FACTOR: f32 = 1.2;
pub const REACH_FACTOR: f32 = 1.6;
pub const REACH_BUMP: f32 = 0.1;
/// Highest multiplier the polar curve can produce (beam reach, full wind).
pub const POLAR_PEAK: f32 = REACH_FACTOR + REACH_BUMP;

/// Wind speed at which the polar curve applies in full.
pub const FULL_INTENSITY_SPEED: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindState {
    /// Direction the wind comes from (rad, (-π, π]).
    pub angle: f32,
    /// Strength (arbitrary units, ≥ 0).
    pub speed: f32,
    pub target_angle: f32,
    pub target_speed: f32,
    /// Seconds since the last regime change.
    pub change_timer: f32,
    /// Seconds until the next regime change fires.
    pub change_period: f32,
}

impl WindState {
    /// A settled wind with no pending change: targets equal the current values.
    pub fn steady(angle: f32, speed: f32, change_period: f32) -> Self {
        let angle = wrap_angle(angle);
        let speed = speed.max(0.0);
        Self {
            angle,
            speed,
            target_angle: angle,
            target_speed: speed,
            change_timer: 0.0,
            change_period,
        }
    }

    /// Multiplier on the boat's top speed for a given heading.
    ///
    /// Calm air returns exactly 1 regardless of direction; the polar shape fades
    /// in linearly up to [`FULL_INTENSITY_SPEED`].
    pub fn speed_factor(&self, heading: f32) -> f32 {
        let abs_rel = relative_wind_angle(self.angle, heading).abs();
        let intensity = (self.speed / FULL_INTENSITY_SPEED).clamp(0.0, 1.0);
        lerp(1.0, polar_base(abs_rel), intensity)
    }
}

/// Raw polar curve for an absolute relative wind angle in [0, π]
/// (0 = dead run, π = head to wind).
pub fn polar_base(abs_rel: f32) -> f32 {
    if abs_rel <= DEAD_RUN_END {
        DEAD_RUN_FACTOR
    } else if abs_rel <= BROAD_REACH_END {
        let t = (abs_rel - DEAD_RUN_END) / (BROAD_REACH_END - DEAD_RUN_END);
        lerp(DEAD_RUN_FACTOR, REACH_FACTOR, t)
    } else if abs_rel <= BEAM_REACH_END {
        // Peaks at 90°
        let t = (abs_rel - BROAD_REACH_END) / (BEAM_REACH_END - BROAD_REACH_END);
        REACH_FACTOR + REACH_BUMP * (t * PI).sin()
    } else if abs_rel <= NO_GO_START {
        let t = (abs_rel - BEAM_REACH_END) / (NO_GO_START - BEAM_REACH_END);
        lerp(REACH_FACTOR, 0.0, t)
    } else {
        0.0
    }
}

/// Slowly shifting wind with its own random source.
#[derive(Debug, Clone)]
pub struct Wind {
    pub state: WindState,
    spec: WindSpec,
    rng: StdRng,
}

impl Wind {
    /// Random initial direction and speed, drawn from `rng`.
    pub fn new(spec: WindSpec, mut rng: StdRng) -> Self {
        let angle = sample(&mut rng, (0.0, TAU));
        let speed = sample(&mut rng, spec.initial_speed);
        let state = WindState::steady(angle, speed, spec.initial_period_s);
        Self { state, spec, rng }
    }

    /// Reproducible wind for replays and tests.
    pub fn seeded(spec: WindSpec, seed: u64) -> Self {
        Self::new(spec, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(spec: WindSpec) -> Self {
        Self::new(spec, StdRng::from_os_rng())
    }

    /// Start from an explicit state; `seed` drives later regime changes.
    pub fn with_state(spec: WindSpec, state: WindState, seed: u64) -> Self {
        Self { state, spec, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn spec(&self) -> &WindSpec {
        &self.spec
    }

    /// Advance the wind by `dt` seconds. Non-positive `dt` is ignored.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let s = &mut self.state;
        s.change_timer += dt;
        if s.change_timer >= s.change_period {
            s.change_timer = 0.0;
            s.change_period = sample(&mut self.rng, self.spec.change_period_s);
            let step = sample(&mut self.rng, (-1.0, 1.0)) * self.spec.max_angle_step;
            s.target_angle = wrap_angle(s.target_angle + step);
            s.target_speed = sample(&mut self.rng, self.spec.target_speed).max(0.0);
            debug!(
                target_angle = s.target_angle,
                target_speed = s.target_speed,
                next_change_s = s.change_period,
                "wind regime change"
            );
        }

        s.angle = lerp_angle(s.angle, s.target_angle, dt * self.spec.angle_rate);
        s.speed = lerp(s.speed, s.target_speed, dt * self.spec.speed_rate).max(0.0);
    }

    pub fn speed_factor(&self, heading: f32) -> f32 {
        self.state.speed_factor(heading)
    }
}

/// Uniform draw from `[min, max)`; an empty range yields `min`.
fn sample(rng: &mut StdRng, (min, max): (f32, f32)) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
