use serde::{Deserialize, Serialize};

use crate::math::{Vec2, Vec3};
use crate::{BoatSpec, WaveField, WindState};

/// Helm intent for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoatInputs {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    /// Crew station selector: 1 = bow, 2 = midship, 3 = stern. Other values are ignored.
    pub crew_station: u8,
}

impl Default for BoatInputs {
    fn default() -> Self {
        Self {
            forward: false,
            backward: false,
            turn_left: false,
            turn_right: false,
            crew_station: 2,
        }
    }
}

impl BoatInputs {
    /// +1 turning to starboard, −1 to port, 0 otherwise. Right wins when both are held.
    pub fn turn_sign(&self) -> f32 {
        if self.turn_right {
            1.0
        } else if self.turn_left {
            -1.0
        } else {
            0.0
        }
    }
}

/// Cosmetic attitude and trim, smoothed every tick toward values derived from the
/// physical state. Nothing in the simulation reads these back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoatPose {
    /// Heel about the fore-and-aft axis (rad); positive while turning to starboard.
    pub roll: f32,
    /// Bow-up positive (rad).
    pub pitch: f32,
    /// Main boom angle about the mast (rad); sign gives the side.
    pub main_trim: f32,
    pub jib_trim: f32,
    /// Current crew offset in hull-local coordinates.
    pub crew_offset: Vec3,
    /// Station the crew is moving toward.
    pub crew_target: Vec3,
}

impl BoatPose {
    pub fn at_station(offset: Vec3) -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            main_trim: 0.0,
            jib_trim: 0.0,
            crew_offset: offset,
            crew_target: offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoatState {
    /// World X on the water plane.
    pub x: f32,
    /// World Z on the water plane.
    pub z: f32,
    /// Heading (rad, (-π, π]). Increases when turning to port; 0 faces −Z.
    pub heading: f32,
    /// Signed speed along the heading (units/s); negative is astern.
    pub speed: f32,
    /// Sea height under the hull at the last tick.
    pub water_height: f32,
    pub pose: BoatPose,
}

impl BoatState {
    /// Stationary at the origin, crew midship.
    pub fn at_rest(spec: &BoatSpec) -> Self {
        Self {
            x: 0.0,
            z: 0.0,
            heading: 0.0,
            speed: 0.0,
            water_height: 0.0,
            pose: BoatPose::at_station(spec.crew_stations[1]),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }
}

/// What the boat sails through on a given tick.
#[derive(Debug, Clone, Copy)]
pub struct SeaConditions<'a> {
    pub waves: &'a WaveField,
    /// `None` sails as if becalmed: no polar effect and the sails hold their trim.
    pub wind: Option<&'a WindState>,
}

impl<'a> SeaConditions<'a> {
    pub fn new(waves: &'a WaveField, wind: Option<&'a WindState>) -> Self {
        Self { waves, wind }
    }
}

/// Per-step diagnostics filled by `step_boat_dbg`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoatStepDebug {
    pub dt: f32,
    pub time: f32,
    pub inputs: BoatInputs,
    pub wind_factor: f32,
    pub effective_max: f32,
    /// Speed after throttle/drag, before headwind braking.
    pub speed_after_throttle: f32,
    /// Braking rate applied this tick (0 when not over the ceiling).
    pub headwind_brake: f32,
    pub turn_factor: f32,
    pub forward: Vec2,
    pub right: Vec2,
    pub slope_forward: f32,
    pub slope_right: f32,
    /// Speed change from wave resistance (negative when climbing).
    pub wave_speed_delta: f32,
    pub roll_target: f32,
    pub pitch_target: f32,
    /// Relative wind used for trim; `None` when sailing without wind.
    pub rel_wind: Option<f32>,
    pub trim_target: f32,
}
