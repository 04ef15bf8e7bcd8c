//! Sailboat simulation core: analytic sea surface, shifting wind, boat kinematics.
//!
//! This crate has no rendering or I/O. A host calls [`SailingSim::tick`] (or the
//! individual `Wind::update` / [`step_boat`] steps) once per frame with an
//! explicit `(dt, time)` pair and reads back plain state records.

pub mod math;
pub use math::{Vec2, Vec3};

mod specs;
pub use specs::boatspecs;
pub use specs::{BoatSpec, SpecError, WindSpec};

pub mod builtins;

mod waves;
pub use waves::{WaveField, WaveTrain};

pub mod wind;
pub use wind::{polar_base, Wind, WindState, POLAR_PEAK};

pub mod boat_physics;
pub use boat_physics::{
    sail_trim_target, step_boat, step_boat_dbg, BoatInputs, BoatPose, BoatState, BoatStepDebug,
    SeaConditions,
};

pub mod hud;

mod sim;
pub use sim::{clamp_frame_dt, FrameSnapshot, SailingSim, MAX_FRAME_DT};
