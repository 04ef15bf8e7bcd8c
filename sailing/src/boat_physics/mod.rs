mod dynamics;
mod terms;
mod trim;
mod types;

pub use dynamics::{step_boat, step_boat_dbg};
pub use trim::{sail_trim_target, CLOSE_HAULED_TRIM, REACH_BAND_END, REACH_TRIM, RUN_BAND_END, RUN_TRIM};
pub use types::{BoatInputs, BoatPose, BoatState, BoatStepDebug, SeaConditions};
