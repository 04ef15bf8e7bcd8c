use bevy_ecs::prelude::Resource;
use sailing::BoatInputs;
use serde::{Deserialize, Serialize};

/// Controls held from the end of the previous segment until `until_s`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub until_s: f32,
    #[serde(default)]
    pub forward: bool,
    #[serde(default)]
    pub backward: bool,
    #[serde(default)]
    pub turn_left: bool,
    #[serde(default)]
    pub turn_right: bool,
    /// Crew station to call for; `None` keeps the previous call.
    #[serde(default)]
    pub crew_station: Option<u8>,
}

impl ScriptSegment {
    const fn hold(until_s: f32) -> Self {
        Self { until_s, forward: false, backward: false, turn_left: false, turn_right: false, crew_station: None }
    }
}

/// A short voyage: beat out, tack, reach, run home, drift.
pub fn default_voyage() -> Vec<ScriptSegment> {
    vec![
        ScriptSegment { forward: true, ..ScriptSegment::hold(6.0) },
        ScriptSegment { forward: true, turn_left: true, crew_station: Some(1), ..ScriptSegment::hold(9.0) },
        ScriptSegment { forward: true, crew_station: Some(2), ..ScriptSegment::hold(16.0) },
        ScriptSegment { forward: true, turn_right: true, crew_station: Some(3), ..ScriptSegment::hold(20.0) },
        ScriptSegment { forward: true, ..ScriptSegment::hold(26.0) },
        ScriptSegment { backward: true, crew_station: Some(2), ..ScriptSegment::hold(28.0) },
        ScriptSegment::hold(f32::INFINITY),
    ]
}

/// Timed helm inputs replayed by the driver in place of a keyboard.
#[derive(Debug, Clone, Default, Resource)]
pub struct Script {
    segments: Vec<ScriptSegment>,
}

impl Script {
    pub fn new(mut segments: Vec<ScriptSegment>) -> Self {
        segments.sort_by(|a, b| a.until_s.total_cmp(&b.until_s));
        Self { segments }
    }

    pub fn segments(&self) -> &[ScriptSegment] {
        &self.segments
    }

    /// Inputs at time `t`. The crew call is the most recent one made at or
    /// before the active segment; with none yet the boat's default stands.
    /// Past the last segment every control is released.
    pub fn inputs_at(&self, t: f32) -> BoatInputs {
        let mut inputs = BoatInputs::default();
        for seg in &self.segments {
            if let Some(station) = seg.crew_station {
                inputs.crew_station = station;
            }
            if t < seg.until_s {
                inputs.forward = seg.forward;
                inputs.backward = seg.backward;
                inputs.turn_left = seg.turn_left;
                inputs.turn_right = seg.turn_right;
                return inputs;
            }
        }
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_looked_up_by_time() {
        let script = Script::new(default_voyage());
        let start = script.inputs_at(0.0);
        assert!(start.forward && !start.turn_left);
        assert_eq!(start.crew_station, BoatInputs::default().crew_station);

        let tack = script.inputs_at(7.0);
        assert!(tack.forward && tack.turn_left);
        assert_eq!(tack.crew_station, 1);

        let reverse = script.inputs_at(27.0);
        assert!(reverse.backward && !reverse.forward);
    }

    #[test]
    fn crew_call_carries_forward() {
        let script = Script::new(vec![
            ScriptSegment { crew_station: Some(3), ..ScriptSegment::hold(1.0) },
            ScriptSegment { forward: true, ..ScriptSegment::hold(2.0) },
        ]);
        let later = script.inputs_at(1.5);
        assert!(later.forward);
        assert_eq!(later.crew_station, 3);
    }

    #[test]
    fn past_the_end_releases_controls() {
        let script = Script::new(vec![ScriptSegment { forward: true, crew_station: Some(1), ..ScriptSegment::hold(1.0) }]);
        let after = script.inputs_at(5.0);
        assert!(!after.forward && !after.backward && !after.turn_left && !after.turn_right);
        assert_eq!(after.crew_station, 1);
        assert_eq!(Script::default().inputs_at(0.0), BoatInputs::default());
    }
}
