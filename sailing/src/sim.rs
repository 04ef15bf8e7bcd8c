use crate::hud::{heading_compass, speed_readout, wind_compass};
use crate::{step_boat, BoatInputs, BoatPose, BoatSpec, BoatState, SeaConditions, WaveField, Wind};

/// Longest step a single frame may advance the simulation (s).
/// Slow frames and resumed tabs are clamped to this instead of jumping.
pub const MAX_FRAME_DT: f32 = 0.05;

/// Clamp a raw frame delta to `[0, MAX_FRAME_DT]`; non-finite deltas become 0.
pub fn clamp_frame_dt(raw_dt: f32) -> f32 {
    if raw_dt.is_finite() && raw_dt > 0.0 {
        raw_dt.min(MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// The whole simulation for one boat: sea, optional wind, hull.
#[derive(Debug, Clone)]
pub struct SailingSim {
    pub waves: WaveField,
    pub wind: Option<Wind>,
    pub spec: BoatSpec,
    pub boat: BoatState,
    time: f32,
}

impl SailingSim {
    pub fn new(spec: BoatSpec, wind: Option<Wind>, waves: WaveField) -> Self {
        let boat = BoatState::at_rest(&spec);
        Self { waves, wind, spec, boat, time: 0.0 }
    }

    /// A boat on a windless sea: full calm-water speed in every direction.
    pub fn without_wind(spec: BoatSpec, waves: WaveField) -> Self {
        Self::new(spec, None, waves)
    }

    /// Absolute time passed to the most recent tick.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// One frame: wind first, then the boat. Returns the clamped dt actually applied.
    pub fn tick(&mut self, inputs: BoatInputs, raw_dt: f32, time: f32) -> f32 {
        let dt = clamp_frame_dt(raw_dt);
        if dt <= 0.0 {
            return 0.0;
        }
        self.time = time;
        if let Some(wind) = self.wind.as_mut() {
            wind.update(dt);
        }
        let sea = SeaConditions::new(&self.waves, self.wind.as_ref().map(|w| &w.state));
        step_boat(&self.spec, sea, inputs, &mut self.boat, dt, time);
        dt
    }

    /// Read-only view for renderers and instruments.
    pub fn snapshot(&self) -> FrameSnapshot {
        let wind = self.wind.as_ref().map(|w| w.state);
        FrameSnapshot {
            time: self.time,
            x: self.boat.x,
            z: self.boat.z,
            heading: self.boat.heading,
            speed: self.boat.speed,
            water_height: self.boat.water_height,
            pose: self.boat.pose,
            wind_angle: wind.map(|w| w.angle),
            wind_speed: wind.map(|w| w.speed),
            speed_factor: wind.map_or(1.0, |w| w.speed_factor(self.boat.heading)),
            heading_point: heading_compass(self.boat.heading),
            wind_point: wind.map(|w| wind_compass(w.angle)),
            speed_knots: speed_readout(self.boat.speed),
        }
    }
}

/// Everything an external collaborator may read after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub time: f32,
    pub x: f32,
    pub z: f32,
    pub heading: f32,
    pub speed: f32,
    pub water_height: f32,
    pub pose: BoatPose,
    pub wind_angle: Option<f32>,
    pub wind_speed: Option<f32>,
    /// Current polar multiplier on top speed (1 without wind).
    pub speed_factor: f32,
    pub heading_point: &'static str,
    pub wind_point: Option<&'static str>,
    pub speed_knots: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WindSpec;

    #[test]
    fn frame_dt_is_clamped() {
        assert_eq!(clamp_frame_dt(0.016), 0.016);
        assert_eq!(clamp_frame_dt(2.0), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(-1.0), 0.0);
        assert_eq!(clamp_frame_dt(f32::NAN), 0.0);
        assert_eq!(clamp_frame_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn stalled_frame_advances_at_most_the_cap() {
        let mut sim = SailingSim::without_wind(BoatSpec::default(), WaveField::flat());
        let fwd = BoatInputs { forward: true, ..BoatInputs::default() };
        let used = sim.tick(fwd, 3.0, 3.0);
        assert_eq!(used, MAX_FRAME_DT);
        assert!((sim.boat.speed - sim.spec.accel * MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn zero_dt_frame_changes_nothing() {
        let mut sim = SailingSim::new(
            BoatSpec::default(),
            Some(Wind::seeded(WindSpec::default(), 3)),
            WaveField::default(),
        );
        let wind_before = sim.wind.as_ref().map(|w| w.state);
        let boat_before = sim.boat;
        assert_eq!(sim.tick(BoatInputs::default(), 0.0, 5.0), 0.0);
        assert_eq!(sim.wind.as_ref().map(|w| w.state), wind_before);
        assert_eq!(sim.boat, boat_before);
    }

    #[test]
    fn snapshot_reports_calm_without_wind() {
        let sim = SailingSim::without_wind(BoatSpec::default(), WaveField::flat());
        let snap = sim.snapshot();
        assert_eq!(snap.speed_factor, 1.0);
        assert!(snap.wind_angle.is_none() && snap.wind_point.is_none());
        assert_eq!(snap.heading_point, "N");
    }
}
