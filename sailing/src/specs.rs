use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::Vec3;

/// Rejected tuning values. Simulation steps never fail; only loaded specs are checked.
#[derive(Debug, Error, PartialEq)]
pub enum SpecError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} range is empty: [{min}, {max})")]
    EmptyRange { field: &'static str, min: f32, max: f32 },
    #[error("smoothing rate {field} must lie in [0, 1], got {value}")]
    RateOutOfRange { field: &'static str, value: f32 },
}

fn positive(field: &'static str, value: f32) -> Result<(), SpecError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SpecError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), SpecError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SpecError::Negative { field, value })
    }
}

fn unit_rate(field: &'static str, value: f32) -> Result<(), SpecError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SpecError::RateOutOfRange { field, value })
    }
}

fn range(field: &'static str, r: (f32, f32)) -> Result<(), SpecError> {
    if r.0 < r.1 {
        Ok(())
    } else {
        Err(SpecError::EmptyRange { field, min: r.0, max: r.1 })
    }
}

/// Handling constants for a sailing hull plus the cosmetic smoothing rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoatSpec {
    /// Calm-water top speed (units/s).
    pub max_speed: f32,
    /// Throttle acceleration (units/s²).
    pub accel: f32,
    /// Passive drag deceleration (units/s²). Headwind braking scales this.
    pub decel: f32,
    /// Yaw rate at full speed (rad/s).
    pub turn_speed: f32,
    /// Reverse speed limit as a fraction of `max_speed`.
    pub reverse_fraction: f32,
    /// Sample the wave slope for pitch/roll and wave resistance.
    pub slope_coupling: bool,
    /// Speed lost per unit forward slope per unit speed per second.
    pub wave_resistance: f32,
    /// Local crew offsets for stations 1 (bow), 2 (midship), 3 (stern).
    pub crew_stations: [Vec3; 3],
    pub roll_rate: f32,
    pub pitch_rate: f32,
    pub crew_rate: f32,
    pub sail_rate: f32,
    /// Jib trim as a fraction of the main-sail target.
    pub jib_ratio: f32,
}

impl Default for BoatSpec {
    fn default() -> Self {
        boatspecs::dinghy_spec()
    }
}

impl BoatSpec {
    /// Lowest speed the hull may reach going astern.
    pub fn reverse_limit(&self) -> f32 {
        -self.max_speed * self.reverse_fraction
    }

    /// Offset of a crew station (1..=3); `None` for anything else.
    pub fn crew_station(&self, station: u8) -> Option<Vec3> {
        match station {
            1..=3 => Some(self.crew_stations[usize::from(station - 1)]),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        positive("max_speed", self.max_speed)?;
        non_negative("accel", self.accel)?;
        non_negative("decel", self.decel)?;
        non_negative("turn_speed", self.turn_speed)?;
        non_negative("reverse_fraction", self.reverse_fraction)?;
        non_negative("wave_resistance", self.wave_resistance)?;
        unit_rate("roll_rate", self.roll_rate)?;
        unit_rate("pitch_rate", self.pitch_rate)?;
        unit_rate("crew_rate", self.crew_rate)?;
        unit_rate("sail_rate", self.sail_rate)?;
        non_negative("jib_ratio", self.jib_ratio)?;
        Ok(())
    }
}

/// Tunables for the wind regime generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindSpec {
    /// Seconds between regime changes, drawn uniformly from `[min, max)`.
    pub change_period_s: (f32, f32),
    /// Largest target-angle step per regime change (rad, either direction).
    pub max_angle_step: f32,
    /// New target speeds are drawn from `[min, max)`.
    pub target_speed: (f32, f32),
    /// Speed at start-up is drawn from `[min, max)`.
    pub initial_speed: (f32, f32),
    /// Period used before the first regime change (s).
    pub initial_period_s: f32,
    /// Angular smoothing rate (fraction per second).
    pub angle_rate: f32,
    /// Speed smoothing rate (fraction per second).
    pub speed_rate: f32,
}

impl Default for WindSpec {
    fn default() -> Self {
        Self {
            change_period_s: (8.0, 20.0),
            // ±60°: π·0.67 spread centred on the current target
            max_angle_step: std::f32::consts::PI * 0.67 * 0.5,
            target_speed: (2.0, 10.0),
            initial_speed: (4.0, 8.0),
            initial_period_s: 10.0,
            angle_rate: 0.3,
            speed_rate: 0.2,
        }
    }
}

impl WindSpec {
    pub fn validate(&self) -> Result<(), SpecError> {
        range("change_period_s", self.change_period_s)?;
        positive("change_period_s.min", self.change_period_s.0)?;
        non_negative("max_angle_step", self.max_angle_step)?;
        range("target_speed", self.target_speed)?;
        non_negative("target_speed.min", self.target_speed.0)?;
        range("initial_speed", self.initial_speed)?;
        non_negative("initial_speed.min", self.initial_speed.0)?;
        positive("initial_period_s", self.initial_period_s)?;
        non_negative("angle_rate", self.angle_rate)?;
        non_negative("speed_rate", self.speed_rate)?;
        Ok(())
    }
}

pub mod boatspecs {
    use super::*;

    /// A small keelboat: quick to accelerate, turns well once moving.
    pub fn dinghy_spec() -> BoatSpec {
        // Deck sits ~0.55 above the waterline; the cockpit runs aft of midship.
        let deck_y = 0.55;
        BoatSpec {
            max_speed: 8.0,
            accel: 4.0,
            decel: 2.5,
            turn_speed: 1.4,
            reverse_fraction: 0.4,
            slope_coupling: true,
            wave_resistance: 1.8,
            crew_stations: [
                Vec3::new(0.0, deck_y, -1.2), // bow
                Vec3::new(0.0, deck_y, 0.4),  // midship
                Vec3::new(0.0, deck_y, 1.6),  // stern
            ],
            roll_rate: 0.12,
            pitch_rate: 0.10,
            crew_rate: 0.07,
            sail_rate: 0.04,
            jib_ratio: 0.65,
        }
    }
}
