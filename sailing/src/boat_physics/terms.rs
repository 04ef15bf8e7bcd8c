use crate::BoatSpec;

use super::types::BoatInputs;

// ----- Throttle -----

/// Speed after one tick of throttle, reverse, or passive drag.
pub(super) fn throttle_speed(
    spec: &BoatSpec,
    inputs: &BoatInputs,
    speed: f32,
    effective_max: f32,
    dt: f32,
) -> f32 {
    if inputs.forward && effective_max > 0.0 {
        // Already over the ceiling: leave it to headwind braking.
        if speed < effective_max {
            (speed + spec.accel * dt).min(effective_max)
        } else {
            speed
        }
    } else if inputs.backward {
        (speed - spec.accel * dt).max(spec.reverse_limit())
    } else {
        drag_speed(spec, speed, dt)
    }
}

/// Coast toward rest at `decel`; never crosses zero.
pub(super) fn drag_speed(spec: &BoatSpec, speed: f32, dt: f32) -> f32 {
    if speed > 0.0 {
        (speed - spec.decel * dt).max(0.0)
    } else {
        (speed + spec.decel * dt).min(0.0)
    }
}

// ----- Headwind braking -----

/// Brake rate when the hull is faster than the wind allows; 0 otherwise.
pub(super) fn headwind_brake_rate(spec: &BoatSpec, speed: f32, effective_max: f32) -> f32 {
    if speed <= effective_max {
        0.0
    } else if effective_max <= 0.0 {
        // Head to wind: the sails are aback.
        spec.decel * 2.5
    } else {
        spec.decel * 1.2
    }
}

pub(super) fn apply_headwind_brake(speed: f32, effective_max: f32, rate: f32, dt: f32) -> f32 {
    if rate > 0.0 {
        (speed - rate * dt).max(effective_max)
    } else {
        speed
    }
}

// ----- Waves -----

/// Speed change from climbing (positive slope) or surfing down (negative slope) a wave face.
pub(super) fn wave_resistance_delta(spec: &BoatSpec, slope_forward: f32, speed: f32, dt: f32) -> f32 {
    -slope_forward * speed * spec.wave_resistance * dt
}

// ----- Presentation targets -----

pub(super) fn roll_target(turn_sign: f32, turn_factor: f32, slope_right: f32) -> f32 {
    turn_sign * 0.08 * turn_factor - slope_right * 1.4
}

pub(super) fn pitch_target(spec: &BoatSpec, speed: f32, slope_forward: f32) -> f32 {
    -(speed / spec.max_speed) * 0.06 + slope_forward * 1.2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_never_overshoots_zero() {
        let spec = BoatSpec::default();
        assert_eq!(drag_speed(&spec, 0.1, 1.0), 0.0);
        assert_eq!(drag_speed(&spec, -0.1, 1.0), 0.0);
        assert_eq!(drag_speed(&spec, 0.0, 1.0), 0.0);
    }

    #[test]
    fn forward_into_dead_headwind_coasts() {
        let spec = BoatSpec::default();
        let inputs = BoatInputs { forward: true, ..BoatInputs::default() };
        let s = throttle_speed(&spec, &inputs, 4.0, 0.0, 0.1);
        assert!((s - (4.0 - spec.decel * 0.1)).abs() < 1e-6, "s={s}");
    }

    #[test]
    fn brake_rates_by_ceiling() {
        let spec = BoatSpec::default();
        assert_eq!(headwind_brake_rate(&spec, 5.0, 6.0), 0.0);
        assert_eq!(headwind_brake_rate(&spec, 5.0, 0.0), spec.decel * 2.5);
        assert_eq!(headwind_brake_rate(&spec, 5.0, 3.0), spec.decel * 1.2);
        // Never brakes below the ceiling
        assert_eq!(apply_headwind_brake(3.1, 3.0, 10.0, 1.0), 3.0);
    }
}
