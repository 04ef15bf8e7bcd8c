use super::terms::*;
use super::trim::sail_trim_target;
use super::types::{BoatInputs, BoatState, BoatStepDebug, SeaConditions};
use crate::math::{approach, approach_vec3, forward_vector, relative_wind_angle, right_vector, wrap_angle};
use crate::wind::POLAR_PEAK;
use crate::BoatSpec;

/// Advance the boat one tick. See `step_boat_dbg` for the full sequence and telemetry.
pub fn step_boat(
    spec: &BoatSpec,
    sea: SeaConditions<'_>,
    inputs: BoatInputs,
    state: &mut BoatState,
    dt: f32,
    time: f32,
) {
    step_boat_dbg(spec, sea, inputs, state, dt, time, None);
}

/// Variant of `step_boat` that fills out an optional debug telemetry struct.
///
/// - Throttle drives speed toward the wind-limited ceiling `max_speed · speed_factor`;
///   anything above that ceiling is braked back down at an elevated rate.
/// - Heading increases with left input; authority scales with `|speed| / max_speed`.
/// - `time` is absolute (seconds) and only used to sample the sea surface.
/// - `dt <= 0` leaves the state untouched.
pub fn step_boat_dbg(
    spec: &BoatSpec,
    sea: SeaConditions<'_>,
    inputs: BoatInputs,
    state: &mut BoatState,
    dt: f32,
    time: f32,
    mut dbg: Option<&mut BoatStepDebug>,
) {
    if dt <= 0.0 {
        return;
    }

    // Wind-limited ceiling (heading before this tick's turn)
    let wind_factor = sea.wind.map_or(1.0, |w| w.speed_factor(state.heading));
    let effective_max = spec.max_speed * wind_factor;

    // Throttle / reverse / drag, then headwind braking on top
    let mut speed = throttle_speed(spec, &inputs, state.speed, effective_max, dt);
    let speed_after_throttle = speed;
    let brake = headwind_brake_rate(spec, speed, effective_max);
    speed = apply_headwind_brake(speed, effective_max, brake, dt);

    // Turning
    let turn_factor = speed.abs() / spec.max_speed;
    let yaw_step = spec.turn_speed * turn_factor * dt;
    if inputs.turn_left {
        state.heading += yaw_step;
    }
    if inputs.turn_right {
        state.heading -= yaw_step;
    }
    state.heading = wrap_angle(state.heading);

    // Translate along the heading
    let forward = forward_vector(state.heading);
    let right = right_vector(state.heading);
    state.x += forward.x * speed * dt;
    state.z += forward.y * speed * dt;

    // Sea under the hull
    state.water_height = sea.waves.height(state.x, state.z, time);
    let (slope_forward, slope_right) = if spec.slope_coupling {
        let g = sea.waves.slope(state.x, state.z, time);
        (g.dot(forward), g.dot(right))
    } else {
        (0.0, 0.0)
    };

    let wave_speed_delta = wave_resistance_delta(spec, slope_forward, speed, dt);
    speed += wave_speed_delta;
    state.speed = speed.clamp(spec.reverse_limit(), spec.max_speed * POLAR_PEAK);

    // Presentation
    let pose = &mut state.pose;
    let roll_target = roll_target(inputs.turn_sign(), turn_factor, slope_right);
    let pitch_target = pitch_target(spec, state.speed, slope_forward);
    pose.roll = approach(pose.roll, roll_target, spec.roll_rate);
    pose.pitch = approach(pose.pitch, pitch_target, spec.pitch_rate);
    if let Some(station) = spec.crew_station(inputs.crew_station) {
        pose.crew_target = station;
    }
    pose.crew_offset = approach_vec3(pose.crew_offset, pose.crew_target, spec.crew_rate);

    // Sail trim follows the wind; without wind the sails hold
    let rel_wind = sea.wind.map(|w| relative_wind_angle(w.angle, state.heading));
    let trim_target = rel_wind.map_or(0.0, sail_trim_target);
    if rel_wind.is_some() {
        pose.main_trim = approach(pose.main_trim, trim_target, spec.sail_rate);
        pose.jib_trim = approach(pose.jib_trim, trim_target * spec.jib_ratio, spec.sail_rate);
    }

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.time = time;
        d.inputs = inputs;
        d.wind_factor = wind_factor;
        d.effective_max = effective_max;
        d.speed_after_throttle = speed_after_throttle;
        d.headwind_brake = brake;
        d.turn_factor = turn_factor;
        d.forward = forward;
        d.right = right;
        d.slope_forward = slope_forward;
        d.slope_right = slope_right;
        d.wave_speed_delta = wave_speed_delta;
        d.roll_target = roll_target;
        d.pitch_target = pitch_target;
        d.rel_wind = rel_wind;
        d.trim_target = trim_target;
    }
}
