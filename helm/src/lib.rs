use bevy_app::{App, Update};
use bevy_ecs::prelude::*;
use sailing::{BoatInputs, FrameSnapshot, SailingSim, Wind};
use tracing::{info, warn};

mod args;
mod config;
mod script;

pub use args::Args;
pub use config::{load_config, Config};
pub use script::{default_voyage, Script, ScriptSegment};

#[derive(Resource, Debug, Clone)]
pub struct Sim(pub SailingSim);

/// Simulated display clock. Produces the raw (unclamped) frame delta the
/// simulation sees, including the occasional injected stall.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameClock {
    pub frame: u64,
    pub nominal_dt: f32,
    pub stall_every: u64,
    pub stall_dt: f32,
    /// Wall time since start, fed to the wave field.
    pub elapsed: f32,
    pub raw_dt: f32,
}

impl FrameClock {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            frame: 0,
            nominal_dt: cfg.nominal_dt(),
            stall_every: cfg.stall_every_frames,
            stall_dt: cfg.stall_ms / 1000.0,
            elapsed: 0.0,
            raw_dt: 0.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct HelmInputs(pub BoatInputs);

#[derive(Resource, Debug, Clone, Default)]
pub struct Telemetry {
    pub frames: u64,
    pub clamped_frames: u64,
    pub sim_time: f32,
    pub distance: f32,
    pub top_speed: f32,
    pub last: Option<FrameSnapshot>,
    pub log_every: u64,
}

fn advance_clock(mut clock: ResMut<FrameClock>) {
    clock.frame += 1;
    let stalled = clock.stall_every > 0 && clock.frame % clock.stall_every == 0;
    clock.raw_dt = if stalled { clock.stall_dt } else { clock.nominal_dt };
    clock.elapsed += clock.raw_dt;
}

fn apply_script(clock: Res<FrameClock>, script: Res<Script>, mut inputs: ResMut<HelmInputs>) {
    inputs.0 = script.inputs_at(clock.elapsed);
}

fn tick_sim(
    clock: Res<FrameClock>,
    inputs: Res<HelmInputs>,
    mut sim: ResMut<Sim>,
    mut telemetry: ResMut<Telemetry>,
) {
    let before = sim.0.boat.position();
    let used = sim.0.tick(inputs.0, clock.raw_dt, clock.elapsed);
    if used < clock.raw_dt {
        telemetry.clamped_frames += 1;
        warn!(frame = clock.frame, raw_dt = clock.raw_dt, used, "Long frame clamped");
    }
    telemetry.frames += 1;
    telemetry.sim_time += used;
    telemetry.distance += before.distance(sim.0.boat.position());
    telemetry.top_speed = telemetry.top_speed.max(sim.0.boat.speed.abs());
    telemetry.last = Some(sim.0.snapshot());
}

fn log_telemetry(clock: Res<FrameClock>, telemetry: Res<Telemetry>) {
    if telemetry.log_every == 0 || clock.frame % telemetry.log_every != 0 {
        return;
    }
    let Some(snap) = telemetry.last else {
        return;
    };
    info!(
        t = snap.time,
        x = snap.x,
        z = snap.z,
        heading = snap.heading_point,
        knots = snap.speed_knots,
        wind = snap.wind_point.unwrap_or("-"),
        wind_speed = snap.wind_speed.unwrap_or(0.0),
        factor = snap.speed_factor,
        roll = snap.pose.roll,
        pitch = snap.pose.pitch,
        main = snap.pose.main_trim,
        "Helm"
    );
}

pub fn build_sim(cfg: &Config) -> SailingSim {
    let wind = cfg.wind_enabled.then(|| match cfg.seed {
        Some(seed) => Wind::seeded(cfg.wind.clone(), seed),
        None => Wind::from_entropy(cfg.wind.clone()),
    });
    SailingSim::new(cfg.boat.clone(), wind, cfg.waves.clone())
}

pub fn build_sim_app(cfg: Config) -> App {
    let mut app = App::new();
    app.insert_resource(Sim(build_sim(&cfg)))
        .insert_resource(FrameClock::from_config(&cfg))
        .insert_resource(Script::new(cfg.script.clone()))
        .insert_resource(HelmInputs::default())
        .insert_resource(Telemetry { log_every: cfg.log_every_frames, ..Telemetry::default() })
        .add_systems(Update, (advance_clock, apply_script, tick_sim, log_telemetry).chain());
    app.insert_resource(cfg);
    app
}

pub fn run_frames(app: &mut App, frames: u64) {
    for _ in 0..frames {
        app.update();
    }
}
