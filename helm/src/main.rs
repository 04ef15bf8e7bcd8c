use anyhow::Result;
use clap::Parser;
use tracing::info;

use helm::{build_sim_app, load_config, run_frames, Args, Telemetry};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(args.config.as_deref())?;
    cfg.apply_overrides(&args);
    cfg.validate()?;
    info!(?cfg, "Helm config loaded");

    let frames = cfg.frame_count();
    let mut app = build_sim_app(cfg);
    app.insert_resource(args);
    run_frames(&mut app, frames);

    if let Some(t) = app.world().get_resource::<Telemetry>() {
        info!(
            frames = t.frames,
            clamped = t.clamped_frames,
            sim_time = t.sim_time,
            distance = t.distance,
            top_speed = t.top_speed,
            "Voyage finished"
        );
        if let Some(last) = t.last {
            info!(x = last.x, z = last.z, heading = last.heading_point, knots = last.speed_knots, "Final position");
        }
    }
    Ok(())
}
