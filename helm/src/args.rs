use std::path::PathBuf;

use bevy_ecs::prelude::Resource;
use clap::Parser;

#[derive(Parser, Debug, Resource, Clone)]
#[command(name = "helm")]
#[command(about = "Headless frame driver for the sailing simulation", long_about = None)]
pub struct Args {
    /// TOML config file; built-in defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Seed for the wind generator (overrides the config)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Simulated seconds to run (overrides the config)
    #[arg(long)]
    pub duration: Option<f32>,
    /// Sail with no wind at all
    #[arg(long, default_value_t = false)]
    pub no_wind: bool,
}
