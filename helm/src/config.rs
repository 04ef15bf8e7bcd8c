use std::path::Path;

use anyhow::{ensure, Context, Result};
use bevy_ecs::prelude::Resource;
use sailing::{BoatSpec, WaveField, WindSpec};
use serde::{Deserialize, Serialize};

use crate::script::{default_voyage, ScriptSegment};
use crate::Args;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct Config {
    /// Wind seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub wind_enabled: bool,
    /// Nominal frame rate of the simulated display.
    pub frame_hz: f32,
    pub duration_s: f32,
    /// Emit a telemetry line every N frames (0 disables).
    pub log_every_frames: u64,
    /// Inject a long frame every N frames to exercise the dt clamp (0 disables).
    pub stall_every_frames: u64,
    pub stall_ms: f32,
    pub boat: BoatSpec,
    pub wind: WindSpec,
    pub waves: WaveField,
    pub script: Vec<ScriptSegment>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            wind_enabled: true,
            frame_hz: 60.0,
            duration_s: 30.0,
            log_every_frames: 60,
            stall_every_frames: 0,
            stall_ms: 250.0,
            boat: BoatSpec::default(),
            wind: WindSpec::default(),
            waves: WaveField::default(),
            script: default_voyage(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.frame_hz > 0.0, "frame_hz must be positive, got {}", self.frame_hz);
        ensure!(self.duration_s >= 0.0, "duration_s must be non-negative, got {}", self.duration_s);
        ensure!(self.stall_ms >= 0.0, "stall_ms must be non-negative, got {}", self.stall_ms);
        self.boat.validate().context("invalid [boat] section")?;
        self.wind.validate().context("invalid [wind] section")?;
        Ok(())
    }

    /// Command-line flags win over the file.
    pub fn apply_overrides(&mut self, args: &Args) {
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(duration) = args.duration {
            self.duration_s = duration;
        }
        if args.no_wind {
            self.wind_enabled = false;
        }
    }

    /// Number of display frames covering `duration_s`.
    pub fn frame_count(&self) -> u64 {
        (self.duration_s * self.frame_hz).ceil().max(0.0) as u64
    }

    pub fn nominal_dt(&self) -> f32 {
        1.0 / self.frame_hz
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let cfg = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<Config>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            seed = 11
            duration_s = 5.0

            [boat]
            max_speed = 6.0
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.seed, Some(11));
        assert_eq!(cfg.boat.max_speed, 6.0);
        assert_eq!(cfg.boat.accel, BoatSpec::default().accel);
        assert_eq!(cfg.wind, WindSpec::default());
        assert_eq!(cfg.waves, WaveField::default());
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.frame_count(), 300);
    }

    #[test]
    fn script_segments_parse() {
        let cfg: Config = toml::from_str(
            r#"
            [[script]]
            until_s = 4.0
            forward = true

            [[script]]
            until_s = 8.0
            forward = true
            turn_left = true
            crew_station = 3
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.script.len(), 2);
        assert!(cfg.script[1].turn_left);
        assert_eq!(cfg.script[1].crew_station, Some(3));
        assert_eq!(cfg.script[0].crew_station, None);
    }

    #[test]
    fn bad_boat_spec_is_rejected() {
        let cfg: Config = toml::from_str("[boat]\nmax_speed = 0.0\n").expect("parse");
        let err = cfg.validate().expect_err("zero max_speed must fail");
        assert!(format!("{err:#}").contains("max_speed"), "{err:#}");
    }

    #[test]
    fn flags_override_file() {
        let mut cfg = Config::default();
        let args = Args { config: None, seed: Some(4), duration: Some(2.5), no_wind: true };
        cfg.apply_overrides(&args);
        assert_eq!(cfg.seed, Some(4));
        assert_eq!(cfg.duration_s, 2.5);
        assert!(!cfg.wind_enabled);
    }
}
