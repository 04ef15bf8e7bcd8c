use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// One travelling sine component of the sea surface.
///
/// Phase is `kx·x + kz·z + omega·t`; contributes `amplitude·sin(phase)` to the height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveTrain {
    /// Spatial frequency along world X (rad per unit).
    pub kx: f32,
    /// Spatial frequency along world Z (rad per unit).
    pub kz: f32,
    /// Temporal frequency (rad/s).
    pub omega: f32,
    /// Peak height contribution (world units).
    pub amplitude: f32,
}

impl WaveTrain {
    pub const fn new(kx: f32, kz: f32, omega: f32, amplitude: f32) -> Self {
        Self { kx, kz, omega, amplitude }
    }

    #[inline]
    fn phase(&self, x: f32, z: f32, t: f32) -> f32 {
        self.kx * x + self.kz * z + self.omega * t
    }
}

/// Stateless analytic sea surface: a sum of travelling sine trains.
///
/// Height and slope are both derived from the same `trains`, so the slope is
/// always the exact gradient of the height whatever components are configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveField {
    pub trains: Vec<WaveTrain>,
}

impl Default for WaveField {
    fn default() -> Self {
        crate::builtins::rolling_swell()
    }
}

impl WaveField {
    pub fn new(trains: Vec<WaveTrain>) -> Self {
        Self { trains }
    }

    /// A flat, motionless sea.
    pub fn flat() -> Self {
        Self { trains: Vec::new() }
    }

    /// Surface height at `(x, z)` and time `t`.
    pub fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        self.trains
            .iter()
            .map(|w| w.phase(x, z, t).sin() * w.amplitude)
            .sum()
    }

    /// Surface gradient `(∂h/∂x, ∂h/∂z)`; `.x` holds the X slope, `.y` the Z slope.
    pub fn slope(&self, x: f32, z: f32, t: f32) -> Vec2 {
        self.trains.iter().fold(Vec2::ZERO, |acc, w| {
            let c = w.phase(x, z, t).cos() * w.amplitude;
            acc + Vec2::new(w.kx * c, w.kz * c)
        })
    }
}
