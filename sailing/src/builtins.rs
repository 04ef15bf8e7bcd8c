use crate::{WaveField, WaveTrain};

/// The default rolling swell: two axis-aligned trains plus a slower diagonal cross-sea.
pub fn rolling_swell() -> WaveField {
    WaveField::new(vec![
        // Long swell running along X
        WaveTrain::new(0.30, 0.0, 0.80, 0.18),
        // Crossing swell along Z
        WaveTrain::new(0.0, 0.25, 0.60, 0.14),
        // Diagonal chop
        WaveTrain::new(0.15, 0.15, 1.10, 0.08),
    ])
}

/// A steeper, faster sea for exercising wave-resistance coupling.
pub fn choppy_sea() -> WaveField {
    WaveField::new(vec![
        WaveTrain::new(0.45, 0.0, 1.20, 0.35),
        WaveTrain::new(0.0, 0.40, 0.95, 0.28),
        WaveTrain::new(0.25, 0.25, 1.60, 0.15),
    ])
}
