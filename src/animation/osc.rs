use crate::foundation::core::Progress;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Bounded sine term sampled at a progress value.
///
/// Gives telemetry a "live" wobble without randomness: the same progress
/// always yields the same value, so out-of-order or repeated sampling (scroll
/// direction reversal, redundant frames) can never desynchronize the display.
pub struct Oscillation {
    /// Peak deviation from `offset`.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Angular rate in radians per unit progress.
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Phase shift in radians.
    #[serde(default)]
    pub phase: f64,
    /// Constant bias added to the wave.
    #[serde(default)]
    pub offset: f64,
}

fn default_amplitude() -> f64 {
    20.0
}

fn default_rate() -> f64 {
    50.0
}

impl Default for Oscillation {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
            rate: default_rate(),
            phase: 0.0,
            offset: 0.0,
        }
    }
}

impl Oscillation {
    /// Sample the wave: `offset + amplitude * sin(rate * progress + phase)`.
    pub fn value(&self, progress: Progress) -> f64 {
        self.offset + self.amplitude * (self.rate * progress.get() + self.phase).sin()
    }

    /// An oscillation that contributes nothing (flat telemetry).
    pub fn still() -> Self {
        Self {
            amplitude: 0.0,
            rate: 0.0,
            phase: 0.0,
            offset: 0.0,
        }
    }
}
