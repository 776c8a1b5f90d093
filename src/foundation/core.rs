/// Normalized scroll completion fraction across the journey section.
///
/// Constructed via [`Progress::clamped`], which maps any float into `[0, 1]`.
/// Scroll trackers can momentarily overshoot during rubber-banding or report
/// junk while the section is detached; telemetry must absorb that rather than
/// panic inside an animation-frame callback, so non-finite input becomes
/// `0.0` and everything else clamps.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// Start of the journey (`0.0`).
    pub const START: Progress = Progress(0.0);
    /// End of the journey (`1.0`).
    pub const END: Progress = Progress(1.0);

    /// Clamp a raw scroll fraction into `[0, 1]`; non-finite input is `0.0`.
    pub fn clamped(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self(0.0);
        }
        Self(raw.clamp(0.0, 1.0))
    }

    /// The fraction as an `f64` in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Display percentage, rounded to an integer in `0..=100`.
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl From<f64> for Progress {
    fn from(raw: f64) -> Self {
        Self::clamped(raw)
    }
}
