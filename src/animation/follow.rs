use kurbo::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Output of one follower tick: where the glider is and how it banks.
pub struct FollowerState {
    /// Current smoothed position.
    pub pos: Vec2,
    /// Bank angle in degrees, proportional to remaining horizontal error.
    pub tilt_deg: f64,
}

#[derive(Clone, Copy, Debug)]
/// Frame-rate-independent pursuit filter for the glider sprite.
///
/// The sprite chases a target (typically the pointer) with exponential
/// smoothing. `delta_ratio` is elapsed frame time relative to a nominal
/// 60 fps frame, so the per-tick gain `1 - (1 - smoothing)^delta_ratio`
/// converges identically on fast and slow displays.
///
/// This is the one stateful piece of the crate; it never feeds back into the
/// pure progress mapping.
pub struct Follower {
    pos: Vec2,
    smoothing: f64,
    tilt_gain: f64,
}

impl Follower {
    /// Smoothing factor of the original glider (per nominal frame).
    pub const DEFAULT_SMOOTHING: f64 = 0.08;
    /// Bank degrees per pixel of horizontal error.
    pub const DEFAULT_TILT_GAIN: f64 = 0.2;

    /// Start a follower at `pos` with the default tuning.
    pub fn new(pos: Vec2) -> Self {
        Self::with_tuning(pos, Self::DEFAULT_SMOOTHING, Self::DEFAULT_TILT_GAIN)
    }

    /// Start a follower with explicit smoothing and tilt gain.
    ///
    /// `smoothing` is clamped to `[0, 1]`; `0` never moves, `1` snaps to the
    /// target in a single nominal frame.
    pub fn with_tuning(pos: Vec2, smoothing: f64, tilt_gain: f64) -> Self {
        Self {
            pos,
            smoothing: smoothing.clamp(0.0, 1.0),
            tilt_gain,
        }
    }

    /// Current smoothed position.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Advance one tick toward `target` and report the new state.
    pub fn advance(&mut self, target: Vec2, delta_ratio: f64) -> FollowerState {
        let dt = 1.0 - (1.0 - self.smoothing).powf(delta_ratio.max(0.0));
        self.pos += (target - self.pos) * dt;
        FollowerState {
            pos: self.pos,
            tilt_deg: (target.x - self.pos.x) * self.tilt_gain,
        }
    }
}
