//! Glidepath turns a scroll position into flight telemetry.
//!
//! A scroll-driven journey page pins a long scroll section and maps the
//! viewer's position within it onto a staged flight: a discrete stop (a
//! [`Waypoint`]) plus a continuously varying HUD readout (a
//! [`TelemetrySnapshot`]). Glidepath is the engine for that mapping:
//!
//! 1. **Describe**: a [`Journey`] is an ordered waypoint list plus the
//!    progress thresholds separating its stages (pure data, serde JSON).
//! 2. **Validate**: [`Mapper::new`] checks the journey once, up front.
//! 3. **Resolve**: [`Mapper::resolve`] maps `progress` in `[0, 1]` to a
//!    [`TelemetrySnapshot`]; it is total, pure, and cheap enough to call on
//!    every animation-frame tick.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the same progress always yields the same
//!   snapshot; the "live" altitude wobble is a pure function of progress.
//! - **No failure in the hot path**: configuration errors surface at
//!   construction, never per frame; out-of-range progress clamps.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod journey;

pub use animation::follow::{Follower, FollowerState};
pub use animation::osc::Oscillation;
pub use eval::mapper::{Mapper, TelemetrySnapshot};
pub use foundation::core::Progress;
pub use foundation::error::{GlidepathError, GlidepathResult};
pub use journey::dsl::{JourneyBuilder, demo_journey};
pub use journey::model::{Journey, Waypoint};
