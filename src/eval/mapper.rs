use crate::{
    animation::osc::Oscillation,
    foundation::core::Progress,
    foundation::error::GlidepathResult,
    journey::model::{Journey, Waypoint},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Fully derived HUD readout for one progress sample.
pub struct TelemetrySnapshot {
    /// Zero-based stage index into the journey.
    pub stage: usize,
    /// The waypoint active at this progress.
    pub waypoint: Waypoint,
    /// Baseline altitude plus the bounded oscillation term, in meters.
    pub altitude: f64,
    /// Journey completion as a display integer in `0..=100`.
    pub percent: u8,
}

impl TelemetrySnapshot {
    /// Lit-segment count for a segmented progress gauge with `total`
    /// segments (the HUD renders 10).
    pub fn gauge_segments(&self, total: u32) -> u32 {
        ((f64::from(self.percent) / 100.0) * f64::from(total)).round() as u32
    }
}

/// Pure mapping from scroll progress to waypoint and telemetry.
///
/// Construction validates the journey once and freezes the effective stage
/// thresholds; after that [`Mapper::resolve`] is total. The driving UI
/// samples scroll position on every animation frame (60+ Hz), so resolution
/// must be cheap, deterministic and side-effect free: repeated or
/// out-of-order calls can never desynchronize displayed telemetry from the
/// actual scroll position, and concurrent callers need no synchronization.
#[derive(Clone, Debug)]
pub struct Mapper {
    journey: Journey,
    thresholds: Vec<f64>,
    osc: Oscillation,
}

impl Mapper {
    /// Validate `journey` and build a mapper with the given oscillation.
    ///
    /// This is the only fallible step; a journey that passes here can be
    /// resolved at any progress without error.
    pub fn new(journey: Journey, osc: Oscillation) -> GlidepathResult<Self> {
        journey.validate()?;
        let thresholds = journey.stage_thresholds();
        Ok(Self {
            journey,
            thresholds,
            osc,
        })
    }

    /// Validate `journey` and build a mapper with the default oscillation.
    pub fn with_default_oscillation(journey: Journey) -> GlidepathResult<Self> {
        Self::new(journey, Oscillation::default())
    }

    /// The journey this mapper resolves against.
    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    /// Effective stage thresholds frozen at construction.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Stage index for a progress value: the number of thresholds the
    /// progress has passed (strict comparison, so a threshold value itself
    /// still belongs to the earlier stage).
    pub fn stage_at(&self, progress: Progress) -> usize {
        let p = progress.get();
        self.thresholds.iter().filter(|&&t| p > t).count()
    }

    #[tracing::instrument(skip(self))]
    /// Resolve telemetry for a raw scroll fraction.
    ///
    /// Out-of-range and non-finite input clamps (see [`Progress::clamped`]);
    /// the call itself cannot fail.
    pub fn resolve(&self, raw_progress: f64) -> TelemetrySnapshot {
        self.resolve_progress(Progress::clamped(raw_progress))
    }

    /// Resolve telemetry for an already clamped progress.
    pub fn resolve_progress(&self, progress: Progress) -> TelemetrySnapshot {
        let stage = self.stage_at(progress);
        // Stage is bounded by threshold count, which validation pinned to
        // waypoints.len() - 1.
        let waypoint = self.journey.waypoints[stage].clone();
        let altitude = waypoint.base_altitude + self.osc.value(progress);

        TelemetrySnapshot {
            stage,
            waypoint,
            altitude,
            percent: progress.percent(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/mapper.rs"]
mod tests;
