use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{GlidepathError, GlidepathResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One stage (stop) of the journey.
pub struct Waypoint {
    /// Stable symbolic identifier (unique within a journey).
    pub id: String,
    /// Human-readable location label shown in the HUD.
    pub display_name: String,
    /// Textual geographic coordinates, e.g. `37.5665° N, 126.9780° E`.
    pub coords: String,
    /// Baseline altitude in meters; telemetry oscillates around it.
    pub base_altitude: f64,
    /// Ambient temperature label shown alongside the location.
    #[serde(default)]
    pub temperature: String,
    /// Display accent color (hex). Irrelevant to the mapping itself.
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_accent() -> String {
    "#ffffff".to_string()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete scroll journey.
///
/// A journey is a pure data model that can be:
/// - built programmatically (see [`crate::JourneyBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// It is loaded once at startup and never mutated afterwards. Resolving
/// telemetry against it is performed by [`crate::Mapper`].
pub struct Journey {
    /// Ordered stages, first to last in scroll direction.
    pub waypoints: Vec<Waypoint>,
    /// Ascending stage boundaries in `(0, 1)`, one fewer than waypoints.
    ///
    /// Empty means boundaries evenly spaced at `i / N`. A stage switch
    /// happens when progress exceeds a boundary (strict comparison), so the
    /// boundary value itself still belongs to the earlier stage.
    #[serde(default)]
    pub thresholds: Vec<f64>,
}

impl Journey {
    /// Parse a journey from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> GlidepathResult<Self> {
        let journey: Self =
            serde_json::from_str(json).map_err(|e| GlidepathError::serde(e.to_string()))?;
        journey.validate()?;
        Ok(journey)
    }

    /// Load a journey from a JSON file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> GlidepathResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read journey '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Number of stages in the journey.
    pub fn stage_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Waypoint for a stage index.
    pub fn waypoint(&self, stage: usize) -> GlidepathResult<&Waypoint> {
        self.waypoints
            .get(stage)
            .ok_or_else(|| GlidepathError::evaluation("stage is out of bounds"))
    }

    /// Effective stage boundaries: the configured thresholds, or evenly
    /// spaced `i / N` when none were configured.
    pub fn stage_thresholds(&self) -> Vec<f64> {
        if !self.thresholds.is_empty() {
            return self.thresholds.clone();
        }
        let n = self.waypoints.len();
        (1..n).map(|i| i as f64 / n as f64).collect()
    }

    /// Validate journey invariants.
    ///
    /// Called once at [`crate::Mapper`] construction so that per-frame
    /// resolution never has to fail.
    pub fn validate(&self) -> GlidepathResult<()> {
        if self.waypoints.is_empty() {
            return Err(GlidepathError::validation(
                "journey must contain at least one waypoint",
            ));
        }

        let mut seen_ids = BTreeSet::new();
        for wp in &self.waypoints {
            if wp.id.trim().is_empty() {
                return Err(GlidepathError::validation("waypoint id must be non-empty"));
            }
            if !seen_ids.insert(wp.id.as_str()) {
                return Err(GlidepathError::validation(format!(
                    "duplicate waypoint id '{}'",
                    wp.id
                )));
            }
            if wp.display_name.trim().is_empty() {
                return Err(GlidepathError::validation(format!(
                    "waypoint '{}' display_name must be non-empty",
                    wp.id
                )));
            }
            if !wp.base_altitude.is_finite() {
                return Err(GlidepathError::validation(format!(
                    "waypoint '{}' base_altitude must be finite",
                    wp.id
                )));
            }
        }

        if !self.thresholds.is_empty() {
            if self.thresholds.len() != self.waypoints.len() - 1 {
                return Err(GlidepathError::validation(format!(
                    "journey with {} waypoints needs {} thresholds, got {}",
                    self.waypoints.len(),
                    self.waypoints.len() - 1,
                    self.thresholds.len()
                )));
            }
            let mut prev = 0.0_f64;
            for (i, &t) in self.thresholds.iter().enumerate() {
                if !t.is_finite() || t <= 0.0 || t >= 1.0 {
                    return Err(GlidepathError::validation(format!(
                        "threshold {i} must be finite and inside (0, 1)"
                    )));
                }
                if i > 0 && t <= prev {
                    return Err(GlidepathError::validation(
                        "thresholds must be strictly increasing",
                    ));
                }
                prev = t;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/journey/model.rs"]
mod tests;
