use crate::foundation::error::GlidepathResult;
use crate::journey::model::{Journey, Waypoint};

/// Fluent construction of a [`Journey`].
///
/// Waypoints are appended in scroll order; `build` validates the result so a
/// malformed journey never reaches the per-frame path.
pub struct JourneyBuilder {
    waypoints: Vec<Waypoint>,
    thresholds: Vec<f64>,
}

impl JourneyBuilder {
    /// Start an empty journey.
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
            thresholds: Vec::new(),
        }
    }

    /// Append a waypoint with default display fields.
    pub fn waypoint(
        self,
        id: impl Into<String>,
        display_name: impl Into<String>,
        coords: impl Into<String>,
        base_altitude: f64,
    ) -> Self {
        self.waypoint_full(waypoint(id, display_name, coords, base_altitude))
    }

    /// Append a fully specified waypoint.
    pub fn waypoint_full(mut self, wp: Waypoint) -> Self {
        self.waypoints.push(wp);
        self
    }

    /// Override the stage boundaries (default: evenly spaced).
    pub fn thresholds(mut self, thresholds: impl Into<Vec<f64>>) -> Self {
        self.thresholds = thresholds.into();
        self
    }

    /// Validate and produce the journey.
    pub fn build(self) -> GlidepathResult<Journey> {
        let journey = Journey {
            waypoints: self.waypoints,
            thresholds: self.thresholds,
        };
        journey.validate()?;
        Ok(journey)
    }
}

impl Default for JourneyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a waypoint with neutral temperature and accent fields.
pub fn waypoint(
    id: impl Into<String>,
    display_name: impl Into<String>,
    coords: impl Into<String>,
    base_altitude: f64,
) -> Waypoint {
    Waypoint {
        id: id.into(),
        display_name: display_name.into(),
        coords: coords.into(),
        base_altitude,
        temperature: String::new(),
        accent: "#ffffff".to_string(),
    }
}

/// The built-in demonstration journey: a paraglider flight from Glen Allen
/// over Seoul to Los Angeles, with stage boundaries at `0.33` and `0.66`.
///
/// Used by the CLI `demo` subcommand and as a realistic fixture in tests.
pub fn demo_journey() -> Journey {
    Journey {
        waypoints: vec![
            Waypoint {
                id: "virginia".to_string(),
                display_name: "Glen Allen, VA".to_string(),
                coords: "37.6660° N, 77.4605° W".to_string(),
                base_altitude: 120.0,
                temperature: "22°C".to_string(),
                accent: "#58aa5a".to_string(),
            },
            Waypoint {
                id: "seoul".to_string(),
                display_name: "Seoul, KR".to_string(),
                coords: "37.5665° N, 126.9780° E".to_string(),
                base_altitude: 480.0,
                temperature: "18°C".to_string(),
                accent: "#4480ff".to_string(),
            },
            Waypoint {
                id: "la".to_string(),
                display_name: "Los Angeles, CA".to_string(),
                coords: "34.0522° N, 118.2437° W".to_string(),
                base_altitude: 320.0,
                temperature: "28°C".to_string(),
                accent: "#ff6020".to_string(),
            },
        ],
        thresholds: vec![0.33, 0.66],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/journey/dsl.rs"]
mod tests;
