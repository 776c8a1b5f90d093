use super::*;
use crate::journey::dsl::{JourneyBuilder, demo_journey};

fn demo_mapper() -> Mapper {
    Mapper::new(demo_journey(), Oscillation::default()).unwrap()
}

fn still_mapper() -> Mapper {
    Mapper::new(demo_journey(), Oscillation::still()).unwrap()
}

#[test]
fn empty_journey_fails_at_construction() {
    let journey = Journey {
        waypoints: vec![],
        thresholds: vec![],
    };
    assert!(Mapper::new(journey, Oscillation::default()).is_err());
}

#[test]
fn stage_boundaries_are_strict() {
    let mapper = demo_mapper();
    assert_eq!(mapper.resolve(0.33).waypoint.id, "virginia");
    assert_eq!(mapper.resolve(0.34).waypoint.id, "seoul");
    assert_eq!(mapper.resolve(0.66).waypoint.id, "seoul");
    assert_eq!(mapper.resolve(0.67).waypoint.id, "la");
}

#[test]
fn journey_endpoints_hit_first_and_last_stops() {
    let mapper = still_mapper();

    let start = mapper.resolve(0.0);
    assert_eq!(start.waypoint.display_name, "Glen Allen, VA");
    assert_eq!(start.percent, 0);
    assert_eq!(start.altitude, start.waypoint.base_altitude);

    let mid = mapper.resolve(0.5);
    assert_eq!(mid.waypoint.display_name, "Seoul, KR");
    assert_eq!(mid.percent, 50);

    let end = mapper.resolve(1.0);
    assert_eq!(end.waypoint.display_name, "Los Angeles, CA");
    assert_eq!(end.percent, 100);
}

#[test]
fn percent_matches_rounded_progress_across_grid() {
    let mapper = demo_mapper();
    for step in 0..=10 {
        let p = step as f64 / 10.0;
        assert_eq!(mapper.resolve(p).percent, (p * 100.0).round() as u8);
    }
}

#[test]
fn percent_is_monotonic_in_progress() {
    let mapper = demo_mapper();
    let mut prev = 0u8;
    for step in 0..=200 {
        let snap = mapper.resolve(step as f64 / 200.0);
        assert!(snap.percent >= prev);
        prev = snap.percent;
    }
}

#[test]
fn stage_is_monotonic_in_progress() {
    let mapper = demo_mapper();
    let mut prev = 0usize;
    for step in 0..=200 {
        let stage = mapper.stage_at(Progress::clamped(step as f64 / 200.0));
        assert!(stage >= prev);
        prev = stage;
    }
}

#[test]
fn resolution_is_deterministic() {
    let mapper = demo_mapper();
    for step in 0..=50 {
        let p = step as f64 / 50.0;
        assert_eq!(mapper.resolve(p), mapper.resolve(p));
    }
}

#[test]
fn altitude_stays_within_amplitude_of_baseline() {
    let osc = Oscillation::default();
    let mapper = Mapper::new(demo_journey(), osc).unwrap();
    for step in 0..=500 {
        let snap = mapper.resolve(step as f64 / 500.0);
        assert!((snap.altitude - snap.waypoint.base_altitude).abs() <= osc.amplitude);
    }
}

#[test]
fn out_of_range_progress_clamps() {
    let mapper = demo_mapper();
    assert_eq!(mapper.resolve(-0.5), mapper.resolve(0.0));
    assert_eq!(mapper.resolve(1.5), mapper.resolve(1.0));
    assert_eq!(mapper.resolve(f64::NAN), mapper.resolve(0.0));
}

#[test]
fn single_stop_journey_never_switches_stage() {
    let journey = JourneyBuilder::new()
        .waypoint("only", "Only Stop", "0° N, 0° E", 100.0)
        .build()
        .unwrap();
    let mapper = Mapper::with_default_oscillation(journey).unwrap();
    for step in 0..=10 {
        assert_eq!(mapper.resolve(step as f64 / 10.0).stage, 0);
    }
}

#[test]
fn even_spacing_covers_more_stages() {
    // Five stops without configured thresholds: boundaries at i/5.
    let journey = JourneyBuilder::new()
        .waypoint("s0", "Stop 0", "0° N, 0° E", 0.0)
        .waypoint("s1", "Stop 1", "1° N, 1° E", 0.0)
        .waypoint("s2", "Stop 2", "2° N, 2° E", 0.0)
        .waypoint("s3", "Stop 3", "3° N, 3° E", 0.0)
        .waypoint("s4", "Stop 4", "4° N, 4° E", 0.0)
        .build()
        .unwrap();
    let mapper = Mapper::with_default_oscillation(journey).unwrap();
    assert_eq!(mapper.thresholds().len(), 4);
    assert_eq!(mapper.resolve(0.0).stage, 0);
    assert_eq!(mapper.resolve(0.5).stage, 2);
    assert_eq!(mapper.resolve(0.81).stage, 4);
    assert_eq!(mapper.resolve(1.0).stage, 4);
}

#[test]
fn gauge_segments_scale_with_percent() {
    let mapper = still_mapper();
    assert_eq!(mapper.resolve(0.0).gauge_segments(10), 0);
    assert_eq!(mapper.resolve(0.5).gauge_segments(10), 5);
    assert_eq!(mapper.resolve(1.0).gauge_segments(10), 10);
    assert_eq!(mapper.resolve(0.26).gauge_segments(10), 3);
}

#[test]
fn snapshot_serializes_for_display_consumers() {
    let snap = still_mapper().resolve(0.5);
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["percent"], 50);
    assert_eq!(json["waypoint"]["display_name"], "Seoul, KR");
    assert_eq!(json["altitude"], 480.0);
}
