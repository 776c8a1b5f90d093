use super::*;

#[test]
fn builder_preserves_waypoint_order() {
    let journey = JourneyBuilder::new()
        .waypoint("a", "First", "0° N, 0° E", 10.0)
        .waypoint("b", "Second", "1° N, 1° E", 20.0)
        .waypoint("c", "Third", "2° N, 2° E", 30.0)
        .build()
        .unwrap();
    let ids: Vec<_> = journey.waypoints.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn builder_thresholds_override_even_spacing() {
    let journey = JourneyBuilder::new()
        .waypoint("a", "First", "0° N, 0° E", 10.0)
        .waypoint("b", "Second", "1° N, 1° E", 20.0)
        .thresholds([0.8])
        .build()
        .unwrap();
    assert_eq!(journey.stage_thresholds(), vec![0.8]);
}

#[test]
fn builder_rejects_invalid_threshold_count() {
    let err = JourneyBuilder::new()
        .waypoint("a", "First", "0° N, 0° E", 10.0)
        .waypoint("b", "Second", "1° N, 1° E", 20.0)
        .thresholds([0.3, 0.6])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::GlidepathError::Validation(_)
    ));
}

#[test]
fn demo_journey_is_the_three_city_flight() {
    let journey = demo_journey();
    journey.validate().unwrap();
    assert_eq!(journey.stage_count(), 3);
    assert_eq!(journey.waypoints[0].display_name, "Glen Allen, VA");
    assert_eq!(journey.waypoints[1].display_name, "Seoul, KR");
    assert_eq!(journey.waypoints[2].display_name, "Los Angeles, CA");
    assert_eq!(journey.thresholds, vec![0.33, 0.66]);
}
