use super::*;

fn ramp() -> Track<f64> {
    Track::new("ramp", Ease::Linear, 0.0)
        .ramp_to(50.0, 10.0)
        .ramp_to(100.0, 10.0)
}

#[test]
fn linear_segments_interpolate() {
    let track = ramp();
    assert_eq!(track.sample(25.0).unwrap(), 5.0);
    assert_eq!(track.sample(75.0).unwrap(), 10.0);
    assert_eq!(track.sample(100.0).unwrap(), 10.0);
}

#[test]
fn step_holds_previous_value_until_its_percent() {
    let track = Track::new("step", Ease::Linear, 0.0)
        .step_to(40.0, 1.0)
        .ramp_to(100.0, 1.0);
    assert_eq!(track.sample(39.99).unwrap(), 0.0);
    assert_eq!(track.sample(40.0).unwrap(), 1.0);
    assert_eq!(track.stops()[1].interp, Interp::Step);
}

#[test]
fn step_at_previous_percent_replaces_value() {
    let track = Track::new("merge", Ease::Linear, 0.0)
        .step_to(0.0, 1.0)
        .ramp_to(100.0, 1.0);
    assert_eq!(track.stops().len(), 2);
    assert_eq!(track.sample(0.0).unwrap(), 1.0);
}

#[test]
fn backwards_stops_are_clamped_forward() {
    let track = Track::new("clamp", Ease::Linear, 0.0)
        .ramp_to(60.0, 1.0)
        .ramp_to(30.0, 2.0)
        .ramp_to(140.0, 3.0);
    let pcts: Vec<f64> = track.percents().collect();
    assert_eq!(pcts, vec![0.0, 60.0, 100.0]);
    assert_eq!(track.sample(60.0).unwrap(), 2.0);
    track.validate().unwrap();
}

#[test]
fn hold_until_repeats_last_value() {
    let track = Track::new("hold", Ease::Linear, 3.0)
        .hold_until(20.0)
        .ramp_to(100.0, 0.0);
    assert_eq!(track.sample(10.0).unwrap(), 3.0);
    assert!(!track.is_static());
}

#[test]
fn validate_requires_full_span() {
    let track = Track::new("short", Ease::Linear, 0.0).ramp_to(50.0, 1.0);
    assert!(track.validate().is_err());
}

#[test]
fn vec2_lerp() {
    let v = <Vec2 as Lerp>::lerp(&Vec2::new(0.0, 0.0), &Vec2::new(4.0, -8.0), 0.25);
    assert_eq!(v, Vec2::new(1.0, -2.0));
}

#[test]
fn zero_length_ramp_after_hold_becomes_jump() {
    let track = Track::new("jump", Ease::Linear, 0.0)
        .hold_until(50.0)
        .ramp_to(50.0, 1.0)
        .ramp_to(100.0, 1.0);
    let pcts: Vec<f64> = track.percents().collect();
    assert_eq!(pcts, vec![0.0, 50.0, 50.0, 100.0]);
    assert_eq!(track.stops()[2].interp, Interp::Step);

    assert_eq!(track.sample(25.0).unwrap(), 0.0);
    assert_eq!(track.sample(49.99).unwrap(), 0.0);
    assert_eq!(track.sample(50.0).unwrap(), 1.0);
    track.validate().unwrap();
}

#[test]
fn repeated_jump_at_same_percent_keeps_latest_value() {
    let track = Track::new("jump", Ease::Linear, 0.0)
        .hold_until(30.0)
        .step_to(30.0, 1.0)
        .ramp_to(30.0, 2.0)
        .ramp_to(100.0, 2.0);
    assert_eq!(track.stops().len(), 4);
    assert_eq!(track.sample(29.0).unwrap(), 0.0);
    assert_eq!(track.sample(30.0).unwrap(), 2.0);
}

#[test]
fn percents_snap_to_selector_precision() {
    let track = Track::new("snap", Ease::Linear, 0.0)
        .ramp_to(12.345_678, 1.0)
        .ramp_to(0.000_01 + 100.0, 2.0);
    let pcts: Vec<f64> = track.percents().collect();
    assert_eq!(pcts, vec![0.0, 12.3457, 100.0]);

    // Rounds onto 0%, so it replaces the initial value instead of adding a selector.
    let start = Track::new("snap", Ease::Linear, 0.0)
        .ramp_to(0.000_001, 1.0)
        .ramp_to(100.0, 1.0);
    assert_eq!(start.stops().len(), 2);
    assert_eq!(start.sample(0.0).unwrap(), 1.0);
}
