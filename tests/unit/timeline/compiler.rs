use super::*;
use crate::{animation::track::Interp, foundation::core::round_pct};

fn reference() -> TrackOffsets {
    compile(&TimelineConfig::default()).unwrap()
}

fn rounded<T>(track: &Track<T>) -> Vec<f64>
where
    T: crate::animation::track::Lerp + Clone + PartialEq,
{
    track.percents().map(round_pct).collect()
}

#[test]
fn banner_and_text_share_boundaries() {
    let out = reference();
    assert_eq!(rounded(&out.banner), vec![0.0, 8.8889, 77.7778, 100.0]);
    assert_eq!(rounded(&out.text), vec![0.0, 8.8889, 77.7778, 100.0]);
}

#[test]
fn text_slide_distances_are_forwarded() {
    let cfg = TimelineConfig {
        text_in_px: 123.0,
        text_out_px: 45.0,
        ..TimelineConfig::default()
    };
    let out = compile(&cfg).unwrap();
    let stops = out.text.stops();
    assert_eq!(stops[0].value.translate, Vec2::new(-123.0, 0.0));
    assert_eq!(stops[3].value.translate, Vec2::new(0.0, -45.0));
}

#[test]
fn logo_holds_hidden_until_text_in_finishes() {
    let out = reference();
    assert_eq!(
        rounded(&out.logo),
        vec![0.0, 8.8889, 15.5556, 77.7778, 100.0]
    );
    let at_start = out.logo.sample(out.phases.logo_in_start_pct()).unwrap();
    assert_eq!(at_start.opacity, 0.0);
    let at_end = out
        .logo
        .sample(round_pct(out.phases.logo_in_end_pct()))
        .unwrap();
    assert_eq!(at_end, Motion::visible());
}

#[test]
fn stroke_reveal_is_a_step_at_logo_in_end() {
    let out = reference();
    let stops = out.stroke.stops();
    assert_eq!(stops[1].percent, round_pct(out.phases.logo_in_end_pct()));
    assert_eq!(stops[1].interp, Interp::Step);
    assert_eq!(stops[1].value.opacity, 1.0);
    assert_eq!(stops[1].value.clip, Inset::CLOSED_FROM_TOP);

    let before = out.stroke.sample(stops[1].percent - 0.001).unwrap();
    assert_eq!(before.opacity, 0.0);
}

#[test]
fn stroke_hide_completes_at_hold_end() {
    let out = reference();
    let hold_end = round_pct(out.phases.hold_end_pct());
    let at = out.stroke.sample(hold_end).unwrap();
    assert_eq!(at.opacity, 0.0);
    assert!(at.clip.is_closed());
    let revealed = out.stroke.sample(50.0).unwrap();
    assert_eq!(revealed.clip, Inset::OPEN);
}

#[test]
fn underline_steps_visible_at_reveal_start() {
    let out = reference();
    let stops = out.underline.stops();
    assert_eq!(round_pct(stops[1].percent), 10.0);
    assert_eq!(stops[1].interp, Interp::Step);
    assert_eq!(stops[1].value.scale_x, 0.0);
    assert_eq!(stops[1].value.opacity, 1.0);
    assert_eq!(round_pct(stops[2].percent), 14.4444);
    assert_eq!(stops[2].value.scale_x, 1.0);
    assert_eq!(stops.last().unwrap().value.origin_x, 100.0);
}

#[test]
fn base_variant_underline_grows_with_text() {
    let cfg = TimelineConfig {
        variant: Variant::Base,
        ..TimelineConfig::default()
    };
    let out = compile(&cfg).unwrap();
    assert_eq!(rounded(&out.underline), vec![0.0, 8.8889, 77.7778, 100.0]);
    assert!(out.tagline.is_none());
    assert!(out.hover.is_none());
}

#[test]
fn tagline_wipes_left_to_right_both_ways() {
    let out = reference();
    let tagline = out.tagline.as_ref().unwrap();
    let start = tagline.sample(0.0).unwrap();
    assert_eq!(start.clip, Inset::CLOSED_FROM_RIGHT);

    let mid_reveal = out.phases.pct(
        (out.phases.tagline_reveal.start_secs + out.phases.tagline_reveal.end_secs) / 2.0,
    );
    let half = tagline.sample(mid_reveal).unwrap();
    assert!(half.clip.right > 0.0 && half.clip.right < 100.0);
    assert_eq!(half.clip.left, 0.0);

    let gone = tagline.sample(99.0).unwrap();
    assert_eq!(gone.clip, Inset::CLOSED_FROM_LEFT);
}

#[test]
fn hover_traces_rectangle_inside_hold_window() {
    let out = reference();
    let hover = out.hover.as_ref().unwrap();
    let (start, end) = out.phases.hold_window_pct();
    let q = |f: f64| round_pct(start + (end - start) * f);

    assert_eq!(hover.sample(q(0.25)).unwrap(), Drift::at(6.0, 0.0));
    assert_eq!(hover.sample(q(0.5)).unwrap(), Drift::at(6.0, 4.0));
    assert_eq!(hover.sample(q(0.75)).unwrap(), Drift::at(0.0, 4.0));
    assert_eq!(hover.sample(round_pct(end)).unwrap(), Drift::NEUTRAL);
}

#[test]
fn disabled_hover_is_flat() {
    let cfg = TimelineConfig {
        hover_enabled: false,
        hover_x: 40.0,
        hover_y: 40.0,
        ..TimelineConfig::default()
    };
    let out = compile(&cfg).unwrap();
    let hover = out.hover.as_ref().unwrap();
    assert!(hover.is_static());
    assert_eq!(hover.sample(50.0).unwrap(), Drift::NEUTRAL);
}

#[test]
fn invalid_config_fails_before_compiling() {
    let cfg = TimelineConfig {
        in_duration: 0.0,
        sustain_duration: 0.0,
        out_duration: 0.0,
        ..TimelineConfig::default()
    };
    assert!(matches!(
        compile(&cfg),
        Err(crate::foundation::error::OverlayError::InvalidConfig(_))
    ));
}

#[test]
fn zero_length_entries_collapse_to_jumps() {
    let cfg = TimelineConfig {
        text_in_anim: 0.0,
        logo_in_anim: 0.0,
        stroke_reveal_seconds: 0.0,
        ..TimelineConfig::default()
    };
    let out = compile(&cfg).unwrap();
    assert_eq!(out.banner.sample(0.0).unwrap(), Motion::visible());
    let stroke_start = out.stroke.sample(0.0).unwrap();
    assert_eq!(stroke_start.opacity, 1.0);
    assert_eq!(stroke_start.clip, Inset::OPEN);
}

#[test]
fn zero_stroke_hide_keeps_outline_until_hold_end() {
    let cfg = TimelineConfig {
        stroke_hide_seconds: 0.0,
        ..TimelineConfig::default()
    };
    let out = compile(&cfg).unwrap();
    let hold_end = round_pct(out.phases.hold_end_pct());

    let mid = out.stroke.sample(50.0).unwrap();
    assert_eq!(mid.opacity, 1.0);
    assert_eq!(mid.clip, Inset::OPEN);
    assert_eq!(out.stroke.sample(hold_end - 0.001).unwrap().clip, Inset::OPEN);

    let gone = out.stroke.sample(hold_end).unwrap();
    assert_eq!(gone.opacity, 0.0);
    assert!(gone.clip.is_closed());

    let jumps: Vec<_> = out
        .stroke
        .stops()
        .iter()
        .filter(|s| s.percent == hold_end)
        .map(|s| s.interp)
        .collect();
    assert_eq!(jumps, vec![Interp::Linear, Interp::Step]);
}

#[test]
fn zero_tagline_hide_keeps_tagline_open_through_hold() {
    let cfg = TimelineConfig {
        tagline_hide_seconds: 0.0,
        stroke_hide_seconds: 0.0,
        ..TimelineConfig::default()
    };
    let out = compile(&cfg).unwrap();
    let tagline = out.tagline.as_ref().unwrap();
    assert_eq!(tagline.sample(50.0).unwrap().clip, Inset::OPEN);
    assert_eq!(
        tagline.sample(round_pct(out.phases.hold_end_pct())).unwrap().clip,
        Inset::CLOSED_FROM_LEFT
    );
}

#[test]
fn zero_logo_entry_holds_logo_hidden_until_text_in_ends() {
    let cfg = TimelineConfig {
        logo_in_anim: 0.0,
        ..TimelineConfig::default()
    };
    let out = compile(&cfg).unwrap();
    let start = round_pct(out.phases.logo_in_start_pct());

    assert_eq!(out.logo.sample(5.0).unwrap().opacity, 0.0);
    assert_eq!(out.logo.sample(start - 0.001).unwrap().opacity, 0.0);
    assert_eq!(out.logo.sample(start).unwrap(), Motion::visible());
}

#[test]
fn zero_underline_and_tagline_reveal_jump_open() {
    let cfg = TimelineConfig {
        underline_duration_seconds: 0.0,
        tagline_reveal_seconds: 0.0,
        ..TimelineConfig::default()
    };
    let out = compile(&cfg).unwrap();
    let start = round_pct(out.phases.pct(out.phases.underline.start_secs));

    assert_eq!(out.underline.sample(start - 0.001).unwrap().opacity, 0.0);
    let shown = out.underline.sample(start).unwrap();
    assert_eq!((shown.scale_x, shown.opacity), (1.0, 1.0));

    let tagline = out.tagline.as_ref().unwrap();
    assert_eq!(tagline.sample(start - 0.001).unwrap().clip, Inset::CLOSED_FROM_RIGHT);
    assert_eq!(tagline.sample(start).unwrap().clip, Inset::OPEN);
}

#[test]
fn near_zero_text_entry_snaps_to_loop_start() {
    let cfg = TimelineConfig {
        text_in_anim: 1e-6,
        ..TimelineConfig::default()
    };
    let out = compile(&cfg).unwrap();
    assert_eq!(rounded(&out.banner), vec![0.0, 77.7778, 100.0]);
    assert_eq!(out.banner.sample(0.0).unwrap(), Motion::visible());
}
