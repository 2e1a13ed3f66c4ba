use super::*;
use crate::timeline::{
    compiler::compile,
    config::{TimelineConfig, Variant},
};

fn reference() -> TrackOffsets {
    compile(&TimelineConfig::default()).unwrap()
}

fn selectors(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|l| l.trim().split_once("% {").map(|(p, _)| p.to_string()))
        .collect()
}

#[test]
fn stroke_step_gets_a_hold_stop() {
    let mut out = String::new();
    write_keyframes(&mut out, &reference().stroke, 0);
    assert_eq!(
        out,
        "@keyframes strokeCycle {\n\
         \x20 0% { opacity: 0; clip-path: inset(100% 0 0 0); }\n\
         \x20 15.5456% { opacity: 0; clip-path: inset(100% 0 0 0); }\n\
         \x20 15.5556% { opacity: 1; clip-path: inset(100% 0 0 0); }\n\
         \x20 18.8889% { opacity: 1; clip-path: inset(0 0 0 0); }\n\
         \x20 74.4444% { opacity: 1; clip-path: inset(0 0 0 0); }\n\
         \x20 77.7778% { opacity: 0; clip-path: inset(100% 0 0 0); }\n\
         \x20 100% { opacity: 0; clip-path: inset(100% 0 0 0); }\n\
         }\n"
    );
}

#[test]
fn banner_block_matches_reference_offsets() {
    let mut out = String::new();
    write_keyframes(&mut out, &reference().banner, 4);
    assert!(out.starts_with("    @keyframes bannerCycle {\n"));
    assert!(out.contains(
        "      0% { transform: translate3d(0, -140px, 0) scale(0.985); opacity: 0; filter: blur(8px); }"
    ));
    assert!(out.contains(
        "      8.8889% { transform: translate3d(0, 0, 0) scale(1); opacity: 1; filter: blur(0); }"
    ));
    assert_eq!(selectors(&out), vec!["0", "8.8889", "77.7778", "100"]);
}

#[test]
fn underline_reveal_selectors() {
    let mut out = String::new();
    write_keyframes(&mut out, &reference().underline, 0);
    assert_eq!(
        selectors(&out),
        vec!["0", "9.99", "10", "14.4444", "77.7778", "100"]
    );
    assert!(out.contains("100% { transform: scaleX(0); opacity: 0; transform-origin: 100% center; }"));
}

#[test]
fn selectors_never_decrease() {
    let offsets = reference();
    let rules = keyframe_rules(&offsets, 0);
    for block in rules.split("@keyframes").skip(1) {
        let pcts: Vec<f64> = selectors(block)
            .iter()
            .map(|s| s.parse::<f64>().unwrap())
            .collect();
        assert!(pcts.windows(2).all(|w| w[0] <= w[1]), "{block}");
    }
}

#[test]
fn base_variant_omits_tagline_and_hover_blocks() {
    let cfg = TimelineConfig {
        variant: Variant::Base,
        ..TimelineConfig::default()
    };
    let rules = keyframe_rules(&compile(&cfg).unwrap(), 0);
    assert!(!rules.contains("taglineCycle"));
    assert!(!rules.contains("hoverCycle"));
    assert!(rules.contains("underlineCycle"));
}

#[test]
fn animation_shorthand() {
    let offsets = reference();
    assert_eq!(
        animation_decl(&offsets.stroke, offsets.total_secs()),
        "animation: strokeCycle 18s linear infinite;"
    );
    assert_eq!(
        animation_decl(&offsets.logo, offsets.total_secs()),
        "animation: logoCycle 18s cubic-bezier(0.2,0.7,0,1) infinite;"
    );
}

#[test]
fn wipe_and_drift_declarations() {
    let wipe = Wipe {
        clip: Inset::CLOSED_FROM_RIGHT,
    };
    assert_eq!(
        wipe.declarations(),
        "-webkit-clip-path: inset(0 100% 0 0); clip-path: inset(0 100% 0 0);"
    );
    assert_eq!(
        Drift::at(6.0, -2.5).declarations(),
        "transform: translate3d(6px, -2.5px, 0);"
    );
}

#[test]
fn zero_length_hide_pulls_hold_stop_back() {
    let cfg = TimelineConfig {
        stroke_hide_seconds: 0.0,
        ..TimelineConfig::default()
    };
    let mut out = String::new();
    write_keyframes(&mut out, &compile(&cfg).unwrap().stroke, 0);
    assert_eq!(
        selectors(&out),
        vec!["0", "15.5456", "15.5556", "18.8889", "77.7678", "77.7778", "100"]
    );
    assert!(out.contains("77.7678% { opacity: 1; clip-path: inset(0 0 0 0); }"));
    assert!(out.contains("77.7778% { opacity: 0; clip-path: inset(100% 0 0 0); }"));
}

#[test]
fn zero_length_logo_entry_holds_hidden_until_jump() {
    let cfg = TimelineConfig {
        logo_in_anim: 0.0,
        ..TimelineConfig::default()
    };
    let mut out = String::new();
    write_keyframes(&mut out, &compile(&cfg).unwrap().logo, 0);
    assert_eq!(
        selectors(&out),
        vec!["0", "8.8789", "8.8889", "77.7778", "100"]
    );
    assert!(out.contains("8.8789% { transform: translate3d(280px, 0, 0) scale(0.985); opacity: 0;"));
}

#[test]
fn every_selector_is_printed_once() {
    for cfg in [
        TimelineConfig {
            text_in_anim: 1e-6,
            ..TimelineConfig::default()
        },
        TimelineConfig {
            logo_in_anim: 0.0,
            stroke_reveal_seconds: 0.0,
            stroke_hide_seconds: 0.0,
            underline_duration_seconds: 0.0,
            tagline_reveal_seconds: 0.0,
            tagline_hide_seconds: 0.0,
            ..TimelineConfig::default()
        },
    ] {
        let rules = keyframe_rules(&compile(&cfg).unwrap(), 0);
        for block in rules.split("@keyframes").skip(1) {
            let sel = selectors(block);
            let mut dedup = sel.clone();
            dedup.dedup();
            assert_eq!(sel, dedup, "{block}");
        }
    }
}
