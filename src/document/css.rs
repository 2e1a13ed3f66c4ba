use std::fmt::Write as _;

use crate::{
    animation::{
        ease::Ease,
        track::{Interp, Lerp, Track},
    },
    foundation::core::{format_num, format_pct, round_pct},
    timeline::{
        compiler::TrackOffsets,
        states::{Drift, Inset, Motion, Stroke, Underline, Wipe},
    },
};

/// Width of the hold stop emitted just before a step, in percentage points.
///
/// CSS keyframes only interpolate linearly between stops, so a step is encoded as the previous
/// value repeated this far before the jump.
pub const STEP_EPSILON_PCT: f64 = 0.01;

/// A visual state that can be written as the body of a keyframe selector.
pub trait CssState {
    /// Declarations, without braces (`opacity: 1; filter: blur(0);`).
    fn declarations(&self) -> String;
}

fn px(v: f64) -> String {
    if round_pct(v) == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", format_num(v))
    }
}

fn pct(v: f64) -> String {
    if round_pct(v) == 0.0 {
        "0".to_string()
    } else {
        format!("{}%", format_num(v))
    }
}

fn inset(clip: &Inset) -> String {
    format!(
        "inset({} {} {} {})",
        pct(clip.top),
        pct(clip.right),
        pct(clip.bottom),
        pct(clip.left)
    )
}

impl CssState for Motion {
    fn declarations(&self) -> String {
        format!(
            "transform: translate3d({}, {}, 0) scale({}); opacity: {}; filter: blur({});",
            px(self.translate.x),
            px(self.translate.y),
            format_num(self.scale),
            format_num(self.opacity),
            px(self.blur_px)
        )
    }
}

impl CssState for Underline {
    fn declarations(&self) -> String {
        format!(
            "transform: scaleX({}); opacity: {}; transform-origin: {} center;",
            format_num(self.scale_x),
            format_num(self.opacity),
            pct(self.origin_x)
        )
    }
}

impl CssState for Stroke {
    fn declarations(&self) -> String {
        format!(
            "opacity: {}; clip-path: {};",
            format_num(self.opacity),
            inset(&self.clip)
        )
    }
}

impl CssState for Wipe {
    fn declarations(&self) -> String {
        let clip = inset(&self.clip);
        format!("-webkit-clip-path: {clip}; clip-path: {clip};")
    }
}

impl CssState for Drift {
    fn declarations(&self) -> String {
        format!(
            "transform: translate3d({}, {}, 0);",
            px(self.offset.x),
            px(self.offset.y)
        )
    }
}

/// Write one `@keyframes` block for `track`, indented by `indent` spaces.
///
/// Step stops are expanded into a hold stop [`STEP_EPSILON_PCT`] before the jump. When the jump
/// shares its percent with the held stop, the held selector is moved back by the epsilon instead.
/// Each selector is printed once; if two states land on the same one, the later state wins.
pub fn write_keyframes<T>(out: &mut String, track: &Track<T>, indent: usize)
where
    T: CssState + Lerp + Clone + PartialEq,
{
    let pad = " ".repeat(indent);
    let _ = writeln!(out, "{pad}@keyframes {} {{", track.name);

    for (at, value) in selectors(track) {
        write_stop(out, &pad, at, value);
    }

    let _ = writeln!(out, "{pad}}}");
}

fn selectors<T>(track: &Track<T>) -> Vec<(f64, &T)>
where
    T: Lerp + Clone + PartialEq,
{
    let mut sel: Vec<(f64, &T)> = Vec::with_capacity(track.stops().len() + 2);
    for stop in track.stops() {
        let at = round_pct(stop.percent);

        if stop.interp == Interp::Step
            && let Some(&(last_at, last_value)) = sel.last()
            && *last_value != stop.value
        {
            let hold_at = round_pct(at - STEP_EPSILON_PCT);
            if last_at < at {
                if hold_at > last_at {
                    sel.push((hold_at, last_value));
                }
            } else if sel.len() >= 2 {
                let before = sel[sel.len() - 2].0;
                if hold_at > before {
                    let n = sel.len() - 1;
                    sel[n].0 = hold_at;
                } else {
                    sel.pop();
                }
            }
        }

        if let Some(&(last_at, last_value)) = sel.last()
            && last_at == at
        {
            if *last_value == stop.value {
                continue;
            }
            sel.pop();
        }
        sel.push((at, &stop.value));
    }
    sel
}

fn write_stop<T: CssState>(out: &mut String, pad: &str, at: f64, value: &T) {
    let _ = writeln!(
        out,
        "{pad}  {}% {{ {} }}",
        format_pct(at),
        value.declarations()
    );
}

/// `animation` shorthand binding an element to `track` for a loop of `total_secs`.
pub fn animation_decl<T>(track: &Track<T>, total_secs: f64) -> String {
    animation_for(&track.name, total_secs, track.ease)
}

fn animation_for(name: &str, total_secs: f64, ease: Ease) -> String {
    format!(
        "animation: {name} {}s {} infinite;",
        format_num(total_secs),
        ease.css()
    )
}

/// Every `@keyframes` block for a compiled timeline, in document order.
pub fn keyframe_rules(offsets: &TrackOffsets, indent: usize) -> String {
    let mut out = String::new();
    write_keyframes(&mut out, &offsets.banner, indent);
    if let Some(hover) = &offsets.hover {
        write_keyframes(&mut out, hover, indent);
    }
    write_keyframes(&mut out, &offsets.text, indent);
    write_keyframes(&mut out, &offsets.underline, indent);
    if let Some(tagline) = &offsets.tagline {
        write_keyframes(&mut out, tagline, indent);
    }
    write_keyframes(&mut out, &offsets.logo, indent);
    write_keyframes(&mut out, &offsets.stroke, indent);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/document/css.rs"]
mod tests;
