use crate::{
    animation::{ease::Ease, track::Track},
    foundation::{
        core::{FULL_CYCLE_PCT, Vec2},
        error::OverlayResult,
    },
    timeline::{
        config::{TimelineConfig, Variant},
        phases::PhaseBoundaries,
        states::{Drift, Inset, Motion, Stroke, Underline, Wipe},
    },
};

const ENTRY_BLUR_PX: f64 = 10.0;
const EXIT_BLUR_PX: f64 = 8.0;
const HIDDEN_SCALE: f64 = 0.985;

/// Keyframe stops for every animated element of one overlay loop.
///
/// Produced by [`compile`]; every track spans `0..=100` percent of the same loop.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TrackOffsets {
    /// Variant the tracks were compiled for.
    pub variant: Variant,
    /// Boundaries every track is keyed on.
    pub phases: PhaseBoundaries,
    /// Banner background slide and fade.
    pub banner: Track<Motion>,
    /// Brand text block.
    pub text: Track<Motion>,
    /// Logo image.
    pub logo: Track<Motion>,
    /// Accent underline under the brand text.
    pub underline: Track<Underline>,
    /// Outline reveal around the logo.
    pub stroke: Track<Stroke>,
    /// `None` for [`Variant::Base`], where the tagline is not animated.
    pub tagline: Option<Track<Wipe>>,
    /// `None` for [`Variant::Base`].
    pub hover: Option<Track<Drift>>,
}

impl TrackOffsets {
    /// Loop length in seconds.
    pub fn total_secs(&self) -> f64 {
        self.phases.total_secs
    }

    /// Check the loop invariants of every track.
    pub fn validate(&self) -> OverlayResult<()> {
        self.banner.validate()?;
        self.text.validate()?;
        self.logo.validate()?;
        self.underline.validate()?;
        self.stroke.validate()?;
        if let Some(t) = &self.tagline {
            t.validate()?;
        }
        if let Some(t) = &self.hover {
            t.validate()?;
        }
        Ok(())
    }
}

/// Compile a config into per-track keyframe stops.
///
/// Pure and deterministic. Fails only when the config itself is rejected by
/// [`TimelineConfig::validate`]; every other out-of-range value is clamped.
#[tracing::instrument(skip(cfg), fields(variant = ?cfg.variant))]
pub fn compile(cfg: &TimelineConfig) -> OverlayResult<TrackOffsets> {
    cfg.validate()?;
    let phases = PhaseBoundaries::from_config(cfg);

    let offsets = TrackOffsets {
        variant: cfg.variant,
        phases,
        banner: banner_track(cfg, &phases),
        text: text_track(cfg, &phases),
        logo: logo_track(cfg, &phases),
        underline: underline_track(cfg, &phases),
        stroke: stroke_track(&phases),
        tagline: match cfg.variant {
            Variant::Base => None,
            Variant::Extended => Some(tagline_track(&phases)),
        },
        hover: match cfg.variant {
            Variant::Base => None,
            Variant::Extended => Some(hover_track(cfg, &phases)),
        },
    };
    offsets.validate()?;
    Ok(offsets)
}

fn banner_track(cfg: &TimelineConfig, p: &PhaseBoundaries) -> Track<Motion> {
    let hidden = Motion::hidden(
        Vec2::new(0.0, -cfg.logo_out_px),
        HIDDEN_SCALE,
        EXIT_BLUR_PX,
    );
    Track::new("bannerCycle", Ease::brand(), hidden)
        .ramp_to(p.text_in_end_pct(), Motion::visible())
        .hold_until(p.hold_end_pct())
        .ramp_to(FULL_CYCLE_PCT, hidden)
}

fn text_track(cfg: &TimelineConfig, p: &PhaseBoundaries) -> Track<Motion> {
    let entry = Motion::hidden(Vec2::new(-cfg.text_in_px, 0.0), 1.0, ENTRY_BLUR_PX);
    let exit = Motion::hidden(Vec2::new(0.0, -cfg.text_out_px), 1.0, EXIT_BLUR_PX);
    Track::new("textCycle", Ease::brand(), entry)
        .ramp_to(p.text_in_end_pct(), Motion::visible())
        .hold_until(p.hold_end_pct())
        .ramp_to(FULL_CYCLE_PCT, exit)
}

fn logo_track(cfg: &TimelineConfig, p: &PhaseBoundaries) -> Track<Motion> {
    let entry = Motion::hidden(
        Vec2::new(cfg.logo_in_px, 0.0),
        HIDDEN_SCALE,
        ENTRY_BLUR_PX,
    );
    let exit = Motion::hidden(
        Vec2::new(0.0, -cfg.logo_out_px),
        HIDDEN_SCALE,
        EXIT_BLUR_PX,
    );
    Track::new("logoCycle", Ease::brand(), entry)
        .hold_until(p.logo_in_start_pct())
        .ramp_to(p.logo_in_end_pct(), Motion::visible())
        .hold_until(p.hold_end_pct())
        .ramp_to(FULL_CYCLE_PCT, exit)
}

fn underline_track(cfg: &TimelineConfig, p: &PhaseBoundaries) -> Track<Underline> {
    let collapsed = Underline {
        scale_x: 0.0,
        opacity: 0.0,
        origin_x: 0.0,
    };
    let full = Underline {
        scale_x: 1.0,
        opacity: 1.0,
        origin_x: 0.0,
    };
    // Exit shrinks toward the right edge.
    let exit = Underline {
        origin_x: 100.0,
        ..collapsed
    };

    let start = Track::new("underlineCycle", Ease::brand(), collapsed);
    let revealing = match cfg.variant {
        Variant::Base => start,
        Variant::Extended => start.step_to(
            p.pct(p.underline.start_secs),
            Underline {
                opacity: 1.0,
                ..collapsed
            },
        ),
    };
    revealing
        .ramp_to(p.pct(p.underline.end_secs), full)
        .hold_until(p.hold_end_pct())
        .ramp_to(FULL_CYCLE_PCT, exit)
}

fn stroke_track(p: &PhaseBoundaries) -> Track<Stroke> {
    let hidden = Stroke {
        opacity: 0.0,
        clip: Inset::CLOSED_FROM_TOP,
    };
    Track::new("strokeCycle", Ease::Linear, hidden)
        .step_to(
            p.stroke_reveal_start_pct(),
            Stroke {
                opacity: 1.0,
                ..hidden
            },
        )
        .ramp_to(
            p.pct(p.stroke_reveal.end_secs),
            Stroke {
                opacity: 1.0,
                clip: Inset::OPEN,
            },
        )
        .hold_until(p.pct(p.stroke_hide.start_secs))
        .ramp_to(p.pct(p.stroke_hide.end_secs), hidden)
        .hold_until(FULL_CYCLE_PCT)
}

fn tagline_track(p: &PhaseBoundaries) -> Track<Wipe> {
    Track::new(
        "taglineCycle",
        Ease::brand(),
        Wipe {
            clip: Inset::CLOSED_FROM_RIGHT,
        },
    )
    .hold_until(p.pct(p.tagline_reveal.start_secs))
    .ramp_to(
        p.pct(p.tagline_reveal.end_secs),
        Wipe { clip: Inset::OPEN },
    )
    .hold_until(p.pct(p.tagline_hide.start_secs))
    .ramp_to(
        p.pct(p.tagline_hide.end_secs),
        Wipe {
            clip: Inset::CLOSED_FROM_LEFT,
        },
    )
    .hold_until(FULL_CYCLE_PCT)
}

// Traces the drift rectangle +X, +Y, -X, -Y over the hold window and rests outside it.
fn hover_track(cfg: &TimelineConfig, p: &PhaseBoundaries) -> Track<Drift> {
    let (hx, hy) = cfg.hover_amplitude();
    let (start, end) = p.hold_window_pct();
    let quarter = |q: f64| start + (end - start) * q;

    Track::new("hoverCycle", Ease::EaseInOut, Drift::NEUTRAL)
        .hold_until(start)
        .ramp_to(quarter(0.25), Drift::at(hx, 0.0))
        .ramp_to(quarter(0.5), Drift::at(hx, hy))
        .ramp_to(quarter(0.75), Drift::at(0.0, hy))
        .ramp_to(end, Drift::NEUTRAL)
        .hold_until(FULL_CYCLE_PCT)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compiler.rs"]
mod tests;
