use crate::{
    foundation::core::secs_to_pct,
    timeline::config::{TimelineConfig, Variant},
};

/// A `[start, end]` window in seconds from the start of the loop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Window {
    /// Start, seconds.
    pub start_secs: f64,
    /// End, seconds; never before the start.
    pub end_secs: f64,
}

impl Window {
    fn new(start_secs: f64, end_secs: f64) -> Self {
        Self {
            start_secs,
            end_secs,
        }
    }
}

/// Every boundary the tracks are keyed on, computed once per config.
///
/// Coupled tracks read each other's boundaries from here rather than recomputing them: the
/// stroke reveal begins at the logo-in end, the tagline hide begins at the stroke hide, and the
/// underline and tagline reveals share one start.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PhaseBoundaries {
    /// Loop length.
    pub total_secs: f64,
    /// End of the text entry (clamped to the fade-in phase).
    pub text_in_end_secs: f64,
    /// End of the sustain phase, where every exit starts.
    pub hold_end_secs: f64,
    /// Logo entry.
    pub logo_in: Window,
    /// Logo outline reveal; starts where the logo entry ends.
    pub stroke_reveal: Window,
    /// Logo outline hide; ends at the hold end.
    pub stroke_hide: Window,
    /// Underline growth.
    pub underline: Window,
    /// Tagline wipe in; shares its start with the underline.
    pub tagline_reveal: Window,
    /// Tagline wipe out; starts with the stroke hide.
    pub tagline_hide: Window,
}

impl PhaseBoundaries {
    /// Derive boundaries from an already validated config.
    pub fn from_config(cfg: &TimelineConfig) -> Self {
        let total = cfg.total_duration();
        let hold_end = cfg.in_duration + cfg.sustain_duration;

        if cfg.text_in_anim > cfg.in_duration {
            tracing::warn!(
                text_in_anim = cfg.text_in_anim,
                in_duration = cfg.in_duration,
                "text-in longer than the fade-in phase; clamping"
            );
        }
        let text_in_end = cfg.text_in_anim.clamp(0.0, cfg.in_duration);

        let logo_in = Window::new(
            text_in_end,
            (text_in_end + cfg.logo_in_anim.max(0.0)).min(cfg.in_duration),
        );

        let stroke_reveal_end = (logo_in.end_secs + cfg.stroke_reveal_seconds.max(0.0))
            .min(total)
            .min(hold_end);
        let stroke_reveal = Window::new(logo_in.end_secs, stroke_reveal_end);
        let stroke_hide = Window::new(
            (hold_end - cfg.stroke_hide_seconds.max(0.0))
                .max(0.0)
                .max(stroke_reveal.end_secs),
            hold_end,
        );

        let underline = match cfg.variant {
            Variant::Base => Window::new(0.0, text_in_end),
            Variant::Extended => {
                let start = (text_in_end + cfg.underline_delay_seconds.max(0.0)).min(hold_end);
                let end = (start + cfg.underline_duration_seconds.max(0.0)).min(hold_end);
                Window::new(start, end)
            }
        };

        let reveal_start = underline.start_secs;
        let hide_start = stroke_hide.start_secs.max(reveal_start);
        let reveal_end = (reveal_start + cfg.tagline_reveal_seconds.max(0.0))
            .min(total)
            .clamp(reveal_start, hide_start);
        let tagline_reveal = Window::new(reveal_start, reveal_end);
        let tagline_hide = Window::new(
            hide_start,
            (hide_start + cfg.tagline_hide_seconds.max(0.0)).min(total),
        );

        let phases = Self {
            total_secs: total,
            text_in_end_secs: text_in_end,
            hold_end_secs: hold_end,
            logo_in,
            stroke_reveal,
            stroke_hide,
            underline,
            tagline_reveal,
            tagline_hide,
        };
        tracing::debug!(?phases, "phase boundaries");
        phases
    }

    /// Convert a boundary in seconds to a loop percentage.
    pub fn pct(&self, secs: f64) -> f64 {
        secs_to_pct(secs, self.total_secs)
    }

    /// End of the text entry, as a loop percentage.
    pub fn text_in_end_pct(&self) -> f64 {
        self.pct(self.text_in_end_secs)
    }

    /// End of the hold, as a loop percentage.
    pub fn hold_end_pct(&self) -> f64 {
        self.pct(self.hold_end_secs)
    }

    /// Start of the logo entry, as a loop percentage.
    pub fn logo_in_start_pct(&self) -> f64 {
        self.pct(self.logo_in.start_secs)
    }

    /// End of the logo entry, as a loop percentage.
    pub fn logo_in_end_pct(&self) -> f64 {
        self.pct(self.logo_in.end_secs)
    }

    /// Start of the stroke reveal; always equal to [`Self::logo_in_end_pct`].
    pub fn stroke_reveal_start_pct(&self) -> f64 {
        self.pct(self.stroke_reveal.start_secs)
    }

    /// Hold window `[textInEnd, holdEnd]` as percentages.
    pub fn hold_window_pct(&self) -> (f64, f64) {
        (self.text_in_end_pct(), self.hold_end_pct())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/phases.rs"]
mod tests;
