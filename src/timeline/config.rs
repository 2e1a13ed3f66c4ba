use crate::foundation::error::{OverlayError, OverlayResult};

/// Which composition the compiler emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Underline grows with the text, static tagline, no hover drift.
    Base,
    /// Delayed underline reveal, tagline wipe and idle hover drift.
    #[default]
    Extended,
}

/// Phase durations and slide distances for one overlay loop.
///
/// All durations are seconds, all distances pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Which set of tracks to emit.
    pub variant: Variant,

    /// Fade-in phase length.
    pub in_duration: f64,
    /// Hold phase length.
    pub sustain_duration: f64,
    /// Fade-out phase length.
    pub out_duration: f64,

    /// Text entry length, measured from the loop start.
    pub text_in_anim: f64,
    /// Logo entry length, starting when the text entry ends.
    pub logo_in_anim: f64,

    /// Distance the text slides in from the left.
    pub text_in_px: f64,
    /// Distance the logo slides in from the right.
    pub logo_in_px: f64,
    /// Distance the text rises on exit.
    pub text_out_px: f64,
    /// Distance the logo and banner rise on exit.
    pub logo_out_px: f64,

    /// Logo outline reveal length.
    pub stroke_reveal_seconds: f64,
    /// Logo outline hide length, ending at the hold end.
    pub stroke_hide_seconds: f64,

    /// Pause between the text entry and the underline reveal.
    pub underline_delay_seconds: f64,
    /// Underline growth length.
    pub underline_duration_seconds: f64,

    /// Tagline wipe-in length.
    pub tagline_reveal_seconds: f64,
    /// Tagline wipe-out length.
    pub tagline_hide_seconds: f64,

    /// Drift the banner during the hold.
    pub hover_enabled: bool,
    /// Horizontal drift amplitude.
    pub hover_x: f64,
    /// Vertical drift amplitude.
    pub hover_y: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Extended,
            in_duration: 4.0,
            sustain_duration: 10.0,
            out_duration: 4.0,
            text_in_anim: 1.6,
            logo_in_anim: 1.2,
            text_in_px: 280.0,
            logo_in_px: 280.0,
            text_out_px: 140.0,
            logo_out_px: 140.0,
            stroke_reveal_seconds: 0.6,
            stroke_hide_seconds: 0.6,
            underline_delay_seconds: 0.2,
            underline_duration_seconds: 0.8,
            tagline_reveal_seconds: 0.9,
            tagline_hide_seconds: 0.6,
            hover_enabled: true,
            hover_x: 6.0,
            hover_y: 4.0,
        }
    }
}

impl TimelineConfig {
    /// Length of one loop in seconds.
    pub fn total_duration(&self) -> f64 {
        self.in_duration + self.sustain_duration + self.out_duration
    }

    /// Reject configs the compiler cannot turn into a timeline.
    ///
    /// Everything else (phases longer than the loop, negative optional durations) is clamped
    /// during compilation instead.
    pub fn validate(&self) -> OverlayResult<()> {
        for (name, v) in self.numeric_fields() {
            if !v.is_finite() {
                return Err(OverlayError::invalid_config(format!(
                    "{name} must be finite (got {v})"
                )));
            }
        }
        for (name, v) in [
            ("in_duration", self.in_duration),
            ("sustain_duration", self.sustain_duration),
            ("out_duration", self.out_duration),
        ] {
            if v < 0.0 {
                return Err(OverlayError::invalid_config(format!(
                    "{name} must be >= 0 (got {v})"
                )));
            }
        }
        let total = self.total_duration();
        if total <= 0.0 {
            return Err(OverlayError::invalid_config(format!(
                "total duration must be > 0 (got {total})"
            )));
        }
        Ok(())
    }

    /// Hover amplitude actually applied; zero when hover is off.
    pub fn hover_amplitude(&self) -> (f64, f64) {
        if self.hover_enabled {
            (self.hover_x, self.hover_y)
        } else {
            (0.0, 0.0)
        }
    }

    fn numeric_fields(&self) -> [(&'static str, f64); 17] {
        [
            ("in_duration", self.in_duration),
            ("sustain_duration", self.sustain_duration),
            ("out_duration", self.out_duration),
            ("text_in_anim", self.text_in_anim),
            ("logo_in_anim", self.logo_in_anim),
            ("text_in_px", self.text_in_px),
            ("logo_in_px", self.logo_in_px),
            ("text_out_px", self.text_out_px),
            ("logo_out_px", self.logo_out_px),
            ("stroke_reveal_seconds", self.stroke_reveal_seconds),
            ("stroke_hide_seconds", self.stroke_hide_seconds),
            ("underline_delay_seconds", self.underline_delay_seconds),
            ("underline_duration_seconds", self.underline_duration_seconds),
            ("tagline_reveal_seconds", self.tagline_reveal_seconds),
            ("tagline_hide_seconds", self.tagline_hide_seconds),
            ("hover_x", self.hover_x),
            ("hover_y", self.hover_y),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/config.rs"]
mod tests;
