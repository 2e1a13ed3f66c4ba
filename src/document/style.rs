use crate::foundation::{
    core::{clamp_unit, format_num},
    error::{OverlayError, OverlayResult},
};

/// Fallback families appended after a user-supplied font.
pub const FALLBACK_FONT_STACK: &str = "ui-sans-serif, system-ui, -apple-system, \"Segoe UI\", Roboto, Inter, Arial, \"Noto Sans\", \"Helvetica Neue\", sans-serif";

/// Text, colors and sizing for the rendered document.
///
/// Colors and CSS lengths are opaque strings: they are forwarded into the stylesheet verbatim and
/// never parsed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Brand name shown in the banner.
    pub brand_text: String,
    /// Secondary line under the brand name.
    pub tagline_text: String,
    /// Emit the tagline element at all.
    pub show_tagline: bool,

    /// Underline and logo outline color.
    pub accent_color: String,
    /// Brand text color.
    pub text_color: String,
    /// Tagline color.
    pub muted_color: String,

    /// CSS length for the brand font size; everything else scales from it.
    pub brand_size_css: String,
    /// CSS `max-width` of the banner.
    pub container_max_w: String,
    /// Preferred font family, placed ahead of the fallback stack.
    pub font_family: Option<String>,

    /// Banner fill color before the opacity is mixed in.
    pub banner_background: String,
    /// Banner fill opacity, clamped to `[0, 1]` when rendered.
    pub banner_opacity: f64,

    /// Outline size relative to the logo.
    pub stroke_scale: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            brand_text: "cody raves".to_string(),
            tagline_text: "twitch.tv/cody_raves".to_string(),
            show_tagline: true,
            accent_color: "#00C2FF".to_string(),
            text_color: "#FFFFFF".to_string(),
            muted_color: "rgba(255,255,255,0.75)".to_string(),
            brand_size_css: "clamp(20px, 5.2vmin, 64px)".to_string(),
            container_max_w: "92vmin".to_string(),
            font_family: None,
            banner_background: "black".to_string(),
            banner_opacity: 0.18,
            stroke_scale: 1.18,
        }
    }
}

impl StyleConfig {
    /// Reject values that would break the stylesheet structurally.
    pub fn validate(&self) -> OverlayResult<()> {
        if !self.stroke_scale.is_finite() || self.stroke_scale <= 0.0 {
            return Err(OverlayError::invalid_config(format!(
                "stroke_scale must be finite and > 0 (got {})",
                self.stroke_scale
            )));
        }
        if !self.banner_opacity.is_finite() {
            return Err(OverlayError::invalid_config("banner_opacity must be finite"));
        }
        for (name, v) in [
            ("accent_color", &self.accent_color),
            ("text_color", &self.text_color),
            ("muted_color", &self.muted_color),
            ("brand_size_css", &self.brand_size_css),
            ("container_max_w", &self.container_max_w),
            ("banner_background", &self.banner_background),
        ] {
            if v.trim().is_empty() {
                return Err(OverlayError::invalid_config(format!(
                    "{name} must be non-empty"
                )));
            }
            if v.contains(['{', '}', ';', '<']) {
                return Err(OverlayError::invalid_config(format!(
                    "{name} must be a single CSS value (got '{v}')"
                )));
            }
        }
        Ok(())
    }

    /// Whether the tagline element is emitted at all.
    pub fn tagline_visible(&self) -> bool {
        self.show_tagline && !self.tagline_text.trim().is_empty()
    }

    /// `font-family` value: the configured family first, then the fallback stack.
    pub fn font_stack(&self) -> String {
        match self.font_family.as_deref().map(str::trim) {
            Some(family) if !family.is_empty() => {
                let quoted = family.replace('\\', "\\\\").replace('"', "\\\"");
                format!("\"{quoted}\", {FALLBACK_FONT_STACK}")
            }
            _ => FALLBACK_FONT_STACK.to_string(),
        }
    }

    /// Banner fill with the opacity (clamped to `[0, 1]`) mixed in.
    pub fn banner_fill(&self) -> String {
        let pct = clamp_unit(self.banner_opacity) * 100.0;
        format!(
            "color-mix(in srgb, {} {}%, transparent)",
            self.banner_background.trim(),
            format_num(pct)
        )
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/document/style.rs"]
mod tests;
