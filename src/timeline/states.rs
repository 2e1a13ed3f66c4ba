use crate::{animation::track::Lerp, foundation::core::Vec2};

/// Slide/fade state shared by the banner, text block and logo.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Motion {
    /// Offset from the resting position, in px.
    pub translate: Vec2,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity, `0..=1`.
    pub opacity: f64,
    /// Gaussian blur radius.
    pub blur_px: f64,
}

impl Motion {
    /// Resting, fully visible state.
    pub fn visible() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            opacity: 1.0,
            blur_px: 0.0,
        }
    }

    /// Transparent, blurred and pushed off by `translate`.
    pub fn hidden(translate: Vec2, scale: f64, blur_px: f64) -> Self {
        Self {
            translate,
            scale,
            opacity: 0.0,
            blur_px,
        }
    }
}

impl Lerp for Motion {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            blur_px: <f64 as Lerp>::lerp(&a.blur_px, &b.blur_px, t),
        }
    }
}

/// Underline bar: horizontal scale plus visibility.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Underline {
    /// Horizontal scale, `0` collapsed to `1` full width.
    pub scale_x: f64,
    /// Opacity, `0..=1`.
    pub opacity: f64,
    /// `transform-origin` x in percent; `0` is the left edge, `100` the right.
    pub origin_x: f64,
}

impl Lerp for Underline {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            scale_x: <f64 as Lerp>::lerp(&a.scale_x, &b.scale_x, t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            origin_x: <f64 as Lerp>::lerp(&a.origin_x, &b.origin_x, t),
        }
    }
}

/// `inset()` clip rectangle, each edge in percent of the element box.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Inset {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Inset {
    /// Nothing clipped.
    pub const OPEN: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Clipped away from the top edge down.
    pub const CLOSED_FROM_TOP: Self = Self {
        top: 100.0,
        ..Self::OPEN
    };

    /// Clipped from the right edge; opening it wipes left to right.
    pub const CLOSED_FROM_RIGHT: Self = Self {
        right: 100.0,
        ..Self::OPEN
    };

    /// Clipped from the left edge; closing into it wipes left to right.
    pub const CLOSED_FROM_LEFT: Self = Self {
        left: 100.0,
        ..Self::OPEN
    };

    /// `true` when no part of the box remains.
    pub fn is_closed(&self) -> bool {
        self.top + self.bottom >= 100.0 || self.left + self.right >= 100.0
    }
}

impl Lerp for Inset {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            top: <f64 as Lerp>::lerp(&a.top, &b.top, t),
            right: <f64 as Lerp>::lerp(&a.right, &b.right, t),
            bottom: <f64 as Lerp>::lerp(&a.bottom, &b.bottom, t),
            left: <f64 as Lerp>::lerp(&a.left, &b.left, t),
        }
    }
}

/// Logo outline: a vertical clip reveal plus opacity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Opacity, `0..=1`.
    pub opacity: f64,
    /// Visible part of the element.
    pub clip: Inset,
}

impl Lerp for Stroke {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            clip: Inset::lerp(&a.clip, &b.clip, t),
        }
    }
}

/// Tagline mask; only the clip edge moves.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wipe {
    /// Visible part of the element.
    pub clip: Inset,
}

impl Lerp for Wipe {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            clip: Inset::lerp(&a.clip, &b.clip, t),
        }
    }
}

/// Idle hover offset, in px.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Drift {
    /// Offset from the resting position.
    pub offset: Vec2,
}

impl Drift {
    /// No drift.
    pub const NEUTRAL: Self = Self {
        offset: Vec2::ZERO,
    };

    /// Drift to `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            offset: Vec2::new(x, y),
        }
    }
}

impl Lerp for Drift {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            offset: <Vec2 as Lerp>::lerp(&a.offset, &b.offset, t),
        }
    }
}
