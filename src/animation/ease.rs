use crate::foundation::core::format_num;

/// Timing function applied between two linear stops.
///
/// Mirrors the CSS `animation-timing-function` values the document emits, so that sampling a
/// track in Rust agrees with what a browser shows.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// `linear`
    Linear,
    /// `ease-in-out`, i.e. `cubic-bezier(.42,0,.58,1)`.
    EaseInOut,
    /// Arbitrary `cubic-bezier(x1,y1,x2,y2)`; `x1`/`x2` are clamped into `[0,1]`.
    CubicBezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// Fast-out, soft-landing curve used by every slide/fade track.
    pub const fn brand() -> Self {
        Self::CubicBezier {
            x1: 0.2,
            y1: 0.7,
            x2: 0.0,
            y2: 1.0,
        }
    }

    /// Map linear progress `t` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    /// CSS spelling of this timing function.
    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::EaseInOut => "ease-in-out".to_string(),
            Self::CubicBezier { x1, y1, x2, y2 } => format!(
                "cubic-bezier({},{},{},{})",
                format_num(x1.clamp(0.0, 1.0)),
                format_num(y1),
                format_num(x2.clamp(0.0, 1.0)),
                format_num(y2)
            ),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);

    let s = solve_param(x1, x2, t);
    bezier_axis(y1, y2, s)
}

fn bezier_axis(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_axis_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

// Newton first, bisection when the slope flattens out.
fn solve_param(x1: f64, x2: f64, x: f64) -> f64 {
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return s;
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let v = bezier_axis(x1, x2, s);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
