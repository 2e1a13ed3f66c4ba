use crate::{
    animation::ease::Ease,
    foundation::{
        core::{FULL_CYCLE_PCT, Vec2, round_pct},
        error::{OverlayError, OverlayResult},
    },
};

/// Values that can be blended between two keyframe stops.
pub trait Lerp: Sized {
    /// Blend `a` toward `b` by `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// How a track arrives at a stop from the one before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interp {
    /// Hold the previous value, then switch to this one at the stop's percent.
    Step,
    /// Interpolate (through the track ease) from the previous value.
    Linear,
}

/// One `(percent, value)` keyframe entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stop<T> {
    /// Position in the loop, `0..=100`.
    pub percent: f64,
    /// Visual state reached at `percent`.
    pub value: T,
    /// Transition used to reach this stop.
    pub interp: Interp,
}

/// An ordered, monotonic sequence of stops covering one full loop.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track<T> {
    /// Keyframe rule name (`bannerCycle`, `strokeCycle`, ...).
    pub name: String,
    /// Timing function applied to each linear segment.
    pub ease: Ease,
    stops: Vec<Stop<T>>, // sorted by percent
}

impl<T> Track<T>
where
    T: Lerp + Clone + PartialEq,
{
    /// Start a track at 0% with `initial`.
    pub fn new(name: impl Into<String>, ease: Ease, initial: T) -> Self {
        Self {
            name: name.into(),
            ease,
            stops: vec![Stop {
                percent: 0.0,
                value: initial,
                interp: Interp::Linear,
            }],
        }
    }

    /// Interpolate toward `value`, arriving at `percent`.
    pub fn ramp_to(mut self, percent: f64, value: T) -> Self {
        self.push(percent, value, Interp::Linear);
        self
    }

    /// Keep the current value until `percent`.
    pub fn hold_until(self, percent: f64) -> Self {
        let value = self.last_value().clone();
        self.ramp_to(percent, value)
    }

    /// Jump to `value` at `percent`, holding the previous value until then.
    pub fn step_to(mut self, percent: f64, value: T) -> Self {
        self.push(percent, value, Interp::Step);
        self
    }

    fn push(&mut self, percent: f64, value: T, mut interp: Interp) {
        let last = self.stops.last().map_or(0.0, |s| s.percent);
        // Snapped to the emitted precision so two stops never share a printed selector.
        let percent = if percent.is_nan() {
            last
        } else {
            round_pct(percent.clamp(last, FULL_CYCLE_PCT))
        };

        if let Some(prev) = self.stops.last_mut()
            && prev.percent == percent
        {
            // A stop at 0% or one that is itself a jump is never on screen for any length of
            // time, so the newer value supersedes it.
            if percent == 0.0 || prev.interp == Interp::Step {
                prev.value = value;
                return;
            }
            if prev.value == value {
                return;
            }
            // Zero-length transition: keep the held stop and jump right after it.
            interp = Interp::Step;
        }

        self.stops.push(Stop {
            percent,
            value,
            interp,
        });
    }

    fn last_value(&self) -> &T {
        // `new` always seeds one stop and nothing removes stops.
        &self.stops[self.stops.len() - 1].value
    }

    /// Stops in loop order.
    pub fn stops(&self) -> &[Stop<T>] {
        &self.stops
    }

    /// Percent of each stop, in order.
    pub fn percents(&self) -> impl Iterator<Item = f64> + '_ {
        self.stops.iter().map(|s| s.percent)
    }

    /// `true` when every stop carries the same value.
    pub fn is_static(&self) -> bool {
        self.stops.windows(2).all(|w| w[0].value == w[1].value)
    }

    /// Check the loop invariants: anchored at 0% and 100%, finite and non-decreasing.
    pub fn validate(&self) -> OverlayResult<()> {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Err(OverlayError::animation(format!(
                "track '{}' has no stops",
                self.name
            )));
        };
        if self.stops.iter().any(|s| !s.percent.is_finite()) {
            return Err(OverlayError::animation(format!(
                "track '{}' has a non-finite stop",
                self.name
            )));
        }
        if first.percent != 0.0 || last.percent != FULL_CYCLE_PCT {
            return Err(OverlayError::animation(format!(
                "track '{}' must span 0%..100% (got {}..{})",
                self.name, first.percent, last.percent
            )));
        }
        if !self.stops.windows(2).all(|w| w[0].percent <= w[1].percent) {
            return Err(OverlayError::animation(format!(
                "track '{}' stops must be sorted by percent",
                self.name
            )));
        }
        Ok(())
    }

    /// Value shown at `percent` of the loop.
    pub fn sample(&self, percent: f64) -> OverlayResult<T> {
        if self.stops.is_empty() {
            return Err(OverlayError::animation(format!(
                "track '{}' has no stops",
                self.name
            )));
        }
        if !percent.is_finite() {
            return Err(OverlayError::animation("sample percent must be finite"));
        }

        let idx = self.stops.partition_point(|s| s.percent <= percent);
        if idx == 0 {
            return Ok(self.stops[0].value.clone());
        }
        if idx >= self.stops.len() {
            return Ok(self.stops[self.stops.len() - 1].value.clone());
        }

        let a = &self.stops[idx - 1];
        let b = &self.stops[idx];
        match b.interp {
            Interp::Step => Ok(a.value.clone()),
            Interp::Linear => {
                let t = (percent - a.percent) / (b.percent - a.percent);
                Ok(T::lerp(&a.value, &b.value, self.ease.apply(t)))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
