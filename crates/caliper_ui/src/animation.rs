//! Value animations for bar-like widgets.
//!
//! The stored value always jumps straight to its target. An animation only
//! moves the *displayed* position, advanced by explicit ticks from the host's
//! frame loop. Nothing here owns a clock.

use serde::Deserialize;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Exponential ease-out (sharp snap to target).
    ExponentialOut,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                // Sharp snap: 1 - 2^(-10t)
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// An in-flight transition of one integer value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAnimation {
    /// Displayed value when the animation started.
    from: i16,
    /// Value the animation ends on.
    to: i16,
    /// Milliseconds elapsed so far.
    elapsed_ms: u32,
    /// Total duration in milliseconds.
    duration_ms: u16,
    /// Easing function.
    easing: Easing,
}

impl ValueAnimation {
    /// Starts a transition from `from` to `to`.
    #[must_use]
    pub const fn new(from: i16, to: i16, duration_ms: u16, easing: Easing) -> Self {
        Self {
            from,
            to,
            elapsed_ms: 0,
            duration_ms,
            easing,
        }
    }

    /// Returns true once the full duration has elapsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= u32::from(self.duration_ms)
    }

    /// Advances the animation by `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
    }

    /// Currently displayed value, rounded to the nearest integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn current(&self) -> i16 {
        if self.is_complete() {
            return self.to;
        }

        let t = self.elapsed_ms as f32 / f32::from(self.duration_ms);
        let eased = self.easing.apply(t);
        let span = f32::from(self.to) - f32::from(self.from);
        let value = f32::from(self.from) + span * eased;

        // Interpolation stays between two i16 endpoints.
        value.round() as i16
    }
}
