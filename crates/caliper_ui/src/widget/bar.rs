//! Progress bar: the value store every slider is built on.
//!
//! A bar holds a main value, a start value and the `[min, max]` bounds. Every
//! setter clamps into the bounds; nothing here can fail. The two values are
//! clamped independently, so a caller may place them in either order; keeping
//! them ordered is the job of whoever drives them interactively. Animated
//! setters store the new value immediately and only animate the drawn
//! position.

use super::{Widget, WidgetId, WidgetResponse, WidgetState};
use crate::animation::{Easing, ValueAnimation};
use crate::input::InputEvent;
use crate::layout::{Direction, Rect};
use crate::render::{push_styled_rect, RenderCommand};
use crate::style::SliderStyle;

/// How the indicator of a bar is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarType {
    /// Indicator grows from the minimum.
    #[default]
    Normal,
    /// Indicator grows from zero.
    Symmetrical,
    /// Indicator spans from the start value to the value.
    Custom,
}

/// The capability set of a bar-like value store.
///
/// Anything offering bounded get/set of a value and a start value, bounds and
/// animated transitions. Both [`Bar`] and the slider implement it.
pub trait ValueStore {
    /// Main value.
    fn value(&self) -> i16;
    /// Sets the main value, clamped.
    fn set_value(&mut self, value: i16, animate: bool);
    /// Start value (lower end in dual-value mode).
    fn start_value(&self) -> i16;
    /// Sets the start value, clamped.
    fn set_start_value(&mut self, value: i16, animate: bool);
    /// Lower bound.
    fn min_value(&self) -> i16;
    /// Upper bound.
    fn max_value(&self) -> i16;
    /// Sets both bounds, clamping the stored values into them.
    fn set_range(&mut self, min: i16, max: i16);
    /// Duration of animated transitions in milliseconds.
    fn anim_time(&self) -> u16;
    /// Sets the duration of animated transitions.
    fn set_anim_time(&mut self, ms: u16);
}

/// Moves the main value of any store by `delta`, saturating at the type's
/// limits before the store clamps to its own bounds.
pub fn step_value<S: ValueStore + ?Sized>(store: &mut S, delta: i16, animate: bool) {
    let next = store.value().saturating_add(delta);
    store.set_value(next, animate);
}

/// Moves the start value of any store by `delta`.
pub fn step_start_value<S: ValueStore + ?Sized>(store: &mut S, delta: i16, animate: bool) {
    let next = store.start_value().saturating_add(delta);
    store.set_start_value(next, animate);
}

/// Progress bar widget.
#[derive(Debug, Clone)]
pub struct Bar {
    /// Widget state.
    state: WidgetState,
    /// Current (target) value.
    cur_value: i16,
    /// Start value.
    start_value: i16,
    /// Lower bound.
    min_value: i16,
    /// Upper bound.
    max_value: i16,
    /// Indicator anchoring.
    bar_type: BarType,
    /// Animation duration in milliseconds.
    anim_time_ms: u16,
    /// Easing for animated transitions.
    easing: Easing,
    /// Drawn position of the main value while animating.
    value_anim: Option<ValueAnimation>,
    /// Drawn position of the start value while animating.
    start_anim: Option<ValueAnimation>,
    /// Part styles.
    style: SliderStyle,
}

impl Bar {
    /// Default lower bound.
    pub const DEFAULT_MIN: i16 = 0;
    /// Default upper bound.
    pub const DEFAULT_MAX: i16 = 100;
    /// Default animation time.
    pub const DEFAULT_ANIM_TIME_MS: u16 = 200;

    /// Creates a bar on `[0, 100]` with both values at 0.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            state: WidgetState::new(id),
            cur_value: 0,
            start_value: 0,
            min_value: Self::DEFAULT_MIN,
            max_value: Self::DEFAULT_MAX,
            bar_type: BarType::Normal,
            anim_time_ms: Self::DEFAULT_ANIM_TIME_MS,
            easing: Easing::Linear,
            value_anim: None,
            start_anim: None,
            style: SliderStyle::default(),
        }
    }

    /// Indicator anchoring.
    #[must_use]
    pub fn bar_type(&self) -> BarType {
        self.bar_type
    }

    /// Changes the indicator anchoring. Stored values are left untouched.
    pub fn set_bar_type(&mut self, bar_type: BarType) {
        if self.bar_type == bar_type {
            return;
        }
        self.bar_type = bar_type;
        self.state.mark_dirty();
    }

    /// Easing for animated transitions.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Sets the easing for subsequent animated transitions.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Part styles.
    #[must_use]
    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    /// Replaces the part styles.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
        self.state.mark_dirty();
    }

    /// Main value as currently drawn.
    #[must_use]
    pub fn displayed_value(&self) -> i16 {
        self.value_anim.map_or(self.cur_value, |anim| anim.current())
    }

    /// Start value as currently drawn.
    #[must_use]
    pub fn displayed_start_value(&self) -> i16 {
        self.start_anim.map_or(self.start_value, |anim| anim.current())
    }

    /// Returns true while any transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.value_anim.is_some() || self.start_anim.is_some()
    }

    /// The two ends of the indicator in value units, in drawing order.
    #[must_use]
    pub fn indicator_span(&self) -> (i16, i16) {
        let to = self.displayed_value();
        let from = match self.bar_type {
            BarType::Normal => self.min_value,
            BarType::Symmetrical => 0_i16.clamp(self.min_value, self.max_value),
            BarType::Custom => self.displayed_start_value(),
        };
        (from.min(to), from.max(to))
    }

    /// Position of a value along the track, 0 at min and 1 at max.
    #[must_use]
    pub fn fraction_of(&self, value: i16) -> f32 {
        let span = i32::from(self.max_value) - i32::from(self.min_value);
        if span <= 0 {
            return 0.0;
        }
        let offset = i32::from(value.clamp(self.min_value, self.max_value)) - i32::from(self.min_value);

        // Both fit in 17 bits, exact in f32.
        #[allow(clippy::cast_precision_loss)]
        let fraction = offset as f32 / span as f32;
        fraction
    }

    /// Value at a fraction of the track, rounded to the nearest integer and
    /// clamped into the bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn value_at_fraction(&self, fraction: f32) -> i16 {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        let span = (i32::from(self.max_value) - i32::from(self.min_value)) as f32;
        let offset = (span * fraction).round() as i32;
        let value = i32::from(self.min_value) + offset;

        // Clamped into [min, max], so it fits an i16.
        value.clamp(i32::from(self.min_value), i32::from(self.max_value)) as i16
    }

    /// Rectangle of the indicator inside the widget rect.
    #[must_use]
    pub fn indicator_rect(&self) -> Rect {
        let rect = self.state.rect;
        if rect.is_empty() {
            return Rect::ZERO;
        }
        let (from, to) = self.indicator_span();
        let (a, b) = (self.fraction_of(from), self.fraction_of(to));

        match Direction::of(&rect) {
            Direction::Horizontal => Rect::new(rect.x + rect.width * a, rect.y, rect.width * (b - a), rect.height),
            Direction::Vertical => Rect::new(
                rect.x,
                rect.bottom() - rect.height * b,
                rect.width,
                rect.height * (b - a),
            ),
        }
    }

    fn clamp(&self, value: i16) -> i16 {
        value.clamp(self.min_value, self.max_value)
    }

    fn transition(&self, displayed: i16, target: i16, animate: bool) -> Option<ValueAnimation> {
        if animate && self.anim_time_ms > 0 && displayed != target {
            Some(ValueAnimation::new(displayed, target, self.anim_time_ms, self.easing))
        } else {
            None
        }
    }
}

impl ValueStore for Bar {
    fn value(&self) -> i16 {
        self.cur_value
    }

    fn set_value(&mut self, value: i16, animate: bool) {
        let value = self.clamp(value);
        if value == self.cur_value {
            return;
        }

        self.value_anim = self.transition(self.displayed_value(), value, animate);
        self.cur_value = value;
        self.state.mark_dirty();
    }

    fn start_value(&self) -> i16 {
        self.start_value
    }

    fn set_start_value(&mut self, value: i16, animate: bool) {
        let value = self.clamp(value);
        if value == self.start_value {
            return;
        }

        self.start_anim = self.transition(self.displayed_start_value(), value, animate);
        self.start_value = value;
        self.state.mark_dirty();
    }

    fn min_value(&self) -> i16 {
        self.min_value
    }

    fn max_value(&self) -> i16 {
        self.max_value
    }

    fn set_range(&mut self, min: i16, max: i16) {
        let (min, max) = if min > max {
            tracing::warn!("Bar {} range bounds swapped: [{}, {}]", self.state.id.raw(), min, max);
            (max, min)
        } else {
            (min, max)
        };
        if self.min_value == min && self.max_value == max {
            return;
        }

        self.min_value = min;
        self.max_value = max;

        let value = self.cur_value.clamp(min, max);
        if value != self.cur_value {
            self.cur_value = value;
            self.value_anim = None;
        }
        let start = self.start_value.clamp(min, max);
        if start != self.start_value {
            self.start_value = start;
            self.start_anim = None;
        }
        self.state.mark_dirty();
    }

    fn anim_time(&self) -> u16 {
        self.anim_time_ms
    }

    fn set_anim_time(&mut self, ms: u16) {
        self.anim_time_ms = ms;
    }
}

impl Widget for Bar {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn handle_event(&mut self, _event: &InputEvent) -> WidgetResponse {
        // A plain bar is display-only.
        WidgetResponse::default()
    }

    fn tick(&mut self, dt_ms: u32) {
        if !self.is_animating() {
            return;
        }

        for anim in [&mut self.value_anim, &mut self.start_anim] {
            if let Some(running) = anim {
                running.advance(dt_ms);
                if running.is_complete() {
                    *anim = None;
                }
            }
        }
        self.state.mark_dirty();
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if !self.state.is_visible() {
            return;
        }
        push_styled_rect(commands, self.state.rect, &self.style.main);
        push_styled_rect(commands, self.indicator_rect(), &self.style.indicator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> Bar {
        Bar::new(WidgetId::new(1))
    }

    #[test]
    fn test_value_clamped_to_bounds() {
        let mut bar = bar();
        bar.set_range(0, 100);

        bar.set_value(-10, false);
        assert_eq!(bar.value(), 0);

        bar.set_value(250, false);
        assert_eq!(bar.value(), 100);
    }

    #[test]
    fn test_custom_setters_accept_either_order() {
        let mut bar = bar();
        bar.set_bar_type(BarType::Custom);

        // Start placed above the still-zero value, then the value above it.
        bar.set_start_value(20, false);
        bar.set_value(80, false);
        assert_eq!((bar.start_value(), bar.value()), (20, 80));

        bar.set_start_value(150, false);
        assert_eq!(bar.start_value(), 100);
    }

    #[test]
    fn test_start_value_survives_type_change() {
        let mut bar = bar();
        bar.set_value(10, false);
        bar.set_start_value(60, false);

        bar.set_bar_type(BarType::Custom);
        bar.set_bar_type(BarType::Normal);

        assert_eq!((bar.start_value(), bar.value()), (60, 10));
    }

    #[test]
    fn test_set_range_clamps_existing_values() {
        let mut bar = bar();
        bar.set_bar_type(BarType::Custom);
        bar.set_value(90, false);
        bar.set_start_value(5, false);

        bar.set_range(10, 50);

        assert_eq!(bar.value(), 50);
        assert_eq!(bar.start_value(), 10);
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let mut bar = bar();
        bar.set_range(20, -20);

        assert_eq!(bar.min_value(), -20);
        assert_eq!(bar.max_value(), 20);
    }

    #[test]
    fn test_animated_value_is_stored_immediately() {
        let mut bar = bar();
        bar.set_anim_time(100);

        bar.set_value(80, true);
        assert_eq!(bar.value(), 80);
        assert_eq!(bar.displayed_value(), 0);
        assert!(bar.is_animating());

        bar.tick(50);
        assert_eq!(bar.displayed_value(), 40);

        bar.tick(50);
        assert_eq!(bar.displayed_value(), 80);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_zero_anim_time_is_immediate() {
        let mut bar = bar();
        bar.set_anim_time(0);
        bar.set_value(42, true);

        assert!(!bar.is_animating());
        assert_eq!(bar.displayed_value(), 42);
    }

    #[test]
    fn test_indicator_span_per_type() {
        let mut bar = bar();
        bar.set_range(-50, 50);
        bar.set_value(-20, false);
        bar.set_start_value(-40, false);

        assert_eq!(bar.indicator_span(), (-50, -20));

        bar.set_bar_type(BarType::Symmetrical);
        assert_eq!(bar.indicator_span(), (-20, 0));

        bar.set_bar_type(BarType::Custom);
        assert_eq!(bar.indicator_span(), (-40, -20));
    }

    #[test]
    fn test_fraction_mapping_rounds_to_nearest() {
        let mut bar = bar();
        bar.set_range(0, 10);

        assert_eq!(bar.value_at_fraction(0.34), 3);
        assert_eq!(bar.value_at_fraction(0.36), 4);
        assert_eq!(bar.value_at_fraction(-1.0), 0);
        assert_eq!(bar.value_at_fraction(2.0), 10);
        assert!((bar.fraction_of(5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_step_helpers_saturate() {
        let mut bar = bar();
        bar.set_range(i16::MIN, i16::MAX);
        bar.set_value(i16::MAX, false);

        step_value(&mut bar, 1, false);
        assert_eq!(bar.value(), i16::MAX);

        step_start_value(&mut bar, -1, false);
        assert_eq!(bar.start_value(), -1);
    }

    #[test]
    fn test_render_main_and_indicator() {
        let mut bar = bar();
        bar.set_rect(Rect::new(0.0, 0.0, 100.0, 10.0));
        bar.set_value(25, false);

        let mut commands = Vec::new();
        bar.render(&mut commands);

        // Main fill + outline, then indicator fill.
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2].bounds(), Rect::new(0.0, 0.0, 25.0, 10.0));
    }
}
