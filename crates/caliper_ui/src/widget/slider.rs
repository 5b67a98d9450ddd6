//! Slider: a bar you can grab.
//!
//! ## Knobs
//!
//! `Normal` and `Symmetrical` sliders have one knob (the right one, by
//! convention). `Range` sliders have two: the left knob drives the bar's start
//! value, the right knob drives its main value. Dragging and key steps never
//! push one knob past the other; the plain setters only clamp to the bounds.
//!
//! ## Drag state machine
//!
//! ```text
//!            press inside hit area            move: project, round, clamp, write
//!   ┌──────┐ ───────────────────────▶ ┌──────────────────┐ ◀──┐
//!   │ Idle │                          │ Dragging(knob)   │ ───┘
//!   └──────┘ ◀─────────────────────── └──────────────────┘
//!            release / press lost
//! ```
//!
//! Moves while idle are dropped. They show up when a move races a cancel.
//!
//! ## Keypad / encoder
//!
//! While idle, `Enter` swaps which knob of a range slider is adjusted and the
//! arrow keys step that knob by one through the animated setter.

use serde::Deserialize;

use super::bar::{step_start_value, step_value, Bar, BarType, ValueStore};
use super::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState, WidgetTree};
use crate::error::UiResult;
use crate::input::{InputEvent, Key};
use crate::layout::{Direction, Rect};
use crate::render::{push_styled_rect, RenderCommand};
use crate::style::SliderStyle;

/// Slider flavour. A thin alias over [`BarType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderType {
    /// One knob, indicator grows from the minimum.
    #[default]
    Normal,
    /// One knob, indicator grows from zero.
    Symmetrical,
    /// Two knobs bounding an interval.
    Range,
}

impl From<SliderType> for BarType {
    fn from(slider_type: SliderType) -> Self {
        match slider_type {
            SliderType::Normal => Self::Normal,
            SliderType::Symmetrical => Self::Symmetrical,
            SliderType::Range => Self::Custom,
        }
    }
}

impl From<BarType> for SliderType {
    fn from(bar_type: BarType) -> Self {
        match bar_type {
            BarType::Normal => Self::Normal,
            BarType::Symmetrical => Self::Symmetrical,
            BarType::Custom => Self::Range,
        }
    }
}

/// One of the two knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Knob {
    /// Lower knob, only present on range sliders.
    Left,
    /// Main knob.
    Right,
}

impl Knob {
    /// The stored value this knob writes.
    #[must_use]
    pub const fn slot(self) -> ValueSlot {
        match self {
            Self::Left => ValueSlot::Start,
            Self::Right => ValueSlot::Main,
        }
    }
}

/// Which of the bar's stored values a drag writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSlot {
    /// The bar's main value.
    Main,
    /// The bar's start value.
    Start,
}

/// Pointer drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A knob is being dragged.
    Dragging(Knob),
}

/// Slider widget.
#[derive(Debug, Clone)]
pub struct Slider {
    /// Value store, geometry and indicator.
    bar: Bar,
    /// Left knob, `Rect::ZERO` unless this is a range slider.
    left_knob_area: Rect,
    /// Main knob.
    right_knob_area: Rect,
    /// Current gesture.
    drag: DragState,
    /// Keypad/encoder adjusts the left knob instead of the right one.
    left_knob_focus: bool,
}

impl Slider {
    /// Creates a detached slider. Use [`Slider::create`] to register it in a tree.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        let mut slider = Self {
            bar: Bar::new(id),
            left_knob_area: Rect::ZERO,
            right_knob_area: Rect::ZERO,
            drag: DragState::Idle,
            left_knob_focus: false,
        };
        slider.refresh_knob_areas();
        slider
    }

    /// Creates a slider as a child of `parent`, or as a root when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::WidgetNotFound`] if `parent` is not in the tree.
    pub fn create(tree: &mut WidgetTree, parent: Option<WidgetId>) -> UiResult<Self> {
        let id = tree.insert(parent)?;
        let mut slider = Self::new(id);
        slider.bar.state_mut().parent = parent;
        Ok(slider)
    }

    // -------------------------------------------------------------------------
    // Setters
    // -------------------------------------------------------------------------

    /// Sets the main knob's value.
    pub fn set_value(&mut self, value: i16, animate: bool) {
        self.bar.set_value(value, animate);
        self.refresh_knob_areas();
    }

    /// Sets the left knob's value. On non-range sliders this writes the
    /// unused start value and has no visible effect.
    pub fn set_left_value(&mut self, value: i16, animate: bool) {
        self.bar.set_start_value(value, animate);
        self.refresh_knob_areas();
    }

    /// Sets both bounds. Existing values are clamped into them.
    pub fn set_range(&mut self, min: i16, max: i16) {
        self.bar.set_range(min, max);
        self.refresh_knob_areas();
    }

    /// Sets the duration of subsequent animated changes.
    pub fn set_anim_time(&mut self, ms: u16) {
        self.bar.set_anim_time(ms);
    }

    /// Switches between one and two knobs and re-anchors the indicator.
    ///
    /// Leaving `Range` drops the left knob: its focus is reset and a drag on
    /// it is cancelled. A cancelled drag is reported through `drag_ended`,
    /// like a release, so hosts tracking gestures stay in step.
    pub fn set_type(&mut self, slider_type: SliderType) -> WidgetResponse {
        let previous = self.slider_type();
        if previous == slider_type {
            return WidgetResponse::default();
        }
        self.bar.set_bar_type(slider_type.into());

        let mut response = WidgetResponse::default();
        if slider_type != SliderType::Range {
            self.left_knob_focus = false;
            if self.drag == DragState::Dragging(Knob::Left) {
                response = self.release();
            }
        }
        self.refresh_knob_areas();

        tracing::debug!(
            "Slider {} type: {:?} -> {:?}",
            self.bar.state().id.raw(),
            previous,
            slider_type
        );
        response
    }

    /// Replaces the part styles. Knob padding changes the knob areas.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.bar.set_style(style);
        self.refresh_knob_areas();
    }

    // -------------------------------------------------------------------------
    // Getters
    // -------------------------------------------------------------------------

    /// Value of the main knob.
    #[must_use]
    pub fn value(&self) -> i16 {
        self.bar.value()
    }

    /// Value of the left knob.
    #[must_use]
    pub fn left_value(&self) -> i16 {
        self.bar.start_value()
    }

    /// Lower bound.
    #[must_use]
    pub fn min_value(&self) -> i16 {
        self.bar.min_value()
    }

    /// Upper bound.
    #[must_use]
    pub fn max_value(&self) -> i16 {
        self.bar.max_value()
    }

    /// Animation duration in milliseconds.
    #[must_use]
    pub fn anim_time(&self) -> u16 {
        self.bar.anim_time()
    }

    /// Slider flavour.
    #[must_use]
    pub fn slider_type(&self) -> SliderType {
        self.bar.bar_type().into()
    }

    /// True strictly between a drag's press and its release or cancel.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// Current gesture.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Stored value the current drag writes, if any.
    #[must_use]
    pub fn value_to_set(&self) -> Option<ValueSlot> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging(knob) => Some(knob.slot()),
        }
    }

    /// True when keypad/encoder input adjusts the left knob.
    #[must_use]
    pub fn left_knob_focus(&self) -> bool {
        self.left_knob_focus
    }

    /// Number of knobs: two for range sliders, one otherwise.
    #[must_use]
    pub fn knob_count(&self) -> usize {
        if self.slider_type() == SliderType::Range {
            2
        } else {
            1
        }
    }

    /// Left knob rectangle; `Rect::ZERO` unless this is a range slider.
    #[must_use]
    pub fn left_knob_area(&self) -> Rect {
        self.left_knob_area
    }

    /// Main knob rectangle.
    #[must_use]
    pub fn right_knob_area(&self) -> Rect {
        self.right_knob_area
    }

    /// Area that accepts presses: the track plus knob overhang.
    #[must_use]
    pub fn hit_area(&self) -> Rect {
        self.bar
            .state()
            .rect
            .union(&self.left_knob_area)
            .union(&self.right_knob_area)
    }

    /// The underlying bar.
    #[must_use]
    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    /// Mutable access to the underlying bar, for easing and similar knobs.
    pub fn bar_mut(&mut self) -> &mut Bar {
        &mut self.bar
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Recomputes both knob rectangles from the displayed values.
    fn refresh_knob_areas(&mut self) {
        let rect = self.bar.state().rect;
        if rect.is_empty() {
            self.left_knob_area = Rect::ZERO;
            self.right_knob_area = Rect::ZERO;
            return;
        }

        let axis = Direction::of(&rect);
        let side = axis.cross_extent(&rect);
        let padding = self.bar.style().knob_padding.max(0.0);
        let square_at = |value: i16| {
            let center = axis.point_at(&rect, self.bar.fraction_of(value));
            Rect::centered_square(center, side).expand(padding)
        };

        self.right_knob_area = square_at(self.bar.displayed_value());
        self.left_knob_area = if self.slider_type() == SliderType::Range {
            square_at(self.bar.displayed_start_value())
        } else {
            Rect::ZERO
        };
    }

    /// Picks the knob a press at `(x, y)` grabs: on range sliders the one
    /// whose centre is closer along the main axis, right knob on ties.
    ///
    /// Stacked knobs tie for every press. There the press picks the knob on
    /// its own side, so the pair can be pulled apart either way; a press
    /// dead on the stack still takes the right knob.
    #[allow(clippy::float_cmp)]
    fn knob_at(&self, x: f32, y: f32) -> Knob {
        if self.slider_type() != SliderType::Range {
            return Knob::Right;
        }

        let rect = self.bar.state().rect;
        let axis = Direction::of(&rect);
        let pointer = axis.main_coord((x, y));
        let left_center = axis.main_coord(self.left_knob_area.center());
        let right_center = axis.main_coord(self.right_knob_area.center());
        let left = (left_center - pointer).abs();
        let right = (right_center - pointer).abs();

        if left < right {
            return Knob::Left;
        }
        if left == right && left_center == right_center {
            let knobs = self.bar.fraction_of(self.bar.displayed_start_value());
            if axis.fraction_at(&rect, x, y) < knobs {
                return Knob::Left;
            }
        }
        Knob::Right
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    fn press(&mut self, x: f32, y: f32) -> WidgetResponse {
        if self.is_dragging() || !self.hit_area().contains(x, y) {
            return WidgetResponse::default();
        }

        let knob = self.knob_at(x, y);
        self.drag = DragState::Dragging(knob);
        self.bar.state_mut().flags.set(WidgetFlags::PRESSED);

        tracing::debug!("Slider {} drag begin: {:?} knob", self.bar.state().id.raw(), knob);

        WidgetResponse {
            drag_started: true,
            ..WidgetResponse::default()
        }
    }

    fn drag_to(&mut self, x: f32, y: f32) -> WidgetResponse {
        let DragState::Dragging(knob) = self.drag else {
            return WidgetResponse::default();
        };

        let rect = self.bar.state().rect;
        let fraction = Direction::of(&rect).fraction_at(&rect, x, y);
        let target = self.bar.value_at_fraction(fraction);
        let range = self.slider_type() == SliderType::Range;

        let changed = match knob {
            Knob::Left => {
                let target = target.min(self.bar.value());
                let before = self.bar.start_value();
                self.bar.set_start_value(target, false);
                before != self.bar.start_value()
            }
            Knob::Right => {
                let target = if range { target.max(self.bar.start_value()) } else { target };
                let before = self.bar.value();
                self.bar.set_value(target, false);
                before != self.bar.value()
            }
        };

        if changed {
            self.refresh_knob_areas();
            tracing::trace!(
                "Slider {} {:?} knob -> {}",
                self.bar.state().id.raw(),
                knob,
                target
            );
        }

        WidgetResponse {
            changed,
            ..WidgetResponse::default()
        }
    }

    fn release(&mut self) -> WidgetResponse {
        if !self.is_dragging() {
            return WidgetResponse::default();
        }
        self.finish_drag();

        WidgetResponse {
            drag_ended: true,
            ..WidgetResponse::default()
        }
    }

    fn finish_drag(&mut self) {
        self.drag = DragState::Idle;
        self.bar.state_mut().flags.clear(WidgetFlags::PRESSED);
        tracing::debug!("Slider {} drag end", self.bar.state().id.raw());
    }

    fn key(&mut self, key: Key) -> WidgetResponse {
        if self.is_dragging() {
            return WidgetResponse::default();
        }

        let range = self.slider_type() == SliderType::Range;

        if key == Key::Enter {
            if range {
                self.left_knob_focus = !self.left_knob_focus;
                tracing::debug!(
                    "Slider {} knob focus: {}",
                    self.bar.state().id.raw(),
                    if self.left_knob_focus { "left" } else { "right" }
                );
            }
            return WidgetResponse::default();
        }

        let Some(delta) = key.step() else {
            return WidgetResponse::default();
        };

        // Steps never push one knob past the other.
        let changed = if range && self.left_knob_focus {
            let before = self.bar.start_value();
            if delta < 0 || before < self.bar.value() {
                step_start_value(&mut self.bar, delta, true);
            }
            before != self.bar.start_value()
        } else {
            let before = self.bar.value();
            if !range || delta > 0 || before > self.bar.start_value() {
                step_value(&mut self.bar, delta, true);
            }
            before != self.bar.value()
        };

        if changed {
            self.refresh_knob_areas();
        }

        WidgetResponse {
            changed,
            ..WidgetResponse::default()
        }
    }

    fn set_focused(&mut self, focused: bool) {
        let flags = &mut self.bar.state_mut().flags;
        if focused {
            flags.set(WidgetFlags::FOCUSED);
        } else {
            flags.clear(WidgetFlags::FOCUSED);
        }
        // Keypad focus always starts on the main knob.
        self.left_knob_focus = false;
    }
}

impl ValueStore for Slider {
    fn value(&self) -> i16 {
        Slider::value(self)
    }

    fn set_value(&mut self, value: i16, animate: bool) {
        Slider::set_value(self, value, animate);
    }

    fn start_value(&self) -> i16 {
        self.left_value()
    }

    fn set_start_value(&mut self, value: i16, animate: bool) {
        self.set_left_value(value, animate);
    }

    fn min_value(&self) -> i16 {
        Slider::min_value(self)
    }

    fn max_value(&self) -> i16 {
        Slider::max_value(self)
    }

    fn set_range(&mut self, min: i16, max: i16) {
        Slider::set_range(self, min, max);
    }

    fn anim_time(&self) -> u16 {
        Slider::anim_time(self)
    }

    fn set_anim_time(&mut self, ms: u16) {
        Slider::set_anim_time(self, ms);
    }
}

impl Widget for Slider {
    fn state(&self) -> &WidgetState {
        self.bar.state()
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        self.bar.state_mut()
    }

    fn set_rect(&mut self, rect: Rect) {
        self.bar.set_rect(rect);
        self.refresh_knob_areas();
    }

    fn handle_event(&mut self, event: &InputEvent) -> WidgetResponse {
        let enabled = self.state().is_enabled();

        match *event {
            InputEvent::Pressed { x, y } if enabled => self.press(x, y),
            InputEvent::Moved { x, y } => self.drag_to(x, y),
            InputEvent::Released { .. } | InputEvent::PressLost => self.release(),
            InputEvent::Key(key) if enabled => self.key(key),
            InputEvent::Focused => {
                self.set_focused(true);
                WidgetResponse::default()
            }
            InputEvent::Defocused => {
                self.set_focused(false);
                WidgetResponse::default()
            }
            InputEvent::Pressed { .. } | InputEvent::Key(_) => WidgetResponse::default(),
        }
    }

    fn tick(&mut self, dt_ms: u32) {
        if self.bar.is_animating() {
            self.bar.tick(dt_ms);
            self.refresh_knob_areas();
        }
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if !self.state().is_visible() {
            return;
        }
        self.bar.render(commands);

        let knob = &self.bar.style().knob;
        if self.slider_type() == SliderType::Range {
            push_styled_rect(commands, self.left_knob_area, knob);
        }
        push_styled_rect(commands, self.right_knob_area, knob);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: Rect = Rect::new(0.0, 0.0, 100.0, 10.0);

    fn slider() -> Slider {
        let mut slider = Slider::new(WidgetId::new(7));
        slider.set_rect(TRACK);
        slider
    }

    fn range_slider(left: i16, right: i16) -> Slider {
        let mut slider = slider();
        slider.set_range(0, 100);
        slider.set_type(SliderType::Range);
        slider.set_left_value(left, false);
        slider.set_value(right, false);
        slider
    }

    fn press(slider: &mut Slider, x: f32) -> WidgetResponse {
        slider.handle_event(&InputEvent::Pressed { x, y: 5.0 })
    }

    fn move_to(slider: &mut Slider, x: f32) -> WidgetResponse {
        slider.handle_event(&InputEvent::Moved { x, y: 5.0 })
    }

    #[test]
    fn test_type_round_trip() {
        let mut slider = slider();
        for slider_type in [SliderType::Range, SliderType::Symmetrical, SliderType::Normal] {
            slider.set_type(slider_type);
            assert_eq!(slider.slider_type(), slider_type);
        }
        assert_eq!(BarType::from(SliderType::Range), BarType::Custom);
    }

    #[test]
    fn test_knob_areas_follow_values() {
        let slider = range_slider(20, 80);

        // Knob side = track height + 2 * padding.
        assert_eq!(slider.right_knob_area(), Rect::new(71.0, -4.0, 18.0, 18.0));
        assert_eq!(slider.left_knob_area(), Rect::new(11.0, -4.0, 18.0, 18.0));
        assert_eq!(slider.knob_count(), 2);
    }

    #[test]
    fn test_single_knob_leaves_left_area_empty() {
        let mut slider = range_slider(20, 80);
        slider.set_type(SliderType::Normal);

        assert_eq!(slider.left_knob_area(), Rect::ZERO);
        assert_eq!(slider.knob_count(), 1);
    }

    #[test]
    fn test_press_selects_nearest_knob() {
        let mut slider = range_slider(20, 80);

        assert!(press(&mut slider, 30.0).drag_started);
        assert_eq!(slider.drag_state(), DragState::Dragging(Knob::Left));
        assert_eq!(slider.value_to_set(), Some(ValueSlot::Start));
        slider.handle_event(&InputEvent::Released { x: 30.0, y: 5.0 });

        press(&mut slider, 70.0);
        assert_eq!(slider.value_to_set(), Some(ValueSlot::Main));
    }

    #[test]
    fn test_left_value_set_before_value_is_kept() {
        let slider = range_slider(20, 80);

        assert_eq!((slider.left_value(), slider.value()), (20, 80));
        assert_eq!(slider.left_knob_area(), Rect::new(11.0, -4.0, 18.0, 18.0));
    }

    #[test]
    fn test_stacked_knobs_pull_apart_both_ways() {
        let mut slider = range_slider(50, 50);
        press(&mut slider, 45.0);
        assert_eq!(slider.drag_state(), DragState::Dragging(Knob::Left));
        move_to(&mut slider, 30.0);
        slider.handle_event(&InputEvent::Released { x: 30.0, y: 5.0 });
        assert_eq!((slider.left_value(), slider.value()), (30, 50));

        let mut slider = range_slider(50, 50);
        press(&mut slider, 55.0);
        assert_eq!(slider.drag_state(), DragState::Dragging(Knob::Right));

        let mut slider = range_slider(50, 50);
        press(&mut slider, 50.0);
        assert_eq!(slider.drag_state(), DragState::Dragging(Knob::Right));
    }

    #[test]
    fn test_equidistant_press_picks_right_knob() {
        let mut slider = range_slider(20, 80);
        press(&mut slider, 50.0);

        assert_eq!(slider.drag_state(), DragState::Dragging(Knob::Right));
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut slider = slider();
        let response = slider.handle_event(&InputEvent::Pressed { x: 50.0, y: 40.0 });

        assert_eq!(response, WidgetResponse::default());
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_press_on_knob_overhang_starts_drag() {
        let mut slider = slider();
        slider.set_value(50, false);

        // Above the track but inside the knob.
        slider.handle_event(&InputEvent::Pressed { x: 50.0, y: -2.0 });
        assert!(slider.is_dragging());
    }

    #[test]
    fn test_drag_writes_rounded_value() {
        let mut slider = slider();
        slider.set_range(0, 10);
        press(&mut slider, 5.0);

        assert!(move_to(&mut slider, 36.0).changed);
        assert_eq!(slider.value(), 4);

        assert!(move_to(&mut slider, 150.0).changed);
        assert_eq!(slider.value(), 10);

        assert!(move_to(&mut slider, -30.0).changed);
        assert_eq!(slider.value(), 0);
    }

    #[test]
    fn test_drag_is_immediate_even_with_anim_time() {
        let mut slider = slider();
        slider.set_anim_time(500);
        press(&mut slider, 1.0);
        move_to(&mut slider, 60.0);

        assert!(!slider.bar().is_animating());
        assert_eq!(slider.bar().displayed_value(), 60);
    }

    #[test]
    fn test_left_knob_cannot_pass_right() {
        let mut slider = range_slider(20, 80);
        press(&mut slider, 20.0);
        move_to(&mut slider, 90.0);

        assert_eq!(slider.left_value(), 80);
        assert_eq!(slider.value(), 80);
    }

    #[test]
    fn test_right_knob_cannot_pass_left() {
        let mut slider = range_slider(40, 60);
        press(&mut slider, 61.0);
        move_to(&mut slider, 5.0);

        assert_eq!(slider.value(), 40);
        assert_eq!(slider.left_value(), 40);
    }

    #[test]
    fn test_vertical_drag_maps_bottom_to_min() {
        let mut slider = Slider::new(WidgetId::new(3));
        slider.set_rect(Rect::new(0.0, 0.0, 10.0, 200.0));
        slider.set_value(0, false);

        slider.handle_event(&InputEvent::Pressed { x: 5.0, y: 199.0 });
        slider.handle_event(&InputEvent::Moved { x: 5.0, y: 50.0 });

        assert_eq!(slider.value(), 75);
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut slider = slider();
        slider.set_value(10, false);

        let response = move_to(&mut slider, 90.0);

        assert!(!response.changed);
        assert_eq!(slider.value(), 10);
    }

    #[test]
    fn test_press_lost_keeps_committed_value() {
        let mut slider = slider();
        press(&mut slider, 10.0);
        move_to(&mut slider, 35.0);

        let response = slider.handle_event(&InputEvent::PressLost);

        assert!(response.drag_ended);
        assert!(!slider.is_dragging());
        assert_eq!(slider.value_to_set(), None);
        assert_eq!(slider.value(), 35);
        assert!(!slider.state().is_pressed());
    }

    #[test]
    fn test_pressed_flag_tracks_drag() {
        let mut slider = slider();
        press(&mut slider, 10.0);
        assert!(slider.state().is_pressed());

        slider.handle_event(&InputEvent::Released { x: 10.0, y: 5.0 });
        assert!(!slider.state().is_pressed());
    }

    #[test]
    fn test_leaving_range_cancels_left_drag() {
        let mut slider = range_slider(20, 80);
        press(&mut slider, 20.0);

        let response = slider.set_type(SliderType::Normal);

        assert!(response.drag_ended);
        assert!(!slider.is_dragging());
        assert!(!slider.state().is_pressed());
    }

    #[test]
    fn test_type_change_keeps_right_drag() {
        let mut slider = range_slider(20, 80);
        press(&mut slider, 80.0);

        let response = slider.set_type(SliderType::Normal);

        assert_eq!(response, WidgetResponse::default());
        assert_eq!(slider.drag_state(), DragState::Dragging(Knob::Right));
    }

    #[test]
    fn test_keys_step_focused_knob() {
        let mut slider = range_slider(20, 80);

        assert!(slider.handle_event(&InputEvent::Key(Key::Right)).changed);
        assert_eq!((slider.left_value(), slider.value()), (20, 81));

        slider.handle_event(&InputEvent::Key(Key::Enter));
        assert!(slider.left_knob_focus());

        slider.handle_event(&InputEvent::Key(Key::Down));
        assert_eq!((slider.left_value(), slider.value()), (19, 81));
    }

    #[test]
    fn test_key_step_is_animated() {
        let mut slider = slider();
        slider.set_value(50, false);
        slider.handle_event(&InputEvent::Key(Key::Up));

        assert_eq!(slider.value(), 51);
        assert!(slider.bar().is_animating());

        slider.tick(u32::from(slider.anim_time()));
        assert!(!slider.bar().is_animating());
        assert_eq!(slider.right_knob_area().center().0, 51.0);
    }

    #[test]
    fn test_left_focus_step_respects_no_crossing() {
        let mut slider = range_slider(50, 50);
        slider.handle_event(&InputEvent::Key(Key::Enter));

        let response = slider.handle_event(&InputEvent::Key(Key::Right));

        assert!(!response.changed);
        assert_eq!(slider.left_value(), 50);
    }

    #[test]
    fn test_right_step_stops_at_left_knob() {
        let mut slider = range_slider(40, 40);

        let response = slider.handle_event(&InputEvent::Key(Key::Left));

        assert!(!response.changed);
        assert_eq!((slider.left_value(), slider.value()), (40, 40));
    }

    #[test]
    fn test_focus_toggle_needs_range() {
        let mut slider = slider();
        slider.handle_event(&InputEvent::Key(Key::Enter));
        assert!(!slider.left_knob_focus());
    }

    #[test]
    fn test_keys_ignored_while_dragging() {
        let mut slider = slider();
        slider.set_value(30, false);
        press(&mut slider, 30.0);

        slider.handle_event(&InputEvent::Key(Key::Right));
        assert_eq!(slider.value(), 30);
    }

    #[test]
    fn test_defocus_resets_knob_focus() {
        let mut slider = range_slider(20, 80);
        slider.handle_event(&InputEvent::Focused);
        slider.handle_event(&InputEvent::Key(Key::Enter));
        assert!(slider.left_knob_focus());
        assert!(slider.state().flags.has(WidgetFlags::FOCUSED));

        slider.handle_event(&InputEvent::Defocused);
        assert!(!slider.left_knob_focus());
        assert!(!slider.state().flags.has(WidgetFlags::FOCUSED));
    }

    #[test]
    fn test_disabled_slider_ignores_press_but_finishes_drag() {
        let mut slider = slider();
        press(&mut slider, 10.0);
        slider.state_mut().flags.clear(WidgetFlags::ENABLED);

        assert!(slider.handle_event(&InputEvent::PressLost).drag_ended);
        assert!(!press(&mut slider, 10.0).drag_started);
    }

    #[test]
    fn test_render_draws_one_knob_per_value() {
        let mut commands = Vec::new();
        range_slider(20, 80).render(&mut commands);
        let range_count = commands.len();

        commands.clear();
        let mut single = slider();
        single.set_value(50, false);
        single.render(&mut commands);

        assert_eq!(range_count, commands.len() + 1);
    }
}
