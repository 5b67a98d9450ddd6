//! Input handling for UI.
//!
//! Raw device input (pointer position, buttons, keys) is turned into an
//! ordered queue of [`InputEvent`]s. Widgets consume those events one at a
//! time, so a later event always sees the effects of every earlier one.

#![allow(missing_docs)]

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button. The only one that drives widgets.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Keypad / encoder key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Enter/Return key. Encoders report their click as Enter.
    Enter,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

impl Key {
    /// Step direction for value-adjusting keys: +1, -1 or `None`.
    #[must_use]
    pub const fn step(self) -> Option<i16> {
        match self {
            Self::Right | Self::Up => Some(1),
            Self::Left | Self::Down => Some(-1),
            Self::Escape | Self::Enter => None,
        }
    }
}

/// A single input event, delivered in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer went down.
    Pressed { x: f32, y: f32 },
    /// Pointer moved while held down.
    Moved { x: f32, y: f32 },
    /// Pointer went up.
    Released { x: f32, y: f32 },
    /// The press was taken away (window lost focus, gesture stolen...).
    PressLost,
    /// Keypad or encoder key.
    Key(Key),
    /// Widget gained keypad/encoder focus.
    Focused,
    /// Widget lost keypad/encoder focus.
    Defocused,
}

/// Collects raw device input into an event queue.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current mouse X position.
    pub mouse_x: f32,
    /// Current mouse Y position.
    pub mouse_y: f32,
    /// Mouse buttons currently held.
    buttons_down: u8,
    /// Keys currently held.
    keys_down: Vec<Key>,
    /// Events not yet consumed.
    events: Vec<InputEvent>,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates mouse position. Emits a move only while the left button is held.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        let moved = (x - self.mouse_x).abs() > f32::EPSILON || (y - self.mouse_y).abs() > f32::EPSILON;
        self.mouse_x = x;
        self.mouse_y = y;

        if moved && self.mouse_down(MouseButton::Left) {
            self.events.push(InputEvent::Moved { x, y });
        }
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        let was_down = self.buttons_down & mask != 0;
        self.buttons_down |= mask;

        if button == MouseButton::Left && !was_down {
            self.events.push(InputEvent::Pressed {
                x: self.mouse_x,
                y: self.mouse_y,
            });
        }
    }

    /// Records a mouse button release.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        let was_down = self.buttons_down & mask != 0;
        self.buttons_down &= !mask;

        if button == MouseButton::Left && was_down {
            self.events.push(InputEvent::Released {
                x: self.mouse_x,
                y: self.mouse_y,
            });
        }
    }

    /// Drops the pointer without a release (e.g. the window lost focus).
    pub fn pointer_lost(&mut self) {
        if self.mouse_down(MouseButton::Left) {
            self.events.push(InputEvent::PressLost);
        }
        self.buttons_down = 0;
    }

    /// Records a key press. Auto-repeat of a held key is ignored.
    pub fn key_down(&mut self, key: Key) {
        if !self.keys_down.contains(&key) {
            self.keys_down.push(key);
            self.events.push(InputEvent::Key(key));
        }
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: Key) {
        self.keys_down.retain(|&k| k != key);
    }

    /// Queues a focus change coming from the focus manager.
    pub fn focus(&mut self, focused: bool) {
        self.events.push(if focused {
            InputEvent::Focused
        } else {
            InputEvent::Defocused
        });
    }

    /// Returns true if the mouse button is currently held.
    #[must_use]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        (self.buttons_down & Self::button_mask(button)) != 0
    }

    /// Returns true if the key is currently held.
    #[must_use]
    pub fn key_held(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Number of queued events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// Takes all queued events in arrival order.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.events.drain(..)
    }

    /// Returns the bit mask for a button.
    const fn button_mask(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 4,
        }
    }
}
