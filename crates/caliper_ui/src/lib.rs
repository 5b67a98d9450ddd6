//! # CALIPER UI
//!
//! Bar and slider widgets for pointer, keypad and encoder input:
//! - A bar stores a value, a start value and bounds, and animates changes
//! - A slider is a bar with one knob, or two in range mode
//! - Dragging maps the pointer linearly onto the value range
//! - Encoders switch between the two knobs of a range slider
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       SLIDER PIPELINE                       │
//! ├────────────────────────────────────────────────────────────┤
//! │  Device input → InputEvent → Slider → Bar value store      │
//! │       ↓              ↓          ↓            ↓             │
//! │  InputState    arrival order  knob pick   clamp + animate  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use caliper_ui::{InputEvent, Rect, Slider, SliderType, Widget, WidgetTree};
//!
//! let mut tree = WidgetTree::new();
//! let mut slider = Slider::create(&mut tree, None).unwrap();
//! slider.set_rect(Rect::new(0.0, 0.0, 100.0, 10.0));
//! slider.set_range(0, 100);
//! slider.set_type(SliderType::Range);
//! slider.set_left_value(20, false);
//! slider.set_value(80, false);
//!
//! slider.handle_event(&InputEvent::Pressed { x: 20.0, y: 5.0 });
//! slider.handle_event(&InputEvent::Moved { x: 90.0, y: 5.0 });
//! slider.handle_event(&InputEvent::Released { x: 90.0, y: 5.0 });
//!
//! // The left knob stops at the right one.
//! assert_eq!(slider.left_value(), 80);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

#[cfg(all(feature = "slider", not(feature = "bar")))]
compile_error!("caliper_ui: the slider widget requires the bar widget. Enable the `bar` feature.");

pub mod animation;
#[cfg(feature = "slider")]
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use animation::{Easing, ValueAnimation};
#[cfg(feature = "slider")]
pub use config::SliderConfig;
pub use error::{UiError, UiResult};
pub use input::{InputEvent, InputState, Key, MouseButton};
pub use layout::{Direction, Rect};
pub use render::RenderCommand;
pub use style::{Color, Part, PartStyle, SliderStyle};
#[cfg(feature = "bar")]
pub use widget::{Bar, BarType, ValueStore};
#[cfg(feature = "slider")]
pub use widget::{DragState, Knob, Slider, SliderType, ValueSlot};
pub use widget::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState, WidgetTree};
