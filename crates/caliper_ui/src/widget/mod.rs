//! Widget system for UI components.
//!
//! A slider is a bar with knobs; the bar owns the values.

mod core;
#[cfg(feature = "bar")]
mod bar;
#[cfg(feature = "slider")]
mod slider;
mod tree;

pub use core::{Widget, WidgetId, WidgetState, WidgetFlags, WidgetResponse};
#[cfg(feature = "bar")]
pub use bar::{step_start_value, step_value, Bar, BarType, ValueStore};
#[cfg(feature = "slider")]
pub use slider::{DragState, Knob, Slider, SliderType, ValueSlot};
pub use tree::WidgetTree;
