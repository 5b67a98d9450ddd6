//! Styling for bar and slider parts.
//!
//! Dark track, neon indicator, bright knobs.

use serde::Deserialize;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "u32")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Neon green (terminal style).
    pub const NEON_GREEN: Self = Self::rgba(0.2, 1.0, 0.3, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from hex value `0xRRGGBBAA`.
    #[must_use]
    pub fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::hex(hex)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Drawable parts of a slider.
///
/// The knob comes after the bar's own parts; a plain bar only has the first two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// Track background.
    Main,
    /// Filled span between the indicator's ends.
    Indicator,
    /// Draggable handle.
    Knob,
}

/// Style for one part.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartStyle {
    /// Fill color.
    pub background: Color,
    /// Border color.
    pub border: Color,
    /// Border width. Zero draws no outline.
    pub border_width: f32,
    /// Corner radius.
    pub corner_radius: f32,
}

impl Default for PartStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(0.05, 0.05, 0.08, 0.95),
            border: Color::TRANSPARENT,
            border_width: 0.0,
            corner_radius: 4.0,
        }
    }
}

/// Styles of every slider part plus knob geometry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    /// Track background.
    pub main: PartStyle,
    /// Indicator fill.
    pub indicator: PartStyle,
    /// Knob.
    pub knob: PartStyle,
    /// How far a knob sticks out past the track on each side.
    pub knob_padding: f32,
}

impl SliderStyle {
    /// Returns the style of a part.
    #[must_use]
    pub fn part(&self, part: Part) -> &PartStyle {
        match part {
            Part::Main => &self.main,
            Part::Indicator => &self.indicator,
            Part::Knob => &self.knob,
        }
    }
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            main: PartStyle {
                border: Color::rgba(0.2, 0.3, 0.2, 0.8),
                border_width: 1.0,
                ..PartStyle::default()
            },
            indicator: PartStyle {
                background: Color::NEON_GREEN,
                ..PartStyle::default()
            },
            knob: PartStyle {
                background: Color::WHITE,
                corner_radius: 8.0,
                ..PartStyle::default()
            },
            knob_padding: 4.0,
        }
    }
}
