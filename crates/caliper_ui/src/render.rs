//! Render commands emitted by widgets.
//!
//! Widgets describe what to draw; rasterising is the host's job.

use crate::layout::Rect;
use crate::style::{Color, PartStyle};

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
        /// Corner radius.
        corner_radius: f32,
    },
}

impl RenderCommand {
    /// Returns the bounds of the command.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { bounds, .. } | Self::RectOutline { bounds, .. } => *bounds,
        }
    }
}

/// Pushes the fill and, if it has one, the outline of a styled box.
pub fn push_styled_rect(commands: &mut Vec<RenderCommand>, bounds: Rect, style: &PartStyle) {
    if bounds.is_empty() {
        return;
    }

    commands.push(RenderCommand::Rect {
        bounds,
        color: style.background,
        corner_radius: style.corner_radius,
    });

    if style.border_width > 0.0 {
        commands.push(RenderCommand::RectOutline {
            bounds,
            color: style.border,
            width: style.border_width,
            corner_radius: style.corner_radius,
        });
    }
}
