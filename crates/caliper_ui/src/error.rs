//! # UI Error Types
//!
//! Widget setters never fail; they clamp. Errors only come from
//! configuration loading and from widget-tree bookkeeping.

use thiserror::Error;

/// Errors that can occur while building or configuring widgets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Configuration parsed but describes an impossible widget.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text is not valid TOML for the expected schema.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Configuration file could not be read.
    #[error("cannot read config {path}: {reason}")]
    ConfigIo {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// A widget id is not registered in the tree.
    #[error("widget not found: {0}")]
    WidgetNotFound(u64),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
