//! Crate-level error types.

use std::fmt;

use crate::gesture::GestureError;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Landmark recording could not be parsed.
    Recording(String),
    /// Gesture subsystem failure (camera, model, or estimation).
    Gesture(GestureError),
    /// Failed to open a navigation target.
    Navigation(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Recording(msg) => {
                write!(f, "landmark recording error: {msg}")
            }
            Self::Gesture(e) => write!(f, "gesture error: {e}"),
            Self::Navigation(msg) => write!(f, "navigation error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Gesture(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GestureError> for OrreryError {
    fn from(e: GestureError) -> Self {
        Self::Gesture(e)
    }
}
