//! Viewing camera and canvas mapping.
//!
//! Provides the fixed perspective camera hover rays are cast from, and the
//! viewport that maps pointer positions into normalized device coordinates.

/// Core camera struct, viewport, and ray unprojection.
pub mod core;

pub use self::core::{Camera, Viewport};
