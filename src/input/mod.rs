//! Input handling: event types and the hover router that converts pointer
//! events into hover state and navigation actions.

/// Platform-agnostic input events.
pub mod event;
/// Hover state, pointer-to-target resolution, and click routing.
pub mod hover;

pub use event::{InputEvent, MouseButton};
pub use hover::{resolve_hover, HoverRouter, HoverState, PointerContext};
