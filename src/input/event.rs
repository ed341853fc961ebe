/// Platform-agnostic input events.
///
/// These are fed into a [`HoverRouter`](super::HoverRouter), which turns
/// cursor motion into hover state and primary-button releases into clicks.
///
/// # Example
///
/// ```ignore
/// let action = session.handle_input(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute position (same units as the viewport).
    CursorMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

impl InputEvent {
    /// Whether this event completes a primary-button click.
    #[must_use]
    pub fn is_click(&self) -> bool {
        matches!(
            self,
            Self::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            }
        )
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Back, forward, or any extra button.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => Self::Other,
        }
    }
}
