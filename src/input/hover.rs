//! Pointer hover routing and click handling.
//!
//! Hover is a projection of the latest pointer position: every cursor
//! move re-casts a ray and replaces the state outright. A click reads the
//! stored state and never re-casts, so a click is only honored for a
//! position whose hover update has already run.

use glam::Vec2;

use super::event::InputEvent;
use crate::camera::{Camera, Viewport};
use crate::navigation::NavigationAction;
use crate::picking::{nearest_target, HitTester};
use crate::target::Target;

/// Which target, if any, is under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoverState {
    /// Pointer is over no target.
    #[default]
    None,
    /// Pointer is over this target.
    Over(Target),
}

impl HoverState {
    /// The hovered target, if any.
    #[must_use]
    pub fn target(self) -> Option<Target> {
        match self {
            Self::None => None,
            Self::Over(t) => Some(t),
        }
    }

    /// Whether `target` is the hovered one.
    #[must_use]
    pub fn is_over(self, target: Target) -> bool {
        self == Self::Over(target)
    }
}

impl From<Option<Target>> for HoverState {
    fn from(target: Option<Target>) -> Self {
        target.map_or(Self::None, Self::Over)
    }
}

/// Everything needed to turn a pointer position into a hover state.
pub struct PointerContext<'a> {
    /// Canvas rectangle in pointer coordinates.
    pub viewport: Viewport,
    /// Camera the ray is cast from.
    pub camera: &'a Camera,
    /// Hit geometry of the targets.
    pub hits: &'a dyn HitTester,
}

/// Hover state for a pointer position. Pure: equal inputs give equal
/// results.
#[must_use]
pub fn resolve_hover(pointer: Vec2, ctx: &PointerContext<'_>) -> HoverState {
    let Some(ndc) = ctx.viewport.to_ndc(pointer) else {
        return HoverState::None;
    };
    let ray = ctx.camera.ray_through(ndc);
    nearest_target(&ctx.hits.intersect(&ray)).into()
}

/// Owns the current hover state and answers clicks from it.
#[derive(Debug, Default)]
pub struct HoverRouter {
    state: HoverState,
    pointer: Option<Vec2>,
}

impl HoverRouter {
    /// Router with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hover state.
    #[must_use]
    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Last pointer position seen, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Recompute hover for a new pointer position.
    pub fn update(&mut self, pointer: Vec2, ctx: &PointerContext<'_>) -> HoverState {
        let next = resolve_hover(pointer, ctx);
        if next != self.state {
            log::debug!("hover: {:?} -> {:?}", self.state, next);
        }
        self.pointer = Some(pointer);
        self.state = next;
        next
    }

    /// Navigation for a click at the current hover state.
    #[must_use]
    pub fn click(&self) -> Option<NavigationAction> {
        self.state.target().map(NavigationAction::new)
    }

    /// Route one input event. Returns a navigation action for clicks on a
    /// hovered target.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        ctx: &PointerContext<'_>,
    ) -> Option<NavigationAction> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let _ = self.update(Vec2::new(x, y), ctx);
                None
            }
            InputEvent::MouseButton { .. } if event.is_click() => self.click(),
            InputEvent::MouseButton { .. } => None,
        }
    }
}
