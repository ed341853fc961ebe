//! Session interaction state.
//!
//! Two selection channels live side by side and never touch each other:
//! the pointer hover state (which drives visual feedback and clicks) and
//! the gesture cycle selection (which only swipes change). Neither feeds
//! the other.

use web_time::Instant;

use crate::feedback::{FeedbackAdapter, TargetTransforms};
use crate::gesture::{CycleOutcome, GestureCycle, GestureCycleState, LandmarkFrame};
use crate::input::{HoverRouter, HoverState, InputEvent, PointerContext};
use crate::navigation::NavigationAction;
use crate::options::Options;
use crate::target::Target;

/// Lifecycle of the gesture subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GestureStatus {
    /// Camera and model setup has not finished.
    #[default]
    Pending,
    /// Frames are being estimated.
    Active,
    /// Off for the rest of the session.
    Disabled {
        /// Why gestures were turned off.
        reason: String,
    },
}

impl GestureStatus {
    /// Whether gesture input is permanently off.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled { .. })
    }
}

/// Owns hover, gesture cycle, and feedback state for one session.
#[derive(Debug)]
pub struct InteractionController {
    hover: HoverRouter,
    cycle: GestureCycle,
    feedback: FeedbackAdapter,
    gesture_status: GestureStatus,
}

impl InteractionController {
    /// Fresh state: nothing hovered, Earth selected.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let gesture_status = if options.gesture.enabled {
            GestureStatus::Pending
        } else {
            GestureStatus::Disabled {
                reason: "disabled in options".into(),
            }
        };
        Self {
            hover: HoverRouter::new(),
            cycle: GestureCycle::new(&options.gesture),
            feedback: FeedbackAdapter::new(&options.feedback),
            gesture_status,
        }
    }

    /// Current hover state.
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    /// Target chosen by the gesture cycle.
    #[must_use]
    pub fn selected_target(&self) -> Target {
        self.cycle.selected()
    }

    /// Full gesture cycle state.
    #[must_use]
    pub fn cycle_state(&self) -> &GestureCycleState {
        self.cycle.state()
    }

    /// Gesture subsystem status.
    #[must_use]
    pub fn gesture_status(&self) -> &GestureStatus {
        &self.gesture_status
    }

    /// Route a pointer event. Returns the navigation a click produced.
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        ctx: &PointerContext<'_>,
    ) -> Option<NavigationAction> {
        let action = self.hover.handle_event(event, ctx);
        if let Some(action) = &action {
            log::info!("clicked {}", action.target());
        }
        action
    }

    /// Issue this frame's scale and rotation requests.
    pub fn apply_feedback(&self, transforms: &mut dyn TargetTransforms) {
        self.feedback.apply(self.hover.state(), transforms);
    }

    /// Feed one estimated landmark frame to the gesture cycle.
    pub fn apply_landmarks(&mut self, frame: &LandmarkFrame, now: Instant) -> CycleOutcome {
        if self.gesture_status.is_disabled() {
            return CycleOutcome::Idle;
        }
        self.cycle.update(frame, now)
    }

    /// Mark gesture setup as complete.
    pub fn enable_gestures(&mut self) {
        if !self.gesture_status.is_disabled() {
            self.gesture_status = GestureStatus::Active;
        }
    }

    /// Turn gestures off for the rest of the session.
    pub fn disable_gestures(&mut self, reason: impl Into<String>) {
        self.gesture_status = GestureStatus::Disabled {
            reason: reason.into(),
        };
    }
}
