//! Swipe-driven cyclic selection.
//!
//! Each frame with a detected hand compares the index fingertip's x
//! against the previous frame's. A leftward jump larger than the swipe
//! margin advances the selection one step around Earth → Moon → Mars →
//! Earth. Rightward motion never advances and there is no reverse step.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

use super::landmarks::LandmarkFrame;
use crate::options::GestureOptions;
use crate::target::Target;

/// Leftward fingertip travel (pixels) that counts as a swipe.
pub const SWIPE_MARGIN: f32 = 100.0;
/// Cooldown window started by a swipe, in milliseconds.
pub const SWIPE_COOLDOWN_MS: u64 = 2000;
/// Cooldown window started by a swipe.
pub const SWIPE_COOLDOWN: Duration = Duration::from_millis(SWIPE_COOLDOWN_MS);

/// What the cooldown window does after a swipe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CooldownMode {
    /// Swipes inside the window are ignored; the fingertip is still
    /// tracked so the first frame after the window compares against a
    /// fresh position.
    #[default]
    Deadline,
    /// The window is recorded but never consulted, so swipes can re-trigger
    /// on consecutive frames. Matches the behavior of the first version of
    /// this scene, whose delayed position reset was always overwritten by
    /// the same frame's update.
    Legacy,
}

/// Session-long selection state driven by swipes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureCycleState {
    /// Currently selected target.
    pub selected: Target,
    /// Fingertip x seen on the last frame with a hand.
    pub previous_x: f32,
    /// End of the current cooldown window, if one is running.
    pub cooldown_until: Option<Instant>,
}

impl Default for GestureCycleState {
    fn default() -> Self {
        Self {
            selected: Target::Earth,
            previous_x: 0.0,
            cooldown_until: None,
        }
    }
}

/// Result of feeding one frame to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No hand: nothing changed.
    Idle,
    /// Hand seen, no swipe; `previous_x` updated.
    Tracked,
    /// A swipe was detected inside the cooldown window and ignored.
    Suppressed,
    /// A swipe advanced the selection.
    Advanced {
        /// Selection before the swipe.
        from: Target,
        /// Selection after the swipe.
        to: Target,
    },
}

/// The swipe-to-cycle state machine.
#[derive(Debug, Clone)]
pub struct GestureCycle {
    state: GestureCycleState,
    swipe_margin: f32,
    cooldown: Duration,
    mode: CooldownMode,
}

impl GestureCycle {
    /// State machine configured from options, starting at Earth.
    #[must_use]
    pub fn new(options: &GestureOptions) -> Self {
        Self {
            state: GestureCycleState::default(),
            swipe_margin: options.swipe_margin,
            cooldown: Duration::from_millis(options.cooldown_ms),
            mode: options.cooldown_mode,
        }
    }

    /// Start from an explicit state.
    #[must_use]
    pub fn with_state(mut self, state: GestureCycleState) -> Self {
        self.state = state;
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GestureCycleState {
        &self.state
    }

    /// Currently selected target.
    #[must_use]
    pub fn selected(&self) -> Target {
        self.state.selected
    }

    /// Configured cooldown behavior.
    #[must_use]
    pub fn mode(&self) -> CooldownMode {
        self.mode
    }

    /// Feed one landmark frame.
    pub fn update(&mut self, frame: &LandmarkFrame, now: Instant) -> CycleOutcome {
        match frame.tracked_x() {
            Some(x) => self.observe_x(x, now),
            None => CycleOutcome::Idle,
        }
    }

    /// Feed one fingertip x coordinate.
    pub fn observe_x(&mut self, x: f32, now: Instant) -> CycleOutcome {
        let cooling = self.cooldown_active(now);
        let swiped = x + self.swipe_margin < self.state.previous_x;
        self.state.previous_x = x;

        if !swiped {
            return CycleOutcome::Tracked;
        }
        if cooling && self.mode == CooldownMode::Deadline {
            log::debug!("swipe at x={x:.1} ignored during cooldown");
            return CycleOutcome::Suppressed;
        }

        let from = self.state.selected;
        let to = from.next_in_cycle();
        self.state.selected = to;
        self.state.cooldown_until = Some(now + self.cooldown);
        log::info!("swipe: {from} -> {to}");
        CycleOutcome::Advanced { from, to }
    }

    /// Whether a cooldown window covers `now`. Expired windows are cleared.
    fn cooldown_active(&mut self, now: Instant) -> bool {
        match self.state.cooldown_until {
            Some(until) if now < until => true,
            Some(_) => {
                self.state.cooldown_until = None;
                false
            }
            None => false,
        }
    }
}

impl Default for GestureCycle {
    fn default() -> Self {
        Self::new(&GestureOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::landmarks::hand_with_fingertip_x;

    fn frame_at(x: f32) -> LandmarkFrame {
        LandmarkFrame::single(hand_with_fingertip_x(x))
    }

    fn legacy() -> GestureCycle {
        GestureCycle::new(&GestureOptions {
            cooldown_mode: CooldownMode::Legacy,
            ..GestureOptions::default()
        })
    }

    fn at(previous_x: f32) -> GestureCycleState {
        GestureCycleState {
            previous_x,
            ..GestureCycleState::default()
        }
    }

    #[test]
    fn starts_at_earth_with_zero_previous_x() {
        let cycle = GestureCycle::default();
        assert_eq!(cycle.selected(), Target::Earth);
        assert_eq!(cycle.state().previous_x, 0.0);
        assert_eq!(cycle.state().cooldown_until, None);
    }

    #[test]
    fn swipe_then_small_move_scenario() {
        let t0 = Instant::now();
        let mut cycle = GestureCycle::default().with_state(at(500.0));

        // 350 + 100 = 450 < 500
        let out = cycle.update(&frame_at(350.0), t0);
        assert_eq!(
            out,
            CycleOutcome::Advanced {
                from: Target::Earth,
                to: Target::Moon
            }
        );
        assert_eq!(cycle.state().previous_x, 350.0);

        // 340 + 100 = 440 >= 350
        let out = cycle.update(&frame_at(340.0), t0 + Duration::from_millis(16));
        assert_eq!(out, CycleOutcome::Tracked);
        assert_eq!(cycle.selected(), Target::Moon);
        assert_eq!(cycle.state().previous_x, 340.0);
    }

    #[test]
    fn three_swipes_return_to_earth() {
        let mut cycle = GestureCycle::default().with_state(at(1000.0));
        let mut now = Instant::now();
        let mut visited = Vec::new();
        for x in [800.0, 600.0, 400.0] {
            let _ = cycle.update(&frame_at(x), now);
            visited.push(cycle.selected());
            now += SWIPE_COOLDOWN + Duration::from_millis(1);
        }
        assert_eq!(visited, vec![Target::Moon, Target::Mars, Target::Earth]);
    }

    #[test]
    fn margin_boundary_is_not_a_swipe() {
        let mut cycle = GestureCycle::default().with_state(at(500.0));
        // 400 + 100 == 500: not strictly less
        assert_eq!(cycle.observe_x(400.0, Instant::now()), CycleOutcome::Tracked);
        assert_eq!(cycle.selected(), Target::Earth);
        assert_eq!(cycle.state().previous_x, 400.0);
    }

    #[test]
    fn rightward_motion_never_advances() {
        let mut cycle = GestureCycle::default().with_state(at(100.0));
        let now = Instant::now();
        for x in [300.0, 700.0, 1200.0] {
            assert_eq!(cycle.observe_x(x, now), CycleOutcome::Tracked);
        }
        assert_eq!(cycle.selected(), Target::Earth);
        assert_eq!(cycle.state().previous_x, 1200.0);
    }

    #[test]
    fn missing_hand_changes_nothing() {
        let mut cycle = GestureCycle::default().with_state(at(640.0));
        let before = *cycle.state();
        assert_eq!(cycle.update(&LandmarkFrame::empty(), Instant::now()), CycleOutcome::Idle);
        assert_eq!(*cycle.state(), before);
    }

    #[test]
    fn first_frame_from_zero_never_swipes() {
        let mut cycle = GestureCycle::default();
        assert_eq!(cycle.observe_x(15.0, Instant::now()), CycleOutcome::Tracked);
        assert_eq!(cycle.selected(), Target::Earth);
    }

    #[test]
    fn deadline_mode_suppresses_swipes_inside_window() {
        let t0 = Instant::now();
        let mut cycle = GestureCycle::default().with_state(at(900.0));
        let _ = cycle.observe_x(700.0, t0);
        assert_eq!(cycle.selected(), Target::Moon);
        assert_eq!(cycle.state().cooldown_until, Some(t0 + SWIPE_COOLDOWN));

        let out = cycle.observe_x(500.0, t0 + Duration::from_millis(500));
        assert_eq!(out, CycleOutcome::Suppressed);
        assert_eq!(cycle.selected(), Target::Moon);
        // Position still tracked while cooling down
        assert_eq!(cycle.state().previous_x, 500.0);

        let out = cycle.observe_x(300.0, t0 + SWIPE_COOLDOWN);
        assert_eq!(
            out,
            CycleOutcome::Advanced {
                from: Target::Moon,
                to: Target::Mars
            }
        );
    }

    #[test]
    fn legacy_mode_retriggers_inside_window() {
        // Behavior difference from the default: the window does not block.
        let t0 = Instant::now();
        let mut cycle = legacy().with_state(at(900.0));
        let _ = cycle.observe_x(700.0, t0);
        let out = cycle.observe_x(500.0, t0 + Duration::from_millis(16));
        assert_eq!(
            out,
            CycleOutcome::Advanced {
                from: Target::Moon,
                to: Target::Mars
            }
        );
        assert_eq!(cycle.state().previous_x, 500.0);
        assert!(cycle.state().cooldown_until.is_some());
    }

    #[test]
    fn expired_window_is_cleared_on_next_frame() {
        let t0 = Instant::now();
        let mut cycle = GestureCycle::default().with_state(at(900.0));
        let _ = cycle.observe_x(700.0, t0);
        let _ = cycle.observe_x(710.0, t0 + SWIPE_COOLDOWN + Duration::from_millis(1));
        assert_eq!(cycle.state().cooldown_until, None);
    }

    #[test]
    fn custom_margin() {
        let mut cycle = GestureCycle::new(&GestureOptions {
            swipe_margin: 20.0,
            ..GestureOptions::default()
        })
        .with_state(at(100.0));
        assert!(matches!(
            cycle.observe_x(75.0, Instant::now()),
            CycleOutcome::Advanced { .. }
        ));
    }
}
