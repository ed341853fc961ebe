//! The gesture frame task.
//!
//! Keeps at most one estimation in flight. Each frame polls it once with a
//! no-op waker; a resolved estimate is fed to the cycle state machine and
//! the next estimate starts on the following frame. The render path never
//! waits on the model.

use std::task::{Context, Poll};

use futures::future::LocalBoxFuture;
use futures::task::noop_waker_ref;
use futures::FutureExt;
use web_time::Instant;

use super::landmarks::LandmarkFrame;
use super::source::{GestureError, HandEstimator};
use crate::schedule::{FrameContext, FrameTask, TaskStatus};

type Estimate = LocalBoxFuture<'static, Result<LandmarkFrame, GestureError>>;

/// Drives a [`HandEstimator`] from the frame scheduler.
pub struct GestureTask<E> {
    estimator: E,
    in_flight: Option<Estimate>,
    estimates: u64,
}

impl<E: HandEstimator> GestureTask<E> {
    /// Task that will start its first estimate on the next frame.
    #[must_use]
    pub fn new(estimator: E) -> Self {
        Self {
            estimator,
            in_flight: None,
            estimates: 0,
        }
    }

    /// Whether an estimate is outstanding.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Estimates resolved so far.
    #[must_use]
    pub fn estimates(&self) -> u64 {
        self.estimates
    }

    /// Start an estimate if none is outstanding, then poll it once.
    pub fn poll_frame(&mut self) -> Poll<Result<LandmarkFrame, GestureError>> {
        let estimator = &mut self.estimator;
        let fut = self
            .in_flight
            .get_or_insert_with(|| estimator.estimate_hands());

        let mut cx = Context::from_waker(noop_waker_ref());
        let poll = fut.poll_unpin(&mut cx);
        if poll.is_ready() {
            self.in_flight = None;
            self.estimates += 1;
        }
        poll
    }
}

impl<E: HandEstimator> FrameTask for GestureTask<E> {
    fn name(&self) -> &'static str {
        "gesture"
    }

    fn on_frame(&mut self, ctx: &mut FrameContext<'_>, now: Instant) -> TaskStatus {
        if ctx.controller.gesture_status().is_disabled() {
            return TaskStatus::Finished;
        }
        match self.poll_frame() {
            Poll::Pending => TaskStatus::Continue,
            Poll::Ready(Ok(frame)) => {
                let _ = ctx.controller.apply_landmarks(&frame, now);
                TaskStatus::Continue
            }
            Poll::Ready(Err(e)) => {
                log::error!("{e}; gesture input stopped");
                ctx.controller.disable_gestures(e.to_string());
                TaskStatus::Finished
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use futures::channel::oneshot;

    use super::*;
    use crate::controller::InteractionController;
    use crate::gesture::landmarks::hand_with_fingertip_x;
    use crate::options::Options;
    use crate::scene::SceneBodies;
    use crate::target::Target;

    type Reply = Result<LandmarkFrame, GestureError>;

    /// Estimator whose answers are delivered through oneshot channels.
    #[derive(Default)]
    struct ChannelEstimator {
        pending: VecDeque<oneshot::Receiver<Reply>>,
        started: usize,
    }

    impl ChannelEstimator {
        fn push(&mut self) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.pending.push_back(rx);
            tx
        }
    }

    impl HandEstimator for ChannelEstimator {
        fn estimate_hands(&mut self) -> LocalBoxFuture<'static, Reply> {
            self.started += 1;
            match self.pending.pop_front() {
                Some(rx) => rx
                    .map(|r| r.unwrap_or_else(|_| Err(GestureError::Estimation("dropped".into()))))
                    .boxed_local(),
                None => futures::future::pending().boxed_local(),
            }
        }
    }

    fn frame_at(x: f32) -> LandmarkFrame {
        LandmarkFrame::single(hand_with_fingertip_x(x))
    }

    fn tick<E: HandEstimator>(
        task: &mut GestureTask<E>,
        controller: &mut InteractionController,
        now: Instant,
    ) -> TaskStatus {
        let mut scene = SceneBodies::empty();
        let mut ctx = FrameContext {
            controller,
            transforms: &mut scene,
        };
        task.on_frame(&mut ctx, now)
    }

    #[test]
    fn pending_estimate_is_polled_not_restarted() {
        let mut est = ChannelEstimator::default();
        let tx = est.push();
        let mut task = GestureTask::new(est);
        let mut controller = InteractionController::new(&Options::default());
        let now = Instant::now();

        assert_eq!(tick(&mut task, &mut controller, now), TaskStatus::Continue);
        assert_eq!(tick(&mut task, &mut controller, now), TaskStatus::Continue);
        assert!(task.is_in_flight());
        assert_eq!(task.estimator.started, 1);

        tx.send(Ok(frame_at(300.0))).unwrap();
        assert_eq!(tick(&mut task, &mut controller, now), TaskStatus::Continue);
        assert!(!task.is_in_flight());
        assert_eq!(task.estimates(), 1);
        assert_eq!(controller.cycle_state().previous_x, 300.0);
    }

    #[test]
    fn resolved_estimates_drive_the_cycle() {
        let mut est = ChannelEstimator::default();
        let senders: Vec<_> = (0..2).map(|_| est.push()).collect();
        let mut task = GestureTask::new(est);
        let mut controller = InteractionController::new(&Options::default());
        let now = Instant::now();

        for (tx, x) in senders.into_iter().zip([600.0, 450.0]) {
            tx.send(Ok(frame_at(x))).unwrap();
            let _ = tick(&mut task, &mut controller, now);
        }
        assert_eq!(controller.selected_target(), Target::Moon);
        assert_eq!(task.estimator.started, 2);
    }

    #[test]
    fn estimation_error_finishes_and_disables() {
        let mut est = ChannelEstimator::default();
        let tx = est.push();
        let mut task = GestureTask::new(est);
        let mut controller = InteractionController::new(&Options::default());

        tx.send(Err(GestureError::Estimation("backend lost".into())))
            .unwrap();
        assert_eq!(
            tick(&mut task, &mut controller, Instant::now()),
            TaskStatus::Finished
        );
        assert!(controller.gesture_status().is_disabled());
    }

    #[test]
    fn empty_frames_leave_state_alone() {
        let mut est = ChannelEstimator::default();
        let tx = est.push();
        let mut task = GestureTask::new(est);
        let mut controller = InteractionController::new(&Options::default());
        let before = *controller.cycle_state();

        tx.send(Ok(LandmarkFrame::empty())).unwrap();
        let _ = tick(&mut task, &mut controller, Instant::now());
        assert_eq!(*controller.cycle_state(), before);
    }
}
