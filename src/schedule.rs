//! Cooperative per-frame task scheduling.
//!
//! Everything that must run once per rendered frame is a [`FrameTask`]
//! registered on a [`FrameScheduler`]. Tasks run in registration order on
//! the rendering thread and must not block; long-running work is polled.

use web_time::Instant;

use crate::controller::InteractionController;
use crate::feedback::TargetTransforms;
use crate::util::frame_timing::FrameTiming;

/// State a task may touch during a frame.
pub struct FrameContext<'a> {
    /// Session interaction state.
    pub controller: &'a mut InteractionController,
    /// Transform sink of the rendered bodies.
    pub transforms: &'a mut dyn TargetTransforms,
}

/// Whether a task wants to run again next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Keep the task scheduled.
    Continue,
    /// Drop the task.
    Finished,
}

/// Work executed once per frame.
pub trait FrameTask {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Run one frame's worth of work.
    fn on_frame(&mut self, ctx: &mut FrameContext<'_>, now: Instant) -> TaskStatus;
}

/// Applies hover scale and constant spin every frame.
#[derive(Debug, Default)]
pub struct FeedbackTask;

impl FrameTask for FeedbackTask {
    fn name(&self) -> &'static str {
        "feedback"
    }

    fn on_frame(&mut self, ctx: &mut FrameContext<'_>, _now: Instant) -> TaskStatus {
        ctx.controller.apply_feedback(&mut *ctx.transforms);
        TaskStatus::Continue
    }
}

/// Runs registered tasks each frame.
#[derive(Default)]
pub struct FrameScheduler {
    tasks: Vec<Box<dyn FrameTask>>,
    frames: u64,
    timing: FrameTiming,
}

impl FrameScheduler {
    /// Empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task; it first runs on the next tick.
    pub fn register(&mut self, task: Box<dyn FrameTask>) {
        log::debug!("frame task registered: {}", task.name());
        self.tasks.push(task);
    }

    /// Run every task once, dropping the ones that finish.
    pub fn tick(&mut self, ctx: &mut FrameContext<'_>, now: Instant) {
        self.tasks.retain_mut(|task| match task.on_frame(ctx, now) {
            TaskStatus::Continue => true,
            TaskStatus::Finished => {
                log::debug!("frame task finished: {}", task.name());
                false
            }
        });
        self.frames += 1;
        self.timing.end_frame(now);
    }

    /// Names of the scheduled tasks, in run order.
    #[must_use]
    pub fn task_names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    /// Number of scheduled tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Frames ticked so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }
}
