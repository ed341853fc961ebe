//! One interactive session: scene, camera, controller, and frame loop.
//!
//! A host (the winit viewer, or a test) forwards pointer events to
//! [`Session::handle_input`] and calls [`Session::frame`] once per
//! rendered frame. Gesture input is attached later, once its asynchronous
//! setup has finished.

use web_time::Instant;

use crate::camera::{Camera, Viewport};
use crate::controller::{GestureStatus, InteractionController};
use crate::gesture::{
    setup_gestures, CameraCapture, GestureError, GestureTask, HandEstimator, ModelLoader,
};
use crate::input::{InputEvent, PointerContext};
use crate::navigation::NavigationAction;
use crate::options::Options;
use crate::scene::SceneBodies;
use crate::schedule::{FeedbackTask, FrameContext, FrameScheduler};

/// Owns all per-session state.
pub struct Session {
    controller: InteractionController,
    scene: SceneBodies,
    camera: Camera,
    viewport: Viewport,
    scheduler: FrameScheduler,
}

impl Session {
    /// Session for a canvas of `width` x `height` pointer units, with the
    /// feedback task already scheduled.
    #[must_use]
    pub fn new(options: &Options, width: f32, height: f32) -> Self {
        let viewport = Viewport::from_size(width, height);
        let mut scheduler = FrameScheduler::new();
        scheduler.register(Box::new(FeedbackTask));
        Self {
            controller: InteractionController::new(options),
            scene: SceneBodies::from_options(&options.scene),
            camera: Camera::from_options(&options.camera, viewport.aspect()),
            viewport,
            scheduler,
        }
    }

    /// Track a canvas size change.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::from_size(width, height);
        self.camera.aspect = self.viewport.aspect();
    }

    /// Route a pointer event; returns the navigation a click produced.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<NavigationAction> {
        let ctx = PointerContext {
            viewport: self.viewport,
            camera: &self.camera,
            hits: &self.scene,
        };
        self.controller.handle_input(event, &ctx)
    }

    /// Run one frame of every scheduled task.
    pub fn frame(&mut self, now: Instant) {
        let mut ctx = FrameContext {
            controller: &mut self.controller,
            transforms: &mut self.scene,
        };
        self.scheduler.tick(&mut ctx, now);
    }

    /// Acquire the camera, load the model, and schedule gesture polling.
    ///
    /// Failure disables gesture input for the session and is returned for
    /// the caller's information; hover and click keep working.
    pub async fn start_gestures<C, L>(
        &mut self,
        capture: &mut C,
        loader: &mut L,
    ) -> Result<(), GestureError>
    where
        C: CameraCapture,
        L: ModelLoader<C::Stream>,
        L::Estimator: 'static,
    {
        if let GestureStatus::Disabled { reason } = self.controller.gesture_status() {
            log::info!("gesture input off: {reason}");
            return Ok(());
        }
        match setup_gestures(capture, loader).await {
            Ok(estimator) => {
                self.attach_gesture_task(estimator);
                Ok(())
            }
            Err(e) => {
                log::error!("gesture setup failed: {e}");
                self.controller.disable_gestures(e.to_string());
                Err(e)
            }
        }
    }

    /// Schedule polling of an already-loaded estimator.
    pub fn attach_gesture_task<E: HandEstimator + 'static>(&mut self, estimator: E) {
        self.controller.enable_gestures();
        self.scheduler.register(Box::new(GestureTask::new(estimator)));
    }

    /// Interaction state.
    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// The bodies and their current transforms.
    #[must_use]
    pub fn scene(&self) -> &SceneBodies {
        &self.scene
    }

    /// Mutable access to the bodies, e.g. to load or unload one.
    pub fn scene_mut(&mut self) -> &mut SceneBodies {
        &mut self.scene
    }

    /// Viewing camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current canvas rectangle.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }
}
