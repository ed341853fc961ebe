//! Standalone interaction window backed by winit.
//!
//! The window stands in for the rendered scene: cursor and mouse events
//! drive the session's hover router, every redraw ticks the frame
//! scheduler, and the title bar reports hover and gesture selection.
//!
//! ```no_run
//! # use orrery::Viewer;
//! Viewer::builder()
//!     .with_landmarks("recordings/swipe_left.json")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::OrreryError,
    gesture::{LandmarkRecording, RecordingCapture, RecordingLoader, UnavailableCapture},
    navigation::{navigator_from_options, Navigator},
    options::Options,
    session::Session,
    target::Target,
    InputEvent, MouseButton,
};

/// How often the smoothed frame rate is logged.
const FPS_LOG_INTERVAL: Duration = Duration::from_secs(5);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    landmarks: Option<PathBuf>,
    navigator: Option<Box<dyn Navigator>>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Orrery", no recording,
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            landmarks: None,
            navigator: None,
            title: "Orrery".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Replay hand landmarks from a JSON recording instead of a camera.
    #[must_use]
    pub fn with_landmarks(mut self, path: impl Into<PathBuf>) -> Self {
        self.landmarks = Some(path.into());
        self
    }

    /// Use a specific navigator for clicks.
    #[must_use]
    pub fn with_navigator(mut self, navigator: Box<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let options = self.options.unwrap_or_default();
        let navigator = self
            .navigator
            .unwrap_or_else(|| navigator_from_options(&options.navigation));
        Viewer {
            options,
            landmarks: self.landmarks,
            navigator,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window that routes pointer and gesture input through a [`Session`].
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    landmarks: Option<PathBuf>,
    navigator: Box<dyn Navigator>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), OrreryError> {
        let event_loop =
            EventLoop::new().map_err(|e| OrreryError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            session: None,
            options: self.options,
            landmarks: self.landmarks,
            navigator: self.navigator,
            title: self.title,
            shown_title: String::new(),
            last_fps_log: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| OrreryError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    session: Option<Session>,
    options: Options,
    landmarks: Option<PathBuf>,
    navigator: Box<dyn Navigator>,
    title: String,
    shown_title: String,
    last_fps_log: Instant,
}

/// Window size as canvas dimensions, never zero.
#[allow(clippy::cast_precision_loss)]
fn canvas_size(inner: winit::dpi::PhysicalSize<u32>) -> (f32, f32) {
    (inner.width.max(1) as f32, inner.height.max(1) as f32)
}

/// Title bar text reporting hover and gesture selection.
fn status_title(prefix: &str, session: &Session) -> String {
    let controller = session.controller();
    let hover = controller
        .hover_state()
        .target()
        .map_or("none", Target::as_str);
    format!(
        "{prefix} | hover: {hover} | selected: {}",
        controller.selected_target()
    )
}

impl ViewerApp {
    /// Run one-shot gesture setup for a freshly created session.
    fn start_gestures(&self, session: &mut Session) {
        let result = if let Some(path) = &self.landmarks {
            pollster::block_on(
                session.start_gestures(&mut RecordingCapture::new(path), &mut RecordingLoader),
            )
        } else {
            pollster::block_on(session.start_gestures(
                &mut UnavailableCapture::<LandmarkRecording>::new(),
                &mut RecordingLoader,
            ))
        };
        if result.is_err() {
            log::warn!("continuing with pointer input only");
        }
    }

    fn route(&mut self, event: InputEvent) {
        let Some(session) = &mut self.session else {
            return;
        };
        if let Some(action) = session.handle_input(event) {
            if let Err(e) = self.navigator.open(&action) {
                log::error!("{e}");
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 800.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (width, height) = canvas_size(window.inner_size());
        let mut session = Session::new(&self.options, width, height);
        self.start_gestures(&mut session);

        window.request_redraw();
        self.window = Some(window);
        self.session = Some(session);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and session must be initialised.
        if self.window.is_none() || self.session.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (width, height) = canvas_size(event_size);
                if let Some(session) = &mut self.session {
                    session.resize(width, height);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let Some(session) = &mut self.session else {
                    return;
                };
                session.frame(now);

                if now.duration_since(self.last_fps_log) >= FPS_LOG_INTERVAL {
                    log::debug!(
                        "{:.1} fps over {} frames",
                        session.scheduler().fps(),
                        session.scheduler().frame_count()
                    );
                    self.last_fps_log = now;
                }

                let title = status_title(&self.title, session);
                if let Some(window) = &self.window {
                    if title != self.shown_title {
                        window.set_title(&title);
                        self.shown_title = title;
                    }
                    window.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.route(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                self.route(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            _ => (),
        }
    }
}
