//! Camera-based hand gesture input.
//!
//! A pose-estimation collaborator produces [`LandmarkFrame`]s; the
//! [`GestureTask`] polls it once per frame and feeds each resolved frame
//! to the [`GestureCycle`], which turns leftward index-finger swipes into
//! selection steps. Setup ([`setup_gestures`]) is one-shot: if the camera
//! or model is unavailable, gesture input stays off for the session.

/// Swipe detection and the Earth → Moon → Mars selection cycle.
pub mod cycle;
/// Hand landmark frames.
pub mod landmarks;
/// JSON landmark recordings and their replay estimator.
pub mod recording;
/// Capture, model-loading, and estimation collaborators.
pub mod source;
/// Frame task that polls the estimator without blocking.
pub mod task;

pub use cycle::{
    CooldownMode, CycleOutcome, GestureCycle, GestureCycleState, SWIPE_COOLDOWN, SWIPE_COOLDOWN_MS,
    SWIPE_MARGIN,
};
pub use landmarks::{HandLandmarks, LandmarkFrame, INDEX_FINGER_TIP, LANDMARK_COUNT, WRIST};
pub use recording::{LandmarkRecording, RecordingCapture, RecordingLoader, ReplayEstimator};
pub use source::{
    setup_gestures, CameraCapture, GestureError, HandEstimator, ModelLoader, UnavailableCapture,
};
pub use task::GestureTask;
