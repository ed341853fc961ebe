//! Recorded landmark streams.
//!
//! A recording is a JSON document holding the per-frame model output of
//! an earlier session:
//!
//! ```json
//! { "looped": false, "frames": [ [], [[[412.0, 300.5], ...]], ... ] }
//! ```
//!
//! Each frame is a list of hands and each hand a list of `[x, y]` canvas
//! points. Replaying a recording exercises the full gesture path without
//! a camera or model.

use std::path::{Path, PathBuf};

use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use serde::{Deserialize, Serialize};

use super::landmarks::LandmarkFrame;
use super::source::{CameraCapture, GestureError, HandEstimator, ModelLoader};
use crate::error::OrreryError;

/// A sequence of landmark frames.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkRecording {
    /// Frames in capture order.
    pub frames: Vec<LandmarkFrame>,
    /// Restart from the first frame after the last one.
    #[serde(default)]
    pub looped: bool,
}

impl LandmarkRecording {
    /// Parse a recording from JSON text.
    pub fn from_json(text: &str) -> Result<Self, OrreryError> {
        serde_json::from_str(text).map_err(|e| OrreryError::Recording(e.to_string()))
    }

    /// Read and parse a recording file.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, OrreryError> {
        serde_json::to_string_pretty(self).map_err(|e| OrreryError::Recording(e.to_string()))
    }
}

/// Capture that "opens" a recording file in place of a camera.
#[derive(Debug, Clone)]
pub struct RecordingCapture {
    path: PathBuf,
}

impl RecordingCapture {
    /// Capture backed by the recording at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CameraCapture for RecordingCapture {
    type Stream = LandmarkRecording;

    fn acquire(&mut self) -> LocalBoxFuture<'_, Result<LandmarkRecording, GestureError>> {
        let result = match LandmarkRecording::load(&self.path) {
            Ok(recording) => Ok(recording),
            Err(OrreryError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(GestureError::NoDevice)
            }
            Err(OrreryError::Io(e))
                if e.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                Err(GestureError::PermissionDenied)
            }
            Err(e) => Err(GestureError::CameraUnavailable(format!(
                "{}: {e}",
                self.path.display()
            ))),
        };
        future::ready(result).boxed_local()
    }
}

/// Loader that turns a recording into a [`ReplayEstimator`].
#[derive(Debug, Default)]
pub struct RecordingLoader;

impl ModelLoader<LandmarkRecording> for RecordingLoader {
    type Estimator = ReplayEstimator;

    fn load(
        &mut self,
        recording: LandmarkRecording,
    ) -> LocalBoxFuture<'_, Result<ReplayEstimator, GestureError>> {
        let result = if recording.frames.is_empty() {
            Err(GestureError::ModelLoad("recording has no frames".into()))
        } else {
            log::info!("replaying {} recorded landmark frames", recording.frames.len());
            Ok(ReplayEstimator::new(recording))
        };
        future::ready(result).boxed_local()
    }
}

/// Estimator that yields recorded frames in order.
///
/// Once a non-looped recording is exhausted every further estimate is an
/// empty frame, as if the hand left the camera.
#[derive(Debug, Clone)]
pub struct ReplayEstimator {
    frames: Vec<LandmarkFrame>,
    cursor: usize,
    looped: bool,
}

impl ReplayEstimator {
    /// Replay `recording` from its first frame.
    #[must_use]
    pub fn new(recording: LandmarkRecording) -> Self {
        Self {
            frames: recording.frames,
            cursor: 0,
            looped: recording.looped,
        }
    }

    /// Frames handed out so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn next_frame(&mut self) -> LandmarkFrame {
        if self.looped && !self.frames.is_empty() && self.cursor >= self.frames.len() {
            self.cursor = 0;
        }
        let frame = self.frames.get(self.cursor).cloned().unwrap_or_default();
        if self.cursor < self.frames.len() {
            self.cursor += 1;
        }
        frame
    }
}

impl HandEstimator for ReplayEstimator {
    fn estimate_hands(&mut self) -> LocalBoxFuture<'static, Result<LandmarkFrame, GestureError>> {
        future::ready(Ok(self.next_frame())).boxed_local()
    }
}
