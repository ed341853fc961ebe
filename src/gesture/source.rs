//! Camera capture and hand-pose estimation collaborators.
//!
//! Setup is a one-shot asynchronous sequence: acquire the camera stream,
//! then load the model against it. Either step failing aborts gesture
//! input for the session; nothing is retried.

use std::fmt;
use std::marker::PhantomData;

use futures::future::LocalBoxFuture;

use super::landmarks::LandmarkFrame;

/// Failures of the gesture subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    /// The user or platform refused camera access.
    PermissionDenied,
    /// No capture device is available.
    NoDevice,
    /// The device exists but the stream could not be opened.
    CameraUnavailable(String),
    /// The hand-pose model failed to load.
    ModelLoad(String),
    /// A per-frame estimation failed.
    Estimation(String),
    /// A hand carried more landmarks than the model produces.
    InvalidLandmarks {
        /// Number of points received.
        count: usize,
    },
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => f.write_str("camera permission denied"),
            Self::NoDevice => f.write_str("no camera device available"),
            Self::CameraUnavailable(msg) => {
                write!(f, "camera unavailable: {msg}")
            }
            Self::ModelLoad(msg) => write!(f, "hand model failed to load: {msg}"),
            Self::Estimation(msg) => write!(f, "hand estimation failed: {msg}"),
            Self::InvalidLandmarks { count } => {
                write!(f, "hand has {count} landmarks, expected at most 21")
            }
        }
    }
}

impl std::error::Error for GestureError {}

/// Live video acquisition.
pub trait CameraCapture {
    /// Handle to the opened stream.
    type Stream;

    /// Open the stream, resolving once its metadata is available.
    fn acquire(&mut self) -> LocalBoxFuture<'_, Result<Self::Stream, GestureError>>;
}

/// Loads the hand-pose model for an acquired stream.
pub trait ModelLoader<S> {
    /// Estimator bound to the stream.
    type Estimator: HandEstimator;

    /// Load the model.
    fn load(&mut self, stream: S) -> LocalBoxFuture<'_, Result<Self::Estimator, GestureError>>;
}

/// Per-frame hand landmark estimation.
pub trait HandEstimator {
    /// Estimate hands in the current video frame.
    ///
    /// The returned future must not borrow the estimator: it is kept
    /// across frames and polled once per tick until it resolves.
    fn estimate_hands(&mut self) -> LocalBoxFuture<'static, Result<LandmarkFrame, GestureError>>;
}

/// Acquire the camera, then load the model. No retries.
pub async fn setup_gestures<C, L>(
    capture: &mut C,
    loader: &mut L,
) -> Result<L::Estimator, GestureError>
where
    C: CameraCapture,
    L: ModelLoader<C::Stream>,
{
    let stream = capture.acquire().await?;
    log::debug!("camera stream acquired");
    let estimator = loader.load(stream).await?;
    log::info!("hand model loaded; gesture input active");
    Ok(estimator)
}

/// Capture that always fails with [`GestureError::NoDevice`].
///
/// `S` is the stream type a real capture would have produced, so the
/// same loader type-checks with or without a device.
#[derive(Debug)]
pub struct UnavailableCapture<S = ()>(PhantomData<S>);

impl<S> UnavailableCapture<S> {
    /// A capture with no device behind it.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S> Default for UnavailableCapture<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CameraCapture for UnavailableCapture<S> {
    type Stream = S;

    fn acquire(&mut self) -> LocalBoxFuture<'_, Result<S, GestureError>> {
        Box::pin(async { Err::<S, _>(GestureError::NoDevice) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::FutureExt;

    use super::*;

    struct DeniedCapture;

    impl CameraCapture for DeniedCapture {
        type Stream = u32;

        fn acquire(&mut self) -> LocalBoxFuture<'_, Result<u32, GestureError>> {
            async { Err::<u32, _>(GestureError::PermissionDenied) }.boxed_local()
        }
    }

    struct OkCapture;

    impl CameraCapture for OkCapture {
        type Stream = u32;

        fn acquire(&mut self) -> LocalBoxFuture<'_, Result<u32, GestureError>> {
            async { Ok::<_, GestureError>(7) }.boxed_local()
        }
    }

    struct NullEstimator;

    impl HandEstimator for NullEstimator {
        fn estimate_hands(
            &mut self,
        ) -> LocalBoxFuture<'static, Result<LandmarkFrame, GestureError>> {
            async { Ok::<_, GestureError>(LandmarkFrame::empty()) }.boxed_local()
        }
    }

    #[derive(Default)]
    struct CountingLoader {
        calls: u32,
        fail: bool,
    }

    impl ModelLoader<u32> for CountingLoader {
        type Estimator = NullEstimator;

        fn load(
            &mut self,
            stream: u32,
        ) -> LocalBoxFuture<'_, Result<NullEstimator, GestureError>> {
            self.calls += 1;
            let fail = self.fail;
            async move {
                assert_eq!(stream, 7);
                if fail {
                    Err(GestureError::ModelLoad("weights missing".into()))
                } else {
                    Ok(NullEstimator)
                }
            }
            .boxed_local()
        }
    }

    #[test]
    fn denied_camera_skips_model_load() {
        let mut loader = CountingLoader::default();
        let result = block_on(setup_gestures(&mut DeniedCapture, &mut loader));
        assert_eq!(result.err(), Some(GestureError::PermissionDenied));
        assert_eq!(loader.calls, 0);
    }

    #[test]
    fn model_failure_is_reported_once() {
        let mut loader = CountingLoader {
            fail: true,
            ..CountingLoader::default()
        };
        let result = block_on(setup_gestures(&mut OkCapture, &mut loader));
        assert!(matches!(result, Err(GestureError::ModelLoad(_))));
        assert_eq!(loader.calls, 1);
    }

    #[test]
    fn successful_setup_yields_estimator() {
        let mut loader = CountingLoader::default();
        let mut estimator =
            block_on(setup_gestures(&mut OkCapture, &mut loader)).unwrap();
        let frame = block_on(estimator.estimate_hands()).unwrap();
        assert!(frame.is_empty());
    }

    #[test]
    fn unavailable_capture_fails() {
        let mut capture = UnavailableCapture::<u32>::new();
        let mut loader = CountingLoader::default();
        let result = block_on(setup_gestures(&mut capture, &mut loader));
        assert_eq!(result.err(), Some(GestureError::NoDevice));
        assert_eq!(loader.calls, 0);
    }
}
