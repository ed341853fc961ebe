use web_time::Instant;

/// Smoothed frame rate over the frames the scheduler has run.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Timestamp of the last finished frame
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Record the end of a frame at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        let Some(last) = self.last_frame.replace(now) else {
            return;
        };

        let frame_time = now.duration_since(last).as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    #[test]
    fn steady_thirty_fps_pulls_average_down() {
        let mut timing = FrameTiming::default();
        let mut now = Instant::now();
        for _ in 0..200 {
            timing.end_frame(now);
            now += Duration::from_millis(33);
        }
        assert!((timing.fps() - 30.3).abs() < 1.0, "fps = {}", timing.fps());
    }

    #[test]
    fn first_frame_only_records_timestamp() {
        let mut timing = FrameTiming::default();
        timing.end_frame(Instant::now());
        assert_eq!(timing.fps(), 60.0);
    }

    #[test]
    fn repeated_timestamp_leaves_average_alone() {
        let mut timing = FrameTiming::default();
        let now = Instant::now();
        timing.end_frame(now);
        timing.end_frame(now);
        assert_eq!(timing.fps(), 60.0);
    }
}
