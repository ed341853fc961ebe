//! Shared utilities.

/// Smoothed frame-rate measurement.
pub mod frame_timing;
