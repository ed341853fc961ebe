//! Hand landmark frames produced by the pose-estimation model.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::GestureError;

/// Maximum landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;
/// Wrist landmark index.
pub const WRIST: usize = 0;
/// Index fingertip landmark index; the only one the swipe detector reads.
pub const INDEX_FINGER_TIP: usize = 8;

/// Landmarks of one detected hand, in canvas pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct HandLandmarks {
    points: Vec<Vec2>,
}

impl HandLandmarks {
    /// Validate and wrap up to [`LANDMARK_COUNT`] points.
    pub fn new(points: Vec<Vec2>) -> Result<Self, GestureError> {
        if points.len() > LANDMARK_COUNT {
            return Err(GestureError::InvalidLandmarks {
                count: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Landmark `index`, if present.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Index fingertip position, if the hand has that many landmarks.
    #[must_use]
    pub fn index_fingertip(&self) -> Option<Vec2> {
        self.point(INDEX_FINGER_TIP)
    }

    /// Number of landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the hand carries no landmarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All landmarks in model order.
    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

impl TryFrom<Vec<Vec2>> for HandLandmarks {
    type Error = GestureError;

    fn try_from(points: Vec<Vec2>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<HandLandmarks> for Vec<Vec2> {
    fn from(hand: HandLandmarks) -> Self {
        hand.points
    }
}

/// One detection cycle's output: zero or more hands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkFrame {
    hands: Vec<HandLandmarks>,
}

impl LandmarkFrame {
    /// Frame with no hand detected.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Frame with the given hands, most confident first.
    #[must_use]
    pub fn new(hands: Vec<HandLandmarks>) -> Self {
        Self { hands }
    }

    /// Frame with a single hand.
    #[must_use]
    pub fn single(hand: HandLandmarks) -> Self {
        Self { hands: vec![hand] }
    }

    /// All detected hands.
    #[must_use]
    pub fn hands(&self) -> &[HandLandmarks] {
        &self.hands
    }

    /// Whether no hand was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// The hand gestures are read from (the first one).
    #[must_use]
    pub fn primary_hand(&self) -> Option<&HandLandmarks> {
        self.hands.first()
    }

    /// Horizontal position of the primary hand's index fingertip.
    #[must_use]
    pub fn tracked_x(&self) -> Option<f32> {
        self.primary_hand()?.index_fingertip().map(|p| p.x)
    }
}

#[cfg(test)]
pub(crate) fn hand_with_fingertip_x(x: f32) -> HandLandmarks {
    let mut points = vec![Vec2::new(x + 40.0, 300.0); LANDMARK_COUNT];
    points[INDEX_FINGER_TIP] = Vec2::new(x, 200.0);
    HandLandmarks { points }
}
