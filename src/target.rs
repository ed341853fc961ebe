//! The three selectable bodies and a fixed-size map keyed by them.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the selectable celestial bodies.
///
/// The declaration order (Earth, Mars, Moon) is the canonical order used
/// for iteration and for breaking exact ties between overlapping hits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Earth, the default selection at session start.
    #[default]
    Earth,
    /// Mars.
    Mars,
    /// The Moon.
    Moon,
}

impl Target {
    /// All targets in canonical order.
    pub const ALL: [Self; 3] = [Self::Earth, Self::Mars, Self::Moon];

    /// Position of this target in [`Target::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Earth => 0,
            Self::Mars => 1,
            Self::Moon => 2,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Earth => "earth",
            Self::Mars => "mars",
            Self::Moon => "moon",
        }
    }

    /// Successor in the swipe cycle: Earth → Moon → Mars → Earth.
    #[must_use]
    pub fn next_in_cycle(self) -> Self {
        match self {
            Self::Earth => Self::Moon,
            Self::Mars => Self::Earth,
            Self::Moon => Self::Mars,
        }
    }

    /// Name of the external experience opened when this target is clicked.
    #[must_use]
    pub fn experience_name(self) -> &'static str {
        match self {
            Self::Earth => "earth_experience",
            Self::Mars => "mars_experience",
            Self::Moon => "moon_experience",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per [`Target`], stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerTarget<T>([T; 3]);

impl<T> PerTarget<T> {
    /// Build a map by evaluating `f` for each target in canonical order.
    pub fn from_fn(mut f: impl FnMut(Target) -> T) -> Self {
        Self([
            f(Target::Earth),
            f(Target::Mars),
            f(Target::Moon),
        ])
    }

    /// Iterate `(target, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Target, &T)> {
        Target::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterate `(target, value)` pairs mutably in canonical order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Target, &mut T)> {
        Target::ALL.into_iter().zip(self.0.iter_mut())
    }
}

impl<T> Index<Target> for PerTarget<T> {
    type Output = T;

    fn index(&self, target: Target) -> &T {
        &self.0[target.index()]
    }
}

impl<T> IndexMut<Target> for PerTarget<T> {
    fn index_mut(&mut self, target: Target) -> &mut T {
        &mut self.0[target.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_target_and_returns() {
        let mut t = Target::Earth;
        let mut seen = Vec::new();
        for _ in 0..3 {
            t = t.next_in_cycle();
            seen.push(t);
        }
        assert_eq!(seen, vec![Target::Moon, Target::Mars, Target::Earth]);
    }

    #[test]
    fn index_matches_canonical_order() {
        for (i, t) in Target::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn experience_names() {
        assert_eq!(Target::Earth.experience_name(), "earth_experience");
        assert_eq!(Target::Mars.experience_name(), "mars_experience");
        assert_eq!(Target::Moon.experience_name(), "moon_experience");
    }

    #[test]
    fn per_target_indexing() {
        let mut map = PerTarget::from_fn(Target::index);
        assert_eq!(map[Target::Mars], 1);
        map[Target::Moon] = 7;
        let collected: Vec<_> = map.iter().map(|(t, v)| (t, *v)).collect();
        assert_eq!(
            collected,
            vec![(Target::Earth, 0), (Target::Mars, 1), (Target::Moon, 7)]
        );
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Target::Moon).unwrap();
        assert_eq!(json, "\"moon\"");
    }
}
