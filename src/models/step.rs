//! Named steps of a typographic scale.
//!
//! A step's identity is its index in [`STEP_LABELS`]. Labels are never
//! reordered or renamed, so an index always refers to the same label no
//! matter how many steps the scale currently has.

use serde::Serialize;

/// Every label a scale can use, smallest first.
pub const STEP_LABELS: [&str; 14] = [
    "xs", "sm", "md", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

/// Multipliers of the base size used by the fixed proportional scale.
///
/// Strictly increasing, with `base` at exactly 1.0.
pub const PROPORTIONAL_MULTIPLIERS: [f64; 14] = [
    0.6, 0.75, 0.875, 1.0, 1.125, 1.25, 1.5, 1.875, 2.25, 3.0, 3.75, 4.5, 6.0, 8.0,
];

/// Index of the `base` step, the unscaled anchor of every scale.
pub const PIVOT_INDEX: usize = 3;

/// Number of steps below the pivot (`xs`, `sm`, `md`).
pub const SMALLER_STEPS: usize = PIVOT_INDEX;

/// Smallest scale the generator produces.
pub const MIN_STEPS: usize = 5;

/// Largest scale the generator produces.
pub const MAX_STEPS: usize = STEP_LABELS.len();

/// A single named position in the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Position in the label sequence
    pub index: usize,
    /// CSS-facing label (e.g. "2xl")
    pub label: &'static str,
}

impl Step {
    /// Looks up the step at `index`, if the label table has one.
    #[must_use]
    pub fn at(index: usize) -> Option<Self> {
        STEP_LABELS.get(index).map(|&label| Self { index, label })
    }

    /// Looks up a step by its label.
    #[must_use]
    pub fn by_label(label: &str) -> Option<Self> {
        STEP_LABELS
            .iter()
            .position(|candidate| *candidate == label)
            .and_then(Self::at)
    }

    /// Multiplier of the base size in the fixed proportional scale.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        PROPORTIONAL_MULTIPLIERS[self.index]
    }

    /// Whether this is the pivot step.
    #[must_use]
    pub const fn is_pivot(&self) -> bool {
        self.index == PIVOT_INDEX
    }
}

/// Clamps a requested step count into the supported range.
#[must_use]
pub fn clamp_step_count(requested: usize) -> usize {
    requested.clamp(MIN_STEPS, MAX_STEPS)
}

/// Labels for the first `count` steps (count is clamped first).
#[must_use]
pub fn labels_for(count: usize) -> &'static [&'static str] {
    &STEP_LABELS[..clamp_step_count(count)]
}

/// All steps in label order.
pub fn all_steps() -> impl Iterator<Item = Step> {
    (0..MAX_STEPS).filter_map(Step::at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_is_base() {
        let pivot = Step::at(PIVOT_INDEX).unwrap();
        assert_eq!(pivot.label, "base");
        assert!(pivot.is_pivot());
        assert_eq!(pivot.multiplier(), 1.0);
    }

    #[test]
    fn test_multipliers_strictly_increase() {
        for pair in PROPORTIONAL_MULTIPLIERS.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
        assert_eq!(PROPORTIONAL_MULTIPLIERS[0], 0.6);
        assert_eq!(PROPORTIONAL_MULTIPLIERS[MAX_STEPS - 1], 8.0);
    }

    #[test]
    fn test_clamp_step_count() {
        assert_eq!(clamp_step_count(0), MIN_STEPS);
        assert_eq!(clamp_step_count(4), 5);
        assert_eq!(clamp_step_count(8), 8);
        assert_eq!(clamp_step_count(99), 14);
    }

    #[test]
    fn test_labels_for() {
        assert_eq!(labels_for(8), &["xs", "sm", "md", "base", "lg", "xl", "2xl", "3xl"]);
        assert_eq!(labels_for(2).len(), 5);
        assert_eq!(labels_for(20).last(), Some(&"9xl"));
    }

    #[test]
    fn test_step_by_label() {
        assert_eq!(Step::by_label("2xl").map(|s| s.index), Some(6));
        assert!(Step::by_label("10xl").is_none());
        assert_eq!(all_steps().count(), 14);
    }
}
