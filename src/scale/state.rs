//! Scale state: a size sequence plus the manual overrides layered on it.
//!
//! `ScaleState` is a plain value. Every operation borrows the current state
//! and returns the next one, so a rejected update leaves the caller's state
//! untouched and there is no hidden coupling between calls.
//!
//! # Override policy
//!
//! Overrides are keyed by step index. They survive recomputation caused by a
//! change of curve type, intensity, viewport or prefix. They are dropped when:
//!
//! - the step count shrinks below their index
//! - the base size changes
//! - the generation mode switches between curve and proportional

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::curve::{Generation, ScaleMode};
use crate::models::scale_config::ScaleConfig;
use crate::models::step::{labels_for, PROPORTIONAL_MULTIPLIERS};

use super::generator::{ensure_finite, extrapolate_step, generate_sizes, uniform_step_size};
use super::{ScaleError, ScaleResult};

/// Parameters that produced the computed sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Basis {
    base_size: f64,
    generation: Generation,
}

impl Basis {
    fn from_config(config: &ScaleConfig) -> Self {
        Self {
            base_size: config.base_size,
            generation: config.generation(),
        }
    }

    /// Whether moving from `self` to `next` invalidates manual overrides.
    fn invalidates_overrides(&self, next: &Self) -> bool {
        self.base_size != next.base_size || self.generation.mode() != next.generation.mode()
    }
}

/// Current sizes of a scale and the overrides applied on top of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScaleState {
    /// Sizes before overrides are applied
    computed: Vec<f64>,
    /// Manually set sizes, keyed by step index
    overrides: BTreeMap<usize, f64>,
    #[serde(skip)]
    basis: Option<Basis>,
}

impl ScaleState {
    /// Creates an empty state. The first [`apply`](Self::apply) generates it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh state from a configuration.
    pub fn from_config(config: &ScaleConfig) -> ScaleResult<Self> {
        Self::new().apply(config)
    }

    /// Recomputes the scale for `config`.
    ///
    /// - Unchanged parameters return an identical state.
    /// - A step-count change alone reconciles: existing positions keep their
    ///   values and new trailing positions are extrapolated.
    /// - Any change of base size or generation regenerates the sequence.
    pub fn apply(&self, config: &ScaleConfig) -> ScaleResult<Self> {
        config.validate()?;

        let basis = Basis::from_config(config);
        let num_steps = config.step_count();

        let Some(previous) = self.basis else {
            return Ok(Self {
                computed: generate_sizes(basis.base_size, num_steps, basis.generation)?,
                overrides: BTreeMap::new(),
                basis: Some(basis),
            });
        };

        if previous == basis && self.computed.len() == num_steps {
            return Ok(self.clone());
        }

        let mut overrides = if previous.invalidates_overrides(&basis) {
            if !self.overrides.is_empty() {
                debug!(
                    dropped = self.overrides.len(),
                    "base size or mode changed; clearing overrides"
                );
            }
            BTreeMap::new()
        } else {
            self.overrides.clone()
        };
        overrides.retain(|&index, _| index < num_steps);

        let computed = if previous == basis {
            self.reconcile(num_steps, &basis)?
        } else {
            generate_sizes(basis.base_size, num_steps, basis.generation)?
        };

        Ok(Self {
            computed,
            overrides,
            basis: Some(basis),
        })
    }

    /// Resizes the computed sequence without regenerating it.
    fn reconcile(&self, num_steps: usize, basis: &Basis) -> ScaleResult<Vec<f64>> {
        let previous_len = self.computed.len();
        let step_size = uniform_step_size(&self.sizes()).unwrap_or(0.0);

        debug!(
            from = previous_len,
            to = num_steps,
            step_size,
            "reconciling step count"
        );

        let mut computed: Vec<f64> = self.computed.iter().copied().take(num_steps).collect();
        for index in previous_len..num_steps {
            let size = match basis.generation {
                Generation::Proportional => basis.base_size * PROPORTIONAL_MULTIPLIERS[index],
                Generation::Curve { .. } => extrapolate_step(basis.base_size, index, step_size),
            };
            computed.push(size);
        }
        ensure_finite(&computed)?;
        Ok(computed)
    }

    /// Records a manually set size for the step at `index`.
    ///
    /// Negative values are clamped to zero.
    pub fn with_override(&self, index: usize, value: f64) -> ScaleResult<Self> {
        self.check_index(index)?;
        if !value.is_finite() {
            return Err(ScaleError::invalid(
                "override",
                format!("must be a finite number, got {value}"),
            ));
        }

        let mut next = self.clone();
        next.overrides.insert(index, value.max(0.0));
        debug!(index, value, "override recorded");
        Ok(next)
    }

    /// Returns the step at `index` to its computed size.
    pub fn without_override(&self, index: usize) -> ScaleResult<Self> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.overrides.remove(&index);
        Ok(next)
    }

    /// Returns every step to its computed size.
    #[must_use]
    pub fn without_overrides(&self) -> Self {
        Self {
            overrides: BTreeMap::new(),
            ..self.clone()
        }
    }

    fn check_index(&self, index: usize) -> ScaleResult<()> {
        if index >= self.len() {
            return Err(ScaleError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Effective sizes, overrides applied, in label order.
    #[must_use]
    pub fn sizes(&self) -> Vec<f64> {
        self.computed
            .iter()
            .enumerate()
            .map(|(index, size)| self.overrides.get(&index).copied().unwrap_or(*size))
            .collect()
    }

    /// Effective size of one step.
    #[must_use]
    pub fn size(&self, index: usize) -> Option<f64> {
        self.overrides
            .get(&index)
            .or_else(|| self.computed.get(index))
            .copied()
    }

    /// Labels of the current steps.
    #[must_use]
    pub fn labels(&self) -> &'static [&'static str] {
        if self.computed.is_empty() {
            &[]
        } else {
            labels_for(self.computed.len())
        }
    }

    /// `(label, size)` pairs in label order.
    pub fn steps(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.labels().iter().copied().zip(self.sizes())
    }

    /// Manual overrides, keyed by step index.
    #[must_use]
    pub fn overrides(&self) -> &BTreeMap<usize, f64> {
        &self.overrides
    }

    /// Whether the step at `index` carries a manual override.
    #[must_use]
    pub fn is_overridden(&self, index: usize) -> bool {
        self.overrides.contains_key(&index)
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.computed.len()
    }

    /// Whether the state has not been generated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.computed.is_empty()
    }

    /// Average spacing of the effective sizes, reported in curve mode only.
    #[must_use]
    pub fn step_size(&self) -> Option<f64> {
        match self.basis {
            Some(basis) if basis.generation.mode() == ScaleMode::Curve => {
                uniform_step_size(&self.sizes())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::curve::CurveType;

    fn config(base_size: f64, num_steps: usize) -> ScaleConfig {
        ScaleConfig {
            base_size,
            num_steps,
            ..ScaleConfig::default()
        }
    }

    #[test]
    fn test_first_apply_generates() {
        let state = ScaleState::from_config(&config(16.0, 8)).unwrap();
        assert_eq!(state.len(), 8);
        assert_eq!(state.size(3), Some(16.0));
        assert!(state.overrides().is_empty());
        assert_eq!(state.labels().first(), Some(&"xs"));
    }

    #[test]
    fn test_unchanged_config_is_idempotent() {
        let cfg = config(16.0, 8);
        let state = ScaleState::from_config(&cfg).unwrap();
        let again = state.apply(&cfg).unwrap();
        assert_eq!(state, again);
    }

    #[test]
    fn test_override_persists_across_curve_change() {
        let mut cfg = config(16.0, 8);
        let state = ScaleState::from_config(&cfg)
            .unwrap()
            .with_override(2, 5.0)
            .unwrap();
        assert_eq!(state.size(2), Some(5.0));

        cfg.curve = CurveType::Exponential;
        cfg.intensity = 2.0;
        let state = state.apply(&cfg).unwrap();
        assert_eq!(state.size(2), Some(5.0));
        assert!(state.is_overridden(2));

        // Unrelated steps pick up the new curve.
        let fresh = ScaleState::from_config(&cfg).unwrap();
        assert_eq!(state.size(7), fresh.size(7));
    }

    #[test]
    fn test_override_persists_across_viewport_change() {
        let mut cfg = config(16.0, 8);
        let state = ScaleState::from_config(&cfg)
            .unwrap()
            .with_override(2, 5.0)
            .unwrap();
        cfg.viewport.max_viewport = 1920.0;
        cfg.prefix = "text".into();
        let state = state.apply(&cfg).unwrap();
        assert_eq!(state.size(2), Some(5.0));
    }

    #[test]
    fn test_base_size_change_clears_overrides() {
        let state = ScaleState::from_config(&config(16.0, 8))
            .unwrap()
            .with_override(2, 5.0)
            .unwrap();
        let state = state.apply(&config(18.0, 8)).unwrap();
        assert!(state.overrides().is_empty());
        assert_eq!(state.size(3), Some(18.0));
    }

    #[test]
    fn test_mode_change_clears_overrides() {
        let mut cfg = config(16.0, 8);
        let state = ScaleState::from_config(&cfg)
            .unwrap()
            .with_override(5, 30.0)
            .unwrap();
        cfg.mode = ScaleMode::Proportional;
        let state = state.apply(&cfg).unwrap();
        assert!(state.overrides().is_empty());
        assert_eq!(state.size(5), Some(16.0 * 1.25));
    }

    #[test]
    fn test_growing_preserves_and_extrapolates() {
        let state = ScaleState::from_config(&config(16.0, 8)).unwrap();
        let before = state.sizes();
        let step = state.step_size().unwrap();

        let grown = state.apply(&config(16.0, 10)).unwrap();
        assert_eq!(grown.len(), 10);
        assert_eq!(&grown.sizes()[..8], before.as_slice());
        assert!((grown.sizes()[8] - (16.0 + 5.0 * step)).abs() < 1e-9);
        assert!((grown.sizes()[9] - (16.0 + 6.0 * step)).abs() < 1e-9);
    }

    #[test]
    fn test_growing_uses_displayed_spacing() {
        let state = ScaleState::from_config(&config(16.0, 8))
            .unwrap()
            .with_override(7, 44.0)
            .unwrap();
        let displayed_step = (44.0 - state.sizes()[0]) / 7.0;
        let grown = state.apply(&config(16.0, 9)).unwrap();
        assert!((grown.sizes()[8] - (16.0 + 5.0 * displayed_step)).abs() < 1e-9);
        assert_eq!(grown.size(7), Some(44.0));
    }

    #[test]
    fn test_shrinking_drops_out_of_range_overrides() {
        let state = ScaleState::from_config(&config(16.0, 10))
            .unwrap()
            .with_override(1, 11.0)
            .unwrap()
            .with_override(9, 40.0)
            .unwrap();
        let shrunk = state.apply(&config(16.0, 6)).unwrap();
        assert_eq!(shrunk.len(), 6);
        assert_eq!(shrunk.size(1), Some(11.0));
        assert!(!shrunk.is_overridden(9));
        assert_eq!(shrunk.overrides().len(), 1);

        // Growing back does not resurrect the dropped override.
        let regrown = shrunk.apply(&config(16.0, 10)).unwrap();
        assert!(!regrown.is_overridden(9));
    }

    #[test]
    fn test_proportional_growth_uses_table() {
        let mut cfg = config(16.0, 6);
        cfg.mode = ScaleMode::Proportional;
        let state = ScaleState::from_config(&cfg).unwrap();
        cfg.num_steps = 14;
        let grown = state.apply(&cfg).unwrap();
        for (size, multiplier) in grown.sizes().iter().zip(PROPORTIONAL_MULTIPLIERS) {
            assert_eq!(*size, 16.0 * multiplier);
        }
    }

    #[test]
    fn test_negative_override_clamped() {
        let state = ScaleState::from_config(&config(16.0, 8))
            .unwrap()
            .with_override(0, -3.0)
            .unwrap();
        assert_eq!(state.size(0), Some(0.0));
    }

    #[test]
    fn test_override_out_of_range() {
        let state = ScaleState::from_config(&config(16.0, 8)).unwrap();
        assert_eq!(
            state.with_override(8, 1.0),
            Err(ScaleError::IndexOutOfRange { index: 8, len: 8 })
        );
        assert!(state.with_override(0, f64::NAN).is_err());
        assert!(ScaleState::new().with_override(0, 1.0).is_err());
    }

    #[test]
    fn test_clearing_overrides() {
        let state = ScaleState::from_config(&config(16.0, 8)).unwrap();
        let original = state.size(4);
        let edited = state.with_override(4, 99.0).unwrap().with_override(5, 1.0).unwrap();

        let one_cleared = edited.without_override(4).unwrap();
        assert_eq!(one_cleared.size(4), original);
        assert!(one_cleared.is_overridden(5));

        let all_cleared = edited.without_overrides();
        assert_eq!(all_cleared.sizes(), state.sizes());
    }

    #[test]
    fn test_growing_past_f64_range_is_rejected() {
        let state = ScaleState::from_config(&config(16.0, 5))
            .unwrap()
            .with_override(4, 1e308)
            .unwrap();
        assert_eq!(
            state.apply(&config(16.0, 14)),
            Err(ScaleError::NonFiniteResult("size"))
        );
        assert_eq!(state.len(), 5);
    }

    #[test]
    fn test_invalid_config_leaves_state_untouched() {
        let state = ScaleState::from_config(&config(16.0, 8)).unwrap();
        let result = state.apply(&config(-2.0, 8));
        assert!(result.is_err());
        assert_eq!(state.size(3), Some(16.0));
    }

    #[test]
    fn test_step_size_only_in_curve_mode() {
        let mut cfg = config(16.0, 8);
        let state = ScaleState::from_config(&cfg).unwrap();
        let step = state.step_size().unwrap();
        assert!((step - (28.8 - 9.6) / 7.0).abs() < 1e-9);

        cfg.mode = ScaleMode::Proportional;
        assert_eq!(state.apply(&cfg).unwrap().step_size(), None);
    }

    #[test]
    fn test_steps_pairs_labels() {
        let state = ScaleState::from_config(&config(1.0, 5)).unwrap();
        let steps: Vec<_> = state.steps().collect();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[3], ("base", 1.0));
        assert_eq!(steps[4].0, "lg");
    }
}
