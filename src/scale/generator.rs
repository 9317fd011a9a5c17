//! Size sequence generation.
//!
//! In curve mode the sequence is split into three zones around the pivot:
//!
//! ```text
//!   xs   sm   md | base | lg   xl   2xl  ...
//!   <- smaller ->  1.0x   <------ larger ------>
//!   down to 0.6x          up to 1.8x
//! ```
//!
//! The smaller zone always has three steps and shrinks by at most 40% of the
//! base size. The larger zone has `num_steps - 4` steps and grows by at most
//! 80%. The curve decides how that allowance is distributed.

use tracing::debug;

use crate::models::curve::{CurveType, Generation};
use crate::models::scale_config::{validate_base_size, validate_intensity};
use crate::models::step::{clamp_step_count, PIVOT_INDEX, PROPORTIONAL_MULTIPLIERS, SMALLER_STEPS};

use super::{ScaleError, ScaleResult};

/// Largest fraction of the base size the smaller zone may shrink by.
pub const SHRINK_ALLOWANCE: f64 = 0.4;

/// Largest fraction of the base size the larger zone may grow by.
pub const GROWTH_ALLOWANCE: f64 = 0.8;

/// Generates a fresh size sequence.
///
/// `num_steps` is clamped into the supported range, so the result always has
/// between 5 and 14 entries.
pub fn generate_sizes(
    base_size: f64,
    num_steps: usize,
    generation: Generation,
) -> ScaleResult<Vec<f64>> {
    validate_base_size(base_size)?;
    let num_steps = clamp_step_count(num_steps);

    let sizes = match generation {
        Generation::Curve { curve, intensity } => {
            validate_intensity(intensity)?;
            curve_sizes(base_size, num_steps, curve, intensity)
        }
        Generation::Proportional => proportional_sizes(base_size, num_steps),
    };
    ensure_finite(&sizes)?;

    debug!(
        base_size,
        num_steps,
        ?generation,
        "generated size sequence"
    );
    Ok(sizes)
}

/// Rejects a sequence containing NaN or infinity.
///
/// Large base sizes or overrides can push scaled values past `f64::MAX`.
pub fn ensure_finite(sizes: &[f64]) -> ScaleResult<()> {
    if sizes.iter().all(|size| size.is_finite()) {
        Ok(())
    } else {
        Err(ScaleError::NonFiniteResult("size"))
    }
}

fn curve_sizes(base_size: f64, num_steps: usize, curve: CurveType, intensity: f64) -> Vec<f64> {
    let larger_steps = num_steps - (SMALLER_STEPS + 1);
    let mut sizes = Vec::with_capacity(num_steps);

    // Farthest first, so the sequence reads smallest to largest.
    for distance in (1..=SMALLER_STEPS).rev() {
        let weight = curve.weight(distance, SMALLER_STEPS, intensity);
        sizes.push(base_size - weight * base_size * SHRINK_ALLOWANCE);
    }

    sizes.push(base_size);

    for distance in 1..=larger_steps {
        let weight = curve.weight(distance, larger_steps, intensity);
        sizes.push(base_size + weight * base_size * GROWTH_ALLOWANCE);
    }

    sizes
}

fn proportional_sizes(base_size: f64, num_steps: usize) -> Vec<f64> {
    PROPORTIONAL_MULTIPLIERS[..num_steps]
        .iter()
        .map(|multiplier| base_size * multiplier)
        .collect()
}

/// Average spacing between neighbouring steps: `(last - first) / (count - 1)`.
///
/// Returns `None` for sequences too short to have a spacing.
#[must_use]
pub fn uniform_step_size(sizes: &[f64]) -> Option<f64> {
    match sizes {
        [first, .., last] => Some((last - first) / (sizes.len() - 1) as f64),
        _ => None,
    }
}

/// Value for a step that did not exist before a resize, extrapolated linearly
/// from the pivot. Never negative.
#[must_use]
pub fn extrapolate_step(base_size: f64, index: usize, step_size: f64) -> f64 {
    let offset = index as f64 - PIVOT_INDEX as f64;
    (base_size + offset * step_size).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::step::MAX_STEPS;

    fn curve(curve: CurveType, intensity: f64) -> Generation {
        Generation::Curve { curve, intensity }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_linear_eight_steps() {
        let sizes = generate_sizes(16.0, 8, curve(CurveType::Linear, 1.0)).unwrap();
        let expected = [
            9.6,
            16.0 - 6.4 * 2.0 / 3.0,
            16.0 - 6.4 / 3.0,
            16.0,
            19.2,
            22.4,
            25.6,
            28.8,
        ];
        assert_eq!(sizes.len(), 8);
        for (actual, expected) in sizes.iter().zip(expected) {
            assert_close(*actual, expected);
        }
    }

    #[test]
    fn test_pivot_is_exact_for_every_curve_and_length() {
        for c in CurveType::ALL {
            for n in 5..=MAX_STEPS {
                let sizes = generate_sizes(1.125, n, curve(c, 1.7)).unwrap();
                assert_eq!(sizes[PIVOT_INDEX], 1.125, "{c} with {n} steps");
            }
        }
    }

    #[test]
    fn test_sequences_strictly_increase() {
        for c in CurveType::ALL {
            for n in 5..=MAX_STEPS {
                let sizes = generate_sizes(16.0, n, curve(c, 2.5)).unwrap();
                for pair in sizes.windows(2) {
                    assert!(pair[0] < pair[1], "{c} with {n} steps: {sizes:?}");
                }
            }
        }
    }

    #[test]
    fn test_zone_endpoints() {
        for c in CurveType::ALL {
            let sizes = generate_sizes(10.0, 10, curve(c, 3.0)).unwrap();
            assert_close(sizes[0], 6.0);
            assert_close(sizes[9], 18.0);
        }
    }

    #[test]
    fn test_logarithmic_front_loads_growth() {
        let linear = generate_sizes(16.0, 8, curve(CurveType::Linear, 1.0)).unwrap();
        let log = generate_sizes(16.0, 8, curve(CurveType::Logarithmic, 1.0)).unwrap();
        assert!(log[4] > linear[4]);
    }

    #[test]
    fn test_minimum_length_has_single_larger_step() {
        let sizes = generate_sizes(16.0, 5, curve(CurveType::Exponential, 2.0)).unwrap();
        assert_eq!(sizes.len(), 5);
        assert_close(sizes[4], 28.8);
    }

    #[test]
    fn test_step_count_clamped() {
        let sizes = generate_sizes(16.0, 1, curve(CurveType::Linear, 1.0)).unwrap();
        assert_eq!(sizes.len(), 5);
        let sizes = generate_sizes(16.0, 40, curve(CurveType::Linear, 1.0)).unwrap();
        assert_eq!(sizes.len(), MAX_STEPS);
    }

    #[test]
    fn test_proportional_matches_table() {
        let sizes = generate_sizes(16.0, MAX_STEPS, Generation::Proportional).unwrap();
        for (size, multiplier) in sizes.iter().zip(PROPORTIONAL_MULTIPLIERS) {
            assert_eq!(*size, 16.0 * multiplier);
        }
    }

    #[test]
    fn test_proportional_small_base() {
        let sizes = generate_sizes(2.0, 6, Generation::Proportional).unwrap();
        assert_eq!(sizes, vec![1.2, 1.5, 1.75, 2.0, 2.25, 2.5]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            generate_sizes(0.0, 8, curve(CurveType::Linear, 1.0)),
            Err(ScaleError::InvalidParameter { name: "base_size", .. })
        ));
        assert!(generate_sizes(f64::NAN, 8, Generation::Proportional).is_err());
        assert!(matches!(
            generate_sizes(16.0, 8, curve(CurveType::Exponential, 0.0)),
            Err(ScaleError::InvalidParameter { name: "intensity", .. })
        ));
    }

    #[test]
    fn test_overflowing_base_size_is_rejected() {
        assert_eq!(
            generate_sizes(1e308, 8, curve(CurveType::Linear, 1.0)),
            Err(ScaleError::NonFiniteResult("size"))
        );
        assert_eq!(
            generate_sizes(1e308, MAX_STEPS, Generation::Proportional),
            Err(ScaleError::NonFiniteResult("size"))
        );
        assert!(generate_sizes(1e300, 8, curve(CurveType::Linear, 1.0)).is_ok());
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(&[0.0, 1.5, 2.0]).is_ok());
        assert!(ensure_finite(&[1.0, f64::NAN]).is_err());
        assert!(ensure_finite(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn test_uniform_step_size() {
        assert_eq!(uniform_step_size(&[1.0, 2.0, 3.0, 5.0, 9.0]), Some(2.0));
        assert_eq!(uniform_step_size(&[1.0]), None);
        assert_eq!(uniform_step_size(&[]), None);
    }

    #[test]
    fn test_extrapolate_step() {
        assert_close(extrapolate_step(16.0, 8, 2.0), 26.0);
        assert_eq!(extrapolate_step(1.0, 0, 5.0), 0.0);
    }
}
