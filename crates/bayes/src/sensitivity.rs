//! Sensitivity analysis: how the posterior P(A|B) responds to the prior P(A)
//! for a fixed test (sensitivity and false-positive rate).

use serde::{Deserialize, Serialize};

use bayespro_core::{DomainError, DomainResult, Probability};

use crate::calculator::posterior;

/// Upper bound on generated points; keeps a tiny step from producing an
/// unbounded response.
pub const MAX_POINTS: usize = 1_001;

/// Default slider step for the prior range.
pub const DEFAULT_STEP: f64 = 0.05;

/// Closed range of priors to sweep.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorRange {
    pub lo: f64,
    pub hi: f64,
}

impl PriorRange {
    pub fn full() -> Self {
        Self { lo: 0.0, hi: 1.0 }
    }

    fn validate(&self) -> DomainResult<()> {
        let lo = Probability::named("range lower bound", self.lo)?;
        let hi = Probability::named("range upper bound", self.hi)?;
        if lo > hi {
            return Err(DomainError::validation(format!(
                "range lower bound {} exceeds upper bound {}",
                self.lo, self.hi
            )));
        }
        Ok(())
    }
}

impl Default for PriorRange {
    fn default() -> Self {
        Self::full()
    }
}

/// A point on the sensitivity curve.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub prior_a: f64,
    pub posterior_a: f64,
}

/// Evaluate P(A|B) for priors across `range`, `step` apart, both ends included.
pub fn sweep(
    sensitivity: f64,
    false_positive_rate: f64,
    range: PriorRange,
    step: f64,
) -> DomainResult<Vec<SweepPoint>> {
    let sensitivity = Probability::named("P(B|A)", sensitivity)?.value();
    let false_positive_rate = Probability::named("P(B|¬A)", false_positive_rate)?.value();
    range.validate()?;
    if !step.is_finite() || step <= 0.0 {
        return Err(DomainError::validation(format!(
            "step must be a positive number (got {step})"
        )));
    }

    let span = range.hi - range.lo;
    // Tolerate float noise so 0.0..1.0 by 0.05 yields 21 points, not 20.
    let whole = (span / step + 1e-9).floor();
    // Bound the count in floating point; a tiny step would saturate the cast.
    if whole + 1.0 > MAX_POINTS as f64 {
        return Err(too_many_points(step));
    }
    let intervals = whole as usize;

    let mut priors: Vec<f64> = (0..=intervals)
        .map(|i| (range.lo + i as f64 * step).min(range.hi))
        .collect();
    if let Some(&last) = priors.last() {
        if range.hi - last > 1e-9 {
            priors.push(range.hi);
        }
    }
    if priors.len() > MAX_POINTS {
        return Err(too_many_points(step));
    }

    Ok(priors
        .into_iter()
        .map(|prior_a| SweepPoint {
            prior_a,
            posterior_a: posterior(prior_a, sensitivity, false_positive_rate).1,
        })
        .collect())
}

fn too_many_points(step: f64) -> DomainError {
    DomainError::validation(format!("step {step} yields more than {MAX_POINTS} points"))
}
