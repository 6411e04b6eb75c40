use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bayespro_core::{DomainResult, Probability};

/// Inputs to a single Bayesian update over two hypotheses (A and ¬A).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayesInput {
    /// Name of the event A (e.g. "Enfermedad").
    pub label_a: String,
    /// Name of the evidence B (e.g. "Prueba positiva").
    pub label_b: String,
    /// P(A).
    pub prior_a: f64,
    /// P(B|A).
    pub sensitivity: f64,
    /// P(B|¬A).
    pub false_positive_rate: f64,
}

/// Outcome of a Bayesian update. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayesResult {
    pub label_a: String,
    pub label_b: String,
    /// P(A).
    pub prior_a: f64,
    /// P(¬A) = 1 - P(A).
    pub prior_not_a: f64,
    /// P(B|A).
    pub sensitivity: f64,
    /// P(B|¬A).
    pub false_positive_rate: f64,
    /// P(B) by the law of total probability.
    pub evidence_probability: f64,
    /// P(A|B); 0 when P(B) = 0.
    pub posterior_a: f64,
    /// P(¬A|B) = 1 - P(A|B).
    pub posterior_not_a: f64,
    pub computed_at: DateTime<Utc>,
}

impl BayesResult {
    /// True when the evidence has zero probability and the posterior was
    /// defined as 0 rather than derived.
    pub fn is_degenerate(&self) -> bool {
        self.evidence_probability == 0.0
    }
}

/// Bayes' rule on raw probabilities.
///
/// Returns `(evidence, posterior)`. Callers are expected to have validated the
/// arguments as probabilities.
pub fn posterior(prior_a: f64, sensitivity: f64, false_positive_rate: f64) -> (f64, f64) {
    let joint = sensitivity * prior_a;
    let evidence = joint + false_positive_rate * (1.0 - prior_a);
    if evidence == 0.0 {
        return (0.0, 0.0);
    }
    (evidence, joint / evidence)
}

/// Compute the posterior for `input`, stamped with the current time.
pub fn compute(input: &BayesInput) -> DomainResult<BayesResult> {
    compute_at(input, Utc::now())
}

/// Compute the posterior for `input` with an explicit timestamp.
pub fn compute_at(input: &BayesInput, computed_at: DateTime<Utc>) -> DomainResult<BayesResult> {
    let prior_a = Probability::named("P(A)", input.prior_a)?;
    let sensitivity = Probability::named("P(B|A)", input.sensitivity)?;
    let false_positive_rate = Probability::named("P(B|¬A)", input.false_positive_rate)?;

    let (evidence_probability, posterior_a) = posterior(
        prior_a.value(),
        sensitivity.value(),
        false_positive_rate.value(),
    );

    let result = BayesResult {
        label_a: input.label_a.clone(),
        label_b: input.label_b.clone(),
        prior_a: prior_a.value(),
        prior_not_a: prior_a.complement().value(),
        sensitivity: sensitivity.value(),
        false_positive_rate: false_positive_rate.value(),
        evidence_probability,
        posterior_a,
        posterior_not_a: 1.0 - posterior_a,
        computed_at,
    };
    if result.is_degenerate() {
        tracing::debug!(
            prior_a = result.prior_a,
            "evidence has zero probability; posterior defined as 0"
        );
    }

    Ok(result)
}
