//! Bayesian update module.
//!
//! This crate contains the two-hypothesis Bayes' rule calculation, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no rendering).

pub mod calculator;
pub mod sensitivity;

pub use calculator::{compute, compute_at, posterior, BayesInput, BayesResult};
pub use sensitivity::{sweep, PriorRange, SweepPoint};
