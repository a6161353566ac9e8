//! Sort engine for multi-key appointment ordering.
//!
//! Composes ordering rules sequentially: each rule is consulted only when
//! every earlier rule reports a tie.

use std::cmp::Ordering;
use std::sync::Arc;

use super::OrderingRule;
use crate::models::Appointment;

/// A composable chain of ordering rules.
///
/// # Example
/// ```
/// use clinic_schedule::sorting::{rules, SortEngine};
///
/// let engine = SortEngine::new()
///     .with_rule(rules::PatientProfile)
///     .with_tie_breaker(rules::DateTime);
/// assert_eq!(engine.rule_names(), vec!["PATIENT", "DATE_TIME"]);
/// ```
#[derive(Clone, Default)]
pub struct SortEngine {
    rules: Vec<Arc<dyn OrderingRule>>,
}

impl SortEngine {
    /// Creates an empty engine (every pair compares equal).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: OrderingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: OrderingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Compares two appointments through the rule chain.
    pub fn compare(&self, a: &Appointment, b: &Appointment) -> Ordering {
        for rule in &self.rules {
            let ord = rule.compare(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Stable in-place sort.
    pub fn sort(&self, appointments: &mut [Appointment]) {
        appointments.sort_by(|a, b| self.compare(a, b));
    }

    /// Indices into `appointments` in sorted order, leaving the slice as is.
    pub fn sort_indices(&self, appointments: &[Appointment]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..appointments.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&appointments[a], &appointments[b]));
        indices
    }

    /// Names of the rules in consultation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl std::fmt::Debug for SortEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
