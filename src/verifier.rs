//! Constraint verification boundary.
//!
//! The pipeline does not know how constraints are expressed; it only asks a
//! [`Verifier`] whether the populated problem state satisfies the constraints
//! assigned to a case's subtasks, and renders the structured result on
//! failure.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Outcome of checking all constraints scoped to a case's subtask ids.
///
/// Never mutated after verification completes; the pipeline reports it
/// verbatim on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConstraintsVerificationResult {
    unsatisfied_constraints: BTreeMap<i32, Vec<String>>,
    satisfied_but_not_assigned: Vec<i32>,
}

impl ConstraintsVerificationResult {
    /// Records a constraint of the given subtask that the state violates.
    /// The subtask id `-1` denotes the global constraint set.
    pub fn add_unsatisfied(&mut self, subtask_id: i32, description: impl Into<String>) {
        self.unsatisfied_constraints
            .entry(subtask_id)
            .or_default()
            .push(description.into());
    }

    /// Records a subtask whose constraints the state satisfies even though
    /// the case is not assigned to it.
    pub fn add_satisfied_but_not_assigned(&mut self, subtask_id: i32) {
        self.satisfied_but_not_assigned.push(subtask_id);
    }

    pub fn is_valid(&self) -> bool {
        self.unsatisfied_constraints.is_empty() && self.satisfied_but_not_assigned.is_empty()
    }

    pub fn unsatisfied_constraints(&self) -> &BTreeMap<i32, Vec<String>> {
        &self.unsatisfied_constraints
    }

    pub fn satisfied_but_not_assigned(&self) -> &[i32] {
        &self.satisfied_but_not_assigned
    }
}

/// Decides whether the applied input values satisfy the declared predicates.
pub trait Verifier<S> {
    fn verify_constraints(
        &self,
        state: &S,
        subtask_ids: &BTreeSet<i32>,
    ) -> ConstraintsVerificationResult;
}
