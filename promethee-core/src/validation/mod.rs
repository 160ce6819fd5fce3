//! This module provides functionality to validate a decision problem definition before any stage
//! of the pipeline runs. Every failed check is reported with its code.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::models::{Criterion, DecisionProblem, PerformanceRecord};
use crate::utils::{McdaError, McdaResult};

mod common;
use self::common::*;

mod criteria;
use self::criteria::validate_criteria;

mod performances;
use self::performances::validate_performances;

mod profiles;
use self::profiles::validate_profiles;

mod group;
pub use self::group::*;

/// Keeps a problem definition to validate.
pub struct ValidationContext<'a> {
    /// A problem definition.
    pub problem: &'a DecisionProblem,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a DecisionProblem) -> Self {
        Self { problem }
    }

    /// Validates problem on set of rules.
    pub fn validate(&self) -> McdaResult<()> {
        let errors = validate_criteria(self)
            .err()
            .into_iter()
            .chain(validate_performances(self).err())
            .chain(validate_profiles(self).err())
            .flatten()
            .collect::<Vec<_>>();

        into_result(errors)
    }

    fn criteria(&self) -> impl Iterator<Item = &Criterion> {
        self.problem.criteria.iter()
    }

    fn alternatives(&self) -> impl Iterator<Item = &PerformanceRecord> {
        self.problem.alternatives.iter()
    }

    fn profiles(&self) -> impl Iterator<Item = &PerformanceRecord> {
        self.problem.profiles.iter()
    }
}

fn into_result(errors: Vec<String>) -> McdaResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(McdaError::shape(format!("problem has the following validation errors: {}", errors.join(", "))))
    }
}
