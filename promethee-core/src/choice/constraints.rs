use crate::utils::{FLOAT_TOLERANCE, Float};
use serde::{Deserialize, Serialize};

/// A relation between the left side of a constraint and its bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintRelation {
    /// Equal to the bound.
    Eq,
    /// Greater than or equal to the bound.
    Geq,
    /// Less than or equal to the bound.
    Leq,
}

/// A linear constraint `Σ multipliers(i)·x(i) (=|≥|≤) bound` over a 0/1 selection vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// A multiplier per alternative in alternatives order.
    pub multipliers: Vec<Float>,
    /// A relation to the bound.
    pub relation: ConstraintRelation,
    /// A bound.
    pub bound: Float,
}

impl Constraint {
    /// Creates a new instance of `Constraint`.
    pub fn new(multipliers: Vec<Float>, relation: ConstraintRelation, bound: Float) -> Self {
        Self { multipliers, relation, bound }
    }

    /// Checks whether the selection given as a bit mask satisfies the constraint.
    /// Bit `n - 1 - i` of the mask corresponds to alternative `i`. All relations compare the left
    /// side with the bound using `FLOAT_TOLERANCE`.
    pub fn is_satisfied(&self, mask: u64) -> bool {
        let size = self.multipliers.len();
        let total = self
            .multipliers
            .iter()
            .enumerate()
            .filter(|(idx, _)| is_selected(mask, size, *idx))
            .map(|(_, multiplier)| multiplier)
            .sum::<Float>();

        match self.relation {
            ConstraintRelation::Eq => (total - self.bound).abs() <= FLOAT_TOLERANCE,
            ConstraintRelation::Geq => total >= self.bound - FLOAT_TOLERANCE,
            ConstraintRelation::Leq => total <= self.bound + FLOAT_TOLERANCE,
        }
    }
}

/// Checks whether alternative at given position is selected in the mask of `size` alternatives.
#[inline]
pub(crate) fn is_selected(mask: u64, size: usize, idx: usize) -> bool {
    (mask >> (size - 1 - idx)) & 1 == 1
}
