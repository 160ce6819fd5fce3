//! The weights module derives numeric criteria weights from a qualitative ranking of criteria.

use crate::models::Labels;
use crate::utils::{Float, McdaError, McdaResult, round_to};

mod srf;
pub use self::srf::*;

mod surrogate;
pub use self::surrogate::*;

/// A weight of a criterion.
#[derive(Clone, Debug, PartialEq)]
pub struct CriterionWeight {
    /// A name of the criterion.
    pub criterion: String,
    /// A weight.
    pub weight: Float,
}

/// Splits ranks into labels and rank values, fails on duplicated criteria or zero rank.
fn split_ranks(ranks: &[(&str, usize)]) -> McdaResult<(Labels, Vec<usize>)> {
    if ranks.is_empty() {
        return Err(McdaError::shape("at least one criterion rank is required"));
    }

    if let Some((name, _)) = ranks.iter().find(|(_, rank)| *rank == 0) {
        return Err(McdaError::domain(format!("rank of criterion '{name}' must be positive")));
    }

    let labels = Labels::new(ranks.iter().map(|(name, _)| *name))?;

    Ok((labels, ranks.iter().map(|(_, rank)| *rank).collect()))
}

/// Normalizes raw weights to sum to one and rounds them.
fn normalize(labels: &Labels, raw: Vec<Float>, decimal_place: Option<u32>) -> Vec<CriterionWeight> {
    let total = raw.iter().sum::<Float>();

    labels
        .iter()
        .zip(raw)
        .map(|(criterion, weight)| CriterionWeight {
            criterion: criterion.to_string(),
            weight: round_to(weight / total, decimal_place),
        })
        .collect()
}
