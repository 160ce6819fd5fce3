#[cfg(test)]
#[path = "../../tests/unit/weights/surrogate_test.rs"]
mod surrogate_test;

use super::{CriterionWeight, normalize, split_ranks};
use crate::models::PrometheeConfig;
use crate::utils::{Float, McdaError, McdaResult};
use serde::{Deserialize, Serialize};

/// A method to derive weights from ranks where rank 1 is the most important criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurrogateMethod {
    /// All criteria get the same weight.
    Equal,
    /// Weight is proportional to `n + 1 - r`.
    RankSum,
    /// Weight is proportional to `1 / r`.
    Reciprocal,
    /// Weight is proportional to `Σ_{j = r..n} 1 / j` (rank order centroid).
    RankOrderCentroid,
}

/// Computes surrogate weights from criteria ranks in `1..=n` where `n` is amount of criteria.
/// Weights sum to one before rounding.
pub fn surrogate_weights(
    ranks: &[(&str, usize)],
    method: SurrogateMethod,
    config: &PrometheeConfig,
) -> McdaResult<Vec<CriterionWeight>> {
    let (labels, ranks) = split_ranks(ranks)?;
    let size = ranks.len();

    if let Some(idx) = ranks.iter().position(|&rank| rank > size) {
        return Err(McdaError::domain(format!(
            "rank of criterion '{}' must not exceed amount of criteria {size}",
            labels.name(idx)
        )));
    }

    let raw = ranks
        .iter()
        .map(|&rank| match method {
            SurrogateMethod::Equal => 1.,
            SurrogateMethod::RankSum => (size + 1 - rank) as Float,
            SurrogateMethod::Reciprocal => 1. / rank as Float,
            SurrogateMethod::RankOrderCentroid => (rank..=size).map(|j| 1. / j as Float).sum(),
        })
        .collect();

    Ok(normalize(&labels, raw, config.decimal_place))
}
