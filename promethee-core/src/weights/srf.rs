#[cfg(test)]
#[path = "../../tests/unit/weights/srf_test.rs"]
mod srf_test;

use super::{CriterionWeight, normalize, split_ranks};
use crate::models::PrometheeConfig;
use crate::utils::{Float, McdaError, McdaResult};

/// A default ratio between the most and the least important criterion.
pub const DEFAULT_WEIGHT_RATIO: Float = 6.5;

/// Computes weights with the revised Simos (SRF) method. Rank 1 is the least important criterion and
/// unused ranks between used ones act as blank cards. For the highest rank `N` and ratio `z` the
/// non normalized weight is `1 + (z - 1)·(r - 1) / (N - 1)`.
pub fn srf_weights(
    ranks: &[(&str, usize)],
    weight_ratio: Float,
    config: &PrometheeConfig,
) -> McdaResult<Vec<CriterionWeight>> {
    if weight_ratio.is_nan() || weight_ratio < 1. {
        return Err(McdaError::domain(format!("weight ratio must be >= 1, got {weight_ratio}")));
    }

    let (labels, ranks) = split_ranks(ranks)?;
    let highest = ranks.iter().copied().max().unwrap_or(1);

    let raw = ranks
        .iter()
        .map(|&rank| {
            if highest == 1 {
                1.
            } else {
                1. + (weight_ratio - 1.) * (rank - 1) as Float / (highest - 1) as Float
            }
        })
        .collect();

    Ok(normalize(&labels, raw, config.decimal_place))
}
