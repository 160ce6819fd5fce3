#[cfg(test)]
#[path = "../../tests/unit/preference/veto_test.rs"]
mod veto_test;

use super::{Pairwise, PartialPreferences, check_partial_criteria, positive_weight_sum};
use crate::models::{Criteria, PrometheeConfig, Table};
use crate::utils::{Float, McdaResult, round_to};
use serde::{Deserialize, Serialize};

/// Specifies how per-criterion vetoes are combined into the overall veto index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VetoMode {
    /// A veto on any criterion forces the overall index to one.
    Full,
    /// The overall index is a weighted sum of per-criterion vetoes.
    Partial,
}

/// Per-criterion and overall veto indices.
#[derive(Clone, Debug, PartialEq)]
pub struct VetoIndices {
    /// Overall veto index per ordered pair.
    pub overall: Table,
    /// Boolean (0 or 1) veto per criterion in criteria order.
    pub partial: Vec<Table>,
}

/// Computes veto indices: criterion `k` vetoes pair `(i, j)` when `j` outperforms `i` on it by at
/// least the veto threshold. Criteria without veto threshold never veto.
pub fn compute_veto(
    partial: &PartialPreferences,
    criteria: &Criteria,
    mode: VetoMode,
    config: &PrometheeConfig,
) -> McdaResult<VetoIndices> {
    check_partial_criteria(partial, criteria)?;
    let weight_sum = positive_weight_sum(criteria)?;

    let vetoes = criteria
        .iter()
        .enumerate()
        .map(|(k, criterion)| {
            let deviation = partial.deviation(k);
            match criterion.veto {
                Some(threshold) => deviation.map(|d| if -d >= threshold { 1. } else { 0. }),
                None => deviation.map(|_| 0.),
            }
        })
        .collect::<Vec<_>>();

    let overall = Table::from_fn(partial.rows().clone(), partial.columns().clone(), |i, j| match mode {
        VetoMode::Full => {
            if vetoes.iter().any(|veto| veto.get(i, j) > 0.) {
                1.
            } else {
                0.
            }
        }
        VetoMode::Partial => {
            let weighted =
                criteria.iter().zip(vetoes.iter()).map(|(criterion, veto)| criterion.weight * veto.get(i, j));
            round_to(weighted.sum::<Float>() / weight_sum, config.decimal_place)
        }
    });

    Ok(VetoIndices { overall, partial: vetoes })
}

/// Computes veto indices for every matrix of the pairwise comparison.
pub fn compute_pairwise_veto(
    partial: &Pairwise<PartialPreferences>,
    criteria: &Criteria,
    mode: VetoMode,
    config: &PrometheeConfig,
) -> McdaResult<Pairwise<VetoIndices>> {
    partial.as_ref().try_map(|partial| compute_veto(partial, criteria, mode, config))
}
