#[cfg(test)]
#[path = "../../tests/unit/preference/discordance_test.rs"]
mod discordance_test;

use super::{Pairwise, PartialPreferences};
use crate::models::{PrometheeConfig, Table};
use crate::utils::{Float, McdaError, McdaResult, round_to};

/// Per-criterion and overall discordance indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Discordance {
    /// Overall discordance per ordered pair.
    pub overall: Table,
    /// Partial discordance per criterion in criteria order.
    pub partial: Vec<Table>,
}

/// Computes discordance of pairs of `direct` partial preferences. Partial discordance of `(i, j)` on
/// a criterion is the partial preference of `j` over `i` taken from `reverse` at `(j, i)`.
///
/// Overall discordance is `1 - Π_k (1 - D_k)^(τ / K)` where `τ ∈ [1, K]` is the discordance
/// strength and `K` is the amount of criteria.
pub fn compute_discordance(
    direct: &PartialPreferences,
    reverse: &PartialPreferences,
    tau: Float,
    config: &PrometheeConfig,
) -> McdaResult<Discordance> {
    let criteria_count = direct.criteria().len();
    if !(1. ..=criteria_count as Float).contains(&tau) {
        return Err(McdaError::domain(format!("tau must be in [1, {criteria_count}], got {tau}")));
    }

    let is_reversed = reverse.criteria() == direct.criteria()
        && reverse.rows() == direct.columns()
        && reverse.columns() == direct.rows();
    if !is_reversed {
        return Err(McdaError::shape("reversed partial preferences do not match direct ones"));
    }

    let partial = (0..criteria_count)
        .map(|k| {
            let reversed = reverse.preference(k);
            Table::from_fn(direct.rows().clone(), direct.columns().clone(), |i, j| reversed.get(j, i))
        })
        .collect::<Vec<_>>();

    let exponent = tau / criteria_count as Float;
    let overall = Table::from_fn(direct.rows().clone(), direct.columns().clone(), |i, j| {
        let product: Float = partial.iter().map(|discordance| (1. - discordance.get(i, j)).powf(exponent)).product();

        round_to(1. - product, config.decimal_place)
    });

    Ok(Discordance { overall, partial })
}

/// Computes discordance for every matrix of the pairwise comparison.
pub fn compute_pairwise_discordance(
    partial: &Pairwise<PartialPreferences>,
    tau: Float,
    config: &PrometheeConfig,
) -> McdaResult<Pairwise<Discordance>> {
    partial.try_map_with_reverse(|direct, reverse| compute_discordance(direct, reverse, tau, config))
}
