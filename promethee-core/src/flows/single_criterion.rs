#[cfg(test)]
#[path = "../../tests/unit/flows/single_criterion_test.rs"]
mod single_criterion_test;

use crate::models::{PrometheeConfig, Table};
use crate::preference::PartialPreferences;
use crate::utils::{Float, McdaError, McdaResult, round_to};

/// Computes per-criterion net flows within one set of objects. The result has objects as rows and
/// criteria as columns: `φ_k(i) = Σ_{j ≠ i} [P_k(i, j) - P_k(j, i)] / (n - 1)`.
pub fn single_criterion_net_flows(partial: &PartialPreferences, config: &PrometheeConfig) -> McdaResult<Table> {
    if partial.rows() != partial.columns() {
        return Err(McdaError::shape("single criterion flows require comparison of objects with themselves"));
    }

    let size = partial.rows().len();
    let others = size.saturating_sub(1).max(1) as Float;

    Ok(Table::from_fn(partial.rows().clone(), partial.criteria().clone(), |i, k| {
        let matrix = partial.preference(k);
        let sum: Float = (0..size).filter(|&j| j != i).map(|j| matrix.get(i, j) - matrix.get(j, i)).sum();

        round_to(sum / others, config.decimal_place)
    }))
}

/// Computes per-criterion net flows of alternatives relative to profiles. The result has alternatives
/// as rows and criteria as columns: `φ_k(a) = Σ_r [P_k(a, r) - P_k(r, a)] / |R|`.
pub fn cross_single_criterion_net_flows(
    alternatives_profiles: &PartialPreferences,
    profiles_alternatives: &PartialPreferences,
    config: &PrometheeConfig,
) -> McdaResult<Table> {
    if alternatives_profiles.rows() != profiles_alternatives.columns()
        || alternatives_profiles.columns() != profiles_alternatives.rows()
        || alternatives_profiles.criteria() != profiles_alternatives.criteria()
    {
        return Err(McdaError::shape("alternatives vs profiles partial preferences are not consistent"));
    }

    let profiles = alternatives_profiles.columns().len();
    let denominator = profiles.max(1) as Float;

    Ok(Table::from_fn(alternatives_profiles.rows().clone(), alternatives_profiles.criteria().clone(), |a, k| {
        let outgoing = alternatives_profiles.preference(k);
        let incoming = profiles_alternatives.preference(k);
        let sum: Float = (0..profiles).map(|r| outgoing.get(a, r) - incoming.get(r, a)).sum();

        round_to(sum / denominator, config.decimal_place)
    }))
}
