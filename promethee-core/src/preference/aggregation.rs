#[cfg(test)]
#[path = "../../tests/unit/preference/aggregation_test.rs"]
mod aggregation_test;

use super::{Pairwise, PartialPreferences, compute_partial_preferences};
use crate::models::{Criteria, PrometheeConfig, Table};
use crate::utils::{Float, McdaError, McdaResult, round_to};

/// Aggregated preference indices together with partial preferences they were built from.
#[derive(Clone, Debug, PartialEq)]
pub struct Preferences {
    /// Aggregated preference index per ordered pair.
    pub aggregated: Table,
    /// Per-criterion partial preferences.
    pub partial: PartialPreferences,
}

/// Aggregates partial preferences into `π(i, j) = Σ w_k P_k(i, j) / Σ w_k`, rounded as configured.
pub fn aggregate_preferences(
    partial: &PartialPreferences,
    criteria: &Criteria,
    config: &PrometheeConfig,
) -> McdaResult<Table> {
    check_partial_criteria(partial, criteria)?;
    check_partial_range(partial)?;

    let weight_sum = positive_weight_sum(criteria)?;
    let weights = criteria.iter().map(|criterion| criterion.weight).collect::<Vec<_>>();

    Ok(Table::from_fn(partial.rows().clone(), partial.columns().clone(), |i, j| {
        let weighted: Float =
            weights.iter().enumerate().map(|(k, weight)| weight * partial.preference(k).get(i, j)).sum();

        round_to(weighted / weight_sum, config.decimal_place)
    }))
}

/// Computes partial and aggregated preferences between alternatives or, when profiles are
/// supplied, between alternatives and profiles in both directions.
pub fn compute_preferences(
    performances: &Table,
    criteria: &Criteria,
    profiles: Option<&Table>,
    config: &PrometheeConfig,
) -> McdaResult<Pairwise<Preferences>> {
    compute_partial_preferences(performances, criteria, profiles, config)?.try_map(|partial| {
        let aggregated = aggregate_preferences(&partial, criteria, config)?;

        Ok(Preferences { aggregated, partial })
    })
}

/// Corrects preferences with an index in `[0, 1]` (veto or discordance): `π · (1 - index)`.
pub fn correct_preferences(preferences: &Table, index: &Table, config: &PrometheeConfig) -> McdaResult<Table> {
    if preferences.rows() != index.rows() || preferences.columns() != index.columns() {
        return Err(McdaError::shape("preference and correction index tables have different labels"));
    }

    Ok(preferences.map_indexed(|i, j, value| round_to(value * (1. - index.get(i, j)), config.decimal_place)))
}

pub(crate) fn positive_weight_sum(criteria: &Criteria) -> McdaResult<Float> {
    let weight_sum = criteria.weight_sum();

    if weight_sum > 0. { Ok(weight_sum) } else { Err(McdaError::domain("sum of criteria weights must be positive")) }
}

pub(crate) fn check_partial_criteria(partial: &PartialPreferences, criteria: &Criteria) -> McdaResult<()> {
    if partial.criteria() != criteria.labels() {
        return Err(McdaError::shape("partial preferences are built for different criteria"));
    }

    Ok(())
}

pub(crate) fn check_partial_range(partial: &PartialPreferences) -> McdaResult<()> {
    partial.preferences().iter().enumerate().try_for_each(|(k, matrix)| {
        (0..matrix.n_rows()).flat_map(|i| (0..matrix.n_columns()).map(move |j| (i, j))).try_for_each(|(i, j)| {
            let value = matrix.get(i, j);
            if (0. ..=1.).contains(&value) {
                Ok(())
            } else {
                Err(McdaError::domain(format!(
                    "partial preference of '{}' over '{}' on criterion '{}' is outside [0, 1]: {value}",
                    matrix.rows().name(i),
                    matrix.columns().name(j),
                    partial.criteria().name(k)
                )))
            }
        })
    })
}
