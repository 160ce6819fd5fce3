#[cfg(test)]
#[path = "../../tests/unit/flows/basic_test.rs"]
mod basic_test;

use super::FlowTable;
use crate::models::{PrometheeConfig, Table};
use crate::utils::{Float, McdaError, McdaResult, mean_of, round_to};

/// Computes flows within one set of objects:
/// positive flow of `i` is the mean of `π(i, j)`, negative is the mean of `π(j, i)` over all `j ≠ i`.
pub fn basic_flows(preferences: &Table, config: &PrometheeConfig) -> McdaResult<FlowTable> {
    if preferences.rows() != preferences.columns() {
        return Err(McdaError::shape("basic flows require a square preference matrix over the same objects"));
    }

    let size = preferences.n_rows();
    let others = size.saturating_sub(1).max(1) as Float;

    let (positive, negative): (Vec<_>, Vec<_>) = (0..size)
        .map(|i| {
            let (outgoing, incoming) = (0..size).filter(|&j| j != i).fold((0., 0.), |(outgoing, incoming), j| {
                (outgoing + preferences.get(i, j), incoming + preferences.get(j, i))
            });

            (round_to(outgoing / others, config.decimal_place), round_to(incoming / others, config.decimal_place))
        })
        .unzip();

    FlowTable::new(preferences.rows().clone(), positive, negative)
}

/// Computes flows of alternatives relative to a disjoint set of profiles: positive flow of `a` is the
/// mean of `π(a, r)` and negative flow is the mean of `π(r, a)` over all profiles `r`.
pub fn cross_flows(
    alternatives_profiles: &Table,
    profiles_alternatives: &Table,
    config: &PrometheeConfig,
) -> McdaResult<FlowTable> {
    if alternatives_profiles.rows() != profiles_alternatives.columns()
        || alternatives_profiles.columns() != profiles_alternatives.rows()
    {
        return Err(McdaError::shape("alternatives vs profiles preferences are not consistent"));
    }

    let (positive, negative): (Vec<_>, Vec<_>) = (0..alternatives_profiles.n_rows())
        .map(|a| {
            let outgoing = mean_of(alternatives_profiles.row(a).iter().copied());
            let incoming = mean_of(profiles_alternatives.column(a));

            (round_to(outgoing, config.decimal_place), round_to(incoming, config.decimal_place))
        })
        .unzip();

    FlowTable::new(alternatives_profiles.rows().clone(), positive, negative)
}
