#[cfg(test)]
#[path = "../../tests/unit/preference/reinforced_test.rs"]
mod reinforced_test;

use super::{PartialPreferences, check_partial_criteria, check_partial_range, positive_weight_sum};
use crate::models::{Criteria, PrometheeConfig, Table};
use crate::utils::{McdaResult, round_to};

/// Aggregates partial preferences taking reinforced preference into account: once deviation on
/// criterion `k` exceeds its reinforcement threshold, the criterion contributes `ω_k · w_k` both to
/// the weighted sum and to the weights sum. Other criteria are aggregated as usual.
pub fn aggregate_reinforced_preferences(
    partial: &PartialPreferences,
    criteria: &Criteria,
    config: &PrometheeConfig,
) -> McdaResult<Table> {
    check_partial_criteria(partial, criteria)?;
    check_partial_range(partial)?;
    positive_weight_sum(criteria)?;

    Ok(Table::from_fn(partial.rows().clone(), partial.columns().clone(), |i, j| {
        let (numerator, denominator) =
            criteria.iter().enumerate().fold((0., 0.), |(numerator, denominator), (k, criterion)| {
                let weight = criterion.weight;
                match criterion.reinforcement {
                    Some(reinforcement) if partial.deviation(k).get(i, j) > reinforcement.threshold => {
                        let reinforced = reinforcement.factor * weight;
                        (numerator + reinforced, denominator + reinforced)
                    }
                    _ => (numerator + weight * partial.preference(k).get(i, j), denominator + weight),
                }
            });

        round_to(numerator / denominator, config.decimal_place)
    }))
}
