#[cfg(test)]
#[path = "../../tests/unit/preference/interactions_test.rs"]
mod interactions_test;

use super::{Pairwise, PartialPreferences, check_partial_criteria, check_partial_range};
use crate::models::{Criteria, Interaction, InteractionKind, InteractionMode, PrometheeConfig, Table};
use crate::utils::{Float, McdaError, McdaResult, round_to};

struct ResolvedInteraction {
    first: usize,
    second: usize,
    kind: InteractionKind,
    coefficient: Float,
}

/// Aggregates partial preferences taking pairwise criteria interactions into account:
///
/// `π(i, j) = [Σ w_k P_k + Σ_syn k·Z(P_a, P_b) - Σ_weak k·Z(P_a, P_b) - Σ_ant k·Z(P_a(i, j), P_b(j, i))] / K`
///
/// where `K = Σ w_k + Σ_syn k - Σ_weak k`, coefficients are taken by absolute value and `Z` is either
/// product or minimum depending on configuration. The reversed preference `P_b(j, i)` is read from
/// `reverse` at `(j, i)`. Negative results are clamped to zero.
pub fn aggregate_with_interactions(
    direct: &PartialPreferences,
    reverse: &PartialPreferences,
    criteria: &Criteria,
    interactions: &[Interaction],
    config: &PrometheeConfig,
) -> McdaResult<Table> {
    check_partial_criteria(direct, criteria)?;
    check_partial_criteria(reverse, criteria)?;
    check_partial_range(direct)?;
    check_partial_range(reverse)?;

    let interactions = resolve_interactions(criteria, interactions)?;
    let denominator = criteria.weight_sum()
        + interactions
            .iter()
            .map(|interaction| match interaction.kind {
                InteractionKind::Synergy => interaction.coefficient,
                InteractionKind::Weakening => -interaction.coefficient,
                InteractionKind::Antagonistic => 0.,
            })
            .sum::<Float>();

    if denominator <= 0. {
        return Err(McdaError::domain(format!(
            "sum of weights and interaction coefficients must be positive, got {denominator}"
        )));
    }

    let joint = |a: Float, b: Float| match config.interaction_mode {
        InteractionMode::Multiplication => a * b,
        InteractionMode::Minimum => a.min(b),
    };

    Ok(Table::from_fn(direct.rows().clone(), direct.columns().clone(), |i, j| {
        let weighted: Float =
            criteria.iter().enumerate().map(|(k, criterion)| criterion.weight * direct.preference(k).get(i, j)).sum();

        let correction: Float = interactions
            .iter()
            .map(|interaction| {
                let first = direct.preference(interaction.first).get(i, j);
                match interaction.kind {
                    InteractionKind::Synergy => {
                        interaction.coefficient * joint(first, direct.preference(interaction.second).get(i, j))
                    }
                    InteractionKind::Weakening => {
                        -interaction.coefficient * joint(first, direct.preference(interaction.second).get(i, j))
                    }
                    InteractionKind::Antagonistic => {
                        -interaction.coefficient * joint(first, reverse.preference(interaction.second).get(j, i))
                    }
                }
            })
            .sum();

        round_to(((weighted + correction) / denominator).max(0.), config.decimal_place)
    }))
}

/// Aggregates every matrix of the pairwise comparison taking criteria interactions into account.
pub fn compute_interaction_preferences(
    partial: &Pairwise<PartialPreferences>,
    criteria: &Criteria,
    interactions: &[Interaction],
    config: &PrometheeConfig,
) -> McdaResult<Pairwise<Table>> {
    partial.try_map_with_reverse(|direct, reverse| {
        aggregate_with_interactions(direct, reverse, criteria, interactions, config)
    })
}

fn resolve_interactions(criteria: &Criteria, interactions: &[Interaction]) -> McdaResult<Vec<ResolvedInteraction>> {
    interactions
        .iter()
        .map(|interaction| {
            let first = criteria.labels().require(&interaction.first, "criterion")?;
            let second = criteria.labels().require(&interaction.second, "criterion")?;

            if first == second {
                return Err(McdaError::shape(format!("criterion '{}' cannot interact with itself", interaction.first)));
            }

            let coefficient = interaction.coefficient.abs();

            Ok(ResolvedInteraction { first, second, kind: interaction.kind, coefficient })
        })
        .collect()
}
