use super::*;
use crate::models::GeneralizedCriterion;

/// Checks that problem has at least one criterion.
fn check_e1001_criteria_are_present(ctx: &ValidationContext) -> Result<(), String> {
    if ctx.problem.criteria.is_empty() { Err("E1001: Problem has no criteria".to_string()) } else { Ok(()) }
}

/// Checks that criteria names are unique.
fn check_e1002_no_criteria_with_duplicate_names(ctx: &ValidationContext) -> Result<(), String> {
    get_duplicates(ctx.criteria().map(|criterion| &criterion.name))
        .map_or(Ok(()), |names| Err(format!("E1002: Duplicated criteria names: {}", names.join(", "))))
}

/// Checks that weights are strictly positive.
fn check_e1003_positive_weights(ctx: &ValidationContext) -> Result<(), String> {
    let names = ctx
        .criteria()
        .filter(|criterion| !(criterion.weight.is_finite() && criterion.weight > 0.))
        .map(|criterion| criterion.name.clone())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(format!("E1003: Criteria with non positive weight: {}", names.join(", ")))
    }
}

/// Checks thresholds of preference functions: `p > q ≥ 0`, `p > 0` and `s > 0`.
fn check_e1004_preference_function_thresholds(ctx: &ValidationContext) -> Result<(), String> {
    let is_valid = |function: &GeneralizedCriterion| match *function {
        GeneralizedCriterion::Usual => true,
        GeneralizedCriterion::UShape { q } => q.is_finite() && q >= 0.,
        GeneralizedCriterion::VShape { p } => p.is_finite() && p > 0.,
        GeneralizedCriterion::Level { q, p } | GeneralizedCriterion::VShapeIndifference { q, p } => {
            q.is_finite() && p.is_finite() && q >= 0. && p > q
        }
        GeneralizedCriterion::Gaussian { s } => s.is_finite() && s > 0.,
    };

    let names = ctx
        .criteria()
        .filter(|criterion| !is_valid(&criterion.function))
        .map(|criterion| criterion.name.clone())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(format!("E1004: Invalid preference function thresholds of criteria: {}", names.join(", ")))
    }
}

/// Checks that veto threshold exceeds preference threshold.
fn check_e1005_veto_above_preference_threshold(ctx: &ValidationContext) -> Result<(), String> {
    let names = ctx
        .criteria()
        .filter(|criterion| match criterion.veto {
            Some(veto) => !veto.is_finite() || criterion.function.preference_threshold().is_some_and(|p| veto <= p),
            None => false,
        })
        .map(|criterion| criterion.name.clone())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(format!("E1005: Veto threshold must exceed preference threshold of criteria: {}", names.join(", ")))
    }
}

/// Checks that reinforced preference threshold exceeds preference threshold and factor is at least one.
fn check_e1006_reinforcement_parameters(ctx: &ValidationContext) -> Result<(), String> {
    let names = ctx
        .criteria()
        .filter(|criterion| match criterion.reinforcement {
            Some(reinforcement) => {
                !(reinforcement.threshold.is_finite() && reinforcement.factor >= 1.)
                    || criterion.function.preference_threshold().is_some_and(|p| reinforcement.threshold <= p)
            }
            None => false,
        })
        .map(|criterion| criterion.name.clone())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(format!("E1006: Invalid reinforced preference of criteria: {}", names.join(", ")))
    }
}

/// Validates criteria definitions.
pub fn validate_criteria(ctx: &ValidationContext) -> Result<(), Vec<String>> {
    combine_error_results(&[
        check_e1001_criteria_are_present(ctx),
        check_e1002_no_criteria_with_duplicate_names(ctx),
        check_e1003_positive_weights(ctx),
        check_e1004_preference_function_thresholds(ctx),
        check_e1005_veto_above_preference_threshold(ctx),
        check_e1006_reinforcement_parameters(ctx),
    ])
}
