use super::*;
use crate::choice::{Constraint, MAX_CHOICE_ALTERNATIVES};
use crate::flows::NetFlows;
use crate::utils::Float;

/// Checks that decision makers and weights are present and agree in amount.
fn check_e3001_decision_makers_have_weights(flows: &[NetFlows], weights: &[Float]) -> Result<(), String> {
    if flows.is_empty() {
        Err("E3001: No decision makers are given".to_string())
    } else if flows.len() != weights.len() {
        Err(format!("E3001: Expected {} decision maker weights, got {}", flows.len(), weights.len()))
    } else {
        Ok(())
    }
}

/// Checks that decision maker weights are finite and non negative.
fn check_e3002_non_negative_decision_maker_weights(weights: &[Float]) -> Result<(), String> {
    if weights.iter().all(|weight| weight.is_finite() && *weight >= 0.) {
        Ok(())
    } else {
        Err("E3002: Decision maker weights must be finite and non negative".to_string())
    }
}

/// Checks that all decision makers evaluate the same alternatives.
fn check_e3003_same_alternatives(flows: &[NetFlows]) -> Result<(), String> {
    let indices = flows
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, dm)| flows.first().is_some_and(|first| first.labels() != dm.labels()))
        .map(|(idx, _)| idx.to_string())
        .collect::<Vec<_>>();

    if indices.is_empty() {
        Ok(())
    } else {
        Err(format!("E3003: Decision makers evaluate different alternatives: {}", indices.join(", ")))
    }
}

/// Checks that choice problem size is supported.
fn check_e3101_choice_size(alternatives: usize) -> Result<(), String> {
    if (1..=MAX_CHOICE_ALTERNATIVES).contains(&alternatives) {
        Ok(())
    } else {
        Err(format!("E3101: Choice supports from 1 to {MAX_CHOICE_ALTERNATIVES} alternatives, got {alternatives}"))
    }
}

/// Checks that every constraint has a finite multiplier per alternative and a finite bound.
fn check_e3102_constraint_shapes(alternatives: usize, constraints: &[Constraint]) -> Result<(), String> {
    let indices = constraints
        .iter()
        .enumerate()
        .filter(|(_, constraint)| {
            constraint.multipliers.len() != alternatives
                || !are_finite(constraint.multipliers.as_slice())
                || !constraint.bound.is_finite()
        })
        .map(|(idx, _)| idx.to_string())
        .collect::<Vec<_>>();

    if indices.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "E3102: Constraints must have {alternatives} finite multipliers and finite bound: {}",
            indices.join(", ")
        ))
    }
}

/// Validates inputs of group net flows aggregation.
pub fn validate_group_flows(flows: &[NetFlows], weights: &[Float]) -> McdaResult<()> {
    into_result(
        combine_error_results(&[
            check_e3001_decision_makers_have_weights(flows, weights),
            check_e3002_non_negative_decision_maker_weights(weights),
            check_e3003_same_alternatives(flows),
        ])
        .err()
        .unwrap_or_default(),
    )
}

/// Validates inputs of the choice problem.
pub fn validate_choice(net_flows: &NetFlows, constraints: &[Constraint]) -> McdaResult<()> {
    into_result(
        combine_error_results(&[
            check_e3101_choice_size(net_flows.len()),
            check_e3102_constraint_shapes(net_flows.len(), constraints),
        ])
        .err()
        .unwrap_or_default(),
    )
}
