#[cfg(test)]
#[path = "../../tests/unit/choice/promethee_v_test.rs"]
mod promethee_v_test;

use super::{Constraint, is_selected};
use crate::flows::NetFlows;
use crate::models::PrometheeConfig;
use crate::utils::{Float, McdaError, McdaResult, compare_floats, map_reduce_range, round_to};
use std::cmp::Ordering;

/// A maximal amount of alternatives the brute force enumeration accepts.
pub const MAX_CHOICE_ALTERNATIVES: usize = 30;

/// A selected subset of alternatives.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Names of selected alternatives in alternatives order.
    pub selected: Vec<String>,
    /// A 0/1 selection flag per alternative.
    pub vector: Vec<bool>,
    /// Total net flow of selected alternatives.
    pub objective: Float,
}

/// Solves PROMETHEE V 0/1 problem by enumerating all `2ⁿ` selections in lexicographic order (the first
/// alternative is the most significant). Among feasible selections with maximal total net flow the
/// first enumerated one wins: ties go to the lowest mask, i.e. the lexicographically smallest 0/1
/// vector, in both sequential and parallel modes.
pub fn promethee_v(
    net_flows: &NetFlows,
    constraints: &[Constraint],
    config: &PrometheeConfig,
) -> McdaResult<Selection> {
    let size = net_flows.len();

    if size == 0 || size > MAX_CHOICE_ALTERNATIVES {
        return Err(McdaError::shape(format!(
            "choice requires between 1 and {MAX_CHOICE_ALTERNATIVES} alternatives, got {size}"
        )));
    }

    if let Some((idx, constraint)) =
        constraints.iter().enumerate().find(|(_, constraint)| constraint.multipliers.len() != size)
    {
        return Err(McdaError::shape(format!(
            "constraint {idx} has {} multipliers, expected {size}",
            constraint.multipliers.len()
        )));
    }

    let combinations = 1_u64 << size;
    let environment = config.environment.as_ref();
    environment.log(&format!("choice: enumerating {combinations} selections of {size} alternatives"));

    let best = map_reduce_range(
        environment.parallelism,
        0..combinations,
        |mask| {
            constraints.iter().all(|constraint| constraint.is_satisfied(mask)).then(|| {
                let objective =
                    (0..size).filter(|&idx| is_selected(mask, size, idx)).map(|idx| net_flows.get(idx)).sum::<Float>();
                (objective, mask)
            })
        },
        || None,
        choose_best,
    );

    let (objective, mask) =
        best.ok_or_else(|| McdaError::domain("no selection of alternatives satisfies all constraints"))?;

    let vector = (0..size).map(|idx| is_selected(mask, size, idx)).collect::<Vec<_>>();
    let selected = vector
        .iter()
        .enumerate()
        .filter(|(_, selected)| **selected)
        .map(|(idx, _)| net_flows.labels().name(idx).to_string())
        .collect::<Vec<_>>();

    let objective = round_to(objective, config.decimal_place);
    environment.log(&format!("choice: selected [{}] with total flow {objective}", selected.join(", ")));

    Ok(Selection { selected, vector, objective })
}

/// Prefers a higher objective, then the earlier enumerated selection.
fn choose_best(left: Option<(Float, u64)>, right: Option<(Float, u64)>) -> Option<(Float, u64)> {
    match (left, right) {
        (Some(left), Some(right)) => match compare_floats(left.0, right.0) {
            Ordering::Greater => Some(left),
            Ordering::Less => Some(right),
            Ordering::Equal => Some(if left.1 <= right.1 { left } else { right }),
        },
        (left, None) => left,
        (None, right) => right,
    }
}
