#[cfg(test)]
#[path = "../../tests/unit/group/acceptabilities_test.rs"]
mod acceptabilities_test;

use crate::models::{Labels, PrometheeConfig, Table};
use crate::sorting::Assignments;
use crate::utils::{Float, McdaError, McdaResult, round_to};

/// Support of categories per alternative expressed in percents of decision makers.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassAcceptabilities {
    /// Raw support: alternatives as rows, categories as columns.
    pub support: Table,
    /// Support smoothed to be unimodal over ordered categories.
    pub unimodal: Table,
}

/// Computes group class acceptabilities from assignments of several decision makers. Every decision
/// maker casts one vote in each category spanned by the assignment of an alternative.
pub fn group_class_acceptabilities(
    assignments: &[Assignments],
    categories: &Labels,
    config: &PrometheeConfig,
) -> McdaResult<ClassAcceptabilities> {
    let first = assignments.first().ok_or_else(|| McdaError::shape("at least one decision maker is required"))?;
    let alternatives = first.alternatives().clone();

    if let Some(idx) = assignments.iter().position(|dm| dm.categories() != categories) {
        return Err(McdaError::shape(format!("assignments of decision maker {idx} use different categories")));
    }

    let mut votes = Table::from_fn(alternatives.clone(), categories.clone(), |_, _| 0.);
    for (dm, dm_assignments) in assignments.iter().enumerate() {
        if dm_assignments.len() != alternatives.len() {
            return Err(McdaError::shape(format!("decision maker {dm} assigns a different set of alternatives")));
        }

        for (a, alternative) in alternatives.iter().enumerate() {
            let assignment = dm_assignments.assignment(alternative).ok_or_else(|| {
                McdaError::shape(format!("decision maker {dm} has no assignment for '{alternative}'"))
            })?;

            assignment.categories().for_each(|category| votes.set(a, category, votes.get(a, category) + 1.));
        }
    }

    let voters = assignments.len() as Float;
    let support = votes.map(|count| round_to(count / voters * 100., config.decimal_place));

    let unimodal_rows = (0..support.n_rows()).flat_map(|a| unimodal_support(support.row(a))).collect();
    let unimodal = Table::new(alternatives, categories.clone(), unimodal_rows)?;

    Ok(ClassAcceptabilities { support, unimodal })
}

/// Raises every interior category to at least the minimum of the highest support on its left and
/// the highest support on its right. First and last categories are kept as is.
pub fn unimodal_support(support: &[Float]) -> Vec<Float> {
    let size = support.len();

    let mut left_max = Vec::with_capacity(size);
    support.iter().fold(Float::NEG_INFINITY, |acc, &value| {
        left_max.push(acc);
        acc.max(value)
    });

    let mut right_max = vec![Float::NEG_INFINITY; size];
    (0..size).rev().fold(Float::NEG_INFINITY, |acc, idx| {
        right_max[idx] = acc;
        acc.max(support[idx])
    });

    support
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            if idx == 0 || idx + 1 == size { value } else { value.max(left_max[idx].min(right_max[idx])) }
        })
        .collect()
}
