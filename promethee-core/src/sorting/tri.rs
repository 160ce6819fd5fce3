#[cfg(test)]
#[path = "../../tests/unit/sorting/tri_test.rs"]
mod tri_test;

use super::{Assignment, Assignments, check_dominance};
use crate::models::{Criteria, Labels, ProfileTopology, PrometheeConfig, Table};
use crate::utils::{Float, McdaError, McdaResult, compare_floats, round_to};
use std::cmp::Ordering;

/// Parameters of PROMETHEE Tri.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriParams {
    /// Sums absolute per-criterion deviations when true, takes the absolute value of a signed sum otherwise.
    pub use_marginal_value: bool,
    /// Takes the last (best) category among equally close ones when true, the first one otherwise.
    pub prefer_better: bool,
}

impl Default for TriParams {
    fn default() -> Self {
        Self { use_marginal_value: true, prefer_better: true }
    }
}

/// Computes deviations between alternatives and central profiles using single criterion net flows:
/// alternatives flows are computed relative to profiles, profile flows within profiles.
/// The result has alternatives as rows and profiles as columns.
pub fn tri_deviations(
    alternatives_flows: &Table,
    profiles_flows: &Table,
    criteria: &Criteria,
    use_marginal_value: bool,
    config: &PrometheeConfig,
) -> McdaResult<Table> {
    if alternatives_flows.columns() != criteria.labels() || profiles_flows.columns() != criteria.labels() {
        return Err(McdaError::shape("single criterion flows must be defined on every criterion in criteria order"));
    }

    let weights = criteria.normalized_weights()?;

    Ok(Table::from_fn(alternatives_flows.rows().clone(), profiles_flows.rows().clone(), |a, r| {
        let differences = weights
            .iter()
            .enumerate()
            .map(|(k, weight)| weight * (alternatives_flows.get(a, k) - profiles_flows.get(r, k)));

        let deviation = if use_marginal_value {
            differences.map(Float::abs).sum::<Float>()
        } else {
            differences.sum::<Float>().abs()
        };

        round_to(deviation, config.decimal_place)
    }))
}

/// Sorts alternatives with PROMETHEE Tri: every alternative goes to the category of the central
/// profile with minimal deviation. Central profiles performances must satisfy the dominance condition
/// and be listed in the same order as the rows of `profiles_flows`.
pub fn promethee_tri(
    alternatives_flows: &Table,
    profiles_flows: &Table,
    profiles: &Table,
    criteria: &Criteria,
    categories: &Labels,
    params: TriParams,
    config: &PrometheeConfig,
) -> McdaResult<Assignments> {
    check_dominance(profiles, criteria)?;

    if profiles.rows() != profiles_flows.rows() {
        return Err(McdaError::shape("profiles flows rows do not match profiles performances rows"));
    }

    ProfileTopology::Central.check_counts(categories.len(), profiles_flows.n_rows())?;

    let deviations = tri_deviations(alternatives_flows, profiles_flows, criteria, params.use_marginal_value, config)?;

    let items = (0..deviations.n_rows())
        .map(|a| Assignment::precise(closest_profile(deviations.row(a), params.prefer_better)))
        .collect();

    Assignments::new(alternatives_flows.rows().clone(), categories.clone(), items)
}

fn closest_profile(deviations: &[Float], prefer_better: bool) -> usize {
    deviations
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, Float)>, (idx, &deviation)| match best {
            Some((_, current)) => match compare_floats(deviation, current) {
                Ordering::Less => Some((idx, deviation)),
                Ordering::Equal if prefer_better => Some((idx, deviation)),
                _ => best,
            },
            None => Some((idx, deviation)),
        })
        .map_or(0, |(idx, _)| idx)
}
