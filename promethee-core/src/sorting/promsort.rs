#[cfg(test)]
#[path = "../../tests/unit/sorting/promsort_test.rs"]
mod promsort_test;

use super::{Assignment, Assignments, check_dominance};
use crate::flows::FlowTable;
use crate::models::{Criteria, Labels, ProfileTopology, PrometheeConfig, Table};
use crate::ranking::{OutrankingRelation, PartialOrderMode, compare_pair};
use crate::utils::{Float, McdaError, McdaResult, mean_of};

/// Parameters of PromSort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PromSortParams {
    /// A threshold in `[-1, 1]` which the total distance is compared to.
    pub cut_point: Float,
    /// Resolves a total distance equal to the cut point to the better category.
    pub prefer_better: bool,
}

impl Default for PromSortParams {
    fn default() -> Self {
        Self { cut_point: 0., prefer_better: true }
    }
}

/// An outcome of the first PromSort phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Classification {
    Assigned(usize),
    Candidates { worse: usize, better: usize },
}

/// Sorts alternatives with PromSort using boundary profiles ordered from the worst to the best one.
///
/// Flows have to be computed within the stacked set of alternatives followed by profiles. The first
/// phase uses PROMETHEE I relations between an alternative and profiles taken from the best one:
/// preference over a profile assigns the alternative to the category above it, indifference or
/// incomparability leaves it between two categories. The second phase resolves such alternatives
/// using net flow distances to alternatives assigned in the first phase.
pub fn prom_sort(
    flows: &FlowTable,
    profiles: &Table,
    criteria: &Criteria,
    categories: &Labels,
    params: PromSortParams,
    config: &PrometheeConfig,
) -> McdaResult<Assignments> {
    if !(-1. ..=1.).contains(&params.cut_point) {
        return Err(McdaError::domain(format!("cut point must be in [-1, 1], got {}", params.cut_point)));
    }

    check_dominance(profiles, criteria)?;
    ProfileTopology::Boundary.check_counts(categories.len(), profiles.n_rows())?;

    let profiles_count = profiles.n_rows();
    let alternatives_count = flows.len().checked_sub(profiles_count).ok_or_else(|| {
        McdaError::shape("flows must be computed within alternatives followed by profiles")
    })?;

    let profiles_stacked =
        profiles.rows().iter().enumerate().all(|(r, name)| flows.labels().name(alternatives_count + r) == name);
    if !profiles_stacked {
        return Err(McdaError::shape("flows must be computed within alternatives followed by profiles"));
    }

    let alternatives = Labels::new(flows.labels().iter().take(alternatives_count))?;

    let classifications = (0..alternatives_count)
        .map(|a| classify_by_profiles(flows, a, alternatives_count, profiles_count))
        .collect::<Vec<_>>();

    let items = classifications
        .iter()
        .enumerate()
        .map(|(a, classification)| match *classification {
            Classification::Assigned(category) => Assignment::precise(category),
            Classification::Candidates { worse, better } => {
                let distance = total_distance(flows, &classifications, a, worse, better);
                let category = if distance > params.cut_point {
                    better
                } else if distance < params.cut_point {
                    worse
                } else if params.prefer_better {
                    better
                } else {
                    worse
                };

                config.environment.log(&format!(
                    "promsort: '{}' resolved to '{}' with total distance {distance}",
                    alternatives.name(a),
                    categories.name(category)
                ));

                Assignment::precise(category)
            }
        })
        .collect();

    Assignments::new(alternatives, categories.clone(), items)
}

fn classify_by_profiles(flows: &FlowTable, a: usize, offset: usize, profiles_count: usize) -> Classification {
    for h in (0..profiles_count).rev() {
        let profile = offset + h;

        if compare_pair(flows, a, profile, PartialOrderMode::Strict) == OutrankingRelation::Preference {
            return Classification::Assigned(h + 1);
        }

        if compare_pair(flows, profile, a, PartialOrderMode::Strict) != OutrankingRelation::Preference {
            return Classification::Candidates { worse: h, better: h + 1 };
        }
    }

    Classification::Assigned(0)
}

fn total_distance(
    flows: &FlowTable,
    classifications: &[Classification],
    a: usize,
    worse: usize,
    better: usize,
) -> Float {
    let net = flows.net(a);

    let positive = mean_distance(flows, classifications, worse, |member| net - member);
    let negative = mean_distance(flows, classifications, better, |member| member - net);

    positive - negative
}

/// Returns mean distance to members of the category assigned in the first phase, zero for no members.
fn mean_distance<F>(flows: &FlowTable, classifications: &[Classification], category: usize, distance_fn: F) -> Float
where
    F: Fn(Float) -> Float,
{
    mean_of(
        classifications
            .iter()
            .enumerate()
            .filter(|(_, classification)| **classification == Classification::Assigned(category))
            .map(|(member, _)| distance_fn(flows.net(member))),
    )
}
