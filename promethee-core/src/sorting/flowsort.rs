#[cfg(test)]
#[path = "../../tests/unit/sorting/flowsort_test.rs"]
mod flowsort_test;

use super::{Assignment, Assignments, check_dominance};
use crate::flows::AugmentedFlows;
use crate::models::{Criteria, Labels, ProfileTopology, PrometheeConfig, Table};
use crate::utils::{Float, McdaError, McdaResult};

/// Specifies which flows FlowSort compares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowSortVariant {
    /// Positive and negative flows are compared separately, disagreement leads to a span of categories.
    FlowSortI,
    /// Net flows are compared, assignments are always precise.
    #[default]
    FlowSortII,
}

/// Sorts alternatives with FlowSort using flows of every alternative inserted among profiles.
/// Profiles must satisfy dominance condition and agree with categories under the given topology.
pub fn flow_sort(
    flows: &[AugmentedFlows],
    profiles: &Table,
    criteria: &Criteria,
    categories: &Labels,
    topology: ProfileTopology,
    variant: FlowSortVariant,
    config: &PrometheeConfig,
) -> McdaResult<Assignments> {
    check_dominance(profiles, criteria)?;
    topology.check_counts(categories.len(), profiles.n_rows())?;

    let alternatives = Labels::new(flows.iter().map(|augmented| augmented.alternative.clone()))?;
    let profiles_count = profiles.n_rows();

    let items = flows
        .iter()
        .map(|augmented| {
            check_augmented_profiles(augmented, profiles)?;

            let table = &augmented.flows;
            let alternative = augmented.alternative_idx();

            let assignment = match variant {
                FlowSortVariant::FlowSortII => {
                    let bounds = (0..profiles_count).map(|r| table.net(r)).collect::<Vec<_>>();
                    Assignment::precise(classify(topology, &bounds, table.net(alternative)))
                }
                FlowSortVariant::FlowSortI => {
                    let positive = (0..profiles_count).map(|r| table.positive(r)).collect::<Vec<_>>();
                    let negative = (0..profiles_count).map(|r| -table.negative(r)).collect::<Vec<_>>();

                    let assignment = Assignment::span(
                        classify(topology, &positive, table.positive(alternative)),
                        classify(topology, &negative, -table.negative(alternative)),
                    );

                    if !assignment.is_precise() {
                        config.environment.log(&format!(
                            "flowsort: '{}' is assigned imprecisely to [{}, {}]",
                            augmented.alternative,
                            categories.name(assignment.worse),
                            categories.name(assignment.better)
                        ));
                    }

                    assignment
                }
            };

            Ok(assignment)
        })
        .collect::<McdaResult<Vec<_>>>()?;

    Assignments::new(alternatives, categories.clone(), items)
}

/// Returns a category position for the value compared with profile values ordered from the worst
/// to the best profile:
/// * limiting: `h` when `φ(r_h) < φ(a) ≤ φ(r_h+1)`, values outside of profiles go to the closest category
/// * boundary: position of the first profile which is not exceeded or the best category
/// * central: position of the first midpoint between adjacent profiles which is not exceeded or the last one
///
/// Profile values must not be empty.
pub fn classify(topology: ProfileTopology, profiles: &[Float], value: Float) -> usize {
    let size = profiles.len();

    match topology {
        ProfileTopology::Limiting => {
            (1..size).find(|&idx| value <= profiles[idx]).map_or(size.saturating_sub(2), |idx| idx - 1)
        }
        ProfileTopology::Boundary => (0..size).find(|&idx| value <= profiles[idx]).unwrap_or(size),
        ProfileTopology::Central => (0..size.saturating_sub(1))
            .find(|&idx| value <= (profiles[idx] + profiles[idx + 1]) / 2.)
            .unwrap_or(size.saturating_sub(1)),
    }
}

fn check_augmented_profiles(augmented: &AugmentedFlows, profiles: &Table) -> McdaResult<()> {
    let labels = augmented.flows.labels();
    let consistent = augmented.profiles_count() == profiles.n_rows()
        && profiles.rows().iter().enumerate().all(|(idx, name)| labels.name(idx) == name);

    if consistent {
        Ok(())
    } else {
        Err(McdaError::shape(format!("flows of '{}' are not computed among given profiles", augmented.alternative)))
    }
}
