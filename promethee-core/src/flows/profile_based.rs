#[cfg(test)]
#[path = "../../tests/unit/flows/profile_based_test.rs"]
mod profile_based_test;

use super::{AugmentedFlows, basic_flows};
use crate::models::{Labels, PrometheeConfig, Table};
use crate::utils::{McdaError, McdaResult, parallel_collect};

/// Computes flows of every alternative inserted among profiles. For each alternative a preference
/// matrix over `profiles + [alternative]` is assembled from profile vs profile, alternative vs profile
/// and profile vs alternative preferences, then basic flows are computed within it.
pub fn profile_based_flows(
    alternatives_profiles: &Table,
    profiles_alternatives: &Table,
    profile_preferences: &Table,
    config: &PrometheeConfig,
) -> McdaResult<Vec<AugmentedFlows>> {
    let profiles = profile_preferences.rows();
    if profile_preferences.columns() != profiles
        || alternatives_profiles.columns() != profiles
        || profiles_alternatives.rows() != profiles
        || alternatives_profiles.rows() != profiles_alternatives.columns()
    {
        return Err(McdaError::shape("profile based flows received inconsistent preference matrices"));
    }

    let alternatives = (0..alternatives_profiles.n_rows()).collect::<Vec<_>>();
    let size = profiles.len();

    parallel_collect(config.environment.parallelism, alternatives.as_slice(), |&a| {
        let alternative = alternatives_profiles.rows().name(a);
        let labels = profiles.chain(&Labels::new([alternative])?)?;

        let augmented = Table::from_fn(labels.clone(), labels, |i, j| match (i < size, j < size) {
            (true, true) => profile_preferences.get(i, j),
            (true, false) => profiles_alternatives.get(i, a),
            (false, true) => alternatives_profiles.get(a, j),
            (false, false) => 0.,
        });

        Ok(AugmentedFlows { alternative: alternative.to_string(), flows: basic_flows(&augmented, config)? })
    })
    .into_iter()
    .collect()
}
