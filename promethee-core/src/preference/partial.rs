#[cfg(test)]
#[path = "../../tests/unit/preference/partial_test.rs"]
mod partial_test;

use super::direction::check_criteria_columns;
use super::{Pairwise, directed_performances};
use crate::models::{Criteria, Labels, PrometheeConfig, Table};
use crate::utils::{McdaResult, parallel_collect};

/// Per-criterion deviations and partial preferences between two object sets.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialPreferences {
    criteria: Labels,
    deviations: Vec<Table>,
    preferences: Vec<Table>,
}

impl PartialPreferences {
    /// Returns criteria labels.
    pub fn criteria(&self) -> &Labels {
        &self.criteria
    }

    /// Returns objects compared as originators (rows of every matrix).
    pub fn rows(&self) -> &Labels {
        self.preferences[0].rows()
    }

    /// Returns objects compared as recipients (columns of every matrix).
    pub fn columns(&self) -> &Labels {
        self.preferences[0].columns()
    }

    /// Returns partial preference matrix of the criterion at given position.
    pub fn preference(&self, criterion: usize) -> &Table {
        &self.preferences[criterion]
    }

    /// Returns deviation matrix of the criterion at given position.
    pub fn deviation(&self, criterion: usize) -> &Table {
        &self.deviations[criterion]
    }

    /// Returns all partial preference matrices in criteria order.
    pub fn preferences(&self) -> &[Table] {
        self.preferences.as_slice()
    }
}

/// Builds partial preferences of `rows` objects over `columns` objects using already directed
/// performances. Deviation of pair `(i, j)` on criterion `k` is `rows(i, k) - columns(j, k)`.
pub fn build_partial_preferences(
    rows: &Table,
    columns: &Table,
    criteria: &Criteria,
    config: &PrometheeConfig,
) -> McdaResult<PartialPreferences> {
    check_criteria_columns(rows, criteria)?;
    check_criteria_columns(columns, criteria)?;

    let indices = (0..criteria.len()).collect::<Vec<_>>();
    let matrices = parallel_collect(config.environment.parallelism, indices.as_slice(), |&k| {
        let function = criteria.get(k).function;
        let deviation =
            Table::from_fn(rows.rows().clone(), columns.rows().clone(), |i, j| rows.get(i, k) - columns.get(j, k));
        let preference = deviation.map(|d| function.preference(d));

        (deviation, preference)
    });

    let (deviations, preferences): (Vec<_>, Vec<_>) = matrices.into_iter().unzip();

    Ok(PartialPreferences { criteria: criteria.labels().clone(), deviations, preferences })
}

/// Normalizes directions and builds partial preferences between alternatives or, when profiles
/// are supplied, between alternatives and profiles in both directions.
pub fn compute_partial_preferences(
    performances: &Table,
    criteria: &Criteria,
    profiles: Option<&Table>,
    config: &PrometheeConfig,
) -> McdaResult<Pairwise<PartialPreferences>> {
    let alternatives = directed_performances(performances, criteria)?;

    match profiles {
        None => {
            let partial = build_partial_preferences(&alternatives, &alternatives, criteria, config)?;

            Ok(Pairwise::WithoutProfiles(partial))
        }
        Some(profiles) => {
            let profiles = directed_performances(profiles, criteria)?;

            Ok(Pairwise::WithProfiles {
                alternatives_profiles: build_partial_preferences(&alternatives, &profiles, criteria, config)?,
                profiles_alternatives: build_partial_preferences(&profiles, &alternatives, criteria, config)?,
            })
        }
    }
}
