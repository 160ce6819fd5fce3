#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::{Criteria, Criterion, Labels, ProfileTopology, Table};
use crate::utils::{Float, McdaResult};
use serde::{Deserialize, Serialize};

/// Performances of a named object (alternative or profile) listed in criteria order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// A unique object name.
    pub name: String,
    /// Performance values in criteria order.
    pub performances: Vec<Float>,
}

/// A decision problem definition as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionProblem {
    /// Criteria of the problem.
    pub criteria: Vec<Criterion>,
    /// Evaluated alternatives.
    pub alternatives: Vec<PerformanceRecord>,
    /// Optional profiles ordered from the worst to the best one.
    #[serde(default)]
    pub profiles: Vec<PerformanceRecord>,
    /// Optional categories ordered from the worst to the best one.
    #[serde(default)]
    pub categories: Vec<String>,
    /// A profile topology, required when profiles are used.
    #[serde(default)]
    pub topology: Option<ProfileTopology>,
}

impl DecisionProblem {
    /// Returns criteria collection.
    pub fn criteria(&self) -> McdaResult<Criteria> {
        Criteria::new(self.criteria.clone())
    }

    /// Returns performance table of alternatives.
    pub fn alternatives_table(&self) -> McdaResult<Table> {
        self.to_table(&self.alternatives)
    }

    /// Returns performance table of profiles, if any profile is defined.
    pub fn profiles_table(&self) -> McdaResult<Option<Table>> {
        if self.profiles.is_empty() { Ok(None) } else { self.to_table(&self.profiles).map(Some) }
    }

    /// Returns categories labels.
    pub fn categories(&self) -> McdaResult<Labels> {
        Labels::new(self.categories.iter().cloned())
    }

    fn to_table(&self, records: &[PerformanceRecord]) -> McdaResult<Table> {
        let rows = Labels::new(records.iter().map(|record| record.name.clone()))?;
        let columns = Labels::new(self.criteria.iter().map(|criterion| criterion.name.clone()))?;

        Table::from_rows(rows, columns, records.iter().map(|record| record.performances.clone()).collect())
    }
}
