use crate::utils::{McdaError, McdaResult};
use serde::{Deserialize, Serialize};

/// Specifies how profiles delimit categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTopology {
    /// Each profile is a center of its own category: `n` profiles give `n` categories.
    Central,
    /// Profiles are boundaries between categories: `n` profiles give `n + 1` categories.
    Boundary,
    /// Profiles are limits of intervals: `n` profiles give `n - 1` categories.
    Limiting,
}

impl ProfileTopology {
    /// Returns amount of categories expected for the given amount of profiles.
    pub fn category_count(&self, profiles: usize) -> Option<usize> {
        match self {
            Self::Central => Some(profiles),
            Self::Boundary => Some(profiles + 1),
            Self::Limiting => profiles.checked_sub(1),
        }
    }

    /// Checks that amounts of categories and profiles agree with the topology.
    pub fn check_counts(&self, categories: usize, profiles: usize) -> McdaResult<()> {
        match self.category_count(profiles) {
            Some(expected) if expected == categories && categories > 0 => Ok(()),
            _ => Err(McdaError::shape(format!(
                "{self:?} topology cannot map {profiles} profiles to {categories} categories"
            ))),
        }
    }
}
