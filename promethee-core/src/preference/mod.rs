//! The preference module builds per-criterion partial preferences and aggregates them into
//! a single outranking index per ordered pair of objects.
//!
//! Two object sets are supported: alternatives compared with themselves or alternatives compared
//! with profiles. The latter always yields two matrices (alternatives vs profiles and profiles vs
//! alternatives) which are modelled explicitly by [`Pairwise`].

use crate::utils::{McdaError, McdaResult};

mod aggregation;
pub use self::aggregation::*;

mod direction;
pub use self::direction::*;

mod discordance;
pub use self::discordance::*;

mod generalized;

mod interactions;
pub use self::interactions::*;

mod partial;
pub use self::partial::*;

mod reinforced;
pub use self::reinforced::*;

mod veto;
pub use self::veto::*;

/// A result of a pairwise comparison stage: either one structure for alternatives compared with
/// themselves or two structures for alternatives compared with profiles.
#[derive(Clone, Debug, PartialEq)]
pub enum Pairwise<T> {
    /// Alternatives vs alternatives.
    WithoutProfiles(T),
    /// Alternatives vs profiles and profiles vs alternatives.
    WithProfiles {
        /// Rows are alternatives, columns are profiles.
        alternatives_profiles: T,
        /// Rows are profiles, columns are alternatives.
        profiles_alternatives: T,
    },
}

impl<T> Pairwise<T> {
    /// Returns pairwise with references to inner values.
    pub fn as_ref(&self) -> Pairwise<&T> {
        match self {
            Self::WithoutProfiles(value) => Pairwise::WithoutProfiles(value),
            Self::WithProfiles { alternatives_profiles, profiles_alternatives } => {
                Pairwise::WithProfiles { alternatives_profiles, profiles_alternatives }
            }
        }
    }

    /// Maps inner values.
    pub fn map<R, F>(self, mut map_fn: F) -> Pairwise<R>
    where
        F: FnMut(T) -> R,
    {
        match self {
            Self::WithoutProfiles(value) => Pairwise::WithoutProfiles(map_fn(value)),
            Self::WithProfiles { alternatives_profiles, profiles_alternatives } => Pairwise::WithProfiles {
                alternatives_profiles: map_fn(alternatives_profiles),
                profiles_alternatives: map_fn(profiles_alternatives),
            },
        }
    }

    /// Maps inner values with a fallible function.
    pub fn try_map<R, F>(self, mut map_fn: F) -> McdaResult<Pairwise<R>>
    where
        F: FnMut(T) -> McdaResult<R>,
    {
        Ok(match self {
            Self::WithoutProfiles(value) => Pairwise::WithoutProfiles(map_fn(value)?),
            Self::WithProfiles { alternatives_profiles, profiles_alternatives } => Pairwise::WithProfiles {
                alternatives_profiles: map_fn(alternatives_profiles)?,
                profiles_alternatives: map_fn(profiles_alternatives)?,
            },
        })
    }

    /// Maps inner values passing also the structure of the reversed comparison: the value itself for
    /// alternatives vs alternatives and the opposite matrix for comparisons with profiles. A reversed
    /// value of pair `(i, j)` is located at `(j, i)` of the reversed structure in both cases.
    pub fn try_map_with_reverse<R, F>(&self, mut map_fn: F) -> McdaResult<Pairwise<R>>
    where
        F: FnMut(&T, &T) -> McdaResult<R>,
    {
        Ok(match self {
            Self::WithoutProfiles(value) => Pairwise::WithoutProfiles(map_fn(value, value)?),
            Self::WithProfiles { alternatives_profiles, profiles_alternatives } => Pairwise::WithProfiles {
                alternatives_profiles: map_fn(alternatives_profiles, profiles_alternatives)?,
                profiles_alternatives: map_fn(profiles_alternatives, alternatives_profiles)?,
            },
        })
    }

    /// Returns the value for alternatives vs alternatives comparison or an error.
    pub fn into_without_profiles(self) -> McdaResult<T> {
        match self {
            Self::WithoutProfiles(value) => Ok(value),
            Self::WithProfiles { .. } => {
                Err(McdaError::shape("expected comparison of alternatives without profiles"))
            }
        }
    }

    /// Returns (alternatives vs profiles, profiles vs alternatives) values or an error.
    pub fn into_with_profiles(self) -> McdaResult<(T, T)> {
        match self {
            Self::WithProfiles { alternatives_profiles, profiles_alternatives } => {
                Ok((alternatives_profiles, profiles_alternatives))
            }
            Self::WithoutProfiles(_) => {
                Err(McdaError::shape("expected comparison of alternatives with profiles"))
            }
        }
    }
}
