#[cfg(test)]
#[path = "../../tests/unit/models/criteria_test.rs"]
mod criteria_test;

use crate::models::Labels;
use crate::utils::{Float, McdaError, McdaResult};
use serde::{Deserialize, Serialize};

/// Specifies preference direction of the criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Larger performance is better.
    Max,
    /// Smaller performance is better.
    Min,
}

impl Direction {
    /// Returns a multiplier which makes larger values better.
    pub fn sign(&self) -> Float {
        match self {
            Direction::Max => 1.,
            Direction::Min => -1.,
        }
    }
}

/// A generalized criterion (preference function shape) together with its thresholds:
/// `q` is indifference, `p` is preference and `s` is Gaussian inflection threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GeneralizedCriterion {
    /// Any positive deviation gives strict preference.
    Usual,
    /// Strict preference once deviation exceeds `q`.
    UShape {
        /// Indifference threshold.
        q: Float,
    },
    /// Linear preference up to `p`.
    VShape {
        /// Preference threshold.
        p: Float,
    },
    /// Half preference between `q` and `p`, strict after `p`.
    Level {
        /// Indifference threshold.
        q: Float,
        /// Preference threshold.
        p: Float,
    },
    /// Linear preference between `q` and `p`.
    VShapeIndifference {
        /// Indifference threshold.
        q: Float,
        /// Preference threshold.
        p: Float,
    },
    /// Gaussian preference with inflection at `s`.
    Gaussian {
        /// Inflection threshold.
        s: Float,
    },
}

impl GeneralizedCriterion {
    /// Returns indifference threshold if the shape has it.
    pub fn indifference(&self) -> Option<Float> {
        match self {
            Self::UShape { q } | Self::Level { q, .. } | Self::VShapeIndifference { q, .. } => Some(*q),
            _ => None,
        }
    }

    /// Returns preference threshold if the shape has it.
    pub fn preference_threshold(&self) -> Option<Float> {
        match self {
            Self::VShape { p } | Self::Level { p, .. } | Self::VShapeIndifference { p, .. } => Some(*p),
            _ => None,
        }
    }
}

/// Reinforced preference parameters: once deviation exceeds `threshold`, the criterion counts
/// `factor` times its weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reinforcement {
    /// A reinforced preference threshold, expected to be above preference threshold.
    pub threshold: Float,
    /// A reinforcement factor, at least 1.
    pub factor: Float,
}

/// A dimension of evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// A unique criterion name.
    pub name: String,
    /// A preference direction.
    pub direction: Direction,
    /// A strictly positive weight, weights do not need to sum to one.
    pub weight: Float,
    /// A preference function.
    pub function: GeneralizedCriterion,
    /// An optional veto threshold.
    #[serde(default)]
    pub veto: Option<Float>,
    /// An optional reinforced preference.
    #[serde(default)]
    pub reinforcement: Option<Reinforcement>,
}

impl Criterion {
    /// Creates a new criterion without veto and reinforcement.
    pub fn new(name: impl Into<String>, direction: Direction, weight: Float, function: GeneralizedCriterion) -> Self {
        Self { name: name.into(), direction, weight, function, veto: None, reinforcement: None }
    }

    /// Sets veto threshold.
    pub fn with_veto(mut self, veto: Float) -> Self {
        self.veto = Some(veto);
        self
    }

    /// Sets reinforced preference.
    pub fn with_reinforcement(mut self, threshold: Float, factor: Float) -> Self {
        self.reinforcement = Some(Reinforcement { threshold, factor });
        self
    }
}

/// An ordered collection of criteria.
#[derive(Clone, Debug, PartialEq)]
pub struct Criteria {
    items: Vec<Criterion>,
    labels: Labels,
}

impl Criteria {
    /// Creates criteria collection, fails when it is empty or names are not unique.
    pub fn new(items: Vec<Criterion>) -> McdaResult<Self> {
        if items.is_empty() {
            return Err(McdaError::shape("at least one criterion is required"));
        }

        let labels = Labels::new(items.iter().map(|criterion| criterion.name.clone()))?;

        Ok(Self { items, labels })
    }

    /// Returns criteria labels.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Returns amount of criteria.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no criteria (never true for a constructed instance).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns criterion at given position.
    pub fn get(&self, idx: usize) -> &Criterion {
        &self.items[idx]
    }

    /// Iterates over criteria in their order.
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> + '_ {
        self.items.iter()
    }

    /// Returns a sum of all weights.
    pub fn weight_sum(&self) -> Float {
        self.items.iter().map(|criterion| criterion.weight).sum()
    }

    /// Returns weights normalized to sum one.
    pub fn normalized_weights(&self) -> McdaResult<Vec<Float>> {
        let sum = self.weight_sum();
        if sum <= 0. {
            return Err(McdaError::domain("sum of criteria weights must be positive"));
        }

        Ok(self.items.iter().map(|criterion| criterion.weight / sum).collect())
    }
}

/// A type of interaction between two criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// Both criteria together are more important than their weights suggest.
    Synergy,
    /// Both criteria together are less important than their weights suggest.
    Weakening,
    /// Preference on the first criterion is weakened by opposite preference on the second one.
    Antagonistic,
}

/// An interaction between a pair of criteria.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// A name of the first criterion.
    pub first: String,
    /// A name of the second criterion.
    pub second: String,
    /// An interaction type.
    pub kind: InteractionKind,
    /// An interaction coefficient, its sign is defined by the kind.
    pub coefficient: Float,
}

/// Specifies how the joint preference of two interacting criteria is calculated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// A product of both partial preferences.
    #[default]
    Multiplication,
    /// A minimum of both partial preferences.
    Minimum,
}
