//! The flows module computes positive, negative and net outranking flows from aggregated preferences.
//!
//! Two styles are supported: *basic* where flows are means of preferences over the compared set and
//! *profile based* where each alternative is temporarily inserted among profiles and flows are
//! computed within that augmented set.

use crate::models::{Labels, PrometheeConfig, Table};
use crate::preference::Pairwise;
use crate::utils::{Float, McdaError, McdaResult};
use serde::{Deserialize, Serialize};

mod basic;
pub use self::basic::*;

mod profile_based;
pub use self::profile_based::*;

mod single_criterion;
pub use self::single_criterion::*;

/// Specifies a style of flow computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowStyle {
    /// Flows of alternatives within alternatives or relative to profiles.
    Basic,
    /// Flows within profiles augmented by one alternative at a time.
    ProfileBased,
}

/// Positive and negative flows of labelled objects.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowTable {
    labels: Labels,
    positive: Vec<Float>,
    negative: Vec<Float>,
}

impl FlowTable {
    /// Creates a new instance of `FlowTable`.
    pub fn new(labels: Labels, positive: Vec<Float>, negative: Vec<Float>) -> McdaResult<Self> {
        if labels.len() != positive.len() || labels.len() != negative.len() {
            return Err(McdaError::shape("flows must be defined for every object"));
        }

        Ok(Self { labels, positive, negative })
    }

    /// Returns object labels.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Returns amount of objects.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if there are no objects.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns positive flow of the object at given position.
    pub fn positive(&self, idx: usize) -> Float {
        self.positive[idx]
    }

    /// Returns negative flow of the object at given position.
    pub fn negative(&self, idx: usize) -> Float {
        self.negative[idx]
    }

    /// Returns net flow of the object at given position.
    pub fn net(&self, idx: usize) -> Float {
        self.positive[idx] - self.negative[idx]
    }

    /// Returns net flows of all objects.
    pub fn net_flows(&self) -> NetFlows {
        NetFlows { labels: self.labels.clone(), values: (0..self.len()).map(|idx| self.net(idx)).collect() }
    }
}

/// A series of net flows (or any other single score) per labelled object.
#[derive(Clone, Debug, PartialEq)]
pub struct NetFlows {
    labels: Labels,
    values: Vec<Float>,
}

impl NetFlows {
    /// Creates a new instance of `NetFlows`.
    pub fn new(labels: Labels, values: Vec<Float>) -> McdaResult<Self> {
        if labels.len() != values.len() {
            return Err(McdaError::shape("net flow must be defined for every object"));
        }

        Ok(Self { labels, values })
    }

    /// Returns object labels.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Returns amount of objects.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no objects.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns value at given position.
    pub fn get(&self, idx: usize) -> Float {
        self.values[idx]
    }

    /// Returns value of the object with given name.
    pub fn value(&self, name: &str) -> Option<Float> {
        self.labels.index_of(name).map(|idx| self.values[idx])
    }

    /// Returns all values in label order.
    pub fn values(&self) -> &[Float] {
        self.values.as_slice()
    }

    /// Iterates over (name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Float)> + '_ {
        self.labels.iter().zip(self.values.iter().copied())
    }
}

/// Flows of one alternative inserted among profiles.
#[derive(Clone, Debug, PartialEq)]
pub struct AugmentedFlows {
    /// A name of the inserted alternative.
    pub alternative: String,
    /// Flows of profiles followed by flows of the alternative.
    pub flows: FlowTable,
}

impl AugmentedFlows {
    /// Returns position of the inserted alternative within flows (always the last one).
    pub fn alternative_idx(&self) -> usize {
        self.flows.len() - 1
    }

    /// Returns amount of profiles.
    pub fn profiles_count(&self) -> usize {
        self.flows.len() - 1
    }
}

/// Outranking flows produced in one of the supported styles.
#[derive(Clone, Debug, PartialEq)]
pub enum OutrankingFlows {
    /// Flows of alternatives.
    Basic(FlowTable),
    /// One flow table per alternative inserted among profiles.
    ProfileBased(Vec<AugmentedFlows>),
}

/// Net flows derived from outranking flows.
#[derive(Clone, Debug, PartialEq)]
pub enum NetFlowSet {
    /// Net flows of alternatives.
    Basic(NetFlows),
    /// Net flows of profiles and an alternative per inserted alternative.
    ProfileBased(Vec<(String, NetFlows)>),
}

impl OutrankingFlows {
    /// Derives net flows.
    pub fn net_flows(&self) -> NetFlowSet {
        match self {
            Self::Basic(flows) => NetFlowSet::Basic(flows.net_flows()),
            Self::ProfileBased(augmented) => NetFlowSet::ProfileBased(
                augmented.iter().map(|flows| (flows.alternative.clone(), flows.flows.net_flows())).collect(),
            ),
        }
    }
}

/// Computes outranking flows in the requested style. The profile based style requires preferences of
/// alternatives with profiles and preferences of profiles among themselves.
pub fn compute_flows(
    preferences: &Pairwise<Table>,
    profile_preferences: Option<&Table>,
    style: FlowStyle,
    config: &PrometheeConfig,
) -> McdaResult<OutrankingFlows> {
    match (style, preferences) {
        (FlowStyle::Basic, Pairwise::WithoutProfiles(preferences)) => {
            basic_flows(preferences, config).map(OutrankingFlows::Basic)
        }
        (FlowStyle::Basic, Pairwise::WithProfiles { alternatives_profiles, profiles_alternatives }) => {
            cross_flows(alternatives_profiles, profiles_alternatives, config).map(OutrankingFlows::Basic)
        }
        (FlowStyle::ProfileBased, Pairwise::WithProfiles { alternatives_profiles, profiles_alternatives }) => {
            let profile_preferences = profile_preferences
                .ok_or_else(|| McdaError::shape("profile based flows require preferences between profiles"))?;

            profile_based_flows(alternatives_profiles, profiles_alternatives, profile_preferences, config)
                .map(OutrankingFlows::ProfileBased)
        }
        (FlowStyle::ProfileBased, Pairwise::WithoutProfiles(_)) => {
            Err(McdaError::shape("profile based flows require preferences with profiles"))
        }
    }
}
