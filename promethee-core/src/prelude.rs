//! This module reimports commonly used types.

pub use crate::choice::{Constraint, ConstraintRelation, Selection, promethee_v};
pub use crate::flows::{
    AugmentedFlows, FlowStyle, FlowTable, NetFlowSet, NetFlows, OutrankingFlows, basic_flows, compute_flows,
};
pub use crate::group::{ClassAcceptabilities, group_class_acceptabilities, group_net_flows};
pub use crate::models::{
    Criteria, Criterion, DecisionProblem, Direction, GeneralizedCriterion, Interaction, InteractionKind,
    InteractionMode, Labels, PerformanceRecord, ProfileTopology, PrometheeConfig, Table,
};
pub use crate::preference::{Pairwise, PartialPreferences, Preferences, VetoMode, compute_preferences};
pub use crate::ranking::{
    OutrankingRelation, PairRelation, PartialOrderMode, RankedAlternative, promethee_i, promethee_ii, promethee_iii,
};
pub use crate::sorting::{
    Assignment, Assignments, FlowSortVariant, PromSortParams, TriParams, flow_sort, prom_sort, promethee_tri,
};
pub use crate::utils::{Environment, ErrorKind, Float, InfoLogger, McdaError, McdaResult, Parallelism};
pub use crate::validation::ValidationContext;
pub use crate::weights::{CriterionWeight, SurrogateMethod, srf_weights, surrogate_weights};
