#[cfg(test)]
#[path = "../../tests/unit/ranking/promethee_i_test.rs"]
mod promethee_i_test;

use super::{OutrankingRelation, PairRelation};
use crate::flows::FlowTable;
use crate::utils::{FLOAT_TOLERANCE, is_close};

/// Specifies which relations PROMETHEE I produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PartialOrderMode {
    /// `S` when the first alternative is at least as good on both flows, `?` otherwise.
    WeakPreference,
    /// `I` on equal flows, `P` when at least as good on both flows, `?` otherwise.
    #[default]
    Strict,
}

/// Builds PROMETHEE I partial order relations for every ordered pair of distinct alternatives.
pub fn promethee_i(flows: &FlowTable, mode: PartialOrderMode) -> Vec<PairRelation> {
    let size = flows.len();

    (0..size)
        .flat_map(|a| (0..size).filter(move |&b| b != a).map(move |b| (a, b)))
        .map(|(a, b)| PairRelation {
            first: flows.labels().name(a).to_string(),
            second: flows.labels().name(b).to_string(),
            relation: compare_pair(flows, a, b, mode),
        })
        .collect()
}

/// Returns PROMETHEE I relation of alternative `a` to alternative `b` given by positions in flows.
pub fn compare_pair(flows: &FlowTable, a: usize, b: usize, mode: PartialOrderMode) -> OutrankingRelation {
    let at_least_as_good = flows.positive(a) >= flows.positive(b) - FLOAT_TOLERANCE
        && flows.negative(a) <= flows.negative(b) + FLOAT_TOLERANCE;

    match mode {
        PartialOrderMode::WeakPreference if at_least_as_good => OutrankingRelation::Outranking,
        PartialOrderMode::WeakPreference => OutrankingRelation::Incomparability,
        PartialOrderMode::Strict => {
            if is_close(flows.positive(a), flows.positive(b)) && is_close(flows.negative(a), flows.negative(b)) {
                OutrankingRelation::Indifference
            } else if at_least_as_good {
                OutrankingRelation::Preference
            } else {
                OutrankingRelation::Incomparability
            }
        }
    }
}
