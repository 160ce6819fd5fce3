#[cfg(test)]
#[path = "../../tests/unit/ranking/promethee_ii_test.rs"]
mod promethee_ii_test;

use crate::flows::NetFlows;
use crate::utils::{Float, compare_floats};

/// An alternative with its position in the total order.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedAlternative {
    /// A name of the alternative.
    pub name: String,
    /// Net flow of the alternative.
    pub net_flow: Float,
    /// A 1-based rank.
    pub rank: usize,
}

/// Ranks alternatives by net flow in descending order. Ties keep the input order.
pub fn promethee_ii(net_flows: &NetFlows) -> Vec<RankedAlternative> {
    let mut order = (0..net_flows.len()).collect::<Vec<_>>();
    // NOTE sort_by is stable
    order.sort_by(|&a, &b| compare_floats(net_flows.get(b), net_flows.get(a)));

    order
        .into_iter()
        .enumerate()
        .map(|(position, idx)| RankedAlternative {
            name: net_flows.labels().name(idx).to_string(),
            net_flow: net_flows.get(idx),
            rank: position + 1,
        })
        .collect()
}
