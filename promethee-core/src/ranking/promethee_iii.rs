#[cfg(test)]
#[path = "../../tests/unit/ranking/promethee_iii_test.rs"]
mod promethee_iii_test;

use super::{OutrankingRelation, PairRelation};
use crate::flows::FlowTable;
use crate::models::{PrometheeConfig, Table};
use crate::utils::{Float, McdaError, McdaResult, mean_of, round_to};

/// An interval of net flow uncertainty.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowInterval {
    /// A name of the alternative.
    pub name: String,
    /// A lower bound `x = φ - α·σ`.
    pub lower: Float,
    /// An upper bound `y = φ + α·σ`.
    pub upper: Float,
}

/// A result of PROMETHEE III.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalOrder {
    /// Intervals in alternatives order.
    pub intervals: Vec<FlowInterval>,
    /// Relations of every ordered pair of distinct alternatives.
    pub relations: Vec<PairRelation>,
}

/// Builds PROMETHEE III interval order. For alternative `i` the standard deviation is
/// `σ_i = sqrt(mean_{j ≠ i} (π(i, j) - π(j, i) - φ(i))²)` and the interval is `[φ - α·σ, φ + α·σ]`.
/// Pair `(a, b)` is `P` when `x(a) > y(b)`, `I` when intervals overlap and `?` otherwise.
pub fn promethee_iii(
    flows: &FlowTable,
    preferences: &Table,
    alpha: Float,
    config: &PrometheeConfig,
) -> McdaResult<IntervalOrder> {
    if alpha <= 0. || alpha.is_nan() {
        return Err(McdaError::domain("alpha must be > 0"));
    }

    if preferences.rows() != flows.labels() || preferences.columns() != flows.labels() {
        return Err(McdaError::shape("preferences must be defined between alternatives of flows"));
    }

    let size = flows.len();

    let intervals = (0..size)
        .map(|i| {
            let net = flows.net(i);
            let variance = mean_of((0..size).filter(|&j| j != i).map(|j| {
                let deviation = preferences.get(i, j) - preferences.get(j, i) - net;
                deviation * deviation
            }));
            let spread = alpha * variance.sqrt();

            FlowInterval {
                name: flows.labels().name(i).to_string(),
                lower: round_to(net - spread, config.decimal_place),
                upper: round_to(net + spread, config.decimal_place),
            }
        })
        .collect::<Vec<_>>();

    let relations = (0..size)
        .flat_map(|a| (0..size).filter(move |&b| b != a).map(move |b| (a, b)))
        .map(|(a, b)| {
            let (first, second) = (&intervals[a], &intervals[b]);
            let relation = if first.lower > second.upper {
                OutrankingRelation::Preference
            } else if first.lower <= second.upper && second.lower <= first.upper {
                OutrankingRelation::Indifference
            } else {
                OutrankingRelation::Incomparability
            };

            PairRelation { first: first.name.clone(), second: second.name.clone(), relation }
        })
        .collect();

    Ok(IntervalOrder { intervals, relations })
}
