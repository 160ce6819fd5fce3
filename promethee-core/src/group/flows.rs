#[cfg(test)]
#[path = "../../tests/unit/group/flows_test.rs"]
mod flows_test;

use crate::flows::NetFlows;
use crate::models::PrometheeConfig;
use crate::utils::{Float, McdaError, McdaResult, round_to};

/// Aggregates net flows of decision makers into a group net flow `Σ_d w_d·φ_d(a)`.
/// Every decision maker must evaluate the same alternatives in the same order.
pub fn group_net_flows(flows: &[NetFlows], weights: &[Float], config: &PrometheeConfig) -> McdaResult<NetFlows> {
    let first = flows.first().ok_or_else(|| McdaError::shape("at least one decision maker is required"))?;

    if flows.len() != weights.len() {
        return Err(McdaError::shape(format!(
            "expected weight for each of {} decision makers, got {}",
            flows.len(),
            weights.len()
        )));
    }

    if let Some(idx) = flows.iter().position(|dm| dm.labels() != first.labels()) {
        return Err(McdaError::shape(format!("net flows of decision maker {idx} have different alternatives")));
    }

    let values = (0..first.len())
        .map(|a| {
            let value = flows.iter().zip(weights.iter()).map(|(dm, weight)| weight * dm.get(a)).sum::<Float>();
            round_to(value, config.decimal_place)
        })
        .collect();

    NetFlows::new(first.labels().clone(), values)
}
