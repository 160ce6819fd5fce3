#[cfg(test)]
#[path = "../../tests/unit/sorting/dominance_test.rs"]
mod dominance_test;

use crate::models::{Criteria, Table};
use crate::preference::directed_performances;
use crate::utils::{McdaError, McdaResult};

/// Checks that every profile is weakly dominated by the next one on every criterion once directions
/// are applied. Profiles are expected to be ordered from the worst to the best one.
pub fn check_dominance(profiles: &Table, criteria: &Criteria) -> McdaResult<()> {
    let directed = directed_performances(profiles, criteria)?;

    let violations = (1..directed.n_rows())
        .flat_map(|next| (0..directed.n_columns()).map(move |k| (next, k)))
        .filter(|&(next, k)| directed.get(next - 1, k) > directed.get(next, k))
        .map(|(next, k)| {
            format!(
                "'{}' is worse than '{}' on criterion '{}'",
                directed.rows().name(next),
                directed.rows().name(next - 1),
                directed.columns().name(k)
            )
        })
        .collect::<Vec<_>>();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(McdaError::domain(format!("profiles violate dominance condition: {}", violations.join(", "))))
    }
}
