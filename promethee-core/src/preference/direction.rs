#[cfg(test)]
#[path = "../../tests/unit/preference/direction_test.rs"]
mod direction_test;

use crate::models::{Criteria, Table};
use crate::utils::{McdaError, McdaResult};

/// Flips performances of criteria to be minimized so that larger is better on every criterion.
/// Table columns must be the criteria in the same order.
pub fn directed_performances(performances: &Table, criteria: &Criteria) -> McdaResult<Table> {
    check_criteria_columns(performances, criteria)?;

    let signs = criteria.iter().map(|criterion| criterion.direction.sign()).collect::<Vec<_>>();

    Ok(Table::from_fn(performances.rows().clone(), performances.columns().clone(), |row, col| {
        performances.get(row, col) * signs[col]
    }))
}

/// Checks that table columns are the criteria labels in the same order.
pub(crate) fn check_criteria_columns(table: &Table, criteria: &Criteria) -> McdaResult<()> {
    if table.columns() != criteria.labels() {
        return Err(McdaError::shape(format!(
            "performance table columns [{}] do not match criteria [{}]",
            table.columns().names().join(", "),
            criteria.labels().names().join(", ")
        )));
    }

    Ok(())
}
