use super::*;

/// Checks that problem has at least one alternative.
fn check_e1101_alternatives_are_present(ctx: &ValidationContext) -> Result<(), String> {
    if ctx.problem.alternatives.is_empty() { Err("E1101: Problem has no alternatives".to_string()) } else { Ok(()) }
}

/// Checks that alternative names are unique.
fn check_e1102_no_alternatives_with_duplicate_names(ctx: &ValidationContext) -> Result<(), String> {
    get_duplicates(ctx.alternatives().map(|alternative| &alternative.name))
        .map_or(Ok(()), |names| Err(format!("E1102: Duplicated alternative names: {}", names.join(", "))))
}

/// Checks that every alternative has a performance per criterion.
fn check_e1103_performances_match_criteria(ctx: &ValidationContext) -> Result<(), String> {
    let expected = ctx.problem.criteria.len();
    let names = ctx
        .alternatives()
        .filter(|alternative| alternative.performances.len() != expected)
        .map(|alternative| alternative.name.clone())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(format!("E1103: Alternatives must have {expected} performances: {}", names.join(", ")))
    }
}

/// Checks that performances are finite numbers.
fn check_e1104_finite_performances(ctx: &ValidationContext) -> Result<(), String> {
    let names = ctx
        .alternatives()
        .filter(|alternative| !are_finite(alternative.performances.as_slice()))
        .map(|alternative| alternative.name.clone())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(format!("E1104: Alternatives with non finite performances: {}", names.join(", ")))
    }
}

/// Validates performance table of alternatives.
pub fn validate_performances(ctx: &ValidationContext) -> Result<(), Vec<String>> {
    combine_error_results(&[
        check_e1101_alternatives_are_present(ctx),
        check_e1102_no_alternatives_with_duplicate_names(ctx),
        check_e1103_performances_match_criteria(ctx),
        check_e1104_finite_performances(ctx),
    ])
}
