use super::*;
use rustc_hash::FxHashSet;

/// Checks that profile names are unique and differ from alternative names.
fn check_e2001_no_profiles_with_duplicate_names(ctx: &ValidationContext) -> Result<(), String> {
    let alternatives = ctx.alternatives().map(|alternative| alternative.name.as_str()).collect::<FxHashSet<_>>();
    let clashes = ctx.profiles().filter(|profile| alternatives.contains(profile.name.as_str()));

    get_duplicates(ctx.profiles().chain(clashes).map(|profile| &profile.name))
        .map_or(Ok(()), |names| Err(format!("E2001: Duplicated profile names: {}", names.join(", "))))
}

/// Checks that every profile has a finite performance per criterion.
fn check_e2002_profile_performances(ctx: &ValidationContext) -> Result<(), String> {
    let expected = ctx.problem.criteria.len();
    let names = ctx
        .profiles()
        .filter(|profile| profile.performances.len() != expected || !are_finite(profile.performances.as_slice()))
        .map(|profile| profile.name.clone())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(format!("E2002: Profiles must have {expected} finite performances: {}", names.join(", ")))
    }
}

/// Checks that category names are unique.
fn check_e2003_no_categories_with_duplicate_names(ctx: &ValidationContext) -> Result<(), String> {
    get_duplicates(ctx.problem.categories.iter())
        .map_or(Ok(()), |names| Err(format!("E2003: Duplicated category names: {}", names.join(", "))))
}

/// Checks that profiles come with topology and amounts of profiles and categories agree with it.
fn check_e2004_profiles_agree_with_topology(ctx: &ValidationContext) -> Result<(), String> {
    let (profiles, categories) = (ctx.problem.profiles.len(), ctx.problem.categories.len());

    match (ctx.problem.topology, profiles) {
        (None, 0) => Ok(()),
        (None, _) => Err("E2004: Profiles are defined without topology".to_string()),
        (Some(topology), _) => {
            topology.check_counts(categories, profiles).map_err(|err| format!("E2004: {}", err.message()))
        }
    }
}

/// Validates profiles and categories.
pub fn validate_profiles(ctx: &ValidationContext) -> Result<(), Vec<String>> {
    combine_error_results(&[
        check_e2001_no_profiles_with_duplicate_names(ctx),
        check_e2002_profile_performances(ctx),
        check_e2003_no_categories_with_duplicate_names(ctx),
        check_e2004_profiles_agree_with_topology(ctx),
    ])
}
