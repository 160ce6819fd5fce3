use crate::utils::Float;
use rustc_hash::FxHashSet;

/// Returns sorted duplicated names if there are any.
pub fn get_duplicates<'a>(items: impl Iterator<Item = &'a String>) -> Option<Vec<String>> {
    let mut names = FxHashSet::default();
    let duplicates = items
        .filter_map(move |name| if names.insert(name) { None } else { Some(name.clone()) })
        .collect::<FxHashSet<_>>();

    if duplicates.is_empty() {
        None
    } else {
        let mut duplicates = duplicates.into_iter().collect::<Vec<_>>();
        duplicates.sort();
        Some(duplicates)
    }
}

/// Combines results of separate checks into a list of errors.
pub fn combine_error_results(results: &[Result<(), String>]) -> Result<(), Vec<String>> {
    let errors = results.iter().cloned().flat_map(|result| result.err()).collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Checks that all values are finite.
pub fn are_finite(values: &[Float]) -> bool {
    values.iter().all(|value| value.is_finite())
}
