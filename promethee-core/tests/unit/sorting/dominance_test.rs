use super::*;
use crate::helpers::models::*;
use crate::models::{Criterion, Direction, GeneralizedCriterion};
use crate::utils::ErrorKind;

fn create_mixed_criteria() -> Criteria {
    create_criteria(vec![
        Criterion::new("g1", Direction::Max, 1., GeneralizedCriterion::Usual),
        Criterion::new("g2", Direction::Min, 1., GeneralizedCriterion::Usual),
    ])
}

#[test]
fn can_accept_dominant_profiles() {
    let profiles = create_table(&["r1", "r2", "r3"], &["g1", "g2"], vec![vec![1., 10.], vec![2., 5.], vec![2., 5.]]);

    assert_eq!(check_dominance(&profiles, &create_mixed_criteria()), Ok(()));
}

#[test]
fn can_detect_non_dominant_profiles() {
    let profiles = create_table(&["r1", "r2"], &["g1", "g2"], vec![vec![1., 10.], vec![2., 12.]]);

    let err = check_dominance(&profiles, &create_mixed_criteria()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Domain);
    assert_eq!(err.message(), "profiles violate dominance condition: 'r2' is worse than 'r1' on criterion 'g2'");
}
