use super::*;
use crate::helpers::models::*;
use crate::utils::ErrorKind;

fn create_assignments(names: &[(&str, &str)]) -> Assignments {
    Assignments::from_names(create_labels(&["a1", "a2"]), create_labels(&["c1", "c2", "c3"]), names.iter().copied())
        .unwrap()
}

#[test]
fn can_compute_support_and_unimodal_support() {
    let categories = create_labels(&["c1", "c2", "c3"]);
    let assignments = vec![
        create_assignments(&[("c1", "c1"), ("c2", "c3")]),
        create_assignments(&[("c3", "c3"), ("c2", "c2")]),
    ];

    let acceptabilities = group_class_acceptabilities(&assignments, &categories, &create_test_config()).unwrap();

    assert_eq!(acceptabilities.support.row(0), &[50., 0., 50.]);
    assert_eq!(acceptabilities.support.row(1), &[0., 100., 50.]);
    assert_eq!(acceptabilities.unimodal.row(0), &[50., 50., 50.]);
    assert_eq!(acceptabilities.unimodal.row(1), &[0., 100., 50.]);
    assert_eq!(acceptabilities.support.rows().names(), &["a1".to_string(), "a2".to_string()]);
    assert_eq!(acceptabilities.unimodal.columns(), &categories);
}

#[test]
fn can_round_support() {
    let categories = create_labels(&["c1", "c2", "c3"]);
    let assignments = vec![
        create_assignments(&[("c1", "c1"), ("c1", "c1")]),
        create_assignments(&[("c1", "c2"), ("c1", "c1")]),
        create_assignments(&[("c3", "c3"), ("c1", "c1")]),
    ];

    let acceptabilities = group_class_acceptabilities(&assignments, &categories, &create_test_config()).unwrap();

    assert_eq!(acceptabilities.support.row(0), &[66.667, 33.333, 33.333]);
    assert_eq!(acceptabilities.support.row(1), &[100., 0., 0.]);
}

parameterized_test! {can_make_support_unimodal, (support, expected), {
    assert_eq!(unimodal_support(support.as_slice()), expected);
}}

can_make_support_unimodal! {
    case_01_valleys: (vec![10., 0., 5., 0., 20.], vec![10., 10., 10., 10., 20.]),
    case_02_already_unimodal: (vec![30., 10., 0.], vec![30., 10., 0.]),
    case_03_single: (vec![5.], vec![5.]),
    case_04_pair: (vec![5., 0.], vec![5., 0.]),
    case_05_empty: (Vec::<Float>::new(), Vec::<Float>::new()),
}

#[test]
fn can_detect_invalid_group_input() {
    let categories = create_labels(&["c1", "c2", "c3"]);
    let config = create_test_config();
    let other_categories = Assignments::from_names(
        create_labels(&["a1", "a2"]),
        create_labels(&["c1", "c2"]),
        [("c1", "c1"), ("c2", "c2")],
    )
    .unwrap();
    let other_alternatives = Assignments::from_names(
        create_labels(&["a1", "a3"]),
        categories.clone(),
        [("c1", "c1"), ("c2", "c2")],
    )
    .unwrap();

    let empty = group_class_acceptabilities(&[], &categories, &config);
    let mixed_categories = group_class_acceptabilities(
        &[create_assignments(&[("c1", "c1"), ("c2", "c2")]), other_categories],
        &categories,
        &config,
    );
    let mixed_alternatives = group_class_acceptabilities(
        &[create_assignments(&[("c1", "c1"), ("c2", "c2")]), other_alternatives],
        &categories,
        &config,
    );

    assert_eq!(empty.unwrap_err().kind(), ErrorKind::Shape);
    assert_eq!(mixed_categories.unwrap_err().kind(), ErrorKind::Shape);
    assert_eq!(mixed_alternatives.unwrap_err().message(), "decision maker 1 has no assignment for 'a2'");
}
