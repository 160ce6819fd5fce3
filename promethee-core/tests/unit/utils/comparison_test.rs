use super::*;

parameterized_test! {can_compare_floats, (left, right, expected), {
    assert_eq!(compare_floats(left, right), expected);
}}

can_compare_floats! {
    case_01: (0., 1., Ordering::Less),
    case_02: (1., 0., Ordering::Greater),
    case_03: (1., 1., Ordering::Equal),
    case_04: (Float::NAN, 1., Ordering::Greater),
    case_05: (1., Float::NAN, Ordering::Less),
    case_06: (Float::NAN, Float::NAN, Ordering::Equal),
    case_07: (Float::NEG_INFINITY, -1E10, Ordering::Less),
}

#[test]
fn can_sort_with_nan_last() {
    let mut values = vec![3., Float::NAN, 1., 2.];

    values.sort_by(|a, b| compare_floats(*a, *b));

    assert_eq!(&values[..3], &[1., 2., 3.]);
    assert!(values[3].is_nan());
}

parameterized_test! {can_check_closeness, (left, right, expected), {
    assert_eq!(is_close(left, right), expected);
}}

can_check_closeness! {
    case_01: (0.1 + 0.2, 0.3, true),
    case_02: (1., 1. + 1E-10, true),
    case_03: (1., 1. + 1E-6, false),
}
