use super::*;
use crate::helpers::models::*;
use crate::utils::ErrorKind;

fn get_weights(weights: Vec<CriterionWeight>) -> Vec<Float> {
    weights.into_iter().map(|weight| weight.weight).collect()
}

parameterized_test! {can_compute_srf_weights, (ranks, ratio, expected), {
    let weights = srf_weights(ranks.as_slice(), ratio, &create_test_config()).unwrap();

    assert_eq!(get_weights(weights), expected);
}}

can_compute_srf_weights! {
    case_01_default_ratio: (vec![("g1", 1), ("g2", 2), ("g3", 3)], DEFAULT_WEIGHT_RATIO, vec![0.089, 0.333, 0.578]),
    case_02_blank_card: (vec![("g1", 1), ("g2", 3)], 3., vec![0.25, 0.75]),
    case_03_same_rank: (vec![("g1", 2), ("g2", 2)], 3., vec![0.5, 0.5]),
    case_04_single_rank: (vec![("g1", 1), ("g2", 1)], 10., vec![0.5, 0.5]),
    case_05_unit_ratio: (vec![("g1", 1), ("g2", 2), ("g3", 4)], 1., vec![0.333, 0.333, 0.333]),
}

parameterized_test! {can_reject_invalid_input, (ranks, ratio, expected_kind), {
    let result = srf_weights(ranks.as_slice(), ratio, &create_test_config());

    assert_eq!(result.unwrap_err().kind(), expected_kind);
}}

can_reject_invalid_input! {
    case_01_ratio_below_one: (vec![("g1", 1), ("g2", 2)], 0.5, ErrorKind::Domain),
    case_02_nan_ratio: (vec![("g1", 1), ("g2", 2)], Float::NAN, ErrorKind::Domain),
    case_03_zero_rank: (vec![("g1", 0), ("g2", 2)], 2., ErrorKind::Domain),
    case_04_no_ranks: (Vec::<(&str, usize)>::new(), 2., ErrorKind::Shape),
}
