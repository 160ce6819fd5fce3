use super::*;

parameterized_test! {can_calculate_preference, (function, deviation, expected), {
    assert_close!(function.preference(deviation), expected);
}}

can_calculate_preference! {
    case_01_usual_zero: (GeneralizedCriterion::Usual, 0., 0.),
    case_02_usual_negative: (GeneralizedCriterion::Usual, -1., 0.),
    case_03_usual_positive: (GeneralizedCriterion::Usual, 0.1, 1.),
    case_04_u_shape_at_q: (GeneralizedCriterion::UShape { q: 1. }, 1., 0.),
    case_05_u_shape_above_q: (GeneralizedCriterion::UShape { q: 1. }, 1.5, 1.),
    case_06_v_shape_negative: (GeneralizedCriterion::VShape { p: 2. }, -1., 0.),
    case_07_v_shape_linear: (GeneralizedCriterion::VShape { p: 2. }, 1., 0.5),
    case_08_v_shape_at_p: (GeneralizedCriterion::VShape { p: 2. }, 2., 1.),
    case_09_v_shape_above_p: (GeneralizedCriterion::VShape { p: 2. }, 3., 1.),
    case_10_level_at_q: (GeneralizedCriterion::Level { q: 1., p: 2. }, 1., 0.),
    case_11_level_between: (GeneralizedCriterion::Level { q: 1., p: 2. }, 1.5, 0.5),
    case_12_level_at_p: (GeneralizedCriterion::Level { q: 1., p: 2. }, 2., 0.5),
    case_13_level_above_p: (GeneralizedCriterion::Level { q: 1., p: 2. }, 2.5, 1.),
    case_14_linear_at_q: (GeneralizedCriterion::VShapeIndifference { q: 1., p: 3. }, 1., 0.),
    case_15_linear_between: (GeneralizedCriterion::VShapeIndifference { q: 1., p: 3. }, 2., 0.5),
    case_16_linear_at_p: (GeneralizedCriterion::VShapeIndifference { q: 1., p: 3. }, 3., 1.),
    case_17_gaussian_zero: (GeneralizedCriterion::Gaussian { s: 1. }, 0., 0.),
    case_18_gaussian_at_s: (GeneralizedCriterion::Gaussian { s: 1. }, 1., 0.3934693402873666),
    case_19_gaussian_far: (GeneralizedCriterion::Gaussian { s: 1. }, 100., 1.),
}

#[test]
fn can_treat_zero_indifference_as_usual() {
    let u_shape = GeneralizedCriterion::UShape { q: 0. };

    for deviation in [-1., 0., 1E-6, 1.] {
        assert_eq!(u_shape.preference(deviation), GeneralizedCriterion::Usual.preference(deviation));
    }
}
