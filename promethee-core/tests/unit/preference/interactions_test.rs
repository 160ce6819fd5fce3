use super::*;
use crate::helpers::models::*;
use crate::models::{Criterion, Direction, GeneralizedCriterion};
use crate::preference::compute_partial_preferences;
use crate::utils::ErrorKind;

fn create_interaction(kind: InteractionKind, coefficient: Float) -> Interaction {
    Interaction { first: "g1".to_string(), second: "g2".to_string(), kind, coefficient }
}

fn create_synergy(first: &str, second: &str) -> Interaction {
    let (first, second) = (first.to_string(), second.to_string());

    Interaction { first, second, kind: InteractionKind::Synergy, coefficient: 1. }
}

fn compute(performances: Table, criteria: &Criteria, interactions: &[Interaction], config: &PrometheeConfig) -> Table {
    let partial = compute_partial_preferences(&performances, criteria, None, config).unwrap();

    compute_interaction_preferences(&partial, criteria, interactions, config).unwrap().into_without_profiles().unwrap()
}

fn create_step_performances() -> Table {
    create_table(&["a1", "a2", "a3"], &["g1", "g2"], vec![vec![1., 1.], vec![0., 0.], vec![1., 0.]])
}

parameterized_test! {can_aggregate_with_interaction, (kind, coefficient, expected_a1_a2, expected_a3_a2), {
    let criteria = create_max_criteria(&["g1", "g2"]);

    let result = compute(
        create_step_performances(),
        &criteria,
        &[create_interaction(kind, coefficient)],
        &create_test_config(),
    );

    assert_eq!(result.value("a1", "a2"), Some(expected_a1_a2));
    assert_eq!(result.value("a3", "a2"), Some(expected_a3_a2));
}}

can_aggregate_with_interaction! {
    case_01_synergy: (InteractionKind::Synergy, 1., 1., 0.333),
    case_02_weakening: (InteractionKind::Weakening, 0.5, 1., 0.667),
    case_03_negative_weakening: (InteractionKind::Weakening, -0.5, 1., 0.667),
}

parameterized_test! {can_weaken_with_antagonistic_interaction, (coefficient, expected), {
    let criteria = create_max_criteria(&["g1", "g2"]);
    let performances = create_table(&["a1", "a2"], &["g1", "g2"], vec![vec![1., 0.], vec![0., 1.]]);

    let result = compute(
        performances,
        &criteria,
        &[create_interaction(InteractionKind::Antagonistic, coefficient)],
        &create_test_config(),
    );

    assert_eq!(result.value("a1", "a2"), Some(expected));
}}

can_weaken_with_antagonistic_interaction! {
    case_01_half: (0.5, 0.25),
    case_02_full: (1., 0.),
    case_03_clamped: (2., 0.),
}

parameterized_test! {can_use_interaction_mode, (mode, expected), {
    let criteria = create_criteria(vec![
        Criterion::new("g1", Direction::Max, 1., GeneralizedCriterion::VShape { p: 2. }),
        Criterion::new("g2", Direction::Max, 1., GeneralizedCriterion::VShape { p: 2. }),
    ]);
    let performances = create_table(&["a1", "a2"], &["g1", "g2"], vec![vec![1., 1.], vec![0., 0.]]);

    let result = compute(
        performances,
        &criteria,
        &[create_interaction(InteractionKind::Synergy, 1.)],
        &create_test_config().with_interaction_mode(mode),
    );

    assert_eq!(result.value("a1", "a2"), Some(expected));
}}

can_use_interaction_mode! {
    case_01_multiplication: (InteractionMode::Multiplication, 0.417),
    case_02_minimum: (InteractionMode::Minimum, 0.5),
}

parameterized_test! {can_detect_invalid_interactions, (interaction, kind), {
    let criteria = create_max_criteria(&["g1", "g2"]);
    let partial = compute_partial_preferences(&create_step_performances(), &criteria, None, &create_test_config())
        .unwrap();

    let err = compute_interaction_preferences(&partial, &criteria, &[interaction], &create_test_config())
        .unwrap_err();

    assert_eq!(err.kind(), kind);
}}

can_detect_invalid_interactions! {
    case_01_unknown_criterion: (create_synergy("g1", "g3"), ErrorKind::Shape),
    case_02_same_criterion: (create_synergy("g1", "g1"), ErrorKind::Shape),
    case_03_zero_denominator: (create_interaction(InteractionKind::Weakening, 2.), ErrorKind::Domain),
}
