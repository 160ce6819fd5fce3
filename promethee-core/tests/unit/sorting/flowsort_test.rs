use super::*;
use crate::flows::{FlowTable, profile_based_flows};
use crate::helpers::models::*;
use crate::preference::compute_preferences;
use crate::utils::ErrorKind;

fn create_augmented_flows(criteria: &Criteria, alternatives: &Table, profiles: &Table) -> Vec<AugmentedFlows> {
    let config = create_test_config();
    let (alternatives_profiles, profiles_alternatives) =
        compute_preferences(alternatives, criteria, Some(profiles), &config).unwrap().into_with_profiles().unwrap();
    let profile_preferences =
        compute_preferences(profiles, criteria, None, &config).unwrap().into_without_profiles().unwrap();

    profile_based_flows(
        &alternatives_profiles.aggregated,
        &profiles_alternatives.aggregated,
        &profile_preferences.aggregated,
        &config,
    )
    .unwrap()
}

parameterized_test! {can_classify_value, (topology, profiles, value, expected), {
    assert_eq!(classify(topology, profiles, value), expected);
}}

can_classify_value! {
    case_01_boundary_below: (ProfileTopology::Boundary, &[-0.5, 0.5], -0.6, 0),
    case_02_boundary_at_first: (ProfileTopology::Boundary, &[-0.5, 0.5], -0.5, 0),
    case_03_boundary_between: (ProfileTopology::Boundary, &[-0.5, 0.5], 0., 1),
    case_04_boundary_at_last: (ProfileTopology::Boundary, &[-0.5, 0.5], 0.5, 1),
    case_05_boundary_above: (ProfileTopology::Boundary, &[-0.5, 0.5], 0.6, 2),
    case_06_limiting_below: (ProfileTopology::Limiting, &[-1., 0., 1.], -2., 0),
    case_07_limiting_first: (ProfileTopology::Limiting, &[-1., 0., 1.], -0.5, 0),
    case_08_limiting_at_middle: (ProfileTopology::Limiting, &[-1., 0., 1.], 0., 0),
    case_09_limiting_second: (ProfileTopology::Limiting, &[-1., 0., 1.], 0.5, 1),
    case_10_limiting_above: (ProfileTopology::Limiting, &[-1., 0., 1.], 2., 1),
    case_11_central_first: (ProfileTopology::Central, &[-1., 0., 1.], -0.7, 0),
    case_12_central_middle: (ProfileTopology::Central, &[-1., 0., 1.], 0., 1),
    case_13_central_at_midpoint: (ProfileTopology::Central, &[-1., 0., 1.], 0.5, 1),
    case_14_central_last: (ProfileTopology::Central, &[-1., 0., 1.], 0.6, 2),
}

parameterized_test! {can_sort_with_boundary_profiles, variant, {
    let criteria = create_max_criteria(&["g1"]);
    let alternatives =
        create_table(&["a1", "a2", "a3", "a4"], &["g1"], vec![vec![3.], vec![7.], vec![12.], vec![5.]]);
    let profiles = create_table(&["r1", "r2"], &["g1"], vec![vec![5.], vec![10.]]);
    let categories = create_labels(&["bad", "medium", "good"]);
    let flows = create_augmented_flows(&criteria, &alternatives, &profiles);

    let assignments = flow_sort(
        &flows,
        &profiles,
        &criteria,
        &categories,
        ProfileTopology::Boundary,
        variant,
        &create_test_config(),
    )
    .unwrap();

    let names =
        ["a1", "a2", "a3", "a4"].iter().map(|name| assignments.category_names(name).unwrap()).collect::<Vec<_>>();
    assert_eq!(names, vec![("bad", "bad"), ("medium", "medium"), ("good", "good"), ("bad", "bad")]);
}}

can_sort_with_boundary_profiles! {
    case_01_flowsort_i: FlowSortVariant::FlowSortI,
    case_02_flowsort_ii: FlowSortVariant::FlowSortII,
}

fn create_four_profiles() -> Table {
    create_table(&["r1", "r2", "r3", "r4"], &["g1"], vec![vec![0.], vec![5.], vec![10.], vec![15.]])
}

parameterized_test! {can_sort_with_limiting_profiles, variant, {
    let criteria = create_max_criteria(&["g1"]);
    let alternatives =
        create_table(&["a1", "a2", "a3", "a4"], &["g1"], vec![vec![2.], vec![7.], vec![12.], vec![5.]]);
    let profiles = create_four_profiles();
    let categories = create_labels(&["low", "medium", "high"]);
    let flows = create_augmented_flows(&criteria, &alternatives, &profiles);

    let assignments = flow_sort(
        &flows,
        &profiles,
        &criteria,
        &categories,
        ProfileTopology::Limiting,
        variant,
        &create_test_config(),
    )
    .unwrap();

    let names =
        ["a1", "a2", "a3", "a4"].iter().map(|name| assignments.category_names(name).unwrap()).collect::<Vec<_>>();
    assert_eq!(flows[3].flows.net_flows().values(), &[-1., -0.25, 0.5, 1., -0.25]);
    assert_eq!(names, vec![("low", "low"), ("medium", "medium"), ("high", "high"), ("low", "low")]);
}}

can_sort_with_limiting_profiles! {
    case_01_flowsort_i: FlowSortVariant::FlowSortI,
    case_02_flowsort_ii: FlowSortVariant::FlowSortII,
}

parameterized_test! {can_sort_with_central_profiles, variant, {
    let criteria = create_max_criteria(&["g1"]);
    let alternatives =
        create_table(&["a1", "a2", "a3", "a4"], &["g1"], vec![vec![-3.], vec![7.], vec![10.], vec![17.]]);
    let profiles = create_four_profiles();
    let categories = create_labels(&["c1", "c2", "c3", "c4"]);
    let flows = create_augmented_flows(&criteria, &alternatives, &profiles);

    let assignments = flow_sort(
        &flows,
        &profiles,
        &criteria,
        &categories,
        ProfileTopology::Central,
        variant,
        &create_test_config(),
    )
    .unwrap();

    let names =
        ["a1", "a2", "a3", "a4"].iter().map(|name| assignments.category_names(name).unwrap()).collect::<Vec<_>>();
    assert_eq!(flows[2].flows.net_flows().values(), &[-1., -0.5, 0.25, 1., 0.25]);
    assert_eq!(names, vec![("c1", "c1"), ("c2", "c2"), ("c3", "c3"), ("c4", "c4")]);
}}

can_sort_with_central_profiles! {
    case_01_flowsort_i: FlowSortVariant::FlowSortI,
    case_02_flowsort_ii: FlowSortVariant::FlowSortII,
}

#[test]
fn can_assign_imprecisely_when_flows_disagree() {
    let criteria = create_max_criteria(&["g1"]);
    let profiles = create_table(&["r1", "r2"], &["g1"], vec![vec![5.], vec![10.]]);
    let categories = create_labels(&["bad", "medium", "good"]);
    let flows = vec![AugmentedFlows {
        alternative: "a1".to_string(),
        flows: FlowTable::new(create_labels(&["r1", "r2", "a1"]), vec![0.25, 0.75, 0.8], vec![0.75, 0.25, 0.5])
            .unwrap(),
    }];
    let (config, messages) = create_config_with_messages();

    let sort = |variant| {
        flow_sort(&flows, &profiles, &criteria, &categories, ProfileTopology::Boundary, variant, &config).unwrap()
    };

    let interval = sort(FlowSortVariant::FlowSortI);
    let net = sort(FlowSortVariant::FlowSortII);

    assert_eq!(interval.assignment("a1"), Some(Assignment { worse: 1, better: 2 }));
    assert_eq!(net.assignment("a1"), Some(Assignment::precise(1)));
    assert_eq!(messages.lock().unwrap().as_slice(), &["flowsort: 'a1' is assigned imprecisely to [medium, good]"]);
}

#[test]
fn can_detect_non_dominant_profiles_before_sorting() {
    let criteria = create_max_criteria(&["g1"]);
    let alternatives = create_table(&["a1"], &["g1"], vec![vec![3.]]);
    let profiles = create_table(&["r1", "r2"], &["g1"], vec![vec![10.], vec![5.]]);
    let flows = create_augmented_flows(&criteria, &alternatives, &profiles);

    let err = flow_sort(
        &flows,
        &profiles,
        &criteria,
        &create_labels(&["bad", "medium", "good"]),
        ProfileTopology::Boundary,
        FlowSortVariant::FlowSortII,
        &create_test_config(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn can_detect_categories_not_matching_topology() {
    let criteria = create_max_criteria(&["g1"]);
    let alternatives = create_table(&["a1"], &["g1"], vec![vec![3.]]);
    let profiles = create_table(&["r1", "r2"], &["g1"], vec![vec![5.], vec![10.]]);
    let flows = create_augmented_flows(&criteria, &alternatives, &profiles);

    let err = flow_sort(
        &flows,
        &profiles,
        &criteria,
        &create_labels(&["bad", "good"]),
        ProfileTopology::Boundary,
        FlowSortVariant::FlowSortII,
        &create_test_config(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Shape);
}
