use super::*;
use crate::models::{Direction, GeneralizedCriterion};

const PROBLEM_JSON: &str = r#"
{
  "criteria": [
    { "name": "price", "direction": "min", "weight": 2, "function": { "type": "v-shape", "p": 100 }, "veto": 300 },
    { "name": "quality", "direction": "max", "weight": 1, "function": { "type": "level", "q": 1, "p": 2 } },
    { "name": "comfort", "direction": "max", "weight": 1, "function": { "type": "usual" },
      "reinforcement": { "threshold": 3, "factor": 1.5 } }
  ],
  "alternatives": [
    { "name": "car1", "performances": [1000, 5, 3] },
    { "name": "car2", "performances": [1200, 7, 4] }
  ],
  "profiles": [
    { "name": "r1", "performances": [1500, 3, 1] },
    { "name": "r2", "performances": [900, 8, 5] }
  ],
  "categories": ["bad", "medium", "good"],
  "topology": "boundary"
}
"#;

#[test]
fn can_deserialize_problem() {
    let problem: DecisionProblem = serde_json::from_str(PROBLEM_JSON).unwrap();

    let criteria = problem.criteria().unwrap();
    assert_eq!(criteria.len(), 3);
    assert_eq!(criteria.get(0).direction, Direction::Min);
    assert_eq!(criteria.get(0).function, GeneralizedCriterion::VShape { p: 100. });
    assert_eq!(criteria.get(0).veto, Some(300.));
    assert_eq!(criteria.get(1).function, GeneralizedCriterion::Level { q: 1., p: 2. });
    assert_eq!(criteria.get(2).reinforcement.map(|reinforcement| reinforcement.factor), Some(1.5));
    assert_eq!(problem.topology, Some(ProfileTopology::Boundary));
    assert_eq!(problem.categories().unwrap().len(), 3);
}

#[test]
fn can_create_tables() {
    let problem: DecisionProblem = serde_json::from_str(PROBLEM_JSON).unwrap();

    let alternatives = problem.alternatives_table().unwrap();
    let profiles = problem.profiles_table().unwrap().unwrap();

    assert_eq!(alternatives.value("car2", "quality"), Some(7.));
    assert_eq!(profiles.value("r1", "price"), Some(1500.));
    assert_eq!(alternatives.columns(), profiles.columns());
}

#[test]
fn can_use_defaults_without_profiles() {
    let problem: DecisionProblem = serde_json::from_str(
        r#"{
          "criteria": [{ "name": "g1", "direction": "max", "weight": 1, "function": { "type": "usual" } }],
          "alternatives": [{ "name": "a1", "performances": [1] }]
        }"#,
    )
    .unwrap();

    assert!(problem.profiles_table().unwrap().is_none());
    assert!(problem.categories().unwrap().is_empty());
    assert_eq!(problem.topology, None);
}

#[test]
fn can_detect_performances_of_wrong_length() {
    let mut problem: DecisionProblem = serde_json::from_str(PROBLEM_JSON).unwrap();
    problem.alternatives[0].performances.pop();

    assert!(problem.alternatives_table().is_err());
}

parameterized_test! {can_check_topology_counts, (topology, categories, profiles, expected), {
    assert_eq!(topology.check_counts(categories, profiles).is_ok(), expected);
}}

can_check_topology_counts! {
    case_01: (ProfileTopology::Central, 3, 3, true),
    case_02: (ProfileTopology::Central, 2, 3, false),
    case_03: (ProfileTopology::Boundary, 3, 2, true),
    case_04: (ProfileTopology::Boundary, 2, 2, false),
    case_05: (ProfileTopology::Limiting, 2, 3, true),
    case_06: (ProfileTopology::Limiting, 0, 1, false),
    case_07: (ProfileTopology::Limiting, 1, 0, false),
}
