use super::*;
use crate::utils::ErrorKind;

#[test]
fn can_create_labels_with_index() {
    let labels = Labels::new(["a1", "a2", "a3"]).unwrap();

    assert_eq!(labels.len(), 3);
    assert_eq!(labels.name(1), "a2");
    assert_eq!(labels.index_of("a3"), Some(2));
    assert_eq!(labels.index_of("a4"), None);
    assert!(labels.contains("a1"));
    assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["a1", "a2", "a3"]);
}

#[test]
fn can_detect_duplicated_labels() {
    let err = Labels::new(["a1", "a2", "a1"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Shape);
    assert_eq!(err.message(), "duplicated label: 'a1'");
}

#[test]
fn can_require_label() {
    let labels = Labels::new(["g1"]).unwrap();

    assert_eq!(labels.require("g1", "criterion"), Ok(0));
    assert_eq!(labels.require("g2", "criterion").unwrap_err().message(), "unknown criterion: 'g2'");
}

#[test]
fn can_chain_labels() {
    let alternatives = Labels::new(["a1", "a2"]).unwrap();
    let profiles = Labels::new(["r1"]).unwrap();

    let chained = alternatives.chain(&profiles).unwrap();

    assert_eq!(chained.names(), &["a1".to_string(), "a2".to_string(), "r1".to_string()]);
    assert_eq!(chained.index_of("r1"), Some(2));
    assert!(alternatives.chain(&alternatives).is_err());
}

#[test]
fn can_compare_labels_by_order() {
    assert_eq!(Labels::new(["a", "b"]).unwrap(), Labels::new(["a", "b"]).unwrap());
    assert_ne!(Labels::new(["a", "b"]).unwrap(), Labels::new(["b", "a"]).unwrap());
}
