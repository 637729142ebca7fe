use super::normalize_roots;
use crate::node::Node;

#[test]
fn test_multiple_roots_are_unchanged() {
    let roots = vec![Node::section("A", vec![]), Node::section("B", vec![])];
    assert_eq!(normalize_roots(&roots), roots.as_slice());
}

#[test]
fn test_single_root_yields_its_sections() {
    let roots = vec![Node::section(
        "Root",
        vec![Node::section("A", vec![]), Node::section("B", vec![])],
    )
    .with_components(vec![Node::leaf("Ignored", "ignored")])];

    let normalized = normalize_roots(&roots);
    assert_eq!(normalized.len(), 2);
    assert_eq!(normalized[0].name.as_deref(), Some("A"));
    assert_eq!(normalized[1].name.as_deref(), Some("B"));
}

#[test]
fn test_single_root_without_sections_yields_components() {
    let roots = vec![Node::section("Root", vec![])
        .with_components(vec![Node::leaf("Button", "button"), Node::leaf("Input", "input")])];

    let normalized = normalize_roots(&roots);
    assert_eq!(normalized, roots[0].components.as_slice());
}

#[test]
fn test_single_leaf_root_yields_nothing() {
    let roots = vec![Node::leaf("Lonely", "lonely")];
    assert!(normalize_roots(&roots).is_empty());
}

#[test]
fn test_empty_roots() {
    assert!(normalize_roots(&[]).is_empty());
}

#[test]
fn test_normalizing_multiple_roots_is_idempotent() {
    let roots = vec![
        Node::section("A", vec![Node::section("A1", vec![])]),
        Node::section("B", vec![]),
    ];
    let once = normalize_roots(&roots);
    assert_eq!(normalize_roots(once), once);
}
