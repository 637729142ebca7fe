use super::{Node, NodeKind};

#[test]
fn test_kind_follows_children() {
    let leaf = Node::leaf("Button", "button");
    assert_eq!(leaf.kind(), NodeKind::Leaf);

    let section = Node::section("Components", vec![]).with_components(vec![leaf]);
    assert_eq!(section.kind(), NodeKind::Section);
    assert_eq!(section.child_count(), 1);
}

#[test]
fn test_children_lists_sections_before_components() {
    let node = Node::section("Root", vec![Node::section("S1", vec![]), Node::section("S2", vec![])])
        .with_components(vec![Node::leaf("C1", "c1")]);

    let names: Vec<_> = node.children().filter_map(|n| n.name.as_deref()).collect();
    assert_eq!(names, ["S1", "S2", "C1"]);
}

#[test]
fn test_section_slug_is_derived_from_name() {
    let node = Node::section("Getting Started!", vec![]);
    assert_eq!(node.slug.as_deref(), Some("getting-started"));
}

#[test]
fn test_empty_name_is_not_displayed() {
    let node = Node {
        name: Some(String::new()),
        ..Node::default()
    };
    assert_eq!(node.display_name(), None);
    assert_eq!(node.label(), None);
}

#[test]
fn test_label_prefers_visible_name() {
    let mut node = Node::leaf("button", "button");
    assert_eq!(node.label(), Some("button"));

    node.visible_name = Some("Button".to_string());
    assert_eq!(node.label(), Some("Button"));
}

#[test]
fn test_depth_defaults_to_zero() {
    assert_eq!(Node::leaf("a", "a").depth(), 0);
    assert_eq!(Node::leaf("a", "a").with_depth(2).depth(), 2);
}

#[test]
fn test_deserializes_camel_case_fields() {
    let json = r#"{
        "name": "Components",
        "sectionDepth": 1,
        "components": [{"name": "Button", "slug": "button", "visibleName": "The Button"}]
    }"#;
    let node: Node = serde_json::from_str(json).unwrap();

    assert_eq!(node.section_depth, Some(1));
    assert!(node.sections.is_empty());
    assert_eq!(node.components[0].label(), Some("The Button"));
    assert!(!node.components[0].external);
}
