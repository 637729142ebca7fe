use super::rows;
use crate::address::UrlAddressBuilder;
use crate::location::Location;
use crate::node::Node;
use crate::toc::{Level, TableOfContents, TocOptions};
use std::collections::HashSet;

fn render(sections: Vec<Node>, options: TocOptions, hash: &str) -> Level {
    TableOfContents::new(sections, options)
        .render("", &Location::new("/", hash), &UrlAddressBuilder::new("/"))
        .unwrap()
}

fn collapsible() -> TocOptions {
    TocOptions {
        use_router_links: false,
        collapsible_sections: true,
    }
}

fn sample() -> Vec<Node> {
    vec![
        Node::section("Basics", vec![]).with_components(vec![Node::leaf("Button", "button")]),
        Node::section("Forms", vec![]).with_components(vec![Node::leaf("Input", "input")]),
    ]
}

#[test]
fn test_forced_sections_list_their_children() {
    let level = render(sample(), collapsible(), "#input");
    let rows = rows(&level, &HashSet::new());

    let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["Basics", "Forms", "Input"]);

    let input = &rows[2];
    assert_eq!(input.key, "Forms/Input");
    assert_eq!(input.link.as_deref(), Some("/#input"));
    assert_eq!(input.depth, 1);
    assert!(input.selected);
    assert!(rows[1].open && rows[1].forced && rows[1].on_path);
    assert!(!rows[0].open && rows[0].expandable);
}

#[test]
fn test_reader_can_open_sections() {
    let level = render(sample(), collapsible(), "");
    assert_eq!(rows(&level, &HashSet::new()).len(), 2);

    let opened: HashSet<String> = ["Basics".to_string()].into_iter().collect();
    let rows = rows(&level, &opened);
    let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["Basics", "Button", "Forms"]);
    assert!(rows[0].open && !rows[0].forced);
}

#[test]
fn test_unlabelled_items_are_hidden() {
    let hidden = Node {
        slug: Some("hidden".to_string()),
        ..Node::default()
    };
    let level = render(
        vec![hidden, Node::leaf("Shown", "shown")],
        TocOptions::default(),
        "",
    );
    let rows = rows(&level, &HashSet::new());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "Shown");
    assert!(rows[0].is_last, "Hidden siblings do not count");
}

#[test]
fn test_explicit_href_overrides_address() {
    let mut link = Node::leaf("Changelog", "changelog");
    link.visible_name = Some("Changelog ↗".to_string());
    link.href = Some("https://example.com/changelog".to_string());
    link.external = true;
    let level = render(vec![link, Node::leaf("Intro", "intro")], TocOptions::default(), "");

    let rows = rows(&level, &HashSet::new());
    assert_eq!(rows[0].label, "Changelog ↗");
    assert_eq!(rows[0].link.as_deref(), Some("https://example.com/changelog"));
    assert!(rows[0].external);
    assert_eq!(rows[1].link.as_deref(), Some("/#intro"));
}

#[test]
fn test_continuation_tracks_ancestor_siblings() {
    let parent = Node::section(
        "P",
        vec![
            Node::section("S1", vec![]).with_components(vec![Node::leaf("c", "c")]),
            Node::section("S2", vec![]),
        ],
    );
    let level = render(vec![parent, Node::section("Q", vec![])], TocOptions::default(), "");
    let rows = rows(&level, &HashSet::new());

    let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["P", "S1", "c", "S2", "Q"]);

    assert_eq!(rows[1].continuation, [true]);
    assert!(!rows[1].is_last);
    assert_eq!(rows[2].continuation, [true, true]);
    assert!(rows[2].is_last);
    assert!(rows[3].is_last);
    assert!(rows[4].is_last && rows[4].continuation.is_empty());
}

#[test]
fn test_repeated_labels_get_distinct_keys() {
    let api = |leaf: &str| {
        Node::section("Api", vec![]).with_components(vec![Node::leaf(leaf, leaf)])
    };
    let level = render(vec![api("A"), api("B"), api("C")], collapsible(), "");

    let opened: HashSet<String> = ["Api#1".to_string()].into_iter().collect();
    let rows = rows(&level, &opened);
    let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["Api", "Api#1", "Api#1/B", "Api#2"]);
}
