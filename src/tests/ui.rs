use super::{draw, tree_prefix};
use crate::address::UrlAddressBuilder;
use crate::app_state::AppState;
use crate::list::rows;
use crate::location::Location;
use crate::node::Node;
use crate::toc::{TableOfContents, TocOptions};
use ratatui::{backend::TestBackend, Terminal};
use std::collections::HashSet;

fn tree() -> Vec<Node> {
    let parent = Node::section(
        "P",
        vec![
            Node::section("S1", vec![]).with_components(vec![Node::leaf("c", "c")]),
            Node::section("S2", vec![]),
        ],
    );
    vec![parent, Node::section("Q", vec![])]
}

#[test]
fn test_tree_prefix() {
    let level = TableOfContents::new(tree(), TocOptions::default())
        .render("", &Location::default(), &UrlAddressBuilder::new("/"))
        .unwrap();
    let rows = rows(&level, &HashSet::new());
    let prefixes: Vec<_> = rows.iter().map(tree_prefix).collect();

    assert_eq!(prefixes, ["", "├── ", "│   └── ", "└── ", ""]);
}

#[test]
fn test_draw_shows_search_and_rows() {
    let mut app = AppState::new(tree(), TocOptions::default(), Location::default());
    app.push_search_char('s');
    app.push_search_char('2');

    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal.draw(|f| draw(f, &app)).unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect();
    assert!(screen.contains("Filter by name"));
    assert!(screen.contains("s2"));
    assert!(screen.contains("S2"));
    assert!(!screen.contains("S1"));
}
