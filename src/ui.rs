//! The UI renders the application state into something visible and searchable.
//!
//! The screen is a search box above the table of contents, drawn as a tree with box-drawing
//! characters, and a help bar that doubles as the status line.

use crate::app_state::{AppState, View};
use crate::list::Row;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Renders the search box, tree, and help bar.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Min(0),    // Tree
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    draw_search(f, app, chunks[0]);
    draw_tree(f, app, chunks[1]);
    draw_help(f, app, chunks[2]);
}

fn draw_search(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let style = if app.current_view == View::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let text = if app.current_view == View::Search {
        format!("{}_", app.search_term)
    } else {
        app.search_term.clone()
    };
    let search = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Filter by name"));
    f.render_widget(search, area);
}

/// Generate box-drawing prefix for tree structure
#[must_use]
pub fn tree_prefix(row: &Row) -> String {
    if row.depth == 0 {
        return String::new();
    }

    let mut prefix = String::new();

    // Vertical lines for ancestors that still have siblings below
    for &more in row.continuation.iter().skip(1) {
        if more {
            prefix.push_str("│   ");
        } else {
            prefix.push_str("    ");
        }
    }

    if row.is_last {
        prefix.push_str("└── ");
    } else {
        prefix.push_str("├── ");
    }

    prefix
}

fn marker(row: &Row) -> &'static str {
    match (row.expandable, row.open) {
        (false, _) => "  ",
        (true, true) => "▾ ",
        (true, false) => "▸ ",
    }
}

fn row_style(row: &Row) -> Style {
    let style = if row.selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if row.on_path {
        Style::default().fg(Color::Cyan)
    } else if row.external {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    };
    if row.heading {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn draw_tree(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = app
        .rows()
        .iter()
        .map(|row| {
            let mut spans = vec![
                Span::raw(tree_prefix(row)),
                Span::raw(marker(row)),
                Span::styled(row.label.clone(), row_style(row)),
            ];
            if row.external {
                spans.push(Span::styled(" ↗", Style::default().fg(Color::DarkGray)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = if app.rows().is_empty() && !app.search_term.is_empty() {
        "Contents (no matches)".to_string()
    } else {
        format!("Contents ({})", app.location.hash)
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !app.rows().is_empty() {
        state.select(Some(app.current_row_index));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_help(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let help = if let Some(ref msg) = app.message {
        msg.clone()
    } else if app.current_view == View::Search {
        "Type to filter | Backspace: Delete | Ctrl+U: Clear | Enter/Esc: Back to tree".to_string()
    } else {
        "↑/↓: Navigate | Space/→: Open/Close | ←: Collapse | Enter: Go | /: Search | q: Quit"
            .to_string()
    };

    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
