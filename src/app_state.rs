//! The coordinator bridging the section tree, the search box, and the list view.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the reader
//! types and navigates. The search term and location live here and nowhere else; every change
//! to either reruns the whole table of contents pass, so the rows on screen are always derived
//! fresh from the raw tree rather than patched in place.

use crate::address::UrlAddressBuilder;
use crate::list::{rows, Row};
use crate::location::Location;
use crate::node::Node;
use crate::toc::{Level, TableOfContents, TocOptions};
use std::collections::HashSet;
use tracing::{debug, warn};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Determines how key presses are interpreted.
pub enum View {
    /// Arrow keys move through the tree.
    List,
    /// Key presses edit the search term.
    Search,
}

/// Session state for one table of contents.
pub struct AppState {
    /// Raw tree and fixed options.
    pub toc: TableOfContents,
    /// Builds the links rows navigate to, rooted at the current page path.
    pub builder: UrlAddressBuilder,
    /// Where the reader currently is.
    pub location: Location,
    /// Current search box contents.
    pub search_term: String,
    /// Row keys the reader opened by hand.
    pub opened: HashSet<String>,
    /// Highlighted row.
    pub current_row_index: usize,
    /// Active input mode.
    pub current_view: View,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    level: Level,
    rows: Vec<Row>,
}

impl AppState {
    #[must_use]
    /// Initialises state and runs the first pass.
    pub fn new(sections: Vec<Node>, options: TocOptions, location: Location) -> Self {
        let builder = UrlAddressBuilder::new(location.pathname.clone());
        let mut state = Self {
            toc: TableOfContents::new(sections, options),
            builder,
            location,
            search_term: String::new(),
            opened: HashSet::new(),
            current_row_index: 0,
            current_view: View::List,
            message: None,
            level: Level::default(),
            rows: Vec::new(),
        };
        state.refresh();
        state.select_active_row();
        state
    }

    /// Reruns the pass from the current search term and location.
    ///
    /// Links are rebuilt against the current page path. A search term that cannot be compiled
    /// leaves the previous rows in place and reports the problem in the status bar.
    pub fn refresh(&mut self) {
        self.builder.pathname.clone_from(&self.location.pathname);
        match self
            .toc
            .render(&self.search_term, &self.location, &self.builder)
        {
            Ok(level) => {
                self.level = level;
                self.message = None;
            }
            Err(e) => {
                warn!(error = %e, "keeping previous table of contents");
                self.message = Some(e.to_string());
            }
        }
        self.rebuild_rows();
    }

    fn rebuild_rows(&mut self) {
        self.rows = rows(&self.level, &self.opened);
        self.current_row_index = self
            .current_row_index
            .min(self.rows.len().saturating_sub(1));
    }

    #[must_use]
    /// Annotated tree from the latest pass.
    pub fn contents(&self) -> &Level {
        &self.level
    }

    #[must_use]
    /// Visible rows from the latest pass.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    /// Highlighted row, if any rows are visible.
    pub fn current_row(&self) -> Option<&Row> {
        self.rows.get(self.current_row_index)
    }

    /// Moves the highlight to the row the reader is positioned at, if visible.
    pub fn select_active_row(&mut self) {
        if let Some(idx) = self.rows.iter().rposition(|row| row.selected) {
            self.current_row_index = idx;
        }
    }

    /// Appends to the search term.
    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
        self.current_row_index = 0;
        self.refresh();
    }

    /// Removes the last character of the search term.
    pub fn pop_search_char(&mut self) {
        if self.search_term.pop().is_some() {
            self.refresh();
        }
    }

    /// Empties the search term.
    pub fn clear_search(&mut self) {
        if !self.search_term.is_empty() {
            self.search_term.clear();
            self.refresh();
            self.select_active_row();
        }
    }

    /// Highlights the previous row.
    pub fn cursor_up(&mut self) {
        self.current_row_index = self.current_row_index.saturating_sub(1);
    }

    /// Highlights the next row.
    pub fn cursor_down(&mut self) {
        if self.current_row_index + 1 < self.rows.len() {
            self.current_row_index += 1;
        }
    }

    /// Highlights the first row.
    pub fn cursor_first(&mut self) {
        self.current_row_index = 0;
    }

    /// Highlights the last row.
    pub fn cursor_last(&mut self) {
        self.current_row_index = self.rows.len().saturating_sub(1);
    }

    /// Opens or closes the highlighted section.
    ///
    /// Forced-open sections stay open; the toggle is remembered for when the force lifts.
    pub fn toggle_current(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        if !row.expandable {
            return;
        }
        let key = row.key.clone();
        if !self.opened.remove(&key) {
            self.opened.insert(key);
        }
        self.rebuild_rows();
    }

    /// Closes the highlighted section, or moves to its parent when it is already closed.
    pub fn collapse_current(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        if row.expandable && self.opened.contains(&row.key) {
            let key = row.key.clone();
            self.opened.remove(&key);
            self.rebuild_rows();
        } else if let Some(parent) = self.parent_row_index() {
            self.current_row_index = parent;
        }
    }

    #[must_use]
    /// Index of the row enclosing the highlighted one.
    pub fn parent_row_index(&self) -> Option<usize> {
        let depth = self.current_row()?.depth;
        if depth == 0 {
            return None;
        }
        self.rows[..self.current_row_index]
            .iter()
            .rposition(|row| row.depth < depth)
    }

    /// Follows the highlighted row's link, moving the reader there.
    ///
    /// External links are not followed; their target is shown in the status bar instead.
    pub fn navigate_current(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        let Some(link) = row.link.clone() else {
            self.message = Some(format!("{} has no link", row.label));
            return;
        };
        if row.external {
            self.message = Some(format!("External link: {link}"));
            return;
        }
        let key = row.key.clone();

        self.location = Location::from_link(&link, &self.location.pathname);
        debug!(pathname = %self.location.pathname, hash = %self.location.hash, "navigated");
        self.refresh();
        if let Some(idx) = self.rows.iter().position(|row| row.key == key) {
            self.current_row_index = idx;
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
