//! Flattening an annotated tree into the rows a list view paints.
//!
//! Items without a label are skipped, and an item's children are only listed while it is open:
//! either forced open by the annotator or opened by the reader.

use crate::node::NodeKind;
use crate::toc::{AnnotatedNode, Level};
use std::collections::{HashMap, HashSet};

/// Separator between labels in a row key.
const KEY_SEPARATOR: char = '/';

/// Marks the occurrence number of a label repeated among its siblings.
const DUPLICATE_MARKER: char = '#';

#[derive(Clone, Debug, PartialEq, Eq)]
/// One visible line of the table of contents.
pub struct Row {
    /// Label path from the root, used to remember open state across passes.
    ///
    /// A label repeated among its siblings carries its occurrence number (`Api#1`) after the
    /// first, so same-named sections open and close independently.
    pub key: String,
    /// Text shown for the item.
    pub label: String,
    /// Where activating the row navigates to.
    pub link: Option<String>,
    /// Nesting depth, 0 for roots.
    pub depth: usize,
    /// For each enclosing depth, whether more siblings follow the ancestor at that depth.
    pub continuation: Vec<bool>,
    /// Last visible sibling at its depth.
    pub is_last: bool,
    /// Section heading.
    pub heading: bool,
    /// Has children that can be shown or hidden.
    pub expandable: bool,
    /// Children are currently listed.
    pub open: bool,
    /// Open regardless of reader toggles.
    pub forced: bool,
    /// The reader is positioned at this item.
    pub selected: bool,
    /// The reader is positioned somewhere beneath this item.
    pub on_path: bool,
    /// The link leaves the documentation.
    pub external: bool,
}

#[must_use]
/// Visible rows of `level`, depth-first, honouring the reader's `open` set.
pub fn rows(level: &Level, open: &HashSet<String>) -> Vec<Row> {
    let mut out = Vec::new();
    push_level(level, open, "", &mut Vec::new(), &mut out);
    out
}

fn push_level(
    level: &Level,
    open: &HashSet<String>,
    parent_key: &str,
    continuation: &mut Vec<bool>,
    out: &mut Vec<Row>,
) {
    let visible: Vec<(&AnnotatedNode, &str)> = level
        .items
        .iter()
        .filter_map(|item| item.label().map(|label| (item, label)))
        .collect();
    let count = visible.len();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (i, (item, label)) in visible.into_iter().enumerate() {
        let occurrence = seen.entry(label).or_default();
        let segment = match *occurrence {
            0 => label.to_string(),
            n => format!("{label}{DUPLICATE_MARKER}{n}"),
        };
        *occurrence += 1;
        let key = if parent_key.is_empty() {
            segment
        } else {
            format!("{parent_key}{KEY_SEPARATOR}{segment}")
        };
        let is_last = i + 1 == count;
        let expandable = item.kind() == NodeKind::Section;
        let is_open = expandable && (item.force_open || open.contains(&key));

        out.push(Row {
            key: key.clone(),
            label: label.to_string(),
            link: item.href.clone().or_else(|| item.address.clone()),
            depth: continuation.len(),
            continuation: continuation.clone(),
            is_last,
            heading: item.heading,
            expandable,
            open: is_open,
            forced: item.force_open,
            selected: item.selected,
            on_path: item.contains_selected,
            external: item.external,
        });

        if is_open {
            if let Some(content) = &item.content {
                continuation.push(!is_last);
                push_level(content, open, &key, continuation, out);
                continuation.pop();
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/list.rs"]
mod tests;
