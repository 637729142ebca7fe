//! Root normalisation for single-section trees.
//!
//! A tree with exactly one top-level section would otherwise render that section as an extra,
//! indented wrapper around everything. Its children become the roots instead: subsections when
//! it has any, its leaf items otherwise.

use crate::node::Node;

#[must_use]
/// Lifts the children of a lone root section to the top level.
pub fn normalize_roots(sections: &[Node]) -> &[Node] {
    match sections {
        [root] if !root.sections.is_empty() => &root.sections,
        [root] => &root.components,
        _ => sections,
    }
}

#[cfg(test)]
#[path = "tests/normalize.rs"]
mod tests;
