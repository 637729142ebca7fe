//! Fuzzy name filtering over section trees.
//!
//! The search term is reduced to its alphanumeric characters and matched as an in-order,
//! case-insensitive subsequence, so `"btnprim"` finds `"ButtonPrimary"`. Sections survive when
//! their own name matches or any descendant does, and always carry their pruned children.

use crate::node::{Node, NodeKind};
use regex::{Regex, RegexBuilder};

#[derive(Clone, Debug)]
/// Compiled search term.
pub struct NameFilter {
    pattern: Regex,
}

impl NameFilter {
    /// Compiles `term` into a fuzzy pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern exceeds the regex size limits (very long terms).
    pub fn new(term: &str) -> Result<Self, regex::Error> {
        let pattern = term
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(String::from)
            .collect::<Vec<_>>()
            .join(".*");
        let pattern = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }

    #[must_use]
    /// Whether a node name satisfies the term.
    ///
    /// A term without alphanumerics accepts every node, named or not.
    pub fn is_match(&self, name: Option<&str>) -> bool {
        if self.pattern.as_str().is_empty() {
            return true;
        }
        name.is_some_and(|name| self.pattern.is_match(name))
    }

    #[must_use]
    /// Prunes `nodes` to the matches and the sections leading to them.
    pub fn apply(&self, nodes: &[Node]) -> Vec<Node> {
        nodes.iter().filter_map(|node| self.prune(node)).collect()
    }

    fn prune(&self, node: &Node) -> Option<Node> {
        if node.kind() == NodeKind::Leaf {
            return self.is_match(node.name.as_deref()).then(|| node.clone());
        }

        let sections = self.apply(&node.sections);
        let components: Vec<Node> = node
            .components
            .iter()
            .filter(|component| self.is_match(component.name.as_deref()))
            .cloned()
            .collect();

        let keep =
            !sections.is_empty() || !components.is_empty() || self.is_match(node.name.as_deref());
        keep.then(|| Node {
            name: node.name.clone(),
            slug: node.slug.clone(),
            visible_name: node.visible_name.clone(),
            href: node.href.clone(),
            external: node.external,
            section_depth: node.section_depth,
            sections,
            components,
        })
    }
}

/// Filters `nodes` by `term`, returning them untouched when the term is empty.
///
/// # Errors
///
/// Returns an error if the term cannot be compiled into a pattern.
pub fn filter_by_name(nodes: &[Node], term: &str) -> Result<Vec<Node>, regex::Error> {
    if term.is_empty() {
        return Ok(nodes.to_vec());
    }
    Ok(NameFilter::new(term)?.apply(nodes))
}

#[cfg(test)]
#[path = "tests/filter.rs"]
mod tests;
