//! Node representation for documentation section trees.
//!
//! A node is either a section, which groups further sections and documented items, or a leaf
//! item (a "component") with no children of its own. Both shapes share the same fields so that
//! a serialised tree reads the same way at every depth; the distinction is derived from which
//! child collections are populated.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether a node branches or terminates the tree.
pub enum NodeKind {
    /// Has at least one child section or item.
    Section,
    /// Has no children.
    Leaf,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A section or documented item in the navigation tree.
pub struct Node {
    /// Display name, absent for anonymous wrappers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Stable identifier used to build anchor addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Label shown in place of `name` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_name: Option<String>,
    /// Explicit link, overriding the computed address when rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Whether `href` leaves the documentation.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
    /// Nesting depth of the section; 0 (or absent) makes its children address roots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_depth: Option<u32>,
    /// Child sections, listed before `components`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Node>,
    /// Child leaf items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Node>,
}

impl Node {
    #[must_use]
    /// Leaf item with a name and slug.
    pub fn leaf(name: &str, slug: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            slug: Some(slug.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    /// Named section holding the given subsections.
    pub fn section(name: &str, sections: Vec<Node>) -> Self {
        Self {
            name: Some(name.to_string()),
            slug: Some(slugify(name)),
            sections,
            ..Self::default()
        }
    }

    #[must_use]
    /// Replaces the leaf items of this node.
    pub fn with_components(mut self, components: Vec<Node>) -> Self {
        self.components = components;
        self
    }

    #[must_use]
    /// Sets the section depth of this node.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.section_depth = Some(depth);
        self
    }

    #[must_use]
    /// Section or leaf, judged by child collections.
    pub fn kind(&self) -> NodeKind {
        if self.child_count() > 0 {
            NodeKind::Section
        } else {
            NodeKind::Leaf
        }
    }

    #[must_use]
    /// Number of direct children across both collections.
    pub fn child_count(&self) -> usize {
        self.sections.len() + self.components.len()
    }

    /// Direct children, sections first.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.sections.iter().chain(&self.components)
    }

    #[must_use]
    /// Name if present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    #[must_use]
    /// Label for rendering: `visible_name`, else `name`.
    pub fn label(&self) -> Option<&str> {
        self.visible_name
            .as_deref()
            .filter(|label| !label.is_empty())
            .or_else(|| self.display_name())
    }

    #[must_use]
    /// Section depth with the absent value read as 0.
    pub fn depth(&self) -> u32 {
        self.section_depth.unwrap_or(0)
    }
}

/// Lower-cased, hyphen-joined slug for a section name.
fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
#[path = "tests/node.rs"]
mod tests;
