//! The table of contents: filtering, active-path detection, and open-state derivation.
//!
//! One pass takes the raw section tree, the search term, and a location snapshot, and produces
//! a fresh [`Level`] of annotated nodes. Nothing is cached between passes: every keystroke in
//! the search box and every navigation rebuilds the annotated tree from the raw hierarchy.
//!
//! The pipeline is:
//!
//! ```text
//! sections -> normalize_roots -> filter_by_name(term) -> Annotator::annotate -> Level
//! ```
//!
//! The annotator walks the tree depth-first. Each node learns whether its subtree holds the
//! node the reader is positioned at, and reports upwards whether it or anything beneath it
//! matched, so every ancestor of the active item is forced open.

use crate::address::{AddressBuilder, AddressRequest};
use crate::error::TocError;
use crate::filter::filter_by_name;
use crate::location::{Location, LocationMatcher, RoutingMode};
use crate::node::{Node, NodeKind};
use crate::normalize::normalize_roots;
use serde::Serialize;
use tracing::debug;

/// Hash path segment used for sections without a name.
const ANONYMOUS_SEGMENT: &str = "-";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Rendering options fixed for the lifetime of a table of contents.
pub struct TocOptions {
    /// Address nodes with `#/Section/Item` routes instead of `#slug` anchors.
    pub use_router_links: bool,
    /// Let sections collapse; when false every section renders expanded.
    pub collapsible_sections: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// A node with its children annotated and its display flags derived.
pub struct AnnotatedNode {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Anchor slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Label override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_name: Option<String>,
    /// Explicit link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Whether `href` leaves the documentation.
    pub external: bool,
    /// Section depth as given in the source tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_depth: Option<u32>,
    /// Named and has at least one child.
    pub heading: bool,
    /// Annotated children, sections first; absent for leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Level>,
    /// Must render expanded.
    pub force_open: bool,
    /// Some descendant is the active node.
    pub contains_selected: bool,
    /// This node's own address matches the current location.
    pub selected: bool,
    /// Address computed for this node, if it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl AnnotatedNode {
    #[must_use]
    /// Annotated children, empty for leaves.
    pub fn children(&self) -> &[AnnotatedNode] {
        match &self.content {
            Some(level) => &level.items,
            None => &[],
        }
    }

    #[must_use]
    /// Section when it carries annotated children, else leaf.
    pub fn kind(&self) -> NodeKind {
        match self.content {
            Some(_) => NodeKind::Section,
            None => NodeKind::Leaf,
        }
    }

    #[must_use]
    /// Label for rendering: `visible_name`, else `name`.
    pub fn label(&self) -> Option<&str> {
        self.visible_name
            .as_deref()
            .filter(|label| !label.is_empty())
            .or_else(|| self.name.as_deref().filter(|name| !name.is_empty()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// One list of annotated siblings plus the addressing context they were built in.
pub struct Level {
    /// Siblings in source order.
    pub items: Vec<AnnotatedNode>,
    /// Ancestor names in effect for router addresses at this level.
    pub hash_path: Vec<String>,
    /// Items at this level are addressed by `?id=`.
    pub use_hash_id: bool,
    /// Items at this level use router addresses.
    pub use_router_links: bool,
}

impl Level {
    #[must_use]
    /// Nothing to render.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    /// Total annotated nodes in this level and all nested levels.
    pub fn len(&self) -> usize {
        self.items
            .iter()
            .map(|item| 1 + item.content.as_ref().map_or(0, Level::len))
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of annotating one level.
pub struct Annotation {
    /// The annotated level.
    pub content: Level,
    /// Any node in the level, or beneath it, is the active node.
    pub contains_selected: bool,
}

/// Walks a tree, annotating every node against one location snapshot.
pub struct Annotator<'a, B: AddressBuilder + ?Sized> {
    builder: &'a B,
    matcher: LocationMatcher,
    mode: RoutingMode,
    force_all_open: bool,
}

impl<'a, B: AddressBuilder + ?Sized> Annotator<'a, B> {
    #[must_use]
    /// Annotator for one pass.
    ///
    /// Every node is forced open while a search is active or when sections cannot collapse.
    pub fn new(
        builder: &'a B,
        location: &Location,
        options: TocOptions,
        search_active: bool,
    ) -> Self {
        let mode = RoutingMode::from_router_links(options.use_router_links);
        Self {
            builder,
            matcher: LocationMatcher::new(location, mode),
            mode,
            force_all_open: search_active || !options.collapsible_sections,
        }
    }

    #[must_use]
    /// Annotates the top level of a tree.
    pub fn annotate_roots(&self, nodes: &[Node]) -> Annotation {
        let nodes: Vec<&Node> = nodes.iter().collect();
        self.annotate(&nodes, &[], false)
    }

    #[must_use]
    /// Annotates one level of siblings and everything beneath them.
    pub fn annotate(&self, nodes: &[&Node], hash_path: &[String], use_hash_id: bool) -> Annotation {
        let router = self.mode.is_router();
        let mut level_contains_selected = false;

        let items = nodes
            .iter()
            .map(|node| {
                let kind = node.kind();
                let root_like = node.depth() == 0;

                let (content, contains_selected) = match kind {
                    NodeKind::Leaf => (None, false),
                    NodeKind::Section => {
                        let children: Vec<&Node> = node.children().collect();
                        let child_hash_path = if root_like && use_hash_id {
                            hash_path.to_vec()
                        } else {
                            let mut path = hash_path.to_vec();
                            path.push(node.display_name().unwrap_or(ANONYMOUS_SEGMENT).to_string());
                            path
                        };
                        let annotation = self.annotate(&children, &child_hash_path, root_like);
                        (Some(annotation.content), annotation.contains_selected)
                    }
                };

                let address = self.builder.build(&AddressRequest {
                    name: node.name.as_deref(),
                    slug: node.slug.as_deref(),
                    anchor: !router,
                    hash_path: router.then_some(hash_path),
                    id: router && use_hash_id,
                });
                let selected = self.matcher.matches(address.as_deref());
                level_contains_selected |= contains_selected || selected;

                AnnotatedNode {
                    name: node.name.clone(),
                    slug: node.slug.clone(),
                    visible_name: node.visible_name.clone(),
                    href: node.href.clone(),
                    external: node.external,
                    section_depth: node.section_depth,
                    heading: node.display_name().is_some() && kind == NodeKind::Section,
                    content,
                    force_open: self.force_all_open || contains_selected,
                    contains_selected,
                    selected,
                    address,
                }
            })
            .collect();

        Annotation {
            content: Level {
                items,
                hash_path: hash_path.to_vec(),
                use_hash_id,
                use_router_links: router,
            },
            contains_selected: level_contains_selected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Entry point: a section tree and the options it is rendered with.
pub struct TableOfContents {
    sections: Vec<Node>,
    options: TocOptions,
}

impl TableOfContents {
    #[must_use]
    /// Table of contents over `sections`.
    pub fn new(sections: Vec<Node>, options: TocOptions) -> Self {
        Self { sections, options }
    }

    #[must_use]
    /// The raw, unfiltered tree.
    pub fn sections(&self) -> &[Node] {
        &self.sections
    }

    #[must_use]
    /// Options fixed at construction.
    pub fn options(&self) -> TocOptions {
        self.options
    }

    /// Runs one full pass for the given search term and location.
    ///
    /// # Errors
    ///
    /// Returns an error if the search term cannot be compiled into a filter.
    pub fn render<B: AddressBuilder + ?Sized>(
        &self,
        search_term: &str,
        location: &Location,
        builder: &B,
    ) -> Result<Level, TocError> {
        let roots = normalize_roots(&self.sections);
        let filtered = filter_by_name(roots, search_term)?;
        let annotator = Annotator::new(builder, location, self.options, !search_term.is_empty());
        let annotation = annotator.annotate_roots(&filtered);

        debug!(
            roots = roots.len(),
            visible = annotation.content.len(),
            contains_selected = annotation.contains_selected,
            search_term,
            "rendered table of contents"
        );

        Ok(annotation.content)
    }
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
