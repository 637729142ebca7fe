//! toctree: searchable, collapsible tables of contents over documentation section trees.
//!
//! The heart of the crate is [`toc::TableOfContents::render`], a pure pass from a raw section
//! tree, a search term, and a location snapshot to an annotated tree in which every section
//! knows whether it leads to the reader's current position and whether it must render open.
//! The remaining modules supply what that pass needs at its edges: addresses, location
//! matching, name filtering, and the list view and TUI that drive it interactively.

pub mod address;
pub mod app_state;
pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod list;
pub mod location;
pub mod node;
pub mod normalize;
pub mod toc;
pub mod ui;

pub use address::{AddressBuilder, AddressRequest, UrlAddressBuilder};
pub use error::TocError;
pub use location::{Location, RoutingMode};
pub use node::{Node, NodeKind};
pub use toc::{AnnotatedNode, Level, TableOfContents, TocOptions};
