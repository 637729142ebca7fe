//! Current-location snapshots and prefix matching against node addresses.
//!
//! A navigation pass reads the location once and shares the resulting effective string with
//! every node in the walk, so the whole tree is judged against one consistent position.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// How node addresses encode the position within the documentation.
pub enum RoutingMode {
    /// `#slug` anchors on a single page.
    #[default]
    Anchor,
    /// `#/Section/Item` routes, one page per section.
    Router,
}

impl RoutingMode {
    #[must_use]
    /// Router mode when `use_router_links` is set.
    pub fn from_router_links(use_router_links: bool) -> Self {
        if use_router_links {
            Self::Router
        } else {
            Self::Anchor
        }
    }

    #[must_use]
    /// Whether addresses are router-style.
    pub fn is_router(self) -> bool {
        self == Self::Router
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Read-only snapshot of where the reader currently is.
pub struct Location {
    /// Path portion, e.g. `/docs/`.
    pub pathname: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            pathname: "/".to_string(),
            hash: String::new(),
        }
    }
}

impl Location {
    #[must_use]
    /// Snapshot from a path and fragment.
    pub fn new(pathname: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            hash: hash.into(),
        }
    }

    #[must_use]
    /// Splits a link into pathname and fragment, keeping `base` when the link is fragment-only.
    pub fn from_link(link: &str, base: &str) -> Self {
        match link.find('#') {
            Some(0) => Self::new(base, link),
            Some(idx) => Self::new(&link[..idx], &link[idx..]),
            None => Self::new(link, ""),
        }
    }

    #[must_use]
    /// Comparable location string for the given routing mode.
    ///
    /// Router addresses are percent-encoded, so router mode keeps the hash as-is. Anchor mode
    /// drops any `?query` suffix and decodes the rest.
    pub fn effective(&self, mode: RoutingMode) -> String {
        match mode {
            RoutingMode::Router => format!("{}{}", self.pathname, self.hash),
            RoutingMode::Anchor => format!("{}{}", self.pathname, normalize_hash(&self.hash)),
        }
    }
}

#[must_use]
/// Fragment without its query suffix, percent-decoded.
pub fn normalize_hash(hash: &str) -> String {
    let fragment = hash.split_once('?').map_or(hash, |(head, _)| head);
    percent_decode_str(fragment).decode_utf8_lossy().into_owned()
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Effective location string computed once per pass.
pub struct LocationMatcher {
    effective: String,
}

impl LocationMatcher {
    #[must_use]
    /// Hoists the effective location for one pass over the tree.
    pub fn new(location: &Location, mode: RoutingMode) -> Self {
        Self {
            effective: location.effective(mode),
        }
    }

    #[must_use]
    /// The string addresses are compared against.
    pub fn effective(&self) -> &str {
        &self.effective
    }

    #[must_use]
    /// True when the reader is at `address` or somewhere beneath it.
    pub fn matches(&self, address: Option<&str>) -> bool {
        address.is_some_and(|address| self.effective.starts_with(address))
    }
}

#[cfg(test)]
#[path = "tests/location.rs"]
mod tests;
