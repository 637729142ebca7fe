//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a toctree.toml, and if present we load settings from there.
//! This provides the routing style, whether sections collapse, and the page path links start
//! from. Command line flags take precedence over all of these.

use crate::error::TocError;
use crate::toc::TocOptions;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "toctree.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// Preferences loaded from toctree.toml or falling back to defaults.
pub struct Config {
    #[facet(default = false)]
    /// Address items as `#/Section/Item` routes rather than `#slug` anchors.
    pub use_router_links: bool,
    #[facet(default = true)]
    /// Collapse sections that do not lead to the current item.
    pub collapsible_sections: bool,
    #[facet(default = "/".to_string())]
    /// Page path that links are built from.
    pub pathname: String,
}

impl Default for Config {
    /// The `#[facet(default)]` values, as parsed from an empty file.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    fn default() -> Self {
        facet_toml::from_str::<Self>("").unwrap()
    }
}

impl Config {
    #[must_use]
    /// Load configuration from toctree.toml if present, else the defaults.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring {CONFIG_FILE}");
            Self::default()
        })
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load_from(path: &Path) -> Result<Self, TocError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn parse(contents: &str) -> Result<Self, TocError> {
        facet_toml::from_str::<Self>(contents).map_err(|e| TocError::Config(e.to_string()))
    }

    #[must_use]
    /// Table of contents options carried by this configuration.
    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            use_router_links: self.use_router_links,
            collapsible_sections: self.collapsible_sections,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
