//! Address construction for navigation links.
//!
//! The table of contents never assembles link strings itself: it describes what it needs in an
//! [`AddressRequest`] and hands that to an [`AddressBuilder`]. Any builder works as long as the
//! addresses it produces are prefixes of the locations [`crate::location::Location::effective`]
//! yields for the pages they point at.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in name and hash path segments; the unreserved marks stay readable.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Everything a builder may use to address one node.
pub struct AddressRequest<'a> {
    /// Node name.
    pub name: Option<&'a str>,
    /// Node slug.
    pub slug: Option<&'a str>,
    /// Build a `#slug` anchor.
    pub anchor: bool,
    /// Ancestor names for router-style addresses.
    pub hash_path: Option<&'a [String]>,
    /// Address the node as `?id=name` under its hash path instead of as a path segment.
    pub id: bool,
}

/// Produces addresses comparable with the current location.
pub trait AddressBuilder {
    /// Address for the request, or `None` when the node cannot be addressed.
    fn build(&self, request: &AddressRequest<'_>) -> Option<String>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Builds `pathname#slug` and `pathname#/A/B?id=C` style links.
pub struct UrlAddressBuilder {
    /// Page path every link starts from.
    pub pathname: String,
}

impl UrlAddressBuilder {
    #[must_use]
    /// Builder rooted at `pathname`.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }
}

impl AddressBuilder for UrlAddressBuilder {
    fn build(&self, request: &AddressRequest<'_>) -> Option<String> {
        let mut url = self.pathname.clone();

        if request.anchor {
            url.push('#');
            url.push_str(request.slug?);
        }

        if let Some(hash_path) = request.hash_path {
            let mut segments: Vec<String> = hash_path.iter().map(String::as_str).map(encode).collect();
            if !request.id {
                segments.push(encode(request.name?));
            }
            url.push_str("#/");
            url.push_str(&segments.join("/"));
        }

        if request.id {
            url.push_str("?id=");
            url.push_str(&encode(request.name?));
        }

        Some(url)
    }
}

#[must_use]
/// Percent-encodes a single path segment or query value.
pub fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

#[cfg(test)]
#[path = "tests/address.rs"]
mod tests;
