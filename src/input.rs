//! Reading section trees from JSON.

use crate::error::TocError;
use crate::node::Node;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads a section tree from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a node or list of nodes.
pub fn read_sections(path: &Path) -> Result<Vec<Node>, TocError> {
    let contents = fs::read_to_string(path)?;
    parse_sections(&contents)
}

/// Parses a JSON array of nodes, or a single node wrapped into a one-element list.
///
/// # Errors
///
/// Returns an error if the text is not JSON or has the wrong shape.
pub fn parse_sections(json: &str) -> Result<Vec<Node>, TocError> {
    match serde_json::from_str::<Value>(json)? {
        value @ Value::Array(_) => Ok(serde_json::from_value(value)?),
        value @ Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        other => Err(TocError::InvalidTree(format!(
            "expected a node or list of nodes, found {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
