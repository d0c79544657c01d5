//! Compilation settings.

use super::constants::{RESERVED_MARKER, ROOT_KEY};

/// Settings for a single compilation.
///
/// The defaults match the document format: components are listed under
/// `components:` and names starting with `_` are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Components whose name starts with this marker are not compiled.
    pub reserved_marker: Option<char>,
    /// Top-level key listing component declarations.
    pub root_key: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            reserved_marker: Some(RESERVED_MARKER),
            root_key: ROOT_KEY.to_string(),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reserved marker, or disable skipping with `None`.
    pub fn with_reserved_marker(mut self, marker: Option<char>) -> Self {
        self.reserved_marker = marker;
        self
    }

    /// Set the top-level key listing component declarations.
    pub fn with_root_key(mut self, key: impl Into<String>) -> Self {
        self.root_key = key.into();
        self
    }

    /// Returns true if a component with this name should be skipped.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_marker
            .is_some_and(|marker| name.starts_with(marker))
    }
}
