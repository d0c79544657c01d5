//! End-to-end compilation tests
//!
//! Tests for `parse(text)`:
//! - Full documents with subscriptions, properties and aliases
//! - State machine expansion and duplicate detection
//! - Cross-component reference validation
//! - Read-only IR queries used by emitters

pub mod tests_document;
pub mod tests_ir;
pub mod tests_references;
