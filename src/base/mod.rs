//! Foundation types for the service component compiler.
//!
//! This module provides the fixed vocabulary shared by every layer:
//! - [`constants`] - Separator, reserved marker, accessor prefixes, field keys
//! - [`ParseOptions`] - Caller-tunable compilation settings
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod options;

pub use options::ParseOptions;
