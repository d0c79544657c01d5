//! Syntax: the generic declarative node layer.
//!
//! Documents are loaded with `serde_yaml` into an untyped [`Value`] tree.
//! This module owns the shape checks on that tree (which node must be a
//! mapping, a sequence, or a scalar) so the parser layers above can work
//! with plain Rust values and report [`ErrorKind::InvalidDocument`] with a
//! path-like description of the offending node.
//!
//! [`ErrorKind::InvalidDocument`]: crate::errors::ErrorKind::InvalidDocument

mod document;
mod node;

pub use document::{ComponentDecl, Document};
pub use node::{
    as_mapping, as_sequence, field, literal, name_list, optional_bool, optional_literal,
    optional_string, required_field, scalar_string, single_entry,
};

pub use serde_yaml::{Mapping, Value};
