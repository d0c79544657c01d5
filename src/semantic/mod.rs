//! # Semantic Analysis
//!
//! Turns decoded declarations into the validated [`Ir`](crate::model::Ir)
//! in two phases:
//!
//! ```text
//! phase 1: build_component(name, decl, prior)   ← per component, in order
//!            └─ build_statemachine(...)         ← wildcard expansion, duplicates
//!     │      (`using` may only name prior components)
//!     ▼
//! phase 2: validate_references(ir)              ← whole document
//!            (notification references may point forward)
//! ```

mod component;
mod statemachine;
mod validate;

pub use component::{BuiltComponent, build_component};
pub use statemachine::build_statemachine;
pub use validate::validate_references;
