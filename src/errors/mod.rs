//! Compilation error handling module
//!
//! Every failure of the compiler surfaces as a single [`ParseError`]:
//! - A categorized [`ErrorKind`] tag with a stable diagnostic code
//! - A human-readable message naming the offending declaration
//! - The component being processed, when one is known
//!
//! There is no partial result: the first violation aborts compilation.

mod error;
mod kind;

pub use error::{ParseError, ParseResult};
pub use kind::ErrorKind;
