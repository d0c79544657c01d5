//! Primitive type token resolution.

use unicode_ident::{is_xid_continue, is_xid_start};

use crate::errors::{ErrorKind, ParseError, ParseResult};
use crate::model::{PrimitiveType, TypeDeclaration};

fn invalid(token: &str, reason: &str) -> ParseError {
    ParseError::new(
        ErrorKind::InvalidTypeDeclaration,
        format!("invalid property type declaration '{token}': {reason}"),
    )
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || is_xid_start(c))
        && chars.all(is_xid_continue)
}

/// Resolve `name` or `name[cardinality]` into a [`TypeDeclaration`].
///
/// The name is matched case-insensitively against the primitive types;
/// cardinality defaults to 1 and must be a positive decimal literal.
pub fn resolve_type(token: &str) -> ParseResult<TypeDeclaration> {
    let trimmed = token.trim();

    let (name, cardinality) = match trimmed.split_once('[') {
        None => (trimmed, 1),
        Some((name, rest)) => {
            let digits = rest
                .strip_suffix(']')
                .ok_or_else(|| invalid(token, "unterminated '['"))?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(token, "cardinality must be a decimal number"));
            }
            let cardinality: u32 = digits
                .parse()
                .map_err(|_| invalid(token, "cardinality out of range"))?;
            if cardinality == 0 {
                return Err(invalid(token, "cardinality must be at least 1"));
            }
            (name.trim_end(), cardinality)
        }
    };

    if !is_identifier(name) {
        return Err(invalid(token, "expected a type name"));
    }
    let ty = PrimitiveType::from_name(name).ok_or_else(|| invalid(token, "unknown type"))?;
    Ok(TypeDeclaration::new(ty, cardinality))
}
