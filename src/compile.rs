//! Compilation driver: text → validated [`Ir`].

use tracing::{debug, info};

use crate::base::ParseOptions;
use crate::errors::{ErrorKind, ParseError, ParseResult};
use crate::model::Ir;
use crate::semantic::{BuiltComponent, build_component, validate_references};
use crate::syntax::Document;

/// Compile a document with default options.
///
/// # Example
///
/// ```
/// let ir = service_components::parse(
///     r#"
/// components:
///   - Lamp:
///       events: [Toggle]
///       statemachine:
///         states: [Dark, Lit]
///         start: Dark
///         transitions:
///           - {state: Dark, next: Lit, event: Toggle}
///           - {state: Lit, next: Dark, event: Toggle}
/// "#,
/// )
/// .unwrap();
///
/// assert_eq!(ir.get("Lamp").unwrap().statemachine.transitions.len(), 2);
/// ```
pub fn parse(text: &str) -> ParseResult<Ir> {
    parse_with(text, &ParseOptions::default())
}

/// Compile a document.
///
/// Components are built one at a time in declaration order, then all
/// cross-component references are validated against the complete result.
/// Nothing is returned unless the whole document is valid.
pub fn parse_with(text: &str, options: &ParseOptions) -> ParseResult<Ir> {
    let document = Document::load(text)?;
    let mut ir = Ir::new();

    for (name, decl) in document.components(&options.root_key)? {
        if options.is_reserved(&name) {
            info!(component = %name, "ignoring reserved component");
            continue;
        }
        if ir.contains(&name) {
            return Err(ParseError::new(
                ErrorKind::DuplicateComponent,
                format!("component {name} is declared more than once"),
            )
            .in_component(name));
        }

        debug!(component = %name, "parsing component");
        match build_component(&name, &decl, &ir).map_err(|e| e.in_component(&name))? {
            BuiltComponent::Defined(component) => ir.insert(name, component),
            BuiltComponent::Alias(target) => {
                if !ir.insert_alias(name.as_str(), &target) {
                    return Err(ParseError::new(
                        ErrorKind::UnknownUsedComponent,
                        format!("unknown component {target} used in component {name}"),
                    )
                    .in_component(name));
                }
            }
        }
    }

    validate_references(&ir)?;
    info!(components = ir.len(), "compiled service components");
    Ok(ir)
}
