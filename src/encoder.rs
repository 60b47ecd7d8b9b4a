//! Type-reference rendering.
//!
//! Renders one `TypeReference` in a requested grammar. Recursion is
//! post-order on the wrapper chain: the wrapped element renders first, then
//! the wrapper marker, so stacked wrappers concatenate their markers in
//! application order (`int*[]` is `System.Int32*[]` / `System.Int32~$`,
//! never the other way around).

use std::fmt::Write as _;

use crate::error::Error;
use crate::grammar::Grammar;
use crate::model::{Parameter, TypeReference};

/// The generic-parameter index spaces visible to one symbol's signature.
/// The two spaces are disjoint by construction — a reference names one or
/// the other explicitly, never a combined counter.
#[derive(Debug, Clone, Copy)]
pub struct GenericScope<'a> {
    /// Size of the enclosing space: generic parameters introduced by the
    /// declaring-type chain, concatenated outermost first.
    pub enclosing: usize,
    /// Size of the own space: generic parameters the member introduced.
    pub own: usize,
    /// Raw name of the symbol being rendered, for error context.
    pub symbol: &'a str,
}

/// Render one type reference into `out`.
///
/// # Errors
///
/// Returns `Error::GenericParameterOutOfRange` when a parameter reference
/// exceeds its declared scope.
pub fn encode(
    grammar: Grammar,
    scope: GenericScope<'_>,
    reference: &TypeReference,
    out: &mut String,
) -> Result<(), Error> {
    match reference {
        TypeReference::Array { element, explicit_lower_bounds, rank } => {
            encode(grammar, scope, element, out)?;
            if *rank == 1 && !explicit_lower_bounds {
                out.push_str(grammar.simple_array_suffix());
            } else {
                out.push_str(grammar.bounded_array_open());
                for dimension in 0..*rank {
                    if dimension > 0 {
                        out.push(',');
                    }
                    out.push_str(grammar.array_bound_token());
                }
                out.push_str(grammar.bounded_array_close());
            }
        },
        TypeReference::DeclaringTypeGenericParameter { index } => {
            if *index >= scope.enclosing {
                return Err(Error::GenericParameterOutOfRange {
                    available: scope.enclosing,
                    index: *index,
                    scope: "declaring-type",
                    symbol: scope.symbol.to_string(),
                });
            }
            out.push_str(grammar.enclosing_parameter_marker());
            let _ = write!(out, "{index}");
        },
        TypeReference::GenericInstantiation { arguments, definition } => {
            encode(grammar, scope, definition, out)?;
            out.push(grammar.generic_open());
            for (position, argument) in arguments.iter().enumerate() {
                if position > 0 {
                    out.push(',');
                }
                encode(grammar, scope, argument, out)?;
            }
            out.push(grammar.generic_close());
        },
        TypeReference::OwnGenericParameter { index } => {
            if *index >= scope.own {
                return Err(Error::GenericParameterOutOfRange {
                    available: scope.own,
                    index: *index,
                    scope: "own",
                    symbol: scope.symbol.to_string(),
                });
            }
            out.push_str(grammar.own_parameter_marker());
            let _ = write!(out, "{index}");
        },
        TypeReference::Pointer { pointee } => {
            encode(grammar, scope, pointee, out)?;
            out.push(grammar.pointer_suffix());
        },
        TypeReference::Primitive { name } => {
            out.push_str(&grammar.segment_text(name));
        },
    }
    Ok(())
}

/// Render one parameter: its type, then the by-reference suffix when the
/// passing mode calls for one.
///
/// # Errors
///
/// Propagates encoding errors from the parameter's type.
pub fn encode_parameter(
    grammar: Grammar,
    scope: GenericScope<'_>,
    parameter: &Parameter,
    out: &mut String,
) -> Result<(), Error> {
    encode(grammar, scope, &parameter.type_reference, out)?;
    if parameter.passing.is_by_reference() {
        out.push(grammar.by_reference_suffix());
    }
    Ok(())
}
