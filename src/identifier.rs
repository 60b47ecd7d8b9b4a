//! Identifier assembly: the four identifier strings per symbol.
//!
//! Combines the qualified path, kind prefix, member name, own-arity suffix,
//! parameter encodings, and conversion-return suffix into the final
//! cross-reference and path-style identifiers plus their overload-group
//! variants. Every derivation is a pure function of the symbol graph and
//! is byte-stable across runs.

use std::fmt::Write as _;

use serde::Serialize;

use crate::encoder::{self, GenericScope};
use crate::error::Error;
use crate::friendly::{self, FriendlyName};
use crate::grammar::Grammar;
use crate::model::{Symbol, SymbolGraph, SymbolId, SymbolKind};
use crate::qualified::{self, QualifiedName};

/// Everything the documentation pipeline consumes for one symbol.
///
/// The cross-reference id is the exact key used to look up the symbol's
/// free-text documentation; the path-style id is safe as a URL path
/// segment without further escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolIdentifiers {
    /// Exact-lookup identifier, e.g. `M:SampleClass.SampleMethod(System.Int32)`.
    pub cross_reference_id: String,
    /// URL-safe identifier, e.g. `SampleClass/SampleMethod(System.Int32)`.
    pub path_style_id: String,
    /// Cross-reference identifier shared by all overloads of this member.
    pub overload_cross_reference_id: String,
    /// Path-style identifier shared by all overloads of this member.
    pub overload_path_style_id: String,
    /// Display name at member, partial, and full qualification.
    pub friendly_name: FriendlyName,
    /// Display name of the overload group (own generic placeholders dropped).
    pub overload_friendly_name: FriendlyName,
}

/// Which identifier variant is being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    /// The full identifier: arity, parameter list, conversion suffix.
    Exact,
    /// The overload-group identifier: all of the above stripped.
    OverloadGroup,
}

/// Derive all identifiers and friendly names for one symbol.
///
/// Fails atomically: either every field is produced or the symbol is
/// reported malformed. A failure never affects other symbols in the graph.
///
/// # Errors
///
/// Returns malformed-graph errors from chain resolution, name parsing, or
/// type-reference encoding.
pub fn derive(graph: &SymbolGraph, id: SymbolId) -> Result<SymbolIdentifiers, Error> {
    let symbol = graph.symbol(id).ok_or(Error::SymbolOutOfBounds {
        index: id.0,
        symbol_count: graph.symbols.len(),
    })?;
    let qualified = qualified::resolve(graph, id)?;

    let cross_reference_id = assemble(Grammar::CrossReference, symbol, &qualified, Variant::Exact)?;
    let path_style_id = assemble(Grammar::PathStyle, symbol, &qualified, Variant::Exact)?;
    let overload_cross_reference_id =
        assemble(Grammar::CrossReference, symbol, &qualified, Variant::OverloadGroup)?;
    let overload_path_style_id =
        assemble(Grammar::PathStyle, symbol, &qualified, Variant::OverloadGroup)?;

    Ok(SymbolIdentifiers {
        cross_reference_id,
        path_style_id,
        overload_cross_reference_id,
        overload_path_style_id,
        friendly_name: friendly::build(symbol, &qualified, true),
        overload_friendly_name: friendly::build(symbol, &qualified, false),
    })
}

/// Assemble one identifier string.
fn assemble(
    grammar: Grammar,
    symbol: &Symbol,
    qualified: &QualifiedName<'_>,
    variant: Variant,
) -> Result<String, Error> {
    let mut path = String::new();
    push_qualified_path(grammar, qualified, &mut path);

    let mut out = String::new();
    if grammar == Grammar::CrossReference {
        out.push_str(kind_prefix(symbol.kind, variant));
    }
    out.push_str(&path);

    // A type IS its qualified path; members append their own name.
    if symbol.kind == SymbolKind::Type {
        return Ok(out);
    }

    if !path.is_empty() {
        out.push(grammar.nested_separator());
    }
    let raw_name = rendered_member_name(symbol)?;
    out.push_str(&grammar.member_name_text(&raw_name));

    if variant == Variant::OverloadGroup {
        return Ok(out);
    }

    if !symbol.generic_parameters.is_empty() {
        out.push_str(grammar.own_parameter_marker());
        let _ = write!(out, "{}", symbol.generic_parameters.len());
    }

    let scope = GenericScope {
        enclosing: qualified.total_generic_arity(),
        own: symbol.generic_parameters.len(),
        symbol: &symbol.name,
    };
    if symbol.kind.has_parameter_list() {
        push_parameter_list(grammar, scope, symbol, &mut out)?;
    }
    if symbol.is_conversion_operator() {
        let return_type =
            symbol
                .return_type
                .as_ref()
                .ok_or_else(|| Error::ConversionWithoutReturnType {
                    name: symbol.name.clone(),
                })?;
        out.push('~');
        encoder::encode(grammar, scope, return_type, &mut out)?;
    }

    Ok(out)
}

/// Render the namespace and declaring-type segments.
///
/// The namespace attaches to the outermost segment with `.` in both
/// grammars; nested segments join with the grammar's own separator. Each
/// segment carries its own-arity suffix in the single-marker family.
fn push_qualified_path(grammar: Grammar, qualified: &QualifiedName<'_>, out: &mut String) {
    if let Some(namespace) = qualified.namespace {
        if !namespace.is_empty() {
            out.push_str(&grammar.segment_text(namespace));
            if !qualified.segments.is_empty() {
                out.push('.');
            }
        }
    }
    for (position, segment) in qualified.segments.iter().enumerate() {
        if position > 0 {
            out.push(grammar.nested_separator());
        }
        out.push_str(&grammar.segment_text(&segment.name));
        if !segment.generic_parameters.is_empty() {
            out.push_str(grammar.enclosing_parameter_marker());
            let _ = write!(out, "{}", segment.generic_parameters.len());
        }
    }
}

/// Render the parameter list. The cross-reference grammar omits empty
/// lists entirely; the path-style grammar always emits the parentheses.
fn push_parameter_list(
    grammar: Grammar,
    scope: GenericScope<'_>,
    symbol: &Symbol,
    out: &mut String,
) -> Result<(), Error> {
    if symbol.parameters.is_empty() {
        if grammar == Grammar::PathStyle {
            out.push_str("()");
        }
        return Ok(());
    }
    out.push('(');
    for (position, parameter) in symbol.parameters.iter().enumerate() {
        if position > 0 {
            out.push(',');
        }
        encoder::encode_parameter(grammar, scope, parameter, out)?;
    }
    out.push(')');
    Ok(())
}

/// The kind prefix of the cross-reference grammar. Overload-group ids
/// replace the member prefixes with `O:`; types keep `T:` since a type id
/// never carries a parameter list.
fn kind_prefix(kind: SymbolKind, variant: Variant) -> &'static str {
    if variant == Variant::OverloadGroup && kind.is_member() {
        return "O:";
    }
    return match kind {
        SymbolKind::Event => "E:",
        SymbolKind::Field => "F:",
        SymbolKind::Property => "P:",
        SymbolKind::Type => "T:",
        _ => "M:",
    };
}

/// The member's raw name before grammar character mapping.
fn rendered_member_name(symbol: &Symbol) -> Result<String, Error> {
    match symbol.kind {
        SymbolKind::Constructor => Ok(".ctor".to_string()),
        SymbolKind::StaticConstructor => Ok(".cctor".to_string()),
        SymbolKind::ExplicitInterfaceMethod => {
            if has_interface_separator(&symbol.name) {
                Ok(symbol.name.clone())
            } else {
                Err(Error::ExplicitInterfaceNameUnseparated {
                    name: symbol.name.clone(),
                })
            }
        },
        _ => Ok(symbol.name.clone()),
    }
}

/// True when the name contains a `.` outside angle brackets, i.e. carries
/// a recognizable interface portion.
fn has_interface_separator(name: &str) -> bool {
    let mut depth = 0u32;
    for c in name.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => return true,
            _ => {},
        }
    }
    false
}
