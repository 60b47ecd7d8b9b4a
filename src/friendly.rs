//! Human-readable display names at three qualification levels.
//!
//! Unlike the identifier grammars these use the declared generic-parameter
//! names (`TFirst`, not index 0) and C#-style angle brackets. Every symbol
//! has a derivable friendly name; there is no failure mode here.

use serde::Serialize;

use crate::model::{Symbol, SymbolKind};
use crate::qualified::QualifiedName;

/// A display name at its three qualification levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FriendlyName {
    /// The symbol's own rendered name, e.g. `SampleMethod<TFirst>`.
    pub member: String,
    /// Member name prefixed by the declaring-type chain, no namespace.
    pub partial: String,
    /// Partial qualification with the root namespace prefixed, when one exists.
    pub full: String,
}

/// Build the friendly-name triple for a symbol.
///
/// `with_own_placeholders` selects the exact name; the overload-group name
/// passes `false` and drops the member's own generic placeholder list (the
/// declaring chain keeps its placeholders either way).
pub fn build(
    symbol: &Symbol,
    qualified: &QualifiedName<'_>,
    with_own_placeholders: bool,
) -> FriendlyName {
    let member = member_level_name(symbol, qualified, with_own_placeholders);

    let mut parts: Vec<String> = prefix_segments(symbol, qualified)
        .iter()
        .map(|segment| name_with_placeholders(&segment.name, &segment.generic_parameters))
        .collect();
    parts.push(member.clone());
    let partial = parts.join(".");

    let full = match qualified.namespace {
        Some(namespace) if !namespace.is_empty() => format!("{namespace}.{partial}"),
        _ => partial.clone(),
    };

    FriendlyName { member, partial, full }
}

/// The member-level rendering of a symbol's own name.
///
/// Constructors and static constructors render the declaring type's simple
/// name; finalizers render `~TypeName`; everything else renders its raw
/// name (explicit interface implementations keep the full
/// `Interface.Member` form) plus its own placeholder list.
fn member_level_name(
    symbol: &Symbol,
    qualified: &QualifiedName<'_>,
    with_own_placeholders: bool,
) -> String {
    match symbol.kind {
        SymbolKind::Constructor | SymbolKind::StaticConstructor => {
            declaring_simple_name(symbol, qualified)
        },
        SymbolKind::Finalizer => format!("~{}", declaring_simple_name(symbol, qualified)),
        _ => {
            if with_own_placeholders {
                name_with_placeholders(&symbol.name, &symbol.generic_parameters)
            } else {
                symbol.name.clone()
            }
        },
    }
}

/// Segments prefixed before the member-level name: the whole chain for a
/// member, the chain minus the type itself for a type.
fn prefix_segments<'a>(symbol: &Symbol, qualified: &'a QualifiedName<'a>) -> &'a [&'a Symbol] {
    if symbol.kind == SymbolKind::Type {
        let end = qualified.segments.len().saturating_sub(1);
        qualified.segments.get(..end).unwrap_or_default()
    } else {
        &qualified.segments
    }
}

/// Simple name of the declaring type, used by constructor and finalizer
/// renderings. Falls back to the symbol's own name when the graph has no
/// declaring segment.
fn declaring_simple_name(symbol: &Symbol, qualified: &QualifiedName<'_>) -> String {
    qualified
        .segments
        .last()
        .map_or_else(|| symbol.name.clone(), |segment| segment.name.clone())
}

/// Append `<TFirst,TSecond>` to a name when placeholders exist.
fn name_with_placeholders(name: &str, placeholders: &[String]) -> String {
    if placeholders.is_empty() {
        return name.to_string();
    }
    format!("{name}<{}>", placeholders.join(","))
}
