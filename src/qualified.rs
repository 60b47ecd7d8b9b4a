//! Declaring-type chain resolution.
//!
//! Walks the parent links of the flat symbol table to produce the ordered
//! ancestry of a symbol: the root namespace (if any) and the type segments
//! from outermost to innermost. For a type the chain ends at the type
//! itself; for a member it ends at the immediately declaring type — the
//! member's own name is appended separately by the assembler.

use crate::error::Error;
use crate::model::{Symbol, SymbolGraph, SymbolId, SymbolKind};

/// The resolved ancestry of one symbol.
#[derive(Debug)]
pub struct QualifiedName<'a> {
    /// Root namespace, taken from the outermost segment (or from the
    /// symbol itself when it has no declaring type).
    pub namespace: Option<&'a str>,
    /// Type segments, outermost first. Every entry has `SymbolKind::Type`.
    pub segments: Vec<&'a Symbol>,
}

impl QualifiedName<'_> {
    /// Total generic arity across all segments: the size of the enclosing
    /// generic-parameter index space seen by a member of the innermost type.
    pub fn total_generic_arity(&self) -> usize {
        self.segments
            .iter()
            .map(|s| s.generic_parameters.len())
            .sum()
    }
}

/// Resolve the declaring-type chain for a symbol.
///
/// # Errors
///
/// Returns `Error::SymbolOutOfBounds` for a bad starting index,
/// `Error::DeclaringTypeOutOfBounds` or `Error::DeclaringSymbolNotAType`
/// for a malformed parent link, or `Error::DeclaringTypeCycle` when the
/// parent links loop.
pub fn resolve(graph: &SymbolGraph, id: SymbolId) -> Result<QualifiedName<'_>, Error> {
    let symbol = graph.symbol(id).ok_or(Error::SymbolOutOfBounds {
        index: id.0,
        symbol_count: graph.symbols.len(),
    })?;

    // Inner-first collection; reversed at the end. The symbol itself is a
    // segment only when it is a type.
    let mut segments: Vec<&Symbol> = Vec::new();
    let mut visited: Vec<usize> = Vec::new();
    let mut current = if symbol.kind == SymbolKind::Type {
        Some((id, symbol))
    } else {
        lookup_declaring_type(graph, symbol)?
    };

    while let Some((segment_id, segment)) = current {
        if segment.kind != SymbolKind::Type {
            return Err(Error::DeclaringSymbolNotAType {
                declaring: segment.name.clone(),
                symbol: symbol.name.clone(),
            });
        }
        if visited.contains(&segment_id.0) {
            let mut chain: Vec<String> = segments.iter().map(|s| s.name.clone()).collect();
            chain.push(segment.name.clone());
            return Err(Error::DeclaringTypeCycle { chain });
        }
        visited.push(segment_id.0);
        segments.push(segment);
        current = lookup_declaring_type(graph, segment)?;
    }

    segments.reverse();

    // Namespace lives on the outermost segment; a root member (no declaring
    // type at all) contributes its own.
    let namespace = segments
        .first()
        .copied()
        .unwrap_or(symbol)
        .namespace
        .as_deref();

    Ok(QualifiedName { namespace, segments })
}

/// Follow one declaring-type link, validating the index.
///
/// # Errors
///
/// Returns `Error::DeclaringTypeOutOfBounds` when the link points outside
/// the symbol table.
fn lookup_declaring_type<'a>(
    graph: &'a SymbolGraph,
    symbol: &Symbol,
) -> Result<Option<(SymbolId, &'a Symbol)>, Error> {
    let Some(declaring_id) = symbol.declaring_type else {
        return Ok(None);
    };
    let declaring = graph
        .symbol(declaring_id)
        .ok_or_else(|| Error::DeclaringTypeOutOfBounds {
            index: declaring_id.0,
            symbol: symbol.name.clone(),
            symbol_count: graph.symbols.len(),
        })?;
    Ok(Some((declaring_id, declaring)))
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::error::Error;
    use crate::model::{Symbol, SymbolGraph, SymbolId, SymbolKind};

    fn type_symbol(name: &str, namespace: Option<&str>, declaring: Option<usize>) -> Symbol {
        Symbol {
            declaring_type: declaring.map(SymbolId),
            generic_parameters: Vec::new(),
            kind: SymbolKind::Type,
            name: name.to_string(),
            namespace: namespace.map(String::from),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    fn method_symbol(name: &str, declaring: usize) -> Symbol {
        Symbol {
            declaring_type: Some(SymbolId(declaring)),
            generic_parameters: Vec::new(),
            kind: SymbolKind::Method,
            name: name.to_string(),
            namespace: None,
            parameters: Vec::new(),
            return_type: None,
        }
    }

    #[test]
    fn member_chain_is_outermost_first() {
        let graph = SymbolGraph {
            symbols: vec![
                type_symbol("OuterClass", Some("Ns"), None),
                type_symbol("SampleClass", None, Some(0)),
                method_symbol("SampleMethod", 1),
            ],
        };
        let qualified = resolve(&graph, SymbolId(2)).unwrap();
        let names: Vec<&str> = qualified.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["OuterClass", "SampleClass"]);
        assert_eq!(qualified.namespace, Some("Ns"));
    }

    #[test]
    fn type_chain_includes_the_type_itself() {
        let graph = SymbolGraph {
            symbols: vec![
                type_symbol("OuterClass", None, None),
                type_symbol("SampleClass", None, Some(0)),
            ],
        };
        let qualified = resolve(&graph, SymbolId(1)).unwrap();
        let names: Vec<&str> = qualified.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["OuterClass", "SampleClass"]);
    }

    #[test]
    fn declaring_cycle_is_reported() {
        let graph = SymbolGraph {
            symbols: vec![
                type_symbol("First", None, Some(1)),
                type_symbol("Second", None, Some(0)),
                method_symbol("SampleMethod", 0),
            ],
        };
        let err = resolve(&graph, SymbolId(2)).unwrap_err();
        assert!(matches!(err, Error::DeclaringTypeCycle { .. }), "got {err}");
    }

    #[test]
    fn member_declared_by_member_is_reported() {
        let graph = SymbolGraph {
            symbols: vec![
                type_symbol("SampleClass", None, None),
                method_symbol("First", 0),
                method_symbol("Second", 1),
            ],
        };
        let err = resolve(&graph, SymbolId(2)).unwrap_err();
        assert!(matches!(err, Error::DeclaringSymbolNotAType { .. }), "got {err}");
    }

    #[test]
    fn bad_declaring_index_is_reported() {
        let graph = SymbolGraph {
            symbols: vec![method_symbol("SampleMethod", 7)],
        };
        let err = resolve(&graph, SymbolId(0)).unwrap_err();
        assert!(matches!(err, Error::DeclaringTypeOutOfBounds { .. }), "got {err}");
    }

    #[test]
    fn total_arity_sums_the_chain() {
        let mut outer = type_symbol("OuterClass", None, None);
        outer.generic_parameters = vec!["TFirst".to_string(), "TSecond".to_string()];
        let mut inner = type_symbol("SampleClass", None, Some(0));
        inner.generic_parameters = vec!["TThird".to_string()];
        let graph = SymbolGraph {
            symbols: vec![outer, inner, method_symbol("SampleMethod", 1)],
        };
        let qualified = resolve(&graph, SymbolId(2)).unwrap();
        assert_eq!(qualified.total_generic_arity(), 3);
    }
}
