/// Crate-level error types for docid diagnostics.
use std::path::PathBuf;

/// All errors in docid carry enough context to produce a useful diagnostic
/// without a debugger. Malformed-graph variants are fatal for one symbol
/// only; environment variants are fatal for the run.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A conversion operator has no return type to render after `~`.
    #[error("conversion operator `{name}` has no return type")]
    ConversionWithoutReturnType {
        /// Raw name of the operator symbol.
        name: String,
    },

    /// A symbol's declaring reference points at something other than a type.
    #[error("symbol `{symbol}` declared by non-type symbol `{declaring}`")]
    DeclaringSymbolNotAType {
        /// Raw name of the declaring symbol.
        declaring: String,
        /// Raw name of the symbol whose chain walk failed.
        symbol: String,
    },

    /// Declaring-type references form a cycle.
    #[error("declaring-type cycle: {}", chain.join(" -> "))]
    DeclaringTypeCycle {
        /// Symbol names along the cycle, in walk order.
        chain: Vec<String>,
    },

    /// A declaring-type index points outside the symbol table.
    #[error("symbol `{symbol}` declares type index {index}, table has {symbol_count} symbols")]
    DeclaringTypeOutOfBounds {
        /// The out-of-range index.
        index: usize,
        /// Raw name of the symbol whose chain walk failed.
        symbol: String,
        /// Number of symbols in the table.
        symbol_count: usize,
    },

    /// An explicit interface implementation whose name has no `.` separator
    /// outside angle brackets.
    #[error("explicit interface name `{name}` has no interface separator")]
    ExplicitInterfaceNameUnseparated {
        /// The unparseable raw name.
        name: String,
    },

    /// The `--filter` expression is not a valid regex.
    #[error("invalid filter: {0}")]
    FilterInvalid(
        /// The wrapped regex error.
        #[from]
        regex::Error,
    ),

    /// A generic-parameter reference exceeds its declared scope.
    #[error("symbol `{symbol}` references {scope} generic parameter {index}, scope has {available}")]
    GenericParameterOutOfRange {
        /// Number of parameters the scope actually declares.
        available: usize,
        /// The out-of-range index.
        index: usize,
        /// Which index space was referenced: `own` or `declaring-type`.
        scope: &'static str,
        /// Raw name of the symbol being derived.
        symbol: String,
    },

    /// A referenced graph file does not exist on disk.
    #[error("graph not found: {}", path.display())]
    GraphNotFound {
        /// Path to the missing graph file.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON serialization or deserialization failed.
    #[error("json: {0}")]
    Json(
        /// The wrapped JSON error.
        #[from]
        serde_json::Error,
    ),

    /// A symbol index points outside the symbol table.
    #[error("symbol index {index} out of bounds, table has {symbol_count} symbols")]
    SymbolOutOfBounds {
        /// The out-of-range index.
        index: usize,
        /// Number of symbols in the table.
        symbol_count: usize,
    },

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}

impl Error {
    /// Whether this error condemns a single symbol rather than the run.
    /// Callers skip and report such symbols; derivation continues for the
    /// rest of the graph.
    pub fn is_symbol_scoped(&self) -> bool {
        return matches!(
            self,
            Error::ConversionWithoutReturnType { .. }
                | Error::DeclaringSymbolNotAType { .. }
                | Error::DeclaringTypeCycle { .. }
                | Error::DeclaringTypeOutOfBounds { .. }
                | Error::ExplicitInterfaceNameUnseparated { .. }
                | Error::GenericParameterOutOfRange { .. }
                | Error::SymbolOutOfBounds { .. }
        );
    }
}
