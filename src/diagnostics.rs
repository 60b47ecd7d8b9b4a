use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened, why, and how to fix it.
/// Designed to be readable by both humans and LLM agents.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::GraphNotFound { path } => format!("\
# Error: Graph Not Found

`{}` does not exist.

## Fix

Check the path, or point docid at a directory containing exported
symbol-graph `*.json` files.
", path.display()),

        Error::Json(e) => format!("\
# Error: Invalid Graph JSON

{e}

## Fix

Re-export the symbol graph from the metadata reader; docid does not
repair malformed graphs.
"),

        Error::FilterInvalid(e) => format!("\
# Error: Invalid Filter

{e}

## Fix

`--filter` takes a regular expression matched against raw symbol names.
"),

        Error::GenericParameterOutOfRange { available, index, scope, symbol } => format!("\
# Error: Generic Parameter Out Of Range

Symbol `{symbol}` references {scope} generic parameter {index},
but that scope declares only {available}.

The symbol is skipped; derivation continues for the rest of the graph.
"),

        Error::DeclaringTypeCycle { chain } => format!("\
# Error: Declaring-Type Cycle

{}

Declaring-type links must form a tree. The symbol is skipped.
", chain.join(" -> ")),

        Error::DeclaringTypeOutOfBounds { index, symbol, symbol_count } => format!("\
# Error: Declaring Type Out Of Bounds

Symbol `{symbol}` names declaring-type index {index}, but the table
has {symbol_count} symbols. The symbol is skipped.
"),

        Error::DeclaringSymbolNotAType { declaring, symbol } => format!("\
# Error: Declared By Non-Type

Symbol `{symbol}` is declared by `{declaring}`, which is not a type.
The symbol is skipped.
"),

        Error::ExplicitInterfaceNameUnseparated { name } => format!("\
# Error: Unrecognized Explicit Interface Name

`{name}` has no `.` separator outside angle brackets, so the interface
portion cannot be identified. The symbol is skipped.
"),

        Error::ConversionWithoutReturnType { name } => format!("\
# Error: Conversion Operator Without Return Type

`{name}` is a conversion operator but carries no return type to render
after `~`. The symbol is skipped.
"),

        Error::SymbolOutOfBounds { index, symbol_count } => format!("\
# Error: Symbol Index Out Of Bounds

Index {index} is outside the symbol table ({symbol_count} symbols).
"),

        Error::Io(e) => format!("\
# Error: I/O

{e}
"),

        Error::TomlDe(e) => format!("\
# Error: Invalid `.docid.toml`

{e}
"),
    }
}
