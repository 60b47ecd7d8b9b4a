use serde::Serialize;

/// Output the comprehensive docid reference document.
pub fn run(json: bool) {
    if json {
        print_json();
    } else {
        print_markdown();
    }
}

// ── Markdown output ───────────────────────────────────────────────────

fn print_markdown() {
    let version = env!("CARGO_PKG_VERSION");
    print!(
        "\
# docid {version}

Deterministic symbol identifiers for documentation pipelines — derive the
exact cross-reference key, the URL-safe path key, overload-group variants
of both, and friendly display names for every symbol in an exported
metadata graph.

## Workflow

    docid derive <graph.json>...      Derive identifiers, print JSON records
    docid derive <dir>                Process every *.json under a directory
    docid derive --filter <regex>     Restrict to matching raw symbol names
    docid check <graph.json>...       Validate graphs, report malformed symbols
    docid info [--json]               Print this reference document

## Identifier Grammars

| Construct          | Cross-reference | Path-style |
|--------------------|-----------------|------------|
| Kind prefix        | T: M: F: P: E: (O: for overload groups) | none |
| Nested types       | Outer.Inner     | Outer/Inner |
| Type arity         | `1              | '1         |
| Method arity       | ``1             | ''1        |
| Own generic param  | ``0             | ''0        |
| Enclosing param    | `0              | '0         |
| Generic arguments  | List{{T}}         | List(T)    |
| Pointer            | T*              | T~         |
| Array              | T[]             | T$         |
| Multidim array     | T[0:,0:]        | T@5B0;,0;@5D |
| ref / out          | T@              | T-         |
| Conversion return  | (T)~R           | (T)~R      |
| Non-ASCII names    | pass through    | @XX per UTF-8 byte |

## Configuration (.docid.toml)

    include = [\"MyCompany.\"]           # only derive these root namespaces
    exclude = [\"MyCompany.Internal\"]   # skip these root namespaces

## Exit Codes

| Code | Meaning |
|------|---------|
| 0    | All symbols derived |
| 1    | One or more malformed symbols skipped |
| 2    | Runtime error |
"
    );
}

// ── JSON output ───────────────────────────────────────────────────────

#[derive(Serialize)]
struct InfoJson {
    version: String,
    commands: Vec<CommandInfo>,
    exit_codes: Vec<ExitCodeInfo>,
}

#[derive(Serialize)]
struct CommandInfo {
    command: String,
    summary: String,
}

#[derive(Serialize)]
struct ExitCodeInfo {
    code: u8,
    meaning: String,
}

fn print_json() {
    let info = InfoJson {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commands: vec![
            CommandInfo {
                command: "derive".to_string(),
                summary: "Derive identifiers and print JSON records".to_string(),
            },
            CommandInfo {
                command: "check".to_string(),
                summary: "Validate graphs, report malformed symbols".to_string(),
            },
            CommandInfo {
                command: "info".to_string(),
                summary: "Print the reference document".to_string(),
            },
        ],
        exit_codes: vec![
            ExitCodeInfo { code: 0, meaning: "All symbols derived".to_string() },
            ExitCodeInfo { code: 1, meaning: "One or more malformed symbols skipped".to_string() },
            ExitCodeInfo { code: 2, meaning: "Runtime error".to_string() },
        ],
    };

    // serde_json::to_string_pretty won't fail on this structure.
    let json = serde_json::to_string_pretty(&info).unwrap_or_default();
    println!("{json}");
}
