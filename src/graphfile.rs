//! Symbol-graph file loading and discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Error;
use crate::model::SymbolGraph;

/// Expand CLI path arguments into graph files. A directory is walked
/// recursively for `*.json`; plain files pass through as-is. The result is
/// sorted so runs are deterministic regardless of filesystem order.
pub fn discover(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_file())
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            {
                found.push(entry.into_path());
            }
        } else {
            found.push(path.clone());
        }
    }
    found.sort();
    found.dedup();
    found
}

/// Read and parse a symbol graph from disk.
///
/// # Errors
///
/// Returns `Error::GraphNotFound` if the file doesn't exist,
/// `Error::Io` for other read failures,
/// or `Error::Json` if the content is not a valid symbol graph.
pub fn load(path: &Path) -> Result<SymbolGraph, Error> {
    let content = match std::fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::GraphNotFound { path: path.to_path_buf() });
        },
        Err(e) => return Err(Error::Io(e)),
        Ok(c) => c,
    };
    return parse(&content);
}

/// Parse a symbol graph from JSON content.
///
/// # Errors
///
/// Returns `Error::Json` on malformed content.
pub fn parse(content: &str) -> Result<SymbolGraph, Error> {
    return Ok(serde_json::from_str(content)?);
}
