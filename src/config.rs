use std::path::Path;

use crate::error::Error;

/// Project configuration loaded from `.docid.toml`.
/// Include/exclude patterns are namespace prefixes applied to each
/// symbol's root namespace.
pub struct Config {
    exclude: Vec<String>,
    include: Vec<String>,
}

/// Raw TOML structure for `.docid.toml`.
#[derive(serde::Deserialize)]
struct DocidTomlConfig {
    #[serde(default)]
    exclude: Vec<String>,
    #[serde(default)]
    include: Vec<String>,
}

impl Config {
    /// Load config from `.docid.toml` in the given root directory.
    /// Returns a default that derives everything if the file doesn't exist.
    /// Returns an error if the file exists but is malformed — never silently
    /// falls back to defaults when the user wrote a config file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(".docid.toml");
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::derive_everything_by_default());
            },
            Err(e) => return Err(Error::Io(e)),
        };

        let raw: DocidTomlConfig = toml::from_str(&content)?;
        Ok(Self {
            exclude: raw.exclude,
            include: raw.include,
        })
    }

    /// Default config that includes everything and excludes nothing.
    fn derive_everything_by_default() -> Self {
        Self {
            exclude: Vec::new(),
            include: Vec::new(),
        }
    }

    /// Check whether symbols under a root namespace should be derived.
    ///
    /// A namespace is included if no include patterns are set (derive
    /// everything), or if it starts with at least one include pattern.
    /// An included namespace is then excluded if it starts with any
    /// exclude pattern. Symbols with no namespace pass an empty string.
    pub fn should_derive(&self, namespace: &str) -> bool {
        let included = self.include.is_empty()
            || self.include.iter().any(|p| namespace.starts_with(p.as_str()));

        if !included {
            return false;
        }

        !self.exclude.iter().any(|p| namespace.starts_with(p.as_str()))
    }
}
