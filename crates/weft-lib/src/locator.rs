//! Filesystem template lookup.
//!
//! A [`Locator`] resolves a logical template name (`"users/show"`) to a file
//! path by probing each search root for `<root>/<name>.<extension>`. Zero
//! matches and multiple matches are both errors; the error lists every path
//! involved so a misconfigured root is visible at a glance.

use std::path::PathBuf;

/// Failures while resolving a template name to a file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    #[error("template `{name}` not found (tried {})", format_paths(.attempted))]
    NotFound {
        name: String,
        attempted: Vec<PathBuf>,
    },

    #[error("template `{name}` found in multiple roots ({})", format_paths(.found))]
    Ambiguous { name: String, found: Vec<PathBuf> },
}

fn format_paths(paths: &[PathBuf]) -> String {
    let rendered: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    rendered.join(", ")
}

/// Resolves logical template names against a set of search roots.
#[derive(Debug, Clone)]
pub struct Locator {
    roots: Vec<PathBuf>,
    extension: String,
}

impl Locator {
    /// Create a locator for files with the given extension. A leading dot is
    /// accepted and ignored, so `"weft"` and `".weft"` are equivalent.
    pub fn new(extension: &str) -> Self {
        Locator {
            roots: Vec::new(),
            extension: extension.trim_start_matches('.').to_owned(),
        }
    }

    /// Add a search root. Roots are probed in insertion order.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    /// Resolve a logical name to the unique file it denotes.
    ///
    /// Names may contain path separators to address subdirectories of a root.
    pub fn locate(&self, name: &str) -> Result<PathBuf, LocateError> {
        let file = format!("{name}.{}", self.extension);
        let mut attempted = Vec::new();
        let mut found = Vec::new();

        for root in &self.roots {
            let candidate = root.join(&file);
            if candidate.is_file() {
                found.push(candidate);
            } else {
                attempted.push(candidate);
            }
        }

        match found.len() {
            1 => Ok(found.remove(0)),
            0 => Err(LocateError::NotFound {
                name: name.to_owned(),
                attempted,
            }),
            _ => Err(LocateError::Ambiguous {
                name: name.to_owned(),
                found,
            }),
        }
    }
}
