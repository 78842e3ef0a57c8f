//! Named template fragments (raw SVG markup) looked up at render time

use crate::io::error::{GenerationError, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

/// Supplies raw template fragments by name
pub trait FragmentSource {
    /// Fetch the fragment called `name`
    ///
    /// # Errors
    ///
    /// Returns `MissingTemplateFragment` if no such fragment can be read
    fn fetch(&mut self, name: &str) -> Result<&str>;
}

/// Fragments read from files under a root directory, cached per run
#[derive(Debug, Clone)]
pub struct DirectoryFragments {
    root: PathBuf,
    cache: HashMap<String, String>,
}

impl DirectoryFragments {
    /// Resolve fragment names against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    /// Directory fragment names are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FragmentSource for DirectoryFragments {
    fn fetch(&mut self, name: &str) -> Result<&str> {
        match self.cache.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_str()),
            Entry::Vacant(entry) => {
                let path = self.root.join(name);
                let content = std::fs::read_to_string(&path).map_err(|source| {
                    GenerationError::MissingTemplateFragment {
                        name: name.to_string(),
                        source,
                    }
                })?;
                tracing::debug!(fragment = name, path = %path.display(), "loaded fragment");
                Ok(entry.insert(content).as_str())
            }
        }
    }
}

/// Fragments held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryFragments {
    fragments: HashMap<String, String>,
}

impl MemoryFragments {
    /// Create an empty fragment set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fragment under `name`
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.fragments.insert(name.into(), content.into());
        self
    }
}

impl FragmentSource for MemoryFragments {
    fn fetch(&mut self, name: &str) -> Result<&str> {
        self.fragments
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| GenerationError::MissingTemplateFragment {
                name: name.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "fragment not registered"),
            })
    }
}
