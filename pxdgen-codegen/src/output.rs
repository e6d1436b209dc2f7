//! Generated file plumbing.

use std::path::{Path, PathBuf};

use eyre::Result;

/// One generated `.pxd` unit, named after its header's sibling module.
#[derive(Debug, Clone)]
pub struct OutputFile {
    /// File name, e.g. `_spam.pxd`.
    pub name: String,
    /// Finalized text.
    pub content: String,
}

impl OutputFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name: name.into(), content: content.into() }
    }

    /// Full path of this file under `base`.
    pub fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.name)
    }

    /// Write the file under `base`, creating parent directories as needed.
    pub fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}
