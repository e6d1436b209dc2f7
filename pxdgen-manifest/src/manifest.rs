//! Manifest types and parsing for pxdgen.toml files.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    str::FromStr,
};

use pxdgen_ast::Header;
use serde::Deserialize;

use crate::{Error, Result};

/// Root manifest for pxdgen.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Project metadata and paths
    pub project: Project,

    /// Headers to render; derived from the dump when empty
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
}

/// `[project]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Project name, used in reports
    pub name: String,

    /// Path to the JSON AST dump produced by the clang front end
    pub dump: PathBuf,

    /// Output directory for generated `.pxd` files
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,
}

fn default_save_dir() -> PathBuf {
    PathBuf::from("generated")
}

/// One `[[headers]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderEntry {
    /// Header path as recorded in the dump's item locations
    pub path: PathBuf,

    /// Name spelled in the extern block; defaults to the file name of `path`
    #[serde(default)]
    pub name: Option<String>,
}

impl HeaderEntry {
    /// Convert to a rendering unit.
    pub fn to_header(&self) -> Header {
        match &self.name {
            Some(name) => Header::new(self.path.clone(), name.clone()),
            None => Header::from_path(&self.path),
        }
    }
}

impl Manifest {
    /// Parse a pxdgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a pxdgen.toml from a string with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// The rendering units listed in the manifest, in declaration order.
    pub fn headers(&self) -> Vec<Header> {
        self.headers.iter().map(HeaderEntry::to_header).collect()
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "pxdgen.toml")
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    if manifest.project.name.trim().is_empty() {
        return Err(Error::validation("project name must not be empty", src, filename));
    }
    if manifest.project.dump.as_os_str().is_empty() {
        return Err(Error::validation("project dump path must not be empty", src, filename));
    }

    let mut seen = BTreeSet::new();
    for entry in &manifest.headers {
        let header = entry.to_header();
        if header.header_name.is_empty() {
            return Err(Error::validation(
                format!("header '{}' has no file name", entry.path.display()),
                src,
                filename,
            ));
        }
        if !seen.insert(header.path.clone()) {
            return Err(Error::validation(
                format!("duplicate header entry '{}'", header.path.display()),
                src,
                filename,
            ));
        }
    }
    Ok(())
}

/// Represents a pxdgen.toml file with both raw content and parsed manifest.
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a pxdgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, content, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
