//! Module, header, and top-level item types.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::nodes::{Enum, Function, Struct, Typedef, Union};

/// Source location of a declaration: the header file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path of the defining header, if the front end recorded one.
    #[serde(default)]
    pub header_name: Option<PathBuf>,
}

impl Location {
    pub fn new(header_name: impl Into<PathBuf>) -> Self {
        Self { header_name: Some(header_name.into()) }
    }
}

/// A header selected for rendering.
///
/// `path` identifies which items belong to the unit (compared against item
/// locations); `header_name` is the name spelled in the extern block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub path: PathBuf,
    pub header_name: String,
}

impl Header {
    pub fn new(path: impl Into<PathBuf>, header_name: impl Into<String>) -> Self {
        Self { path: path.into(), header_name: header_name.into() }
    }

    /// Build a header whose extern name is the file name of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let header_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, header_name }
    }
}

/// A parsed translation unit: the ordered top-level declarations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Module {
    pub items: Vec<Item>,
}

impl Module {
    /// Rendering units derived from the distinct item locations, in
    /// first-seen item order.
    pub fn headers(&self) -> Vec<Header> {
        let mut seen: IndexSet<&Path> = IndexSet::new();
        for item in &self.items {
            if let Some(location) = item.location()
                && let Some(path) = &location.header_name
            {
                seen.insert(path.as_path());
            }
        }
        seen.into_iter().map(Header::from_path).collect()
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Typedef(Typedef),
    Struct(Struct),
    Union(Union),
    Enum(Enum),
    Function(Function),
}

impl Item {
    /// The declaration's source location, if the front end recorded one.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Item::Typedef(typedef) => typedef.location.as_ref(),
            Item::Struct(st) => st.location.as_ref(),
            Item::Union(un) => un.location.as_ref(),
            Item::Enum(en) => en.location.as_ref(),
            Item::Function(function) => function.location.as_ref(),
        }
    }

    /// Declared identifier, if any; composite tags may be anonymous.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Item::Typedef(typedef) => Some(&typedef.identifier),
            Item::Struct(st) => st.identifier.as_deref(),
            Item::Union(un) => un.identifier.as_deref(),
            Item::Enum(en) => en.identifier.as_deref(),
            Item::Function(function) => Some(&function.identifier),
        }
    }
}
