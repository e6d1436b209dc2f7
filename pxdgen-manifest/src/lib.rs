//! Manifest parsing and AST dump loading for the pxdgen generator.
//!
//! A project is described by a `pxdgen.toml` manifest naming the JSON AST
//! dump produced by the clang front end, the output directory, and
//! optionally the headers to render. Parse and validation failures are
//! reported with source spans via miette.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod dump;
mod error;
mod manifest;

pub use dump::{load_module, module_from_str};
pub use error::{Error, Result};
pub use manifest::{HeaderEntry, Manifest, ManifestFile, Project};
