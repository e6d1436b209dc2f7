//! JSON AST dump loading.

use std::path::Path;

use pxdgen_ast::Module;

use crate::{Error, Result};

/// Load a module from a JSON AST dump produced by the clang front end.
pub fn load_module(path: impl AsRef<Path>) -> Result<Module> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    module_from_str(&content, &path.display().to_string())
}

/// Parse a dump from a string with a custom filename for error reporting.
pub fn module_from_str(content: &str, filename: &str) -> Result<Module> {
    serde_json::from_str(content).map_err(|e| Error::dump(e, content, filename))
}
