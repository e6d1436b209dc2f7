//! Naming rules for generated sibling modules and output files.

use std::path::Path;

/// Module name of the generated sibling for `header`: `_` plus the file
/// stem. `spam.h` becomes `_spam`; `defs.hpp` becomes `_defs`.
pub fn sibling_module(header: &Path) -> String {
    let stem = header
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    format!("_{stem}")
}

/// File name of the generated unit for `header`, matching the module name
/// spelled by cross-header cimports.
pub fn pxd_file_name(header: &Path) -> String {
    format!("{}.pxd", sibling_module(header))
}
