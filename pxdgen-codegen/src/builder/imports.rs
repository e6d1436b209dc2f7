//! Import registries for generated declaration files.

use std::collections::{BTreeMap, BTreeSet};

/// A `symbol [as alias]` entry of a from-import line.
type FromEntry = (String, Option<String>);

/// The four import registries of a `.pxd` unit.
///
/// Registration is idempotent and duplicate-tolerant. Rendering sorts
/// entries lexicographically by module and then by symbol/alias, so the
/// emitted sections never depend on registration order. A symbol may be
/// registered under several aliases; each alias produces its own spelling.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    cimports: BTreeMap<String, BTreeSet<Option<String>>>,
    cimports_from: BTreeMap<String, BTreeSet<FromEntry>>,
    imports: BTreeMap<String, BTreeSet<Option<String>>>,
    imports_from: BTreeMap<String, BTreeSet<FromEntry>>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `cimport module [as alias]`.
    pub fn add_cimport(&mut self, module: &str, alias: Option<&str>) {
        self.cimports
            .entry(module.to_string())
            .or_default()
            .insert(alias.map(str::to_string));
    }

    /// Register `from module cimport symbol [as alias]`.
    pub fn add_cimport_from(&mut self, module: &str, symbol: &str, alias: Option<&str>) {
        self.cimports_from
            .entry(module.to_string())
            .or_default()
            .insert((symbol.to_string(), alias.map(str::to_string)));
    }

    /// Register `import module [as alias]`.
    pub fn add_import(&mut self, module: &str, alias: Option<&str>) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(alias.map(str::to_string));
    }

    /// Register `from module import symbol [as alias]`.
    pub fn add_import_from(&mut self, module: &str, symbol: &str, alias: Option<&str>) {
        self.imports_from
            .entry(module.to_string())
            .or_default()
            .insert((symbol.to_string(), alias.map(str::to_string)));
    }

    /// Check if no import of any kind was registered.
    pub fn is_empty(&self) -> bool {
        self.cimports.is_empty()
            && self.cimports_from.is_empty()
            && self.imports.is_empty()
            && self.imports_from.is_empty()
    }

    /// Render the non-empty sections in their fixed order: cimports,
    /// from-cimports, imports, from-imports. Each section is returned as
    /// newline-joined lines without a trailing newline.
    pub fn sections(&self) -> Vec<String> {
        [
            plain_section(&self.cimports, "cimport"),
            from_section(&self.cimports_from, "cimport"),
            plain_section(&self.imports, "import"),
            from_section(&self.imports_from, "import"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn plain_section(
    registry: &BTreeMap<String, BTreeSet<Option<String>>>,
    keyword: &str,
) -> Option<String> {
    if registry.is_empty() {
        return None;
    }
    let mut lines = Vec::new();
    for (module, aliases) in registry {
        for alias in aliases {
            match alias {
                Some(alias) => lines.push(format!("{keyword} {module} as {alias}")),
                None => lines.push(format!("{keyword} {module}")),
            }
        }
    }
    Some(lines.join("\n"))
}

fn from_section(registry: &BTreeMap<String, BTreeSet<FromEntry>>, keyword: &str) -> Option<String> {
    if registry.is_empty() {
        return None;
    }
    let mut lines = Vec::new();
    for (module, entries) in registry {
        let symbols: Vec<String> = entries
            .iter()
            .map(|(symbol, alias)| match alias {
                Some(alias) => format!("{symbol} as {alias}"),
                None => symbol.clone(),
            })
            .collect();
        lines.push(format!("from {module} {keyword} {}", symbols.join(", ")));
    }
    Some(lines.join("\n"))
}
