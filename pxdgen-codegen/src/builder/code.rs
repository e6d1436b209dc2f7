//! Indentation-tracked text buffer with import registries.

use super::{ImportSet, Indent};

/// Fixed comment at the top of every generated unit.
pub const GENERATED_HEADER: &str = "# This code was automatically generated by pxdgen.\n\n";

/// Accumulates the text of one generated `.pxd` unit.
///
/// Body text and import registrations are collected independently;
/// [`CodeBuilder::finalize`] assembles the header comment, the import
/// sections, and the body, in that order.
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    buffer: String,
    indent_level: usize,
    indent: Indent,
    imports: ImportSet,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation unit.
    pub fn new(indent: Indent) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent,
            imports: ImportSet::new(),
        }
    }

    /// Append raw text to the body.
    pub fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Append text prefixed with the current indentation.
    pub fn write_indented(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(text);
    }

    /// Increase the indentation depth.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease the indentation depth. Calls must balance `indent`;
    /// dedenting below zero panics.
    pub fn dedent(&mut self) {
        self.indent_level = self
            .indent_level
            .checked_sub(1)
            .expect("dedent without a matching indent");
    }

    /// Register `cimport module [as alias]`.
    pub fn add_cimport(&mut self, module: &str, alias: Option<&str>) {
        self.imports.add_cimport(module, alias);
    }

    /// Register `from module cimport symbol [as alias]`.
    pub fn add_cimport_from(&mut self, module: &str, symbol: &str, alias: Option<&str>) {
        self.imports.add_cimport_from(module, symbol, alias);
    }

    /// Register `import module [as alias]`.
    pub fn add_import(&mut self, module: &str, alias: Option<&str>) {
        self.imports.add_import(module, alias);
    }

    /// Register `from module import symbol [as alias]`.
    pub fn add_import_from(&mut self, module: &str, symbol: &str, alias: Option<&str>) {
        self.imports.add_import_from(module, symbol, alias);
    }

    /// Get the current indentation depth.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the body accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and assemble the unit: the generated-file
    /// comment, then each non-empty import section followed by one blank
    /// line, then the body.
    pub fn finalize(self) -> String {
        let mut out = String::from(GENERATED_HEADER);
        for section in self.imports.sections() {
            out.push_str(&section);
            out.push_str("\n\n");
        }
        out.push_str(&self.buffer);
        out
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
