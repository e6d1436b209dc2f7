//! Preview/generate driver producing one output unit per header.

use std::path::{Path, PathBuf};

use eyre::Result;
use pxdgen_ast::{Header, Module};

use crate::{
    diagnostic::Diagnostic, naming::pxd_file_name, output::OutputFile, renderer::ExternRenderer,
};

/// Rendered units held in memory, with the diagnostics of all headers.
#[derive(Debug, Clone, Default)]
pub struct Preview {
    pub files: Vec<OutputFile>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Paths written, in header order.
    pub written: Vec<PathBuf>,
    /// Diagnostics of all rendered headers.
    pub diagnostics: Vec<Diagnostic>,
}

/// Renders a module's headers into `.pxd` units.
pub struct Generator<'a> {
    module: &'a Module,
    headers: Vec<Header>,
}

impl<'a> Generator<'a> {
    pub fn new(module: &'a Module, headers: Vec<Header>) -> Self {
        Self { module, headers }
    }

    /// A generator over the headers derived from the module's own item
    /// locations.
    pub fn from_module(module: &'a Module) -> Self {
        let headers = module.headers();
        Self { module, headers }
    }

    /// The headers this generator renders, in order.
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Render every header in memory without touching the filesystem.
    pub fn preview(&self) -> Preview {
        let mut preview = Preview::default();
        for header in &self.headers {
            let unit = ExternRenderer::new(header).render(self.module);
            preview
                .files
                .push(OutputFile::new(pxd_file_name(&header.path), unit.text));
            preview.diagnostics.extend(unit.diagnostics);
        }
        preview
    }

    /// Render every header and write the units under `out_dir`.
    pub fn generate(&self, out_dir: &Path) -> Result<GenerateReport> {
        let mut report = GenerateReport::default();
        for header in &self.headers {
            let unit = ExternRenderer::new(header).render(self.module);
            let file = OutputFile::new(pxd_file_name(&header.path), unit.text);
            report.written.push(file.write(out_dir)?);
            report.diagnostics.extend(unit.diagnostics);
        }
        Ok(report)
    }
}
