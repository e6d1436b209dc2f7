//! Cython `.pxd` declaration rendering for the pxdgen generator.
//!
//! This crate turns a parsed C header model ([`pxdgen_ast::Module`]) into
//! one `.pxd` text unit per header.
//!
//! # Module Organization
//!
//! - [`builder`] - Text emission building blocks (CodeBuilder, ImportSet, Indent)
//! - [`renderer`] - The extern-block declaration renderer
//! - [`diagnostic`] - Structured diagnostics collected while rendering
//! - [`naming`] - Sibling module and output file naming
//! - [`output`] - Generated file plumbing
//! - [`generator`] - Preview/generate driver over (module, headers)

pub mod builder;

mod diagnostic;
mod generator;
mod naming;
mod output;
mod renderer;

pub use builder::{CodeBuilder, GENERATED_HEADER, ImportSet, Indent};
pub use diagnostic::{Diagnostic, Severity};
pub use generator::{GenerateReport, Generator, Preview};
pub use naming::{pxd_file_name, sibling_module};
pub use output::OutputFile;
pub use renderer::{ExternRenderer, RenderedUnit, UNDEFINED, render_header};
