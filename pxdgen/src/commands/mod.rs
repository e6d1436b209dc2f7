mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use pxdgen_codegen::{Diagnostic, Severity};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pxdgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Print rendering diagnostics; returns true if any was an error.
pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic]) -> bool {
    let mut has_errors = false;
    for diag in diagnostics {
        match diag.severity {
            Severity::Error => {
                has_errors = true;
                eprintln!("error: {}", diag.message);
                if let Some(location) = &diag.location {
                    eprintln!("  --> {}", location);
                }
            }
            Severity::Warning => {
                eprintln!("warning: {}", diag.message);
                if let Some(location) = &diag.location {
                    eprintln!("  --> {}", location);
                }
            }
            Severity::Info => {
                println!("info: {}", diag.message);
                if let Some(location) = &diag.location {
                    println!("  --> {}", location);
                }
            }
        }
    }
    has_errors
}

#[derive(Parser)]
#[command(name = "pxdgen")]
#[command(version)]
#[command(about = "Generate Cython .pxd declarations from C header AST dumps")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate .pxd declarations from the configured AST dump
    Generate(GenerateCommand),

    /// Validate the manifest and dump without writing files
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
