use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use pxdgen_ast::{Header, Module};
use pxdgen_codegen::Generator;
use pxdgen_manifest::{Manifest, ManifestFile, load_module};

use super::{UnwrapOrExit, print_diagnostics};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to pxdgen.toml (defaults to ./pxdgen.toml)
    #[arg(short, long, default_value = "pxdgen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to the manifest's save_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated declarations without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

/// Headers to render: the manifest's list, or every header the dump names.
pub(crate) fn select_headers(manifest: &Manifest, module: &Module) -> Vec<Header> {
    if manifest.headers.is_empty() {
        module.headers()
    } else {
        manifest.headers()
    }
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest_file = ManifestFile::open(&self.config).unwrap_or_exit();
        let manifest = manifest_file.manifest();

        let module = load_module(&manifest.project.dump).unwrap_or_exit();
        let headers = select_headers(manifest, &module);
        let generator = Generator::new(&module, headers);

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            let out_dir = self
                .output
                .clone()
                .unwrap_or_else(|| manifest.project.save_dir.clone());
            self.run_generation(&generator, &manifest.project.name, &out_dir)
        }
    }

    fn run_generation(&self, generator: &Generator, name: &str, out_dir: &Path) -> Result<()> {
        let report = generator
            .generate(out_dir)
            .wrap_err("Failed to generate declarations")?;

        println!("{}", name);
        println!();

        let count = generator.headers().len();
        println!("Headers ({}):", count);
        for header in generator.headers() {
            println!("  {}", header.header_name);
        }
        println!();

        println!("Generated: {}/", out_dir.display());
        for path in &report.written {
            println!("  + {}", path.display());
        }

        if !report.diagnostics.is_empty() {
            println!();
            print_diagnostics(&report.diagnostics);
        }

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let preview = generator.preview();

        for file in &preview.files {
            println!("── {} ──", file.name);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", preview.files.len());

        if !preview.diagnostics.is_empty() {
            println!();
            print_diagnostics(&preview.diagnostics);
        }

        Ok(())
    }
}
