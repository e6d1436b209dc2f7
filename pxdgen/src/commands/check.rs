use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pxdgen_codegen::{Generator, pxd_file_name};
use pxdgen_manifest::{ManifestFile, load_module};

use super::{UnwrapOrExit, generate::select_headers, print_diagnostics};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to pxdgen.toml (defaults to ./pxdgen.toml)
    #[arg(short, long, default_value = "pxdgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest_file = ManifestFile::open(&self.config).unwrap_or_exit();
        let manifest = manifest_file.manifest();
        let module = load_module(&manifest.project.dump).unwrap_or_exit();

        let headers = select_headers(manifest, &module);
        let generator = Generator::new(&module, headers);
        let preview = generator.preview();

        let has_errors = print_diagnostics(&preview.diagnostics);
        if has_errors {
            std::process::exit(1);
        }

        println!("✓ {} is valid\n", self.config.display());

        println!("  {}", manifest.project.name);
        println!();

        let count = generator.headers().len();
        println!("  {} header{}:", count, if count == 1 { "" } else { "s" });
        for header in generator.headers() {
            println!("    {} -> {}", header.header_name, pxd_file_name(&header.path));
        }

        let items = module.items.len();
        println!(
            "  {} top-level declaration{}",
            items,
            if items == 1 { "" } else { "s" }
        );

        Ok(())
    }
}
