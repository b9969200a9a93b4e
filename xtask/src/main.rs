//! xtask - Binding-generation tasks for the SDL2 shim workspace
//!
//! Usage:
//!   cargo xtask generate --sdl-version 2.0.9  # Generate FFI declarations
//!   cargo xtask emit-header --sdl-version 2.0.9 # Print the shim translation unit
//!   cargo xtask check-vendor                  # Verify the vendored header drops
//!   cargo xtask link-flags                    # Print sys-crate linking directives

mod check;
mod generate;

use clap::{Parser, Subcommand};
use sdl_shim::{PointerWidth, TargetFamily, link_directives};
use std::path::PathBuf;

/// The triple xtask itself was built for (forwarded by build.rs); the
/// default generation target.
const HOST_TARGET: &str = env!("XTASK_TARGET");

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Binding-generation tasks for the SDL2 shims", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate FFI declarations for one vendored SDL2 version
    Generate {
        /// SDL2 version selector (2.0.8, 2.0.9, 2.0.10, 2.0.12 or "current");
        /// exactly one must be in effect
        #[arg(long = "sdl-version", env = "SDL_SHIM_VERSION", required = true)]
        sdl_version: Vec<String>,

        /// Directory the vendored header drops live under
        #[arg(long, default_value = ".")]
        vendor_root: PathBuf,

        /// Vendor manifest overriding the canonical directory map
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Target triple to generate for
        #[arg(long, default_value = HOST_TARGET)]
        target: String,

        /// Directory the generated declarations are written to
        #[arg(long, default_value = "generated")]
        out_dir: PathBuf,

        /// Regenerate even if the output file already exists
        #[arg(long, short)]
        force: bool,
    },

    /// Print the rendered shim translation unit without running the generator
    EmitHeader {
        /// SDL2 version selector
        #[arg(long = "sdl-version", env = "SDL_SHIM_VERSION")]
        sdl_version: String,

        /// Target triple the platform macro pins are chosen for
        #[arg(long, default_value = HOST_TARGET)]
        target: String,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Verify every vendored header drop the manifest names
    CheckVendor {
        /// Directory the vendored header drops live under
        #[arg(long, default_value = ".")]
        vendor_root: PathBuf,

        /// Vendor manifest overriding the canonical directory map
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Print the cargo directives a consuming build script emits for linking
    LinkFlags {
        /// Target triple to link for
        #[arg(long, default_value = HOST_TARGET)]
        target: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            sdl_version,
            vendor_root,
            manifest,
            target,
            out_dir,
            force,
        } => {
            generate::run(&generate::GenerateConfig {
                selectors: sdl_version,
                vendor_root,
                manifest,
                target,
                out_dir,
                force,
            })?;
        }
        Commands::EmitHeader {
            sdl_version,
            target,
            out,
        } => {
            let text = generate::render_header(&sdl_version, &target)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &text)?;
                    println!("wrote {}", path.display());
                }
                None => print!("{text}"),
            }
        }
        Commands::CheckVendor {
            vendor_root,
            manifest,
        } => {
            check::run(&vendor_root, manifest.as_deref())?;
        }
        Commands::LinkFlags { target } => {
            let family = TargetFamily::from_triple(&target);
            let width = PointerWidth::from_triple(&target)
                .ok_or_else(|| format!("cannot infer pointer width of `{target}`"))?;
            for line in link_directives(family, width) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
