//! The generation task: validated configuration in, generated declarations
//! out.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use sdl_shim::{SdlVersion, ShimHeader, TargetFamily};
use sdl_vendor::VendorManifest;

/// Name the shim translation unit is registered under with the generator;
/// it only ever exists as an in-memory string.
const SHIM_FILE_NAME: &str = "sdl2_shim.h";

pub struct GenerateConfig {
    pub selectors: Vec<String>,
    pub vendor_root: PathBuf,
    pub manifest: Option<PathBuf>,
    pub target: String,
    pub out_dir: PathBuf,
    pub force: bool,
}

pub fn run(config: &GenerateConfig) -> Result<(), Box<dyn Error>> {
    let mut selected = Vec::with_capacity(config.selectors.len());
    for selector in &config.selectors {
        selected.push(selector.parse::<SdlVersion>()?);
    }
    let version = SdlVersion::resolve(selected)?;
    let family = TargetFamily::from_triple(&config.target);

    let manifest = load_manifest(config.manifest.as_deref(), &config.vendor_root)?;
    let tree = manifest.tree(version);
    tree.verify()?;

    let out_path = config.out_dir.join(output_name(version, &config.target));
    if out_path.is_file() && !config.force {
        println!(
            "{} already exists, skipping (use --force to regenerate)",
            out_path.display()
        );
        return Ok(());
    }

    let shim = ShimHeader::new(version, family)
        .with_include_dir(tree.dir().display().to_string());
    println!(
        "generating SDL2 {version} declarations for {} from {}",
        config.target,
        tree.dir().display()
    );

    let bindings = bindgen::Builder::default()
        .header_contents(SHIM_FILE_NAME, &shim.render())
        .clang_arg(format!("-I{}", manifest.root().display()))
        .use_core()
        .ctypes_prefix("libc")
        .default_enum_style(bindgen::EnumVariation::Consts)
        .layout_tests(true)
        .formatter(bindgen::Formatter::Rustfmt)
        .generate()?;

    fs::create_dir_all(&config.out_dir)?;
    bindings.write_to_file(&out_path)?;
    println!("wrote {}", out_path.display());
    Ok(())
}

/// Renders the shim translation unit for `emit-header`.
pub fn render_header(selector: &str, target: &str) -> Result<String, Box<dyn Error>> {
    let version: SdlVersion = selector.parse()?;
    let shim = ShimHeader::new(version, TargetFamily::from_triple(target));
    Ok(shim.render())
}

/// The manifest to generate against: the named file if given, an
/// `sdl-vendor.toml` sitting in the vendor root if present, the canonical
/// map otherwise. Rebased onto the vendor root in every case.
pub fn load_manifest(
    path: Option<&Path>,
    vendor_root: &Path,
) -> Result<VendorManifest, Box<dyn Error>> {
    let manifest = match path {
        Some(path) => VendorManifest::load(path)?,
        None => {
            let conventional = vendor_root.join(VendorManifest::FILE_NAME);
            if conventional.is_file() {
                VendorManifest::load(&conventional)?
            } else {
                VendorManifest::default()
            }
        }
    };
    Ok(manifest.with_root(vendor_root))
}

/// `SDL2-<version>-<target>.rs`, the name a consuming crate includes the
/// generated module by.
fn output_name(version: SdlVersion, target: &str) -> String {
    format!("SDL2-{version}-{target}.rs")
}
