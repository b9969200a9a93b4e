//! Vendor-tree verification task.

use std::error::Error;
use std::path::Path;

use sdl_vendor::VendorError;

/// Walks every tree the manifest names and reports its status. Any
/// missing header fails the run, after the full report has printed.
pub fn run(vendor_root: &Path, manifest: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let manifest = crate::generate::load_manifest(manifest, vendor_root)?;

    let mut missing_total = 0usize;
    for tree in manifest.trees() {
        match tree.verify() {
            Ok(()) => println!("SDL2 {}: ok ({})", tree.version(), tree.dir().display()),
            Err(VendorError::MissingHeaders { missing, .. }) => {
                println!(
                    "SDL2 {}: missing {} header(s)",
                    tree.version(),
                    missing.len()
                );
                for path in &missing {
                    println!("  {}", path.display());
                }
                missing_total += missing.len();
            }
            Err(other) => return Err(other.into()),
        }
    }

    if missing_total > 0 {
        return Err(format!("{missing_total} vendored header(s) missing").into());
    }
    Ok(())
}
