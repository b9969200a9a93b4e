//! Cargo directives a consuming sys-crate build script emits to link the
//! SDL2 library itself.

use crate::platform::TargetFamily;

/// Pointer width of the consuming target. Windows builds keep their import
/// libraries in width-specific directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerWidth {
    W32,
    W64,
}

impl PointerWidth {
    pub fn from_bits(bits: u32) -> Option<PointerWidth> {
        match bits {
            32 => Some(PointerWidth::W32),
            64 => Some(PointerWidth::W64),
            _ => None,
        }
    }

    /// Infers the width from a target triple's architecture component.
    pub fn from_triple(triple: &str) -> Option<PointerWidth> {
        let arch = triple.split('-').next().unwrap_or(triple);
        match arch {
            "i386" | "i586" | "i686" | "arm" | "armv7" | "mips" | "powerpc" | "wasm32" => {
                Some(PointerWidth::W32)
            }
            "x86_64" | "aarch64" | "powerpc64" | "powerpc64le" | "s390x" | "mips64" => {
                Some(PointerWidth::W64)
            }
            other if other.contains("64") => Some(PointerWidth::W64),
            _ => None,
        }
    }
}

/// The directives to print from a build script: always link `SDL2`, and on
/// Windows add the width-specific native search path for the bundled
/// import libraries.
pub fn link_directives(family: TargetFamily, width: PointerWidth) -> Vec<String> {
    let mut lines = vec!["cargo:rustc-link-lib=SDL2".to_string()];
    if family == TargetFamily::Windows {
        let dir = match width {
            PointerWidth::W32 => "lib/x86",
            PointerWidth::W64 => "lib/x64",
        };
        lines.push(format!("cargo:rustc-link-search=native={dir}"));
    }
    lines
}
