//! Rendering of the shim translation unit handed to the binding generator.

use crate::error::ShimError;
use crate::platform::{PlatformDefines, TargetFamily};
use crate::version::SdlVersion;

/// The three public headers, in dependency order. `SDL_vulkan.h` and
/// `SDL_syswm.h` both rely on type declarations from `SDL.h`, so the
/// order is fixed.
pub const HEADER_SEQUENCE: [&str; 3] = ["SDL.h", "SDL_vulkan.h", "SDL_syswm.h"];

/// A complete shim translation unit: the platform macro pins followed by
/// the include chain for exactly one vendored SDL2 version.
#[derive(Debug, Clone)]
pub struct ShimHeader {
    version: SdlVersion,
    include_dir: String,
    defines: PlatformDefines,
}

impl ShimHeader {
    pub fn new(version: SdlVersion, family: TargetFamily) -> ShimHeader {
        ShimHeader {
            version,
            include_dir: version.header_dir().to_string(),
            defines: PlatformDefines::for_family(family),
        }
    }

    /// Points the include chain at a nonstandard tree directory (still
    /// relative to the vendor root), e.g. one named by a vendor manifest.
    pub fn with_include_dir(mut self, dir: impl Into<String>) -> ShimHeader {
        self.include_dir = dir.into();
        self
    }

    pub fn version(&self) -> SdlVersion {
        self.version
    }

    pub fn defines(&self) -> &PlatformDefines {
        &self.defines
    }

    /// Adds a caller-supplied macro pin on top of the platform set.
    pub fn pin(&mut self, name: &str, value: Option<&str>) -> Result<(), ShimError> {
        self.defines.pin(name, value)
    }

    /// The include targets, relative to the vendor root, in the fixed
    /// [`HEADER_SEQUENCE`] order.
    pub fn include_paths(&self) -> Vec<String> {
        HEADER_SEQUENCE
            .iter()
            .map(|header| format!("{}/{header}", self.include_dir))
            .collect()
    }

    /// Renders the translation unit text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.defines.render_into(&mut out);
        for path in self.include_paths() {
            out.push_str(&format!("#include \"{path}\"\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordered_positions(text: &str, needles: &[String]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| match text.find(needle.as_str()) {
                Some(position) => position,
                None => usize::MAX,
            })
            .collect()
    }

    #[test]
    fn test_include_order_is_fixed() {
        let shim = ShimHeader::new(SdlVersion::V2_0_9, TargetFamily::Unix);
        let text = shim.render();

        let includes = vec![
            "#include \"old-headers-only/v2.0.9/SDL.h\"".to_string(),
            "#include \"old-headers-only/v2.0.9/SDL_vulkan.h\"".to_string(),
            "#include \"old-headers-only/v2.0.9/SDL_syswm.h\"".to_string(),
        ];
        let positions = ordered_positions(&text, &includes);
        assert!(positions.iter().all(|&p| p != usize::MAX), "missing include");
        assert!(positions[0] < positions[1]);
        assert!(positions[1] < positions[2]);

        assert!(text.contains("#define SDL_VIDEO_DRIVER_X11\n"));
        assert!(text.contains("#define SDL_VIDEO_DRIVER_WAYLAND\n"));
    }

    #[test]
    fn test_each_version_includes_its_own_tree() {
        for version in SdlVersion::SUPPORTED {
            let shim = ShimHeader::new(version, TargetFamily::Windows);
            let paths = shim.include_paths();
            assert_eq!(paths.len(), 3);
            for (path, header) in paths.iter().zip(HEADER_SEQUENCE) {
                assert_eq!(path, &format!("{}/{header}", version.header_dir()));
            }
        }
    }

    #[test]
    fn test_current_tree_uses_include_dir() {
        let shim = ShimHeader::new(SdlVersion::V2_0_12, TargetFamily::Apple);
        let text = shim.render();
        assert!(text.contains("#include \"include/SDL.h\"\n"));
        assert!(text.contains("#define MAC_OS_X_VERSION_MIN_REQUIRED 1060\n"));
    }

    #[test]
    fn test_defines_precede_includes() {
        let shim = ShimHeader::new(SdlVersion::V2_0_8, TargetFamily::Unix);
        let text = shim.render();
        let last_define = text.rfind("#endif");
        let first_include = text.find("#include");
        match (last_define, first_include) {
            (Some(define), Some(include)) => assert!(define < include),
            _ => assert!(false, "expected both defines and includes"),
        }
    }

    #[test]
    fn test_extra_pin_conflict_propagates() {
        let mut shim = ShimHeader::new(SdlVersion::V2_0_10, TargetFamily::Unix);
        let result = shim.pin(crate::platform::X11_DRIVER_MACRO, Some("1"));
        assert!(matches!(result, Err(ShimError::DefineConflict { .. })));
    }

    #[test]
    fn test_include_dir_override_flows_into_render() {
        let shim = ShimHeader::new(SdlVersion::V2_0_9, TargetFamily::Windows)
            .with_include_dir("drops/v2.0.9");
        let text = shim.render();
        assert!(text.contains("#include \"drops/v2.0.9/SDL.h\"\n"));
        assert!(!text.contains("old-headers-only"));
    }

    #[test]
    fn test_windows_shim_is_includes_only() {
        let shim = ShimHeader::new(SdlVersion::V2_0_12, TargetFamily::Windows);
        let text = shim.render();
        assert!(!text.contains("#define"));
        assert!(text.starts_with("#include \"include/SDL.h\""));
    }
}
