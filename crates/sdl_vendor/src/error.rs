use std::fmt;
use std::path::PathBuf;

use sdl_shim::SdlVersion;

/// Failures while locating or validating a vendored header drop.
#[derive(Debug)]
pub enum VendorError {
    /// A selected tree is incomplete. Carries every missing header, not
    /// just the first, so one check run reports the whole gap.
    MissingHeaders {
        version: SdlVersion,
        missing: Vec<PathBuf>,
    },

    /// The manifest file could not be read.
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest file is not valid TOML for the expected shape.
    ManifestParse { path: PathBuf, message: String },

    /// The manifest names a version this workspace does not vendor.
    UnknownManifestKey { path: PathBuf, key: String },
}

impl fmt::Display for VendorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeaders { version, missing } => {
                write!(f, "vendored tree for SDL2 {version} is incomplete; missing:")?;
                for path in missing {
                    write!(f, " {}", path.display())?;
                }
                Ok(())
            }
            Self::ManifestRead { path, source } => {
                write!(f, "could not read vendor manifest {}: {source}", path.display())
            }
            Self::ManifestParse { path, message } => {
                write!(f, "could not parse vendor manifest {}: {message}", path.display())
            }
            Self::UnknownManifestKey { path, key } => write!(
                f,
                "vendor manifest {} names unsupported SDL2 version `{key}`",
                path.display()
            ),
        }
    }
}

impl std::error::Error for VendorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ManifestRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<VendorError>();
    }

    #[test]
    fn test_missing_headers_lists_every_path() {
        let err = VendorError::MissingHeaders {
            version: SdlVersion::V2_0_9,
            missing: vec![
                PathBuf::from("old-headers-only/v2.0.9/SDL_vulkan.h"),
                PathBuf::from("old-headers-only/v2.0.9/SDL_syswm.h"),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("2.0.9"));
        assert!(message.contains("SDL_vulkan.h"));
        assert!(message.contains("SDL_syswm.h"));
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = VendorError::ManifestRead {
            path: PathBuf::from("sdl-vendor.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
