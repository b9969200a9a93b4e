//! The on-disk layout contract for one vendored header tree.

use std::path::{Path, PathBuf};

use sdl_shim::{HEADER_SEQUENCE, SdlVersion};

use crate::error::VendorError;

/// One vendored header tree: an SDL2 version plus the directory expected
/// to hold its public headers.
#[derive(Debug, Clone)]
pub struct VendorTree {
    root: PathBuf,
    dir: PathBuf,
    version: SdlVersion,
}

impl VendorTree {
    /// The canonical tree for `version` under `root`.
    pub fn new(root: impl Into<PathBuf>, version: SdlVersion) -> VendorTree {
        VendorTree {
            root: root.into(),
            dir: PathBuf::from(version.header_dir()),
            version,
        }
    }

    /// A tree whose directory was overridden by the vendor manifest.
    pub fn with_dir(
        root: impl Into<PathBuf>,
        version: SdlVersion,
        dir: impl Into<PathBuf>,
    ) -> VendorTree {
        VendorTree {
            root: root.into(),
            dir: dir.into(),
            version,
        }
    }

    pub fn version(&self) -> SdlVersion {
        self.version
    }

    /// The tree's directory, relative to the vendor root.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of one header inside this tree.
    pub fn header_path(&self, header: &str) -> PathBuf {
        self.root.join(&self.dir).join(header)
    }

    /// The three required headers, in include order.
    pub fn header_paths(&self) -> Vec<PathBuf> {
        HEADER_SEQUENCE
            .iter()
            .map(|header| self.header_path(header))
            .collect()
    }

    /// Checks that every required header exists, reporting all gaps at
    /// once. A missing vendored drop otherwise only surfaces as a
    /// file-not-found in the middle of preprocessing.
    pub fn verify(&self) -> Result<(), VendorError> {
        let missing: Vec<PathBuf> = self
            .header_paths()
            .into_iter()
            .filter(|path| !path.is_file())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(VendorError::MissingHeaders {
                version: self.version,
                missing,
            })
        }
    }
}
