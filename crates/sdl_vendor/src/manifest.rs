//! The version-to-directory map, with an optional TOML override.
//!
//! A standard checkout needs no manifest at all: the canonical map mirrors
//! the directory names the vendoring step produces. A nonstandard checkout
//! (headers relocated, a partial drop) can describe itself in
//! `sdl-vendor.toml`:
//!
//! ```toml
//! [trees]
//! "2.0.9" = "drops/v2.0.9"
//! ```
//!
//! Unknown version keys are rejected at load time, so a typo fails the
//! configuration step instead of silently validating the wrong directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use sdl_shim::SdlVersion;

use crate::error::VendorError;
use crate::layout::VendorTree;

/// Serialized shape of `sdl-vendor.toml`.
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    trees: BTreeMap<String, PathBuf>,
}

/// Maps every supported SDL2 version to the directory holding its headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorManifest {
    root: PathBuf,
    trees: BTreeMap<SdlVersion, PathBuf>,
}

impl Default for VendorManifest {
    /// The canonical map: each version under its standard directory,
    /// rooted at the current directory.
    fn default() -> VendorManifest {
        let trees = SdlVersion::SUPPORTED
            .iter()
            .map(|version| (*version, PathBuf::from(version.header_dir())))
            .collect();
        VendorManifest {
            root: PathBuf::from("."),
            trees,
        }
    }
}

impl VendorManifest {
    /// Conventional manifest file name.
    pub const FILE_NAME: &'static str = "sdl-vendor.toml";

    /// Loads a manifest file, overlaying its entries on the canonical map.
    pub fn load(path: &Path) -> Result<VendorManifest, VendorError> {
        let text = std::fs::read_to_string(path).map_err(|source| VendorError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<VendorManifest, VendorError> {
        let raw: RawManifest =
            toml::from_str(text).map_err(|err| VendorError::ManifestParse {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;

        let mut manifest = VendorManifest::default();
        for (key, dir) in raw.trees {
            let version: SdlVersion =
                key.parse().map_err(|_| VendorError::UnknownManifestKey {
                    path: path.to_path_buf(),
                    key: key.clone(),
                })?;
            debug!("vendor manifest overrides {version} -> {}", dir.display());
            manifest.trees.insert(version, dir);
        }
        Ok(manifest)
    }

    /// Rebases the manifest onto a different vendor root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> VendorManifest {
        self.root = root.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The tree for one version. Every supported version has an entry.
    pub fn tree(&self, version: SdlVersion) -> VendorTree {
        match self.trees.get(&version) {
            Some(dir) => VendorTree::with_dir(self.root.clone(), version, dir.clone()),
            None => VendorTree::new(self.root.clone(), version),
        }
    }

    /// All trees, oldest version first.
    pub fn trees(&self) -> impl Iterator<Item = VendorTree> + '_ {
        SdlVersion::SUPPORTED.iter().map(|version| self.tree(*version))
    }
}
