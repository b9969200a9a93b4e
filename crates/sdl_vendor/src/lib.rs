//! Bookkeeping for the vendored SDL2 source drops.
//!
//! The shim layer assumes a directory per supported SDL2 version with the
//! three public headers in place. This crate makes that assumption
//! checkable: [`VendorTree`] verifies one version's on-disk layout, and
//! [`VendorManifest`] holds the version-to-directory map, with an
//! optional `sdl-vendor.toml` override for nonstandard checkouts.

pub mod error;
pub mod layout;
pub mod manifest;

pub use error::VendorError;
pub use layout::VendorTree;
pub use manifest::VendorManifest;
