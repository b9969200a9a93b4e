//! Build-time configuration for generating SDL2 FFI declarations.
//!
//! The vendored SDL2 source drops ship several versions of the public
//! headers side by side. Before a binding generator can walk them, two
//! decisions have to be made explicitly: which version's headers to expose,
//! and which platform compatibility macros to pin so that a headless
//! generation environment still produces the complete declaration set.
//! This crate models both decisions as plain data and renders the shim
//! translation unit the generator consumes.

pub mod error;
pub mod header;
pub mod linking;
pub mod platform;
pub mod version;

pub use error::ShimError;
pub use header::{HEADER_SEQUENCE, ShimHeader};
pub use linking::{PointerWidth, link_directives};
pub use platform::{GuardedDefine, PlatformDefines, TargetFamily};
pub use version::SdlVersion;
