//! The enumerated SDL2 version selector.
//!
//! Each supported version maps to one vendored header tree. Selection is
//! mutually exclusive: the generation step takes exactly one version, and
//! [`SdlVersion::resolve`] turns "nothing selected" and "several selected"
//! into hard configuration errors instead of an empty include set.

use std::fmt;
use std::str::FromStr;

use crate::error::ShimError;

/// One vendored SDL2 release whose public headers can be exposed to the
/// binding generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SdlVersion {
    /// Legacy header-only drop of 2.0.8.
    V2_0_8,
    /// Legacy header-only drop of 2.0.9.
    V2_0_9,
    /// Full source drop of 2.0.10; headers live under its `include/`.
    V2_0_10,
    /// The current vendored tree, 2.0.12.
    V2_0_12,
}

impl SdlVersion {
    /// Every supported version, oldest first.
    pub const SUPPORTED: [SdlVersion; 4] = [
        SdlVersion::V2_0_8,
        SdlVersion::V2_0_9,
        SdlVersion::V2_0_10,
        SdlVersion::V2_0_12,
    ];

    /// Dotted version string, e.g. `"2.0.9"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SdlVersion::V2_0_8 => "2.0.8",
            SdlVersion::V2_0_9 => "2.0.9",
            SdlVersion::V2_0_10 => "2.0.10",
            SdlVersion::V2_0_12 => "2.0.12",
        }
    }

    /// Directory holding this version's public headers, relative to the
    /// vendor root.
    pub fn header_dir(self) -> &'static str {
        match self {
            SdlVersion::V2_0_8 => "old-headers-only/v2.0.8",
            SdlVersion::V2_0_9 => "old-headers-only/v2.0.9",
            SdlVersion::V2_0_10 => "full-source-SDL2-2.0.10/include",
            SdlVersion::V2_0_12 => "include",
        }
    }

    /// Collapses a set of enabled selectors down to the single version the
    /// generation step will use.
    ///
    /// Duplicates are tolerated; an empty set and a genuinely mixed set are
    /// both configuration errors.
    pub fn resolve<I>(selected: I) -> Result<SdlVersion, ShimError>
    where
        I: IntoIterator<Item = SdlVersion>,
    {
        let mut picked: Vec<SdlVersion> = selected.into_iter().collect();
        picked.sort_unstable();
        picked.dedup();
        match picked.as_slice() {
            [] => Err(ShimError::NoVersionSelected),
            [version] => Ok(*version),
            _ => Err(ShimError::AmbiguousVersion(picked)),
        }
    }
}

impl fmt::Display for SdlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SdlVersion {
    type Err = ShimError;

    fn from_str(s: &str) -> Result<SdlVersion, ShimError> {
        match s.trim() {
            "2.0.8" => Ok(SdlVersion::V2_0_8),
            "2.0.9" => Ok(SdlVersion::V2_0_9),
            "2.0.10" => Ok(SdlVersion::V2_0_10),
            // `current` tracks whatever lives under `include/`.
            "2.0.12" | "current" => Ok(SdlVersion::V2_0_12),
            other => Err(ShimError::UnknownVersion(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!("2.0.8".parse(), Ok(SdlVersion::V2_0_8));
        assert_eq!("2.0.9".parse(), Ok(SdlVersion::V2_0_9));
        assert_eq!("2.0.10".parse(), Ok(SdlVersion::V2_0_10));
        assert_eq!("2.0.12".parse(), Ok(SdlVersion::V2_0_12));
        assert_eq!("current".parse(), Ok(SdlVersion::V2_0_12));
        assert_eq!(" 2.0.9 ".parse(), Ok(SdlVersion::V2_0_9));
    }

    #[test]
    fn test_unknown_selector_is_rejected() {
        let parsed = "2.0.11".parse::<SdlVersion>();
        assert_eq!(
            parsed,
            Err(ShimError::UnknownVersion("2.0.11".to_string()))
        );
    }

    #[test]
    fn test_resolve_requires_a_selection() {
        let resolved = SdlVersion::resolve([]);
        assert_eq!(resolved, Err(ShimError::NoVersionSelected));
    }

    #[test]
    fn test_resolve_single_selection() {
        let resolved = SdlVersion::resolve([SdlVersion::V2_0_9]);
        assert_eq!(resolved, Ok(SdlVersion::V2_0_9));
    }

    #[test]
    fn test_resolve_rejects_mixed_selection() {
        let resolved = SdlVersion::resolve([SdlVersion::V2_0_8, SdlVersion::V2_0_10]);
        assert_eq!(
            resolved,
            Err(ShimError::AmbiguousVersion(vec![
                SdlVersion::V2_0_8,
                SdlVersion::V2_0_10,
            ]))
        );
    }

    #[test]
    fn test_resolve_tolerates_duplicates() {
        let resolved =
            SdlVersion::resolve([SdlVersion::V2_0_12, SdlVersion::V2_0_12]);
        assert_eq!(resolved, Ok(SdlVersion::V2_0_12));
    }

    #[test]
    fn test_header_dirs() {
        assert_eq!(SdlVersion::V2_0_8.header_dir(), "old-headers-only/v2.0.8");
        assert_eq!(SdlVersion::V2_0_9.header_dir(), "old-headers-only/v2.0.9");
        assert_eq!(
            SdlVersion::V2_0_10.header_dir(),
            "full-source-SDL2-2.0.10/include"
        );
        assert_eq!(SdlVersion::V2_0_12.header_dir(), "include");
    }

    #[test]
    fn test_display_matches_selector_strings() {
        for version in SdlVersion::SUPPORTED {
            assert_eq!(version.to_string().parse(), Ok(version));
        }
    }
}
