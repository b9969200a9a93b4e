use std::fmt;

use crate::version::SdlVersion;

/// Configuration errors surfaced before any header is handed to the
/// binding generator.
///
/// These are typically fatal: generation cannot proceed without exactly
/// one version and a consistent macro set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShimError {
    /// No version selector was enabled. Generation against an empty
    /// inclusion set is refused rather than silently producing nothing.
    NoVersionSelected,

    /// More than one version selector was enabled at once.
    AmbiguousVersion(Vec<SdlVersion>),

    /// A selector string that names no supported SDL2 version.
    UnknownVersion(String),

    /// A macro was pinned twice with different values. Letting this
    /// through would surface later as a preprocessor redefinition error.
    DefineConflict {
        name: String,
        pinned: Option<String>,
        requested: Option<String>,
    },
}

impl fmt::Display for ShimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVersionSelected => write!(
                f,
                "no SDL2 version selected (expected exactly one of {})",
                supported_list()
            ),
            Self::AmbiguousVersion(picked) => {
                let list: Vec<&str> = picked.iter().map(|v| v.as_str()).collect();
                write!(f, "multiple SDL2 versions selected: {}", list.join(", "))
            }
            Self::UnknownVersion(selector) => write!(
                f,
                "unknown SDL2 version selector `{selector}` (expected one of {})",
                supported_list()
            ),
            Self::DefineConflict {
                name,
                pinned,
                requested,
            } => write!(
                f,
                "macro `{name}` is already pinned to `{}` and cannot be redefined as `{}`",
                value_or_empty(pinned),
                value_or_empty(requested)
            ),
        }
    }
}

impl std::error::Error for ShimError {}

fn supported_list() -> String {
    let list: Vec<&str> = SdlVersion::SUPPORTED.iter().map(|v| v.as_str()).collect();
    list.join(", ")
}

fn value_or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("<no value>")
}
