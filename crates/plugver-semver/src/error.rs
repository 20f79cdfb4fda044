//! Error types for version parsing and validation

use thiserror::Error;

/// Error raised while parsing or validating a version string.
///
/// Construction is the only failure point: once a version value exists,
/// comparison and rendering cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The string does not match the strict
    /// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` grammar.
    #[error("invalid version (not Semantic Versioning compliant): \"{0}\"")]
    InvalidVersionFormat(String),

    /// A pre-release tag or build metadata token violates the identifier
    /// grammar (`[A-Za-z0-9.-]+`, no doubled `-` or `.`).
    #[error("invalid identifier: \"{0}\"")]
    InvalidIdentifier(String),

    /// The relaxed extractor could not locate any numeric version pattern.
    #[error("no version number found in \"{0}\"")]
    NoVersionFound(String),
}
