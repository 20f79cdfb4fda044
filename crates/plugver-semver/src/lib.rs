//! Strict and relaxed Semantic Versioning
//!
//! This crate parses, validates, canonicalizes and totally orders version
//! identifiers of the form `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
//! [`SemVer`] is the strict value type; [`Version`] falls back to
//! extracting a bare `major.minor[.patch]` from non-compliant strings, so
//! callers can still answer "is X newer than Y" for whatever they find in
//! the wild.

mod comparator;
mod error;
mod identifier;
mod parser;
mod semver;
mod version;

pub use comparator::NumberAwareComparator;
pub use error::VersionError;
pub use identifier::{validate_build_metadata, validate_pre_release_tags};
pub use parser::is_well_formed;
pub use semver::SemVer;
pub use version::Version;
