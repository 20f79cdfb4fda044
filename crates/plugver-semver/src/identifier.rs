//! Grammar checks for pre-release and build-metadata identifiers

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::VersionError;

lazy_static! {
    /// Character class shared by pre-release tags and build metadata
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[A-Za-z0-9.-]+$").unwrap();
}

fn check_identifier(token: &str) -> Result<(), VersionError> {
    if !IDENTIFIER_RE.is_match(token) || token.contains("--") || token.contains("..") {
        return Err(VersionError::InvalidIdentifier(token.to_string()));
    }
    Ok(())
}

/// Validate a build metadata token.
///
/// Empty input means "no build metadata" and is not an error.
pub fn validate_build_metadata(build_metadata: &str) -> Result<String, VersionError> {
    if build_metadata.is_empty() {
        return Ok(String::new());
    }
    check_identifier(build_metadata)?;
    Ok(build_metadata.to_string())
}

/// Validate pre-release tokens and flatten them into the stored tag list.
///
/// Each token is grammar-checked, then split on `-`; the fragments are
/// appended in order of appearance across the whole input. A single token
/// `"alpha-alpha.1"` therefore stores as `["alpha", "alpha.1"]`. Empty
/// input yields an empty tag list, not an error.
pub fn validate_pre_release_tags<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>, VersionError> {
    let mut tags = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }
        check_identifier(token)?;
        tags.extend(token.split('-').filter(|t| !t.is_empty()).map(str::to_string));
    }
    Ok(tags)
}
