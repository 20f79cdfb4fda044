//! Strict grammar matcher for `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::VersionError;

lazy_static! {
    /// Base shape of a compliant version. The whole string must match; a
    /// version embedded in surrounding noise is not accepted here. Doubled
    /// separators and stray `+`/`-` prefixes are rejected by a separate
    /// scan because the regex crate has no lookaheads.
    static ref STRICT_RE: Regex = Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-(?P<pre>[A-Za-z0-9.-]+))?(?:\+(?P<build>[A-Za-z0-9.-]+))?$"
    )
    .unwrap();
}

/// Rejects `..` anywhere, and `+`/`-` immediately followed by anything
/// that is not an ASCII alphanumeric (which covers `--`, `++`, `+-`, `-+`).
fn violates_separator_rules(version: &str) -> bool {
    if version.contains("..") {
        return true;
    }
    version
        .as_bytes()
        .windows(2)
        .any(|pair| (pair[0] == b'+' || pair[0] == b'-') && !pair[1].is_ascii_alphanumeric())
}

/// Raw capture set produced by a successful strict match.
#[derive(Debug)]
pub(crate) struct VersionParts {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<String>,
    pub build_metadata: Option<String>,
}

pub(crate) fn parse_strict(version: &str) -> Result<VersionParts, VersionError> {
    if violates_separator_rules(version) {
        return Err(VersionError::InvalidVersionFormat(version.to_string()));
    }

    let caps = STRICT_RE
        .captures(version)
        .ok_or_else(|| VersionError::InvalidVersionFormat(version.to_string()))?;

    let number = |index: usize| -> Result<u64, VersionError> {
        caps.get(index)
            .unwrap()
            .as_str()
            .parse()
            .map_err(|_| VersionError::InvalidVersionFormat(version.to_string()))
    };

    Ok(VersionParts {
        major: number(1)?,
        minor: number(2)?,
        patch: number(3)?,
        pre_release: caps.name("pre").map(|m| m.as_str().to_string()),
        build_metadata: caps.name("build").map(|m| m.as_str().to_string()),
    })
}

/// Check whether a string matches the strict grammar, without constructing
/// anything and without failing.
pub fn is_well_formed(version: &str) -> bool {
    parse_strict(version).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_groups() {
        let parts = parse_strict("1.2.3-alpha.23-pre+build.5").unwrap();
        assert_eq!(parts.major, 1);
        assert_eq!(parts.minor, 2);
        assert_eq!(parts.patch, 3);
        assert_eq!(parts.pre_release.as_deref(), Some("alpha.23-pre"));
        assert_eq!(parts.build_metadata.as_deref(), Some("build.5"));

        let parts = parse_strict("0.0.0").unwrap();
        assert_eq!((parts.major, parts.minor, parts.patch), (0, 0, 0));
        assert!(parts.pre_release.is_none());
        assert!(parts.build_metadata.is_none());
    }

    #[test]
    fn test_leading_zeros_rejected() {
        assert!(!is_well_formed("01.2.3"));
        assert!(!is_well_formed("1.02.3"));
        assert!(!is_well_formed("2.3.04"));
        assert!(is_well_formed("10.20.3"));
    }

    #[test]
    fn test_full_string_must_match() {
        assert!(!is_well_formed("v1.0.0"));
        assert!(!is_well_formed("1.0.0 "));
        assert!(!is_well_formed("version 1.0.0"));
        assert!(!is_well_formed("1.0.0!"));
    }

    #[test]
    fn test_separator_rules() {
        assert!(!is_well_formed("1.2.3-rele..ase+build"));
        assert!(!is_well_formed("1.2.3-rele--ase+build"));
        assert!(!is_well_formed("1.2.3-release++build"));
        assert!(!is_well_formed("1.2.3-release-something+..build"));
        assert!(!is_well_formed("1.2.3-release-something+--build"));
        assert!(!is_well_formed("1.2.3+-release-something-build"));
        assert!(is_well_formed("1.2.3-release-something+build"));
    }
}
