//! Relaxed version extraction for strings found in the wild

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::VersionError;
use crate::semver::SemVer;

lazy_static! {
    /// Loose extraction patterns, tried in order after a strict parse
    /// fails: `major.minor.patch` anywhere in the string, then
    /// `major.minor` with patch defaulting to 0.
    static ref LOOSE_TRIPLE_RE: Regex = Regex::new(r"(\d+)\.(\d+)\.(\d+)").unwrap();
    static ref LOOSE_PAIR_RE: Regex = Regex::new(r"(\d+)\.(\d+)").unwrap();
}

#[derive(Debug, Clone)]
enum Inner {
    /// The string was strictly compliant; all semantics delegate to the
    /// wrapped value.
    Strict(SemVer),
    /// Bare numeric triple extracted from a non-compliant string.
    /// Pre-release and build semantics do not apply.
    Loose { major: u64, minor: u64, patch: u64 },
}

/// Best-effort version holder.
///
/// Strict parsing is attempted first; on failure a numeric
/// `major.minor[.patch]` is extracted from anywhere in the string.
/// `"v1.0.0"` is not compliant (the strict grammar matches whole strings
/// only) but still yields `1.0.0` here. Construction fails only when no
/// numeric pattern can be located at all.
#[derive(Debug, Clone)]
pub struct Version {
    inner: Inner,
}

impl Version {
    /// Build a version from a bare numeric triple.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            inner: Inner::Strict(SemVer::new(major, minor, patch)),
        }
    }

    /// Parse a raw string, strictly when possible, loosely otherwise.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        if let Some(semver) = SemVer::try_parse(version) {
            return Ok(Version {
                inner: Inner::Strict(semver),
            });
        }

        if let Some(caps) = LOOSE_TRIPLE_RE.captures(version) {
            if let (Ok(major), Ok(minor), Ok(patch)) =
                (caps[1].parse(), caps[2].parse(), caps[3].parse())
            {
                return Ok(Version {
                    inner: Inner::Loose { major, minor, patch },
                });
            }
        }

        if let Some(caps) = LOOSE_PAIR_RE.captures(version) {
            if let (Ok(major), Ok(minor)) = (caps[1].parse(), caps[2].parse()) {
                return Ok(Version {
                    inner: Inner::Loose { major, minor, patch: 0 },
                });
            }
        }

        Err(VersionError::NoVersionFound(version.to_string()))
    }

    /// Non-failing variant of [`Version::parse`].
    pub fn try_parse(version: &str) -> Option<Self> {
        Self::parse(version).ok()
    }

    /// True when the original string was strictly compliant.
    pub fn is_sem_ver(&self) -> bool {
        matches!(self.inner, Inner::Strict(_))
    }

    /// The wrapped strict version, when there is one.
    pub fn as_sem_ver(&self) -> Option<&SemVer> {
        match &self.inner {
            Inner::Strict(semver) => Some(semver),
            Inner::Loose { .. } => None,
        }
    }

    pub fn major(&self) -> u64 {
        match &self.inner {
            Inner::Strict(semver) => semver.major,
            Inner::Loose { major, .. } => *major,
        }
    }

    pub fn minor(&self) -> u64 {
        match &self.inner {
            Inner::Strict(semver) => semver.minor,
            Inner::Loose { minor, .. } => *minor,
        }
    }

    pub fn patch(&self) -> u64 {
        match &self.inner {
            Inner::Strict(semver) => semver.patch,
            Inner::Loose { patch, .. } => *patch,
        }
    }

    /// Rank against another version. Two strict versions use full
    /// Semantic Versioning precedence; any loose operand degrades the
    /// comparison to the numeric triple.
    pub fn precedence(&self, other: &Version) -> Ordering {
        if let (Inner::Strict(a), Inner::Strict(b)) = (&self.inner, &other.inner) {
            return a.precedence(b);
        }
        self.major()
            .cmp(&other.major())
            .then_with(|| self.minor().cmp(&other.minor()))
            .then_with(|| self.patch().cmp(&other.patch()))
    }

    pub fn is_greater_than(&self, other: &Version) -> bool {
        self.precedence(other) == Ordering::Greater
    }

    pub fn is_less_than(&self, other: &Version) -> bool {
        self.precedence(other) == Ordering::Less
    }

    /// True when this version is newer than `other`.
    pub fn is_update_for(&self, other: &Version) -> bool {
        self.is_greater_than(other)
    }

    /// True when this version is newer than `other` and keeps its major
    /// version number.
    pub fn is_update_compatible_for(&self, other: &Version) -> bool {
        self.is_update_for(other) && self.major() == other.major()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Strict(semver) => semver.fmt(f),
            Inner::Loose { major, minor, patch } => {
                write!(f, "{}.{}.{}", major, minor, patch)
            }
        }
    }
}

impl PartialEq for Version {
    /// Two strict versions compare with [`SemVer`] equality (including its
    /// tag-intersection rule); otherwise the numeric triples must match.
    fn eq(&self, other: &Self) -> bool {
        if let (Inner::Strict(a), Inner::Strict(b)) = (&self.inner, &other.inner) {
            return a == b;
        }
        self.major() == other.major()
            && self.minor() == other.minor()
            && self.patch() == other.patch()
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_strict_passthrough() {
        assert_eq!(Version::new(1, 2, 2).to_string(), "1.2.2");
        assert_eq!(v("1.2.3-alpha.23-pre").to_string(), "1.2.3-alpha.23-pre");
        assert!(v("1.2.3").is_sem_ver());
        assert!(v("1.2.3").as_sem_ver().is_some());
    }

    #[test]
    fn test_loose_fallback() {
        let version = v("v1.0.0");
        assert!(!version.is_sem_ver());
        assert!(version.as_sem_ver().is_none());
        assert_eq!(version.to_string(), "1.0.0");

        // Two components default the patch level to zero
        let version = v("v1.0");
        assert!(!version.is_sem_ver());
        assert_eq!(version.to_string(), "1.0.0");

        let version = v("MyPlugin build 10.2.3 (nightly)");
        assert_eq!((version.major(), version.minor(), version.patch()), (10, 2, 3));
    }

    #[test]
    fn test_no_version_found() {
        assert_eq!(
            Version::parse("no number"),
            Err(VersionError::NoVersionFound("no number".to_string()))
        );
        assert!(Version::try_parse("no number").is_none());
        assert!(Version::try_parse("").is_none());
    }

    #[test]
    fn test_precedence_strict() {
        assert!(v("1.0.0").is_less_than(&v("2.0.0")));
        assert!(v("2.0.0").is_less_than(&v("2.1.0")));
        assert!(v("2.1.0").is_less_than(&v("2.1.1")));

        assert!(v("1.0.0-alpha").is_less_than(&v("1.0.0-alpha.1")));
        assert!(v("1.0.0-alpha.1").is_less_than(&v("1.0.0-alpha.beta")));
        assert!(v("1.0.0-alpha.beta").is_less_than(&v("1.0.0-beta")));
        assert!(v("1.0.0-beta").is_less_than(&v("1.0.0-beta.2")));
        assert!(v("1.0.0-beta.2").is_less_than(&v("1.0.0-beta.11")));
        assert!(v("1.0.0-beta.11").is_less_than(&v("1.0.0-rc.1")));
        assert!(v("1.0.0-rc.1").is_less_than(&v("1.0.0")));

        assert!(v("1.0.0-alpha-alpha.1").is_less_than(&v("1.0.0-alpha-alpha.1-test")));
        assert!(v("1.0.0-alpha-alpha.1").is_greater_than(&v("1.0.0-alpha-alpha.1-0")));
    }

    #[test]
    fn test_precedence_loose() {
        assert!(v("v1.1.1").is_less_than(&v("v1.1.2")));
        assert!(!v("v1.1.1").is_greater_than(&v("v1.1.2")));

        // A loose operand degrades the comparison to the numeric triple,
        // so pre-release semantics no longer apply
        assert!(!v("v1.0.0").is_less_than(&v("1.0.0-alpha")));
        assert!(!v("v1.0.0").is_greater_than(&v("1.0.0-alpha")));
    }

    #[test]
    fn test_equality() {
        assert_eq!(v("1.2.3"), v("1.2.3"));
        assert_eq!(v("1.0.0-alpha"), v("1.0.0-alpha"));
        assert_eq!(v("1.0.0-alpha-alpha.1"), v("1.0.0-alpha.1-alpha"));
        assert_eq!(v("v1.0"), v("1.0.0"));

        assert_ne!(v("v1.1.1"), v("2.0.0"));
    }

    #[test]
    fn test_updates() {
        assert!(v("1.0.0").is_update_for(&v("0.1.0")));
        assert!(v("1.1.0").is_update_for(&v("1.0.0")));
        assert!(v("2.1.0").is_update_for(&v("1.1.0")));

        assert!(!v("1.0.0").is_update_for(&v("2.0.0")));

        assert!(v("1.1.0").is_update_compatible_for(&v("1.0.0")));

        assert!(!v("1.0.0").is_update_compatible_for(&v("0.1.0")));
        assert!(!v("2.1.0").is_update_compatible_for(&v("1.1.0")));
    }

    #[test]
    fn test_from_str() {
        let version: Version = "v2.4".parse().unwrap();
        assert_eq!(version.to_string(), "2.4.0");
        assert!("nothing here".parse::<Version>().is_err());
    }
}
