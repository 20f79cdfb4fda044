//! Strict Semantic Versioning value type

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator::NumberAwareComparator;
use crate::error::VersionError;
use crate::identifier::{validate_build_metadata, validate_pre_release_tags};
use crate::parser;

/// A parsed `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version.
///
/// Immutable after construction: equality and precedence are pure functions
/// of the stored fields, and instances can be shared freely across threads.
///
/// The pre-release section is stored as a flat list of tags. Composite
/// tokens are split on `-` at construction time, so `1.2.2-alpha.1-alpha`
/// holds the tags `["alpha.1", "alpha"]`.
#[derive(Debug, Clone)]
pub struct SemVer {
    /// Major version number
    pub major: u64,
    /// Minor version number
    pub minor: u64,
    /// Patch level
    pub patch: u64,
    /// Pre-release tags, possibly empty, in order of appearance
    pre_release: Vec<String>,
    /// Build metadata, empty when absent
    build_metadata: String,
}

impl SemVer {
    /// Build a stable version without pre-release tags or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: String::new(),
        }
    }

    /// Build a version carrying a pre-release section, e.g. `"alpha.1"`.
    pub fn with_pre_release(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: &str,
    ) -> Result<Self, VersionError> {
        Self::with_parts(major, minor, patch, pre_release, "")
    }

    /// Build a version from all five fields. The pre-release token is
    /// validated and split into the stored tag list; the build metadata
    /// token is validated as-is. Empty strings mean "absent".
    pub fn with_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: &str,
        build_metadata: &str,
    ) -> Result<Self, VersionError> {
        Ok(SemVer {
            major,
            minor,
            patch,
            pre_release: validate_pre_release_tags(&[pre_release])?,
            build_metadata: validate_build_metadata(build_metadata)?,
        })
    }

    /// Parse a version string against the strict grammar.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let parts = parser::parse_strict(version)?;
        Ok(SemVer {
            major: parts.major,
            minor: parts.minor,
            patch: parts.patch,
            pre_release: validate_pre_release_tags(&[parts.pre_release.unwrap_or_default()])?,
            build_metadata: validate_build_metadata(&parts.build_metadata.unwrap_or_default())?,
        })
    }

    /// Non-failing variant of [`SemVer::parse`].
    pub fn try_parse(version: &str) -> Option<Self> {
        Self::parse(version).ok()
    }

    /// Check whether a string matches the strict grammar.
    pub fn is_well_formed(version: &str) -> bool {
        parser::is_well_formed(version)
    }

    /// Pre-release tags in stored order.
    pub fn pre_release_tags(&self) -> &[String] {
        &self.pre_release
    }

    /// Build metadata, empty when absent.
    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    /// A version is stable once the major number is positive and no
    /// pre-release tags remain.
    pub fn is_stable(&self) -> bool {
        self.major > 0 && self.pre_release.is_empty()
    }

    /// Exact membership check against the stored tag list.
    pub fn has_pre_release_tag(&self, tag: &str) -> bool {
        self.pre_release.iter().any(|t| t == tag)
    }

    /// Exact equality check against the build metadata string.
    pub fn has_build_meta_tag(&self, tag: &str) -> bool {
        self.build_metadata == tag
    }

    /// Rank this version against another. Build metadata never
    /// participates in precedence.
    ///
    /// Major, minor and patch compare numerically. On a full tie the
    /// pre-release tag lists decide: a stable release outranks any
    /// pre-release of the same numbers; two non-empty lists are each
    /// sorted with [`NumberAwareComparator`], equal-length lists are
    /// decided by their first sorted elements only, and lists of unequal
    /// length compare element-wise with the longer list winning ties.
    pub fn precedence(&self, other: &SemVer) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.compare_pre_release(other))
    }

    fn compare_pre_release(&self, other: &SemVer) -> Ordering {
        match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
            (true, true) => return Ordering::Equal,
            // A stable release outranks any pre-release of the same numbers
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        let mut own = self.pre_release.clone();
        own.sort_by(|a, b| NumberAwareComparator::compare(a, b));
        let mut theirs = other.pre_release.clone();
        theirs.sort_by(|a, b| NumberAwareComparator::compare(a, b));

        if own.len() == theirs.len() {
            // Equal-length lists are decided by the first sorted pair alone
            return NumberAwareComparator::compare(&own[0], &theirs[0]);
        }

        for (a, b) in own.iter().zip(theirs.iter()) {
            let cmp = NumberAwareComparator::compare(a, b);
            if cmp != Ordering::Equal {
                return cmp;
            }
        }

        // All shared tags tie: the longer list outranks the shorter
        own.len().cmp(&theirs.len())
    }

    pub fn is_greater_than(&self, other: &SemVer) -> bool {
        self.precedence(other) == Ordering::Greater
    }

    pub fn is_less_than(&self, other: &SemVer) -> bool {
        self.precedence(other) == Ordering::Less
    }

    /// True when this version is newer than `other`.
    pub fn is_update_for(&self, other: &SemVer) -> bool {
        self.is_greater_than(other)
    }

    /// True when this version is newer than `other` and keeps its major
    /// version number.
    pub fn is_update_compatible_for(&self, other: &SemVer) -> bool {
        self.is_update_for(other) && self.major == other.major
    }
}

impl fmt::Display for SemVer {
    /// Canonical rendering: `M.m.p`, one `-tag` per stored pre-release tag,
    /// then `+metadata` when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for tag in &self.pre_release {
            write!(f, "-{}", tag)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}

impl PartialEq for SemVer {
    /// Equality is deliberately weaker than `precedence() == Equal`: the
    /// numbers and build metadata must match exactly, but the pre-release
    /// tag lists only need a non-empty intersection (or both empty). With
    /// tags split on `-` at construction, `1.0.0-alpha-alpha.1` and
    /// `1.0.0-alpha.1-alpha` compare equal. No `Ord` impl is provided for
    /// this reason; use [`SemVer::precedence`] to rank versions.
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release_intersects(other)
            && self.build_metadata == other.build_metadata
    }
}

impl SemVer {
    fn pre_release_intersects(&self, other: &SemVer) -> bool {
        if self.pre_release.is_empty() && other.pre_release.is_empty() {
            return true;
        }
        self.pre_release.iter().any(|tag| other.pre_release.contains(tag))
    }
}

impl FromStr for SemVer {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemVer::parse(s)
    }
}
