//! Update classification glue around the version core

use log::{info, warn};
use plugver_semver::{Version, VersionError};

use crate::descriptor::VersionSource;

/// Outcome of comparing a candidate release against an installed version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The candidate is not newer than what is installed.
    UpToDate,
    /// The candidate is newer and keeps the same major version.
    Compatible,
    /// The candidate is newer but changes the major version.
    Breaking,
}

/// Compare the version a host declares against a candidate release string.
///
/// Both sides go through the relaxed parser, so non-compliant strings
/// still classify as long as they carry a number. Results are reported
/// through the `log` facade; install a logger once at startup to see them.
pub fn check_update(
    source: &dyn VersionSource,
    candidate: &str,
) -> Result<UpdateStatus, VersionError> {
    let installed = Version::parse(source.declared_version())?;
    let available = Version::parse(candidate)?;

    let status = classify(&installed, &available);
    match status {
        UpdateStatus::UpToDate => info!("{} is up to date", installed),
        UpdateStatus::Compatible => info!("update available: {} -> {}", installed, available),
        UpdateStatus::Breaking => warn!("major update available: {} -> {}", installed, available),
    }

    Ok(status)
}

fn classify(installed: &Version, available: &Version) -> UpdateStatus {
    if !available.is_update_for(installed) {
        UpdateStatus::UpToDate
    } else if available.is_update_compatible_for(installed) {
        UpdateStatus::Compatible
    } else {
        UpdateStatus::Breaking
    }
}
