//! Plumbing around `plugver-semver`: the host descriptor boundary and
//! update-check glue.
//!
//! The core value types never log and never touch the host; everything
//! host-facing lives here.

mod descriptor;
mod update;

pub use descriptor::{sem_ver_of, version_of, PluginDescriptor, VersionSource};
pub use update::{check_update, UpdateStatus};
