//! Host plugin boundary: the one read operation the version core needs

use plugver_semver::{SemVer, Version, VersionError};

/// Anything that declares a version string.
///
/// This is the whole boundary to the hosting application: a single read.
/// The string is treated as opaque input; the host is never queried
/// further or mutated.
pub trait VersionSource {
    /// The raw version string as declared by the host, unparsed.
    fn declared_version(&self) -> &str;
}

/// Owned descriptor for a hosted plugin.
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    name: String,
    version: String,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        PluginDescriptor {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl VersionSource for PluginDescriptor {
    fn declared_version(&self) -> &str {
        &self.version
    }
}

/// Strictly parse the version a source declares.
pub fn sem_ver_of(source: &dyn VersionSource) -> Result<SemVer, VersionError> {
    SemVer::parse(source.declared_version())
}

/// Best-effort parse of the version a source declares.
pub fn version_of(source: &dyn VersionSource) -> Result<Version, VersionError> {
    Version::parse(source.declared_version())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePlugin {
        version: &'static str,
    }

    impl VersionSource for FakePlugin {
        fn declared_version(&self) -> &str {
            self.version
        }
    }

    #[test]
    fn test_descriptor_round_trip() {
        let descriptor = PluginDescriptor::new("Fake plugin", "1.0.0");
        assert_eq!(descriptor.name(), "Fake plugin");
        assert_eq!(descriptor.declared_version(), "1.0.0");
        assert_eq!(sem_ver_of(&descriptor).unwrap().to_string(), "1.0.0");
        assert_eq!(version_of(&descriptor).unwrap().to_string(), "1.0.0");
    }

    #[test]
    fn test_non_compliant_host_version() {
        let plugin = FakePlugin { version: "v1.0" };
        assert!(sem_ver_of(&plugin).is_err());
        assert_eq!(version_of(&plugin).unwrap().to_string(), "1.0.0");
    }

    #[test]
    fn test_no_version_at_all() {
        let plugin = FakePlugin { version: "snapshot" };
        assert_eq!(
            version_of(&plugin),
            Err(VersionError::NoVersionFound("snapshot".to_string()))
        );
    }
}
