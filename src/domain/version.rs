use crate::error::{CommitKitError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from a string (e.g., "v1.2.3" or "1.2.3" -> Version(1,2,3))
    pub fn parse(text: &str) -> Result<Self> {
        let clean = text.trim().trim_start_matches('v').trim_start_matches('V');

        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() != 3 {
            return Err(CommitKitError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            )));
        }

        let major = parts[0].parse::<u32>().map_err(|_| {
            CommitKitError::version(format!("Invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse::<u32>().map_err(|_| {
            CommitKitError::version(format!("Invalid minor version: {}", parts[1]))
        })?;
        let patch = parts[2].parse::<u32>().map_err(|_| {
            CommitKitError::version(format!("Invalid patch version: {}", parts[2]))
        })?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Apply an increment triple.
    ///
    /// The most significant non-zero component wins and every lower component
    /// resets to 0. A zero bump returns the version unchanged.
    pub fn bump(&self, bump: &VersionBump) -> Result<Self> {
        let overflow = || {
            CommitKitError::version(format!("Cannot bump {} by {}", self, bump))
        };

        if bump.major != 0 {
            let major = self.major.checked_add(bump.major).ok_or_else(overflow)?;
            Ok(Version::new(major, 0, 0))
        } else if bump.minor != 0 {
            let minor = self.minor.checked_add(bump.minor).ok_or_else(overflow)?;
            Ok(Version::new(self.major, minor, 0))
        } else {
            let patch = self.patch.checked_add(bump.patch).ok_or_else(overflow)?;
            Ok(Version::new(self.major, self.minor, patch))
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Requested increment for each version component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionBump {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl VersionBump {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        VersionBump {
            major,
            minor,
            patch,
        }
    }

    pub fn major() -> Self {
        Self::new(1, 0, 0)
    }

    pub fn minor() -> Self {
        Self::new(0, 1, 0)
    }

    pub fn patch() -> Self {
        Self::new(0, 0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("v1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_without_v() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("v1.2.3.4").is_err());
        assert!(Version::parse("1.x.3").is_err());
        assert!(Version::parse("1.-2.3").is_err());
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(&VersionBump::major()).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(&VersionBump::minor()).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(&VersionBump::patch()).unwrap(), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_multi_step() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(&VersionBump::new(2, 5, 7)).unwrap(), Version::new(3, 0, 0));
        assert_eq!(v.bump(&VersionBump::new(0, 3, 9)).unwrap(), Version::new(1, 5, 0));
        assert_eq!(v.bump(&VersionBump::new(0, 0, 4)).unwrap(), Version::new(1, 2, 7));
    }

    #[test]
    fn test_version_bump_zero_is_identity() {
        let v = Version::new(4, 5, 6);
        assert_eq!(v.bump(&VersionBump::default()).unwrap(), v);
    }

    #[test]
    fn test_version_bump_reset_invariants() {
        for major in 0..3 {
            for minor in 0..3 {
                for patch in 0..3 {
                    let v = Version::new(major, minor, patch);
                    let m = v.bump(&VersionBump::new(1, 1, 1)).unwrap();
                    assert_eq!((m.minor, m.patch), (0, 0));
                    let n = v.bump(&VersionBump::new(0, 1, 1)).unwrap();
                    assert_eq!((n.major, n.patch), (major, 0));
                }
            }
        }
    }

    #[test]
    fn test_version_bump_overflow_is_error() {
        let err = Version::new(1, 0, 0)
            .bump(&VersionBump::new(u32::MAX, 0, 0))
            .unwrap_err();
        assert!(matches!(err, CommitKitError::Version(_)));

        let v = Version::new(0, 0, u32::MAX);
        assert!(v.bump(&VersionBump::patch()).is_err());
        assert_eq!(v.bump(&VersionBump::minor()).unwrap(), Version::new(0, 1, 0));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }
}
