//! Card schema versions.
//!
//! A version is a `major.minor` pair compared numerically component by
//! component, so `1.10` sorts after `1.9`. Versions travel on the wire as
//! strings (`"version": "1.5"`).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VersionError;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)$").unwrap());

/// A `major.minor` card schema version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

pub const V1_0: Version = Version::new(1, 0);
pub const V1_1: Version = Version::new(1, 1);
pub const V1_2: Version = Version::new(1, 2);
pub const V1_3: Version = Version::new(1, 3);
pub const V1_4: Version = Version::new(1, 4);
pub const V1_5: Version = Version::new(1, 5);
pub const V1_6: Version = Version::new(1, 6);

/// Every schema version with a bundled schema file, oldest first.
pub const KNOWN_VERSIONS: [Version; 7] = [V1_0, V1_1, V1_2, V1_3, V1_4, V1_5, V1_6];

impl Version {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// The newest version this crate ships a schema for.
    pub const fn latest() -> Self {
        V1_6
    }
}

impl Default for Version {
    fn default() -> Self {
        V1_0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VersionError {
            input: s.to_string(),
        };
        let caps = VERSION_PATTERN.captures(s.trim()).ok_or_else(invalid)?;
        let major = caps[1].parse::<u16>().map_err(|_| invalid())?;
        let minor = caps[2].parse::<u16>().map_err(|_| invalid())?;
        Ok(Self { major, minor })
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a version string such as \"1.5\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Version, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
