//! Semantic version parsing, formatting, precedence and bumping.
//!
//! Versions follow `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`. Build metadata
//! is kept on the value but never takes part in precedence.

use crate::error::{CodecError, Result};
use crate::escape::quote;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

static SEMVER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    )
    .expect("semver pattern must compile")
});

/// Semantic version representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
    pub build: Option<String>,
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Create a new release version without metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Attach a pre-release identifier (no validation is done)
    pub fn with_prerelease(mut self, prerelease: impl Into<String>) -> Self {
        self.prerelease = Some(prerelease.into());
        self
    }

    /// Attach build metadata (no validation is done)
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }

    /// Parse a version string, e.g. "1.2.3-beta.1+sha.5114f85"
    pub fn parse(input: &str) -> Result<Self> {
        parse(input)
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Compare by semver precedence.
    ///
    /// Major, minor and patch are compared numerically. With equal numbers a
    /// release outranks any pre-release, and two pre-releases are compared as
    /// plain strings. Build metadata is ignored.
    pub fn precedence(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }

    /// Bump version according to bump type.
    ///
    /// The result never carries pre-release or build metadata.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow = || {
            CodecError::value(format!(
                "Cannot increment the {} number of {}: the value is too large",
                bump_type,
                quote(&self.to_string())
            ))
        };

        let bumped = match bump_type {
            VersionBump::Major => {
                Version::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            VersionBump::Minor => Version::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            VersionBump::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(bumped)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(de::Error::custom)
    }
}

impl TryFrom<&Version> for semver::Version {
    type Error = CodecError;

    fn try_from(version: &Version) -> Result<Self> {
        let s = version.to_string();
        semver::Version::parse(&s).map_err(|e| {
            CodecError::interop(format!("{} is rejected by the semver crate: {}", quote(&s), e))
        })
    }
}

impl From<semver::Version> for Version {
    fn from(version: semver::Version) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Version {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            prerelease: non_empty(version.pre.as_str()),
            build: non_empty(version.build.as_str()),
        }
    }
}

impl VersionBump {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionBump {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            _ => Err(CodecError::syntax(format!(
                "{} is not a valid version part, expected major, minor or patch",
                quote(s)
            ))),
        }
    }
}

/// Parses a semver string.
///
/// # Errors
/// Returns [`CodecError::Syntax`] quoting the input when it does not match
/// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` or a number does not fit in `u64`.
///
/// Leading zeros in the numbers are accepted and dropped ("01.2.3" formats
/// back as "1.2.3").
///
/// # Example
/// ```
/// use roman_semver::version::{parse, Version};
/// let v = parse("1.2.3-45+67").unwrap();
/// assert_eq!(v, Version::new(1, 2, 3).with_prerelease("45").with_build("67"));
/// ```
pub fn parse(input: &str) -> Result<Version> {
    let invalid = || CodecError::syntax(format!("{} is not a valid semver string", quote(input)));

    let captures = SEMVER_PATTERN.captures(input).ok_or_else(invalid)?;
    let number = |i: usize| captures[i].parse::<u64>().map_err(|_| invalid());

    Ok(Version {
        major: number(1)?,
        minor: number(2)?,
        patch: number(3)?,
        prerelease: captures.get(4).map(|m| m.as_str().to_string()),
        build: captures.get(5).map(|m| m.as_str().to_string()),
    })
}

/// Formats a version back into its string form. The inverse of [`parse`].
pub fn stringify(version: &Version) -> String {
    version.to_string()
}

/// Compares two version strings by precedence.
///
/// # Errors
/// Propagates the parse error of the first invalid argument.
pub fn compare(v1: &str, v2: &str) -> Result<Ordering> {
    let a = parse(v1)?;
    let b = parse(v2)?;
    Ok(a.precedence(&b))
}

/// [`compare`] rendered as `-1`, `0` or `1`.
pub fn compare_i8(v1: &str, v2: &str) -> Result<i8> {
    compare(v1, v2).map(|ordering| ordering as i8)
}

/// Computes the next version string, dropping any metadata.
///
/// ```
/// use roman_semver::version::{next, VersionBump};
/// assert_eq!(next("1.2.3-rc+1", VersionBump::Minor).unwrap(), "1.3.0");
/// ```
pub fn next(v: &str, power: VersionBump) -> Result<String> {
    Ok(parse(v)?.bump(power)?.to_string())
}

/// Whether [`parse`] accepts the string.
pub fn valid(v: &str) -> bool {
    parse(v).is_ok()
}
