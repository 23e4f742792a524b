use crate::error::{BumpError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

/// Prefix recognized when no other prefixes are configured.
pub const DEFAULT_PREFIX: &str = "v";

/// A version parsed from a tag name, e.g. `v1.2.3-rc1`.
///
/// Values are never modified after construction. Bumps and
/// [`Version::with_extra`] return a new `Version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    prefix: String,
    major: u64,
    minor: u64,
    patch: u64,
    extra: String,
}

impl Version {
    /// Create a new version without an extra suffix
    pub fn new(prefix: impl Into<String>, major: u64, minor: u64, patch: u64) -> Self {
        Version {
            prefix: prefix.into(),
            major,
            minor,
            patch,
            extra: String::new(),
        }
    }

    /// Return a copy of this version carrying `extra` as its suffix
    pub fn with_extra(&self, extra: impl Into<String>) -> Self {
        Version {
            extra: extra.into(),
            ..self.clone()
        }
    }

    /// Parse a tag name with the default parser (recognizes the `v` prefix).
    ///
    /// See [`VersionParser::parse`].
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        VersionParser::shared().parse(raw)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Free-text suffix after the `-`; empty when there is none
    pub fn extra(&self) -> &str {
        &self.extra
    }

    /// A version whose numeric fields are all zero counts as absent.
    pub fn is_zero(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch == 0
    }

    /// Compare two versions by `(major, minor, patch, extra)`.
    ///
    /// The prefix takes no part in the comparison and `extra` compares
    /// lexically, so an empty suffix sorts before any other suffix.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.extra.cmp(&other.extra))
    }

    /// Bump version according to bump type
    ///
    /// The prefix is kept, the extra suffix is dropped and every field below
    /// the bumped one is reset to zero.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let next = match bump_type {
            VersionBump::Major => Version::new(&self.prefix, increment(self.major, "major")?, 0, 0),
            VersionBump::Minor => Version::new(
                &self.prefix,
                self.major,
                increment(self.minor, "minor")?,
                0,
            ),
            VersionBump::Patch => Version::new(
                &self.prefix,
                self.major,
                self.minor,
                increment(self.patch, "patch")?,
            ),
        };
        Ok(next)
    }

    /// The default bump, which is a patch bump
    pub fn bump_default(&self) -> Result<Self> {
        self.bump(VersionBump::default())
    }

    pub fn bump_patch(&self) -> Result<Self> {
        self.bump(VersionBump::Patch)
    }

    pub fn bump_minor(&self) -> Result<Self> {
        self.bump(VersionBump::Minor)
    }

    pub fn bump_major(&self) -> Result<Self> {
        self.bump(VersionBump::Major)
    }

    /// Render the version in the given style
    pub fn render(&self, style: RenderStyle) -> String {
        let mut out = format!("{}{}.{}", self.prefix, self.major, self.minor);
        if style == RenderStyle::Full || self.patch > 0 {
            out.push_str(&format!(".{}", self.patch));
        }
        if !self.extra.is_empty() {
            out.push('-');
            out.push_str(&self.extra);
        }
        out
    }
}

fn increment(value: u64, field: &'static str) -> Result<u64> {
    value.checked_add(1).ok_or(BumpError::Overflow { field })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderStyle::Full))
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionBump {
    Major,
    Minor,
    #[default]
    Patch,
}

impl FromStr for VersionBump {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(BumpError::config(format!(
                "Unknown bump level '{}', expected major, minor or patch",
                other
            ))),
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// How a version is written back out as a tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Always write all three numbers: `v1.2.0`
    #[default]
    Full,
    /// Leave out a zero patch number: `v1.2`
    Short,
}

/// Turns tag names into [`Version`]s.
///
/// Grammar: `[PREFIX]MAJOR.MINOR[.PATCH][-EXTRA]`, matched from the start of
/// the tag name. `PREFIX` is one of the recognized literal prefixes. Text
/// after the version that does not start with `-` is ignored, so
/// `v1.1.0+build.7` reads as `v1.1.0`.
#[derive(Debug, Clone)]
pub struct VersionParser {
    re: Regex,
}

impl VersionParser {
    /// Build a parser recognizing the given literal prefixes.
    ///
    /// Empty entries are ignored. A prefix ending in a digit would be
    /// indistinguishable from the major number and is rejected.
    pub fn new<S: AsRef<str>>(prefixes: &[S]) -> Result<Self> {
        let mut literals: Vec<&str> = prefixes
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| !p.is_empty())
            .collect();

        if let Some(bad) = literals
            .iter()
            .find(|p| p.ends_with(|c: char| c.is_ascii_digit()))
        {
            return Err(BumpError::config(format!(
                "Version prefix '{}' must not end with a digit",
                bad
            )));
        }

        // Longest first so that "ver" wins over "v".
        literals.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        literals.dedup();

        let prefix_group = if literals.is_empty() {
            String::new()
        } else {
            let alternatives: Vec<String> = literals.iter().map(|p| regex::escape(p)).collect();
            format!("(?P<prefix>{})?", alternatives.join("|"))
        };

        let pattern = format!(
            r"^{}(?P<major>[0-9]+)\.(?P<minor>[0-9]+)(?:\.(?P<patch>[0-9]+))?(?:-(?P<extra>.*))?",
            prefix_group
        );
        let re = Regex::new(&pattern)
            .map_err(|e| BumpError::config(format!("Invalid version prefix: {}", e)))?;

        Ok(VersionParser { re })
    }

    fn shared() -> &'static VersionParser {
        static PARSER: OnceLock<VersionParser> = OnceLock::new();
        PARSER.get_or_init(VersionParser::default)
    }

    /// Parse a single tag name.
    ///
    /// # Returns
    /// * `Ok(Some(Version))` - The tag is a non-zero version
    /// * `Ok(None)` - The tag does not match the grammar, or all numbers are zero
    /// * `Err(BumpError::InvalidNumber)` - A number does not fit into a `u64`
    pub fn parse(&self, raw: &str) -> Result<Option<Version>> {
        let raw = raw.trim_start().trim_end_matches(&['\r', '\n'][..]);
        let Some(caps) = self.re.captures(raw) else {
            debug!(tag = raw, "not a version tag");
            return Ok(None);
        };

        let number = |field: &'static str| -> Result<u64> {
            match caps.name(field) {
                None => Ok(0),
                Some(m) => m.as_str().parse::<u64>().map_err(|_| BumpError::InvalidNumber {
                    field,
                    value: m.as_str().to_string(),
                }),
            }
        };

        let version = Version {
            prefix: caps
                .name("prefix")
                .map_or("", |m| m.as_str())
                .to_string(),
            major: number("major")?,
            minor: number("minor")?,
            patch: number("patch")?,
            extra: caps.name("extra").map_or("", |m| m.as_str()).to_string(),
        };

        if version.is_zero() {
            debug!(tag = raw, "ignoring zero version");
            return Ok(None);
        }

        Ok(Some(version))
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        VersionParser::new(&[DEFAULT_PREFIX]).expect("default version grammar is valid")
    }
}
