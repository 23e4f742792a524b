//! Ordered collections of versions built from raw tag names
//!
//! A [`VersionSet`] is built once per invocation from whatever the tag source
//! returned. Tags that are not versions are dropped on the way in, so the
//! set only ever holds non-zero versions, sorted ascending.

use std::io::BufRead;
use std::slice;

use tracing::debug;

use crate::domain::version::{Version, VersionParser, DEFAULT_PREFIX};
use crate::error::{BumpError, Result};

/// What to do when no tag parses as a version
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Report [`BumpError::NoVersionsFound`]
    #[default]
    Fail,
    /// Start from an all-zero version with the given prefix
    Bootstrap { prefix: String },
}

impl EmptyPolicy {
    pub fn bootstrap() -> Self {
        EmptyPolicy::Bootstrap {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// A tag that matched the version grammar but could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTag {
    pub tag: String,
    pub reason: String,
}

/// Versions sorted ascending by [`Version::cmp_precedence`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSet {
    versions: Vec<Version>,
    skipped: Vec<SkippedTag>,
}

impl VersionSet {
    /// Parse every candidate and keep the ones that are versions.
    ///
    /// Malformed and zero candidates are dropped silently. Candidates with a
    /// number too large to represent are dropped too, but remembered in
    /// [`VersionSet::skipped`].
    pub fn parse_all<I, S>(parser: &VersionParser, raws: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = VersionSet::default();
        for raw in raws {
            set.push_candidate(parser, raw.as_ref());
        }
        set.sort();
        set
    }

    /// Parse one candidate per line from `reader`.
    ///
    /// Only a failure to read from `reader` is an error. Lines that are not
    /// valid UTF-8 are read lossily and usually fail to parse.
    pub fn read<R: BufRead>(parser: &VersionParser, reader: R) -> Result<Self> {
        let mut set = VersionSet::default();
        for line in reader.split(b'\n') {
            let line = line?;
            set.push_candidate(parser, &String::from_utf8_lossy(&line));
        }
        set.sort();
        Ok(set)
    }

    /// Build a set from already parsed versions, dropping zero versions
    pub fn from_versions(versions: impl IntoIterator<Item = Version>) -> Self {
        let mut set = VersionSet {
            versions: versions.into_iter().filter(|v| !v.is_zero()).collect(),
            skipped: Vec::new(),
        };
        set.sort();
        set
    }

    fn push_candidate(&mut self, parser: &VersionParser, raw: &str) {
        match parser.parse(raw) {
            Ok(Some(version)) => self.versions.push(version),
            Ok(None) => {}
            Err(e) => {
                debug!(tag = raw, error = %e, "skipping tag");
                self.skipped.push(SkippedTag {
                    tag: raw.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    fn sort(&mut self) {
        // stable: equal versions keep the order they came in
        self.versions.sort_by(Version::cmp_precedence);
        debug!(count = self.versions.len(), "sorted versions");
    }

    /// The highest version, if any
    pub fn current(&self) -> Option<&Version> {
        self.versions.last()
    }

    /// The highest version, or what `policy` says to use when there is none
    pub fn current_or(&self, policy: &EmptyPolicy) -> Result<Version> {
        match (self.current(), policy) {
            (Some(version), _) => Ok(version.clone()),
            (None, EmptyPolicy::Fail) => Err(BumpError::NoVersionsFound),
            (None, EmptyPolicy::Bootstrap { prefix }) => {
                debug!(prefix = prefix.as_str(), "no versions, bootstrapping");
                Ok(Version::new(prefix.as_str(), 0, 0, 0))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Version> {
        self.versions.iter()
    }

    pub fn as_slice(&self) -> &[Version] {
        &self.versions
    }

    /// Tags dropped because a number was out of range
    pub fn skipped(&self) -> &[SkippedTag] {
        &self.skipped
    }

    pub fn into_vec(self) -> Vec<Version> {
        self.versions
    }
}

impl<'a> IntoIterator for &'a VersionSet {
    type Item = &'a Version;
    type IntoIter = slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
