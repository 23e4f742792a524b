//! Domain logic - version parsing, ordering and bumping, independent of git

pub mod version;
pub mod version_set;

pub use version::{RenderStyle, Version, VersionBump, VersionParser, DEFAULT_PREFIX};
pub use version_set::{EmptyPolicy, SkippedTag, VersionSet};
