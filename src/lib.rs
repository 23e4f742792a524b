pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use domain::{Version, VersionBump, VersionParser, VersionSet};
pub use error::{BumpError, Result};
