//! Command-line interface definition

pub mod orchestration;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::VersionBump;
use orchestration::Action;

#[derive(Parser, Debug)]
#[command(
    name = "git-bump",
    version,
    about = "A tool for managing versions in git tags"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (default: ./gitbump.toml, then ~/.config/.gitbump.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Preview the tag without creating it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Create the tag without asking for confirmation
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print current version
    Cur,

    /// Print all versions
    List,

    /// Print next version
    Next {
        #[command(subcommand)]
        level: Option<Level>,
    },

    /// Tag with next version
    Tag {
        #[command(subcommand)]
        level: Option<Level>,
    },
}

/// Which part of the version to bump
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Next major version
    Major,
    /// Next minor version
    Minor,
    /// Next patch version
    Patch,
}

impl From<Level> for VersionBump {
    fn from(level: Level) -> Self {
        match level {
            Level::Major => VersionBump::Major,
            Level::Minor => VersionBump::Minor,
            Level::Patch => VersionBump::Patch,
        }
    }
}

impl Command {
    /// The workflow action this command asks for
    pub fn action(&self) -> Action {
        let bump = |level: &Option<Level>| level.map(VersionBump::from).unwrap_or_default();
        match self {
            Command::Cur => Action::Current,
            Command::List => Action::List,
            Command::Next { level } => Action::Next(bump(level)),
            Command::Tag { level } => Action::Tag(bump(level)),
        }
    }
}
