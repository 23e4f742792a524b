//! Main workflow orchestration logic
//!
//! Each CLI command reduces to reading the tags into a [VersionSet], picking
//! the current version and optionally bumping it. This module does that
//! without printing anything, so the workflow can be driven against a
//! [MockRepository](crate::git::MockRepository) in tests.

use anyhow::Result;
use tracing::info;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{Version, VersionBump, VersionSet};
use crate::error::BumpError;
use crate::git::{Repository, TagKind};

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the current version
    Current,
    /// Print all versions, ascending
    List,
    /// Print the next version
    Next(VersionBump),
    /// Create a tag for the next version
    Tag(VersionBump),
}

/// Options that change how a workflow runs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowOptions {
    /// Preview mode - don't create tags
    pub dry_run: bool,

    /// Skip the confirmation before tagging
    pub assume_yes: bool,
}

/// What the workflow did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Current(String),
    List(Vec<String>),
    Next(String),
    Tagged { tag: String, kind: TagKind },
    DryRun { current: String, tag: String },
    Cancelled { tag: String },
}

/// Result of a successful workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub outcome: Outcome,

    /// Non-fatal issues to show the user
    pub warnings: Vec<BoundaryWarning>,
}

/// Run one action against a repository
///
/// # Arguments
///
/// * `repo` - Where tags are read from and written to
/// * `config` - Parsing, rendering and tagging settings
/// * `action` - What to do
/// * `options` - Dry run and confirmation settings
/// * `confirm` - Asked with the tag name before a tag is created, unless
///   `options.assume_yes` is set
pub fn run<R, F>(
    repo: &R,
    config: &Config,
    action: Action,
    options: &WorkflowOptions,
    confirm: F,
) -> Result<WorkflowResult>
where
    R: Repository + ?Sized,
    F: FnOnce(&str) -> Result<bool>,
{
    let parser = config.parser()?;
    let style = config.versions.render;

    let tags = repo.list_tags()?;
    let set = VersionSet::parse_all(&parser, &tags);
    info!(tags = tags.len(), versions = set.len(), "read version tags");

    let mut warnings: Vec<BoundaryWarning> = set
        .skipped()
        .iter()
        .map(|skipped| BoundaryWarning::UnparsableTag {
            tag: skipped.tag.clone(),
            reason: skipped.reason.clone(),
        })
        .collect();

    let outcome = match action {
        Action::List => Outcome::List(set.iter().map(|v| v.render(style)).collect()),
        Action::Current => {
            Outcome::Current(current_version(&set, config, &mut warnings)?.render(style))
        }
        Action::Next(bump) => {
            let current = current_version(&set, config, &mut warnings)?;
            Outcome::Next(current.bump(bump)?.render(style))
        }
        Action::Tag(bump) => {
            let current = current_version(&set, config, &mut warnings)?;
            let tag = current.bump(bump)?.render(style);

            if options.dry_run {
                Outcome::DryRun {
                    current: current.render(style),
                    tag,
                }
            } else if repo.is_empty()? {
                return Err(BumpError::EmptyRepository.into());
            } else if !options.assume_yes && !confirm(&tag)? {
                Outcome::Cancelled { tag }
            } else {
                let message = config.tag_message(&tag);
                let kind = repo.create_tag(&tag, &message, config.tag.sign)?;
                info!(tag = tag.as_str(), ?kind, "created tag");

                if config.tag.sign && kind == TagKind::Annotated {
                    warnings.push(BoundaryWarning::SigningFailed { tag: tag.clone() });
                }
                Outcome::Tagged { tag, kind }
            }
        }
    };

    Ok(WorkflowResult { outcome, warnings })
}

/// The highest version, or the configured fallback when there is none
fn current_version(
    set: &VersionSet,
    config: &Config,
    warnings: &mut Vec<BoundaryWarning>,
) -> Result<Version> {
    let current = set.current_or(&config.empty_policy())?;
    if set.is_empty() {
        warnings.push(BoundaryWarning::BootstrappedVersion {
            version: current.render(config.versions.render),
        });
    }
    Ok(current)
}
