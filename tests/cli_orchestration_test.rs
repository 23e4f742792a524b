use git_bump::boundary::BoundaryWarning;
use git_bump::cli::orchestration::{run, Action, Outcome, WorkflowOptions, WorkflowResult};
use git_bump::config::{Config, OnEmpty};
use git_bump::domain::{RenderStyle, VersionBump};
use git_bump::error::BumpError;
use git_bump::git::{MockRepository, TagKind};

fn run_action(repo: &MockRepository, config: &Config, action: Action) -> WorkflowResult {
    run(repo, config, action, &WorkflowOptions::default(), |_| Ok(true))
        .expect("workflow should succeed")
}

fn bump_error(err: anyhow::Error) -> BumpError {
    err.downcast::<BumpError>().expect("expected a BumpError")
}

#[test]
fn test_current_is_highest_version() {
    let repo = MockRepository::with_tags(["v0.9.0", "v0.28.0", "latest", "v0.22.0-test"]);
    let result = run_action(&repo, &Config::default(), Action::Current);

    assert_eq!(result.outcome, Outcome::Current("v0.28.0".to_string()));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_list_is_ascending() {
    let repo = MockRepository::with_tags(["2.0.0", "1.0.0", "1.0.0-rc1", "v0.0.0"]);
    let result = run_action(&repo, &Config::default(), Action::List);

    assert_eq!(
        result.outcome,
        Outcome::List(vec![
            "1.0.0".to_string(),
            "1.0.0-rc1".to_string(),
            "2.0.0".to_string()
        ])
    );
}

#[test]
fn test_list_empty_is_not_an_error() {
    let repo = MockRepository::new();
    let result = run_action(&repo, &Config::default(), Action::List);
    assert_eq!(result.outcome, Outcome::List(vec![]));
}

#[test]
fn test_next_levels() {
    let repo = MockRepository::with_tags(["a1.2.3"]);
    let mut config = Config::default();
    config.versions.prefixes = vec!["a".to_string()];

    let cases = [
        (VersionBump::Patch, "a1.2.4"),
        (VersionBump::Minor, "a1.3.0"),
        (VersionBump::Major, "a2.0.0"),
    ];
    for (bump, expected) in cases {
        let result = run_action(&repo, &config, Action::Next(bump));
        assert_eq!(result.outcome, Outcome::Next(expected.to_string()));
    }
}

#[test]
fn test_next_drops_extra() {
    let repo = MockRepository::with_tags(["v1.1.0-foo"]);
    let result = run_action(&repo, &Config::default(), Action::Next(VersionBump::Patch));
    assert_eq!(result.outcome, Outcome::Next("v1.1.1".to_string()));
}

#[test]
fn test_short_render_style() {
    let repo = MockRepository::with_tags(["v1.1", "v1.0.9"]);
    let mut config = Config::default();
    config.versions.render = RenderStyle::Short;

    let result = run_action(&repo, &config, Action::List);
    assert_eq!(
        result.outcome,
        Outcome::List(vec!["v1.0.9".to_string(), "v1.1".to_string()])
    );

    let result = run_action(&repo, &config, Action::Next(VersionBump::Major));
    assert_eq!(result.outcome, Outcome::Next("v2.0".to_string()));
}

#[test]
fn test_no_versions_fails_by_default() {
    let repo = MockRepository::with_tags(["nightly"]);
    let err = run(
        &repo,
        &Config::default(),
        Action::Current,
        &WorkflowOptions::default(),
        |_| Ok(true),
    )
    .unwrap_err();

    assert!(matches!(bump_error(err), BumpError::NoVersionsFound));
}

#[test]
fn test_no_versions_bootstrap() {
    let repo = MockRepository::new();
    let mut config = Config::default();
    config.versions.on_empty = OnEmpty::Bootstrap;

    let result = run_action(&repo, &config, Action::Next(VersionBump::Patch));
    assert_eq!(result.outcome, Outcome::Next("v0.0.1".to_string()));
    assert_eq!(
        result.warnings,
        vec![BoundaryWarning::BootstrappedVersion {
            version: "v0.0.0".to_string()
        }]
    );
}

#[test]
fn test_invalid_number_is_warned_and_skipped() {
    let repo = MockRepository::with_tags(["v1.0.0", "v1.99999999999999999999.0"]);
    let result = run_action(&repo, &Config::default(), Action::Current);

    assert_eq!(result.outcome, Outcome::Current("v1.0.0".to_string()));
    assert_eq!(result.warnings.len(), 1);
    assert!(matches!(
        &result.warnings[0],
        BoundaryWarning::UnparsableTag { tag, .. } if tag == "v1.99999999999999999999.0"
    ));
}

#[test]
fn test_tag_creates_next_version() {
    let repo = MockRepository::with_tags(["v1.0.0"]);
    let mut config = Config::default();
    config.tag.message = "Release {version}".to_string();

    let result = run_action(&repo, &config, Action::Tag(VersionBump::Minor));

    assert_eq!(
        result.outcome,
        Outcome::Tagged {
            tag: "v1.1.0".to_string(),
            kind: TagKind::Signed
        }
    );
    assert_eq!(
        repo.created_tags(),
        vec![(
            "v1.1.0".to_string(),
            "Release v1.1.0".to_string(),
            TagKind::Signed
        )]
    );
}

#[test]
fn test_tag_unsigned_when_configured() {
    let repo = MockRepository::with_tags(["v1.0.0"]);
    let mut config = Config::default();
    config.tag.sign = false;

    let result = run_action(&repo, &config, Action::Tag(VersionBump::Patch));
    assert_eq!(
        result.outcome,
        Outcome::Tagged {
            tag: "v1.0.1".to_string(),
            kind: TagKind::Annotated
        }
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn test_tag_signing_fallback_is_warned() {
    let mut repo = MockRepository::with_tags(["v1.0.0"]);
    repo.set_signing_fails(true);

    let result = run_action(&repo, &Config::default(), Action::Tag(VersionBump::Patch));
    assert_eq!(
        result.warnings,
        vec![BoundaryWarning::SigningFailed {
            tag: "v1.0.1".to_string()
        }]
    );
}

#[test]
fn test_tag_dry_run() {
    let repo = MockRepository::with_tags(["v1.0.0"]);
    let options = WorkflowOptions {
        dry_run: true,
        assume_yes: false,
    };

    let result = run(
        &repo,
        &Config::default(),
        Action::Tag(VersionBump::Major),
        &options,
        |_| panic!("dry run should not ask for confirmation"),
    )
    .unwrap();

    assert_eq!(
        result.outcome,
        Outcome::DryRun {
            current: "v1.0.0".to_string(),
            tag: "v2.0.0".to_string()
        }
    );
    assert!(repo.created_tags().is_empty());
}

#[test]
fn test_tag_cancelled() {
    let repo = MockRepository::with_tags(["v1.0.0"]);
    let mut asked = None;

    let result = run(
        &repo,
        &Config::default(),
        Action::Tag(VersionBump::Patch),
        &WorkflowOptions::default(),
        |tag| {
            asked = Some(tag.to_string());
            Ok(false)
        },
    )
    .unwrap();

    assert_eq!(asked, Some("v1.0.1".to_string()));
    assert_eq!(
        result.outcome,
        Outcome::Cancelled {
            tag: "v1.0.1".to_string()
        }
    );
    assert!(repo.created_tags().is_empty());
}

#[test]
fn test_tag_assume_yes_skips_confirmation() {
    let repo = MockRepository::with_tags(["v1.0.0"]);
    let options = WorkflowOptions {
        dry_run: false,
        assume_yes: true,
    };

    let result = run(
        &repo,
        &Config::default(),
        Action::Tag(VersionBump::Patch),
        &options,
        |_| panic!("should not ask"),
    )
    .unwrap();

    assert!(matches!(result.outcome, Outcome::Tagged { .. }));
}

#[test]
fn test_tag_in_empty_repository_fails() {
    let mut repo = MockRepository::new();
    repo.set_empty(true);
    let mut config = Config::default();
    config.versions.on_empty = OnEmpty::Bootstrap;

    let err = run(
        &repo,
        &config,
        Action::Tag(VersionBump::Patch),
        &WorkflowOptions::default(),
        |_| Ok(true),
    )
    .unwrap_err();

    assert!(matches!(bump_error(err), BumpError::EmptyRepository));
}

#[test]
fn test_no_prefixes_configured() {
    let repo = MockRepository::with_tags(["v1.0.0", "1.0.1"]);
    let mut config = Config::default();
    config.versions.prefixes = vec![];

    // "v1.0.0" is not a version once no prefix is recognized
    let result = run_action(&repo, &config, Action::List);
    assert_eq!(result.outcome, Outcome::List(vec!["1.0.1".to_string()]));
}

#[test]
fn test_bootstrap_prefix_is_found_on_next_run() {
    let repo = MockRepository::new();
    let mut config = Config::default();
    config.versions.on_empty = OnEmpty::Bootstrap;
    config.versions.bootstrap_prefix = "release-".to_string();

    let first = run_action(&repo, &config, Action::Tag(VersionBump::Patch));
    assert_eq!(
        first.outcome,
        Outcome::Tagged {
            tag: "release-0.0.1".to_string(),
            kind: TagKind::Signed
        }
    );

    let second = run_action(&repo, &config, Action::Tag(VersionBump::Patch));
    assert_eq!(
        second.outcome,
        Outcome::Tagged {
            tag: "release-0.0.2".to_string(),
            kind: TagKind::Signed
        }
    );
    assert!(second.warnings.is_empty());
}

#[test]
fn test_current_ignores_build_metadata() {
    let repo = MockRepository::with_tags(["v1.0.0", "v1.1.0+build.7"]);
    let result = run_action(&repo, &Config::default(), Action::Current);
    assert_eq!(result.outcome, Outcome::Current("v1.1.0".to_string()));

    let result = run_action(&repo, &Config::default(), Action::Next(VersionBump::Patch));
    assert_eq!(result.outcome, Outcome::Next("v1.1.1".to_string()));
}
