use anyhow::Result;
use clap::Parser;
use tracing::Level;

use git_bump::cli::orchestration::{self, Outcome, WorkflowOptions};
use git_bump::cli::Cli;
use git_bump::config;
use git_bump::git::Git2Repository;
use git_bump::ui;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let repo = Git2Repository::open(".")?;

    let options = WorkflowOptions {
        dry_run: cli.dry_run,
        assume_yes: cli.yes || !ui::is_interactive(),
    };

    let result = orchestration::run(
        &repo,
        &config,
        cli.command.action(),
        &options,
        |tag| ui::confirm_action(&format!("Create tag {}?", tag)),
    )?;

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    match result.outcome {
        Outcome::Current(version) | Outcome::Next(version) => println!("{}", version),
        Outcome::List(versions) => ui::display_versions(&versions),
        Outcome::Tagged { tag, kind } => {
            ui::display_success(&ui::format_tag_created(&tag, kind));
        }
        Outcome::DryRun { current, tag } => {
            ui::display_status(&ui::format_dry_run(&current, &tag));
        }
        Outcome::Cancelled { tag } => {
            ui::display_status(&format!("Tag {} not created", tag));
        }
    }

    Ok(())
}
