use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::Level;

use git_tag_version::cli::{run_workflow, WorkflowArgs, WorkflowResult};
use git_tag_version::config;
use git_tag_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-tag-version",
    about = "Print a project's version derived from its newest git tag"
)]
struct Args {
    #[arg(default_value = ".", help = "Repository path")]
    path: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Regular expression whose first group is the version")]
    pattern: Option<String>,

    #[arg(long, help = "Cache the version in this file and fall back to it")]
    version_file: Option<PathBuf>,

    #[arg(long, help = "Search parent directories for the repository")]
    discover: bool,

    #[arg(short, long, help = "List all tags, newest first")]
    list: bool,

    #[arg(long, help = "Fail unless the version is a valid semantic version")]
    strict: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-tag-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let workflow_args = WorkflowArgs {
        repo_path: args.path,
        pattern: args.pattern,
        version_file: args.version_file,
        discover: args.discover,
        list: args.list,
        strict: args.strict,
    };

    match run_workflow(&workflow_args, &config) {
        Ok(WorkflowResult::Version {
            version: Some(version),
            ..
        }) => ui::display_version(&version),
        Ok(WorkflowResult::Version { version: None, .. }) => {
            tracing::warn!(
                "no tags found in '{}'",
                workflow_args.repo_path.display()
            );
        }
        Ok(WorkflowResult::Tags(tags)) => ui::display_tags(&tags),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
