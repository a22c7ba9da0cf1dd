use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use commit_kit::cli::orchestration::{run_commit_workflow, CommitWorkflowArgs};
use commit_kit::git::Git2Repository;
use commit_kit::ui::{self, Prompter};
use commit_kit::{config, logging};

#[derive(clap::Parser)]
#[command(
    name = "commit-helper",
    about = "Bump the version, update the changelog and prepare the commit message"
)]
struct Args {
    #[arg(long, help = "Ask for the commit details and write the commit message")]
    generate_message: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Create an annotated tag for the new version")]
    tag: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    if !args.generate_message {
        println!("Run commit-helper with --generate-message to prepare a commit.");
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = CommitWorkflowArgs {
        work_dir: PathBuf::from("."),
        create_tag: args.tag,
        timestamp: chrono::Local::now().naive_local(),
    };

    let mut prompter = Prompter::stdio();
    let result = match run_commit_workflow(&workflow_args, &config, &repo, &mut prompter) {
        Ok(result) => result,
        Err(e) if e.is_aborted() => {
            ui::display_error("Failed to generate the commit message.");
            std::process::exit(1);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_version_change(&result.previous_version, &result.version);
    if let Some(tag) = &result.tag {
        ui::display_success(&format!("Created tag: {}", tag));
    }

    println!("\n{}", result.message);
    Ok(())
}
