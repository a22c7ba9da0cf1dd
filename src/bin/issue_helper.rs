use anyhow::Result;
use clap::Parser;

use commit_kit::cli::orchestration::{run_issue_workflow, IssueWorkflowResult};
use commit_kit::git::Git2Repository;
use commit_kit::tracker::GithubTracker;
use commit_kit::ui::{self, Prompter};
use commit_kit::{config, logging};

#[derive(clap::Parser)]
#[command(
    name = "issue-helper",
    about = "Open an issue on the tracker and check out a matching branch"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let tracker = match GithubTracker::from_config(&config.issues) {
        Ok(tracker) => tracker,
        Err(e) => {
            ui::display_error(&e.to_string());
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

    let mut prompter = Prompter::stdio();
    match run_issue_workflow(&config.issues, &tracker, &repo, &mut prompter) {
        Ok(IssueWorkflowResult::Created {
            number,
            title,
            branch,
            warnings,
        }) => {
            ui::display_issue_created(number, &title);
            for warning in &warnings {
                ui::display_boundary_warning(warning);
            }
            ui::display_branch_created(&branch);
            Ok(())
        }
        Ok(IssueWorkflowResult::Rejected { status, body }) => {
            ui::display_issue_rejected(status, &body);
            std::process::exit(1);
        }
        Err(e) if e.is_aborted() => {
            ui::display_error("Issue creation aborted.");
            std::process::exit(1);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
