use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jobquest_core::JobStatus;

use crate::aggregate::StatusFilter;
use crate::client::{HttpJobsApi, JobsApi};
use crate::config::DashboardConfig;
use crate::render::render;
use crate::state::{Dashboard, Flow, JobDraft};

#[derive(Parser)]
#[command(about = "terminal dashboard for JobQuest applications")]
struct Cmd {
    /// Base URL of the API; defaults to http://localhost:$PORT
    #[arg(long, env = "API_BASE_URL", global = true)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Show charts and the application table
    Show {
        /// All, Applied, Interview, Offer or Rejected
        #[arg(long, default_value_t = StatusFilter::All)]
        status: StatusFilter,
    },
    /// Add an application
    Add {
        #[arg(long)]
        company: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, default_value_t = JobStatus::Applied)]
        status: JobStatus,
    },
    /// Delete an application by id
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run() -> Result<ExitCode> {
    let args = Cmd::parse();
    let config = DashboardConfig::resolve(args.api_base_url)?;
    tracing::debug!("Using API at {}", config.api_base_url);

    let mut dashboard = Dashboard::new(HttpJobsApi::new(config.api_base_url))
        .with_progress(|message| eprintln!("{message}"));

    let command = args.command.unwrap_or(SubCommandType::Show {
        status: StatusFilter::All,
    });
    execute(&mut dashboard, command, confirm_on_stdin).await;

    tracing::debug!("{} applications cached", dashboard.jobs().len());
    print!("{}", render(&dashboard.view()));

    Ok(if any_failed(&dashboard) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Runs one subcommand. Every command starts from a fresh load so the
/// dashboard printed afterwards shows the stored records even when the
/// mutation is declined or fails.
async fn execute<A: JobsApi>(
    dashboard: &mut Dashboard<A>,
    command: SubCommandType,
    confirm: impl FnOnce(&str) -> bool,
) {
    dashboard.load().await;
    match command {
        SubCommandType::Show { status } => {
            dashboard.filter = status;
        }
        SubCommandType::Add {
            company,
            role,
            location,
            status,
        } => {
            dashboard.draft = JobDraft {
                company,
                role,
                location: location.unwrap_or_default(),
                status,
            };
            dashboard.submit().await;
        }
        SubCommandType::Delete { id, yes } => {
            dashboard
                .delete(&id, |prompt| yes || confirm(prompt))
                .await;
        }
    }
}

fn any_failed<A: JobsApi>(dashboard: &Dashboard<A>) -> bool {
    [
        dashboard.load_flow(),
        dashboard.create_flow(),
        dashboard.delete_flow(),
    ]
    .into_iter()
    .any(|flow| matches!(flow, Flow::Failed(_)))
}

/// Asks a yes/no question on the terminal. Anything but `y`/`yes` is a no.
fn confirm_on_stdin(prompt: &str) -> bool {
    eprint!("{prompt} [y/N] ");
    if io::stderr().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
