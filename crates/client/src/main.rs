use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use railab_client::api::LabClient;
use railab_client::pages::{PageError, PeoplePage, ProjectPage, ProjectsPage};

#[derive(Parser, Debug)]
#[command(name = "railab", version, about = "Browse RAI-Lab people and projects")]
struct Cli {
    /// Base URL of the RAI-Lab backend.
    #[arg(long, env = "RAILAB_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    /// Print the grouped page as JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Current members and alumni, grouped by role.
    People,
    /// All projects, grouped by status.
    Projects,
    /// One project with its team.
    Project {
        /// Project id.
        id: i64,
    },
}

fn print_page<P: std::fmt::Display + Serialize>(page: &P, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        print!("{page}");
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = LabClient::new(cli.api_url);
    match cli.command {
        Commands::People => print_page(&PeoplePage::load(&client).await?, cli.json),
        Commands::Projects => print_page(&ProjectsPage::load(&client).await?, cli.json),
        Commands::Project { id } => print_page(&ProjectPage::load(&client, id).await?, cli.json),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "railab_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<PageError>() {
                Some(page_err) => eprintln!("{page_err}"),
                None => eprintln!("{err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
