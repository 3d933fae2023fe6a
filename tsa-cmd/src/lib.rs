//! Command implementations for the TSA CLI.
//!
//! Provides subcommands for fetching the OBEC province feed and printing
//! student count summaries. The fetch subcommand is how the offline
//! snapshot fixture embedded in the dashboard gets refreshed.

use clap::Subcommand;

pub mod fetch;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Download the OBEC province feed and save a snapshot JSON
    Fetch {
        /// Output path for the snapshot
        #[arg(short = 'o', long, default_value = "fixtures/students_snapshot.json")]
        output: String,
    },

    /// Print per-province student counts
    Summary {
        /// Read this snapshot file instead of fetching the live feed
        #[arg(short = 's', long)]
        snapshot: Option<String>,

        /// Show a single province (Thai or romanized name)
        #[arg(short = 'p', long)]
        province: Option<String>,

        /// How many provinces to list, ranked by total students
        #[arg(short = 't', long, default_value_t = 10)]
        top: usize,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output } => fetch::run_fetch(&output).await,
        Command::Summary {
            snapshot,
            province,
            top,
        } => summary::run_summary(snapshot.as_deref(), province.as_deref(), top).await,
    }
}
