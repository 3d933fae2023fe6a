//! TSA CLI - Command line tool for fetching and summarizing OBEC student data.

use clap::Parser;

#[derive(Parser)]
#[command(name = "tsa-cli", version, about = "Thai Student Atlas data toolkit")]
struct Cli {
    #[command(subcommand)]
    command: tsa_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    tsa_cmd::run(cli.command).await
}
