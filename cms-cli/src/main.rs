//! CMS CLI - Command line tool for building City Management System dashboard charts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cms-cli",
    version,
    about = "City Management System dashboard chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cms_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("cms-cli {}", env!("CARGO_PKG_VERSION"));
    cms_cmd::run(cli.command).await
}
