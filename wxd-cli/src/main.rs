//! WXD CLI - Command line view of the weather station dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wxd-cli",
    version,
    about = "Weather station dashboard toolkit"
)]
struct Cli {
    #[command(flatten)]
    config: wxd_cmd::ApiConfig,

    #[command(subcommand)]
    command: wxd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using API at {}", cli.config.api_base);
    wxd_cmd::run(cli.config, cli.command).await
}
