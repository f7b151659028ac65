use anyhow::Result;
use clap::Parser;
use todo_cli::{commands, Cli, Transport};
use todo_core::ItemClient;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("todo_cli=debug,todo_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let client = ItemClient::new(&cli.url, cli.kind);
    let transport = Transport::new();
    commands::execute(&client, &transport, cli.command)
}
