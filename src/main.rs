use std::sync::Arc;

use clap::Parser;
use taskboard::cli::commands::Cli;
use taskboard::cli::handlers;
use taskboard::io::config_io::{load_config, resolve_log_path};
use taskboard::io::logging::{LogTarget, init_tracing};
use taskboard::remote::HttpGateway;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let mut config = load_config(cli.config.as_deref(), &cwd)?;
    cli.apply_overrides(&mut config);

    // The TUI owns the terminal, so it logs to a file
    let target = if cli.command.is_none() {
        LogTarget::File(resolve_log_path(&config.log.file))
    } else {
        LogTarget::Stderr
    };
    let _log_guard = init_tracing(&config.log.level, &target)?;

    let gateway = HttpGateway::new(&config.remote)?;
    tracing::debug!(base_url = %gateway.base_url(), "remote gateway ready");

    match cli.command {
        None => taskboard::tui::run(&config, Arc::new(gateway)).await,
        Some(command) => {
            let mut stdout = std::io::stdout();
            handlers::dispatch(command, cli.json, &config, &gateway, &mut stdout).await?;
            Ok(())
        }
    }
}
