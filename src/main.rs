use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_ledger::api::{AppState, create_router};
use payroll_ledger::config::ConfigLoader;
use payroll_ledger::console::run_session;

#[derive(Parser, Debug)]
#[command(name = "payroll", version, about = "Employee payroll data entry and reporting")]
struct Cli {
    #[arg(long, global = true, help = "Path to a payroll.yaml configuration file")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enter employees interactively and print the payroll report
    Run,
    /// Serve the payroll report API over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let loader = ConfigLoader::load_or_default(cli.config.as_ref())
        .context("failed to load payroll configuration")?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let stdin = io::stdin();
            run_session(stdin.lock(), io::stdout().lock(), loader.config())
                .context("payroll session ended early")?;
        }
        Commands::Serve { addr } => serve(loader, addr)?,
    }

    Ok(())
}

#[tokio::main]
async fn serve(loader: ConfigLoader, addr: SocketAddr) -> anyhow::Result<()> {
    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(%addr, "Payroll API listening");
    axum::serve(listener, router).await?;
    Ok(())
}
