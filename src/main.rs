//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use quantum_gauntlet::{
    cli::{Commands, Gauntlet},
    commands::{project::handle_project, tournament::handle_tournament, watch::handle_watch},
    Result,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so JSON output on stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quantum_gauntlet=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app = Gauntlet::parse();

    match app.command {
        Commands::Project { roster, args, json } => handle_project(roster, args, json)?,

        Commands::Tournament {
            rosters,
            args,
            json,
            parallel,
        } => handle_tournament(rosters, args, json, parallel)?,

        Commands::Watch {
            rosters,
            args,
            interval_secs,
            max_refreshes,
        } => handle_watch(rosters, args, interval_secs, max_refreshes).await?,
    }

    Ok(())
}
