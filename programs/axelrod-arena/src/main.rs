//! Axelrod Arena CLI
//!
//! Commands:
//! - serve: Start the results server
//! - run: Run the registry tournament once and print the standings

use std::path::PathBuf;

use anyhow::Result;
use axelrod_arena::{run_server, write_report, ServerConfig};
use axelrod_logic::{default_roster, run_tournament, TournamentConfig, DEFAULT_ROUNDS, MAX_ROUNDS};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "axelrod-arena")]
#[command(about = "Iterated Prisoner's Dilemma round-robin tournament")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the results server
    Serve {
        #[arg(long, default_value = "5000")]
        port: u16,
        /// Rounds per pairing when a request does not set `rounds`
        #[arg(long, default_value_t = DEFAULT_ROUNDS, value_parser = rounds_parser())]
        rounds: u32,
        /// Where each run's PDF report is written
        #[arg(long, default_value = "report.pdf")]
        report: PathBuf,
    },
    /// Run the tournament once
    Run {
        #[arg(long, default_value_t = DEFAULT_ROUNDS, value_parser = rounds_parser())]
        rounds: u32,
        #[arg(long, default_value = "0")]
        seed: u64,
        /// Also write the PDF report here
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn rounds_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_ROUNDS))
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, rounds, report } => {
            let config = ServerConfig {
                port,
                rounds,
                report_path: report,
            };
            run_server(config).await
        }
        Commands::Run { rounds, seed, report } => {
            let result = run_tournament(&default_roster(), &TournamentConfig::new(rounds, seed))?;
            for standing in result.standings.iter() {
                println!("{}: {}", standing.name, standing.total_penalty);
            }
            if let Some(leader) = result.standings.leader() {
                println!("Lowest total penalty: {}", leader.name);
            }
            if let Some(path) = report {
                write_report(&path, &result.standings).await?;
            }
            Ok(())
        }
    }
}
