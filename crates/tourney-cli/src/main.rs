mod commands;
mod input;
mod sink;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tourney_core::{Session, Tournament};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tourney")]
#[command(about = "osu! tournament mappool statistics", version)]
struct Args {
    /// Directory holding the API key and input files
    #[arg(long)]
    storage: Option<PathBuf>,

    /// osu! API key (overrides <storage>/api_key.txt)
    #[arg(long, env = "TOURNEY_API_KEY")]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Per-map score counts and averages, written to averages.txt
    Averages,
    /// Full mappool statistics spreadsheet
    Report {
        /// Output file path (defaults to <storage>/mappool_statistics.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tourney_cli=info".parse()?)
                .add_directive("tourney_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let storage = match args.storage {
        Some(path) => path,
        None => dirs::data_dir()
            .context("no data directory available")?
            .join("tourney-stats"),
    };
    fs::create_dir_all(&storage)
        .with_context(|| format!("failed to create {}", storage.display()))?;

    let api_key = match args.api_key {
        Some(key) => key,
        None => fs::read_to_string(storage.join("api_key.txt"))
            .unwrap_or_default()
            .trim()
            .to_string(),
    };
    if api_key.len() < 10 {
        print_setup_help(&storage);
        return Ok(());
    }

    let tournament = Tournament::new(Session::new(api_key))?;

    match args.command {
        Command::Averages => commands::averages::run(&tournament, &storage).await,
        Command::Report { output } => {
            let output = output.unwrap_or_else(|| storage.join("mappool_statistics.xlsx"));
            commands::report::run(&tournament, &storage, &output).await
        }
    }
}

fn print_setup_help(storage: &Path) {
    let join = |name: &str| storage.join(name).display().to_string();

    println!("{} should contain your osu! API key", join("api_key.txt"));
    println!();
    println!(
        "{} should contain all multiplayer room IDs to check, one per line:",
        join("rooms.txt")
    );
    println!();
    println!("    https://osu.ppy.sh/community/matches/53801400");
    println!("    Blue Team forfeits");
    println!("    53802247");
    println!();
    println!("Any run of digits on a line is taken as a room ID.");
    println!();
    println!(
        "{} should contain all map IDs, same rules as room IDs.",
        join("mappool.txt")
    );
    println!();
    println!(
        "{} should contain team names followed by member IDs:",
        join("participants.txt")
    );
    println!();
    println!("    reyuza ganteng");
    println!("    4750008");
    println!("    2454767");
    println!();
    println!("    okguysweneedaname");
    println!("    5447609");
    println!("    3517706");
}
