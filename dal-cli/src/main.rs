use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "dal-tool")]
#[command(about = "Generate Go DAL files from MySQL CREATE TABLE statements")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workspace folder generated files are written to (defaults to current directory)
    #[arg(short = 'W', long, global = true)]
    workspace: Option<PathBuf>,

    /// Configuration file (defaults to <workspace>/dal-tool.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Go DAL file from a CREATE TABLE statement
    #[command(alias = "gen-dal-file")]
    Generate(commands::generate::GenerateCommand),

    /// Show the extracted table, columns and Go types without writing files
    Inspect(commands::inspect::InspectCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Commands::Generate(cmd) => cmd.execute(cli.workspace, cli.config).await,
        Commands::Inspect(cmd) => cmd.execute().await,
    }
}
