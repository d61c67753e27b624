use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::eyre;
use commands::{config, sync};
use plexarr_core::MediaFilter;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "plexarr")]
#[command(about = "Plexarr - Send your Plex watchlist to Radarr and Sonarr")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to this file (rotated daily) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Read variables from this file instead of searching for .env
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sync the Plex watchlist into Radarr and Sonarr
    #[command(long_about = "Fetch the Plex watchlist, add every movie to Radarr and every show to Sonarr, then remove the added items from the watchlist. Items that fail stay on the watchlist and are retried on the next run.")]
    Sync {
        /// Resolve TMDB ids but send no add or remove requests
        #[arg(long, action = ArgAction::SetTrue)]
        dry_run: bool,

        /// Number of watchlist entries processed at once
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=32))]
        concurrency: u16,

        /// Only process one kind of entry
        #[arg(long, value_enum)]
        only: Option<OnlyArg>,

        /// Per-request timeout in seconds for every service
        #[arg(long, value_name = "SECONDS")]
        timeout_secs: Option<u64>,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the resolved configuration (masks credentials)
    Show {
        /// Print credentials unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnlyArg {
    Movies,
    Shows,
}

impl From<OnlyArg> for MediaFilter {
    fn from(arg: OnlyArg) -> Self {
        match arg {
            OnlyArg::Movies => MediaFilter::Movies,
            OnlyArg::Shows => MediaFilter::Shows,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging_with_file(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Sync {
            dry_run,
            concurrency,
            only,
            timeout_secs,
        } => {
            let args = sync::SyncArgs {
                dry_run,
                concurrency: usize::from(concurrency),
                only: only.map(MediaFilter::from),
                timeout_secs,
            };
            sync::run_sync(args, cli.env_file.as_deref(), &output).await
        }
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show { full } => config::show_config(full, cli.env_file.as_deref(), &output),
        },
    }
}
