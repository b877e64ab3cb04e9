use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::session::SelectionArgs;

#[derive(Parser)]
#[command(name = "sheetnum")]
#[command(about = "Select, increment and decrement sheet numbers in a sheet document")]
#[command(version)]
struct Cli {
    /// Path to the sheet document (.toml or .json)
    #[arg(short, long, global = true, default_value = "sheets.toml")]
    document: PathBuf,

    /// Path to the config file (defaults to ~/.sheetnum/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sheets and sheet sets of the document
    List {
        /// Only list sheets of this sheet set
        #[arg(long)]
        set: Option<String>,
    },

    /// Select sheets and print the selection
    Select {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Increment the numbers of the selected sheets
    Increment {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Amount to add (defaults to the configured value)
        #[arg(long)]
        by: Option<String>,

        /// Show the renames without saving the document
        #[arg(long)]
        dry_run: bool,
    },

    /// Decrement the numbers of the selected sheets
    Decrement {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Amount to subtract (defaults to the configured value)
        #[arg(long)]
        by: Option<String>,

        /// Show the renames without saving the document
        #[arg(long)]
        dry_run: bool,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Init { force } = cli.command {
        return cli::init::init_command(cli.config.as_deref(), force);
    }

    let config = sheetnum::config::Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::List { set } => {
            cli::list::list_command(&cli.document, &config, set.as_deref())?;
        }
        Commands::Select { selection, json } => {
            cli::select::select_command(&cli.document, &config, &selection, json)?;
        }
        Commands::Increment {
            selection,
            by,
            dry_run,
        } => {
            let request = cli::renumber::RenumberRequest {
                decrement: false,
                by,
                dry_run,
            };
            cli::renumber::renumber_command(&cli.document, &config, &selection, &request)?;
        }
        Commands::Decrement {
            selection,
            by,
            dry_run,
        } => {
            let request = cli::renumber::RenumberRequest {
                decrement: true,
                by,
                dry_run,
            };
            cli::renumber::renumber_command(&cli.document, &config, &selection, &request)?;
        }
        Commands::Init { .. } => {}
    }

    Ok(())
}
