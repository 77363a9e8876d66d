//! CLI frontend for the TextQuest engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tq",
    about = "TextQuest: build world maps and travel them from the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a world file with a single starting location
    New {
        /// Path of the world file to create
        file: PathBuf,

        /// Display name of the world
        #[arg(long)]
        world: String,

        /// First region as name:Display Name
        #[arg(long)]
        region: String,

        /// First locality as name:Display Name
        #[arg(long)]
        locality: String,

        /// Starting location as name:Display Name
        #[arg(long)]
        location: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a world file
    Check {
        /// World file (JSON)
        file: PathBuf,
    },

    /// List every location in a world
    List {
        /// World file (JSON)
        file: PathBuf,

        /// Only list locations in this region or locality
        #[arg(short, long)]
        within: Option<String>,
    },

    /// Apply one edit to a world file and save it
    Edit {
        /// World file (JSON)
        file: PathBuf,

        #[command(subcommand)]
        op: commands::edit::EditOp,
    },

    /// Write the normalized world document
    Export {
        /// World file (JSON)
        file: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Open the map and travel interactively
    Travel {
        /// World file (JSON)
        file: PathBuf,

        /// Starting location key (default: entrypoint of the first locality)
        #[arg(long)]
        at: Option<String>,
    },

    /// Roll dice, e.g. 2d6+1
    Roll {
        /// Dice notation
        dice: String,

        /// Roll twice, keep the higher result
        #[arg(long, conflicts_with = "disadvantage")]
        advantage: bool,

        /// Roll twice, keep the lower result
        #[arg(long)]
        disadvantage: bool,

        /// Floor for rolls with a negative bonus
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        min: i64,

        /// RNG seed for repeatable rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// How many times to roll
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New {
            file,
            world,
            region,
            locality,
            location,
            force,
        } => commands::new::run(&file, &world, &region, &locality, &location, force),
        Commands::Check { file } => commands::check::run(&file),
        Commands::List { file, within } => commands::list::run(&file, within.as_deref()),
        Commands::Edit { file, op } => commands::edit::run(&file, op),
        Commands::Export { file, output } => commands::export::run(&file, output.as_deref()),
        Commands::Travel { file, at } => commands::travel::run(&file, at.as_deref()),
        Commands::Roll {
            dice,
            advantage,
            disadvantage,
            min,
            seed,
            times,
        } => commands::roll::run(&dice, advantage, disadvantage, min, seed, times),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
