mod cli;
mod config;
mod display;
mod error;
mod markdown;
mod models;
mod page;
mod renderer;
mod sanitize;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nbview")]
#[command(about = "Render Jupyter notebooks to standalone HTML pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Render notebooks to HTML pages
    Render {
        /// Notebook file, or a directory to render recursively
        input: PathBuf,

        /// Output file, or output directory for a batch run
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the HTML page to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Preview a notebook in the terminal
    Show {
        /// Notebook file
        input: PathBuf,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize nbview.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Render {
            input,
            output,
            stdout,
            config,
        } => cli::render::run(input, output, stdout, config),
        Commands::Show { input, config } => cli::show::run(input, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
