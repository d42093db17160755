//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;

/// listd - a singly-linked list served over a JSON HTTP API
#[derive(Parser, Debug)]
#[command(
    name = "listd",
    version,
    about = "A singly-linked list served over a JSON HTTP API",
    long_about = "Serve a singly-linked list as a remotely manipulable resource.\n\n\
                  The API reads the full list state, inserts a value at the head\n\
                  or tail, and deletes the first node matching a value."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 5000)]
        port: u16,

        /// Enable debug logging
        #[arg(long)]
        debug: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let debug = matches!(cli.command, Some(Command::Serve { debug: true, .. }));
    if debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Some(Command::Serve { host, port, .. }) => commands::serve(&host, port),
        Some(Command::Version) => {
            println!("listd v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        },
        None => {
            println!("listd v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'listd --help' for usage");
            println!("Run 'listd serve' to start the API");
            Ok(())
        },
    }
}
