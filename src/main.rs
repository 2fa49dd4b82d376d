//! Campus MCP Server - Main Entry Point
//!
//! This is the main entry point for the campus survival guide application.
//! The actual implementation is in the `campus_mcp` library.

use anyhow::Result;
use campus_mcp::GuideServerHandler;
use clap::{CommandFactory, Parser, Subcommand};
use mcp_attr::server::serve_stdio;

/// Campus MCP Server - university survival guide via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the MCP server over stdio
    Serve {
        /// Path to the guide data file
        file: String,

        /// Enable git synchronization on save
        #[arg(long)]
        sync_git: bool,

        /// Access code for the curation tools; falls back to GUIDE_ACCESS_CODE
        #[arg(long)]
        access_code: Option<String>,
    },

    /// Run a live countdown to the next academic deadline in the terminal
    Clock,

    /// Write a starter guide data file with a few sample entries
    Seed {
        /// Path the starter file is written to
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    match args.command {
        Command::Serve {
            file,
            sync_git,
            access_code,
        } => {
            let access_code = access_code.or_else(|| std::env::var("GUIDE_ACCESS_CODE").ok());
            if access_code.is_none() {
                log::warn!("No access code configured; curation tools will refuse");
            }
            let handler = GuideServerHandler::new(&file, sync_git, access_code)?;
            serve_stdio(handler).await?;
        }
        Command::Clock => {
            campus_mcp::clock::run_clock().await?;
        }
        Command::Seed { file } => {
            let data = campus_mcp::seed::write_starter_file(&file)?;
            println!(
                "Wrote {} with {} classes and {} places",
                file,
                data.classes.len(),
                data.places.len()
            );
        }
    }
    Ok(())
}
