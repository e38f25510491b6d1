//! CLI - Command-line argument parsing

use clap::{Parser, Subcommand};
use dukcapil_shared::MAX_MESSAGE_CHARS;
use std::path::PathBuf;

/// Dispendukcapil bot operator CLI
#[derive(Parser)]
#[command(name = "dukcapilctl")]
#[command(about = "Inspect the Dispendukcapil service-desk bot offline", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Output JSON only
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Answer a question the way the bot would
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,

        /// Maximum characters per message
        #[arg(long, default_value_t = MAX_MESSAGE_CHARS)]
        limit: usize,
    },

    /// Show the view behind a menu button
    Button {
        /// Button id (callback data)
        id: String,

        /// Maximum characters per message
        #[arg(long, default_value_t = MAX_MESSAGE_CHARS)]
        limit: usize,
    },

    /// List catalog topics
    Topics,

    /// Verify every keyword and menu reference resolves
    Check,

    /// Split a text file into message-sized chunks
    Chunk {
        /// Maximum characters per chunk
        #[arg(long, default_value_t = MAX_MESSAGE_CHARS)]
        limit: usize,

        /// File to split
        file: PathBuf,
    },
}
