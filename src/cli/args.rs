//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// vidguide - YouTube tutorials as step-by-step written guides
#[derive(Parser, Debug)]
#[command(name = "vidguide")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a step-by-step guide from a YouTube tutorial video
    Generate {
        /// Video URL (youtube.com/watch?v=... or youtu.be/...)
        url: String,

        /// Print the guide as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
