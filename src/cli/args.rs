//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Filter;

/// Convert an image into ASCII art
#[derive(Parser, Debug)]
#[command(name = "ascii-art")]
#[command(version, about = "Convert an image into ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Prompt for the image path and width
    ascii-art

    # Render photo.jpg at 80 columns
    ascii-art photo.jpg --width 80

    # Print only, don't write ascii_image.txt
    ascii-art photo.jpg --no-save")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to convert (prompted for when omitted)
    pub image: Option<PathBuf>,

    /// Output width in characters (prompted for when the image is prompted for)
    #[arg(short, long)]
    pub width: Option<u32>,

    /// File to save the art to (default: ascii_image.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Don't save the art to a file
    #[arg(long)]
    pub no_save: bool,

    /// Resampling filter
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
