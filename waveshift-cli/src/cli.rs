// waveshift-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Waveshift: Batch audio conversion tool",
    long_about = "Converts audio files between container formats using ffmpeg via the waveshift-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Converts audio files to the chosen output format and bitrate
    Convert(ConvertArgs),
    /// Lists supported output formats and bitrates
    Formats,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Audio files to convert, or a single directory containing them
    #[arg(required = true, value_name = "INPUT_PATHS")]
    pub inputs: Vec<PathBuf>,

    /// Directory where converted files will be saved
    #[arg(short = 'o', long = "output", required = true, value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Output container format (mp3, wav, ogg, aac, m4a, flac, aiff)
    #[arg(
        short = 'f',
        long = "format",
        default_value = "mp3",
        value_name = "FORMAT"
    )]
    pub format: String,

    /// Audio bitrate (128k, 192k, 256k, 320k)
    #[arg(
        short = 'b',
        long = "bitrate",
        default_value = "128k",
        value_name = "BITRATE"
    )]
    pub bitrate: String,

    /// Optional: Directory for log files (defaults to OUTPUT_DIR/logs)
    #[arg(short, long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
