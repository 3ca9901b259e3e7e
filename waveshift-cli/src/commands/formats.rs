// waveshift-cli/src/commands/formats.rs
//
// The 'formats' command: lists the fixed sets of output formats and bitrates.

use waveshift_core::{Bitrate, OutputFormat};

pub fn run_formats() -> Result<(), Box<dyn std::error::Error>> {
    println!("Supported output formats:");
    for format in OutputFormat::ALL {
        println!("  {format}");
    }
    println!();
    println!("Supported bitrates:");
    for bitrate in Bitrate::ALL {
        println!("  {bitrate}");
    }
    Ok(())
}
