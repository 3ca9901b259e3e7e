// waveshift-cli/src/lib.rs
//
// Library portion of the Waveshift CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ConvertArgs};
pub use commands::convert::run_convert;
pub use commands::formats::run_formats;
