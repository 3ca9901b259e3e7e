// waveshift-cli/src/commands/mod.rs
//
// Command implementations for the Waveshift CLI.

pub mod convert;
pub mod formats;
