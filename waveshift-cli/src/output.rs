// waveshift-cli/src/output.rs
//
// Dual console/file run log: every line goes to the console through the
// logger immediately, and is kept (with ANSI codes stripped) for the run log
// file written at the end of the command.

use log::info;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Default)]
pub struct RunLog {
    lines: Vec<String>,
}

impl RunLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs a line to the console and records it for the log file.
    pub fn line(&mut self, msg: &str) {
        info!("{msg}");
        self.lines.push(strip_ansi_escapes::strip_str(msg));
    }

    /// Writes the recorded lines to `path`.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let mut contents = self.lines.join("\n");
        contents.push('\n');
        fs::write(path, contents)
    }
}
