// waveshift-cli/src/logging.rs
//
// Logging setup and helpers for the Waveshift CLI.
//
// The application uses env_logger with the RUST_LOG environment variable:
// - RUST_LOG=info (default): normal operation logs
// - RUST_LOG=debug: detailed debugging information, including engine commands

/// Initializes the logger. Messages are printed bare (no level or timestamp
/// prefix) so the run output reads like a report.
pub fn init() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS",
/// used to name run log files.
#[must_use]
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shape() {
        let timestamp = get_timestamp();
        assert_eq!(timestamp.len(), 15);
        assert_eq!(timestamp.chars().nth(8), Some('_'));
        assert!(timestamp.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }
}
