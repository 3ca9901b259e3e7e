// waveshift-cli/src/commands/convert.rs
//
// The 'convert' command: resolves the input files, builds the conversion
// queue, runs the sequential driver against the ffmpeg engine, writes the
// converted outputs to the output directory in file order, and prints the
// per-file status table and run summary.

use crate::cli::ConvertArgs;
use crate::logging;
use crate::output::RunLog;

use colored::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use waveshift_core::{
    Bitrate, ConversionQueue, ConversionStatus, CoreConfig, FfmpegEngine, FileEntry, OutputFormat,
    convert_queue, format_bytes, format_duration, format_size_change,
};

pub fn run_convert(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let total_start = Instant::now();

    // Parse the selectors up front so a typo never reaches the engine.
    let output_format: OutputFormat = args.format.parse()?;
    let bitrate: Bitrate = args.bitrate.parse()?;

    let files_to_convert = resolve_inputs(&args.inputs)?;

    fs::create_dir_all(&args.output_dir)?;
    let log_dir = args
        .log_dir
        .unwrap_or_else(|| args.output_dir.join("logs"));
    fs::create_dir_all(&log_dir)?;

    let mut config = CoreConfig::new(args.output_dir.clone());
    config.log_dir = log_dir.clone();
    config.output_format = output_format;
    config.bitrate = bitrate;

    let mut run_log = RunLog::new();
    run_log.line("========================================");
    run_log.line(&format!(
        "Waveshift Convert Run Started: {}",
        chrono::Local::now()
    ));
    run_log.line(&format!("Output directory: {}", config.output_dir.display()));
    run_log.line(&format!("Output format: {output_format}"));
    run_log.line(&format!("Bitrate: {bitrate}"));
    run_log.line("========================================");
    run_log.line(&format!(
        "Found {} file(s) to convert.",
        files_to_convert.len()
    ));

    let mut queue = ConversionQueue::new();
    for path in &files_to_convert {
        queue.push(FileEntry::from_path(path)?);
    }

    // Validate the run before touching ffmpeg, so a collision is reported
    // even on a machine without it.
    waveshift_core::check_format_collision(&queue, output_format)?;

    // The engine is created once and reused for every file in the run.
    let engine = FfmpegEngine::new()?;
    let report = convert_queue(&engine, &config, &mut queue)?;

    // "Download all": write the handles out in file order.
    for handle in queue.outputs() {
        let dest = config.output_dir.join(&handle.output_name);
        fs::write(&dest, &handle.bytes)?;
        log::debug!("Wrote {}", dest.display());
    }

    print_summary(&mut run_log, &queue, &report);

    run_log.line(&format!(
        "Total conversion time: {}",
        format_duration(total_start.elapsed())
    ));
    run_log.line(&format!(
        "Waveshift Convert Run Finished: {}",
        chrono::Local::now()
    ));
    run_log.line("========================================");

    let log_path = log_dir.join(format!(
        "waveshift_convert_run_{}.log",
        logging::get_timestamp()
    ));
    run_log.write_to(&log_path)?;

    Ok(())
}

/// Resolves the CLI input arguments into the list of files to convert.
///
/// A single directory argument means "convert everything eligible in it";
/// otherwise each argument must be an existing, supported audio file. File
/// names must be unique: statuses and output handles are keyed by name, so
/// two inputs sharing a name would conflate results.
fn resolve_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let files = collect_inputs(inputs)?;
    ensure_unique_names(&files)?;
    Ok(files)
}

fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    if inputs.len() == 1 {
        let input = canonicalize_input(&inputs[0])?;
        if input.is_dir() {
            return Ok(waveshift_core::find_processable_files(&input)?);
        }
    }

    let mut files = Vec::with_capacity(inputs.len());
    for raw in inputs {
        let path = canonicalize_input(raw)?;
        if !path.is_file() {
            return Err(format!("Input path '{}' is not a file.", path.display()).into());
        }
        if !waveshift_core::utils::is_supported_audio_file(&path) {
            return Err(format!(
                "Input file '{}' is not a supported audio file.",
                path.display()
            )
            .into());
        }
        files.push(path);
    }
    Ok(files)
}

fn ensure_unique_names(files: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let mut seen = HashSet::new();
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if !seen.insert(name.clone()) {
            return Err(format!(
                "Duplicate input file name '{name}': file names must be unique within a run."
            )
            .into());
        }
    }
    Ok(())
}

fn canonicalize_input(path: &Path) -> Result<PathBuf, String> {
    path.canonicalize()
        .map_err(|e| format!("Invalid input path '{}': {}", path.display(), e))
}

fn print_summary(
    run_log: &mut RunLog,
    queue: &ConversionQueue,
    report: &waveshift_core::RunReport,
) {
    run_log.line("========================================");
    run_log.line("Conversion Summary:");
    run_log.line("========================================");

    for entry in queue.entries() {
        let status = queue.status(&entry.name);
        run_log.line(&format!("{}  [{}]", entry.name, styled_status(status)));
    }
    run_log.line("----------------------------------------");

    for summary in &report.converted {
        run_log.line(&summary.filename.to_string());
        run_log.line(&format!("  Output:       {}", summary.output_name));
        run_log.line(&format!(
            "  Convert time: {}",
            format_duration(summary.duration)
        ));
        run_log.line(&format!(
            "  Input size:   {}",
            format_bytes(summary.input_size)
        ));
        run_log.line(&format!(
            "  Output size:  {} ({})",
            format_bytes(summary.output_size),
            format_size_change(summary.input_size, summary.output_size)
        ));
        run_log.line("----------------------------------------");
    }

    // Every per-file failure is reported together, not just the first.
    if !report.failures.is_empty() {
        run_log.line(&format!(
            "{}",
            format!("{} conversion(s) failed:", report.failures.len())
                .red()
                .bold()
        ));
        for failure in &report.failures {
            run_log.line(&format!("  {}: {}", failure.filename.red(), failure.message));
        }
        run_log.line("----------------------------------------");
    }

    if report.all_finished {
        run_log.line(&format!(
            "{}",
            "All conversions finished successfully.".green()
        ));
    }
    run_log.line(&format!(
        "Converted {} of {} file(s).",
        report.converted.len(),
        queue.len()
    ));
}

fn styled_status(status: ConversionStatus) -> String {
    match status {
        ConversionStatus::Completed => status.to_string().green().to_string(),
        ConversionStatus::Error => status.to_string().red().bold().to_string(),
        _ => status.to_string().yellow().to_string(),
    }
}
