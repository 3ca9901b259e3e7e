//! Sequential conversion driver.
//!
//! This module houses the main orchestration logic of waveshift-core: for
//! each queued file, in order, stage the raw bytes into the engine sandbox,
//! invoke the engine with the configured format and bitrate, read the result
//! back, and update the observable per-file status after every transition.
//!
//! Files are converted strictly one at a time; an engine invocation must
//! complete before the next file starts. A failure for one file marks that
//! file `Error` and is recorded in the run report; the loop always continues
//! to the end of the queue. There are no retries and no cancellation.

use crate::config::{CoreConfig, OutputFormat};
use crate::error::{CoreError, CoreResult};
use crate::external::{TranscodeEngine, TranscodeRequest};
use crate::queue::{ConversionQueue, ConversionStatus, OutputHandle};
use crate::temp_files;
use crate::utils::{derive_output_name, format_duration};

use colored::*;
use log::{error, info};

use std::time::{Duration, Instant};

/// Summary of one successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub filename: String,
    pub output_name: String,
    pub duration: Duration,
    pub input_size: u64,
    pub output_size: u64,
}

/// One recorded per-file failure.
#[derive(Debug, Clone)]
pub struct ConversionFailure {
    pub filename: String,
    pub message: String,
}

/// Outcome of a whole conversion run.
///
/// Failures are aggregated here rather than reported one at a time, so the
/// caller can present every failed file together after the run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub converted: Vec<ConversionSummary>,
    pub failures: Vec<ConversionFailure>,
    pub all_finished: bool,
}

/// Rejects the run when the chosen output format matches any queued file's
/// inferred source format. Also run by the driver itself; callers may invoke
/// it earlier to report a collision before acquiring an engine.
pub fn check_format_collision(queue: &ConversionQueue, target: OutputFormat) -> CoreResult<()> {
    for entry in queue.entries() {
        if entry.source_extension().as_deref() == Some(target.extension()) {
            return Err(CoreError::FormatCollision {
                filename: entry.name.clone(),
                format: target.to_string(),
            });
        }
    }
    Ok(())
}

/// Converts every queued file to the configured format and bitrate.
///
/// The whole run is rejected before any engine call when the queue is empty
/// or when any queued file already carries the target extension. After that,
/// errors are per-file: the run itself returns `Ok` with the failures
/// recorded in the report.
///
/// Output handles accumulate on the queue in file order; the report carries
/// per-file summaries and `all_finished`, which is true only if every file
/// reached `Completed`.
pub fn convert_queue<E: TranscodeEngine>(
    engine: &E,
    config: &CoreConfig,
    queue: &mut ConversionQueue,
) -> CoreResult<RunReport> {
    if queue.is_empty() {
        return Err(CoreError::NoFilesFound);
    }

    let target = config.output_format;
    check_format_collision(queue, target)?;

    info!(
        "Converting {} file(s) to {} at {}",
        queue.len().to_string().green(),
        target.to_string().green().bold(),
        config.bitrate.to_string().green()
    );

    let mut report = RunReport::default();

    for index in 0..queue.len() {
        let file_start = Instant::now();
        let (name, source_extension, input_size) = {
            let entry = &queue.entries()[index];
            (entry.name.clone(), entry.source_extension(), entry.size())
        };

        info!("{} {}", "Processing:".cyan().bold(), name.yellow());

        // Stage the raw bytes into the sandbox under a generated name.
        queue.set_status(&name, ConversionStatus::Loading);
        let staged_input =
            temp_files::unique_staged_name("input", source_extension.as_deref().unwrap_or("bin"));
        let staged_output = temp_files::unique_staged_name("output", target.extension());

        let staged = {
            let entry = &queue.entries()[index];
            engine.write_input(&staged_input, &entry.bytes)
        };
        if let Err(e) = staged {
            error!("Failed to stage {name} into the engine sandbox: {e}");
            queue.set_status(&name, ConversionStatus::Error);
            report.failures.push(ConversionFailure {
                filename: name,
                message: e.to_string(),
            });
            info!("----------------------------------------");
            continue;
        }

        // Run the engine and read the converted bytes back.
        queue.set_status(&name, ConversionStatus::Converting);
        let request = TranscodeRequest {
            input_name: staged_input,
            output_name: staged_output.clone(),
            bitrate: config.bitrate,
        };
        let outcome = engine
            .transcode(&request)
            .and_then(|()| engine.read_output(&staged_output));

        match outcome {
            Ok(bytes) => {
                let output_name = derive_output_name(&name, target);
                let output_size = bytes.len() as u64;
                queue.push_output(OutputHandle {
                    source_name: name.clone(),
                    output_name: output_name.clone(),
                    bytes,
                });
                queue.set_status(&name, ConversionStatus::Completed);

                let elapsed = file_start.elapsed();
                info!(
                    "Completed: {} -> {} in {}",
                    name,
                    output_name.green(),
                    format_duration(elapsed)
                );
                report.converted.push(ConversionSummary {
                    filename: name,
                    output_name,
                    duration: elapsed,
                    input_size,
                    output_size,
                });
            }
            Err(e) => {
                error!("Conversion failed for {name}: {e}");
                queue.set_status(&name, ConversionStatus::Error);
                report.failures.push(ConversionFailure {
                    filename: name,
                    message: e.to_string(),
                });
            }
        }

        info!("----------------------------------------");
    }

    report.all_finished = queue.all_finished();
    if report.all_finished {
        info!("{}", "All conversions finished.".green());
    }

    Ok(report)
}
