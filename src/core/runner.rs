//! The batch loop: one external tool invocation per file, cooperative
//! cancellation between files, progress through a `ProgressSink`.
use std::path::Path;

use tracing::{debug, info, trace};

use crate::core::args::build_args;
use crate::core::job::Job;
use crate::core::progress::ProgressSink;
use crate::core::tool::{ExifTool, Invoker};
use crate::error::Result;
use crate::types::{BatchReport, CancelToken, RunOutcome, StripOptions};

/// Runs `job` to completion or until `cancel` is observed.
///
/// The cancel flag is sampled before each file, so an invocation that has
/// already started always runs to the end. Neither a launch failure nor a
/// non-zero exit stops the batch; both are only counted.
pub fn run_batch<I, S>(invoker: &I, job: &Job, cancel: &CancelToken, sink: &S) -> RunOutcome
where
    I: Invoker + ?Sized,
    S: ProgressSink + ?Sized,
{
    let total = job.len();
    if total == 0 {
        let outcome = RunOutcome::NothingToDo;
        debug!("No images in {:?}", job.target_dir);
        sink.log(&outcome.to_string());
        sink.finish(&outcome);
        return outcome;
    }

    debug!("Batch of {} file(s), options: {}", total, job.options);
    let mut report = BatchReport {
        total,
        ..Default::default()
    };
    let mut cancelled = false;

    for (index, file) in job.files.iter().enumerate() {
        let current = index + 1;
        if cancel.is_cancelled() {
            debug!("Cancel observed before file {}/{}", current, total);
            cancelled = true;
            break;
        }

        sink.log(&format!("[{}/{}] Cleaning {}", current, total, file.display()));

        let args = build_args(&job.options, file);
        match invoker.invoke(&args) {
            Ok(result) if result.success => {
                trace!("Cleaned {:?}", file);
            }
            Ok(result) => {
                // Nothing to strip is reported as an error by some tools; keep going.
                report.tool_errors += 1;
                debug!(
                    "Tool exited with {:?} for {:?}: {}",
                    result.code, file, result.stderr
                );
            }
            Err(e) => {
                report.launch_failures += 1;
                debug!("Launch failure for {:?}: {:?}", file, e.kind());
                sink.log(&format!("Failed to launch tool for {}: {}", file.display(), e));
            }
        }

        report.processed = current;
        sink.advance(current, total);
    }

    let outcome = if cancelled {
        RunOutcome::Cancelled(report)
    } else {
        RunOutcome::Completed(report)
    };
    debug!("Batch outcome: {:?}", outcome);
    sink.log(&outcome.to_string());
    sink.finish(&outcome);
    outcome
}

/// Validates the tool, scans `dir`, and runs the batch with ExifTool.
///
/// An unset or missing tool path is rejected before the directory is touched,
/// and without any call into `sink`.
pub fn clean_directory<S>(
    tool_path: Option<&Path>,
    dir: &Path,
    options: StripOptions,
    cancel: &CancelToken,
    sink: &S,
) -> Result<RunOutcome>
where
    S: ProgressSink + ?Sized,
{
    let tool = ExifTool::locate(tool_path)?;
    let job = Job::scan(dir, options)?;
    info!(
        "Cleaning {} file(s) in {:?} with {:?}",
        job.len(),
        dir,
        tool.path()
    );
    Ok(run_batch(&tool, &job, cancel, sink))
}
