//! Shared types used across exifstrip.
//! Includes `StripOptions`, the `RunState` of a controlling surface, the
//! `CancelToken` shared with the worker, and the batch result types.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Extensions (lowercase, without the dot) that a batch picks up.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Which metadata groups to strip, plus the backup choice.
///
/// A run takes one copy of this up front; toggling checkboxes afterwards does
/// not affect a batch in flight.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StripOptions {
    pub remove_serial: bool,
    pub remove_model: bool,
    pub remove_gps: bool,
    pub remove_datetime: bool,
    pub remove_software: bool,
    /// Overrides every field toggle above. Does not touch `keep_backup`.
    pub remove_all: bool,
    pub keep_backup: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            remove_serial: true,
            remove_model: false,
            remove_gps: false,
            remove_datetime: false,
            remove_software: false,
            remove_all: false,
            keep_backup: false,
        }
    }
}

impl StripOptions {
    /// Options with every toggle off.
    pub fn none() -> Self {
        Self {
            remove_serial: false,
            ..Self::default()
        }
    }

    /// True when the options would strip nothing at all.
    pub fn is_noop(&self) -> bool {
        !(self.remove_all
            || self.remove_serial
            || self.remove_model
            || self.remove_gps
            || self.remove_datetime
            || self.remove_software)
    }
}

impl std::fmt::Display for StripOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.remove_all {
            write!(f, "all")?;
        } else {
            let groups: Vec<&str> = [
                (self.remove_serial, "serial"),
                (self.remove_model, "model"),
                (self.remove_gps, "gps"),
                (self.remove_datetime, "datetime"),
                (self.remove_software, "software"),
            ]
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
            if groups.is_empty() {
                write!(f, "nothing")?;
            } else {
                write!(f, "{}", groups.join(","))?;
            }
        }
        if self.keep_backup {
            write!(f, " (backup)")?;
        }
        Ok(())
    }
}

/// State of the controlling surface. Drives widget enablement.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    CancelRequested,
}

impl RunState {
    pub fn is_busy(&self) -> bool {
        !matches!(self, RunState::Idle)
    }
}

/// Cooperative cancellation flag shared between a surface and its worker.
///
/// Only ever polled between files; a running ExifTool process is never killed.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Counters for one batch run.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct BatchReport {
    pub total: usize,
    /// Files handed to the external tool, whatever it made of them.
    pub processed: usize,
    pub launch_failures: usize,
    /// Non-zero exit statuses. Informational only.
    pub tool_errors: usize,
}

/// How a batch ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunOutcome {
    NothingToDo,
    Completed(BatchReport),
    Cancelled(BatchReport),
}

impl RunOutcome {
    pub fn report(&self) -> BatchReport {
        match self {
            RunOutcome::NothingToDo => BatchReport::default(),
            RunOutcome::Completed(r) | RunOutcome::Cancelled(r) => *r,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunOutcome::Cancelled(_))
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::NothingToDo => write!(f, "No JPG/PNG files found, nothing to do"),
            RunOutcome::Completed(r) => {
                write!(f, "Done. Cleaned {} of {} files", r.processed, r.total)?;
                if r.launch_failures > 0 {
                    write!(f, " ({} failed to launch)", r.launch_failures)?;
                }
                Ok(())
            }
            RunOutcome::Cancelled(r) => {
                write!(f, "Cancelled after {} of {} files", r.processed, r.total)
            }
        }
    }
}
