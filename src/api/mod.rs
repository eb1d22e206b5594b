//! High-level library API: a `Session` owned by the controlling surface that
//! holds the ExifTool location and the cancel flag, and runs each batch on its
//! own worker thread. Prefer this over the `core` primitives when embedding.
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use tracing::{debug, error, info};

use crate::core::progress::ProgressSink;
use crate::core::runner::clean_directory;
use crate::core::tool::validate_tool_path;
use crate::error::{Error, Result};
use crate::types::{CancelToken, RunOutcome, StripOptions};

/// Per-surface state: where the tool lives and how to stop a running batch.
#[derive(Debug, Default)]
pub struct Session {
    tool_path: Option<PathBuf>,
    cancel: CancelToken,
}

impl Session {
    pub fn new(tool_path: Option<PathBuf>) -> Self {
        Self {
            tool_path,
            cancel: CancelToken::new(),
        }
    }

    pub fn tool_path(&self) -> Option<&Path> {
        self.tool_path.as_deref()
    }

    pub fn set_tool_path(&mut self, path: Option<PathBuf>) {
        self.tool_path = path;
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Asks the running batch to stop at the next file boundary.
    pub fn request_cancel(&self) {
        debug!("Cancel requested");
        self.cancel.cancel();
    }

    /// Validates inputs and starts a batch on a new worker thread.
    ///
    /// Fails without spawning anything when the tool path is unset or invalid,
    /// or when `dir` is not a directory. The worker owns `sink` and calls
    /// `finish` on it unless the run fails before the batch starts; in that
    /// case the error comes back from `BatchHandle::join`.
    pub fn start<S>(&self, dir: &Path, options: StripOptions, sink: S) -> Result<BatchHandle>
    where
        S: ProgressSink + Send + 'static,
    {
        let tool_path = validate_tool_path(self.tool_path())?.to_path_buf();
        if !dir.is_dir() {
            return Err(Error::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        self.cancel.reset();
        let cancel = self.cancel.clone();
        let dir = dir.to_path_buf();
        info!("Starting batch in {:?} ({})", dir, options);

        let join = std::thread::Builder::new()
            .name("exifstrip-batch".to_string())
            .spawn(move || {
                let result = clean_directory(Some(tool_path.as_path()), &dir, options, &cancel, &sink);
                if let Err(e) = &result {
                    error!("Batch failed: {}", e);
                }
                result
            })?;

        Ok(BatchHandle { join })
    }

    /// Runs a batch on the calling thread. Used by the CLI.
    pub fn run_blocking<S>(&self, dir: &Path, options: StripOptions, sink: &S) -> Result<RunOutcome>
    where
        S: ProgressSink + ?Sized,
    {
        self.cancel.reset();
        clean_directory(self.tool_path(), dir, options, &self.cancel, sink)
    }
}

/// A batch running on its worker thread.
#[derive(Debug)]
pub struct BatchHandle {
    join: JoinHandle<Result<RunOutcome>>,
}

impl BatchHandle {
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Waits for the worker. A worker panic is reported as an error rather
    /// than propagated.
    pub fn join(self) -> Result<RunOutcome> {
        match self.join.join() {
            Ok(result) => result,
            Err(_) => Err(Error::Io(std::io::Error::other("batch worker panicked"))),
        }
    }
}
