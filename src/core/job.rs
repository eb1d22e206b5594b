use std::path::{Path, PathBuf};

use crate::core::scan::scan_images;
use crate::error::Result;
use crate::types::StripOptions;

/// One batch: a folder, the options snapshot, and the files found at start.
#[derive(Debug, Clone)]
pub struct Job {
    pub target_dir: PathBuf,
    pub options: StripOptions,
    pub files: Vec<PathBuf>,
}

impl Job {
    /// Scans `dir` once. The file list is fixed for the lifetime of the job.
    pub fn scan(dir: &Path, options: StripOptions) -> Result<Self> {
        let files = scan_images(dir)?;
        Ok(Self {
            target_dir: dir.to_path_buf(),
            options,
            files,
        })
    }

    pub fn from_files(target_dir: PathBuf, options: StripOptions, files: Vec<PathBuf>) -> Self {
        Self {
            target_dir,
            options,
            files,
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
