//! The external metadata tool.
//!
//! `Invoker` is the seam the batch runner calls through; `ExifTool` is the
//! real implementation that spawns the executable and waits for it.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::trace;

use crate::error::{Error, Result};

/// Result of one completed invocation. Launch failures are reported as
/// `Err` by `Invoker::invoke` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub success: bool,
    pub code: Option<i32>,
    pub stderr: String,
}

impl Invocation {
    #[cfg(test)]
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            stderr: String::new(),
        }
    }
}

/// Runs the external tool once, blocking until it exits.
pub trait Invoker {
    fn invoke(&self, args: &[OsString]) -> std::io::Result<Invocation>;
}

/// Checks that a configured tool path is usable before any work starts.
pub fn validate_tool_path(path: Option<&Path>) -> Result<&Path> {
    let path = path.ok_or(Error::ConfigurationMissing)?;
    if path.as_os_str().is_empty() {
        return Err(Error::ConfigurationMissing);
    }
    if !path.is_file() {
        return Err(Error::InvalidToolPath {
            path: path.to_path_buf(),
        });
    }
    Ok(path)
}

/// ExifTool at a fixed path.
#[derive(Debug, Clone)]
pub struct ExifTool {
    path: PathBuf,
}

impl ExifTool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Like `new`, but fails fast when the path is unset or not a file.
    pub fn locate(path: Option<&Path>) -> Result<Self> {
        validate_tool_path(path).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Invoker for ExifTool {
    fn invoke(&self, args: &[OsString]) -> std::io::Result<Invocation> {
        trace!("Spawning {:?} {:?}", self.path, args);
        let output = Command::new(&self.path)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(Invocation {
            success: output.status.success(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn unset_path_is_configuration_missing() {
        assert!(matches!(
            validate_tool_path(None),
            Err(Error::ConfigurationMissing)
        ));
        assert!(matches!(
            validate_tool_path(Some(Path::new(""))),
            Err(Error::ConfigurationMissing)
        ));
    }

    #[test]
    fn missing_or_directory_path_is_invalid() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("exiftool");
        assert!(matches!(
            validate_tool_path(Some(&missing)),
            Err(Error::InvalidToolPath { .. })
        ));
        assert!(matches!(
            validate_tool_path(Some(dir.path())),
            Err(Error::InvalidToolPath { .. })
        ));
    }

    #[test]
    fn existing_file_is_accepted() {
        let dir = tempdir().unwrap();
        let tool = dir.path().join("exiftool.exe");
        File::create(&tool).unwrap();
        let located = ExifTool::locate(Some(&tool)).unwrap();
        assert_eq!(located.path(), tool.as_path());
    }

    #[test]
    fn spawn_failure_surfaces_as_io_error() {
        let dir = tempdir().unwrap();
        let tool = ExifTool::new(dir.path().join("does-not-exist"));
        assert!(tool.invoke(&[OsString::from("x.jpg")]).is_err());
    }
}
