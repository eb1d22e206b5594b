#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

static SERIAL: Mutex<()> = Mutex::new(());

/// Serializes tests that write and then exec a script. A child forked by a
/// parallel test can inherit the still-open write handle and make the exec
/// fail with ETXTBSY.
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A folder of empty image stand-ins plus a fake ExifTool that appends each
/// argument vector (one line per call) to `calls.log`.
pub struct Fixture {
    pub root: TempDir,
    pub photos: PathBuf,
    pub tool: PathBuf,
    pub calls_log: PathBuf,
}

impl Fixture {
    pub fn new(files: &[&str]) -> Self {
        Self::with_delay(files, None)
    }

    /// `delay` is passed to `sleep` inside the fake tool on every call.
    pub fn with_delay(files: &[&str], delay: Option<&str>) -> Self {
        let root = tempfile::tempdir().unwrap();
        let photos = root.path().join("photos");
        fs::create_dir(&photos).unwrap();
        for name in files {
            File::create(photos.join(name)).unwrap();
        }

        let calls_log = root.path().join("calls.log");
        let tool = root.path().join("exiftool");
        let sleep = delay.map(|d| format!("sleep {}\n", d)).unwrap_or_default();
        let script = format!(
            "#!/bin/sh\n{}printf '%s\\n' \"$*\" >> '{}'\n",
            sleep,
            calls_log.display()
        );
        fs::write(&tool, script).unwrap();
        make_executable(&tool);

        Self {
            root,
            photos,
            tool,
            calls_log,
        }
    }

    /// One entry per tool invocation.
    pub fn calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.calls_log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(unix)]
pub fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) {}
