#![doc = r#"
exifstrip — batch metadata removal for JPEG/PNG folders.

This crate drives [ExifTool](https://exiftool.org) over every image in a folder,
stripping serial numbers, camera/lens model, GPS, timestamps, the software tag,
or everything at once. It powers both the `exifstrip` CLI and the `exifstripUI`
desktop app, and can be embedded in your own Rust applications.

ExifTool itself is not bundled. Point the crate at an existing executable; the
location is persisted in a small JSON file under the per-user data directory.

Add dependency
--------------
```toml
[dependencies]
exifstrip = { version = "0.1", default-features = false }
```

Quick start: clean a folder
---------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use exifstrip::{Session, StripOptions, TracingSink};

fn main() -> exifstrip::Result<()> {
    let session = Session::new(Some(PathBuf::from("/usr/bin/exiftool")));
    let options = StripOptions {
        remove_gps: true,
        remove_datetime: true,
        ..StripOptions::default()
    };

    let outcome = session.run_blocking(Path::new("/photos/trip"), options, &TracingSink)?;
    println!("{outcome}");
    Ok(())
}
```

Background runs with cancellation
---------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use exifstrip::{BatchEvent, ChannelSink, Session, StripOptions};

fn main() -> exifstrip::Result<()> {
    let session = Session::new(Some(PathBuf::from("/usr/bin/exiftool")));
    let (tx, rx) = mpsc::channel();
    let handle = session.start(Path::new("/photos"), StripOptions::default(), ChannelSink::new(tx))?;

    for event in rx {
        match event {
            BatchEvent::Progress { current, .. } if current == 10 => session.request_cancel(),
            BatchEvent::Finished(outcome) => println!("{outcome}"),
            _ => {}
        }
    }
    handle.join()?;
    Ok(())
}
```

Cancellation is cooperative: it is checked between files, and an ExifTool
process that has already started always runs to completion.

Building the argument list
--------------------------
```rust
use exifstrip::{build_flags, StripOptions};

let flags = build_flags(&StripOptions { remove_all: true, ..StripOptions::default() });
assert_eq!(flags, vec!["-overwrite_original", "-all="]);
```

Error handling
--------------
All fallible functions return `exifstrip::Result<T>`. A missing or invalid
ExifTool path is reported as `Error::ConfigurationMissing` /
`Error::InvalidToolPath` before the target folder is scanned. Per-file failures
never abort a batch; they are counted in the `BatchReport`.

Feature flags
-------------
- `gui`: builds the eframe desktop app and the `gui` module.
- `full`: everything.

Useful modules
--------------
- [`api`] — `Session`, the entry point for surfaces.
- [`core`] — argument builder, scanner, runner, progress sinks.
- [`config`] — persisted ExifTool location.
- [`preset`] — saving and loading `StripOptions`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod preset;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
pub use api::{BatchHandle, Session};
pub use config::AppConfig;
pub use crate::core::args::{build_args, build_flags, command_line};
pub use crate::core::job::Job;
pub use crate::core::progress::{BatchEvent, ChannelSink, ProgressSink, TracingSink};
pub use crate::core::runner::{clean_directory, run_batch};
pub use crate::core::scan::{is_supported_image, scan_images};
pub use crate::core::tool::{ExifTool, Invocation, Invoker};
pub use error::{Error, Result};
pub use types::{BatchReport, CancelToken, RunOutcome, RunState, StripOptions};
