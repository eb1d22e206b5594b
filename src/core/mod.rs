//! Core building blocks: the ExifTool argument builder, the directory scanner,
//! the process-launching seam, progress sinks, and the batch runner. These are
//! internal primitives consumed by the high-level `api` module.
pub mod args;
pub mod job;
pub mod progress;
pub mod runner;
pub mod scan;
pub mod tool;
