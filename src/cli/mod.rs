//! Command Line Interface (CLI) layer for exifstrip.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for cleaning a folder from the
//! terminal. It wires user-provided options to the library's `Session`.
//!
//! If you are embedding exifstrip into another application, prefer using
//! `exifstrip::Session` instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
