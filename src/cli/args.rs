use clap::Parser;
use std::path::PathBuf;

use exifstrip::StripOptions;

#[derive(Parser, Debug)]
#[command(name = "exifstrip", version, about = "Strip EXIF metadata from a folder of images using ExifTool")]
pub struct CliArgs {
    /// Folder containing JPG/JPEG/PNG files (not searched recursively)
    pub folder: Option<PathBuf>,

    /// ExifTool executable for this run (overrides the saved one)
    #[arg(long)]
    pub tool: Option<PathBuf>,

    /// Save this ExifTool executable as the default
    #[arg(long)]
    pub set_tool: Option<PathBuf>,

    /// Remove serial numbers (SerialNumber, InternalSerialNumber, BodySerialNumber)
    #[arg(long, default_value_t = false)]
    pub serial: bool,

    /// Remove camera and lens model
    #[arg(long, default_value_t = false)]
    pub model: bool,

    /// Remove all GPS tags
    #[arg(long, default_value_t = false)]
    pub gps: bool,

    /// Remove DateTimeOriginal, CreateDate and ModifyDate
    #[arg(long, default_value_t = false)]
    pub datetime: bool,

    /// Remove the Software tag
    #[arg(long, default_value_t = false)]
    pub software: bool,

    /// Remove ALL metadata (overrides the field flags above)
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Create backup of originals (overwrite in place)
    #[arg(long, default_value_t = false)]
    pub backup: bool,

    /// Load options from a preset file; flags given here are added on top
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Print the ExifTool command for each file instead of running it
    #[arg(long, default_value_t = false)]
    pub print_args: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Options from the flags alone, every toggle off unless given.
    pub fn flag_options(&self) -> StripOptions {
        StripOptions {
            remove_serial: self.serial,
            remove_model: self.model,
            remove_gps: self.gps,
            remove_datetime: self.datetime,
            remove_software: self.software,
            remove_all: self.all,
            keep_backup: self.backup,
        }
    }

    /// Flags OR-ed on top of `base`.
    pub fn merge_into(&self, base: StripOptions) -> StripOptions {
        let flags = self.flag_options();
        StripOptions {
            remove_serial: base.remove_serial || flags.remove_serial,
            remove_model: base.remove_model || flags.remove_model,
            remove_gps: base.remove_gps || flags.remove_gps,
            remove_datetime: base.remove_datetime || flags.remove_datetime,
            remove_software: base.remove_software || flags.remove_software,
            remove_all: base.remove_all || flags.remove_all,
            keep_backup: base.keep_backup || flags.keep_backup,
        }
    }
}
