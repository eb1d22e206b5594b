//! ExifTool argument building.
//!
//! The flag list is a pure function of `StripOptions`: overwrite mode first,
//! then either the wildcard clear or the selected field groups in a fixed order.
use std::ffi::OsString;
use std::path::Path;

use crate::types::StripOptions;

/// Overwrite mode used when a backup of the original is requested.
pub const OVERWRITE_IN_PLACE: &str = "-overwrite_original_in_place";
/// Overwrite mode used otherwise.
pub const OVERWRITE_ORIGINAL: &str = "-overwrite_original";
/// Clears every writable tag.
pub const CLEAR_ALL: &str = "-all=";

pub const SERIAL_TAGS: [&str; 3] = [
    "-SerialNumber=",
    "-InternalSerialNumber=",
    "-BodySerialNumber=",
];
pub const MODEL_TAGS: [&str; 2] = ["-Model=", "-LensModel="];
pub const GPS_TAGS: [&str; 1] = ["-GPS:all="];
pub const DATETIME_TAGS: [&str; 3] = ["-DateTimeOriginal=", "-CreateDate=", "-ModifyDate="];
pub const SOFTWARE_TAGS: [&str; 1] = ["-Software="];

/// Flags for one invocation, without the target file.
pub fn build_flags(options: &StripOptions) -> Vec<&'static str> {
    let mut flags = Vec::with_capacity(12);

    flags.push(if options.keep_backup {
        OVERWRITE_IN_PLACE
    } else {
        OVERWRITE_ORIGINAL
    });

    if options.remove_all {
        flags.push(CLEAR_ALL);
        return flags;
    }

    let groups: [(bool, &[&'static str]); 5] = [
        (options.remove_serial, &SERIAL_TAGS),
        (options.remove_model, &MODEL_TAGS),
        (options.remove_gps, &GPS_TAGS),
        (options.remove_datetime, &DATETIME_TAGS),
        (options.remove_software, &SOFTWARE_TAGS),
    ];
    for (enabled, tags) in groups {
        if enabled {
            flags.extend_from_slice(tags);
        }
    }

    flags
}

/// Arguments handed to the tool for `file`: flags followed by the path.
pub fn build_args(options: &StripOptions, file: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = build_flags(options).into_iter().map(OsString::from).collect();
    args.push(file.as_os_str().to_os_string());
    args
}

/// Human-readable command line, for logs and the "To CLI" view.
pub fn command_line(tool: &Path, options: &StripOptions, file: &Path) -> String {
    let mut parts = vec![shell_quote(&tool.to_string_lossy())];
    parts.extend(build_flags(options).into_iter().map(str::to_string));
    parts.push(shell_quote(&file.to_string_lossy()));
    parts.join(" ")
}

/// Single-quotes `s` unless it is made only of characters no shell treats
/// specially. Embedded `'` becomes `'\''`.
pub fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+=:,@%".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
