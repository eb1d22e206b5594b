use std::path::Path;

use tracing::{info, warn};

use exifstrip::config::AppConfig;
use exifstrip::core::tool::validate_tool_path;
use exifstrip::preset::load_preset;
use exifstrip::{Job, Session, StripOptions, TracingSink, command_line};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_target(false)
            .without_time()
            .init();
    }
}

/// Persists `tool` as the default ExifTool. A save failure is reported but
/// does not stop a run that was also requested.
fn remember_tool(config: &mut AppConfig, tool: &Path) -> Result<(), AppError> {
    validate_tool_path(Some(tool)).map_err(AppError::Config)?;
    config.exiftool_path = Some(tool.to_path_buf());
    match config.save() {
        Ok(path) => info!("Selected exiftool: {:?} (saved to {:?})", tool, path),
        Err(e) => warn!("Could not save config: {}", e),
    }
    Ok(())
}

fn resolve_options(args: &CliArgs) -> Result<StripOptions, AppError> {
    let base = match &args.preset {
        Some(path) => load_preset(path)?,
        None => StripOptions::none(),
    };
    let options = args.merge_into(base);
    if options.is_noop() {
        warn!(
            "Nothing selected to remove; files are only rewritten. Pass --serial, --model, --gps, --datetime, --software or --all"
        );
    }
    Ok(options)
}

fn print_commands(tool: Option<&Path>, folder: &Path, options: StripOptions) -> Result<(), AppError> {
    let tool = validate_tool_path(tool)?;
    let job = Job::scan(folder, options).map_err(|source| AppError::Batch {
        folder: folder.to_path_buf(),
        source,
    })?;
    if job.is_empty() {
        info!("No JPG/PNG files found in {:?}", folder);
    }
    for file in &job.files {
        println!("{}", command_line(tool, &options, file));
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let mut config = AppConfig::load();
    if let Some(tool) = &args.set_tool {
        remember_tool(&mut config, tool)?;
    }

    let Some(folder) = args.folder.as_deref() else {
        if args.set_tool.is_some() {
            return Ok(());
        }
        return Err(AppError::MissingArgument {
            arg: "<FOLDER>".to_string(),
        }
        .into());
    };

    let tool_path = args.tool.clone().or(config.exiftool_path.clone());
    let options = resolve_options(&args)?;
    info!("Folder: {:?}", folder);

    if args.print_args {
        print_commands(tool_path.as_deref(), folder, options)?;
        return Ok(());
    }

    let session = Session::new(tool_path);
    session
        .run_blocking(folder, options, &TracingSink)
        .map_err(|source| AppError::Batch {
            folder: folder.to_path_buf(),
            source,
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use exifstrip::preset::save_preset;
    use std::ffi::OsStr;
    use tempfile::tempdir;

    #[test]
    fn flags_map_onto_options() {
        let args = CliArgs::try_parse_from(["exifstrip", "photos", "--gps", "--backup"]).unwrap();
        let options = resolve_options(&args).unwrap();
        assert_eq!(
            options,
            StripOptions {
                remove_gps: true,
                keep_backup: true,
                ..StripOptions::none()
            }
        );
    }

    #[test]
    fn no_field_flags_still_runs() {
        let args = CliArgs::try_parse_from(["exifstrip", "photos", "--backup"]).unwrap();
        let options = resolve_options(&args).unwrap();
        assert!(options.is_noop());
        assert_eq!(
            exifstrip::build_flags(&options),
            vec!["-overwrite_original_in_place"]
        );
    }

    #[test]
    fn flags_add_to_preset() {
        let dir = tempdir().unwrap();
        let preset = dir.path().join("p.exifstrip");
        save_preset(
            &preset,
            &StripOptions {
                remove_serial: false,
                remove_model: true,
                ..StripOptions::default()
            },
        )
        .unwrap();

        let args = CliArgs::try_parse_from([
            OsStr::new("exifstrip"),
            OsStr::new("photos"),
            OsStr::new("--software"),
            OsStr::new("--preset"),
            preset.as_os_str(),
        ])
        .unwrap();
        let options = resolve_options(&args).unwrap();
        assert!(options.remove_model);
        assert!(options.remove_software);
        assert!(!options.remove_serial);
    }

    #[test]
    fn print_args_requires_a_tool() {
        let dir = tempdir().unwrap();
        let result = print_commands(None, dir.path(), StripOptions::default());
        assert!(matches!(
            result,
            Err(AppError::Library(exifstrip::Error::ConfigurationMissing))
        ));
    }
}
