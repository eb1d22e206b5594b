use crate::api::{BatchHandle, Session};
use crate::config::AppConfig;
use crate::core::progress::BatchEvent;
use crate::core::args::shell_quote;
use crate::gui::logging::{GuiLogLayer, LogEntry};
use crate::preset::{PRESET_EXTENSION, load_preset, save_preset};
use crate::types::{RunState, StripOptions};
use once_cell::sync::OnceCell;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

pub fn init_gui_logging() {
    LOGGING_INIT.get_or_init(|| {
        let gui_layer = GuiLogLayer::new();

        // Keep eframe/winit chatter out of the log panel.
        let filter = EnvFilter::new("trace")
            .add_directive("eframe=info".parse().expect("static directive"))
            .add_directive("winit=info".parse().expect("static directive"))
            .add_directive("egui_glow=info".parse().expect("static directive"));

        let subscriber = Registry::default().with(gui_layer).with(filter);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

pub struct ExifStripGui {
    // Tool location and cancel flag
    pub session: Session,

    // Input
    pub folder: Option<PathBuf>,
    pub options: StripOptions,

    // Status
    pub run_state: RunState,
    pub progress_current: usize,
    pub progress_total: usize,
    pub processing_start_time: Option<Instant>,
    pub last_processing_duration: Option<Duration>,

    // Log panel
    pub min_log_level: Level,
    pub log_messages: Arc<Mutex<Vec<LogEntry>>>,

    // Background batch
    pub batch_events: Option<Receiver<BatchEvent>>,
    pub batch_handle: Option<BatchHandle>,
}

impl Default for ExifStripGui {
    fn default() -> Self {
        Self {
            session: Session::default(),
            folder: None,
            options: StripOptions::default(),
            run_state: RunState::Idle,
            progress_current: 0,
            progress_total: 0,
            processing_start_time: None,
            last_processing_duration: None,
            min_log_level: Level::TRACE,
            log_messages: Arc::new(Mutex::new(Vec::new())),
            batch_events: None,
            batch_handle: None,
        }
    }
}

impl ExifStripGui {
    /// Window state with the saved ExifTool location loaded.
    pub fn new() -> Self {
        let config = AppConfig::load();
        Self {
            session: Session::new(config.exiftool_path),
            ..Self::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        self.run_state.is_busy()
    }

    /// Fraction for the progress bar.
    pub fn progress_fraction(&self) -> f32 {
        if self.progress_total == 0 {
            0.0
        } else {
            self.progress_current as f32 / self.progress_total as f32
        }
    }

    pub fn push_log(&self, entry: LogEntry) {
        if let Ok(mut logs) = self.log_messages.lock() {
            crate::gui::logging::push_bounded(&mut logs, entry);
        }
    }

    fn level_visible(&self, level: &Level) -> bool {
        self.min_log_level == Level::TRACE || *level == self.min_log_level
    }

    pub fn save_logs_to_file(&self) -> Result<(), Box<dyn std::error::Error>> {
        let logs = self
            .log_messages
            .lock()
            .map_err(|e| format!("Failed to lock logs: {}", e))?;

        if logs.is_empty() {
            return Err("No logs to save".into());
        }

        let filtered_logs: Vec<&LogEntry> = logs
            .iter()
            .filter(|entry| self.level_visible(&entry.level))
            .collect();

        if filtered_logs.is_empty() {
            return Err("No logs match the current filter level".into());
        }

        let Some(save_path) = rfd::FileDialog::new()
            .add_filter("Log files", &["log", "txt"])
            .set_file_name("exifstrip.log")
            .save_file()
        else {
            return Err("No save location selected".into());
        };

        let mut log_content = String::new();
        log_content.push_str("=== exifstrip Log File ===\n");
        log_content.push_str(&format!("Generated: {}\n", chrono::Local::now().to_rfc3339()));
        log_content.push_str(&format!("Total Logs: {}\n", filtered_logs.len()));
        log_content.push_str("==========================\n\n");

        for entry in &filtered_logs {
            log_content.push_str(&format!(
                "[{}] {} {}: {}\n",
                entry.timestamp, entry.level, entry.target, entry.message
            ));
        }

        fs::write(&save_path, log_content)?;

        tracing::info!(
            "Logs saved to: {:?} ({} entries)",
            save_path,
            filtered_logs.len()
        );
        Ok(())
    }

    pub fn save_preset(&self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(save_path) = rfd::FileDialog::new()
            .add_filter("exifstrip presets", &[PRESET_EXTENSION])
            .set_file_name(format!("preset.{}", PRESET_EXTENSION))
            .save_file()
        else {
            return Err("No save location selected".into());
        };
        save_preset(&save_path, &self.options)?;
        Ok(())
    }

    pub fn load_preset(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(load_path) = rfd::FileDialog::new()
            .add_filter("exifstrip presets", &[PRESET_EXTENSION])
            .pick_file()
        else {
            return Err("No preset file selected".into());
        };
        self.options = load_preset(&load_path)?;
        Ok(())
    }

    /// The `exifstrip` invocation that reproduces the current selection.
    pub fn generate_cli_command(&self) -> String {
        let mut cmd = String::from("exifstrip");

        if let Some(folder) = &self.folder {
            cmd.push_str(&format!(" {}", shell_quote(&folder.to_string_lossy())));
        }
        if let Some(tool) = self.session.tool_path() {
            cmd.push_str(&format!(" --tool {}", shell_quote(&tool.to_string_lossy())));
        }

        let o = &self.options;
        if o.remove_all {
            cmd.push_str(" --all");
        } else {
            for (on, flag) in [
                (o.remove_serial, " --serial"),
                (o.remove_model, " --model"),
                (o.remove_gps, " --gps"),
                (o.remove_datetime, " --datetime"),
                (o.remove_software, " --software"),
            ] {
                if on {
                    cmd.push_str(flag);
                }
            }
        }
        if o.keep_backup {
            cmd.push_str(" --backup");
        }

        cmd
    }
}
