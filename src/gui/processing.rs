use super::logging::LogEntry;
use super::models::ExifStripGui;
use crate::config::AppConfig;
use crate::core::progress::{BatchEvent, ChannelSink};
use crate::types::{RunOutcome, RunState};
use rfd::{MessageDialog, MessageLevel};
use std::time::Instant;
use tracing::{debug, error, info, trace, warn};

fn show_message(level: MessageLevel, title: &str, description: &str) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .show();
}

impl ExifStripGui {
    pub fn select_exiftool(&mut self) {
        let mut dialog = rfd::FileDialog::new().set_title("Select exiftool");
        if cfg!(windows) {
            dialog = dialog.add_filter("Executable", &["exe"]);
        }
        let Some(path) = dialog.pick_file() else {
            return;
        };

        self.session.set_tool_path(Some(path.clone()));
        info!("Selected exiftool: {:?}", path);

        let config = AppConfig {
            exiftool_path: Some(path),
        };
        match config.save() {
            Ok(saved) => debug!("Config saved to {:?}", saved),
            Err(e) => {
                error!("Could not save config: {}", e);
                show_message(
                    MessageLevel::Error,
                    "Config Error",
                    &format!("Could not save config:\n{}", e),
                );
            }
        }
    }

    pub fn select_folder(&mut self) {
        if self.is_busy() {
            debug!("Batch already running, ignoring folder selection");
            return;
        }
        if self.session.tool_path().is_none() {
            show_message(
                MessageLevel::Error,
                "Missing ExifTool",
                "Please select exiftool first.",
            );
            return;
        }
        let Some(folder) = rfd::FileDialog::new().pick_folder() else {
            return;
        };

        info!("Folder: {:?}", folder);
        self.folder = Some(folder);
        self.start_processing();
    }

    /// Starts a batch over the selected folder with a snapshot of the options.
    pub fn start_processing(&mut self) {
        if self.is_busy() {
            debug!("Processing already in progress, ignoring request");
            return;
        }
        let Some(folder) = self.folder.clone() else {
            warn!("No folder selected");
            return;
        };

        let (tx, rx) = std::sync::mpsc::channel();
        match self
            .session
            .start(&folder, self.options, ChannelSink::new(tx))
        {
            Ok(handle) => {
                self.push_log(LogEntry::separator("Processing Started"));
                trace!("Batch worker spawned for {:?}", folder);
                self.run_state = RunState::Running;
                self.progress_current = 0;
                self.progress_total = 0;
                self.processing_start_time = Some(Instant::now());
                self.last_processing_duration = None;
                self.batch_events = Some(rx);
                self.batch_handle = Some(handle);
            }
            Err(e) => {
                error!("{}", e);
                show_message(MessageLevel::Error, "Cannot start", &e.to_string());
            }
        }
    }

    pub fn cancel(&mut self) {
        if self.run_state == RunState::Running {
            self.session.request_cancel();
            self.run_state = RunState::CancelRequested;
            self.push_log(LogEntry::batch("Cancelling..."));
        }
    }

    /// Applies one event from the worker to the window state.
    pub fn apply_event(&mut self, event: BatchEvent) {
        match event {
            BatchEvent::Log(line) => self.push_log(LogEntry::batch(line)),
            BatchEvent::Progress { current, total } => {
                self.progress_current = current;
                self.progress_total = total;
            }
            BatchEvent::Finished(outcome) => {
                if let RunOutcome::Completed(report) | RunOutcome::Cancelled(report) = outcome {
                    self.progress_total = report.total;
                    self.progress_current = report.processed;
                }
                if outcome == RunOutcome::NothingToDo {
                    show_message(MessageLevel::Info, "No Images", "No JPG/PNG files found.");
                }
                self.set_idle();
            }
        }
    }

    /// Drains worker events and reaps the worker once it has exited.
    /// Called every frame.
    pub fn poll_batch(&mut self) {
        let events: Vec<BatchEvent> = match &self.batch_events {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };
        for event in events {
            self.apply_event(event);
        }

        let finished = self
            .batch_handle
            .as_ref()
            .map(|handle| handle.is_finished())
            .unwrap_or(false);
        if finished {
            if let Some(handle) = self.batch_handle.take() {
                if let Err(e) = handle.join() {
                    error!("Processing failed: {}", e);
                }
            }
            // Pick up anything sent between the drain above and thread exit.
            if let Some(rx) = self.batch_events.take() {
                let rest: Vec<BatchEvent> = rx.try_iter().collect();
                for event in rest {
                    self.apply_event(event);
                }
            }
            self.set_idle();
        }
    }

    fn set_idle(&mut self) {
        if self.run_state == RunState::Idle {
            return;
        }
        if let Some(start_time) = self.processing_start_time.take() {
            let duration = start_time.elapsed();
            self.last_processing_duration = Some(duration);
            info!("Processing completed in {:.2?}", duration);
        }
        self.run_state = RunState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BatchReport;

    #[test]
    fn finished_event_returns_to_idle() {
        let mut gui = ExifStripGui::default();
        gui.run_state = RunState::Running;
        gui.processing_start_time = Some(Instant::now());

        gui.apply_event(BatchEvent::Progress {
            current: 1,
            total: 3,
        });
        assert_eq!(gui.progress_current, 1);
        assert!(gui.is_busy());

        gui.apply_event(BatchEvent::Finished(RunOutcome::Cancelled(BatchReport {
            total: 3,
            processed: 1,
            ..Default::default()
        })));
        assert_eq!(gui.run_state, RunState::Idle);
        assert!(gui.last_processing_duration.is_some());
        assert_eq!(gui.progress_total, 3);
    }

    #[test]
    fn cancel_only_applies_while_running() {
        let mut gui = ExifStripGui::default();
        gui.cancel();
        assert_eq!(gui.run_state, RunState::Idle);
        assert!(!gui.session.cancel_token().is_cancelled());

        gui.run_state = RunState::Running;
        gui.cancel();
        assert_eq!(gui.run_state, RunState::CancelRequested);
        assert!(gui.session.cancel_token().is_cancelled());
    }

    #[test]
    fn log_events_reach_the_panel() {
        let mut gui = ExifStripGui::default();
        gui.apply_event(BatchEvent::Log("[1/2] Cleaning a.jpg".to_string()));
        let logs = gui.log_messages.lock().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].message, "[1/2] Cleaning a.jpg");
    }
}
