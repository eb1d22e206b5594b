use super::models::ExifStripGui;
use crate::types::RunState;
use eframe::egui::{Align, Color32, Frame, Layout, ProgressBar, RichText, Ui};

const COMPONENT_WIDTH: f32 = 120.0;
const ACCENT: Color32 = Color32::from_rgb(255, 165, 0);
const OK_GREEN: Color32 = Color32::from_rgb(100, 200, 100);
const ERR_RED: Color32 = Color32::from_rgb(255, 100, 100);

fn hint(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(Color32::from_gray(120)).size(11.0));
}

pub struct ToolSelectionComponent;

impl ToolSelectionComponent {
    pub fn render(ui: &mut Ui, app: &mut ExifStripGui) {
        ui.heading("ExifTool");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Executable:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.add_enabled_ui(!app.is_busy(), |ui| {
                        if ui.button("Browse").clicked() {
                            app.select_exiftool();
                        }
                    });
                });
            });

            match app.session.tool_path() {
                Some(path) => {
                    ui.label(RichText::new(path.to_string_lossy()).color(OK_GREEN));
                }
                None => {
                    ui.label(RichText::new("NOT SELECTED").color(ERR_RED));
                }
            }
        });
    }
}

pub struct FolderSelectionComponent;

impl FolderSelectionComponent {
    pub fn render(ui: &mut Ui, app: &mut ExifStripGui) {
        ui.heading("Folder");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Images:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.add_enabled_ui(!app.is_busy(), |ui| {
                        if ui.button("Select Folder").clicked() {
                            app.select_folder();
                        }
                    });
                });
            });

            if let Some(path) = &app.folder {
                ui.label(RichText::new(path.to_string_lossy()).color(ACCENT));
            } else {
                ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
            }
            hint(
                ui,
                "Selecting a folder starts cleaning every JPG, JPEG and PNG directly inside it.",
            );
        });
    }
}

pub struct StripOptionsComponent;

impl StripOptionsComponent {
    pub fn render(ui: &mut Ui, app: &mut ExifStripGui) {
        ui.heading("Remove");

        let busy = app.is_busy();
        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_width(COMPONENT_WIDTH);

            ui.add_enabled_ui(!busy, |ui| {
                let options = &mut app.options;
                ui.add_enabled_ui(!options.remove_all, |ui| {
                    ui.checkbox(&mut options.remove_serial, "Remove Serial Numbers");
                    ui.checkbox(&mut options.remove_model, "Remove Camera Model");
                    ui.checkbox(&mut options.remove_gps, "Remove GPS");
                    ui.checkbox(&mut options.remove_datetime, "Remove Date/Time");
                    ui.checkbox(&mut options.remove_software, "Remove Software Tag");
                });
                ui.checkbox(&mut options.remove_all, "Remove ALL EXIF");
                if options.remove_all {
                    hint(ui, "Clears every writable tag. The options above are ignored.");
                }

                ui.add_space(8.0);
                ui.checkbox(&mut options.keep_backup, "Create Backup of Originals");
            });
        });
    }
}

pub struct ProgressComponent;

impl ProgressComponent {
    pub fn render(ui: &mut Ui, app: &mut ExifStripGui) {
        ui.horizontal(|ui| {
            let text = if app.progress_total > 0 {
                format!("{} / {}", app.progress_current, app.progress_total)
            } else {
                String::new()
            };
            ui.add(
                ProgressBar::new(app.progress_fraction())
                    .desired_width(300.0)
                    .text(text),
            );

            ui.add_enabled_ui(app.run_state == RunState::Running, |ui| {
                if ui.button("Cancel").clicked() {
                    app.cancel();
                }
            });
            if app.run_state == RunState::CancelRequested {
                ui.label(RichText::new("Stopping after current file...").color(ACCENT));
            }
        });
    }
}

pub struct FooterComponent;

impl FooterComponent {
    pub fn render(ui: &mut Ui, app: &mut ExifStripGui) {
        ui.horizontal(|ui| {
            let status_color = if app.is_busy() { ACCENT } else { OK_GREEN };

            let timing_text = if app.is_busy() {
                match app.processing_start_time {
                    Some(start_time) => format!("Processing: {:.2?}", start_time.elapsed()),
                    None => "Processing...".to_string(),
                }
            } else if let Some(duration) = app.last_processing_duration {
                format!("Last run: {:.2?}", duration)
            } else {
                "Ready".to_string()
            };

            ui.label(RichText::new(timing_text).color(status_color).size(14.0));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("To CLI").clicked() {
                    let cli_command = app.generate_cli_command();
                    app.push_log(crate::gui::logging::LogEntry::new(
                        tracing::Level::INFO,
                        format!("CLI Command: {}", cli_command),
                        "cli".to_string(),
                    ));
                }

                if ui.button("Save Preset").clicked() {
                    if let Err(e) = app.save_preset() {
                        tracing::error!("Failed to save preset: {}", e);
                    }
                }

                ui.add_enabled_ui(!app.is_busy(), |ui| {
                    if ui.button("Load Preset").clicked() {
                        if let Err(e) = app.load_preset() {
                            tracing::error!("Failed to load preset: {}", e);
                        }
                    }
                });

                if ui.button("Save Logs").clicked() {
                    if let Err(e) = app.save_logs_to_file() {
                        tracing::error!("Failed to save logs: {}", e);
                    }
                }

                if ui.button("Clear").clicked() {
                    if let Ok(mut logs) = app.log_messages.lock() {
                        logs.clear();
                    }
                }

                ui.add_enabled_ui(!app.is_busy(), |ui| {
                    if ui.button("Reset").clicked() {
                        app.options = Default::default();
                    }
                });
            });
        });
    }
}
