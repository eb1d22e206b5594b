use super::components::*;
use super::models::ExifStripGui;
use crate::gui::logging::{LogEntry, get_log_buffer, push_bounded};
use eframe::egui;
use tracing::Level;

fn format_log_entry(entry: &LogEntry) -> egui::RichText {
    // Separators
    if entry.message.starts_with("---") {
        return egui::RichText::new(&entry.message)
            .color(egui::Color32::from_rgb(255, 165, 0))
            .monospace()
            .strong();
    }

    // CLI commands
    if entry.target == "cli" {
        return egui::RichText::new(&entry.message)
            .color(egui::Color32::from_rgb(100, 255, 100))
            .monospace()
            .strong();
    }

    // Per-file progress lines read better without level decoration.
    if entry.target == "batch" {
        return egui::RichText::new(format!("[{}] {}", entry.timestamp, entry.message))
            .color(egui::Color32::from_gray(220))
            .monospace();
    }

    let (color, icon) = match entry.level {
        Level::ERROR => (egui::Color32::from_rgb(255, 100, 100), "❌"),
        Level::WARN => (egui::Color32::from_rgb(255, 200, 100), "⚠️"),
        Level::INFO => (egui::Color32::from_rgb(100, 200, 255), "ℹ️"),
        Level::DEBUG => (egui::Color32::from_rgb(150, 150, 150), "🔍"),
        Level::TRACE => (egui::Color32::from_rgb(100, 100, 100), "🔎"),
    };

    let formatted_text = format!(
        "[{}] {} {}: {}",
        entry.timestamp, icon, entry.level, entry.message
    );

    egui::RichText::new(formatted_text).color(color).monospace()
}

impl ExifStripGui {
    /// Moves entries captured by the tracing layer into the panel.
    fn collect_tracing_logs(&mut self) -> bool {
        let mut new_messages = Vec::new();
        if let Ok(mut buf) = get_log_buffer().lock() {
            new_messages.extend(buf.drain(..));
        }
        if new_messages.is_empty() {
            return false;
        }
        if let Ok(mut logs) = self.log_messages.lock() {
            for entry in new_messages {
                push_bounded(&mut logs, entry);
            }
        }
        true
    }

    fn is_visible(&self, entry: &LogEntry) -> bool {
        // Batch lines and CLI commands are always shown.
        self.min_log_level == Level::TRACE
            || entry.target == "batch"
            || entry.target == "cli"
            || entry.level == self.min_log_level
    }
}

impl eframe::App for ExifStripGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut style = (*ctx.style()).clone();
        style.visuals.override_text_color = Some(egui::Color32::from_gray(220));
        style.visuals.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(40, 40, 40);
        style.visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(50, 50, 50);
        style.visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(60, 60, 60);
        style.visuals.widgets.active.bg_fill = egui::Color32::from_rgb(70, 70, 70);
        style.visuals.panel_fill = egui::Color32::from_rgb(30, 30, 30);
        style.visuals.window_fill = egui::Color32::from_rgb(25, 25, 25);
        style.visuals.faint_bg_color = egui::Color32::from_rgb(45, 45, 45);
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(20, 20, 20);
        ctx.set_style(style);

        self.poll_batch();
        let has_new_logs = self.collect_tracing_logs();
        if has_new_logs || self.is_busy() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("EXIF Cleaner")
                        .size(32.0)
                        .color(egui::Color32::from_gray(220))
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(10.0)
                        .color(egui::Color32::from_gray(150)),
                );
            });
            ProgressComponent::render(ui, self);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            FooterComponent::render(ui, self);
        });

        egui::SidePanel::left("left_panel")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(10.0);
                        ToolSelectionComponent::render(ui, self);
                        ui.separator();
                        FolderSelectionComponent::render(ui, self);
                        ui.separator();
                        StripOptionsComponent::render(ui, self);
                        ui.add_space(20.0);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Log Output");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.selectable_value(&mut self.min_log_level, Level::ERROR, "ERROR");
                    ui.selectable_value(&mut self.min_log_level, Level::WARN, "WARN");
                    ui.selectable_value(&mut self.min_log_level, Level::INFO, "INFO");
                    ui.selectable_value(&mut self.min_log_level, Level::DEBUG, "DEBUG");
                    ui.selectable_value(&mut self.min_log_level, Level::TRACE, "ALL");
                });
            });

            ui.add_space(5.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    let Ok(logs) = self.log_messages.lock() else {
                        return;
                    };
                    if logs.is_empty() {
                        ui.centered_and_justified(|ui| {
                            ui.label(
                                egui::RichText::new("No log messages")
                                    .color(egui::Color32::from_gray(120)),
                            );
                        });
                        return;
                    }
                    for entry in logs.iter().filter(|e| self.is_visible(e)) {
                        ui.label(format_log_entry(entry));
                    }
                });
        });
    }
}
