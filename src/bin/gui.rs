#[cfg(feature = "gui")]
use eframe::{NativeOptions, egui::ViewportBuilder};
#[cfg(feature = "gui")]
use exifstrip::gui::ExifStripGui;

#[cfg(feature = "gui")]
fn main() -> Result<(), eframe::Error> {
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([800.0, 560.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EXIF Cleaner",
        options,
        Box::new(|_cc| {
            exifstrip::gui::init_gui_logging();
            Ok(Box::new(ExifStripGui::new()))
        }),
    )
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("GUI feature is not enabled. Please build with --features gui");
    std::process::exit(1);
}
