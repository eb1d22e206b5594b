pub mod app;
pub mod components;
pub mod logging;
pub mod models;
pub mod processing;

pub use models::ExifStripGui;
pub use models::init_gui_logging;
