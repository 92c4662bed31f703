#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod helpers;
mod modules;
mod preview;
mod settings;
mod telemetry;
mod theme;
mod toasts;

const WINDOW_TITLE: &str = "🎥 FrameMatch: Image in Video Detector";

fn main() -> eframe::Result {
    // Keep the guard alive for the whole run so the file log is flushed.
    let _log_guard = match telemetry::init_logging(&telemetry::LogConfig::default()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("logging disabled: {e}");
            None
        }
    };

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([980.0, 820.0])
            .with_min_inner_size([640.0, 520.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "FrameMatch",
        native_options,
        Box::new(|cc| Ok(Box::new(app::FrameMatchApp::new(cc)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_title_uses_plain_punctuation() {
        assert!(WINDOW_TITLE.contains("FrameMatch: "));
        assert!(!WINDOW_TITLE.contains('\u{2014}'));
    }
}
