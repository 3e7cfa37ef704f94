//! Gobang GUI
//!
//! A five-in-a-row game against a heuristic opponent.

use gobang::ui::GobangApp;

fn main() -> Result<(), eframe::Error> {
    let size = gobang::ui::board_pixel_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_resizable(false)
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(|cc| Ok(Box::new(GobangApp::new(cc)))),
    )
}
