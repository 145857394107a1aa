//! Skill Gomoku GUI
//!
//! A hotseat two-player Gomoku with turn-bending skills.

use skill_gomoku::ui::SkillGomokuApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Skill Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Skill Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(SkillGomokuApp::new(cc)))),
    )
}
