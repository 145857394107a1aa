//! Main application for the Skill Gomoku GUI

use eframe::egui;
use egui::{Align2, CentralPanel, Context, RichText, TopBottomPanel, Vec2};

use crate::engine::{Event, Session};
use crate::skills::{Skill, SkillConfig};

use super::board_view::BoardView;
use super::panel;
use super::theme::TEXT_SECONDARY;

/// Main Skill Gomoku application: owns the session and the view state
pub struct SkillGomokuApp {
    session: Session,
    board_view: BoardView,
}

impl Default for SkillGomokuApp {
    fn default() -> Self {
        Self {
            session: Session::new(SkillConfig::default()),
            board_view: BoardView::default(),
        }
    }
}

impl SkillGomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (R)").clicked() {
                        self.session.route_event(Event::Reset);
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.session.route_event(Event::Undo);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("Hotseat PvP").color(TEXT_SECONDARY));
                });
            });
        });
    }

    /// Render the central board area
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            if let Some(pos) = self.board_view.show(ui, &self.session) {
                self.session.route_event(Event::BoardClick(pos));
            }
        });
    }

    /// Modal rematch dialog with working Accept/Decline buttons
    fn render_rematch_dialog(&mut self, ctx: &Context) {
        if !self.session.rematch_dialog_open {
            return;
        }
        let requester = self
            .session
            .rematch_requested_by
            .map_or("Someone", |side| self.session.player(side).name.as_str())
            .to_string();

        egui::Window::new("Rematch")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!("{requester} asks to restart the game."));
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Accept").clicked() {
                        self.session.route_event(Event::RematchResponse(true));
                    }
                    if ui.button("Decline").clicked() {
                        self.session.route_event(Event::RematchResponse(false));
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let mut events = Vec::new();

        ctx.input(|i| {
            // 1-6: skills
            const SKILL_KEYS: [egui::Key; 6] = [
                egui::Key::Num1,
                egui::Key::Num2,
                egui::Key::Num3,
                egui::Key::Num4,
                egui::Key::Num5,
                egui::Key::Num6,
            ];
            for (idx, key) in SKILL_KEYS.iter().enumerate() {
                if i.key_pressed(*key) {
                    if let Some(skill) = Skill::from_hotkey(idx as u8 + 1) {
                        events.push(Event::SkillButton(skill));
                    }
                }
            }

            // U/Z - undo
            if i.key_pressed(egui::Key::U) || i.key_pressed(egui::Key::Z) {
                events.push(Event::Undo);
            }

            // R - new game
            if i.key_pressed(egui::Key::R) {
                events.push(Event::Reset);
            }
        });

        for event in events {
            self.session.route_event(event);
        }
    }
}

impl eframe::App for SkillGomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Keyboard first, then one state-machine step for this frame
        self.handle_input(ctx);
        self.session.update();

        // Render UI; panel clicks feed straight back into the engine
        self.render_menu_bar(ctx);
        if let Some(event) = panel::side_panel(ctx, &self.session) {
            self.session.route_event(event);
        }
        self.render_board(ctx);
        self.render_rematch_dialog(ctx);

        // Keep ticking while a stage transition is still pending
        if self.session.has_pending_stage_work() {
            ctx.request_repaint();
        }
    }
}
