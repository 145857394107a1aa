//! Side panel: skill buttons, turn info, status line, message area

use egui::{Context, CornerRadius, Frame, RichText, SidePanel};

use crate::board::Stone;
use crate::engine::{Event, Outcome, Session};
use crate::skills::Skill;

use super::theme::*;

/// Render the right-hand panel; returns at most one click event.
pub fn side_panel(ctx: &Context, session: &Session) -> Option<Event> {
    let mut event = None;

    SidePanel::right("info_panel")
        .min_width(250.0)
        .max_width(300.0)
        .frame(Frame::new().fill(PANEL_BG))
        .show(ctx, |ui| {
            ui.add_space(12.0);
            render_title_card(ui);
            ui.add_space(12.0);
            render_turn_card(ui, session);
            ui.add_space(10.0);
            render_skills_card(ui, session, &mut event);
            ui.add_space(10.0);
            render_status_card(ui, session);
            ui.add_space(10.0);
            render_actions_card(ui, &mut event);

            if let Some(outcome) = session.outcome {
                ui.add_space(10.0);
                render_game_over_card(ui, session, outcome, &mut event);
            }

            ui.add_space(10.0);
            render_message_card(ui, session);
        });

    event
}

/// Helper to create a card frame
fn card_frame() -> Frame {
    Frame::new()
        .fill(CARD_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(12.0)
}

fn render_title_card(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
        ui.add_space(4.0);
        ui.label(RichText::new("SKILL GOMOKU").size(20.0).strong().color(TEXT_PRIMARY));
    });
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new("five in a row, six ways to cheat").size(11.0).color(TEXT_MUTED));
    });
}

fn render_turn_card(ui: &mut egui::Ui, session: &Session) {
    card_frame().show(ui, |ui| {
        let is_black = session.turn_side == Stone::Black;
        let (stone_char, accent) = if is_black {
            ("●", egui::Color32::from_rgb(70, 70, 75))
        } else {
            ("○", egui::Color32::from_rgb(220, 220, 225))
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(stone_char).size(28.0).color(accent));
            ui.add_space(10.0);
            ui.vertical(|ui| {
                let name = session.player(session.turn_side).name.as_str();
                ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
                let status = if session.outcome.is_some() {
                    ("Game over", STATUS_WARNING)
                } else if session.freeze_window_open {
                    ("Frozen!", STATUS_ALERT)
                } else {
                    ("Your turn", STATUS_OK)
                };
                ui.label(RichText::new(status.0).size(12.0).color(status.1));
            });
        });

        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("Move #{}", session.history.len()))
                .size(11.0)
                .color(TEXT_SECONDARY),
        );
    });
}

/// The six skill buttons in a 2x3 grid with cooldown masks
fn render_skills_card(ui: &mut egui::Ui, session: &Session, event: &mut Option<Event>) {
    card_frame().show(ui, |ui| {
        ui.label(RichText::new("SKILLS").size(10.0).color(TEXT_MUTED));
        ui.add_space(8.0);

        let player = session.player(session.turn_side);
        let mut skills = Skill::ALL.iter();
        for _ in 0..3 {
            ui.horizontal(|ui| {
                for skill in skills.by_ref().take(2) {
                    if render_skill_button(ui, *skill, player.cooldown(*skill)) {
                        *event = Some(Event::SkillButton(*skill));
                    }
                }
            });
            ui.add_space(6.0);
        }
    });
}

/// One skill button; returns true on click
fn render_skill_button(ui: &mut egui::Ui, skill: Skill, cooldown: u8) -> bool {
    let ready = cooldown == 0;
    let fill = if ready { BUTTON_BG } else { BUTTON_COOLDOWN_BG };
    let mut clicked = false;

    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(96.0);
            let title_color = if ready { TEXT_PRIMARY } else { TEXT_MUTED };
            let label = egui::Label::new(
                RichText::new(format!("{} {}", skill.hotkey(), skill.name()))
                    .size(11.0)
                    .color(title_color),
            )
            .sense(egui::Sense::click());

            let response = ui.add(label).on_hover_text(skill.description());
            if response.clicked() {
                clicked = true;
            }

            let footer = if ready {
                RichText::new("ready").size(10.0).color(STATUS_OK)
            } else {
                RichText::new(format!("cooldown {cooldown}"))
                    .size(10.0)
                    .color(STATUS_WARNING)
            };
            ui.label(footer);
        });
    ui.add_space(4.0);

    clicked
}

/// Small status line mirroring the overlay flags
fn render_status_card(ui: &mut egui::Ui, session: &Session) {
    let player = session.player(session.turn_side);
    let status = if session.freeze_window_open {
        Some(("Frozen: press 3 to counter, or click to skip", STATUS_ALERT))
    } else if session.target_select_active {
        Some(("Remove Stone: pick an enemy stone", STATUS_WARNING))
    } else if session.rematch_dialog_open {
        Some(("Rematch requested: waiting for an answer", STATUS_WARNING))
    } else if player.stance {
        Some(("Counter Stance armed", STATUS_OK))
    } else {
        None
    };

    if let Some((text, color)) = status {
        card_frame().show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0).color(color));
        });
    }
}

fn render_actions_card(ui: &mut egui::Ui, event: &mut Option<Event>) {
    card_frame().show(ui, |ui| {
        ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                let undo = egui::Label::new(RichText::new("↩ Undo (U)").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(undo).clicked() {
                    *event = Some(Event::Undo);
                }
            });

            ui.add_space(4.0);

            btn_frame.show(ui, |ui| {
                let reset = egui::Label::new(RichText::new("⟳ New Game (R)").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(reset).clicked() {
                    *event = Some(Event::Reset);
                }
            });
        });

        ui.add_space(8.0);
        ui.label(RichText::new("Hotkeys: 1-6 skills · U undo · R restart").size(10.0).color(TEXT_MUTED));
    });
}

fn render_game_over_card(
    ui: &mut egui::Ui,
    session: &Session,
    outcome: Outcome,
    event: &mut Option<Event>,
) {
    let headline = match outcome {
        Outcome::Win(side) => format!("{} WINS!", session.player(side).name.to_uppercase()),
        Outcome::Draw => "DRAW".to_string(),
    };

    Frame::new()
        .fill(egui::Color32::from_rgb(45, 80, 55))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                ui.add_space(6.0);
                ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                ui.add_space(10.0);

                Frame::new()
                    .fill(egui::Color32::from_rgb(60, 100, 70))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        let label = egui::Label::new(
                            RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                        )
                        .sense(egui::Sense::click());
                        if ui.add(label).clicked() {
                            *event = Some(Event::Reset);
                        }
                    });
            });
        });
}

/// The last three log messages, newest at the bottom
fn render_message_card(ui: &mut egui::Ui, session: &Session) {
    let recent: Vec<&str> = session.recent_messages(3).collect();
    if recent.is_empty() {
        return;
    }
    card_frame().show(ui, |ui| {
        ui.label(RichText::new("LOG").size(10.0).color(TEXT_MUTED));
        ui.add_space(4.0);
        for msg in recent {
            ui.label(RichText::new(msg).size(11.0).color(TEXT_SECONDARY));
        }
    });
}
