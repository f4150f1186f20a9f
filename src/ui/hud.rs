//! Match HUD
//!
//! Right-hand panel with the clocks, the side to move, the match result, the
//! move list and material taken, plus the settings for the next match.
//! Everything shown is read from [`MatchSession`]; the only writes are
//! messages and edits to [`MatchConfig`].

use crate::core::config::MatchConfig;
use crate::core::settings_persistence::save_config;
use crate::game::ai::Difficulty;
use crate::game::events::StartMatch;
use crate::game::resources::MatchOutcome;
use crate::game::session::MatchSession;
use crate::game::types::{PieceKind, Side};
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Clock turns red below this many seconds
const LOW_TIME_SECONDS: f32 = 30.0;

pub fn match_hud_system(
    mut contexts: EguiContexts,
    session: Res<MatchSession>,
    mut config: ResMut<MatchConfig>,
    mut start: MessageWriter<StartMatch>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("match_hud")
        .resizable(false)
        .exact_width(240.0)
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_DARK)
                .inner_margin(12.0)
                .stroke(egui::Stroke::new(1.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            // === Clocks ===
            let to_move = session.turn().side;
            let playing = !session.outcome().is_over();
            for side in [Side::Black, Side::White] {
                clock_row(ui, side, session.clock().time_left(side), playing && side == to_move);
                ui.add_space(4.0);
            }

            ui.add_space(8.0);
            status_line(ui, &session);
            ui.separator();

            // === Material ===
            for captor in [Side::White, Side::Black] {
                let taken = session.captured().taken_by(captor);
                let glyphs: String = taken.iter().map(|kind| glyph(*kind, captor.opponent())).collect();
                ui.label(
                    egui::RichText::new(format!("{}: {}", captor, glyphs))
                        .size(16.0)
                        .color(UiColors::TEXT_SECONDARY),
                );
            }
            let advantage = session.captured().material_advantage();
            if advantage != 0 {
                let leader = if advantage > 0 { Side::White } else { Side::Black };
                ui.label(
                    egui::RichText::new(format!("{} +{}", leader, advantage.abs()))
                        .color(UiColors::ACCENT_GOLD),
                );
            }
            ui.separator();

            // === Moves ===
            ui.label(egui::RichText::new("Moves").color(UiColors::TEXT_PRIMARY).strong());
            egui::ScrollArea::vertical()
                .max_height(260.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in session.history().lines() {
                        ui.label(
                            egui::RichText::new(line)
                                .monospace()
                                .color(UiColors::TEXT_TERTIARY),
                        );
                    }
                });
            ui.separator();

            // === Next match ===
            settings_section(ui, &mut config, &mut start);
        });
}

fn clock_row(ui: &mut egui::Ui, side: Side, seconds: f32, running: bool) {
    let color = if seconds < LOW_TIME_SECONDS {
        UiColors::DANGER
    } else {
        UiColors::TEXT_PRIMARY
    };
    let fill = if running { UiColors::BG_LIGHT } else { UiColors::BG_MID };

    egui::Frame::default()
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(side.name()).size(16.0).color(UiColors::TEXT_SECONDARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format_time(seconds))
                            .size(20.0)
                            .monospace()
                            .color(color)
                            .strong(),
                    );
                });
            });
        });
}

fn status_line(ui: &mut egui::Ui, session: &MatchSession) {
    let outcome = session.outcome();
    let (text, color) = match outcome {
        MatchOutcome::Playing => {
            let side = session.turn().side;
            let who = if side == session.config().human_side {
                "your move"
            } else {
                "thinking"
            };
            (format!("{} to move ({})", side, who), UiColors::TEXT_PRIMARY)
        }
        MatchOutcome::Aborted => (outcome.message(), UiColors::DANGER),
        _ => (outcome.message(), UiColors::ACCENT_GOLD),
    };
    ui.label(egui::RichText::new(text).size(16.0).color(color).strong());

    if let Some(detail) = session.diagnostic() {
        ui.label(egui::RichText::new(detail).small().color(UiColors::DANGER));
    }
}

fn settings_section(
    ui: &mut egui::Ui,
    config: &mut ResMut<MatchConfig>,
    start: &mut MessageWriter<StartMatch>,
) {
    // Edit a copy so the resource is only marked changed on a real edit
    let mut side = config.human_side;
    let mut difficulty = config.difficulty;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Play as").color(UiColors::TEXT_SECONDARY));
        ui.selectable_value(&mut side, Side::White, "White");
        ui.selectable_value(&mut side, Side::Black, "Black");
    });
    egui::ComboBox::from_id_salt("difficulty")
        .selected_text(difficulty.description())
        .show_ui(ui, |ui| {
            for option in Difficulty::ALL {
                ui.selectable_value(&mut difficulty, option, option.description());
            }
        });
    ui.label(
        egui::RichText::new(format!("Time control {}", config.time_control()))
            .small()
            .color(UiColors::TEXT_TERTIARY),
    );

    if side != config.human_side || difficulty != config.difficulty {
        config.human_side = side;
        config.difficulty = difficulty;
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("New match").clicked() {
            info!("[UI] New match requested ({} vs {})", config.human_side, config.difficulty);
            start.write(StartMatch);
        }
        if ui.button("Save settings").clicked() {
            match save_config(&**config, None) {
                Ok(path) => info!("[UI] Settings saved to {}", path.display()),
                Err(e) => warn!("[UI] Could not save settings: {:#}", e),
            }
        }
    });
}

/// Unicode chess glyph for a piece of `side`
pub fn glyph(kind: PieceKind, side: Side) -> char {
    match (side, kind) {
        (Side::White, PieceKind::King) => '♔',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::Black, PieceKind::King) => '♚',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Pawn) => '♟',
    }
}

/// Format seconds as `mm:ss`, clamping negatives to zero
pub fn format_time(seconds: f32) -> String {
    let total_seconds = seconds.max(0.0).ceil() as u32;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
