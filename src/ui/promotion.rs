//! Promotion picker
//!
//! Modal dialog shown while the session holds a pending promotion. Picking a
//! piece writes [`PromotionChosen`]; Cancel (or Escape) writes
//! [`PromotionCancelled`] and the pawn stays where it was.

use super::hud::glyph;
use crate::game::events::{PromotionCancelled, PromotionChosen};
use crate::game::session::MatchSession;
use crate::game::types::PieceKind;
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub fn promotion_picker_system(
    mut contexts: EguiContexts,
    session: Res<MatchSession>,
    mut chosen: MessageWriter<PromotionChosen>,
    mut cancelled: MessageWriter<PromotionCancelled>,
) {
    let Some(pending) = session.pending_promotion().copied() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("promotion_overlay"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ui.ctx().screen_rect();
            ui.painter().rect_filled(screen_rect, 0.0, UiColors::BG_OVERLAY);
        });

    let mut picked: Option<PieceKind> = None;
    let mut cancel = ctx.input(|input| input.key_pressed(egui::Key::Escape));

    egui::Window::new("Promote Pawn")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_MID)
                .corner_radius(12.0)
                .inner_margin(20.0)
                .stroke(egui::Stroke::new(2.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("Promote on {}", pending.target))
                        .size(20.0)
                        .color(UiColors::TEXT_PRIMARY)
                        .strong(),
                );
                ui.add_space(15.0);

                ui.horizontal(|ui| {
                    for kind in PieceKind::PROMOTION_CHOICES {
                        let button = egui::Button::new(
                            egui::RichText::new(glyph(kind, pending.side).to_string())
                                .size(48.0)
                                .color(UiColors::TEXT_PRIMARY),
                        )
                        .min_size(egui::vec2(70.0, 70.0))
                        .fill(UiColors::BG_DARK);

                        if ui.add(button).on_hover_text(kind.name()).clicked() {
                            picked = Some(kind);
                        }
                        ui.add_space(5.0);
                    }
                });

                ui.add_space(10.0);
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if let Some(kind) = picked {
        chosen.write(PromotionChosen { kind });
    } else if cancel {
        cancelled.write(PromotionCancelled);
    }
}
