//! Color palette for the match HUD
//!
//! Dark panels with a gold accent; defined as `egui::Color32` for direct use
//! in UI code.

use bevy_egui::egui;

/// HUD color palette
pub struct UiColors;

impl UiColors {
    // === Backgrounds ===

    /// Side panel
    pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(20, 20, 25);

    /// Dialogs and nested frames
    pub const BG_MID: egui::Color32 = egui::Color32::from_rgb(30, 30, 35);

    /// Clock of the side to move
    pub const BG_LIGHT: egui::Color32 = egui::Color32::from_rgb(40, 40, 45);

    /// Dims the board behind the promotion picker
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(180);

    // === Accents ===

    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);

    /// Flag about to fall, aborted match
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 70, 70);

    // === Text ===

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(200, 200, 205);

    /// Hints and the move list
    pub const TEXT_TERTIARY: egui::Color32 = egui::Color32::from_rgb(150, 150, 155);

    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(60, 60, 65);
}
