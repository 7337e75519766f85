//! Light dashboard theme

use egui::Color32;

use crate::core::Rgb;

pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(250, 247, 242);     // #FAF7F2 - page
    pub const BG_CARD: Color32 = Color32::from_rgb(255, 255, 255);        // #FFFFFF - plot cards
    pub const BG_POPUP: Color32 = Color32::from_rgb(255, 253, 245);       // #FFFDF5 - description panels
    pub const BG_HEADER: Color32 = Color32::from_rgb(142, 105, 108);      // #8E696C - header bar

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(40, 36, 38);      // #282426
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 88, 90);    // #60585A
    pub const TEXT_ON_HEADER: Color32 = Color32::from_rgb(255, 253, 245); // #FFFDF5

    // === Navigation selector ===
    pub const NAV_BG: Color32 = Color32::from_rgb(255, 253, 245);         // #FFFDF5
    pub const NAV_TEXT: Color32 = Color32::from_rgb(142, 105, 108);       // #8E696C

    // === Lines & Borders ===
    pub const BORDER: Color32 = Color32::from_rgb(226, 220, 212);         // #E2DCD4
}

pub fn rgb(c: Rgb) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Create the light egui Visuals used across the dashboard
pub fn dashboard_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_CARD;
    visuals.extreme_bg_color = BG_CARD;
    visuals.faint_bg_color = BG_POPUP;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    visuals.widgets.inactive.bg_fill = NAV_BG;
    visuals.widgets.inactive.weak_bg_fill = NAV_BG;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, NAV_TEXT);

    visuals.widgets.hovered.weak_bg_fill = BG_POPUP;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, NAV_TEXT);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, NAV_TEXT);

    visuals.selection.bg_fill = Color32::from_rgb(232, 220, 214);
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

