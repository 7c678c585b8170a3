/// Visual styling helpers shared by the onboarding views.

use eframe::egui::{self, Color32, Stroke};

pub const BACKGROUND: Color32 = Color32::from_rgb(0xF5, 0xFC, 0xFF);
pub const CARD: Color32 = Color32::WHITE;
pub const BORDER: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);
pub const TEXT: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
pub const PRIMARY: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const DISABLED: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);
pub const SELECTED_FILL: Color32 = Color32::from_rgb(0xE0, 0xF7, 0xFA);
pub const SELECTED_BORDER: Color32 = Color32::from_rgb(0x80, 0xDE, 0xEA);

pub fn install(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = CARD;
    visuals.override_text_color = Some(TEXT);
    ctx.set_visuals(visuals);
}

/// White card with a light border, the container both screens use
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CARD)
        .stroke(Stroke::new(1.0, BORDER))
        .rounding(egui::Rounding::same(5.0))
        .inner_margin(egui::Margin::same(15.0))
}

/// Card variant for the currently selected option
pub fn selected_card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(SELECTED_FILL)
        .stroke(Stroke::new(1.0, SELECTED_BORDER))
        .rounding(egui::Rounding::same(5.0))
        .inner_margin(egui::Margin::same(15.0))
}

pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(24.0).strong().color(TEXT));
}

pub fn add_space_small(ui: &mut egui::Ui) {
    ui.add_space(8.0);
}

pub fn add_space_medium(ui: &mut egui::Ui) {
    ui.add_space(20.0);
}

/// Primary action button. Stays clickable while visually disabled so the
/// guard notice can fire on an empty selection.
pub fn styled_primary_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let fill = if enabled { PRIMARY } else { DISABLED };
    ui.add(
        egui::Button::new(
            egui::RichText::new(text)
                .size(18.0)
                .strong()
                .color(Color32::WHITE),
        )
        .fill(fill)
        .min_size(egui::vec2(240.0, 44.0))
        .rounding(egui::Rounding::same(5.0)),
    )
}

/// Bordered white button used to open the language picker
pub fn styled_picker_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(text).size(16.0).color(TEXT))
            .fill(CARD)
            .stroke(Stroke::new(1.0, BORDER))
            .min_size(egui::vec2(240.0, 44.0))
            .rounding(egui::Rounding::same(5.0)),
    )
}
