/// Completion view
///
/// Terminal panel shown once both selections are stored. What comes after
/// onboarding is owned by the rest of the application, not this crate.

use eframe::egui;

use crate::gui::theme;
use crate::onboarding::OnboardingStep;

use super::super::OnboardingApp;

/// Render the completion screen
pub fn render_complete(_app: &mut OnboardingApp, ui: &mut egui::Ui) {
    let step = OnboardingStep::Complete;

    ui.vertical_centered(|ui| {
        theme::add_space_medium(ui);
        theme::styled_heading(ui, step.title());
        theme::add_space_small(ui);
        ui.label(
            egui::RichText::new(step.description())
                .size(16.0)
                .color(theme::TEXT_MUTED),
        );
    });
}
