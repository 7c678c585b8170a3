/// Level selection view
///
/// All three proficiency levels render inline as cards; the current
/// selection is highlighted. No modal here, unlike the language screen.

use eframe::egui;

use crate::catalog::LevelOption;
use crate::gui::theme;
use crate::onboarding::ContinueOutcome;

use super::super::OnboardingApp;

/// Render the level selection screen
pub fn render_level_selection(app: &mut OnboardingApp, ui: &mut egui::Ui, _ctx: &egui::Context) {
    let mut outcome: Option<ContinueOutcome> = None;

    ui.vertical_centered(|ui| {
        theme::add_space_medium(ui);
        theme::styled_heading(ui, "Выберите уровень");
        theme::add_space_medium(ui);

        let Some(flow) = app.level_flow.as_mut() else {
            // The sequence mounts the flow before this screen renders
            return;
        };

        let current = flow.selected().map(|level| level.id);
        for level in flow.options() {
            let is_selected = current == Some(level.id);
            if level_card(ui, level, is_selected).clicked() {
                flow.select_option(&app.store, level);
            }
            theme::add_space_small(ui);
        }

        theme::add_space_medium(ui);

        let has_selection = flow.selected().is_some();
        if theme::styled_primary_button(ui, "Продолжить", has_selection).clicked() {
            outcome = Some(flow.try_continue());
        }
    });

    if let Some(outcome) = outcome {
        app.handle_continue(outcome);
    }
}

/// One clickable level card, highlighted when selected
fn level_card(ui: &mut egui::Ui, level: &LevelOption, is_selected: bool) -> egui::Response {
    let frame = if is_selected {
        theme::selected_card_frame()
    } else {
        theme::card_frame()
    };

    frame
        .show(ui, |ui| {
            ui.set_min_width(280.0);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(level.name)
                        .size(18.0)
                        .strong()
                        .color(theme::TEXT),
                );
                ui.label(
                    egui::RichText::new(level.description)
                        .size(14.0)
                        .color(theme::TEXT_MUTED),
                );
            });
        })
        .response
        .interact(egui::Sense::click())
}
