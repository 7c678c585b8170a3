/// Language selection view
///
/// A picker button that opens a modal list of the 18 languages, plus the
/// continue action. The picker only renders once the flow has resolved its
/// stored preference.

use eframe::egui;

use crate::gui::theme;

use super::super::OnboardingApp;

/// Render the language selection screen
pub fn render_language_selection(
    app: &mut OnboardingApp,
    ui: &mut egui::Ui,
    ctx: &egui::Context,
) {
    ui.vertical_centered(|ui| {
        theme::add_space_medium(ui);
        theme::styled_heading(ui, "Welcome to Tajweed App");
        ui.label(
            egui::RichText::new("Select your language:")
                .size(18.0)
                .color(theme::TEXT_MUTED),
        );
        theme::add_space_medium(ui);

        if app.language_flow.phase().is_loading() {
            ui.label(egui::RichText::new("…").color(theme::TEXT_MUTED));
            return;
        }

        let picker_label = app
            .language_flow
            .selected()
            .map(|language| language.display_name)
            .unwrap_or("Select Language");
        if theme::styled_picker_button(ui, picker_label).clicked() {
            app.picker_open = true;
        }

        theme::add_space_medium(ui);

        let has_selection = app.language_flow.selected().is_some();
        if theme::styled_primary_button(ui, "Continue", has_selection).clicked() {
            let outcome = app.language_flow.try_continue();
            app.handle_continue(outcome);
        }
    });

    if app.picker_open {
        render_language_picker(app, ctx);
    }
}

/// Modal list of all languages
fn render_language_picker(app: &mut OnboardingApp, ctx: &egui::Context) {
    egui::Window::new("Select Language")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            let options = app.language_flow.options();
            let current = app.language_flow.selected().map(|language| language.code);

            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for language in options {
                    let is_selected = current == Some(language.code);
                    let row = ui.selectable_label(
                        is_selected,
                        egui::RichText::new(language.display_name).size(16.0),
                    );
                    if row.clicked() {
                        app.language_flow.select_option(&app.store, language);
                        app.picker_open = false;
                    }
                    ui.separator();
                }
            });

            theme::add_space_small(ui);
            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    app.picker_open = false;
                }
            });
        });
}
