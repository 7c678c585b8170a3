mod theme;
mod views;

use eframe::egui;

use crate::catalog::{LanguageOption, LevelOption, LANGUAGES, LEVELS};
use crate::onboarding::{
    AdvanceOutcome, ContinueOutcome, OnboardingSequence, OnboardingStep, SelectorFlow,
};
use crate::prefs::{keys, PreferenceStore};

const LANGUAGE_GUARD: &str = "Please select a language to continue.";
const LEVEL_GUARD: &str = "Пожалуйста, выберите уровень.";

/// The onboarding application shell.
///
/// Owns the preference store, the step sequence, and one flow per screen.
/// The level flow is mounted fresh at hand-off so it performs its own load
/// from the store instead of inheriting state from the language screen.
pub struct OnboardingApp {
    store: PreferenceStore,
    sequence: OnboardingSequence,
    language_flow: SelectorFlow<LanguageOption>,
    level_flow: Option<SelectorFlow<LevelOption>>,

    /// Language picker modal visibility
    picker_open: bool,

    /// Pending guard notice, shown as a blocking modal
    notice: Option<String>,
}

impl OnboardingApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::install(&cc.egui_ctx);

        let store = PreferenceStore::open();
        let mut language_flow =
            SelectorFlow::new(keys::SELECTED_LANGUAGE, &LANGUAGES, LANGUAGE_GUARD);
        language_flow.resolve_load(&store);

        Self {
            store,
            sequence: OnboardingSequence::new(),
            language_flow,
            level_flow: None,
            picker_open: false,
            notice: None,
        }
    }

    /// Route a continue attempt: advance the sequence or queue the guard
    /// notice.
    pub(crate) fn handle_continue(&mut self, outcome: ContinueOutcome) {
        match outcome {
            ContinueOutcome::Advanced => self.advance_step(),
            ContinueOutcome::Blocked { reason } => self.notice = Some(reason),
        }
    }

    fn advance_step(&mut self) {
        match self.sequence.advance() {
            AdvanceOutcome::Moved(OnboardingStep::Level) => {
                let mut flow = SelectorFlow::new(keys::SELECTED_LEVEL, &LEVELS, LEVEL_GUARD);
                flow.resolve_load(&self.store);
                self.level_flow = Some(flow);
            }
            AdvanceOutcome::Moved(step) => {
                tracing::debug!(step = %step, "moved to step without a mount hook");
            }
            AdvanceOutcome::Completed => {
                self.level_flow = None;
            }
        }
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };

        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(240.0);
                ui.label(egui::RichText::new(message).size(16.0).color(theme::TEXT));
                theme::add_space_small(ui);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.notice = None;
                    }
                });
            });
    }
}

impl eframe::App for OnboardingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(theme::BACKGROUND)
                    .inner_margin(egui::Margin::same(20.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| match self.sequence.current_step() {
                    OnboardingStep::Language => {
                        views::render_language_selection(self, ui, ctx);
                    }
                    OnboardingStep::Level => {
                        views::render_level_selection(self, ui, ctx);
                    }
                    OnboardingStep::Complete => {
                        views::render_complete(self, ui);
                    }
                });
            });

        self.render_notice(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.store.close();
    }
}
