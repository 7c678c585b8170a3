/// Onboarding module
///
/// Drives the first-run screens: language selection, then proficiency level
/// selection, with each choice persisted to the preference store.
///
/// ## Architecture
///
/// ```text
/// OnboardingSequence (Language → Level → Complete)
///   └── SelectorFlow (one per screen)
///         ├── FlowPhase (Loading → Ready → Advancing)
///         ├── SelectionState (the current pick, if any)
///         └── PreferenceStore (load on mount, fire-and-forget save on pick)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use tajweed_onboarding::catalog::LANGUAGES;
/// use tajweed_onboarding::onboarding::{ContinueOutcome, SelectorFlow};
/// use tajweed_onboarding::prefs::{keys, PreferenceStore};
///
/// let store = PreferenceStore::open();
/// let mut flow = SelectorFlow::new(
///     keys::SELECTED_LANGUAGE,
///     &LANGUAGES,
///     "Please select a language to continue.",
/// );
/// flow.resolve_load(&store);
///
/// // User taps an option, then Continue
/// flow.select_option(&store, &LANGUAGES[2]);
/// match flow.try_continue() {
///     ContinueOutcome::Advanced => { /* hand off to the next screen */ }
///     ContinueOutcome::Blocked { reason } => { /* show the notice */ }
/// }
/// ```
pub mod flow;
pub mod sequence;
pub mod state;
pub mod steps;

// Re-export commonly used types
pub use flow::{ContinueOutcome, SelectorFlow};
pub use sequence::{AdvanceOutcome, OnboardingSequence};
pub use state::{FlowPhase, SelectionState};
pub use steps::OnboardingStep;
