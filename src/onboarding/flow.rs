/// Selector flow
///
/// The generalized core shared by both onboarding screens: load a previously
/// persisted choice, accept a single selection, persist it, and gate the
/// continue action on a non-empty selection. Each screen supplies only its
/// option list, storage key, and guard message.

use crate::catalog::SelectorOption;
use crate::onboarding::state::{FlowPhase, SelectionState};
use crate::prefs::PreferenceStore;

/// Outcome of a continue attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ContinueOutcome {
    /// The flow advanced; the parent composition swaps screens
    Advanced,

    /// Nothing selected yet. A precondition, not an error: the reason is
    /// shown to the user as a blocking notice.
    Blocked { reason: String },
}

/// One screen's selection flow
pub struct SelectorFlow<O: SelectorOption + 'static> {
    storage_key: &'static str,
    options: &'static [O],
    guard_message: &'static str,
    phase: FlowPhase,
    state: SelectionState<O>,
}

impl<O: SelectorOption + 'static> SelectorFlow<O> {
    /// Create a flow in its loading phase. Call [`resolve_load`] with the
    /// store before rendering pickers.
    ///
    /// [`resolve_load`]: SelectorFlow::resolve_load
    pub fn new(
        storage_key: &'static str,
        options: &'static [O],
        guard_message: &'static str,
    ) -> Self {
        Self {
            storage_key,
            options,
            guard_message,
            phase: FlowPhase::Loading,
            state: SelectionState::new(),
        }
    }

    /// Resolve the mount-time load: look up the stored identifier in the
    /// option list and enter the ready phase. A stale or unknown stored value
    /// degrades to no selection. Idempotent after the first call.
    pub fn resolve_load(&mut self, store: &PreferenceStore) {
        if !self.phase.is_loading() {
            return;
        }

        let stored = store.get(self.storage_key);
        let matched = stored
            .as_deref()
            .and_then(|id| self.match_stored(id))
            .cloned();

        match (&stored, &matched) {
            (Some(id), Some(_)) => {
                tracing::debug!(key = self.storage_key, id = %id, "restored stored selection");
            }
            (Some(id), None) => {
                tracing::debug!(key = self.storage_key, id = %id, "stored selection unknown, ignoring");
            }
            (None, _) => {
                tracing::debug!(key = self.storage_key, "no stored selection");
            }
        }

        self.state.restore(matched);
        self.phase = FlowPhase::Ready;
    }

    /// Record a user pick and schedule one fire-and-forget write of its
    /// identifier. Picking the same option again simply re-writes it.
    pub fn select_option(&mut self, store: &PreferenceStore, option: &O) {
        self.state.pick(option.clone());
        store.set(self.storage_key, option.id());
    }

    /// Attempt to continue. Blocked while nothing is selected; otherwise the
    /// flow enters its terminal advancing phase.
    pub fn try_continue(&mut self) -> ContinueOutcome {
        if self.state.is_empty() {
            tracing::debug!(key = self.storage_key, "continue blocked, nothing selected");
            return ContinueOutcome::Blocked {
                reason: self.guard_message.to_string(),
            };
        }

        self.phase = FlowPhase::Advancing;
        tracing::info!(key = self.storage_key, "flow advancing");
        ContinueOutcome::Advanced
    }

    /// Pure lookup of a stored identifier in the option list.
    pub fn match_stored(&self, id: &str) -> Option<&O> {
        self.options.iter().find(|option| option.id() == id)
    }

    /// Get the current selection
    pub fn selected(&self) -> Option<&O> {
        self.state.selected()
    }

    /// Get the current phase
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    /// The static option list, in display order
    pub fn options(&self) -> &'static [O] {
        self.options
    }

    /// The storage key this flow persists to
    pub fn storage_key(&self) -> &'static str {
        self.storage_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LanguageOption, LevelOption, LANGUAGES, LEVELS};
    use crate::prefs::keys;

    const LANGUAGE_GUARD: &str = "Please select a language to continue.";
    const LEVEL_GUARD: &str = "Пожалуйста, выберите уровень.";

    fn temp_store(dir: &tempfile::TempDir) -> PreferenceStore {
        PreferenceStore::with_path(dir.path().join("preferences.json"))
    }

    fn language_flow() -> SelectorFlow<LanguageOption> {
        SelectorFlow::new(keys::SELECTED_LANGUAGE, &LANGUAGES, LANGUAGE_GUARD)
    }

    fn level_flow() -> SelectorFlow<LevelOption> {
        SelectorFlow::new(keys::SELECTED_LEVEL, &LEVELS, LEVEL_GUARD)
    }

    #[test]
    fn test_new_flow_is_loading() {
        let flow = language_flow();
        assert!(flow.phase().is_loading());
        assert_eq!(flow.selected(), None);
    }

    #[test]
    fn test_empty_store_resolves_to_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let mut flow = language_flow();
        flow.resolve_load(&store);

        assert!(flow.phase().is_ready());
        assert_eq!(flow.selected(), None);
    }

    #[test]
    fn test_stored_value_resolves_to_matching_option() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.set(keys::SELECTED_LANGUAGE, "ar");

        let mut flow = language_flow();
        flow.resolve_load(&store);

        assert!(flow.phase().is_ready());
        assert_eq!(flow.selected().map(|l| l.code), Some("ar"));
    }

    #[test]
    fn test_stale_stored_value_resolves_to_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.set(keys::SELECTED_LEVEL, "ghost");

        let mut flow = level_flow();
        flow.resolve_load(&store);

        assert!(flow.phase().is_ready());
        assert_eq!(flow.selected(), None);
    }

    #[test]
    fn test_resolve_load_runs_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let mut flow = language_flow();
        flow.resolve_load(&store);

        // A value stored after the mount-time load does not sneak in
        store.set(keys::SELECTED_LANGUAGE, "tr");
        flow.resolve_load(&store);
        assert_eq!(flow.selected(), None);
    }

    #[test]
    fn test_select_updates_state_and_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let mut flow = language_flow();
        flow.resolve_load(&store);
        flow.select_option(&store, &LANGUAGES[2]);

        assert_eq!(flow.selected(), Some(&LANGUAGES[2]));
        assert_eq!(store.get(keys::SELECTED_LANGUAGE), Some("ar".to_string()));
    }

    #[test]
    fn test_select_replaces_previous_pick() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let mut flow = level_flow();
        flow.resolve_load(&store);
        flow.select_option(&store, &LEVELS[0]);
        flow.select_option(&store, &LEVELS[2]);

        assert_eq!(flow.selected().map(|l| l.id), Some("teacher"));
        assert_eq!(store.get(keys::SELECTED_LEVEL), Some("teacher".to_string()));
    }

    #[test]
    fn test_continue_without_selection_is_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let mut flow = language_flow();
        flow.resolve_load(&store);

        let outcome = flow.try_continue();
        assert_eq!(
            outcome,
            ContinueOutcome::Blocked {
                reason: LANGUAGE_GUARD.to_string()
            }
        );
        // Guard is a precondition, not a transition
        assert!(flow.phase().is_ready());
    }

    #[test]
    fn test_continue_with_selection_advances() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let mut flow = language_flow();
        flow.resolve_load(&store);
        flow.select_option(&store, &LANGUAGES[1]);

        assert_eq!(flow.try_continue(), ContinueOutcome::Advanced);
        assert!(flow.phase().is_advancing());
    }

    #[test]
    fn test_match_stored_covers_whole_list() {
        let flow = language_flow();
        for language in &LANGUAGES {
            assert_eq!(flow.match_stored(language.code), Some(language));
        }
        assert_eq!(flow.match_stored("xx"), None);
    }

    #[test]
    fn test_remount_reproduces_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        {
            let mut store = PreferenceStore::with_path(path.clone());
            let mut flow = language_flow();
            flow.resolve_load(&store);
            flow.select_option(&store, &LANGUAGES[9]);
            store.close();
        }

        let store = PreferenceStore::with_path(path);
        let mut flow = language_flow();
        flow.resolve_load(&store);
        assert_eq!(flow.selected().map(|l| l.code), Some("tr"));
    }
}
