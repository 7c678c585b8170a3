/// Selector flow state
///
/// The phase machine and current selection of a single screen's flow.

/// Phase of a selector flow instance.
///
/// `Loading` only lasts until the stored preference has been resolved;
/// `Advancing` is terminal for the flow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    /// Initial phase, waiting for the stored preference to be resolved
    Loading,

    /// Interactive phase: a selection may or may not be present
    Ready,

    /// Continue was accepted; the parent composition takes over
    Advancing,
}

impl FlowPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, FlowPhase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FlowPhase::Ready)
    }

    pub fn is_advancing(&self) -> bool {
        matches!(self, FlowPhase::Advancing)
    }
}

/// The current selection of a flow instance.
///
/// Starts absent; a pick fully replaces the previous value. There is no
/// multi-select and no partial update.
#[derive(Debug, Clone)]
pub struct SelectionState<O> {
    selected: Option<O>,
}

impl<O: Clone + PartialEq> SelectionState<O> {
    /// Create an empty selection
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Get the current selection
    pub fn selected(&self) -> Option<&O> {
        self.selected.as_ref()
    }

    /// Check whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Replace the selection with a user pick
    pub fn pick(&mut self, option: O) {
        self.selected = Some(option);
    }

    /// Restore the selection from storage (possibly absent); used once at
    /// load resolution, never schedules a write
    pub fn restore(&mut self, option: Option<O>) {
        self.selected = option;
    }
}

impl<O: Clone + PartialEq> Default for SelectionState<O> {
    fn default() -> Self {
        Self::new()
    }
}
