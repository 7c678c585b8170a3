/// Onboarding sequence
///
/// Forward-only navigation over the onboarding steps. Flows never touch this
/// directly: a screen reports that it advanced, the app host calls
/// [`OnboardingSequence::advance`], and the next screen mounts with its own
/// independent load from the preference store.

use super::steps::OnboardingStep;

/// Outcome of advancing the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the given step
    Moved(OnboardingStep),

    /// The sequence reached (or already was at) its final step
    Completed,
}

/// Forward-only step sequence
pub struct OnboardingSequence {
    current: OnboardingStep,
}

impl OnboardingSequence {
    /// Start at the first step
    pub fn new() -> Self {
        Self {
            current: OnboardingStep::Language,
        }
    }

    /// Get the current step
    pub fn current_step(&self) -> OnboardingStep {
        self.current
    }

    /// Check if the sequence is finished
    pub fn is_complete(&self) -> bool {
        self.current.is_last()
    }

    /// Move one step forward. There is no back navigation.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.is_complete() {
            return AdvanceOutcome::Completed;
        }

        match self.current.next() {
            Some(next) => {
                self.current = next;
                tracing::info!(step = %next, "onboarding advanced");
                if next.is_last() {
                    AdvanceOutcome::Completed
                } else {
                    AdvanceOutcome::Moved(next)
                }
            }
            None => AdvanceOutcome::Completed,
        }
    }
}

impl Default for OnboardingSequence {
    fn default() -> Self {
        Self::new()
    }
}
