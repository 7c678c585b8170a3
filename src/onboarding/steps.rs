/// Onboarding step definitions
///
/// The fixed, forward-only sequence of onboarding screens.

/// Onboarding step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    /// Language selection - pick the interface language
    Language,

    /// Level selection - pick a proficiency level
    Level,

    /// Complete - both preferences are saved
    Complete,
}

impl OnboardingStep {
    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Language => "Language Selection",
            OnboardingStep::Level => "Level Selection",
            OnboardingStep::Complete => "Setup Complete",
        }
    }

    /// Get step description
    pub fn description(&self) -> &'static str {
        match self {
            OnboardingStep::Language => "Choose the language you want to use the app in",
            OnboardingStep::Level => "Tell us how well you already read",
            OnboardingStep::Complete => "You're all set. Your choices are saved on this device.",
        }
    }

    /// Get step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            OnboardingStep::Language => 1,
            OnboardingStep::Level => 2,
            OnboardingStep::Complete => 3,
        }
    }

    /// Get total number of steps
    pub fn total_steps() -> usize {
        3
    }

    /// Check if this is the first step
    pub fn is_first(&self) -> bool {
        matches!(self, OnboardingStep::Language)
    }

    /// Check if this is the last step
    pub fn is_last(&self) -> bool {
        matches!(self, OnboardingStep::Complete)
    }

    /// Get next step. There is no previous: the hand-off is one-directional.
    pub fn next(&self) -> Option<OnboardingStep> {
        match self {
            OnboardingStep::Language => Some(OnboardingStep::Level),
            OnboardingStep::Level => Some(OnboardingStep::Complete),
            OnboardingStep::Complete => None,
        }
    }

    /// Get all steps in order
    pub fn all_steps() -> Vec<OnboardingStep> {
        vec![
            OnboardingStep::Language,
            OnboardingStep::Level,
            OnboardingStep::Complete,
        ]
    }
}

impl Default for OnboardingStep {
    fn default() -> Self {
        OnboardingStep::Language
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
