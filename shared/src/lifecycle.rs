pub const IDLE_LABEL: &str = "Submit Enrollment";
pub const BUSY_LABEL: &str = "Sending...";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LifecycleEvent {
    ValidSubmit,
    InvalidSubmit,
    SendElapsed,
    FeedbackPresented,
}

impl SubmissionState {
    /// Next state for `event`, `None` if the event is not accepted here.
    #[must_use]
    pub const fn on(self, event: LifecycleEvent) -> Option<Self> {
        match (self, event) {
            (Self::Idle, LifecycleEvent::ValidSubmit) => Some(Self::Submitting),
            (Self::Idle, LifecycleEvent::InvalidSubmit) => Some(Self::Idle),
            (Self::Submitting, LifecycleEvent::SendElapsed) => Some(Self::Succeeded),
            (Self::Succeeded, LifecycleEvent::FeedbackPresented) => Some(Self::Idle),
            _ => None,
        }
    }

    #[must_use]
    pub const fn accepts_submit(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// What the submit button shows and whether it reacts to clicks.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: IDLE_LABEL,
        }
    }
}

impl SubmitControl {
    #[must_use]
    pub const fn for_state(state: SubmissionState) -> Self {
        match state {
            SubmissionState::Submitting => Self {
                enabled: false,
                label: BUSY_LABEL,
            },
            SubmissionState::Idle | SubmissionState::Succeeded => Self {
                enabled: true,
                label: IDLE_LABEL,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_happy_path() {
        let state = SubmissionState::default();
        assert_eq!(state, SubmissionState::Idle);

        let state = state.on(LifecycleEvent::ValidSubmit);
        assert_eq!(state, Some(SubmissionState::Submitting));

        let state = state.and_then(|s| s.on(LifecycleEvent::SendElapsed));
        assert_eq!(state, Some(SubmissionState::Succeeded));

        let state = state.and_then(|s| s.on(LifecycleEvent::FeedbackPresented));
        assert_eq!(state, Some(SubmissionState::Idle));
    }

    #[test]
    fn test_invalid_submit_self_loop() {
        assert_eq!(
            SubmissionState::Idle.on(LifecycleEvent::InvalidSubmit),
            Some(SubmissionState::Idle)
        );
    }

    #[test]
    fn test_submitting_only_left_by_elapsed_send() {
        for event in [
            LifecycleEvent::ValidSubmit,
            LifecycleEvent::InvalidSubmit,
            LifecycleEvent::FeedbackPresented,
        ] {
            assert_eq!(SubmissionState::Submitting.on(event), None);
        }
        assert!(!SubmissionState::Submitting.accepts_submit());
    }

    #[test]
    fn test_control_follows_state() {
        assert_eq!(
            SubmitControl::for_state(SubmissionState::Submitting),
            SubmitControl {
                enabled: false,
                label: BUSY_LABEL
            }
        );
        assert_eq!(
            SubmitControl::for_state(SubmissionState::Idle),
            SubmitControl::default()
        );
    }
}
