use crate::{
    EnrollmentError, EnrollmentSubmission, EnrollmentValidation, Field, LifecycleEvent,
    NotificationId, Notifications, Scheduler, SubmissionState, SubmitControl, Timer,
};

/// Simulated send duration.
pub const SEND_DELAY_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// validation passed, the simulated send is running
    Sending,
    /// validation failed, a notification was pushed
    Rejected(EnrollmentError),
    /// a send is already in flight
    Ignored,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TimerOutcome {
    Sent(EnrollmentSubmission),
    NotificationLeaving(NotificationId),
    NotificationRemoved(NotificationId),
    Stale,
}

/// Enrollment form controller: owns the live field values, gates submission on
/// validation and drives the simulated send and its feedback.
#[derive(Debug)]
pub struct EnrollmentForm<S> {
    scheduler: S,
    state: SubmissionState,
    fields: EnrollmentSubmission,
    in_flight: Option<EnrollmentSubmission>,
    validation: EnrollmentValidation,
    confirmation_visible: bool,
    notifications: Notifications,
}

impl<S: Scheduler> EnrollmentForm<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: SubmissionState::default(),
            fields: EnrollmentSubmission::default(),
            in_flight: None,
            validation: EnrollmentValidation::default(),
            confirmation_visible: false,
            notifications: Notifications::default(),
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    #[must_use]
    pub const fn fields(&self) -> &EnrollmentSubmission {
        &self.fields
    }

    #[must_use]
    pub fn capture(&self) -> EnrollmentSubmission {
        self.fields.clone()
    }

    /// Submits whatever the inputs currently hold.
    pub fn submit_fields(&mut self) -> SubmitOutcome {
        let submission = self.capture();
        self.submit(submission)
    }

    pub fn submit(&mut self, submission: EnrollmentSubmission) -> SubmitOutcome {
        if !self.state.accepts_submit() {
            log::warn!("submit ignored while {:?}", self.state);
            return SubmitOutcome::Ignored;
        }

        self.validation.check(&submission);

        match self.validation.result.error().copied() {
            Some(e) => {
                log::info!("enrollment rejected: {e}");
                self.transition(LifecycleEvent::InvalidSubmit);
                self.notifications.push(e.to_string(), &mut self.scheduler);
                SubmitOutcome::Rejected(e)
            }
            None => {
                self.transition(LifecycleEvent::ValidSubmit);
                self.in_flight = Some(submission);
                self.scheduler.schedule(SEND_DELAY_MS, Timer::SendComplete);
                SubmitOutcome::Sending
            }
        }
    }

    pub fn on_timer(&mut self, timer: Timer) -> TimerOutcome {
        match timer {
            Timer::SendComplete => self.complete_send(),
            Timer::NotificationExpire(id) => {
                if self.notifications.expire(id, &mut self.scheduler) {
                    TimerOutcome::NotificationLeaving(id)
                } else {
                    TimerOutcome::Stale
                }
            }
            Timer::NotificationRemove(id) => {
                if self.notifications.remove(id) {
                    TimerOutcome::NotificationRemoved(id)
                } else {
                    TimerOutcome::Stale
                }
            }
        }
    }

    pub fn dismiss_confirmation(&mut self) {
        if self.confirmation_visible {
            log::debug!("confirmation dismissed");
        }
        self.confirmation_visible = false;
    }

    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub const fn control(&self) -> SubmitControl {
        SubmitControl::for_state(self.state)
    }

    #[must_use]
    pub const fn confirmation_visible(&self) -> bool {
        self.confirmation_visible
    }

    #[must_use]
    pub const fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    #[must_use]
    pub const fn validation(&self) -> &EnrollmentValidation {
        &self.validation
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn complete_send(&mut self) -> TimerOutcome {
        if !self.transition(LifecycleEvent::SendElapsed) {
            return TimerOutcome::Stale;
        }

        self.confirmation_visible = true;
        self.fields = EnrollmentSubmission::default();
        self.validation = EnrollmentValidation::default();
        let sent = self.in_flight.take().unwrap_or_default();

        self.transition(LifecycleEvent::FeedbackPresented);

        TimerOutcome::Sent(sent)
    }

    fn transition(&mut self, event: LifecycleEvent) -> bool {
        match self.state.on(event) {
            Some(next) => {
                log::debug!("enrollment {:?} --{:?}--> {:?}", self.state, event, next);
                self.state = next;
                true
            }
            None => {
                log::warn!("enrollment {:?} does not accept {:?}", self.state, event);
                false
            }
        }
    }
}
