mod effects;
mod form;
mod lifecycle;
mod notification;
mod scheduler;
mod submission;
mod validation;

pub use effects::{
    counter::{COUNTER_DURATION_MS, COUNTER_TICK_MS, CounterAnimation},
    navbar::{
        ACTIVE_SECTION_OFFSET, NAVBAR_SCROLLED_THRESHOLD, SectionBounds, active_section,
        is_scrolled, scroll_target,
    },
    parallax::{PARALLAX_SPEED_FACTOR, parallax_offset},
    reveal::{REVEAL_THRESHOLD, is_revealed},
};
pub use form::{EnrollmentForm, SEND_DELAY_MS, SubmitOutcome, TimerOutcome};
pub use lifecycle::{BUSY_LABEL, IDLE_LABEL, LifecycleEvent, SubmissionState, SubmitControl};
pub use notification::{
    NOTIFICATION_FADE_MS, NOTIFICATION_VISIBLE_MS, Notification, NotificationId,
    NotificationPhase, Notifications,
};
pub use scheduler::{ManualScheduler, Scheduler, Timer};
pub use submission::{AGE_GROUPS, EnrollmentSubmission, Field};
pub use validation::{
    ValidationState,
    enrollment::{EnrollmentError, EnrollmentValidation},
};
