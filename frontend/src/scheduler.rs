use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use shared::{Scheduler, Timer};
use yew::Callback;

/// Browser timers for the enrollment form. Fired timers come back through `on_fire`.
pub struct TimeoutScheduler {
    on_fire: Callback<Timer>,
    pending: HashMap<Timer, Timeout>,
}

impl TimeoutScheduler {
    pub fn new(on_fire: Callback<Timer>) -> Self {
        Self {
            on_fire,
            pending: HashMap::new(),
        }
    }

    /// Releases the handle of a timer that already ran.
    pub fn fired(&mut self, timer: Timer) {
        self.pending.remove(&timer);
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: u32, timer: Timer) {
        let on_fire = self.on_fire.clone();
        let handle = Timeout::new(delay_ms, move || on_fire.emit(timer));

        // dropping the replaced Timeout cancels it
        if self.pending.insert(timer, handle).is_some() {
            log::warn!("timer rescheduled while pending: {timer:?}");
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod test {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use gloo_timers::future::sleep;
    use shared::{Scheduler, Timer};
    use wasm_bindgen_test::wasm_bindgen_test;
    use yew::Callback;

    use super::TimeoutScheduler;

    #[wasm_bindgen_test]
    async fn test_reschedule_cancels_pending() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&fired);
        let mut scheduler =
            TimeoutScheduler::new(Callback::from(move |timer| sink.borrow_mut().push(timer)));

        scheduler.schedule(10, Timer::SendComplete);
        scheduler.schedule(20, Timer::SendComplete);
        sleep(Duration::from_millis(60)).await;

        assert_eq!(*fired.borrow(), vec![Timer::SendComplete]);
    }
}
