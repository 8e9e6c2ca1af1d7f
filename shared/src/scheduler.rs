use std::{cell::RefCell, rc::Rc};

use crate::NotificationId;

/// Deferred work the enrollment form asks its host to run later.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Timer {
    SendComplete,
    NotificationExpire(NotificationId),
    NotificationRemove(NotificationId),
}

/// Runs a [`Timer`] after `delay_ms` and hands it back to the form.
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, timer: Timer);
}

#[derive(Debug, Default)]
struct Queue {
    now: u64,
    seq: u64,
    pending: Vec<(u64, u64, Timer)>,
}

/// Virtual clock, time only moves on [`ManualScheduler::advance`].
///
/// Clones share the same queue so a test can keep one handle while the form owns another.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32, timer: Timer) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + u64::from(delay_ms);
        let seq = queue.seq;
        queue.seq += 1;
        queue.pending.push((due, seq, timer));
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn now(&self) -> u64 {
        self.queue.borrow().now
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Moves the clock forward by `ms`, firing every timer that comes due on the way
    /// in due order (ties in scheduling order). Timers scheduled by `on_due` fire
    /// within the same call if they fall inside the window.
    pub fn advance(&self, ms: u64, mut on_due: impl FnMut(Timer)) {
        let target = self.now() + ms;

        while let Some(timer) = self.pop_due(target) {
            on_due(timer);
        }

        self.queue.borrow_mut().now = target;
    }

    fn pop_due(&self, target: u64) -> Option<Timer> {
        let mut queue = self.queue.borrow_mut();

        let idx = queue
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= target)
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))
            .map(|(idx, _)| idx)?;

        let (due, _, timer) = queue.pending.remove(idx);
        queue.now = due;

        Some(timer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fires_in_due_order() {
        let mut scheduler = ManualScheduler::default();
        scheduler.schedule(300, Timer::NotificationRemove(1));
        scheduler.schedule(100, Timer::SendComplete);
        scheduler.schedule(300, Timer::NotificationExpire(2));

        let mut fired = Vec::new();
        scheduler.advance(299, |t| fired.push(t));
        assert_eq!(fired, vec![Timer::SendComplete]);
        assert_eq!(scheduler.now(), 299);

        scheduler.advance(1, |t| fired.push(t));
        assert_eq!(
            fired,
            vec![
                Timer::SendComplete,
                Timer::NotificationRemove(1),
                Timer::NotificationExpire(2)
            ]
        );
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_nested_schedule_uses_due_time() {
        let scheduler = ManualScheduler::default();
        let mut host = scheduler.clone();
        host.schedule(3000, Timer::NotificationExpire(0));

        let mut fired = Vec::new();
        scheduler.advance(5000, |t| {
            fired.push((scheduler.now(), t));
            if let Timer::NotificationExpire(id) = t {
                host.schedule(300, Timer::NotificationRemove(id));
            }
        });

        assert_eq!(
            fired,
            vec![
                (3000, Timer::NotificationExpire(0)),
                (3300, Timer::NotificationRemove(0))
            ]
        );
        assert_eq!(scheduler.now(), 5000);
    }
}
