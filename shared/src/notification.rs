use crate::{Scheduler, Timer};

pub const NOTIFICATION_VISIBLE_MS: u32 = 3000;
pub const NOTIFICATION_FADE_MS: u32 = 300;

pub type NotificationId = u64;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NotificationPhase {
    Shown,
    /// slide-out animation running, removed afterwards
    Leaving,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub phase: NotificationPhase,
}

/// Stack of transient notifications, each with its own timers.
#[derive(Debug, Default)]
pub struct Notifications {
    next_id: NotificationId,
    items: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, message: String, scheduler: &mut impl Scheduler) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Notification {
            id,
            message,
            phase: NotificationPhase::Shown,
        });
        scheduler.schedule(NOTIFICATION_VISIBLE_MS, Timer::NotificationExpire(id));

        id
    }

    /// Starts the exit animation. Returns `false` for unknown or already leaving ids.
    pub fn expire(&mut self, id: NotificationId, scheduler: &mut impl Scheduler) -> bool {
        let Some(item) = self
            .items
            .iter_mut()
            .find(|n| n.id == id && n.phase == NotificationPhase::Shown)
        else {
            return false;
        };

        item.phase = NotificationPhase::Leaving;
        scheduler.schedule(NOTIFICATION_FADE_MS, Timer::NotificationRemove(id));

        true
    }

    pub fn remove(&mut self, id: NotificationId) -> bool {
        let len = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != len
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ManualScheduler;
    use pretty_assertions::assert_eq;

    fn drive(notifications: &mut Notifications, scheduler: &ManualScheduler, ms: u64) {
        let mut host = scheduler.clone();
        scheduler.advance(ms, |timer| match timer {
            Timer::NotificationExpire(id) => {
                notifications.expire(id, &mut host);
            }
            Timer::NotificationRemove(id) => {
                notifications.remove(id);
            }
            Timer::SendComplete => {}
        });
    }

    #[test]
    fn test_lifetime() {
        let scheduler = ManualScheduler::default();
        let mut notifications = Notifications::default();

        let id = notifications.push("oops".into(), &mut scheduler.clone());
        assert_eq!(notifications.items()[0].phase, NotificationPhase::Shown);

        drive(&mut notifications, &scheduler, 2999);
        assert_eq!(notifications.items()[0].phase, NotificationPhase::Shown);

        drive(&mut notifications, &scheduler, 1);
        assert_eq!(notifications.items()[0].phase, NotificationPhase::Leaving);

        drive(&mut notifications, &scheduler, 299);
        assert_eq!(notifications.len(), 1);

        drive(&mut notifications, &scheduler, 1);
        assert!(notifications.is_empty());
        assert!(!notifications.remove(id));
    }

    #[test]
    fn test_expire_twice() {
        let mut scheduler = ManualScheduler::default();
        let mut notifications = Notifications::default();

        let id = notifications.push("oops".into(), &mut scheduler);
        assert!(notifications.expire(id, &mut scheduler));
        assert!(!notifications.expire(id, &mut scheduler));
        assert!(!notifications.expire(id + 1, &mut scheduler));
        // the initial expire timer plus one remove timer
        assert_eq!(scheduler.pending(), 2);
    }
}
