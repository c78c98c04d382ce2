//! Single-slot tick deadline owned by the playback engine.

use std::time::{Duration, Instant};

/// Word interval for a speed in words per minute.
///
/// # Returns
/// `60_000 / wpm` milliseconds; a zero speed is treated as one.
pub fn interval_for_wpm(wpm: u32) -> Duration {
    Duration::from_millis(60_000 / u64::from(wpm.max(1)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Deadline {
    due: Instant,
    interval: Duration,
}

/// The one pending tick of an engine.
///
/// Arming replaces whatever was pending, so there is never more than one
/// outstanding deadline and rescheduling cannot double-fire.
#[derive(Debug, Default)]
pub struct TickTimer {
    slot: Option<Deadline>,
}

impl TickTimer {
    /// Arm (or re-arm) the timer to fire `interval` after `now`.
    pub fn arm(&mut self, now: Instant, interval: Duration) {
        self.slot = Some(Deadline {
            due: now + interval,
            interval,
        });
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.slot = None;
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self) -> bool {
        self.slot.is_some()
    }

    /// Interval of the pending deadline.
    #[cfg(test)]
    pub(crate) fn interval(&self) -> Option<Duration> {
        self.slot.map(|deadline| deadline.interval)
    }

    /// Time left until the pending deadline; zero when already due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.slot
            .map(|deadline| deadline.due.saturating_duration_since(now))
    }

    /// Consume the deadline if it is due and schedule the next one.
    ///
    /// Fires at most once per call. The next deadline keeps the cadence
    /// (`due + interval`) unless the caller fell a whole interval behind, in
    /// which case it restarts from `now` instead of replaying missed ticks.
    ///
    /// # Returns
    /// `true` when the deadline fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.slot else {
            return false;
        };
        if now < deadline.due {
            return false;
        }
        let mut next_due = deadline.due + deadline.interval;
        if next_due <= now {
            next_due = now + deadline.interval;
        }
        self.slot = Some(Deadline {
            due: next_due,
            interval: deadline.interval,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_matches_words_per_minute() {
        assert_eq!(interval_for_wpm(300), Duration::from_millis(200));
        assert_eq!(interval_for_wpm(50), Duration::from_millis(1200));
        assert_eq!(interval_for_wpm(2000), Duration::from_millis(30));
        assert_eq!(interval_for_wpm(0), Duration::from_millis(60_000));
    }

    #[test]
    fn poll_fires_once_per_due_deadline() {
        let start = Instant::now();
        let step = Duration::from_millis(100);
        let mut timer = TickTimer::default();
        assert!(!timer.poll(start));

        timer.arm(start, step);
        assert!(!timer.poll(start + Duration::from_millis(99)));
        assert!(timer.poll(start + step));
        assert!(!timer.poll(start + step));
        assert_eq!(timer.remaining(start + step), Some(step));
    }

    #[test]
    fn late_poll_does_not_replay_missed_ticks() {
        let start = Instant::now();
        let step = Duration::from_millis(100);
        let mut timer = TickTimer::default();
        timer.arm(start, step);

        let late = start + Duration::from_millis(550);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.remaining(late), Some(step));
    }

    #[test]
    fn rearm_replaces_pending_deadline() {
        let start = Instant::now();
        let mut timer = TickTimer::default();
        timer.arm(start, Duration::from_millis(100));
        timer.arm(start + Duration::from_millis(50), Duration::from_millis(500));

        assert!(!timer.poll(start + Duration::from_millis(100)));
        assert_eq!(timer.interval(), Some(Duration::from_millis(500)));
        assert!(timer.poll(start + Duration::from_millis(550)));

        timer.cancel();
        assert!(!timer.is_armed());
        assert_eq!(timer.remaining(start), None);
    }
}
