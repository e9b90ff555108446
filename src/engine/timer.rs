use std::time::Duration;

use crate::utils::AppInstant;

/// Handle for the periodic advance. Exists only while the window is running;
/// dropping it is how the timer is cancelled.
#[derive(Debug, Clone)]
pub struct TickTimer {
    period: Duration,
    next_due: AppInstant,
}

impl TickTimer {
    pub fn start(now: AppInstant, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now + period,
        }
    }

    /// How many ticks have fallen due by `now`, consuming them.
    /// A late frame gets every missed tick, so the rate stays one per period.
    pub fn take_due(&mut self, now: AppInstant) -> u32 {
        if now < self.next_due {
            return 0;
        }
        let overdue = now.duration_since(self.next_due);
        let extra = (overdue.as_nanos() / self.period.as_nanos()) as u32;
        let due = extra + 1;
        self.next_due += self.period * due;
        due
    }

    pub fn remaining(&self, now: AppInstant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn nothing_due_before_first_period() {
        let t0 = AppInstant::now();
        let mut timer = TickTimer::start(t0, SEC);
        assert_eq!(timer.take_due(t0), 0);
        assert_eq!(timer.take_due(t0 + Duration::from_millis(999)), 0);
        assert_eq!(timer.remaining(t0), SEC);
    }

    #[test]
    fn one_tick_per_period() {
        let t0 = AppInstant::now();
        let mut timer = TickTimer::start(t0, SEC);
        assert_eq!(timer.take_due(t0 + SEC), 1);
        assert_eq!(timer.take_due(t0 + SEC), 0);
        assert_eq!(timer.take_due(t0 + Duration::from_millis(1500)), 0);
        assert_eq!(timer.take_due(t0 + 2 * SEC), 1);
    }

    #[test]
    fn late_poll_catches_up_without_drift() {
        let t0 = AppInstant::now();
        let mut timer = TickTimer::start(t0, SEC);
        assert_eq!(timer.take_due(t0 + Duration::from_millis(3500)), 3);
        assert_eq!(timer.remaining(t0 + Duration::from_millis(3500)), Duration::from_millis(500));
        assert_eq!(timer.take_due(t0 + 4 * SEC), 1);
    }
}
