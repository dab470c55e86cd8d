//=========================================================================
// Timer Bridge
//=========================================================================
//
// Maps the renderer's timer requests onto the host event loop.
//
// States:
// ```text
//   Stopped ──start()──→ Running { next_fire } ──stop()──→ Stopped
//                          │  ↑
//                          └──┘ fire_due(): tick + reschedule
// ```
//
// The host never runs a timer thread; it asks `next_deadline()` and
// wakes the event loop at that instant, then calls `fire_due()` on the
// event-loop thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use log::{debug, trace};

/// Interval used when the configuration does not override it.
pub const DEFAULT_TIMER_INTERVAL: Duration = Duration::from_millis(10);

//=== TimerState ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running { next_fire: Instant },
}

//=== TimerBridge =========================================================

/// The widget's single repeating timer.
#[derive(Debug)]
pub struct TimerBridge {
    interval: Duration,
    state: TimerState,
}

impl TimerBridge {
    //--- Construction -----------------------------------------------------

    /// Creates a stopped timer.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Timer interval must be positive");
        Self {
            interval,
            state: TimerState::Stopped,
        }
    }

    //--- Control ----------------------------------------------------------

    /// Starts the timer, or restarts it from `now` if already running.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            debug!(target: "bridge::timer", "Timer restarted");
        } else {
            debug!(target: "bridge::timer", "Timer started ({:?})", self.interval);
        }
        self.state = TimerState::Running {
            next_fire: now + self.interval,
        };
    }

    /// Stops the timer. Stopping a stopped timer does nothing.
    pub fn stop(&mut self) {
        if self.is_running() {
            debug!(target: "bridge::timer", "Timer stopped");
            self.state = TimerState::Stopped;
        }
    }

    /// Returns `true` when a tick is due at `now`, and schedules the next
    /// one. At most one tick is reported per call; missed periods are
    /// not replayed.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.state {
            TimerState::Running { next_fire } if now >= next_fire => {
                trace!(target: "bridge::timer", "Timer tick");
                self.state = TimerState::Running {
                    next_fire: now + self.interval,
                };
                true
            }
            _ => false,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant the host should wake the loop at, if running.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            TimerState::Running { next_fire } => Some(next_fire),
            TimerState::Stopped => None,
        }
    }
}

impl Default for TimerBridge {
    fn default() -> Self {
        Self::new(DEFAULT_TIMER_INTERVAL)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_stopped() {
        let timer = TimerBridge::default();
        assert!(!timer.is_running());
        assert_eq!(timer.next_deadline(), None);
        assert_eq!(timer.interval(), ms(10));
    }

    #[test]
    fn start_schedules_one_interval_ahead() {
        let now = Instant::now();
        let mut timer = TimerBridge::default();
        timer.start(now);
        assert_eq!(timer.next_deadline(), Some(now + ms(10)));
    }

    #[test]
    fn fires_only_when_due() {
        let now = Instant::now();
        let mut timer = TimerBridge::default();
        timer.start(now);

        assert!(!timer.fire_due(now + ms(5)));
        assert!(timer.fire_due(now + ms(10)));
        assert_eq!(timer.next_deadline(), Some(now + ms(20)));
    }

    #[test]
    fn missed_periods_fire_once() {
        let now = Instant::now();
        let mut timer = TimerBridge::default();
        timer.start(now);

        assert!(timer.fire_due(now + ms(100)));
        assert!(!timer.fire_due(now + ms(100)));
    }

    #[test]
    fn restart_while_running_resets_deadline() {
        let now = Instant::now();
        let mut timer = TimerBridge::default();
        timer.start(now);
        timer.start(now + ms(7));
        assert_eq!(timer.next_deadline(), Some(now + ms(17)));
        assert!(timer.is_running());
    }

    #[test]
    fn double_stop_is_noop_and_nothing_fires() {
        let now = Instant::now();
        let mut timer = TimerBridge::default();
        timer.start(now);
        timer.stop();
        timer.stop();

        assert_eq!(timer.state(), TimerState::Stopped);
        assert!(!timer.fire_due(now + ms(50)));
    }

    #[test]
    #[should_panic(expected = "Timer interval must be positive")]
    fn zero_interval_panics() {
        TimerBridge::new(Duration::ZERO);
    }
}
