// src/host/frame_scheduler.rs
//
// Timer behind the nannou loop. Holds at most one wake-up, stored as an
// absolute due time and drained by `poll` once per update. Booking a new
// wake-up replaces the old one, so leftover bookings never stack into a
// second tick chain.

use std::time::Duration;

use super::{Host, ScheduleError};

#[derive(Debug, Default)]
pub struct FrameScheduler {
    now: Duration,
    wake_at: Option<Duration>,
    redraw_requested: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock to `now` and reports whether a redraw is due,
    /// either requested directly or from a wake-up that has come up.
    pub fn poll(&mut self, now: Duration) -> bool {
        self.now = self.now.max(now);

        let mut due = std::mem::take(&mut self.redraw_requested);
        if self.wake_at.is_some_and(|at| at <= self.now) {
            self.wake_at = None;
            due = true;
        }
        due
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        usize::from(self.wake_at.is_some())
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.wake_at
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }
}

impl Host for FrameScheduler {
    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn schedule_redraw(&mut self, delay: Duration) -> Result<(), ScheduleError> {
        let at = self
            .now
            .checked_add(delay)
            .ok_or(ScheduleError::OutOfRange { delay })?;
        self.wake_at = Some(at);
        Ok(())
    }
}
