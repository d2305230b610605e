// src/animation/driver.rs
//
// Gates ticking. Each tick books the next one through the host rather than
// sleeping, so a stop only has to clear the flag.

use tracing::{trace, warn};

use crate::constants::TICK_DELAY;
use crate::host::Host;

#[derive(Debug, Default)]
pub struct AnimationDriver {
    running: bool,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true only on the transition from stopped to running.
    pub fn start<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        host.request_redraw();
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Runs `on_tick` if running and books the next frame. `on_tick` returns
    /// true when the active unit has finished, which stops the driver. If the
    /// host cannot book the frame the driver stops as well and the animation
    /// waits for the next start. Returns whether a tick was performed.
    pub fn tick<H, F>(&mut self, host: &mut H, on_tick: F) -> bool
    where
        H: Host + ?Sized,
        F: FnOnce() -> bool,
    {
        if !self.running {
            // stale wake-up booked before a stop
            trace!("tick skipped, driver stopped");
            return false;
        }

        if on_tick() {
            self.stop();
        }

        if let Err(err) = host.schedule_redraw(TICK_DELAY) {
            warn!(%err, "failed to schedule next frame, animation stalled");
            self.stop();
        }
        true
    }
}
