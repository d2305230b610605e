// src/host/mod.rs
//
// What the widget needs from whoever hosts it: a way to ask for a redraw now,
// and a way to ask for one later.

pub mod frame_scheduler;

pub use frame_scheduler::FrameScheduler;

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("wake-up {delay:?} from now is past the end of the clock")]
    OutOfRange { delay: Duration },
}

pub trait Host {
    fn request_redraw(&mut self);
    fn schedule_redraw(&mut self, delay: Duration) -> Result<(), ScheduleError>;
}
