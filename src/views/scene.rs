// src/views/scene.rs
//
// The whole widget: the row chain plus the driver that ticks it.
// Hosts call `on_tap` for input and `on_frame` whenever a redraw is due.

use tracing::{debug, info};

use crate::animation::{AnimationDriver, BoxSwitch, NodeChain};
use crate::constants::back_color;
use crate::host::Host;
use crate::render::{draw_rows, Canvas};

#[derive(Debug, Default)]
pub struct Scene {
    chain: NodeChain,
    driver: AnimationDriver,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Starts the current row. Ignored while a row is already moving,
    /// unless the driver stalled partway through, in which case it resumes.
    pub fn on_tap<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.chain.start_updating() {
            self.driver.start(host);
            info!(row = self.chain.current(), "row started");
            return true;
        }
        if self.chain.in_flight() && self.driver.start(host) {
            info!(row = self.chain.current(), "stalled row resumed");
            return true;
        }
        debug!("tap ignored, row already moving");
        false
    }

    /// Paints the current state without advancing anything.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.paint_background(back_color());
        draw_rows(canvas, self.chain.nodes());
    }

    /// Paints, then runs one tick if the driver is going.
    pub fn on_frame<C, H>(&mut self, canvas: &mut C, host: &mut H)
    where
        C: Canvas + ?Sized,
        H: Host + ?Sized,
    {
        self.draw(canvas);

        let chain = &mut self.chain;
        self.driver.tick(host, || match chain.update() {
            Some(switch) => {
                log_switch(&switch);
                true
            }
            None => false,
        });
    }
}

fn log_switch(switch: &BoxSwitch) {
    if switch.reversed {
        debug!(
            row = switch.settled_row,
            scale = switch.settled_scale,
            "row settled at the end of the column, reversing"
        );
    } else {
        debug!(
            row = switch.settled_row,
            scale = switch.settled_scale,
            next = switch.current_row,
            "row settled"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::BounceDir;
    use crate::constants::{BOXES, ROWS, TICK_DELAY};
    use crate::host::{FrameScheduler, ScheduleError};
    use crate::render::{DrawOp, PaintStyle, RecordingCanvas};
    use std::time::Duration;

    /// Drives the scene the way the nannou loop does, one poll per tick delay,
    /// until nothing is due or pending. Returns the number of frames drawn.
    fn run_until_idle(
        scene: &mut Scene,
        canvas: &mut RecordingCanvas,
        host: &mut FrameScheduler,
    ) -> usize {
        let mut frames = 0;
        let mut now = host.now();
        for _ in 0..1000 {
            if host.poll(now) {
                canvas.clear();
                scene.on_frame(canvas, host);
                frames += 1;
            } else if host.pending() == 0 {
                return frames;
            }
            now += TICK_DELAY;
        }
        panic!("scene never settled");
    }

    #[test]
    fn test_idle_frame_draws_resting_column() {
        let mut scene = Scene::new();
        let mut canvas = RecordingCanvas::new(300.0, 600.0);
        let mut host = FrameScheduler::new();

        scene.on_frame(&mut canvas, &mut host);

        assert_eq!(canvas.ops()[0], DrawOp::Background(back_color()));
        assert_eq!(canvas.rects(PaintStyle::Stroke).len(), ROWS * BOXES);
        assert_eq!(canvas.rects(PaintStyle::Fill).len(), ROWS);
        assert!(!scene.is_animating());
        assert_eq!(host.pending(), 0);
    }

    #[test]
    fn test_single_tap_moves_one_row() {
        let mut scene = Scene::new();
        let mut canvas = RecordingCanvas::new(300.0, 600.0);
        let mut host = FrameScheduler::new();

        assert!(scene.on_tap(&mut host));
        assert!(scene.is_animating());

        let frames = run_until_idle(&mut scene, &mut canvas, &mut host);

        // 50 ticks, plus the frame that shows the settled row
        assert_eq!(frames, 51);
        assert!(!scene.is_animating());
        assert_eq!(scene.chain().current(), 1);
        assert_eq!(scene.chain().nodes()[0].state.scale(), 1.0);
        assert!(scene.chain().nodes()[1..]
            .iter()
            .all(|node| node.state.scale() == 0.0));
        assert_eq!(canvas.rects(PaintStyle::Fill).len(), ROWS);
    }

    #[test]
    fn test_taps_while_moving_are_ignored() {
        let mut scene = Scene::new();
        let mut canvas = RecordingCanvas::new(300.0, 600.0);
        let mut host = FrameScheduler::new();

        scene.on_tap(&mut host);
        host.poll(Duration::ZERO);
        scene.on_frame(&mut canvas, &mut host);
        let scale = scene.chain().nodes()[0].state.scale();

        assert!(!scene.on_tap(&mut host));
        assert!(!scene.on_tap(&mut host));
        assert_eq!(host.pending(), 1);
        assert_eq!(scene.chain().nodes()[0].state.scale(), scale);

        run_until_idle(&mut scene, &mut canvas, &mut host);
        assert_eq!(scene.chain().current(), 1);
    }

    #[test]
    fn test_taps_walk_the_column_and_back() {
        let mut scene = Scene::new();
        let mut canvas = RecordingCanvas::new(300.0, 600.0);
        let mut host = FrameScheduler::new();

        let mut cursor = Vec::new();
        for _ in 0..(2 * ROWS + 1) {
            assert!(scene.on_tap(&mut host));
            run_until_idle(&mut scene, &mut canvas, &mut host);
            cursor.push(scene.chain().current());
        }

        assert_eq!(cursor, vec![1, 2, 3, 4, 4, 3, 2, 1, 0, 0, 1]);
        assert_eq!(scene.chain().bounce_dir(), BounceDir::Forward);
    }

    /// Polls every millisecond from `now` until the driver stops, returning
    /// the clock at that point.
    fn run_in_real_time(
        scene: &mut Scene,
        canvas: &mut RecordingCanvas,
        host: &mut FrameScheduler,
        mut now: Duration,
    ) -> Duration {
        for _ in 0..10_000 {
            if host.poll(now) {
                scene.on_frame(canvas, host);
                assert!(host.pending() <= 1);
            }
            if !scene.is_animating() {
                return now;
            }
            now += Duration::from_millis(1);
        }
        panic!("row never settled");
    }

    #[test]
    fn test_tap_before_leftover_wake_up_keeps_cadence() {
        let mut scene = Scene::new();
        let mut canvas = RecordingCanvas::new(300.0, 600.0);
        let mut host = FrameScheduler::new();

        scene.on_tap(&mut host);
        let settled = run_in_real_time(&mut scene, &mut canvas, &mut host, Duration::ZERO);
        // first tick is immediate, the other 49 are 20 ms apart
        assert_eq!(settled, TICK_DELAY * 49);
        assert_eq!(host.pending(), 1);

        // tap again while the finishing tick's wake-up is still booked
        let tapped = settled + Duration::from_millis(5);
        assert!(!host.poll(tapped));
        assert!(scene.on_tap(&mut host));
        let settled = run_in_real_time(&mut scene, &mut canvas, &mut host, tapped);

        assert_eq!(settled - tapped, TICK_DELAY * 49);
        assert_eq!(scene.chain().current(), 2);
        assert_eq!(scene.chain().nodes()[1].state.scale(), 1.0);
    }

    struct FlakyHost {
        inner: FrameScheduler,
        fail_next: bool,
    }

    impl Host for FlakyHost {
        fn request_redraw(&mut self) {
            self.inner.request_redraw();
        }

        fn schedule_redraw(&mut self, delay: Duration) -> Result<(), ScheduleError> {
            if std::mem::take(&mut self.fail_next) {
                return Err(ScheduleError::OutOfRange { delay });
            }
            self.inner.schedule_redraw(delay)
        }
    }

    #[test]
    fn test_failed_schedule_stalls_until_next_tap() {
        let mut scene = Scene::new();
        let mut canvas = RecordingCanvas::new(300.0, 600.0);
        let mut host = FlakyHost {
            inner: FrameScheduler::new(),
            fail_next: true,
        };

        scene.on_tap(&mut host);
        assert!(host.inner.poll(Duration::ZERO));
        scene.on_frame(&mut canvas, &mut host);

        // stalled partway through row 0
        assert!(!scene.is_animating());
        assert!(!host.inner.poll(TICK_DELAY));
        assert!(scene.chain().in_flight());

        // tapping resumes the same row and it finishes normally
        assert!(scene.on_tap(&mut host));
        run_until_idle(&mut scene, &mut canvas, &mut host.inner);
        assert_eq!(scene.chain().nodes()[0].state.scale(), 1.0);
        assert_eq!(scene.chain().current(), 1);
    }
}
