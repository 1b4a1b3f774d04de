//! Fixed-rate pacing for world updates and rendering.
//!
//! Both clocks compare a schedule (`n / rate`) against time elapsed since the
//! loop started, so a slow frame is caught up on instead of drifting.

use std::time::Duration;

/// Decides when the next frame is due.
#[derive(Debug, Clone)]
pub struct FrameClock {
    fps: u32,
    /// Index of the next frame to render.
    frame: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            fps: fps.max(1),
            frame: 1,
        }
    }

    /// Render when the schedule for the next frame has passed.
    ///
    /// Returns true at most once per scheduled frame.
    pub fn should_render(&mut self, elapsed: Duration) -> bool {
        if schedule(self.frame, self.fps) < elapsed {
            self.frame += 1;
            return true;
        }
        false
    }

    /// Frames rendered so far.
    pub fn rendered(&self) -> u64 {
        self.frame - 1
    }

    /// Achieved frames per second (0 during the first second).
    pub fn measured_fps(&self, elapsed: Duration) -> f64 {
        let secs = elapsed.as_secs_f64();
        if secs <= 1.0 {
            return 0.0;
        }
        self.rendered() as f64 / secs
    }
}

/// Keeps world updates on a ticks-per-second schedule.
#[derive(Debug, Clone, Copy)]
pub struct TickPacer {
    tps: u32,
}

impl TickPacer {
    pub fn new(tps: u32) -> Self {
        Self { tps: tps.max(1) }
    }

    /// How long to sleep so that `tick` does not run early.
    ///
    /// `None` when the loop is on time or behind.
    pub fn delay(&self, tick: u64, elapsed: Duration) -> Option<Duration> {
        let due = schedule(tick, self.tps);
        due.checked_sub(elapsed).filter(|d| !d.is_zero())
    }
}

fn schedule(n: u64, rate: u32) -> Duration {
    let nanos = (n as u128) * 1_000_000_000 / (rate as u128);
    Duration::from_nanos(nanos.min(u64::MAX as u128) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn frame_clock_waits_for_first_slot() {
        let mut clock = FrameClock::new(40);
        assert!(!clock.should_render(ms(0)));
        assert!(!clock.should_render(ms(25)));
        assert!(clock.should_render(ms(26)));
        assert_eq!(clock.rendered(), 1);
    }

    #[test]
    fn frame_clock_renders_once_per_slot() {
        let mut clock = FrameClock::new(40);
        assert!(clock.should_render(ms(30)));
        assert!(!clock.should_render(ms(40)));
        assert!(clock.should_render(ms(51)));
    }

    #[test]
    fn frame_clock_catches_up_one_frame_at_a_time() {
        let mut clock = FrameClock::new(40);
        // 200ms late: every call renders until the schedule is met again.
        let renders = (0..10).filter(|_| clock.should_render(ms(200))).count();
        assert_eq!(renders, 7);
    }

    #[test]
    fn measured_fps_ignores_first_second() {
        let mut clock = FrameClock::new(40);
        clock.should_render(ms(500));
        assert_eq!(clock.measured_fps(ms(500)), 0.0);
        assert!((clock.measured_fps(ms(2000)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn tick_pacer_sleeps_only_when_ahead() {
        let pacer = TickPacer::new(70);
        // Tick 7 is due at 100ms.
        assert_eq!(pacer.delay(7, ms(40)), Some(ms(60)));
        assert_eq!(pacer.delay(7, ms(100)), None);
        assert_eq!(pacer.delay(7, ms(150)), None);
        assert_eq!(pacer.delay(0, ms(0)), None);
    }
}
