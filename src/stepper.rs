use std::time::{Duration, Instant};

/// Longest frame delta that counts toward the accumulator.
///
/// A stalled frame (a suspended or backgrounded terminal) would otherwise
/// dump a large catch-up jump into the accumulator at once.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Converts wall-clock frame callbacks into discrete game ticks.
///
/// The accumulator gains `elapsed × ticks_per_second` per frame and pays out
/// at most one tick per frame; surplus time carries over to later frames, so
/// game speed never exceeds the render rate.
#[derive(Debug, Clone, Copy)]
pub struct Stepper {
    ticks_per_second: u32,
    accumulator: f64,
    last_frame: Option<Instant>,
}

impl Stepper {
    #[must_use]
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second,
            accumulator: 0.0,
            last_frame: None,
        }
    }

    /// Records one frame callback at `now` and reports whether a tick fires.
    ///
    /// The first frame only establishes the baseline timestamp and never
    /// ticks.
    pub fn frame(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_frame.replace(now) else {
            return false;
        };

        self.accumulate(now.saturating_duration_since(last))
    }

    /// Feeds one frame's elapsed time directly; the clock-free path used by
    /// tests and scripted simulations.
    pub fn accumulate(&mut self, elapsed: Duration) -> bool {
        let elapsed = elapsed.min(MAX_FRAME_DELTA);
        self.accumulator += elapsed.as_secs_f64() * f64::from(self.ticks_per_second);

        if self.accumulator >= 1.0 {
            self.accumulator -= 1.0;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{MAX_FRAME_DELTA, Stepper};

    #[test]
    fn first_frame_never_ticks() {
        let mut stepper = Stepper::new(1000);

        assert!(!stepper.frame(Instant::now()));
    }

    #[test]
    fn tick_fires_once_enough_time_accumulates() {
        let mut stepper = Stepper::new(10);

        // 25 ms at 10 ticks/s is a quarter tick per frame.
        assert!(!stepper.accumulate(Duration::from_millis(25)));
        assert!(!stepper.accumulate(Duration::from_millis(25)));
        assert!(!stepper.accumulate(Duration::from_millis(25)));
        assert!(stepper.accumulate(Duration::from_millis(25)));

        // The accumulator was drained by exactly one tick.
        assert!(!stepper.accumulate(Duration::from_millis(25)));
    }

    #[test]
    fn frame_delta_is_capped() {
        let mut stepper = Stepper::new(10);

        // Ten seconds of stall counts as only 100 ms: one tick, no backlog.
        assert!(stepper.accumulate(Duration::from_secs(10)));
        assert!(!stepper.accumulate(Duration::ZERO));
        assert_eq!(MAX_FRAME_DELTA, Duration::from_millis(100));
    }

    #[test]
    fn at_most_one_tick_per_frame() {
        // 100 ms at 30 ticks/s is three ticks' worth of time, but each frame
        // pays out a single tick and carries the surplus.
        let mut stepper = Stepper::new(30);

        assert!(stepper.accumulate(Duration::from_millis(100)));
        assert!(stepper.accumulate(Duration::ZERO));
        assert!(stepper.accumulate(Duration::ZERO));
        assert!(!stepper.accumulate(Duration::ZERO));
    }
}
