use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is the raw wall-clock elapsed between consecutive ticks. The
/// clock does not clamp or smooth: animation state that integrates `dt`
/// (e.g. a rotation angle advancing at 1 rad/s) accumulates exactly the
/// elapsed wall time, frame granularity aside.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    /// Creates a new clock. The first `tick()` measures from this point.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension,
    /// so the next tick does not report the whole pause as one delta.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;

        let ft = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn tick_measures_elapsed_time() {
        let mut clock = FrameClock::new();
        sleep(Duration::from_millis(10));
        let ft = clock.tick();
        assert!(ft.dt >= 0.010);
    }

    #[test]
    fn deltas_accumulate_to_elapsed_wall_time() {
        let mut clock = FrameClock::new();
        let start = Instant::now();

        let mut sum = 0.0f32;
        for _ in 0..5 {
            sleep(Duration::from_millis(5));
            sum += clock.tick().dt;
        }

        // The first tick also covers the construction-to-start gap, so the
        // sum can only exceed `elapsed` by that (tiny) amount.
        let elapsed = start.elapsed().as_secs_f32();
        assert!((sum - elapsed).abs() < 0.05, "sum={sum} elapsed={elapsed}");
    }

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_rebases_the_clock() {
        let mut clock = FrameClock::new();
        sleep(Duration::from_millis(20));
        clock.reset();
        let ft = clock.tick();
        assert!(ft.dt < 0.020);
    }
}
