use std::time::{Duration, Instant};

/// Paces generations: a tick is due once `delay` has passed since the last one.
///
/// Never sleeps, so the host's event loop stays responsive between ticks.
pub struct TickPacer {
    delay: Duration,
    last_tick: Instant,
    tick_time_smoothed: f64,
}

impl TickPacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_tick: Instant::now(),
            tick_time_smoothed: delay.as_secs_f64(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Measured ticks per second, exponentially smoothed.
    pub fn tps(&self) -> f64 {
        if self.tick_time_smoothed > 0. {
            1. / self.tick_time_smoothed
        } else {
            f64::INFINITY
        }
    }

    pub fn is_due(&self) -> bool {
        self.last_tick.elapsed() >= self.delay
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.delay.saturating_sub(self.last_tick.elapsed())
    }

    pub fn mark_tick(&mut self) {
        let tick_time = self.last_tick.elapsed().as_secs_f64();
        self.tick_time_smoothed += (tick_time - self.tick_time_smoothed) * 0.1;
        self.last_tick = Instant::now();
    }
}
