//! Time source and fixed-interval ticker for the sampling loop.

use std::time::{Duration, Instant};

/// Default session sampling interval.
///
/// Short enough that the window tracks the pointer without visible lag;
/// tunable through `[engine] tick_ms`.
pub const DEFAULT_TICK: Duration = Duration::from_millis(10);

/// Source of time.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Paces a loop at a fixed interval.
///
/// Each [`wait`](Ticker::wait) sleeps until the next deadline, so time
/// spent on work inside the tick counts toward the interval. A tick that
/// overruns is not made up; the schedule restarts from now.
pub struct Ticker<'a, C: Clock + ?Sized> {
    clock: &'a C,
    interval: Duration,
    next: Instant,
}

impl<'a, C: Clock + ?Sized> Ticker<'a, C> {
    pub fn new(clock: &'a C, interval: Duration) -> Self {
        Self {
            clock,
            interval,
            next: clock.now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until the next tick.
    pub fn wait(&mut self) {
        let now = self.clock.now();
        if self.next > now {
            self.clock.sleep(self.next - now);
            self.next += self.interval;
        } else {
            self.next = now + self.interval;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeClock;
    use super::*;

    #[test]
    fn ticker_sleeps_one_interval_when_idle() {
        // Arrange
        let clock = FakeClock::new();
        let mut ticker = Ticker::new(&clock, Duration::from_millis(10));

        // Act
        ticker.wait();
        ticker.wait();

        // Assert
        assert_eq!(clock.total_slept(), Duration::from_millis(20));
    }

    #[test]
    fn work_inside_tick_counts_toward_interval() {
        // Arrange
        let clock = FakeClock::new();
        let mut ticker = Ticker::new(&clock, Duration::from_millis(10));

        // Act
        clock.advance(Duration::from_millis(4));
        ticker.wait();

        // Assert
        assert_eq!(clock.total_slept(), Duration::from_millis(6));
    }

    #[test]
    fn overrun_tick_does_not_sleep_or_catch_up() {
        // Arrange
        let clock = FakeClock::new();
        let mut ticker = Ticker::new(&clock, Duration::from_millis(10));

        // Act
        clock.advance(Duration::from_millis(35));
        ticker.wait();
        ticker.wait();

        // Assert
        assert_eq!(clock.total_slept(), Duration::from_millis(10));
    }
}
