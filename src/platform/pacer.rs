//! Frame-rate limiting for hosts without an animation-frame scheduler

use std::time::{Duration, Instant};

/// Sleeps out the rest of each fixed frame period
#[derive(Debug)]
pub struct FramePacer {
    period: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Block until the current frame's deadline; returns the time slept
    ///
    /// A host that falls more than a frame behind resynchronises instead of
    /// bursting to catch up.
    pub fn wait(&mut self) -> Duration {
        let now = Instant::now();
        let slept = if self.next > now {
            let remaining = self.next - now;
            std::thread::sleep(remaining);
            remaining
        } else {
            Duration::ZERO
        };

        self.next += self.period;
        let now = Instant::now();
        if self.next + self.period < now {
            log::debug!("Frame pacer fell behind, resyncing");
            self.next = now + self.period;
        }
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paces_frames() {
        let period = Duration::from_millis(5);
        let mut pacer = FramePacer::new(period);
        let start = Instant::now();
        for _ in 0..4 {
            pacer.wait();
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
        assert_eq!(pacer.period(), period);
    }

    #[test]
    fn test_no_sleep_when_behind() {
        let mut pacer = FramePacer::new(Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(pacer.wait(), Duration::ZERO);
    }
}
