//! Artificial latency for simulated flows

use std::time::{Duration, Instant};

/// A fixed delay before a simulated result is revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// No delay at all
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Block the current thread for the delay
    pub fn wait(&self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }

    /// When a result started at `now` becomes visible
    pub fn deadline_from(&self, now: Instant) -> Instant {
        now + self.0
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline() {
        let now = Instant::now();
        let latency = SimulatedLatency::new(Duration::from_millis(250));
        assert_eq!(latency.deadline_from(now), now + Duration::from_millis(250));
        assert_eq!(SimulatedLatency::none().deadline_from(now), now);
    }

    #[test]
    fn test_zero_wait_returns_immediately() {
        let start = Instant::now();
        SimulatedLatency::none().wait();
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
