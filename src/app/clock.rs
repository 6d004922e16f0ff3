// app/clock.rs
// Turns absolute milliseconds since start-up into per-tick elapsed time

/// Remembers the time of the previous tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_millis: u64,
}

impl FrameClock {
    pub fn new(start_millis: u64) -> Self {
        Self { last_millis: start_millis }
    }

    /// Milliseconds since the previous call. A clock that runs backwards yields zero.
    pub fn tick(&mut self, now_millis: u64) -> u64 {
        let elapsed = now_millis.saturating_sub(self.last_millis);
        self.last_millis = self.last_millis.max(now_millis);
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_time_between_ticks() {
        let mut clock = FrameClock::new(0);
        assert_eq!(clock.tick(16), 16);
        assert_eq!(clock.tick(35), 19);
        assert_eq!(clock.tick(35), 0);
    }

    #[test]
    fn backwards_time_is_ignored() {
        let mut clock = FrameClock::new(100);
        assert_eq!(clock.tick(90), 0);
        assert_eq!(clock.tick(110), 10);
    }
}
