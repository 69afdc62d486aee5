//! Fixed-rate tick scheduling on top of macroquad's vsync-driven frames.

/// Delay before the next tick once a tick has taken `frame_time` seconds.
/// Never negative: a slow tick is followed immediately by the next one.
pub fn next_delay(period: f64, frame_time: f64) -> f64 {
    (period - frame_time).max(0.0)
}

/// Decides, once per rendered frame, whether a simulation tick is due.
#[derive(Clone, Debug, PartialEq)]
pub struct TickGate {
    period: f64,
    next_at: f64,
}

impl TickGate {
    /// Gate ticking `fps` times per second, first tick due at `now`.
    pub fn new(fps: u32, now: f64) -> Self {
        Self { period: 1.0 / f64::from(fps.max(1)), next_at: now }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn next_at(&self) -> f64 {
        self.next_at
    }

    /// Returns true at most once per period. Lateness is deducted from the
    /// following delay so the average rate stays on target.
    pub fn poll(&mut self, now: f64) -> bool {
        if now < self.next_at {
            return false;
        }
        let lateness = now - self.next_at;
        self.next_at = now + next_delay(self.period, lateness);
        true
    }
}
