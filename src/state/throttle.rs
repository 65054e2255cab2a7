//! Tick-based rate limiting for scroll-driven work.

/// Gates a handler so it runs at most once per `min_interval` ticks.
/// Calls inside the window are dropped, not queued.
#[derive(Debug, Clone)]
pub struct Throttle {
    min_interval: u64,
    last_run: Option<u64>,
}

impl Throttle {
    pub fn new(min_interval: u64) -> Self {
        Self {
            min_interval,
            last_run: None,
        }
    }

    /// Returns true (and records the run) if enough ticks have passed since
    /// the last accepted call. The first call is always accepted.
    pub fn ready(&mut self, tick: u64) -> bool {
        match self.last_run {
            Some(last) if tick.saturating_sub(last) < self.min_interval => false,
            _ => {
                self.last_run = Some(tick);
                true
            }
        }
    }
}
