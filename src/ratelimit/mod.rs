//! Fixed-window request admission.
//!
//! One shared window for all clients: up to `max_requests` admissions per
//! `window`, counted from the first request after a reset. The window resets
//! only once strictly more than `window` has elapsed, so a request landing
//! exactly on the boundary still belongs to the old window. Bursts placed at
//! the end of one window and the start of the next can briefly admit close
//! to twice `max_requests`; that is inherent to the fixed-window scheme and
//! accepted here for its simplicity.

use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Outcome of a single admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Granted,
    Denied { retry_after: Duration },
}

#[derive(Debug)]
struct RateWindow {
    count: u64,
    window_start: Instant,
}

/// Shared fixed-window rate limiter.
///
/// Reset check, increment and verdict happen under one lock so concurrent
/// callers can never over-admit.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    max_requests: u64,
    window: Duration,
    state: Mutex<RateWindow>,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u64, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Mutex::new(RateWindow {
                count: 0,
                window_start: Instant::now(),
            }),
        }
    }

    /// Count this request and report whether it may proceed.
    ///
    /// Denied requests still consume a slot; the verdict comes with the time
    /// remaining until the window can roll over.
    pub fn admit(&self) -> Admission {
        self.admit_at(Instant::now())
    }

    fn admit_at(&self, now: Instant) -> Admission {
        let mut state = self.state.lock();

        // 严格大于才重置：正好落在边界上的请求仍属于旧窗口
        let elapsed = now.duration_since(state.window_start);
        if elapsed > self.window {
            state.count = 0;
            state.window_start = now;
        }

        state.count += 1;
        if state.count <= self.max_requests {
            Admission::Granted
        } else {
            let remaining = self.window.saturating_sub(now.duration_since(state.window_start));
            Admission::Denied {
                retry_after: remaining.max(Duration::from_secs(1)),
            }
        }
    }
}
