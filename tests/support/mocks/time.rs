// tests/support/mocks/time.rs
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};

use akhbar_core::application::ports::time::Clock;

/// Deterministic clock; tests advance it explicitly.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
