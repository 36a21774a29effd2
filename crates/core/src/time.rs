use chrono::{DateTime, Datelike, Utc};

/// A simple clock abstraction so rendered dates stay deterministic in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Calendar year used for the footer copyright line.
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a `Clock` fixed at the deterministic test timestamp.
///
/// Falls back to the real clock if the timestamp cannot be represented.
#[must_use]
pub fn fixed_clock() -> Clock {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0).map_or(Clock::Default, Clock::fixed)
}
