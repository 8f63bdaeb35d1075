use serde::{Deserialize, Serialize};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// One of the four numeric slots shown in the hero countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounterField {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CounterField {
    pub const ALL: [CounterField; 4] = [
        CounterField::Days,
        CounterField::Hours,
        CounterField::Minutes,
        CounterField::Seconds,
    ];

    /// Element id of the slot on the page.
    pub fn element_id(&self) -> &'static str {
        match self {
            CounterField::Days => "days",
            CounterField::Hours => "hours",
            CounterField::Minutes => "minutes",
            CounterField::Seconds => "seconds",
        }
    }
}

/// Remaining time split into days/hours/minutes/seconds.
///
/// The split is calendar-agnostic: a day is always 24 hours, no month or
/// year arithmetic is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownParts {
    /// Decompose a non-negative millisecond distance. Returns `None` for
    /// negative input, which callers treat as the finished state.
    pub fn from_millis(distance_ms: i64) -> Option<Self> {
        if distance_ms < 0 {
            return None;
        }

        Some(Self {
            days: (distance_ms / MILLIS_PER_DAY) as u64,
            hours: ((distance_ms % MILLIS_PER_DAY) / MILLIS_PER_HOUR) as u64,
            minutes: ((distance_ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u64,
            seconds: ((distance_ms % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u64,
        })
    }

    pub fn get(&self, field: CounterField) -> u64 {
        match field {
            CounterField::Days => self.days,
            CounterField::Hours => self.hours,
            CounterField::Minutes => self.minutes,
            CounterField::Seconds => self.seconds,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// What the countdown area should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "parts", rename_all = "snake_case")]
pub enum CountdownDisplay {
    Running(CountdownParts),
    Finished,
}

impl CountdownDisplay {
    pub fn is_finished(&self) -> bool {
        matches!(self, CountdownDisplay::Finished)
    }

    pub fn parts(&self) -> Option<CountdownParts> {
        match self {
            CountdownDisplay::Running(parts) => Some(*parts),
            CountdownDisplay::Finished => None,
        }
    }
}

/// Zero-padded text for a counter slot. Values wider than two digits are
/// shown in full.
pub fn format_counter(value: u64) -> String {
    format!("{value:02}")
}
