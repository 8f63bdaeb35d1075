// Date utility functions

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::error::{PageError, PageResult};

const FULL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parses an ISO-8601-like local date-time such as `2025-11-15T19:00:00`.
/// Seconds are optional; no offset is accepted since the instant is
/// interpreted in the viewer's local time.
pub fn parse_local_datetime(value: &str) -> PageResult<NaiveDateTime> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, FULL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, MINUTES_FORMAT))
        .map_err(|source| PageError::InvalidTargetInstant {
            value: value.to_string(),
            source,
        })
}

/// Pins a wall-clock time in `tz` to a real instant. An ambiguous time
/// (repeated fall-back hour) takes the earlier instant; a time inside a
/// spring-forward gap does not exist and is rejected.
pub fn resolve_in<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> PageResult<DateTime<Utc>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|resolved| resolved.with_timezone(&Utc))
        .ok_or_else(|| PageError::NonexistentLocalTime {
            value: naive.format(FULL_FORMAT).to_string(),
        })
}

/// Parses `value` and resolves it in the viewer's local time zone.
pub fn parse_local_instant(value: &str) -> PageResult<DateTime<Utc>> {
    resolve_in(parse_local_datetime(value)?, &Local)
}
