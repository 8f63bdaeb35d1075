use chrono::{DateTime, Utc};

use crate::error::PageResult;
use crate::models::countdown::{CountdownDisplay, CountdownParts};
use crate::models::settings::PageSettings;

/// Computes what the countdown shows for a fixed target instant. Both the
/// target and "now" are real instants, so the distance is exact even when
/// a daylight-saving change falls in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownEngine {
    target: DateTime<Utc>,
}

impl CountdownEngine {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    pub fn from_settings(settings: &PageSettings) -> PageResult<Self> {
        Ok(Self::new(settings.target()?))
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Signed distance to the target in milliseconds.
    pub fn distance_ms(&self, now: DateTime<Utc>) -> i64 {
        self.target.signed_duration_since(now).num_milliseconds()
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> CountdownDisplay {
        match CountdownParts::from_millis(self.distance_ms(now)) {
            Some(parts) => CountdownDisplay::Running(parts),
            None => CountdownDisplay::Finished,
        }
    }
}
