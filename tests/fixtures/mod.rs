// Test fixtures - reusable test data
// Provides consistent pages and clocks across the integration tests

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use wedding_countdown::models::settings::PageSettings;
use wedding_countdown::services::page::PageController;
use wedding_countdown::services::render::MemoryPage;
use wedding_countdown::utils::clock::ManualClock;
use wedding_countdown::utils::date::parse_local_instant;

pub const WEDDING: &str = "2025-11-15T19:00:00";

pub fn at(value: &str) -> DateTime<Utc> {
    parse_local_instant(value).expect("fixture date must parse")
}

pub fn settings() -> PageSettings {
    PageSettings {
        target_instant: WEDDING.to_string(),
        ..PageSettings::default()
    }
}

/// Controller over the full invitation page with time frozen at `now`.
pub fn invitation_at(now: &str) -> (PageController<ManualClock, MemoryPage>, ManualClock) {
    let settings = settings();
    let clock = ManualClock::new(at(now));
    let controller = PageController::new(&settings, clock.clone(), MemoryPage::invitation(&settings))
        .expect("default settings are valid");
    (controller, clock)
}

pub fn counters(page: &MemoryPage) -> [String; 4] {
    ["days", "hours", "minutes", "seconds"]
        .map(|id| page.text(id).unwrap_or_default().to_string())
}
