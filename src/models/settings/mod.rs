// Page settings model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};
use crate::utils::date::parse_local_instant;

pub const DEFAULT_TARGET_INSTANT: &str = "2025-11-15T19:00:00";
pub const DEFAULT_FINISHED_MESSAGE: &str = "🎉 O grande dia chegou! 🎉";

/// Everything the controller needs to know about the page. All fields have
/// defaults so a settings file only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Countdown zero point as a local date-time string.
    pub target_instant: String,
    pub tick_interval_ms: u64,
    /// Distance of the reference line from the viewport top.
    pub reference_line_px: f64,
    /// Scroll offset past which the navigation bar is marked `scrolled`.
    pub scrolled_threshold_px: f64,
    /// Gap left above a section when scrolling to it.
    pub scroll_offset_px: f64,
    pub parallax_factor: f64,
    /// Sections in page order; earlier entries win when several straddle.
    pub sections: Vec<String>,
    pub hero_target: String,
    pub finished_message: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            target_instant: DEFAULT_TARGET_INSTANT.to_string(),
            tick_interval_ms: 1000,
            reference_line_px: 100.0,
            scrolled_threshold_px: 100.0,
            scroll_offset_px: 80.0,
            parallax_factor: 0.1,
            sections: vec![
                "hero".to_string(),
                "our-story".to_string(),
                "gift-section".to_string(),
                "celebration".to_string(),
            ],
            hero_target: "gift-section".to_string(),
            finished_message: DEFAULT_FINISHED_MESSAGE.to_string(),
        }
    }
}

impl PageSettings {
    /// The target pinned to a real instant in the local time zone.
    pub fn target(&self) -> PageResult<DateTime<Utc>> {
        parse_local_instant(&self.target_instant)
    }

    pub fn validate(&self) -> PageResult<()> {
        self.target()?;

        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms", "must be greater than zero"));
        }

        for (field, value) in [
            ("reference_line_px", self.reference_line_px),
            ("scrolled_threshold_px", self.scrolled_threshold_px),
            ("scroll_offset_px", self.scroll_offset_px),
            ("parallax_factor", self.parallax_factor),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
        }

        if let Some(empty) = self.sections.iter().position(|s| s.trim().is_empty()) {
            return Err(invalid("sections", &format!("entry {empty} is empty")));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> PageError {
    PageError::InvalidSetting {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = PageSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.sections.len(), 4);
        assert_eq!(settings.reference_line_px, 100.0);
    }

    #[test]
    fn zero_tick_interval_rejected() {
        let settings = PageSettings {
            tick_interval_ms: 0,
            ..PageSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("tick_interval_ms"));
    }

    #[test]
    fn bad_target_rejected() {
        let settings = PageSettings {
            target_instant: "soon".to_string(),
            ..PageSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(PageError::InvalidTargetInstant { .. })
        ));
    }

    #[test]
    fn blank_section_rejected() {
        let mut settings = PageSettings::default();
        settings.sections.push("  ".to_string());
        assert!(matches!(
            settings.validate(),
            Err(PageError::InvalidSetting { field: "sections", .. })
        ));
    }
}
