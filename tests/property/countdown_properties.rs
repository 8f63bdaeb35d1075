// Property-based tests for the countdown decomposition and highlighter

use chrono::Duration;
use proptest::prelude::*;
use wedding_countdown::models::countdown::{CountdownDisplay, CountdownParts};
use wedding_countdown::models::layout::BoundingBox;
use wedding_countdown::services::countdown::CountdownEngine;
use wedding_countdown::services::navigation::ActiveSectionHighlighter;
use wedding_countdown::utils::date::parse_local_instant;

const SECTIONS: [&str; 4] = ["hero", "our-story", "gift-section", "celebration"];

proptest! {
    /// Property: the four fields always recompose to the whole seconds left
    #[test]
    fn prop_parts_recompose_to_distance(ms in 0i64..400 * 86_400_000) {
        let parts = CountdownParts::from_millis(ms).unwrap();
        prop_assert!(parts.hours < 24);
        prop_assert!(parts.minutes < 60);
        prop_assert!(parts.seconds < 60);
        prop_assert_eq!(parts.total_seconds() as i64, ms / 1000);
    }

    /// Property: any instant after the target is the finished state
    #[test]
    fn prop_after_target_is_finished(late_ms in 1i64..10 * 365 * 86_400_000) {
        let target = parse_local_instant("2025-11-15T19:00:00").unwrap();
        let engine = CountdownEngine::new(target);
        let now = target + Duration::milliseconds(late_ms);
        prop_assert_eq!(engine.remaining(now), CountdownDisplay::Finished);
    }

    /// Property: the selected section is the first that covers the line
    #[test]
    fn prop_first_covering_section_selected(
        tops in proptest::collection::vec(-2000.0f64..2000.0, 4),
        heights in proptest::collection::vec(1.0f64..1500.0, 4),
        line in 0.0f64..400.0,
    ) {
        let highlighter = ActiveSectionHighlighter::new(
            SECTIONS.iter().map(|s| s.to_string()).collect(),
            line,
        );
        let boxes: Vec<BoundingBox> = tops
            .iter()
            .zip(&heights)
            .map(|(top, height)| BoundingBox::new(*top, top + height))
            .collect();
        let lookup = |id: &str| {
            SECTIONS.iter().position(|s| *s == id).map(|i| boxes[i])
        };

        let expected = boxes
            .iter()
            .position(|b| b.top <= line && b.bottom >= line)
            .map(|i| SECTIONS[i]);
        prop_assert_eq!(highlighter.select(lookup), expected);
    }
}
