//! Per-slot rendering with change detection.

use serde::Serialize;

use crate::models::countdown::{format_counter, CounterField};
use crate::services::render::RenderTarget;

/// Outcome of pushing a value into a counter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CounterUpdate {
    /// Text was rewritten and the changed transition played.
    Changed,
    /// Same value as last time; the page was not touched.
    Unchanged,
    /// The slot is not on the page.
    Missing,
}

/// One numeric slot. Remembers only the last value it displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterSlot {
    field: CounterField,
    last_value: Option<u64>,
}

impl CounterSlot {
    pub fn new(field: CounterField) -> Self {
        Self {
            field,
            last_value: None,
        }
    }

    pub fn field(&self) -> CounterField {
        self.field
    }

    pub fn last_value(&self) -> Option<u64> {
        self.last_value
    }

    pub fn render<R: RenderTarget + ?Sized>(&mut self, page: &mut R, value: u64) -> CounterUpdate {
        if self.last_value == Some(value) {
            return CounterUpdate::Unchanged;
        }

        let id = self.field.element_id();
        if !page.set_text(id, &format_counter(value)) {
            log::trace!("Counter slot '{id}' not on page, skipping");
            return CounterUpdate::Missing;
        }
        page.flash_changed(id);
        self.last_value = Some(value);
        CounterUpdate::Changed
    }
}

/// The four slots of the hero countdown.
pub fn counter_slots() -> [CounterSlot; 4] {
    CounterField::ALL.map(CounterSlot::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::render::{MemoryPage, MockRenderTarget};
    use mockall::predicate::eq;

    #[test]
    fn unchanged_value_is_not_reanimated() {
        let mut page = MemoryPage::new().with_element("minutes");
        let mut slot = CounterSlot::new(CounterField::Minutes);

        assert_eq!(slot.render(&mut page, 7), CounterUpdate::Changed);
        assert_eq!(slot.render(&mut page, 7), CounterUpdate::Unchanged);
        assert_eq!(page.flashes("minutes"), 1);
        assert_eq!(page.text("minutes"), Some("07"));
    }

    #[test]
    fn changed_value_flashes_again() {
        let mut page = MemoryPage::new().with_element("seconds");
        let mut slot = CounterSlot::new(CounterField::Seconds);

        slot.render(&mut page, 10);
        assert_eq!(slot.render(&mut page, 9), CounterUpdate::Changed);
        assert_eq!(page.flashes("seconds"), 2);
        assert_eq!(page.text("seconds"), Some("09"));
    }

    #[test]
    fn missing_slot_is_skipped_and_not_cached() {
        let mut page = MemoryPage::new();
        let mut slot = CounterSlot::new(CounterField::Days);

        assert_eq!(slot.render(&mut page, 3), CounterUpdate::Missing);
        assert_eq!(slot.last_value(), None);
    }

    #[test]
    fn flash_follows_text_write() {
        let mut page = MockRenderTarget::new();
        let mut seq = mockall::Sequence::new();
        page.expect_set_text()
            .with(eq("hours"), eq("05"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(true);
        page.expect_flash_changed()
            .with(eq("hours"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut slot = CounterSlot::new(CounterField::Hours);
        slot.render(&mut page, 5);
        // Second render with the same value must not touch the page at all.
        slot.render(&mut page, 5);
    }

    #[test]
    fn slots_cover_all_fields() {
        let fields: Vec<_> = counter_slots().iter().map(|s| s.field()).collect();
        assert_eq!(fields, CounterField::ALL.to_vec());
    }
}
