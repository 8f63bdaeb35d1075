//! Terminal rendering for the demo binary.
//!
//! Wraps a [`MemoryPage`] and prints a status line whenever the countdown
//! area changes.

use std::io::Write;

use super::{MemoryPage, RenderTarget};
use crate::models::countdown::CounterField;
use crate::models::layout::{ids, BoundingBox, ScrollRequest};

pub struct ConsolePage<W: Write> {
    inner: MemoryPage,
    out: W,
}

impl<W: Write> ConsolePage<W> {
    pub fn new(inner: MemoryPage, out: W) -> Self {
        Self { inner, out }
    }

    pub fn inner(&self) -> &MemoryPage {
        &self.inner
    }

    pub fn into_parts(self) -> (MemoryPage, W) {
        (self.inner, self.out)
    }

    fn status_line(&self) -> String {
        let slot = |field: CounterField| self.inner.text(field.element_id()).unwrap_or("--");
        format!(
            "{}d {}h {}m {}s",
            slot(CounterField::Days),
            slot(CounterField::Hours),
            slot(CounterField::Minutes),
            slot(CounterField::Seconds)
        )
    }

    fn emit(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            log::warn!("Failed to write countdown line: {err}");
        }
    }
}

impl<W: Write> RenderTarget for ConsolePage<W> {
    fn has_element(&self, id: &str) -> bool {
        self.inner.has_element(id)
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        if !self.inner.set_text(id, text) {
            return false;
        }

        // Seconds is written last on every tick, so one line per update.
        if id == CounterField::Seconds.element_id() {
            let line = self.status_line();
            self.emit(&line);
        } else if id == ids::COUNTDOWN_CONTAINER {
            self.emit(text);
        }
        true
    }

    fn flash_changed(&mut self, id: &str) {
        self.inner.flash_changed(id);
    }

    fn bounding_box(&self, id: &str) -> Option<BoundingBox> {
        self.inner.bounding_box(id)
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.inner.offset_top(id)
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> bool {
        self.inner.set_class(id, class, enabled)
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.inner.has_class(id, class)
    }

    fn nav_links(&self) -> Vec<String> {
        self.inner.nav_links()
    }

    fn set_nav_link_active(&mut self, index: usize, active: bool) {
        self.inner.set_nav_link_active(index, active);
    }

    fn scroll_offset(&self) -> f64 {
        self.inner.scroll_offset()
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        log::debug!("Scrolling to {:.0}px ({:?})", request.top, request.behavior);
        self.inner.scroll_to(request);
    }

    fn particle_count(&self) -> usize {
        self.inner.particle_count()
    }

    fn set_particle_offset(&mut self, index: usize, offset_px: f64) {
        self.inner.set_particle_offset(index, offset_px);
    }
}
