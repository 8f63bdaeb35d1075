//! In-memory page used by tests and the console demo.
//!
//! Elements live at fixed document positions; bounding boxes are derived
//! from the current scroll offset the same way a browser viewport would.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::RenderTarget;
use crate::models::countdown::CounterField;
use crate::models::layout::{href_for_section, ids, BoundingBox, ScrollRequest};
use crate::models::settings::PageSettings;

const DEFAULT_SECTION_HEIGHT: f64 = 800.0;
const DEFAULT_PARTICLES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoryElement {
    pub text: String,
    pub classes: BTreeSet<String>,
    /// Document-relative `(top, height)` for laid-out elements.
    pub layout: Option<(f64, f64)>,
    /// How many times the changed transition was played.
    pub flashes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryNavLink {
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryPage {
    elements: BTreeMap<String, MemoryElement>,
    nav_links: Vec<MemoryNavLink>,
    scroll_offset: f64,
    particles: Vec<f64>,
    scroll_history: Vec<ScrollRequest>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A full invitation page: counters, navigation, one link per section
    /// and the sections stacked top to bottom.
    pub fn invitation(settings: &PageSettings) -> Self {
        let mut page = Self::new()
            .with_element(ids::COUNTDOWN_CONTAINER)
            .with_element(ids::NAVIGATION)
            .with_element(ids::NAV_TOGGLE)
            .with_element(ids::NAV_MENU)
            .with_particles(DEFAULT_PARTICLES);

        for field in CounterField::ALL {
            page = page.with_element(field.element_id());
        }

        for (index, section) in settings.sections.iter().enumerate() {
            let top = index as f64 * DEFAULT_SECTION_HEIGHT;
            page = page
                .with_section(section, top, DEFAULT_SECTION_HEIGHT)
                .with_nav_link(&href_for_section(section));
        }

        page
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.entry(id.to_string()).or_default();
        self
    }

    pub fn with_text(mut self, id: &str, text: &str) -> Self {
        self.elements.entry(id.to_string()).or_default().text = text.to_string();
        self
    }

    pub fn with_section(mut self, id: &str, top: f64, height: f64) -> Self {
        self.elements.entry(id.to_string()).or_default().layout = Some((top, height));
        self
    }

    pub fn with_nav_link(mut self, href: &str) -> Self {
        self.nav_links.push(MemoryNavLink {
            href: href.to_string(),
            active: false,
        });
        self
    }

    pub fn with_particles(mut self, count: usize) -> Self {
        self.particles = vec![0.0; count];
        self
    }

    pub fn without_element(mut self, id: &str) -> Self {
        self.elements.remove(id);
        self
    }

    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|el| el.text.as_str())
    }

    pub fn flashes(&self, id: &str) -> u32 {
        self.elements.get(id).map_or(0, |el| el.flashes)
    }

    pub fn active_links(&self) -> Vec<&str> {
        self.nav_links
            .iter()
            .filter(|link| link.active)
            .map(|link| link.href.as_str())
            .collect()
    }

    pub fn particle_offsets(&self) -> &[f64] {
        &self.particles
    }

    pub fn scroll_history(&self) -> &[ScrollRequest] {
        &self.scroll_history
    }

    /// Simulates the user scrolling; no scroll request is recorded.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }
}

impl RenderTarget for MemoryPage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => el.text = text.to_string(),
            None => return false,
        }

        // The container's content replaces the counters nested inside it.
        if id == ids::COUNTDOWN_CONTAINER {
            for field in CounterField::ALL {
                if let Some(slot) = self.elements.get_mut(field.element_id()) {
                    slot.text.clear();
                }
            }
        }
        true
    }

    fn flash_changed(&mut self, id: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.flashes += 1;
        }
    }

    fn bounding_box(&self, id: &str) -> Option<BoundingBox> {
        let (top, height) = self.elements.get(id)?.layout?;
        Some(BoundingBox::new(top, top + height).shifted(self.scroll_offset))
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.elements.get(id)?.layout.map(|(top, _)| top)
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> bool {
        let Some(el) = self.elements.get_mut(id) else {
            return false;
        };
        if enabled {
            el.classes.insert(class.to_string());
        } else {
            el.classes.remove(class);
        }
        true
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|el| el.classes.contains(class))
    }

    fn nav_links(&self) -> Vec<String> {
        self.nav_links.iter().map(|link| link.href.clone()).collect()
    }

    fn set_nav_link_active(&mut self, index: usize, active: bool) {
        if let Some(link) = self.nav_links.get_mut(index) {
            link.active = active;
        }
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        self.scroll_offset = request.top;
        self.scroll_history.push(request);
    }

    fn particle_count(&self) -> usize {
        self.particles.len()
    }

    fn set_particle_offset(&mut self, index: usize, offset_px: f64) {
        if let Some(slot) = self.particles.get_mut(index) {
            *slot = offset_px;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::layout::ScrollBehavior;

    #[test]
    fn bounding_box_follows_scroll() {
        let mut page = MemoryPage::new().with_section("our-story", 800.0, 600.0);
        assert_eq!(
            page.bounding_box("our-story"),
            Some(BoundingBox::new(800.0, 1400.0))
        );

        page.set_scroll_offset(750.0);
        assert_eq!(
            page.bounding_box("our-story"),
            Some(BoundingBox::new(50.0, 650.0))
        );
        assert_eq!(page.offset_top("our-story"), Some(800.0));
    }

    #[test]
    fn missing_elements_report_absence() {
        let mut page = MemoryPage::new();
        assert!(!page.set_text("days", "01"));
        assert!(!page.set_class("navigation", "scrolled", true));
        assert_eq!(page.bounding_box("hero"), None);
        page.flash_changed("days");
        assert_eq!(page.flashes("days"), 0);
    }

    #[test]
    fn container_text_clears_counter_slots() {
        let mut page = MemoryPage::invitation(&PageSettings::default())
            .with_text("days", "01")
            .with_text("seconds", "42");

        assert!(page.set_text(ids::COUNTDOWN_CONTAINER, "done"));
        assert_eq!(page.text(ids::COUNTDOWN_CONTAINER), Some("done"));
        for field in CounterField::ALL {
            assert_eq!(page.text(field.element_id()), Some(""));
        }
    }

    #[test]
    fn counter_text_leaves_other_slots_alone() {
        let mut page = MemoryPage::invitation(&PageSettings::default()).with_text("days", "01");
        assert!(page.set_text("seconds", "42"));
        assert_eq!(page.text("days"), Some("01"));
    }

    #[test]
    fn scroll_to_records_request() {
        let mut page = MemoryPage::new();
        let request = ScrollRequest {
            top: 720.0,
            behavior: ScrollBehavior::Smooth,
        };
        page.scroll_to(request);
        assert_eq!(page.scroll_offset(), 720.0);
        assert_eq!(page.scroll_history(), &[request]);
    }

    #[test]
    fn invitation_page_has_link_per_section() {
        let settings = PageSettings::default();
        let page = MemoryPage::invitation(&settings);
        assert_eq!(
            page.nav_links(),
            vec!["#hero", "#our-story", "#gift-section", "#celebration"]
        );
        assert!(page.has_element("seconds"));
        assert_eq!(page.offset_top("gift-section"), Some(1600.0));
    }
}
