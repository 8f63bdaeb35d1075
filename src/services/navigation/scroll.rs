use crate::models::layout::{classes, ids, ScrollBehavior, ScrollRequest};
use crate::services::render::RenderTarget;

/// Smooth-scrolls to sections, leaving room for the fixed navigation bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollNavigator {
    offset_px: f64,
}

impl ScrollNavigator {
    pub fn new(offset_px: f64) -> Self {
        Self { offset_px }
    }

    pub fn target_for<R: RenderTarget + ?Sized>(
        &self,
        page: &R,
        section_id: &str,
    ) -> Option<ScrollRequest> {
        let top = page.offset_top(section_id)?;
        Some(ScrollRequest {
            top: (top - self.offset_px).max(0.0),
            behavior: ScrollBehavior::Smooth,
        })
    }

    /// Returns `false` when the section is not on the page.
    pub fn scroll_to_section<R: RenderTarget + ?Sized>(&self, page: &mut R, section_id: &str) -> bool {
        match self.target_for(page, section_id) {
            Some(request) => {
                log::debug!("Scrolling to section '{section_id}' at {:.0}px", request.top);
                page.scroll_to(request);
                true
            }
            None => {
                log::debug!("Section '{section_id}' not on page, ignoring scroll");
                false
            }
        }
    }
}

/// Toggles the `scrolled` class on the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrolledIndicator {
    threshold_px: f64,
}

impl ScrolledIndicator {
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px }
    }

    pub fn update<R: RenderTarget + ?Sized>(&self, page: &mut R, scroll_top: f64) -> bool {
        let scrolled = scroll_top > self.threshold_px;
        page.set_class(ids::NAVIGATION, classes::SCROLLED, scrolled);
        scrolled
    }
}

/// Moves the floating particles at increasing speeds as the page scrolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxEffect {
    factor: f64,
}

impl ParallaxEffect {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    pub fn offset_for(&self, index: usize, scroll_top: f64) -> f64 {
        scroll_top * (index as f64 + 1.0) * self.factor
    }

    pub fn apply<R: RenderTarget + ?Sized>(&self, page: &mut R, scroll_top: f64) {
        for index in 0..page.particle_count() {
            page.set_particle_offset(index, self.offset_for(index, scroll_top));
        }
    }
}
