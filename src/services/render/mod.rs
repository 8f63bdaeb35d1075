//! The page surface the controller draws on.
//!
//! Everything the countdown and navigation logic needs from a page goes
//! through [`RenderTarget`]. Lookups report absence with `false`/`None`;
//! callers treat that as "skip this feature", never as an error.

mod console;
mod memory;

pub use console::ConsolePage;
pub use memory::{MemoryElement, MemoryNavLink, MemoryPage};

use crate::models::layout::{BoundingBox, ScrollRequest};

#[cfg_attr(test, mockall::automock)]
pub trait RenderTarget {
    /// Whether an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// Replace the text content of `id`. Returns `false` if it is absent.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Play the short "value changed" transition on `id`.
    fn flash_changed(&mut self, id: &str);

    /// Viewport-relative box of `id`.
    fn bounding_box(&self, id: &str) -> Option<BoundingBox>;

    /// Document-relative top edge of `id`.
    fn offset_top(&self, id: &str) -> Option<f64>;

    /// Add or remove a class. Returns `false` if the element is absent.
    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> bool;

    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Hrefs of the navigation links, in document order.
    fn nav_links(&self) -> Vec<String>;

    fn set_nav_link_active(&mut self, index: usize, active: bool);

    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;

    fn scroll_to(&mut self, request: ScrollRequest);

    /// Number of decorative floating particles.
    fn particle_count(&self) -> usize;

    fn set_particle_offset(&mut self, index: usize, offset_px: f64);
}
