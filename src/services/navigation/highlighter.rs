//! Marks the navigation link of the section under the reference line.

use crate::models::layout::{href_for_section, BoundingBox};
use crate::services::render::RenderTarget;

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSectionHighlighter {
    sections: Vec<String>,
    reference_line: f64,
}

impl ActiveSectionHighlighter {
    pub fn new(sections: Vec<String>, reference_line: f64) -> Self {
        Self {
            sections,
            reference_line,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn reference_line(&self) -> f64 {
        self.reference_line
    }

    /// First section, in configured order, whose box covers the reference
    /// line. `boxes` returns `None` for sections not on the page.
    pub fn select<F>(&self, mut boxes: F) -> Option<&str>
    where
        F: FnMut(&str) -> Option<BoundingBox>,
    {
        self.sections
            .iter()
            .map(String::as_str)
            .find(|id| boxes(id).is_some_and(|b| b.straddles(self.reference_line)))
    }

    /// Recomputes the active section from the page and updates every nav
    /// link. Returns the active section, if any.
    pub fn apply<R: RenderTarget + ?Sized>(&self, page: &mut R) -> Option<String> {
        let current = self.select(|id| page.bounding_box(id)).map(str::to_owned);
        let active_href = current.as_deref().map(href_for_section);

        for (index, href) in page.nav_links().into_iter().enumerate() {
            let active = active_href.as_deref() == Some(href.as_str());
            page.set_nav_link_active(index, active);
        }

        current
    }
}
