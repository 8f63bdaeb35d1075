// Page layout primitives shared by the navigation pieces and render targets

use serde::{Deserialize, Serialize};

/// Element ids the page is expected to carry. Every one of them is optional.
pub mod ids {
    pub const COUNTDOWN_CONTAINER: &str = "hero-countdown";
    pub const NAVIGATION: &str = "navigation";
    pub const NAV_TOGGLE: &str = "navToggle";
    pub const NAV_MENU: &str = "navMenu";
}

/// Class names toggled by the controller.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "scrolled";
}

/// Vertical extent of an element relative to the viewport top, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when the box covers the horizontal line `line` px below the
    /// viewport top. Both edges count as covering.
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }

    /// Same box after the viewport scrolled down by `delta` px.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            top: self.top - delta,
            bottom: self.bottom - delta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// A request to move the viewport so that `top` is the new scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Extracts the section id from an in-page href (`#our-story` -> `our-story`).
/// External links and bare `#` are not section links.
pub fn section_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// The href a nav link must carry to point at `section_id`.
pub fn href_for_section(section_id: &str) -> String {
    format!("#{section_id}")
}
