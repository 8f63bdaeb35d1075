//! Scroll-driven navigation: active link highlighting, the `scrolled` nav
//! bar state, smooth scrolling to sections, the mobile menu and parallax.

mod highlighter;
mod menu;
mod scroll;

pub use highlighter::ActiveSectionHighlighter;
pub use menu::MobileMenu;
pub use scroll::{ParallaxEffect, ScrollNavigator, ScrolledIndicator};
