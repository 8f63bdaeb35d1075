use crate::models::layout::{classes, ids};
use crate::services::render::RenderTarget;

/// The collapsible menu shown on narrow screens. Needs both the toggle
/// button and the menu; with either missing every call is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu;

impl MobileMenu {
    pub fn is_available<R: RenderTarget + ?Sized>(page: &R) -> bool {
        page.has_element(ids::NAV_TOGGLE) && page.has_element(ids::NAV_MENU)
    }

    pub fn is_open<R: RenderTarget + ?Sized>(page: &R) -> bool {
        page.has_class(ids::NAV_MENU, classes::ACTIVE)
    }

    /// Flips the menu. Returns the new open state, or `None` if unavailable.
    pub fn toggle<R: RenderTarget + ?Sized>(page: &mut R) -> Option<bool> {
        if !Self::is_available(page) {
            return None;
        }
        let open = !Self::is_open(page);
        Self::set_open(page, open);
        Some(open)
    }

    pub fn close<R: RenderTarget + ?Sized>(page: &mut R) {
        if Self::is_available(page) {
            Self::set_open(page, false);
        }
    }

    fn set_open<R: RenderTarget + ?Sized>(page: &mut R, open: bool) {
        page.set_class(ids::NAV_TOGGLE, classes::ACTIVE, open);
        page.set_class(ids::NAV_MENU, classes::ACTIVE, open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::render::MemoryPage;

    fn menu_page() -> MemoryPage {
        MemoryPage::new()
            .with_element(ids::NAV_TOGGLE)
            .with_element(ids::NAV_MENU)
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut page = menu_page();
        assert_eq!(MobileMenu::toggle(&mut page), Some(true));
        assert!(page.has_class(ids::NAV_TOGGLE, classes::ACTIVE));
        assert!(page.has_class(ids::NAV_MENU, classes::ACTIVE));

        assert_eq!(MobileMenu::toggle(&mut page), Some(false));
        assert!(!MobileMenu::is_open(&page));
    }

    #[test]
    fn close_is_idempotent() {
        let mut page = menu_page();
        MobileMenu::toggle(&mut page);
        MobileMenu::close(&mut page);
        MobileMenu::close(&mut page);
        assert!(!page.has_class(ids::NAV_TOGGLE, classes::ACTIVE));
    }

    #[test]
    fn missing_menu_is_noop() {
        let mut page = MemoryPage::new().with_element(ids::NAV_TOGGLE);
        assert_eq!(MobileMenu::toggle(&mut page), None);
        assert!(!page.has_class(ids::NAV_TOGGLE, classes::ACTIVE));
    }
}
