//! The page controller ties the countdown and navigation features to one
//! render target and one clock.

use serde::Serialize;

use crate::error::PageResult;
use crate::models::countdown::CountdownDisplay;
use crate::models::layout::{ids, section_from_href};
use crate::models::settings::PageSettings;
use crate::services::countdown::{CountdownController, CountdownEngine, CountdownState};
use crate::services::navigation::{
    ActiveSectionHighlighter, MobileMenu, ParallaxEffect, ScrollNavigator, ScrolledIndicator,
};
use crate::services::render::RenderTarget;
use crate::utils::clock::Clock;

/// Debug view of the controller, dumped as JSON by the binary.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub countdown_state: CountdownState,
    pub display: Option<CountdownDisplay>,
    pub ticks: u64,
    pub active_section: Option<String>,
    pub navigation_enabled: bool,
}

pub struct PageController<C: Clock, R: RenderTarget> {
    page: R,
    countdown: CountdownController<C>,
    highlighter: ActiveSectionHighlighter,
    navigator: ScrollNavigator,
    scrolled: ScrolledIndicator,
    parallax: ParallaxEffect,
    hero_target: String,
    navigation_enabled: bool,
    active_section: Option<String>,
}

impl<C: Clock, R: RenderTarget> PageController<C, R> {
    pub fn new(settings: &PageSettings, clock: C, page: R) -> PageResult<Self> {
        settings.validate()?;
        let engine = CountdownEngine::from_settings(settings)?;

        Ok(Self {
            page,
            countdown: CountdownController::new(clock, engine, settings.finished_message.clone()),
            highlighter: ActiveSectionHighlighter::new(
                settings.sections.clone(),
                settings.reference_line_px,
            ),
            navigator: ScrollNavigator::new(settings.scroll_offset_px),
            scrolled: ScrolledIndicator::new(settings.scrolled_threshold_px),
            parallax: ParallaxEffect::new(settings.parallax_factor),
            hero_target: settings.hero_target.clone(),
            navigation_enabled: false,
            active_section: None,
        })
    }

    /// Initialises every feature independently; a missing element only
    /// disables the feature that needs it.
    pub fn start(&mut self) {
        let state = self.countdown.start(&mut self.page);
        log::debug!("Countdown initialised in state {state:?}");

        self.navigation_enabled = self.page.has_element(ids::NAVIGATION);
        if !self.navigation_enabled {
            log::info!("Navigation bar not found; scroll highlighting disabled");
        }
        if !MobileMenu::is_available(&self.page) {
            log::debug!("Mobile menu elements not found; toggle disabled");
        }
    }

    /// One timer period elapsed. Returns whether the countdown still wants
    /// ticks.
    pub fn tick(&mut self) -> bool {
        self.countdown.tick(&mut self.page);
        self.countdown.is_running()
    }

    pub fn stop(&mut self) {
        self.countdown.stop();
    }

    /// Handles a scroll event at the page's current scroll offset.
    pub fn on_scroll(&mut self) -> Option<&str> {
        let scroll_top = self.page.scroll_offset();

        if self.navigation_enabled {
            self.scrolled.update(&mut self.page, scroll_top);
            self.active_section = self.highlighter.apply(&mut self.page);
        }
        self.parallax.apply(&mut self.page, scroll_top);

        self.active_section.as_deref()
    }

    /// Handles a click on a navigation link. Only in-page hrefs scroll; any
    /// click closes the mobile menu.
    pub fn on_nav_click(&mut self, href: &str) -> bool {
        let scrolled = match section_from_href(href) {
            Some(section) => self.navigator.scroll_to_section(&mut self.page, section),
            None => {
                log::debug!("Ignoring click on non-section link '{href}'");
                false
            }
        };
        MobileMenu::close(&mut self.page);
        scrolled
    }

    pub fn on_menu_toggle(&mut self) -> Option<bool> {
        MobileMenu::toggle(&mut self.page)
    }

    pub fn on_hero_click(&mut self) -> bool {
        self.navigator
            .scroll_to_section(&mut self.page, &self.hero_target)
    }

    pub fn scroll_to_section(&mut self, section_id: &str) -> bool {
        self.navigator.scroll_to_section(&mut self.page, section_id)
    }

    pub fn page(&self) -> &R {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut R {
        &mut self.page
    }

    pub fn countdown(&self) -> &CountdownController<C> {
        &self.countdown
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            countdown_state: self.countdown.state(),
            display: self.countdown.last_display(),
            ticks: self.countdown.tick_count(),
            active_section: self.active_section.clone(),
            navigation_enabled: self.navigation_enabled,
        }
    }

    pub fn into_page(self) -> R {
        self.page
    }
}
