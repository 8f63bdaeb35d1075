//! Drives the hero countdown from a clock.
//!
//! The controller itself never sleeps; a timer (see
//! [`crate::services::page::CountdownTimer`]) or a test calls [`tick`]
//! once per period.
//!
//! [`tick`]: CountdownController::tick

use serde::Serialize;

use super::counters::{counter_slots, CounterSlot, CounterUpdate};
use super::engine::CountdownEngine;
use crate::models::countdown::CountdownDisplay;
use crate::models::layout::ids;
use crate::services::render::RenderTarget;
use crate::utils::clock::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownState {
    /// Created, nothing rendered yet.
    Idle,
    Running,
    /// Target passed; the finished message is showing. Terminal.
    Finished,
    /// Stopped by the owner before the target was reached.
    Stopped,
}

pub struct CountdownController<C: Clock> {
    clock: C,
    engine: CountdownEngine,
    slots: [CounterSlot; 4],
    finished_message: String,
    state: CountdownState,
    last_display: Option<CountdownDisplay>,
    ticks: u64,
}

impl<C: Clock> CountdownController<C> {
    pub fn new(clock: C, engine: CountdownEngine, finished_message: impl Into<String>) -> Self {
        Self {
            clock,
            engine,
            slots: counter_slots(),
            finished_message: finished_message.into(),
            state: CountdownState::Idle,
            last_display: None,
            ticks: 0,
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    pub fn is_finished(&self) -> bool {
        self.state == CountdownState::Finished
    }

    pub fn last_display(&self) -> Option<CountdownDisplay> {
        self.last_display
    }

    /// Timer ticks handled while running. The initial render is not a tick.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn engine(&self) -> &CountdownEngine {
        &self.engine
    }

    /// Renders immediately so the counters are never blank, then accepts
    /// ticks. Calling it again after the first start does nothing.
    pub fn start<R: RenderTarget + ?Sized>(&mut self, page: &mut R) -> CountdownState {
        if self.state != CountdownState::Idle {
            log::debug!("Countdown already started (state {:?})", self.state);
            return self.state;
        }

        log::info!("Starting countdown to {}", self.engine.target());
        self.state = CountdownState::Running;
        self.render(page);
        self.state
    }

    /// One timer period elapsed. Ignored unless running.
    pub fn tick<R: RenderTarget + ?Sized>(&mut self, page: &mut R) -> Option<CountdownDisplay> {
        if !self.is_running() {
            return None;
        }

        self.ticks += 1;
        Some(self.render(page))
    }

    pub fn stop(&mut self) {
        if matches!(self.state, CountdownState::Idle | CountdownState::Running) {
            log::info!("Countdown stopped after {} tick(s)", self.ticks);
            self.state = CountdownState::Stopped;
        }
    }

    fn render<R: RenderTarget + ?Sized>(&mut self, page: &mut R) -> CountdownDisplay {
        let display = self.engine.remaining(self.clock.now());
        match display {
            CountdownDisplay::Finished => {
                if !page.set_text(ids::COUNTDOWN_CONTAINER, &self.finished_message) {
                    log::debug!("Countdown container missing; finished message not shown");
                }
                log::info!("Countdown reached its target");
                self.state = CountdownState::Finished;
            }
            CountdownDisplay::Running(parts) => {
                let changed = self
                    .slots
                    .iter_mut()
                    .map(|slot| {
                        let value = parts.get(slot.field());
                        slot.render(page, value)
                    })
                    .filter(|update| *update == CounterUpdate::Changed)
                    .count();
                log::trace!("Countdown {parts:?}: {changed} slot(s) changed");
            }
        }

        self.last_display = Some(display);
        display
    }
}
