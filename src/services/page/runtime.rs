//! Runs a [`PageController`] on a tokio interval.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::{JoinError, JoinHandle};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::controller::PageController;
use crate::services::render::RenderTarget;
use crate::utils::clock::Clock;

pub type SharedPage<C, R> = Arc<Mutex<PageController<C, R>>>;

/// Handle to the repeating countdown task. Dropping the handle detaches the
/// task; call [`CountdownTimer::stop`] to cancel it.
pub struct CountdownTimer {
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    /// Ticks `page` every `period`, starting one period from now. The task
    /// ends on its own once the countdown stops wanting ticks.
    pub fn spawn<C, R>(page: SharedPage<C, R>, period: Duration) -> Self
    where
        C: Clock + Send + 'static,
        R: RenderTarget + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                let keep_going = match page.lock() {
                    Ok(mut controller) => controller.tick(),
                    Err(_) => {
                        log::error!("Page controller lock poisoned; stopping countdown timer");
                        false
                    }
                };
                if !keep_going {
                    break;
                }
            }
            log::debug!("Countdown timer exited");
        });

        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn join(&mut self) -> Result<(), JoinError> {
        (&mut self.handle).await
    }
}

/// Owns the controller and its timer so callers get a single start/stop.
pub struct PageRuntime<C: Clock, R: RenderTarget> {
    page: SharedPage<C, R>,
    period: Duration,
    timer: Option<CountdownTimer>,
}

impl<C, R> PageRuntime<C, R>
where
    C: Clock + Send + 'static,
    R: RenderTarget + Send + 'static,
{
    pub fn new(controller: PageController<C, R>, period: Duration) -> Self {
        Self {
            page: Arc::new(Mutex::new(controller)),
            period,
            timer: None,
        }
    }

    pub fn shared(&self) -> SharedPage<C, R> {
        Arc::clone(&self.page)
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    /// Renders the page once and starts the timer. Must be called from
    /// within a tokio runtime. A second call is ignored.
    pub fn start(&mut self) -> anyhow::Result<()> {
        if self.timer.is_some() {
            log::debug!("Page runtime already started");
            return Ok(());
        }

        let wants_ticks = {
            let mut controller = self
                .page
                .lock()
                .map_err(|_| anyhow::anyhow!("page controller lock poisoned"))?;
            controller.start();
            controller.countdown().is_running()
        };

        if wants_ticks {
            self.timer = Some(CountdownTimer::spawn(self.shared(), self.period));
        } else {
            log::info!("Countdown not running after start; timer not scheduled");
        }
        Ok(())
    }

    /// Waits until the timer exits on its own. Returns at once if no timer
    /// is running.
    pub async fn wait_finished(&mut self) {
        let Some(timer) = self.timer.as_mut() else {
            return;
        };
        if timer.is_finished() {
            return;
        }
        if let Err(err) = timer.join().await {
            if !err.is_cancelled() {
                log::error!("Countdown timer failed: {err}");
            }
        }
    }

    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
        match self.page.lock() {
            Ok(mut controller) => controller.stop(),
            Err(_) => log::error!("Page controller lock poisoned while stopping"),
        }
    }
}
