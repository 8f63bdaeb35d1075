// Wedding Countdown
// Main entry point: runs the page controller against a terminal page

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use wedding_countdown::services::page::{PageController, PageRuntime};
use wedding_countdown::services::render::{ConsolePage, MemoryPage};
use wedding_countdown::services::settings::SettingsService;
use wedding_countdown::utils::clock::SystemClock;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Wedding Countdown");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(SettingsService::default_path);
    let settings = SettingsService::new(settings_path).load()?;

    let page = ConsolePage::new(MemoryPage::invitation(&settings), io::stdout());
    let controller = PageController::new(&settings, SystemClock, page)
        .context("invalid page settings")?;

    let mut runtime = PageRuntime::new(controller, Duration::from_millis(settings.tick_interval_ms));
    runtime.start()?;

    // Land on the hero call-to-action target, as if the button were pressed.
    {
        let shared = runtime.shared();
        let mut controller = shared
            .lock()
            .map_err(|_| anyhow::anyhow!("page controller lock poisoned"))?;
        controller.on_hero_click();
        if let Some(section) = controller.on_scroll() {
            log::info!("Active section: {section}");
        }
    }

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("failed to listen for ctrl-c")?;
            log::info!("Interrupted");
        }
        _ = runtime.wait_finished() => {
            log::info!("Countdown finished");
        }
    }
    runtime.stop();

    let snapshot = runtime
        .shared()
        .lock()
        .map_err(|_| anyhow::anyhow!("page controller lock poisoned"))?
        .snapshot();
    log::info!("Final state: {}", serde_json::to_string(&snapshot)?);

    Ok(())
}
