//! Render task
//!
//! Waits for the instrument to release the display bus, then draws the
//! latest complete frame set. Every pass is reported to the watchdog task,
//! drawn or not.

use defmt::*;
use eidolon_core::config::BootTiming;
use eidolon_core::{PanelRenderer, Readout};
use eidolon_glcd::Bitmap;
use embassy_time::{Duration, Instant, Ticker, Timer};

use crate::board::Panel;
use crate::channels::{bus_idle, RenderPass, FRAMES, RENDER_PROGRESS};

/// Render loop period
const RENDER_POLL_MS: u64 = 20;

/// Lamp test, then the splash screen, then a blank panel
pub async fn boot_screens(
    glcd: &mut Panel,
    renderer: &PanelRenderer<'static>,
    logo: Option<&Bitmap<'_>>,
    timing: &BootTiming,
) {
    if let Err(e) = renderer.render_lamp_test(glcd) {
        warn!("Lamp test failed: {}", Debug2Format(&e));
    }
    Timer::after(Duration::from_millis(timing.lamp_test_ms as u64)).await;

    if let Some(logo) = logo {
        if let Err(e) = renderer.render_splash(glcd, logo) {
            warn!("Splash screen failed: {}", Debug2Format(&e));
        }
        Timer::after(Duration::from_millis(timing.splash_ms as u64)).await;
    }

    if let Err(e) = glcd.clear(0) {
        warn!("Clear failed: {}", Debug2Format(&e));
    }
}

/// Render task
#[embassy_executor::task]
pub async fn render_task(mut glcd: Panel, renderer: PanelRenderer<'static>) {
    info!("Render task started");

    let mut ticker = Ticker::every(Duration::from_millis(RENDER_POLL_MS));

    loop {
        let pass = match bus_idle().then(|| FRAMES.take_ready()).flatten() {
            Some(frames) => {
                let readout = Readout::from_frames(&frames);
                debug!(
                    "Readout \"{}\" [{}]",
                    readout.text().as_str(),
                    readout.annunciator_text().as_str()
                );

                let started = Instant::now();
                if let Err(e) = renderer.render(&mut glcd, &readout) {
                    warn!("Render failed: {}", Debug2Format(&e));
                }
                trace!("Rendered in {} us", started.elapsed().as_micros());
                RenderPass::Frame
            }
            None => RenderPass::Idle,
        };

        RENDER_PROGRESS.signal(pass);
        ticker.next().await;
    }
}
