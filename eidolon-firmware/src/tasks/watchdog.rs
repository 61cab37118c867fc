//! Watchdog task
//!
//! Feeds the independent watchdog while the render loop keeps reporting
//! passes. If the loop goes quiet for longer than the stall timeout the
//! feeding stops and the board resets.

use defmt::*;
use eidolon_core::safety::{RenderMonitor, RenderStatus};
use embassy_stm32::peripherals::IWDG;
use embassy_stm32::wdg::IndependentWatchdog;
use embassy_time::{with_timeout, Duration, Instant};
use portable_atomic::Ordering;

use crate::channels::{RenderPass, DESYNCS, RENDER_PROGRESS};

/// Longest wait for a render pass before re-checking the monitor
const FEED_INTERVAL_MS: u64 = 250;

fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Watchdog task
#[embassy_executor::task]
pub async fn watchdog_task(mut wdg: IndependentWatchdog<'static, IWDG>) {
    info!("Watchdog task started");

    let mut monitor = RenderMonitor::default();
    let mut last_status = RenderStatus::Starting;
    wdg.unleash();

    loop {
        match with_timeout(
            Duration::from_millis(FEED_INTERVAL_MS),
            RENDER_PROGRESS.wait(),
        )
        .await
        {
            Ok(RenderPass::Frame) => monitor.record_frame(now_ms()),
            Ok(RenderPass::Idle) => monitor.record_progress(now_ms()),
            Err(_) => {}
        }

        let desyncs = DESYNCS.swap(0, Ordering::Relaxed);
        if desyncs > 0 {
            monitor.record_desyncs(desyncs);
            warn!(
                "Receiver desync, {} total after {} frames",
                monitor.desyncs(),
                monitor.frames_rendered()
            );
        }

        let now = now_ms();
        let status = monitor.status(now);
        if status != last_status {
            match status {
                RenderStatus::Running => info!("Render loop running"),
                RenderStatus::Stalled => error!("Render loop stalled, letting the watchdog bite"),
                RenderStatus::Starting => {}
            }
            last_status = status;
        }

        if monitor.should_feed(now) {
            wdg.pet();
        }
    }
}
