//! Inter-task communication
//!
//! State shared between the receive interrupts and the Embassy tasks.

use core::cell::RefCell;

use eidolon_core::SharedFrames;
use eidolon_hal::BusPeripheral;
use eidolon_hal_stm32f0::SpiSniffer;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicU32;

/// Frames assembled by the SPI1 interrupt, drained by the render task
pub static FRAMES: SharedFrames = SharedFrames::new();

/// The bus listener, installed once the boot screens are done
pub static SNIFFER: Mutex<CriticalSectionRawMutex, RefCell<Option<SpiSniffer<'static>>>> =
    Mutex::new(RefCell::new(None));

/// Desyncs seen by the SPI1 interrupt since the watchdog task last looked
pub static DESYNCS: AtomicU32 = AtomicU32::new(0);

/// One render loop pass, reported to the watchdog task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderPass {
    /// Nothing new to draw
    Idle,
    /// A complete frame set was drawn
    Frame,
}

/// Signal that the render loop completed a pass
pub static RENDER_PROGRESS: Signal<CriticalSectionRawMutex, RenderPass> = Signal::new();

/// PWO state as seen by the sniffer
///
/// Before the sniffer is installed nothing is being received, which counts
/// as idle.
pub fn bus_idle() -> bool {
    SNIFFER.lock(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(true, |sniffer| sniffer.is_bus_idle())
    })
}
