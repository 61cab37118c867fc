//! Eidolon - HP 6060B display replacement
//!
//! Listens to the electronic load's front panel display bus with SPI1 in
//! slave mode and redraws the readout on a 202x32 graphic LCD.
//!
//! The receive path runs entirely in interrupts: SPI1 feeds every byte to
//! the frame decoder, EXTI0_1 stops and restarts the receiver on PWO and
//! SYNC edges. The render task draws finished frame sets while the bus is
//! idle and the watchdog task resets the board if rendering stalls.

#![no_std]
#![no_main]

mod board;
mod channels;
mod config;
mod fonts;
mod tasks;

use defmt::*;
use eidolon_core::PanelRenderer;
use eidolon_glcd::{Glcd, Sbn166g};
use eidolon_hal::{BusPeripheral, Parallel68Bus, SnifferConfig};
use eidolon_hal_stm32f0::{FlexDataPort, SpiSniffer, Strobe};
use eidolon_protocol::DecodeOutcome;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Flex, Level, Output, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_stm32::wdg::IndependentWatchdog;
use embassy_time::Delay;
use portable_atomic::Ordering;
use {defmt_rtt as _, panic_probe as _};

use crate::board::{Panel, WATCHDOG_TIMEOUT_US};
use crate::channels::{DESYNCS, FRAMES, SNIFFER};
use crate::tasks::{boot_screens, render_task, watchdog_task};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Eidolon firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // Boot screens run under the watchdog too
    let wdg = IndependentWatchdog::new(p.IWDG, WATCHDOG_TIMEOUT_US);
    spawner.spawn(watchdog_task(wdg)).unwrap();

    let config = config::panel_config();
    let fonts = match fonts::panel_fonts() {
        Ok(fonts) => fonts,
        Err(e) => {
            error!("Font resource rejected: {:?}", e);
            panic!("bad font resource");
        }
    };
    let logo = match fonts::logo() {
        Ok(logo) => Some(logo),
        Err(e) => {
            warn!("Logo rejected: {:?}", e);
            None
        }
    };

    // LCD bus
    let data = FlexDataPort::new([
        Flex::new(p.PA2),
        Flex::new(p.PA3),
        Flex::new(p.PA4),
        Flex::new(p.PA6),
        Flex::new(p.PA8),
        Flex::new(p.PA9),
        Flex::new(p.PA10),
        Flex::new(p.PA15),
    ]);
    let a0 = Strobe::new(Output::new(p.PB0, Level::Low, Speed::High));
    let rw = Strobe::new(Output::new(p.PB1, Level::Low, Speed::High));
    let enable = [
        Strobe::new(Output::new(p.PB3, Level::Low, Speed::High)),
        Strobe::new(Output::new(p.PB4, Level::Low, Speed::High)),
        Strobe::new(Output::new(p.PB5, Level::Low, Speed::High)),
    ];
    let bus = Parallel68Bus::new(data, a0, rw, enable, Delay);

    let mut glcd: Panel = Glcd::new(Sbn166g::new(bus));
    match glcd.init() {
        Ok(()) => info!("LCD initialized"),
        Err(e) => error!("Failed to initialize LCD: {}", Debug2Format(&e)),
    }

    let renderer = PanelRenderer::new(fonts, config.layout);
    boot_screens(&mut glcd, &renderer, logo.as_ref(), &config.boot).await;

    // Start listening only once the panel is ours
    let sniffer = SpiSniffer::new(
        p.SPI1,
        p.PA5,
        p.PA7,
        p.PA0,
        p.PA1,
        SnifferConfig::default(),
    );
    SNIFFER.lock(|cell| *cell.borrow_mut() = Some(sniffer));

    interrupt::SPI1.set_priority(Priority::P0);
    interrupt::EXTI0_1.set_priority(Priority::P1);
    // SAFETY: both handlers only touch state behind critical-section mutexes
    unsafe {
        interrupt::SPI1.enable();
        interrupt::EXTI0_1.enable();
    }
    info!("Sniffer listening");

    spawner.spawn(render_task(glcd, renderer)).unwrap();

    info!("All tasks spawned");
}

/// Received byte(s) from the instrument
#[interrupt]
fn SPI1() {
    SNIFFER.lock(|cell| {
        let mut cell = cell.borrow_mut();
        let Some(sniffer) = cell.as_mut() else {
            return;
        };
        while let Some(byte) = sniffer.take_byte() {
            if let DecodeOutcome::Desync = FRAMES.on_transfer(sniffer, byte) {
                DESYNCS.fetch_add(1, Ordering::Relaxed);
                // Receiver is off until the next SYNC edge, drop what is queued
                while sniffer.take_byte().is_some() {}
                break;
            }
        }
    });
}

/// PWO or SYNC edge
#[interrupt]
fn EXTI0_1() {
    SNIFFER.lock(|cell| {
        if let Some(sniffer) = cell.borrow_mut().as_mut() {
            while let Some(edge) = sniffer.take_edge() {
                sniffer.on_line_edge(edge);
            }
        }
    });
}
