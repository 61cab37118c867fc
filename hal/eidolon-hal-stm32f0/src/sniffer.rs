//! SPI1 slave sniffer for STM32F0
//!
//! embassy-stm32 only drives SPI as a master, so the receiver is set up
//! directly through the register block: receive-only slave, 8-bit frames,
//! software NSS held active, RXNE interrupt. SCK is PA5 and the instrument's
//! data line goes to MOSI on PA7.
//!
//! PWO (PA0) and SYNC (PA1) are plain inputs with pull-ups whose EXTI lines
//! are armed here too: PWO on the falling edge, SYNC on both edges. Both
//! share the EXTI0_1 vector, which should drain [`SpiSniffer::take_edge`].

use eidolon_hal::sniffer::{BitOrder, BusPeripheral, LineEdge, Phase, Polarity, SnifferConfig};
use embassy_stm32::gpio::{Input, Pull};
use embassy_stm32::pac;
use embassy_stm32::pac::gpio::vals::Moder;
use embassy_stm32::pac::spi::vals;
use embassy_stm32::peripherals::{PA0, PA1, PA5, PA7, SPI1};
use embassy_stm32::Peri;

/// Alternate function number of SPI1 on PA5/PA7
const SPI1_AF: u8 = 0;
/// EXTI line of PWO (PA0)
const PWO_LINE: usize = 0;
/// EXTI line of SYNC (PA1)
const SYNC_LINE: usize = 1;
/// SYSCFG port code for GPIOA
const PORT_A: u8 = 0;

/// Instrument display bus listener
pub struct SpiSniffer<'d> {
    sync: Input<'d>,
    pwo: Input<'d>,
    _spi: Peri<'d, SPI1>,
    _sck: Peri<'d, PA5>,
    _mosi: Peri<'d, PA7>,
}

impl<'d> SpiSniffer<'d> {
    /// Configure SPI1 as a receive-only slave and leave it enabled
    ///
    /// SYNC is high during command bytes, PWO is high while the bus is
    /// active. The EXTI lines are unmasked but the NVIC vector is left to
    /// the caller.
    pub fn new(
        spi: Peri<'d, SPI1>,
        sck: Peri<'d, PA5>,
        mosi: Peri<'d, PA7>,
        pwo: Peri<'d, PA0>,
        sync: Peri<'d, PA1>,
        config: SnifferConfig,
    ) -> Self {
        let pwo = Input::new(pwo, Pull::Up);
        let sync = Input::new(sync, Pull::Up);

        pac::RCC.apb2enr().modify(|w| w.set_spi1en(true));

        pac::GPIOA.moder().modify(|w| {
            w.set_moder(5, Moder::ALTERNATE);
            w.set_moder(7, Moder::ALTERNATE);
        });
        pac::GPIOA.afr(0).modify(|w| {
            w.set_afr(5, SPI1_AF);
            w.set_afr(7, SPI1_AF);
        });

        let (polarity, phase): (Polarity, Phase) = config.mode.into();
        let regs = pac::SPI1;
        regs.cr1().write(|w| {
            w.set_mstr(vals::Mstr::SLAVE);
            w.set_cpol(match polarity {
                Polarity::IdleLow => vals::Cpol::IDLE_LOW,
                Polarity::IdleHigh => vals::Cpol::IDLE_HIGH,
            });
            w.set_cpha(match phase {
                Phase::CaptureOnFirstTransition => vals::Cpha::FIRST_EDGE,
                Phase::CaptureOnSecondTransition => vals::Cpha::SECOND_EDGE,
            });
            w.set_lsbfirst(match config.bit_order {
                BitOrder::LsbFirst => vals::Lsbfirst::LSBFIRST,
                BitOrder::MsbFirst => vals::Lsbfirst::MSBFIRST,
            });
            w.set_rxonly(vals::Rxonly::OUTPUT_DISABLED);
            w.set_ssm(true);
            w.set_ssi(false);
        });
        regs.cr2().write(|w| {
            w.set_ds(vals::Ds::BITS8);
            w.set_frxth(vals::Frxth::QUARTER);
            w.set_rxneie(true);
        });
        regs.cr1().modify(|w| w.set_spe(true));

        arm_line_interrupts();

        Self {
            sync,
            pwo,
            _spi: spi,
            _sck: sck,
            _mosi: mosi,
        }
    }

    /// Take one pending control line edge and acknowledge it
    ///
    /// A bus release is reported before a SYNC change caught in the same
    /// interrupt.
    pub fn take_edge(&mut self) -> Option<LineEdge> {
        let pending = pac::EXTI.pr(0).read();
        let (line, edge) = if pending.line(PWO_LINE) {
            (PWO_LINE, LineEdge::BusReleased)
        } else if pending.line(SYNC_LINE) {
            (SYNC_LINE, LineEdge::SyncToggled)
        } else {
            return None;
        };
        // Write-one-to-clear
        pac::EXTI.pr(0).write(|w| w.set_line(line, true));
        Some(edge)
    }
}

fn arm_line_interrupts() {
    pac::SYSCFG.exticr(0).modify(|w| {
        w.set_exti(PWO_LINE, PORT_A);
        w.set_exti(SYNC_LINE, PORT_A);
    });
    pac::EXTI.ftsr(0).modify(|w| {
        w.set_line(PWO_LINE, true);
        w.set_line(SYNC_LINE, true);
    });
    pac::EXTI.rtsr(0).modify(|w| {
        w.set_line(PWO_LINE, false);
        w.set_line(SYNC_LINE, true);
    });
    pac::EXTI.pr(0).write(|w| {
        w.set_line(PWO_LINE, true);
        w.set_line(SYNC_LINE, true);
    });
    pac::EXTI.imr(0).modify(|w| {
        w.set_line(PWO_LINE, true);
        w.set_line(SYNC_LINE, true);
    });
}

impl BusPeripheral for SpiSniffer<'_> {
    fn take_byte(&mut self) -> Option<u8> {
        let regs = pac::SPI1;
        if !regs.sr().read().rxne() {
            return None;
        }
        // 8-bit access pops exactly one byte from the RX FIFO
        let byte = unsafe { core::ptr::read_volatile(regs.dr().as_ptr() as *const u8) };
        Some(byte)
    }

    fn is_command_phase(&self) -> bool {
        self.sync.is_high()
    }

    fn is_bus_idle(&self) -> bool {
        self.pwo.is_low()
    }

    fn enable(&mut self) {
        pac::SPI1.cr1().modify(|w| w.set_spe(true));
    }

    fn disable(&mut self) {
        pac::SPI1.cr1().modify(|w| w.set_spe(false));
    }
}
