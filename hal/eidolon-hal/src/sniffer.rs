//! Bus sniffer abstractions
//!
//! The instrument's front panel board talks to its display over a
//! synchronous serial link. We listen to it with an SPI peripheral in slave
//! mode and two extra control lines:
//!
//! - SYNC: high while a command byte is clocked, low for data bytes
//! - PWO: high while the display bus is active, low when idle

/// Passive bus listener
///
/// The receive interrupt hands each completed byte to the frame decoder,
/// which asks for the phase and may switch the receiver off on desync.
pub trait BusPeripheral {
    /// Take the last received byte, if the receiver has one
    fn take_byte(&mut self) -> Option<u8>;

    /// SYNC line state: true while the current byte is a command
    fn is_command_phase(&self) -> bool;

    /// PWO line state: true when the instrument is not talking to its display
    fn is_bus_idle(&self) -> bool;

    /// Resume receiving (called on a SYNC edge while the bus is active)
    fn enable(&mut self);

    /// Stop receiving until the next [`enable`](Self::enable)
    fn disable(&mut self);

    /// React to an edge on one of the control lines
    ///
    /// The receiver stops as soon as the instrument releases the bus and
    /// restarts on the next SYNC change while the bus is held, so a byte
    /// that slipped out of step is dropped at the next frame boundary.
    fn on_line_edge(&mut self, edge: LineEdge) {
        match edge {
            LineEdge::BusReleased => self.disable(),
            LineEdge::SyncToggled => {
                if !self.is_bus_idle() {
                    self.enable();
                }
            }
        }
    }
}

/// Control line event seen by the sniffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEdge {
    /// PWO fell: the instrument finished talking to its display
    BusReleased,
    /// SYNC changed level (command/data boundary)
    SyncToggled,
}

/// Sniffer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SnifferConfig {
    /// Clock mode of the instrument bus
    pub mode: Mode,
    /// Bit order of the instrument bus
    pub bit_order: BitOrder,
}

impl Default for SnifferConfig {
    /// The instrument sends 10-bit LSB-first words whose first two bits are
    /// always zero, so an 8-bit LSB-first mode 0 receiver sees the command
    /// field in its upper bits.
    fn default() -> Self {
        Self {
            mode: Mode::Mode0,
            bit_order: BitOrder::LsbFirst,
        }
    }
}

/// Bit transmission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 0 first
    LsbFirst,
    /// Bit 7 first
    MsbFirst,
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeBus {
        idle: bool,
        enabled: bool,
    }

    impl BusPeripheral for FakeBus {
        fn take_byte(&mut self) -> Option<u8> {
            None
        }

        fn is_command_phase(&self) -> bool {
            false
        }

        fn is_bus_idle(&self) -> bool {
            self.idle
        }

        fn enable(&mut self) {
            self.enabled = true;
        }

        fn disable(&mut self) {
            self.enabled = false;
        }
    }

    #[test]
    fn test_bus_release_stops_receiver() {
        let mut bus = FakeBus {
            idle: false,
            enabled: true,
        };
        bus.on_line_edge(LineEdge::BusReleased);
        assert!(!bus.enabled);
    }

    #[test]
    fn test_sync_restarts_only_while_bus_held() {
        let mut bus = FakeBus {
            idle: true,
            enabled: false,
        };
        bus.on_line_edge(LineEdge::SyncToggled);
        assert!(!bus.enabled);

        bus.idle = false;
        bus.on_line_edge(LineEdge::SyncToggled);
        assert!(bus.enabled);
    }

    #[test]
    fn test_default_matches_instrument_bus() {
        let config = SnifferConfig::default();
        assert_eq!(config.bit_order, BitOrder::LsbFirst);

        let (polarity, phase): (Polarity, Phase) = config.mode.into();
        assert_eq!(polarity, Polarity::IdleLow);
        assert_eq!(phase, Phase::CaptureOnFirstTransition);
    }
}
