//! Board wiring
//!
//! | Signal        | Pin  |
//! |---------------|------|
//! | PWO           | PA0  |
//! | SYNC          | PA1  |
//! | SPI1 SCK      | PA5  |
//! | SPI1 MOSI     | PA7  |
//! | LCD D0..D3    | PA2, PA3, PA4, PA6 |
//! | LCD D4..D7    | PA8, PA9, PA10, PA15 |
//! | LCD A0        | PB0  |
//! | LCD R/W       | PB1  |
//! | LCD E1..E3    | PB3, PB4, PB5 |

use eidolon_glcd::{Glcd, Sbn166g};
use eidolon_hal::Parallel68Bus;
use eidolon_hal_stm32f0::{FlexDataPort, Strobe};
use embassy_time::Delay;

/// Bit-banged bus to the three column controllers
pub type LcdBus = Parallel68Bus<FlexDataPort<'static>, Strobe<'static>, Delay>;

/// The 202x32 panel
pub type Panel = Glcd<'static, Sbn166g<LcdBus>>;

/// Independent watchdog timeout
pub const WATCHDOG_TIMEOUT_US: u32 = 2_000_000;
