//! Panel configuration
//!
//! Where the readout rows go on the LCD and how long the boot screens stay
//! up. The firmware bakes a validated layout in at build time, host tools
//! can load the same structures through the `serde` feature.

mod types;

pub use types::*;
