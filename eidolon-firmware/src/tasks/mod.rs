//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod render;
pub mod watchdog;

pub use render::{boot_screens, render_task};
pub use watchdog::watchdog_task;
