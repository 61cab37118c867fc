//! Supervision of the render loop

mod monitor;

pub use monitor::{RenderMonitor, RenderStatus, STALL_TIMEOUT_MS};
