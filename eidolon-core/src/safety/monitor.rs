//! Render loop monitor
//!
//! The watchdog is only fed while the render loop keeps checking in. The
//! loop checks in every pass, whether or not the instrument sent an update,
//! so a quiet instrument does not reset the board.

/// Render loop silence that stops watchdog feeding
pub const STALL_TIMEOUT_MS: u32 = 1500;

/// Render loop health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderStatus {
    /// Loop has checked in recently
    Running,
    /// No check-in yet since boot
    Starting,
    /// Loop has gone quiet
    Stalled,
}

/// Tracks render loop check-ins
#[derive(Debug, Clone)]
pub struct RenderMonitor {
    /// Time of the last check-in (ms)
    last_progress_ms: Option<u32>,
    /// Frames rendered since boot
    frames_rendered: u32,
    /// Desync events reported by the receiver
    desyncs: u32,
    stall_timeout_ms: u32,
}

impl Default for RenderMonitor {
    fn default() -> Self {
        Self::new(STALL_TIMEOUT_MS)
    }
}

impl RenderMonitor {
    /// Create a monitor with the given stall timeout
    pub fn new(stall_timeout_ms: u32) -> Self {
        Self {
            last_progress_ms: None,
            frames_rendered: 0,
            desyncs: 0,
            stall_timeout_ms,
        }
    }

    /// Render loop completed a pass
    pub fn record_progress(&mut self, now_ms: u32) {
        self.last_progress_ms = Some(now_ms);
    }

    /// A frame set was drawn
    pub fn record_frame(&mut self, now_ms: u32) {
        self.frames_rendered = self.frames_rendered.wrapping_add(1);
        self.record_progress(now_ms);
    }

    /// The receiver lost step with the bus `count` times
    pub fn record_desyncs(&mut self, count: u32) {
        self.desyncs = self.desyncs.wrapping_add(count);
    }

    /// Frames rendered since boot
    pub fn frames_rendered(&self) -> u32 {
        self.frames_rendered
    }

    /// Desyncs since boot
    pub fn desyncs(&self) -> u32 {
        self.desyncs
    }

    /// Current status
    pub fn status(&self, now_ms: u32) -> RenderStatus {
        match self.last_progress_ms {
            None => RenderStatus::Starting,
            Some(last) if now_ms.wrapping_sub(last) > self.stall_timeout_ms => {
                RenderStatus::Stalled
            }
            Some(_) => RenderStatus::Running,
        }
    }

    /// True when the watchdog should be fed
    ///
    /// Boot screens run before the first check-in, so `Starting` feeds too.
    pub fn should_feed(&self, now_ms: u32) -> bool {
        self.status(now_ms) != RenderStatus::Stalled
    }
}
