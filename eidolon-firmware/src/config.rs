//! Panel configuration
//!
//! `panel.toml` is checked and turned into a constant by the build script.

use defmt::*;
use eidolon_core::config::{BootTiming, PanelConfig, PanelLayout, RowLayout};
use eidolon_glcd::DrawMode;

include!(concat!(env!("OUT_DIR"), "/panel_layout.rs"));

/// The baked-in configuration, or the stock layout if it does not fit
pub fn panel_config() -> PanelConfig {
    match PANEL_CONFIG.layout.validate() {
        Ok(()) => PANEL_CONFIG,
        Err(e) => {
            warn!("Panel layout rejected ({:?}), using defaults", e);
            PanelConfig {
                layout: PanelLayout::DEFAULT,
                boot: PANEL_CONFIG.boot,
            }
        }
    }
}
