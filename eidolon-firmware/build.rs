//! Build script for eidolon-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml and bakes it into `panel_layout.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[path = "build/report.rs"]
mod report;

use report::format_error_lines;

/// Rightmost panel column
const LCD_RIGHT: u8 = 201;
/// Bottom panel row
const LCD_BOTTOM: u8 = 31;
/// Longest boot screen we accept (ms)
const MAX_BOOT_SCREEN_MS: u32 = 10_000;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PanelFile {
    layout: LayoutSection,
    #[serde(default)]
    boot: BootSection,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutSection {
    #[serde(default = "default_mode")]
    mode: String,
    digits: RowSection,
    punctuation: RowSection,
    annunciators: RowSection,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RowSection {
    x: u8,
    y: u8,
    #[serde(default)]
    spacing: i8,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BootSection {
    #[serde(default = "default_lamp_test_ms")]
    lamp_test_ms: u32,
    #[serde(default = "default_splash_ms")]
    splash_ms: u32,
}

impl Default for BootSection {
    fn default() -> Self {
        Self {
            lamp_test_ms: default_lamp_test_ms(),
            splash_ms: default_splash_ms(),
        }
    }
}

fn default_mode() -> String {
    "set".to_string()
}

fn default_lamp_test_ms() -> u32 {
    500
}

fn default_splash_ms() -> u32 {
    1000
}

fn main() {
    setup_linker();
    let panel = load_panel_config();
    generate_layout(&panel);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/report.rs");
}

/// Read and validate panel.toml
fn load_panel_config() -> PanelFile {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panel.toml layout file.                 ║\n\
            ║  Please create one in the eidolon-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let panel: PanelFile = match toml::from_str(&content) {
        Ok(panel) => panel,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid panel.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    validate_panel(&panel);

    println!("cargo:warning=panel.toml validated successfully");
    panel
}

/// Check values serde cannot check on its own
fn validate_panel(panel: &PanelFile) {
    let mut errors = Vec::new();

    let rows = [
        ("digits", &panel.layout.digits),
        ("punctuation", &panel.layout.punctuation),
        ("annunciators", &panel.layout.annunciators),
    ];
    for (name, row) in rows {
        if row.x > LCD_RIGHT {
            errors.push(format!("[layout.{}] x must be 0-{}", name, LCD_RIGHT));
        }
        if row.y > LCD_BOTTOM {
            errors.push(format!("[layout.{}] y must be 0-{}", name, LCD_BOTTOM));
        }
    }

    if draw_mode_variant(&panel.layout.mode).is_none() {
        errors.push("[layout] mode must be 'set', 'clear' or 'invert'".to_string());
    }

    if panel.boot.lamp_test_ms > MAX_BOOT_SCREEN_MS {
        errors.push(format!("[boot] lamp_test_ms must be 0-{}", MAX_BOOT_SCREEN_MS));
    }
    if panel.boot.splash_ms > MAX_BOOT_SCREEN_MS {
        errors.push(format!("[boot] splash_ms must be 0-{}", MAX_BOOT_SCREEN_MS));
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid panel configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

fn draw_mode_variant(mode: &str) -> Option<&'static str> {
    match mode {
        "set" => Some("Set"),
        "clear" => Some("Clear"),
        "invert" => Some("Invert"),
        _ => None,
    }
}

/// Write the validated configuration as a Rust constant
fn generate_layout(panel: &PanelFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let row = |row: &RowSection| format!("RowLayout::new({}, {}, {})", row.x, row.y, row.spacing);
    let mode = draw_mode_variant(&panel.layout.mode).unwrap_or("Set");

    let source = format!(
        "/// Panel configuration from panel.toml\n\
         pub const PANEL_CONFIG: PanelConfig = PanelConfig {{\n    \
             layout: PanelLayout {{\n        \
                 digits: {},\n        \
                 punctuation: {},\n        \
                 annunciators: {},\n        \
                 mode: DrawMode::{},\n    \
             }},\n    \
             boot: BootTiming {{\n        \
                 lamp_test_ms: {},\n        \
                 splash_ms: {},\n    \
             }},\n\
         }};\n",
        row(&panel.layout.digits),
        row(&panel.layout.punctuation),
        row(&panel.layout.annunciators),
        mode,
        panel.boot.lamp_test_ms,
        panel.boot.splash_ms,
    );

    let mut f = File::create(out_dir.join("panel_layout.rs")).unwrap();
    f.write_all(source.as_bytes()).unwrap();
}
