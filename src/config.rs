/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.
/// The word bank itself is compiled in; only presentation knobs live
/// here.

use serde::Deserialize;
use std::path::PathBuf;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub ui: UiConfig,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Animation tick interval (cursor blink, message bar countdown).
    pub tick_rate_ms: u64,
    /// Letters per row of the on-screen keyboard.
    pub keyboard_columns: usize,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    ui: TomlUi,
}

#[derive(Deserialize, Debug)]
struct TomlUi {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default = "default_keyboard_columns")]
    keyboard_columns: usize,
}

// ── Defaults ──

fn default_tick_rate() -> u64 { 120 }
fn default_keyboard_columns() -> usize { 7 }

impl Default for TomlUi {
    fn default() -> Self {
        TomlUi {
            tick_rate_ms: default_tick_rate(),
            keyboard_columns: default_keyboard_columns(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let toml_cfg = load_toml(&candidate_dirs());

        GameConfig {
            ui: UiConfig {
                tick_rate_ms: toml_cfg.ui.tick_rate_ms.max(1),
                keyboard_columns: toml_cfg.ui.keyboard_columns.clamp(1, 26),
            },
        }
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.tick_rate_ms, default_tick_rate());
        assert_eq!(cfg.ui.keyboard_columns, default_keyboard_columns());
    }

    #[test]
    fn partial_ui_section_keeps_other_defaults() {
        let cfg: TomlConfig = toml::from_str("[ui]\ntick_rate_ms = 60\n").unwrap();
        assert_eq!(cfg.ui.tick_rate_ms, 60);
        assert_eq!(cfg.ui.keyboard_columns, default_keyboard_columns());
    }
}
