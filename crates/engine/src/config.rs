//! Host configuration read from the environment.
//!
//! Only host concerns are configurable. The game rules (board size, shapes,
//! gravity period) are fixed.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_REDRAW_MS` | 30 | Redraw timer period |
//! | `TETRIS_SEED` | random | Piece generator seed |
//! | `TETRIS_SURFACE_WIDTH` | 40 | Drawing surface width in pixels |
//! | `TETRIS_SURFACE_HEIGHT` | 80 | Drawing surface height in pixels |
//! | `TETRIS_LOG_PATH` | unset | Log file; logging is off when unset |
//! | `TETRIS_LOG_LEVEL` | info | `trace`, `debug`, `info`, `warn` or `error` |

use std::env;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, REDRAW_MS};

/// Default terminal surface: 4x4 pixel cells.
pub const DEFAULT_SURFACE_WIDTH: u32 = 40;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 80;

/// Smallest surface that still shows blocks: 2x2 pixel cells, so each block
/// keeps a 1x1 body after the one-pixel gap.
pub const MIN_SURFACE_WIDTH: u32 = 2 * BOARD_WIDTH as u32;
pub const MIN_SURFACE_HEIGHT: u32 = 2 * BOARD_HEIGHT as u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub redraw_ms: u64,
    pub seed: Option<u64>,
    pub surface_width: u32,
    pub surface_height: u32,
    pub log_path: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redraw_ms: REDRAW_MS,
            seed: None,
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Missing or unparsable values fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let redraw_ms = lookup("TETRIS_REDRAW_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.redraw_ms)
            .max(1);

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse::<u64>().ok());

        let surface_width = lookup("TETRIS_SURFACE_WIDTH")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(defaults.surface_width)
            .max(MIN_SURFACE_WIDTH);

        let surface_height = lookup("TETRIS_SURFACE_HEIGHT")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(defaults.surface_height)
            .max(MIN_SURFACE_HEIGHT);

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("TETRIS_LOG_LEVEL")
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_level);

        Self {
            redraw_ms,
            seed,
            surface_width,
            surface_height,
            log_path,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn values_are_parsed() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("TETRIS_REDRAW_MS", "16"),
            ("TETRIS_SEED", " 99 "),
            ("TETRIS_SURFACE_WIDTH", "100"),
            ("TETRIS_SURFACE_HEIGHT", "200"),
            ("TETRIS_LOG_PATH", "/tmp/tetris.log"),
            ("TETRIS_LOG_LEVEL", "DEBUG"),
        ]));

        assert_eq!(cfg.redraw_ms, 16);
        assert_eq!(cfg.seed, Some(99));
        assert_eq!((cfg.surface_width, cfg.surface_height), (100, 200));
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/tetris.log"));
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn bad_values_fall_back_and_clamp() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("TETRIS_REDRAW_MS", "0"),
            ("TETRIS_SEED", "abc"),
            ("TETRIS_SURFACE_WIDTH", "3"),
            ("TETRIS_SURFACE_HEIGHT", "nope"),
            ("TETRIS_LOG_PATH", "   "),
        ]));

        assert_eq!(cfg.redraw_ms, 1);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.surface_width, MIN_SURFACE_WIDTH);
        assert_eq!(cfg.surface_height, DEFAULT_SURFACE_HEIGHT);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn tiny_surface_clamps_to_two_pixel_cells() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("TETRIS_SURFACE_WIDTH", "3"),
            ("TETRIS_SURFACE_HEIGHT", "3"),
        ]));
        assert_eq!((cfg.surface_width, cfg.surface_height), (20, 40));
    }
}
