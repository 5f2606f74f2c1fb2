// Author: Dustin Pilgrim
// License: MIT

use std::env;
use std::path::{Path, PathBuf};

use rune_cfg::RuneConfig;

use boxdraw_core::{BACKGROUND_ARGB, BOX_FILL_ARGB, Paints};

use crate::paths::{default_config_path, default_output_dir};

#[derive(Debug, Clone)]
pub struct BoxdrawConfig {
    pub output_directory: PathBuf,
    pub background_colour: u32, // ARGB
    pub box_colour: u32,        // ARGB
}

impl Default for BoxdrawConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_dir(),
            background_colour: BACKGROUND_ARGB,
            box_colour: BOX_FILL_ARGB,
        }
    }
}

impl BoxdrawConfig {
    pub fn paints(&self) -> Paints {
        Paints {
            background: self.background_colour,
            box_fill: self.box_colour,
        }
    }
}

/// Loads `explicit` if given (it must exist), otherwise the default config
/// path, falling back to defaults when that file is absent.
pub fn load(explicit: Option<&Path>) -> Result<BoxdrawConfig, String> {
    let path = match explicit {
        Some(p) if !p.exists() => {
            return Err(format!("config file not found: {}", p.display()));
        }
        Some(p) => p.to_path_buf(),
        None => default_config_path(),
    };

    if !path.exists() {
        return Ok(BoxdrawConfig::default());
    }

    let rc = RuneConfig::from_file(&path).map_err(|e| format!("failed to read config: {e}"))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<BoxdrawConfig, String> {
    let mut cfg = BoxdrawConfig::default();

    if !rc.has("boxdraw") {
        return Ok(cfg);
    }

    if let Some(dir) = rc
        .get_optional::<String>("boxdraw.output_directory")
        .map_err(|e| format!("config error at boxdraw.output_directory: {e}"))?
    {
        cfg.output_directory = expand_env(&dir);
    }

    if let Some(colour_str) = rc
        .get_optional::<String>("boxdraw.background_colour")
        .map_err(|e| format!("config error at boxdraw.background_colour: {e}"))?
    {
        cfg.background_colour = parse_hex_colour(&colour_str)
            .map_err(|e| format!("config error at boxdraw.background_colour: {e}"))?;
    }

    if let Some(colour_str) = rc
        .get_optional::<String>("boxdraw.box_colour")
        .map_err(|e| format!("config error at boxdraw.box_colour: {e}"))?
    {
        cfg.box_colour = parse_hex_colour(&colour_str)
            .map_err(|e| format!("config error at boxdraw.box_colour: {e}"))?;
    }

    Ok(cfg)
}

/// `#RRGGBB` (opaque) or `#AARRGGBB`.
fn parse_hex_colour(s: &str) -> Result<u32, String> {
    let hex = s
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| "colour must start with #".to_string())?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("invalid hex colour".into());
    }

    let value = u32::from_str_radix(hex, 16).map_err(|_| "invalid hex colour".to_string())?;

    match hex.len() {
        6 => Ok(0xFF00_0000 | value),
        8 => Ok(value),
        _ => Err("colour must be #RRGGBB or #AARRGGBB".into()),
    }
}

fn expand_env(s: &str) -> PathBuf {
    let mut out = s.to_string();

    if out.contains("$env.HOME") {
        if let Ok(home) = env::var("HOME") {
            out = out.replace("$env.HOME", &home);
        }
    }

    PathBuf::from(out)
}
