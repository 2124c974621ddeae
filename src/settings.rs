use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SETTINGS_FILE_NAME: &str = "bunny_paint.json";

/// Host-tunable widget defaults. Field defaults reproduce the shipped
/// banner constants, so an absent or empty settings file changes nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaintSettings {
    #[serde(default = "default_tool")]
    pub default_tool: String,
    #[serde(default = "default_color")]
    pub default_color: String,
    #[serde(default = "default_brush_size")]
    pub brush_size: u32,
    #[serde(default = "default_spray_radius")]
    pub spray_radius: f64,
    #[serde(default = "default_spray_density")]
    pub spray_density: u32,
    #[serde(default = "default_resize_quiet_ms")]
    pub resize_quiet_ms: u64,
}

fn default_tool() -> String {
    "pencil".to_string()
}

fn default_color() -> String {
    "#ff00ff".to_string()
}

fn default_brush_size() -> u32 {
    3
}

fn default_spray_radius() -> f64 {
    20.0
}

fn default_spray_density() -> u32 {
    50
}

fn default_resize_quiet_ms() -> u64 {
    250
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            brush_size: default_brush_size(),
            spray_radius: default_spray_radius(),
            spray_density: default_spray_density(),
            resize_quiet_ms: default_resize_quiet_ms(),
        }
    }
}

impl PaintSettings {
    /// Clamps out-of-range numeric fields instead of failing the load.
    pub fn sanitize(&mut self) {
        if self.brush_size < 1 {
            self.brush_size = 1;
        }
        if !self.spray_radius.is_finite() || self.spray_radius <= 0.0 {
            self.spray_radius = default_spray_radius();
        }
        if self.spray_density < 1 {
            self.spray_density = default_spray_density();
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<PaintSettings> {
    if !path.exists() {
        return Ok(PaintSettings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read paint settings file {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(PaintSettings::default());
    }

    let mut loaded: PaintSettings = serde_json::from_str(&content)
        .with_context(|| format!("deserialize paint settings file {}", path.display()))?;
    loaded.sanitize();
    Ok(loaded)
}

pub fn save_to_path(path: &Path, settings: &PaintSettings) -> Result<()> {
    let serialized =
        serde_json::to_string_pretty(settings).context("serialize paint settings")?;
    std::fs::write(path, serialized)
        .with_context(|| format!("write paint settings file {}", path.display()))?;
    Ok(())
}
