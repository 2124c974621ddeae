use crate::surface::Surface;
use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use std::path::{Path, PathBuf};
use tracing::info;

/// Fixed download name for the exported drawing.
pub const EXPORT_FILE_NAME: &str = "bunny-soup-art.png";

/// Encoded PNG plus the download name the host should attach to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngExport {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}

pub fn export_png(surface: &Surface) -> Result<PngExport> {
    let bytes = encode_png(surface)?;
    info!(
        width = surface.width,
        height = surface.height,
        bytes = bytes.len(),
        "exported surface as {EXPORT_FILE_NAME}"
    );
    Ok(PngExport {
        file_name: EXPORT_FILE_NAME,
        bytes,
    })
}

pub fn encode_png(surface: &Surface) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            &surface.pixels,
            surface.width,
            surface.height,
            ColorType::Rgba8,
        )
        .context("encode surface as png")?;
    Ok(bytes)
}

/// Writes the export into `dir` under the fixed name, for hosts that save
/// straight to disk instead of triggering a browser download.
pub fn save_png_to_dir(surface: &Surface, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    let export = export_png(surface)?;
    std::fs::write(&path, &export.bytes)
        .with_context(|| format!("write exported image {}", path.display()))?;
    Ok(path)
}
