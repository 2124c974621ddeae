use crate::model::Rgba;

/// The paint surface: a flat RGBA8 pixel grid in row-major order. Fresh and
/// resized surfaces are opaque white, matching the page banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; (width * height * 4) as usize];
        fill_white(&mut pixels);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Fills the whole surface opaque white, preserving dimensions.
    pub fn clear(&mut self) {
        fill_white(&mut self.pixels);
    }

    /// Replaces the buffer with a white one of the new dimensions. Existing
    /// drawing is not preserved.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0u8; (width * height * 4) as usize];
        fill_white(&mut self.pixels);
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let idx = ((y * self.width + x) * 4) as usize;
        Rgba {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
            a: self.pixels[idx + 3],
        }
    }

    /// Writes one pixel; out-of-bounds coordinates are silently skipped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }
}

fn fill_white(pixels: &mut [u8]) {
    for chunk in pixels.chunks_exact_mut(4) {
        chunk.copy_from_slice(&Rgba::WHITE.to_array());
    }
}
