use crate::model::Rgba;
use crate::surface::Surface;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// 5x7 glyphs in an 8-row cell, one byte per row, MSB-left. Scaled 2x at
// stamp time for the widget's fixed 16px text size.
const GLYPH_ROWS: u32 = 8;
const GLYPH_COLS: u32 = 5;
pub const TEXT_SCALE: u32 = 2;

static GLYPHS: Lazy<HashMap<char, [u8; 8]>> = Lazy::new(|| {
    HashMap::from([
        (' ', [0u8; 8]),
        (
            'A',
            [
                0b01110_000,
                0b10001_000,
                0b10001_000,
                0b11111_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0,
            ],
        ),
        (
            'B',
            [
                0b11110_000,
                0b10001_000,
                0b10001_000,
                0b11110_000,
                0b10001_000,
                0b10001_000,
                0b11110_000,
                0,
            ],
        ),
        (
            'C',
            [
                0b01110_000,
                0b10001_000,
                0b10000_000,
                0b10000_000,
                0b10000_000,
                0b10001_000,
                0b01110_000,
                0,
            ],
        ),
        (
            'D',
            [
                0b11110_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b11110_000,
                0,
            ],
        ),
        (
            'E',
            [
                0b11111_000,
                0b10000_000,
                0b10000_000,
                0b11110_000,
                0b10000_000,
                0b10000_000,
                0b11111_000,
                0,
            ],
        ),
        (
            'F',
            [
                0b11111_000,
                0b10000_000,
                0b10000_000,
                0b11110_000,
                0b10000_000,
                0b10000_000,
                0b10000_000,
                0,
            ],
        ),
        (
            'G',
            [
                0b01110_000,
                0b10001_000,
                0b10000_000,
                0b10111_000,
                0b10001_000,
                0b10001_000,
                0b01111_000,
                0,
            ],
        ),
        (
            'H',
            [
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b11111_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0,
            ],
        ),
        (
            'I',
            [
                0b01110_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b01110_000,
                0,
            ],
        ),
        (
            'J',
            [
                0b00111_000,
                0b00010_000,
                0b00010_000,
                0b00010_000,
                0b00010_000,
                0b10010_000,
                0b01100_000,
                0,
            ],
        ),
        (
            'K',
            [
                0b10001_000,
                0b10010_000,
                0b10100_000,
                0b11000_000,
                0b10100_000,
                0b10010_000,
                0b10001_000,
                0,
            ],
        ),
        (
            'L',
            [
                0b10000_000,
                0b10000_000,
                0b10000_000,
                0b10000_000,
                0b10000_000,
                0b10000_000,
                0b11111_000,
                0,
            ],
        ),
        (
            'M',
            [
                0b10001_000,
                0b11011_000,
                0b10101_000,
                0b10101_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0,
            ],
        ),
        (
            'N',
            [
                0b10001_000,
                0b11001_000,
                0b10101_000,
                0b10011_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0,
            ],
        ),
        (
            'O',
            [
                0b01110_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b01110_000,
                0,
            ],
        ),
        (
            'P',
            [
                0b11110_000,
                0b10001_000,
                0b10001_000,
                0b11110_000,
                0b10000_000,
                0b10000_000,
                0b10000_000,
                0,
            ],
        ),
        (
            'Q',
            [
                0b01110_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10101_000,
                0b10010_000,
                0b01101_000,
                0,
            ],
        ),
        (
            'R',
            [
                0b11110_000,
                0b10001_000,
                0b10001_000,
                0b11110_000,
                0b10100_000,
                0b10010_000,
                0b10001_000,
                0,
            ],
        ),
        (
            'S',
            [
                0b01111_000,
                0b10000_000,
                0b10000_000,
                0b01110_000,
                0b00001_000,
                0b00001_000,
                0b11110_000,
                0,
            ],
        ),
        (
            'T',
            [
                0b11111_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0,
            ],
        ),
        (
            'U',
            [
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b01110_000,
                0,
            ],
        ),
        (
            'V',
            [
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b01010_000,
                0b00100_000,
                0,
            ],
        ),
        (
            'W',
            [
                0b10001_000,
                0b10001_000,
                0b10001_000,
                0b10101_000,
                0b10101_000,
                0b10101_000,
                0b01010_000,
                0,
            ],
        ),
        (
            'X',
            [
                0b10001_000,
                0b10001_000,
                0b01010_000,
                0b00100_000,
                0b01010_000,
                0b10001_000,
                0b10001_000,
                0,
            ],
        ),
        (
            'Y',
            [
                0b10001_000,
                0b10001_000,
                0b01010_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0,
            ],
        ),
        (
            'Z',
            [
                0b11111_000,
                0b00001_000,
                0b00010_000,
                0b00100_000,
                0b01000_000,
                0b10000_000,
                0b11111_000,
                0,
            ],
        ),
        (
            '0',
            [
                0b01110_000,
                0b10001_000,
                0b10011_000,
                0b10101_000,
                0b11001_000,
                0b10001_000,
                0b01110_000,
                0,
            ],
        ),
        (
            '1',
            [
                0b00100_000,
                0b01100_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b01110_000,
                0,
            ],
        ),
        (
            '2',
            [
                0b01110_000,
                0b10001_000,
                0b00001_000,
                0b00110_000,
                0b01000_000,
                0b10000_000,
                0b11111_000,
                0,
            ],
        ),
        (
            '3',
            [
                0b11111_000,
                0b00010_000,
                0b00100_000,
                0b00010_000,
                0b00001_000,
                0b10001_000,
                0b01110_000,
                0,
            ],
        ),
        (
            '4',
            [
                0b00010_000,
                0b00110_000,
                0b01010_000,
                0b10010_000,
                0b11111_000,
                0b00010_000,
                0b00010_000,
                0,
            ],
        ),
        (
            '5',
            [
                0b11111_000,
                0b10000_000,
                0b11110_000,
                0b00001_000,
                0b00001_000,
                0b10001_000,
                0b01110_000,
                0,
            ],
        ),
        (
            '6',
            [
                0b00110_000,
                0b01000_000,
                0b10000_000,
                0b11110_000,
                0b10001_000,
                0b10001_000,
                0b01110_000,
                0,
            ],
        ),
        (
            '7',
            [
                0b11111_000,
                0b00001_000,
                0b00010_000,
                0b00100_000,
                0b01000_000,
                0b01000_000,
                0b01000_000,
                0,
            ],
        ),
        (
            '8',
            [
                0b01110_000,
                0b10001_000,
                0b10001_000,
                0b01110_000,
                0b10001_000,
                0b10001_000,
                0b01110_000,
                0,
            ],
        ),
        (
            '9',
            [
                0b01110_000,
                0b10001_000,
                0b10001_000,
                0b01111_000,
                0b00001_000,
                0b00010_000,
                0b01100_000,
                0,
            ],
        ),
        ('.', [0, 0, 0, 0, 0, 0b01100_000, 0b01100_000, 0]),
        (',', [0, 0, 0, 0, 0, 0b00110_000, 0b00110_000, 0b01100_000]),
        (
            '!',
            [
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0b00100_000,
                0,
                0b00100_000,
                0,
            ],
        ),
        (
            '?',
            [
                0b01110_000,
                0b10001_000,
                0b00001_000,
                0b00110_000,
                0b00100_000,
                0,
                0b00100_000,
                0,
            ],
        ),
        ('\'', [0b00100_000, 0b00100_000, 0, 0, 0, 0, 0, 0]),
        ('-', [0, 0, 0, 0b11111_000, 0, 0, 0, 0]),
        (
            ':',
            [
                0,
                0b01100_000,
                0b01100_000,
                0,
                0b01100_000,
                0b01100_000,
                0,
                0,
            ],
        ),
        (
            '(',
            [
                0b00010_000,
                0b00100_000,
                0b01000_000,
                0b01000_000,
                0b01000_000,
                0b00100_000,
                0b00010_000,
                0,
            ],
        ),
        (
            ')',
            [
                0b01000_000,
                0b00100_000,
                0b00010_000,
                0b00010_000,
                0b00010_000,
                0b00100_000,
                0b01000_000,
                0,
            ],
        ),
        (
            '+',
            [
                0,
                0b00100_000,
                0b00100_000,
                0b11111_000,
                0b00100_000,
                0b00100_000,
                0,
                0,
            ],
        ),
        ('=', [0, 0, 0b11111_000, 0, 0b11111_000, 0, 0, 0]),
        (
            '/',
            [
                0,
                0b00001_000,
                0b00010_000,
                0b00100_000,
                0b01000_000,
                0b10000_000,
                0,
                0,
            ],
        ),
        (
            '*',
            [
                0,
                0b10101_000,
                0b01110_000,
                0b11111_000,
                0b01110_000,
                0b10101_000,
                0,
                0,
            ],
        ),
    ])
});

/// Stamps `text` with its baseline at `baseline`, lowercase folded to
/// uppercase. Glyphs without a bitmap advance without drawing; stamping
/// stops once the pen leaves the right edge.
pub fn stamp_text(surface: &mut Surface, baseline: (i32, i32), text: &str, color: Rgba) {
    let scale = TEXT_SCALE as i32;
    let advance = (GLYPH_COLS as i32 + 1) * scale;
    let top = baseline.1 - GLYPH_ROWS as i32 * scale;
    let mut pen_x = baseline.0;

    for ch in text.chars() {
        if pen_x >= surface.width as i32 {
            break;
        }
        if let Some(rows) = GLYPHS.get(&ch.to_ascii_uppercase()) {
            stamp_glyph(surface, pen_x, top, rows, color);
        }
        pen_x += advance;
    }
}

fn stamp_glyph(surface: &mut Surface, left: i32, top: i32, rows: &[u8; 8], color: Rgba) {
    let scale = TEXT_SCALE as i32;
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_COLS as i32 {
            if (bits >> (7 - col)) & 1 == 0 {
                continue;
            }
            for sy in 0..scale {
                for sx in 0..scale {
                    surface.set_pixel(
                        left + col * scale + sx,
                        top + row as i32 * scale + sy,
                        color,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(surface: &Surface, color: Rgba) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..surface.height {
            for x in 0..surface.width {
                if surface.pixel(x, y) == color {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn stamp_stays_inside_the_text_box_above_the_baseline() {
        let mut surface = Surface::new(80, 48);
        stamp_text(&mut surface, (10, 30), "HI!", Rgba::BLACK);

        let hits = painted(&surface, Rgba::BLACK);
        assert!(!hits.is_empty());
        for (x, y) in hits {
            assert!((10..46).contains(&(x as i32)), "x {x} outside text box");
            assert!((14..30).contains(&(y as i32)), "y {y} not above baseline");
        }
    }

    #[test]
    fn lowercase_folds_to_uppercase() {
        let mut lower = Surface::new(40, 40);
        let mut upper = Surface::new(40, 40);
        stamp_text(&mut lower, (4, 24), "bunny", Rgba::BLACK);
        stamp_text(&mut upper, (4, 24), "BUNNY", Rgba::BLACK);
        assert_eq!(lower, upper);
    }

    #[test]
    fn unknown_glyphs_advance_without_drawing() {
        let mut with_gap = Surface::new(60, 30);
        stamp_text(&mut with_gap, (2, 20), "~A", Rgba::BLACK);

        let hits = painted(&with_gap, Rgba::BLACK);
        assert!(!hits.is_empty());
        // The tilde has no bitmap, so the A starts one advance further in.
        let min_x = hits.iter().map(|&(x, _)| x).min().expect("some pixels");
        assert!(min_x >= 14, "expected A shifted past the blank cell, min_x {min_x}");
    }

    #[test]
    fn stamping_clips_at_surface_edges() {
        let mut surface = Surface::new(20, 12);
        stamp_text(&mut surface, (14, 30), "WWW", Rgba::BLACK);
        stamp_text(&mut surface, (-6, 8), "T", Rgba::BLACK);
        // Both stamps fall entirely outside the pixel grid.
        assert!(painted(&surface, Rgba::BLACK).is_empty());
    }

    #[test]
    fn empty_text_stamps_nothing() {
        let mut surface = Surface::new(24, 24);
        let before = surface.clone();
        stamp_text(&mut surface, (5, 20), "", Rgba::BLACK);
        assert_eq!(surface, before);
    }
}
