use crate::model::Rgba;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A color expression that could not be resolved to RGBA. Fill semantics
/// depend on an exact resolved color, so this is surfaced instead of falling
/// back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColor {
    pub expression: String,
}

impl std::fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid color expression '{}'", self.expression)
    }
}

impl std::error::Error for InvalidColor {}

static NAMED_COLORS: Lazy<HashMap<&'static str, Rgba>> = Lazy::new(|| {
    HashMap::from([
        ("black", Rgba::rgba(0, 0, 0, 255)),
        ("silver", Rgba::rgba(192, 192, 192, 255)),
        ("gray", Rgba::rgba(128, 128, 128, 255)),
        ("grey", Rgba::rgba(128, 128, 128, 255)),
        ("white", Rgba::rgba(255, 255, 255, 255)),
        ("maroon", Rgba::rgba(128, 0, 0, 255)),
        ("red", Rgba::rgba(255, 0, 0, 255)),
        ("purple", Rgba::rgba(128, 0, 128, 255)),
        ("fuchsia", Rgba::rgba(255, 0, 255, 255)),
        ("magenta", Rgba::rgba(255, 0, 255, 255)),
        ("green", Rgba::rgba(0, 128, 0, 255)),
        ("lime", Rgba::rgba(0, 255, 0, 255)),
        ("olive", Rgba::rgba(128, 128, 0, 255)),
        ("yellow", Rgba::rgba(255, 255, 0, 255)),
        ("navy", Rgba::rgba(0, 0, 128, 255)),
        ("blue", Rgba::rgba(0, 0, 255, 255)),
        ("teal", Rgba::rgba(0, 128, 128, 255)),
        ("aqua", Rgba::rgba(0, 255, 255, 255)),
        ("cyan", Rgba::rgba(0, 255, 255, 255)),
        ("orange", Rgba::rgba(255, 165, 0, 255)),
        ("pink", Rgba::rgba(255, 192, 203, 255)),
        ("hotpink", Rgba::rgba(255, 105, 180, 255)),
    ])
});

/// Resolves a palette color expression to concrete RGBA. Accepts hex
/// (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), functional `rgb()`/`rgba()`
/// as produced by computed styles, and a set of CSS color names.
pub fn resolve(expression: &str) -> Result<Rgba, InvalidColor> {
    let raw = expression.trim();
    let lower = raw.to_ascii_lowercase();

    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| invalid(raw));
    }
    if let Some(body) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
    {
        let body = body.strip_suffix(')').ok_or_else(|| invalid(raw))?;
        return parse_functional(body).ok_or_else(|| invalid(raw));
    }
    NAMED_COLORS
        .get(lower.as_str())
        .copied()
        .ok_or_else(|| invalid(raw))
}

fn invalid(expression: &str) -> InvalidColor {
    InvalidColor {
        expression: expression.to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let nibble = |c: u8| char::from(c).to_digit(16).map(|d| d as u8);
    let bytes = hex.as_bytes();
    match bytes.len() {
        // Shorthand digits double up: #f0f is #ff00ff.
        3 | 4 => {
            let mut px = [255u8; 4];
            for (i, &b) in bytes.iter().enumerate() {
                let n = nibble(b)?;
                px[i] = n << 4 | n;
            }
            Some(Rgba::from_array(px))
        }
        6 | 8 => {
            let mut px = [255u8; 4];
            for (i, pair) in bytes.chunks_exact(2).enumerate() {
                px[i] = nibble(pair[0])? << 4 | nibble(pair[1])?;
            }
            Some(Rgba::from_array(px))
        }
        _ => None,
    }
}

fn parse_functional(body: &str) -> Option<Rgba> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |s: &str| s.parse::<u16>().ok().filter(|v| *v <= 255).map(|v| v as u8);
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = match parts.get(3) {
        Some(s) => {
            let f = s.parse::<f64>().ok().filter(|f| (0.0..=1.0).contains(f))?;
            (f * 255.0).round() as u8
        }
        None => 255,
    };
    Some(Rgba::rgba(r, g, b, a))
}
