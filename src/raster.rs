use crate::model::Rgba;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::Rng;

// Strokes narrower than this are Bresenham-stamped; wider ones rasterize as
// a capsule so the round caps stay round.
const CAPSULE_WIDTH_THRESHOLD: u32 = 4;

/// Draws a stroked line segment of the given nominal width with round caps.
pub fn draw_segment(
    surface: &mut Surface,
    start: (i32, i32),
    end: (i32, i32),
    stroke_width: u32,
    color: Rgba,
) {
    if stroke_width < CAPSULE_WIDTH_THRESHOLD {
        draw_segment_stamped(surface, start, end, stroke_width, color);
    } else {
        draw_segment_capsule(surface, start, end, stroke_width, color);
    }
}

fn draw_segment_stamped(
    surface: &mut Surface,
    start: (i32, i32),
    end: (i32, i32),
    stroke_width: u32,
    color: Rgba,
) {
    let mut x0 = start.0;
    let mut y0 = start.1;
    let x1 = end.0;
    let y1 = end.1;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp_disc(surface, (x0, y0), stroke_width, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

fn draw_segment_capsule(
    surface: &mut Surface,
    start: (i32, i32),
    end: (i32, i32),
    stroke_width: u32,
    color: Rgba,
) {
    let radius = (stroke_width.saturating_sub(1) as f64) * 0.5;
    let pad = radius.ceil() as i32 + 1;

    let x0 = (start.0.min(end.0) - pad).max(0);
    let y0 = (start.1.min(end.1) - pad).max(0);
    let x1 = (start.0.max(end.0) + pad).min(surface.width as i32 - 1);
    let y1 = (start.1.max(end.1) + pad).min(surface.height as i32 - 1);

    let radius_sq = radius * radius;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if point_segment_distance_sq((x, y), start, end) <= radius_sq {
                surface.set_pixel(x, y, color);
            }
        }
    }
}

fn point_segment_distance_sq(point: (i32, i32), start: (i32, i32), end: (i32, i32)) -> f64 {
    let px = point.0 as f64;
    let py = point.1 as f64;
    let x0 = start.0 as f64;
    let y0 = start.1 as f64;
    let vx = end.0 as f64 - x0;
    let vy = end.1 as f64 - y0;
    let wx = px - x0;
    let wy = py - y0;
    let len_sq = vx * vx + vy * vy;
    if len_sq <= f64::EPSILON {
        return wx * wx + wy * wy;
    }
    let t = ((wx * vx + wy * vy) / len_sq).clamp(0.0, 1.0);
    let dx = px - (x0 + vx * t);
    let dy = py - (y0 + vy * t);
    dx * dx + dy * dy
}

fn stamp_disc(surface: &mut Surface, center: (i32, i32), stroke_width: u32, color: Rgba) {
    let radius = (stroke_width.saturating_sub(1) / 2) as i32;
    for y in (center.1 - radius)..=(center.1 + radius) {
        for x in (center.0 - radius)..=(center.0 + radius) {
            let dx = x - center.0;
            let dy = y - center.1;
            if dx * dx + dy * dy <= radius * radius {
                surface.set_pixel(x, y, color);
            }
        }
    }
}

/// Stroked axis-aligned rectangle outline with the two points as opposite
/// corners, in any order.
pub fn draw_rect_outline(
    surface: &mut Surface,
    a: (i32, i32),
    b: (i32, i32),
    stroke_width: u32,
    color: Rgba,
) {
    let (x0, x1) = if a.0 <= b.0 { (a.0, b.0) } else { (b.0, a.0) };
    let (y0, y1) = if a.1 <= b.1 { (a.1, b.1) } else { (b.1, a.1) };

    draw_segment(surface, (x0, y0), (x1, y0), stroke_width, color);
    draw_segment(surface, (x1, y0), (x1, y1), stroke_width, color);
    draw_segment(surface, (x1, y1), (x0, y1), stroke_width, color);
    draw_segment(surface, (x0, y1), (x0, y0), stroke_width, color);
}

/// Stroked ellipse outline. Center is the midpoint of the two points, radii
/// are half the per-axis distance; a degenerate span collapses to a dot.
pub fn draw_ellipse_outline(
    surface: &mut Surface,
    a: (i32, i32),
    b: (i32, i32),
    stroke_width: u32,
    color: Rgba,
) {
    let rx = ((a.0 - b.0).abs() as f64) * 0.5;
    let ry = ((a.1 - b.1).abs() as f64) * 0.5;
    let cx = (a.0 + b.0) as f64 * 0.5;
    let cy = (a.1 + b.1) as f64 * 0.5;

    let circumference = std::f64::consts::TAU * rx.max(ry);
    let steps = circumference.max(12.0) as usize;

    for step in 0..=steps {
        let t = (step as f64 / steps as f64) * std::f64::consts::TAU;
        let x = (cx + rx * t.cos()).round() as i32;
        let y = (cy + ry * t.sin()).round() as i32;
        stamp_disc(surface, (x, y), stroke_width, color);
    }
}

/// Scatters `density` single-pixel dots with independent uniform polar
/// offsets within `radius` of the center. Each call is a fresh scatter.
pub fn spray(
    surface: &mut Surface,
    center: (f64, f64),
    radius: f64,
    density: u32,
    color: Rgba,
    rng: &mut StdRng,
) {
    for _ in 0..density {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let offset = rng.gen_range(0.0..radius);
        let x = (center.0 + offset * angle.cos()).floor() as i32;
        let y = (center.1 + offset * angle.sin()).floor() as i32;
        surface.set_pixel(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

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
    fn thin_horizontal_segment_is_a_single_pixel_row() {
        let mut surface = Surface::new(16, 16);
        draw_segment(&mut surface, (2, 5), (8, 5), 2, Rgba::BLACK);

        let hits = painted(&surface, Rgba::BLACK);
        let expected: Vec<(u32, u32)> = (2..=8).map(|x| (x, 5)).collect();
        assert_eq!(hits, expected);
    }

    #[test]
    fn wide_segment_has_round_caps() {
        let mut surface = Surface::new(48, 24);
        draw_segment(&mut surface, (10, 10), (30, 10), 8, Rgba::BLACK);

        // Body spans the stroke radius either side of the path.
        assert_eq!(surface.pixel(20, 7), Rgba::BLACK);
        assert_eq!(surface.pixel(20, 13), Rgba::BLACK);
        assert_eq!(surface.pixel(20, 6), Rgba::WHITE);
        assert_eq!(surface.pixel(20, 14), Rgba::WHITE);
        // Caps extend past the endpoints.
        assert_eq!(surface.pixel(7, 10), Rgba::BLACK);
        assert_eq!(surface.pixel(33, 10), Rgba::BLACK);
        assert_eq!(surface.pixel(6, 10), Rgba::WHITE);
        assert_eq!(surface.pixel(34, 10), Rgba::WHITE);
    }

    #[test]
    fn segment_clips_safely_at_surface_edges() {
        let mut surface = Surface::new(8, 8);
        draw_segment(&mut surface, (-5, -5), (12, 12), 8, Rgba::BLACK);
        draw_segment(&mut surface, (4, -9), (4, 20), 20, Rgba::BLACK);
        assert_eq!(surface.pixel(4, 4), Rgba::BLACK);
    }

    #[test]
    fn rect_outline_hits_corners_and_leaves_interior_untouched() {
        let mut surface = Surface::new(64, 48);
        draw_rect_outline(&mut surface, (10, 10), (50, 40), 2, Rgba::BLACK);

        for corner in [(10, 10), (50, 10), (10, 40), (50, 40)] {
            assert_eq!(surface.pixel(corner.0, corner.1), Rgba::BLACK, "corner {corner:?}");
        }
        assert_eq!(surface.pixel(30, 10), Rgba::BLACK);
        assert_eq!(surface.pixel(10, 25), Rgba::BLACK);
        assert_eq!(surface.pixel(30, 25), Rgba::WHITE);
        assert_eq!(surface.pixel(9, 9), Rgba::WHITE);
        assert_eq!(surface.pixel(51, 41), Rgba::WHITE);
    }

    #[test]
    fn rect_outline_normalizes_reversed_corners() {
        let mut forward = Surface::new(32, 32);
        let mut reversed = Surface::new(32, 32);
        draw_rect_outline(&mut forward, (5, 6), (20, 25), 2, Rgba::BLACK);
        draw_rect_outline(&mut reversed, (20, 25), (5, 6), 2, Rgba::BLACK);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn ellipse_outline_stays_inside_its_bounding_box() {
        let mut surface = Surface::new(64, 48);
        draw_ellipse_outline(&mut surface, (10, 10), (40, 30), 2, Rgba::BLACK);

        let hits = painted(&surface, Rgba::BLACK);
        assert!(!hits.is_empty());
        for (x, y) in &hits {
            assert!((9..=41).contains(x) && (9..=31).contains(y), "({x},{y}) outside box");
        }
        // The extreme columns and rows of the box are reached.
        assert!(hits.iter().any(|&(x, _)| x <= 11));
        assert!(hits.iter().any(|&(x, _)| x >= 39));
        assert!(hits.iter().any(|&(_, y)| y <= 11));
        assert!(hits.iter().any(|&(_, y)| y >= 29));
        // Center stays clear.
        assert_eq!(surface.pixel(25, 20), Rgba::WHITE);
    }

    #[test]
    fn degenerate_ellipse_collapses_to_a_dot() {
        let mut surface = Surface::new(16, 16);
        draw_ellipse_outline(&mut surface, (8, 8), (8, 8), 2, Rgba::BLACK);
        assert_eq!(painted(&surface, Rgba::BLACK), vec![(8, 8)]);
    }

    #[test]
    fn seeded_spray_lands_only_within_the_radius() {
        let mut surface = Surface::new(100, 100);
        let mut rng = StdRng::seed_from_u64(7);
        spray(&mut surface, (50.0, 50.0), 20.0, 50, Rgba::BLACK, &mut rng);

        let hits = painted(&surface, Rgba::BLACK);
        assert!(!hits.is_empty());
        assert!(hits.len() <= 50);
        for (x, y) in hits {
            let dx = x as f64 - 50.0;
            let dy = y as f64 - 50.0;
            // Flooring can push a dot up to sqrt(2) past the float radius.
            assert!(
                (dx * dx + dy * dy).sqrt() < 20.0 + std::f64::consts::SQRT_2,
                "dot ({x},{y}) outside spray radius"
            );
        }
    }

    #[test]
    fn spray_scatters_differently_across_calls() {
        let mut first = Surface::new(64, 64);
        let mut second = Surface::new(64, 64);
        let mut rng = StdRng::seed_from_u64(7);
        spray(&mut first, (32.0, 32.0), 20.0, 50, Rgba::BLACK, &mut rng);
        spray(&mut second, (32.0, 32.0), 20.0, 50, Rgba::BLACK, &mut rng);
        assert_ne!(first, second);
    }
}
