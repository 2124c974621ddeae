use crate::model::Rgba;
use crate::surface::Surface;
use tracing::debug;

/// Pending-stack ceiling. Once the stack holds this many entries the fill
/// stops processing further ones, which can leave very large regions
/// partially filled. Runaway protection, not a correctness bound.
pub const FILL_STACK_GUARD: usize = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// Seed was outside the surface; nothing happened.
    OutOfBounds,
    /// Seed pixel already holds the fill color exactly; nothing happened.
    MatchedExisting,
    Filled { painted: usize, truncated: bool },
}

/// Iterative 4-connected flood fill from `seed`. Repaints the maximal
/// connected region whose pixels exactly match the seed's RGBA, forcing the
/// painted alpha opaque.
pub fn flood_fill(surface: &mut Surface, seed: (i32, i32), fill_color: Rgba) -> FillOutcome {
    if !surface.in_bounds(seed.0, seed.1) {
        return FillOutcome::OutOfBounds;
    }
    let source = surface.pixel(seed.0 as u32, seed.1 as u32);
    if source == fill_color {
        return FillOutcome::MatchedExisting;
    }

    let paint = Rgba {
        a: 255,
        ..fill_color
    };
    let mut visited = vec![false; (surface.width * surface.height) as usize];
    let mut stack: Vec<(i32, i32)> = vec![seed];
    let mut painted = 0usize;
    let mut truncated = false;

    loop {
        if stack.len() >= FILL_STACK_GUARD {
            truncated = true;
            break;
        }
        let Some((x, y)) = stack.pop() else { break };
        if !surface.in_bounds(x, y) {
            continue;
        }
        let idx = (y as u32 * surface.width + x as u32) as usize;
        if visited[idx] {
            continue;
        }
        if surface.pixel(x as u32, y as u32) != source {
            continue;
        }

        surface.set_pixel(x, y, paint);
        visited[idx] = true;
        painted += 1;

        stack.push((x + 1, y));
        stack.push((x - 1, y));
        stack.push((x, y + 1));
        stack.push((x, y - 1));
    }

    if truncated {
        debug!(painted, "flood fill hit the stack guard, region left partial");
    }
    FillOutcome::Filled { painted, truncated }
}
