use game_core::{FovOracle, MapOracle, Position, VisibilityMap};

/// Circular field of view with Bresenham line-of-sight.
///
/// A cell is visible when every cell strictly between it and the origin
/// is transparent. Opaque cells themselves are lit so walls show up.
pub struct LineOfSightFov;

impl FovOracle for LineOfSightFov {
    fn compute_fov(
        &self,
        map: &dyn MapOracle,
        origin: Position,
        radius: u32,
        visibility: &mut VisibilityMap,
    ) {
        let radius = radius as i32;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let target = origin.offset(dx, dy);
                if map.contains(target) && line_is_clear(map, origin, target) {
                    visibility.set_visible(target, true);
                }
            }
        }
    }
}

fn line_is_clear(map: &dyn MapOracle, from: Position, to: Position) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut current = from;

    while current != to {
        if current != from && !map.is_transparent(current) {
            return false;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            current.x += sx;
        }
        if doubled <= dx {
            err += dx;
            current.y += sy;
        }
    }
    true
}
