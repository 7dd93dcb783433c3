use crate::constants::{ZONE_BOTTOM_FRAC, ZONE_LEFT_FRAC, ZONE_RIGHT_FRAC, ZONE_TOP_FRAC};

/// True iff the point lies strictly inside the interaction rectangle
/// [0.2W, 0.8W] x [0.2H, 0.9H]. Recomputed per event from the current
/// viewport; no memoization.
#[inline]
pub fn is_within_zone(x: f32, y: f32, width: f32, height: f32) -> bool {
    if width <= 0.0 || height <= 0.0 {
        return false;
    }
    let left = width * ZONE_LEFT_FRAC;
    let right = width * ZONE_RIGHT_FRAC;
    let top = height * ZONE_TOP_FRAC;
    let bottom = height * ZONE_BOTTOM_FRAC;
    x > left && x < right && y > top && y < bottom
}
