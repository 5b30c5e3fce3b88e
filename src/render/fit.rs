//! Placement math for contained and tiled rasters.

use crate::foundation::core::{Dimensions, PixelRect, Point, Rect, Size};

/// Placement of a raster scaled down (never up) to fit inside `target`, centered on both axes.
///
/// The aspect ratio is preserved and nothing is cropped. When the raster is larger than the box
/// along any axis, at least one axis of the result spans the box exactly.
pub fn contain_rect(target: Dimensions, intrinsic: Dimensions) -> PixelRect {
    if target.is_empty() || intrinsic.is_empty() {
        return PixelRect {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        };
    }

    let t = target.to_size();
    let s = intrinsic.to_size();
    let scale = (t.width / s.width).min(t.height / s.height).min(1.0);
    let fitted = Size::new(
        (s.width * scale).round().clamp(1.0, t.width),
        (s.height * scale).round().clamp(1.0, t.height),
    );

    let rect = Rect::from_center_size(Point::new(t.width / 2.0, t.height / 2.0), fitted);
    PixelRect {
        x: rect.x0.floor() as i64,
        y: rect.y0.floor() as i64,
        width: fitted.width as u32,
        height: fitted.height as u32,
    }
}

/// Offset of the tile grid so that one tile sits centered on the surface.
///
/// Offsets may be negative; callers wrap sample coordinates with `rem_euclid`.
pub fn tile_origin(target: Dimensions, tile: Dimensions) -> (i64, i64) {
    let axis = |t: u32, tile: u32| (i64::from(t) - i64::from(tile)).div_euclid(2);
    (axis(target.width, tile.width), axis(target.height, tile.height))
}

#[cfg(test)]
#[path = "../../tests/unit/render/fit.rs"]
mod tests;
