//! Decoding encoded image bytes and SVG documents into premultiplied rasters.

use anyhow::Context;

use crate::assets::Raster;
use crate::config::attrs::MAX_DIMENSION;
use crate::foundation::error::{FacadeError, FacadeResult};

/// Decode encoded image bytes (any format `image` understands, or SVG) into a [`Raster`].
pub fn decode_raster(bytes: &[u8]) -> FacadeResult<Raster> {
    if looks_like_svg(bytes) {
        return rasterize_svg(bytes);
    }

    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Raster::from_premul_rgba8(width, height, rgba8_premul)
}

/// Rasterize an SVG document at its intrinsic size.
pub fn rasterize_svg(bytes: &[u8]) -> FacadeResult<Raster> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .context("parse svg tree")?;

    let size = tree.size();
    let width = svg_extent_px(size.width())?;
    let height = svg_extent_px(size.height())?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FacadeError::asset("failed to allocate svg pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(
        (width as f32) / size.width(),
        (height as f32) / size.height(),
    );
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    // tiny-skia pixmaps are already premultiplied RGBA8.
    Raster::from_premul_rgba8(width, height, pixmap.take())
}

fn svg_extent_px(v: f32) -> FacadeResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(FacadeError::asset("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIMENSION {
        return Err(FacadeError::asset(format!(
            "svg raster size too large: {px} (max {MAX_DIMENSION})"
        )));
    }
    Ok(px)
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(1024)]);
    let text = head.trim_start_matches('\u{feff}').trim_start();
    (text.starts_with("<?xml") || text.starts_with("<svg") || text.starts_with("<!--"))
        && text.contains("<svg")
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[0..3] {
            *c = (((*c as u16) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
