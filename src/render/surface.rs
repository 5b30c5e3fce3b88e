//! Owned premultiplied RGBA8 drawing surfaces.

use crate::assets::Raster;
use crate::assets::decode::unpremultiply_rgba8_in_place;
use crate::config::opts::ResampleFilter;
use crate::foundation::core::{Dimensions, PixelRect, Rgba8Premul};
use crate::foundation::error::{FacadeError, FacadeResult};
use crate::foundation::math::Fnv1a64;
use crate::render::composite::{blend_row, over};
use crate::render::fit::tile_origin;

/// Pixel-addressable drawing target with a fixed size.
///
/// Pixels are premultiplied RGBA8, row-major, tightly packed. A surface starts fully
/// transparent and is never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    dims: Dimensions,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a transparent surface.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            data: vec![0; dims.pixel_count().saturating_mul(4)],
        }
    }

    /// Surface size.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.dims.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.dims.height
    }

    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        let idx = self.index(x as usize, y as usize);
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Return `true` when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Reset to fully transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8Premul) {
        let px = color.to_array();
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    /// Draw `raster` stretched to cover the whole surface; aspect ratio is not preserved.
    pub fn draw_stretched(
        &mut self,
        raster: &Raster,
        filter: ResampleFilter,
    ) -> FacadeResult<()> {
        self.draw_raster_in(raster, PixelRect::covering(self.dims), filter)
    }

    /// Resample `raster` to the size of `dst` and blend it over the surface at `dst`'s origin.
    ///
    /// Parts of `dst` outside the surface are clipped.
    pub fn draw_raster_in(
        &mut self,
        raster: &Raster,
        dst: PixelRect,
        filter: ResampleFilter,
    ) -> FacadeResult<()> {
        if dst.width == 0 || dst.height == 0 {
            return Ok(());
        }
        if raster.dimensions() == dst.dimensions() {
            self.blit(raster.data(), dst.width, dst.height, dst.x, dst.y);
            return Ok(());
        }

        let src = image::ImageBuffer::<image::Rgba<u8>, &[u8]>::from_raw(
            raster.width(),
            raster.height(),
            raster.data(),
        )
        .ok_or_else(|| FacadeError::render("raster buffer does not match its dimensions"))?;
        let resized =
            image::imageops::resize(&src, dst.width, dst.height, filter.to_image_filter());
        self.blit(resized.as_raw(), dst.width, dst.height, dst.x, dst.y);
        Ok(())
    }

    /// Repeat `tile` at native resolution across the surface, one tile centered.
    pub fn draw_tiled(&mut self, tile: &Raster) {
        let (ox, oy) = tile_origin(self.dims, tile.dimensions());
        let (tw, th) = (i64::from(tile.width()), i64::from(tile.height()));
        let texels = tile.data();
        let width = self.dims.width as usize;
        for y in 0..self.dims.height as usize {
            let ty = (y as i64 - oy).rem_euclid(th) as usize;
            let tile_row = ty * tile.width() as usize * 4;
            for x in 0..width {
                let tx = (x as i64 - ox).rem_euclid(tw) as usize;
                let s = tile_row + tx * 4;
                let src = [texels[s], texels[s + 1], texels[s + 2], texels[s + 3]];
                let idx = self.index(x, y);
                let dst = [
                    self.data[idx],
                    self.data[idx + 1],
                    self.data[idx + 2],
                    self.data[idx + 3],
                ];
                self.data[idx..idx + 4].copy_from_slice(&over(dst, src));
            }
        }
    }

    /// Blend another surface over this one with its top-left corner at `(x, y)`, clipped.
    pub fn composite_at(&mut self, src: &Surface, x: i64, y: i64) {
        self.blit(&src.data, src.dims.width, src.dims.height, x, y);
    }

    /// Stable FNV-1a digest over size and pixels.
    pub fn digest(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.dims.width);
        h.write_u32(self.dims.height);
        h.write_bytes(&self.data);
        h.finish()
    }

    /// Convert to a straight-alpha image for encoding.
    pub fn to_rgba_image(&self) -> FacadeResult<image::RgbaImage> {
        let mut data = self.data.clone();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(self.dims.width, self.dims.height, data)
            .ok_or_else(|| FacadeError::render("surface buffer does not match its dimensions"))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (y * self.dims.width as usize + x) * 4
    }

    fn blit(&mut self, src: &[u8], src_w: u32, src_h: u32, x: i64, y: i64) {
        let (dw, dh) = (i64::from(self.dims.width), i64::from(self.dims.height));
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(src_w)).min(dw);
        let y1 = (y + i64::from(src_h)).min(dh);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let span = ((x1 - x0) as usize) * 4;
        for dy in y0..y1 {
            let sy = (dy - y) as usize;
            let sx = (x0 - x) as usize;
            let s = (sy * src_w as usize + sx) * 4;
            let d = self.index(x0 as usize, dy as usize);
            blend_row(&mut self.data[d..d + span], &src[s..s + span]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
