//! Raster assets: fetching by URL, decoding, and per-component load tracking.

pub mod decode;
pub mod gate;
pub mod loader;
pub mod source;

use std::sync::Arc;

use crate::foundation::core::Dimensions;
use crate::foundation::error::{FacadeError, FacadeResult};

/// Decoded raster in premultiplied RGBA8 form.
///
/// Always non-empty, with a buffer of exactly `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl Raster {
    /// Wrap an existing premultiplied RGBA8 buffer.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> FacadeResult<Self> {
        let expected = Dimensions::new(width, height).rgba8_len()?;
        if data.len() != expected {
            return Err(FacadeError::asset(format!(
                "raster buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        if width == 0 || height == 0 {
            return Err(FacadeError::asset("raster must not be empty"));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(data),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes in row-major premultiplied RGBA8.
    pub fn data(&self) -> &[u8] {
        &self.rgba8_premul
    }

    /// Intrinsic size of the raster.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Premultiplied pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8_premul[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
#[path = "../tests/unit/assets/raster.rs"]
mod tests;
