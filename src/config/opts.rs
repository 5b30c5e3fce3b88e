//! Render options shared by components and the compositor.

use crate::foundation::core::Rgba8Premul;

/// Resampling filter used when a raster is stretched or fitted into a box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    /// Nearest-neighbour sampling; keeps hard pixel edges.
    Nearest,
    /// Bilinear (triangle) filtering.
    #[default]
    Bilinear,
}

impl ResampleFilter {
    pub(crate) fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            Self::Nearest => image::imageops::FilterType::Nearest,
            Self::Bilinear => image::imageops::FilterType::Triangle,
        }
    }
}

/// Options shared by every component and by the scene compositor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOpts {
    /// Filter for stretched and fitted rasters. Tiling always samples at native resolution.
    pub filter: ResampleFilter,
    /// If set, the composed scene is laid over this colour.
    pub background: Option<Rgba8Premul>,
    /// Fetch and decode distinct asset URLs in parallel.
    pub parallel_loads: bool,
    /// Reject invalid dimension attributes instead of substituting defaults.
    pub strict_attrs: bool,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            filter: ResampleFilter::Bilinear,
            background: None,
            parallel_loads: true,
            strict_attrs: false,
        }
    }
}
