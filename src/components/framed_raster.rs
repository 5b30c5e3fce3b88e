//! `framed-window`: a background raster with a frame raster on top.

use crate::assets::gate::{AssetSlot, LoadGate};
use crate::components::{Component, ComponentKind, RasterCore};
use crate::config::attrs::Attributes;
use crate::config::opts::RenderOpts;
use crate::foundation::core::Dimensions;
use crate::foundation::error::FacadeResult;

/// Typed attributes of a `framed-window`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    /// Background layer URL.
    pub background: Option<String>,
    /// Frame overlay URL.
    pub frame: Option<String>,
    /// Surface size.
    pub size: Dimensions,
}

impl WindowConfig {
    /// Parse from host attributes, defaulting to 300x300.
    pub fn from_attrs(attrs: &Attributes) -> Self {
        let default = ComponentKind::FramedRaster.default_size();
        Self {
            background: attrs.url(AssetSlot::Background.attr_name()),
            frame: attrs.url(AssetSlot::Frame.attr_name()),
            size: Dimensions::new(
                attrs.dimension_or("width", default.width),
                attrs.dimension_or("height", default.height),
            ),
        }
    }
}

/// Background raster with a frame raster composited on top, both stretched to the surface.
#[derive(Clone, Debug)]
pub struct FramedRaster {
    config: WindowConfig,
    core: RasterCore,
}

impl FramedRaster {
    /// Layers in draw order.
    pub const LAYERS: [AssetSlot; 2] = [AssetSlot::Background, AssetSlot::Frame];

    /// Build from a typed config.
    pub fn new(config: WindowConfig, opts: &RenderOpts) -> Self {
        let gate = LoadGate::new([
            (AssetSlot::Background, config.background.clone()),
            (AssetSlot::Frame, config.frame.clone()),
        ]);
        let core = RasterCore::new(gate, config.size, opts.filter);
        Self { config, core }
    }

    /// Build from host attributes.
    pub fn from_attrs(attrs: &Attributes, opts: &RenderOpts) -> Self {
        Self::new(WindowConfig::from_attrs(attrs), opts)
    }

    /// Parsed configuration.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }
}

impl Component for FramedRaster {
    fn kind(&self) -> ComponentKind {
        ComponentKind::FramedRaster
    }

    fn core(&self) -> &RasterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut RasterCore {
        &mut self.core
    }

    fn render(&mut self) -> FacadeResult<()> {
        let core = &mut self.core;
        if !core.begin_draw() {
            return Ok(());
        }
        for slot in Self::LAYERS {
            if let Some(layer) = core.gate.raster(slot) {
                core.surface.draw_stretched(layer, core.filter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/framed_raster.rs"]
mod tests;
