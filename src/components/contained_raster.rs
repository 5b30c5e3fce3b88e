//! `contained-object`: one raster scaled down to fit a fixed box.

use crate::assets::gate::{AssetSlot, LoadGate};
use crate::components::{Component, ComponentKind, RasterCore};
use crate::config::attrs::Attributes;
use crate::config::opts::RenderOpts;
use crate::foundation::core::Dimensions;
use crate::foundation::error::FacadeResult;
use crate::render::fit::contain_rect;

/// Typed attributes of a `contained-object`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectConfig {
    /// Raster URL.
    pub src: Option<String>,
    /// Box size.
    pub size: Dimensions,
}

impl ObjectConfig {
    /// Parse from host attributes, defaulting to 100x100.
    pub fn from_attrs(attrs: &Attributes) -> Self {
        let default = ComponentKind::ContainedRaster.default_size();
        Self {
            src: attrs.url(AssetSlot::Src.attr_name()),
            size: Dimensions::new(
                attrs.dimension_or("width", default.width),
                attrs.dimension_or("height", default.height),
            ),
        }
    }
}

/// Fixed box showing one raster centered and scaled down to fit, aspect preserved.
#[derive(Clone, Debug)]
pub struct ContainedRaster {
    config: ObjectConfig,
    core: RasterCore,
}

impl ContainedRaster {
    /// Build from a typed config.
    pub fn new(config: ObjectConfig, opts: &RenderOpts) -> Self {
        let gate = LoadGate::new([(AssetSlot::Src, config.src.clone())]);
        let core = RasterCore::new(gate, config.size, opts.filter);
        Self { config, core }
    }

    /// Build from host attributes.
    pub fn from_attrs(attrs: &Attributes, opts: &RenderOpts) -> Self {
        Self::new(ObjectConfig::from_attrs(attrs), opts)
    }

    /// Parsed configuration.
    pub fn config(&self) -> &ObjectConfig {
        &self.config
    }
}

impl Component for ContainedRaster {
    fn kind(&self) -> ComponentKind {
        ComponentKind::ContainedRaster
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
        if let Some(raster) = core.gate.raster(AssetSlot::Src) {
            let placed = contain_rect(core.surface.dimensions(), raster.dimensions());
            core.surface.draw_raster_in(raster, placed, core.filter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/contained_raster.rs"]
mod tests;
