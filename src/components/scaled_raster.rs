//! `scaled-column`: one raster stretched to a fixed size.

use crate::assets::gate::{AssetSlot, LoadGate};
use crate::components::{Component, ComponentKind, RasterCore};
use crate::config::attrs::Attributes;
use crate::config::opts::RenderOpts;
use crate::foundation::core::Dimensions;
use crate::foundation::error::FacadeResult;

/// Typed attributes of a `scaled-column`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Raster URL.
    pub src: Option<String>,
    /// Surface size.
    pub size: Dimensions,
}

impl ColumnConfig {
    /// Parse from host attributes, defaulting to 100x300.
    pub fn from_attrs(attrs: &Attributes) -> Self {
        let default = ComponentKind::ScaledRaster.default_size();
        Self {
            src: attrs.url(AssetSlot::Src.attr_name()),
            size: Dimensions::new(
                attrs.dimension_or("width", default.width),
                attrs.dimension_or("height", default.height),
            ),
        }
    }
}

/// One raster stretched to exactly fill the surface.
#[derive(Clone, Debug)]
pub struct ScaledRaster {
    config: ColumnConfig,
    core: RasterCore,
}

impl ScaledRaster {
    /// Build from a typed config.
    pub fn new(config: ColumnConfig, opts: &RenderOpts) -> Self {
        let gate = LoadGate::new([(AssetSlot::Src, config.src.clone())]);
        let core = RasterCore::new(gate, config.size, opts.filter);
        Self { config, core }
    }

    /// Build from host attributes.
    pub fn from_attrs(attrs: &Attributes, opts: &RenderOpts) -> Self {
        Self::new(ColumnConfig::from_attrs(attrs), opts)
    }

    /// Parsed configuration.
    pub fn config(&self) -> &ColumnConfig {
        &self.config
    }
}

impl Component for ScaledRaster {
    fn kind(&self) -> ComponentKind {
        ComponentKind::ScaledRaster
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
            core.surface.draw_stretched(raster, core.filter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/scaled_raster.rs"]
mod tests;
