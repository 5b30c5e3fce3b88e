//! `wall-surface`: a tiled texture container.

use crate::assets::gate::{AssetSlot, LoadGate};
use crate::components::{Component, ComponentKind, RasterCore};
use crate::config::attrs::Attributes;
use crate::config::opts::RenderOpts;
use crate::foundation::core::Dimensions;
use crate::foundation::error::FacadeResult;

/// Typed attributes of a `wall-surface`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallConfig {
    /// Texture URL.
    pub src: Option<String>,
    /// Container size.
    pub size: Dimensions,
}

impl WallConfig {
    /// Parse from host attributes, defaulting to 500x500.
    pub fn from_attrs(attrs: &Attributes) -> Self {
        let default = ComponentKind::TexturedSurface.default_size();
        Self {
            src: attrs.url(AssetSlot::Src.attr_name()),
            size: Dimensions::new(
                attrs.dimension_or("width", default.width),
                attrs.dimension_or("height", default.height),
            ),
        }
    }
}

/// Sized container whose surface is the texture tiled at native resolution.
///
/// Nested components are not owned here; the scene compositor draws them over this surface,
/// clipped to its bounds.
#[derive(Clone, Debug)]
pub struct TexturedSurface {
    config: WallConfig,
    core: RasterCore,
}

impl TexturedSurface {
    /// Build from a typed config.
    pub fn new(config: WallConfig, opts: &RenderOpts) -> Self {
        let gate = LoadGate::new([(AssetSlot::Src, config.src.clone())]);
        let core = RasterCore::new(gate, config.size, opts.filter);
        Self { config, core }
    }

    /// Build from host attributes.
    pub fn from_attrs(attrs: &Attributes, opts: &RenderOpts) -> Self {
        Self::new(WallConfig::from_attrs(attrs), opts)
    }

    /// Parsed configuration.
    pub fn config(&self) -> &WallConfig {
        &self.config
    }
}

impl Component for TexturedSurface {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TexturedSurface
    }

    fn core(&self) -> &RasterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut RasterCore {
        &mut self.core
    }

    fn accepts_children(&self) -> bool {
        true
    }

    fn render(&mut self) -> FacadeResult<()> {
        let core = &mut self.core;
        if !core.begin_draw() {
            return Ok(());
        }
        if let Some(texture) = core.gate.raster(AssetSlot::Src) {
            core.surface.draw_tiled(texture);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/textured_surface.rs"]
mod tests;
