//! The four facade components and the tag registry that instantiates them.
//!
//! Every component owns its [`Surface`] and a [`LoadGate`] over its asset slots. Drawing happens
//! once, when the gate becomes ready, and only if at least one asset loaded.

pub mod contained_raster;
pub mod framed_raster;
pub mod registry;
pub mod scaled_raster;
pub mod textured_surface;

use std::fmt;

use crate::assets::gate::{AssetRequest, Lifecycle, LoadEvent, LoadGate};
use crate::config::opts::ResampleFilter;
use crate::foundation::core::Dimensions;
use crate::foundation::error::FacadeResult;
use crate::render::surface::Surface;

pub use contained_raster::{ContainedRaster, ObjectConfig};
pub use framed_raster::{FramedRaster, WindowConfig};
pub use registry::{ComponentFactory, Registry};
pub use scaled_raster::{ColumnConfig, ScaledRaster};
pub use textured_surface::{TexturedSurface, WallConfig};

/// Component variants known to the built-in registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Tiled texture container (`wall-surface`).
    TexturedSurface,
    /// Background plus frame overlay (`framed-window`).
    FramedRaster,
    /// Stretched single raster (`scaled-column`).
    ScaledRaster,
    /// Scale-to-fit single raster (`contained-object`).
    ContainedRaster,
}

impl ComponentKind {
    /// Every kind, in registration order.
    pub const ALL: [ComponentKind; 4] = [
        Self::TexturedSurface,
        Self::FramedRaster,
        Self::ScaledRaster,
        Self::ContainedRaster,
    ];

    /// Canonical element tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::TexturedSurface => "wall-surface",
            Self::FramedRaster => "framed-window",
            Self::ScaledRaster => "scaled-column",
            Self::ContainedRaster => "contained-object",
        }
    }

    /// Older tag accepted for the same component.
    pub fn legacy_tag(self) -> &'static str {
        match self {
            Self::TexturedSurface => "image-wall",
            Self::FramedRaster => "image-window",
            Self::ScaledRaster => "image-column",
            Self::ContainedRaster => "image-object",
        }
    }

    /// Size used when width/height are not declared.
    pub fn default_size(self) -> Dimensions {
        match self {
            Self::TexturedSurface => Dimensions::new(500, 500),
            Self::FramedRaster => Dimensions::new(300, 300),
            Self::ScaledRaster => Dimensions::new(100, 300),
            Self::ContainedRaster => Dimensions::new(100, 100),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// State every component carries: its asset gate, its private surface, and a draw counter.
#[derive(Clone, Debug)]
pub struct RasterCore {
    pub(crate) gate: LoadGate,
    pub(crate) surface: Surface,
    pub(crate) filter: ResampleFilter,
    draws: u64,
}

impl RasterCore {
    pub(crate) fn new(gate: LoadGate, size: Dimensions, filter: ResampleFilter) -> Self {
        Self {
            gate,
            surface: Surface::new(size),
            filter,
            draws: 0,
        }
    }

    /// Start a draw pass: clears the surface. Returns `false` until the gate is ready.
    pub(crate) fn begin_draw(&mut self) -> bool {
        if self.gate.lifecycle() != Lifecycle::Ready {
            return false;
        }
        self.surface.clear();
        self.draws += 1;
        true
    }
}

/// A visual component with an isolated, exclusively owned rendering surface.
pub trait Component: Send + fmt::Debug {
    /// Variant of this component.
    fn kind(&self) -> ComponentKind;

    /// Shared component state.
    fn core(&self) -> &RasterCore;

    /// Mutable shared component state.
    fn core_mut(&mut self) -> &mut RasterCore;

    /// Clear the surface and draw every loaded layer.
    ///
    /// Does nothing before the component is ready. Repeated calls produce identical pixels.
    fn render(&mut self) -> FacadeResult<()>;

    /// Whether nested components render through this one's content slot.
    fn accepts_children(&self) -> bool {
        false
    }

    /// Declared size; equal to the surface size.
    fn dimensions(&self) -> Dimensions {
        self.core().surface.dimensions()
    }

    /// Current lifecycle state.
    fn lifecycle(&self) -> Lifecycle {
        self.core().gate.lifecycle()
    }

    /// The rendered surface.
    fn surface(&self) -> &Surface {
        &self.core().surface
    }

    /// Number of completed draw passes.
    fn draw_count(&self) -> u64 {
        self.core().draws
    }

    /// Issue asset requests; the first call moves the component to
    /// [`Lifecycle::AwaitingAssets`] (or straight to ready when nothing is declared).
    fn issue_requests(&mut self) -> Vec<AssetRequest> {
        let first = self.lifecycle() == Lifecycle::Constructed;
        let requests = self.core_mut().gate.issue();
        if first && self.lifecycle() == Lifecycle::Ready {
            self.on_ready();
        }
        requests
    }

    /// Deliver one load-completion signal.
    fn on_load(&mut self, event: LoadEvent) {
        if self.core_mut().gate.settle(event) {
            self.on_ready();
        }
    }

    /// Draw once after the gate settles, provided something loaded.
    fn on_ready(&mut self) {
        if !self.core().gate.any_loaded() {
            tracing::debug!(kind = %self.kind(), "ready with no loaded assets; nothing drawn");
            return;
        }
        if let Err(err) = self.render() {
            tracing::warn!(kind = %self.kind(), error = %err, "render failed");
        }
    }
}
