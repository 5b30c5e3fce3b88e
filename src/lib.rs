//! Facade renders decorative building-facade compositions.
//!
//! A host document names components by tag (`wall-surface`, `framed-window`, `scaled-column`,
//! `contained-object`) with string attributes, optional placement, and nested children. The
//! flow is:
//!
//! - Parse a [`DocumentDef`] (JSON or built in code)
//! - Instantiate it through a [`Registry`] into a [`Scene`]
//! - Load the scene's assets with an [`AssetLoader`]; each component draws once its slots settle
//! - [`Scene::compose`] flattens the tree into one premultiplied RGBA8 [`Surface`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod assets;
pub mod components;
pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

pub use crate::assets::Raster;
pub use crate::assets::gate::{AssetSlot, Lifecycle, LoadEvent, LoadGate, LoadOutcome};
pub use crate::assets::loader::AssetLoader;
pub use crate::assets::source::{AssetSource, FsAssetSource, MemoryAssetSource};
pub use crate::components::{
    ColumnConfig, Component, ComponentKind, ContainedRaster, FramedRaster, ObjectConfig,
    Registry, ScaledRaster, TexturedSurface, WallConfig, WindowConfig,
};
pub use crate::config::attrs::{Attributes, MAX_DIMENSION};
pub use crate::config::opts::{RenderOpts, ResampleFilter};
pub use crate::foundation::core::{Dimensions, PixelRect, Rgba8Premul};
pub use crate::foundation::error::{FacadeError, FacadeResult};
pub use crate::render::surface::Surface;
pub use crate::scene::document::{DocumentDef, ElementDef};
pub use crate::scene::position::Position;
pub use crate::scene::tree::{LoadReport, Scene, SceneNode};

/// Build `doc`, load its assets and compose it in one call.
pub fn render_document(
    doc: &DocumentDef,
    registry: &Registry,
    loader: &AssetLoader,
    opts: RenderOpts,
) -> FacadeResult<Surface> {
    let mut scene = Scene::build(doc, registry, opts)?;
    scene.load(loader);
    Ok(scene.compose())
}
