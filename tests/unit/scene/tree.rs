use std::collections::HashSet;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::thread::ThreadId;

use super::*;
use crate::assets::gate::Lifecycle;
use crate::assets::source::{AssetSource, MemoryAssetSource};
use crate::components::ComponentKind;
use crate::config::opts::ResampleFilter;
use crate::foundation::core::{Dimensions, Rgba8Premul};
use crate::foundation::error::FacadeResult;

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

fn png(w: u32, h: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();
    let img = image::RgbaImage::from_raw(w, h, data).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn loader() -> AssetLoader {
    AssetLoader::new(
        MemoryAssetSource::new()
            .with("brick.png", png(2, 1, &[BLUE, WHITE]))
            .with("red.png", png(1, 1, &[RED])),
    )
}

fn nearest() -> RenderOpts {
    RenderOpts {
        filter: ResampleFilter::Nearest,
        ..RenderOpts::default()
    }
}

fn facade() -> DocumentDef {
    DocumentDef::new(
        ElementDef::new("wall-surface")
            .attr("src", "brick.png")
            .attr("width", "800")
            .attr("height", "600")
            .child(
                ElementDef::new("framed-window")
                    .attr("background", "red.png")
                    .attr("width", "20")
                    .attr("height", "10")
                    .at(Position::at(100, 50)),
            ),
    )
}

#[test]
fn build_instantiates_tree_in_paint_order() {
    let reg = Registry::builtin().unwrap();
    let scene = Scene::build(&facade(), &reg, nearest()).unwrap();
    let nodes = scene.walk();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].0, 0);
    assert_eq!(nodes[0].1.component().kind(), ComponentKind::TexturedSurface);
    assert_eq!(nodes[1].0, 1);
    assert_eq!(nodes[1].1.component().kind(), ComponentKind::FramedRaster);
    assert_eq!(nodes[1].1.position(), Position::at(100, 50));
    assert_eq!(scene.root().children().len(), 1);
    assert_eq!(scene.opts().filter, ResampleFilter::Nearest);
}

#[test]
fn unknown_tag_error_names_the_element_path() {
    let doc = DocumentDef::new(
        ElementDef::new("wall-surface")
            .child(ElementDef::new("scaled-column"))
            .child(ElementDef::new("garden-gnome")),
    );
    let err = Scene::build(&doc, &Registry::builtin().unwrap(), RenderOpts::default())
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("root.children[1]"), "{msg}");
    assert!(msg.contains("garden-gnome"), "{msg}");
}

#[test]
fn children_of_leaf_components_are_dropped() {
    let doc = DocumentDef::new(
        ElementDef::new("contained-object").child(ElementDef::new("scaled-column")),
    );
    let scene = Scene::build(&doc, &Registry::builtin().unwrap(), RenderOpts::default()).unwrap();
    assert_eq!(scene.walk().len(), 1);
}

#[test]
fn load_settles_every_component_and_reports_failures() {
    let doc = DocumentDef::new(
        ElementDef::new("wall-surface")
            .attr("src", "brick.png")
            .attr("width", "10")
            .attr("height", "10")
            .child(ElementDef::new("scaled-column").attr("src", "missing.png"))
            .child(ElementDef::new("contained-object").attr("src", "red.png"))
            .child(ElementDef::new("framed-window").attr("background", "red.png")),
    );
    let mut scene = Scene::build(&doc, &Registry::builtin().unwrap(), nearest()).unwrap();
    let report = scene.load(&loader());

    assert_eq!(report.requested, 3);
    assert_eq!(report.loaded, 2);
    assert_eq!(report.failed, vec!["missing.png".to_string()]);
    for (_, node) in scene.walk() {
        assert_eq!(node.component().lifecycle(), Lifecycle::Ready);
    }
    let column = scene.root().children()[0].component();
    assert_eq!(column.draw_count(), 0);
    assert!(column.surface().is_blank());
}

#[test]
fn nested_window_renders_over_tiled_wall() {
    let mut scene = Scene::build(&facade(), &Registry::builtin().unwrap(), nearest()).unwrap();
    scene.load(&loader());
    let out = scene.compose();
    assert_eq!(out.dimensions(), Dimensions::new(800, 600));

    let wall = scene.root().component().surface();
    let window = scene.root().children()[0].component().surface();
    assert_eq!(window.dimensions(), Dimensions::new(20, 10));
    assert!(window.data().chunks_exact(4).all(|px| px == RED));

    // Inside the window slot.
    assert_eq!(out.pixel(100, 50), Some(RED));
    assert_eq!(out.pixel(119, 59), Some(RED));
    // Outside it the wall texture is untouched; grid origin x = (800 - 2) / 2 = 399 (odd).
    assert_eq!(out.pixel(99, 50), wall.pixel(99, 50));
    assert_eq!(out.pixel(120, 50), wall.pixel(120, 50));
    assert_eq!(out.pixel(399, 0), Some(BLUE));
    assert_eq!(out.pixel(400, 0), Some(WHITE));
    assert_eq!(out.pixel(0, 599), Some(WHITE));
}

#[test]
fn children_are_clipped_to_the_wall() {
    let doc = DocumentDef::new(
        ElementDef::new("wall-surface")
            .attr("width", "4")
            .attr("height", "4")
            .child(
                ElementDef::new("scaled-column")
                    .attr("src", "red.png")
                    .attr("width", "3")
                    .attr("height", "3")
                    .at(Position {
                        right: Some(-1),
                        bottom: Some(-1),
                        ..Position::default()
                    }),
            ),
    );
    let mut scene = Scene::build(&doc, &Registry::builtin().unwrap(), nearest()).unwrap();
    scene.load(&loader());
    let out = scene.compose();

    assert_eq!(out.dimensions(), Dimensions::new(4, 4));
    assert_eq!(out.pixel(2, 2), Some(RED));
    assert_eq!(out.pixel(3, 3), Some(RED));
    assert_eq!(out.pixel(1, 1), Some([0, 0, 0, 0]));
}

#[test]
fn compose_before_load_is_blank_and_background_fills() {
    let opts = RenderOpts {
        background: Some(Rgba8Premul::from_straight_rgba(10, 20, 30, 255)),
        ..nearest()
    };
    let scene = Scene::build(&facade(), &Registry::builtin().unwrap(), opts).unwrap();
    let out = scene.compose();
    assert_eq!(out.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(out.pixel(110, 55), Some([10, 20, 30, 255]));
}

#[test]
fn compose_is_repeatable() {
    let mut scene = Scene::build(&facade(), &Registry::builtin().unwrap(), nearest()).unwrap();
    scene.load(&loader());
    assert_eq!(scene.compose().digest(), scene.compose().digest());
}

#[derive(Clone, Default)]
struct ThreadRecorder {
    threads: Arc<Mutex<HashSet<ThreadId>>>,
    inner: MemoryAssetSource,
}

impl AssetSource for ThreadRecorder {
    fn fetch(&self, url: &str) -> FacadeResult<Vec<u8>> {
        self.threads
            .lock()
            .unwrap()
            .insert(std::thread::current().id());
        self.inner.fetch(url)
    }
}

fn many_columns() -> DocumentDef {
    let wall = (0..16).fold(ElementDef::new("wall-surface"), |wall, i| {
        wall.child(ElementDef::new("scaled-column").attr("src", format!("col{i}.png")))
    });
    DocumentDef::new(wall)
}

#[test]
fn sequential_opts_keep_fetches_on_the_calling_thread() {
    let source = ThreadRecorder::default();
    let threads = Arc::clone(&source.threads);
    // The loader itself is parallel; the scene's options must win.
    let loader = AssetLoader::new(source).with_parallel(true);
    let opts = RenderOpts {
        parallel_loads: false,
        ..RenderOpts::default()
    };

    let mut scene = Scene::build(&many_columns(), &Registry::builtin().unwrap(), opts).unwrap();
    let report = scene.load(&loader);

    assert_eq!(report.requested, 16);
    let seen = threads.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen.contains(&std::thread::current().id()));
}

#[test]
fn strict_errors_carry_a_single_prefix() {
    let doc = DocumentDef::new(ElementDef::new("wall-surface").attr("width", "wide"));
    let opts = RenderOpts {
        strict_attrs: true,
        ..RenderOpts::default()
    };
    let msg = Scene::build(&doc, &Registry::builtin().unwrap(), opts)
        .unwrap_err()
        .to_string();
    assert!(msg.starts_with("validation error: root: <wall-surface>: "), "{msg}");
    assert_eq!(msg.matches("validation error").count(), 1, "{msg}");
}
