//! Scene graph: build from a document, load assets, compose to one surface.

use crate::assets::gate::{AssetRequest, LoadOutcome};
use crate::assets::loader::{AssetLoader, events_for};
use crate::components::{Component, Registry};
use crate::config::opts::RenderOpts;
use crate::foundation::error::{FacadeError, FacadeResult};
use crate::render::surface::Surface;
use crate::scene::document::{DocumentDef, ElementDef};
use crate::scene::position::Position;

/// A component instance placed in the scene graph.
#[derive(Debug)]
pub struct SceneNode {
    component: Box<dyn Component>,
    position: Position,
    children: Vec<SceneNode>,
}

impl SceneNode {
    /// The component rendered by this node.
    pub fn component(&self) -> &dyn Component {
        self.component.as_ref()
    }

    /// Placement inside the parent.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Nested nodes, in paint order.
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    fn compose(&self) -> Surface {
        let mut out = self.component.surface().clone();
        for child in &self.children {
            let layer = child.compose();
            let (x, y) = child
                .position
                .resolve(out.dimensions(), layer.dimensions());
            out.composite_at(&layer, x, y);
        }
        out
    }
}

/// Summary of one [`Scene::load`] pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Distinct URLs requested.
    pub requested: usize,
    /// Distinct URLs that loaded.
    pub loaded: usize,
    /// Distinct URLs that failed, sorted.
    pub failed: Vec<String>,
}

/// Scene graph instantiated from a host document.
#[derive(Debug)]
pub struct Scene {
    root: SceneNode,
    opts: RenderOpts,
}

impl Scene {
    /// Instantiate every element of `doc` through `registry`.
    ///
    /// Unknown tags fail the build. Children of components without a content slot are dropped.
    #[tracing::instrument(skip_all, fields(root = %doc.root.tag))]
    pub fn build(doc: &DocumentDef, registry: &Registry, opts: RenderOpts) -> FacadeResult<Self> {
        let root = build_node(&doc.root, registry, &opts, "root")?;
        Ok(Self { root, opts })
    }

    /// Root node.
    pub fn root(&self) -> &SceneNode {
        &self.root
    }

    /// Options the scene was built with.
    pub fn opts(&self) -> &RenderOpts {
        &self.opts
    }

    /// Nodes in depth-first paint order, with their depth.
    pub fn walk(&self) -> Vec<(usize, &SceneNode)> {
        fn visit<'a>(node: &'a SceneNode, depth: usize, out: &mut Vec<(usize, &'a SceneNode)>) {
            out.push((depth, node));
            for child in &node.children {
                visit(child, depth + 1, out);
            }
        }
        let mut out = Vec::new();
        visit(&self.root, 0, &mut out);
        out
    }

    /// Issue every component's requests, load the distinct URLs once, and deliver the results.
    ///
    /// Components draw as their gates settle. Failed URLs are reported, not returned as errors.
    /// Fetching runs in parallel only when [`RenderOpts::parallel_loads`] is set.
    #[tracing::instrument(skip_all, fields(parallel = self.opts.parallel_loads))]
    pub fn load(&mut self, loader: &AssetLoader) -> LoadReport {
        let loader = loader.clone().with_parallel(self.opts.parallel_loads);
        let mut components = Vec::new();
        collect_components(&mut self.root, &mut components);

        let requests: Vec<Vec<AssetRequest>> = components
            .iter_mut()
            .map(|c| c.issue_requests())
            .collect();
        let outcomes = loader.load_all(requests.iter().flatten().map(|r| r.url.as_str()));

        for (component, reqs) in components.iter_mut().zip(&requests) {
            for event in events_for(reqs, &outcomes) {
                component.on_load(event);
            }
        }

        let mut failed: Vec<String> = outcomes
            .iter()
            .filter(|(_, o)| matches!(o, LoadOutcome::Failed))
            .map(|(url, _)| url.clone())
            .collect();
        failed.sort();
        let report = LoadReport {
            requested: outcomes.len(),
            loaded: outcomes.len() - failed.len(),
            failed,
        };
        tracing::debug!(
            requested = report.requested,
            loaded = report.loaded,
            failed = report.failed.len(),
            "scene assets settled"
        );
        report
    }

    /// Flatten the scene into one surface the size of the root component.
    ///
    /// Each container's children are drawn over it in document order, clipped to its bounds.
    #[tracing::instrument(skip_all)]
    pub fn compose(&self) -> Surface {
        let scene = self.root.compose();
        let Some(background) = self.opts.background else {
            return scene;
        };
        let mut out = Surface::new(scene.dimensions());
        out.fill(background);
        out.composite_at(&scene, 0, 0);
        out
    }
}

fn build_node(
    def: &ElementDef,
    registry: &Registry,
    opts: &RenderOpts,
    path: &str,
) -> FacadeResult<SceneNode> {
    let component = registry
        .instantiate(&def.tag, &def.attrs, opts)
        .map_err(|e| match e {
            FacadeError::Validation(msg) => FacadeError::validation(format!("{path}: {msg}")),
            other => other,
        })?;

    let children = if component.accepts_children() {
        def.children
            .iter()
            .enumerate()
            .map(|(i, child)| {
                build_node(child, registry, opts, &format!("{path}.children[{i}]"))
            })
            .collect::<FacadeResult<Vec<_>>>()?
    } else {
        if !def.children.is_empty() {
            tracing::warn!(
                path,
                tag = %def.tag,
                dropped = def.children.len(),
                "component has no content slot; children dropped"
            );
        }
        Vec::new()
    };

    Ok(SceneNode {
        component,
        position: def.position.unwrap_or_default(),
        children,
    })
}

fn collect_components<'a>(node: &'a mut SceneNode, out: &mut Vec<&'a mut Box<dyn Component>>) {
    let SceneNode {
        component,
        children,
        ..
    } = node;
    out.push(component);
    for child in children {
        collect_components(child, out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tree.rs"]
mod tests;
