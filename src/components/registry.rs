//! Tag to constructor mapping for host documents.

use std::collections::BTreeMap;

use crate::components::{
    Component, ComponentKind, ContainedRaster, FramedRaster, ScaledRaster, TexturedSurface,
};
use crate::config::attrs::Attributes;
use crate::config::opts::RenderOpts;
use crate::foundation::error::{FacadeError, FacadeResult};

/// Constructor for one component variant.
pub type ComponentFactory = fn(&Attributes, &RenderOpts) -> Box<dyn Component>;

#[derive(Clone, Copy)]
struct Entry {
    kind: ComponentKind,
    factory: ComponentFactory,
}

/// Explicit tag -> constructor mapping.
#[derive(Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, Entry>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(tag, e)| (tag, e.kind)))
            .finish()
    }
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the four facade components under their canonical and legacy tags.
    pub fn builtin() -> FacadeResult<Self> {
        let mut reg = Self::new();
        for kind in ComponentKind::ALL {
            let factory = builtin_factory(kind);
            reg.register(kind.tag(), kind, factory)?;
            reg.register(kind.legacy_tag(), kind, factory)?;
        }
        Ok(reg)
    }

    /// Add `tag`; fails if the tag is blank or already registered.
    pub fn register(
        &mut self,
        tag: &str,
        kind: ComponentKind,
        factory: ComponentFactory,
    ) -> FacadeResult<()> {
        let tag = normalize_tag(tag);
        if tag.is_empty() {
            return Err(FacadeError::validation("component tag must be non-empty"));
        }
        if self.entries.contains_key(&tag) {
            return Err(FacadeError::validation(format!(
                "component tag '{tag}' is already registered"
            )));
        }
        self.entries.insert(tag, Entry { kind, factory });
        Ok(())
    }

    /// Kind registered under `tag`.
    pub fn kind_of(&self, tag: &str) -> Option<ComponentKind> {
        self.entries.get(&normalize_tag(tag)).map(|e| e.kind)
    }

    /// Registered tags in sorted order, with their kinds.
    pub fn tags(&self) -> impl Iterator<Item = (&str, ComponentKind)> {
        self.entries.iter().map(|(tag, e)| (tag.as_str(), e.kind))
    }

    /// Construct the component registered under `tag`.
    ///
    /// With `opts.strict_attrs` set, invalid dimension attributes are rejected instead of being
    /// replaced by defaults.
    pub fn instantiate(
        &self,
        tag: &str,
        attrs: &Attributes,
        opts: &RenderOpts,
    ) -> FacadeResult<Box<dyn Component>> {
        let entry = self
            .entries
            .get(&normalize_tag(tag))
            .ok_or_else(|| FacadeError::validation(format!("unknown component tag '{tag}'")))?;
        if opts.strict_attrs {
            attrs
                .validate_dimensions()
                .map_err(|e| match e {
                    FacadeError::Validation(msg) => {
                        FacadeError::validation(format!("<{tag}>: {msg}"))
                    }
                    other => other,
                })?;
        }
        Ok((entry.factory)(attrs, opts))
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}

fn builtin_factory(kind: ComponentKind) -> ComponentFactory {
    match kind {
        ComponentKind::TexturedSurface => make_wall,
        ComponentKind::FramedRaster => make_window,
        ComponentKind::ScaledRaster => make_column,
        ComponentKind::ContainedRaster => make_object,
    }
}

fn make_wall(attrs: &Attributes, opts: &RenderOpts) -> Box<dyn Component> {
    Box::new(TexturedSurface::from_attrs(attrs, opts))
}

fn make_window(attrs: &Attributes, opts: &RenderOpts) -> Box<dyn Component> {
    Box::new(FramedRaster::from_attrs(attrs, opts))
}

fn make_column(attrs: &Attributes, opts: &RenderOpts) -> Box<dyn Component> {
    Box::new(ScaledRaster::from_attrs(attrs, opts))
}

fn make_object(attrs: &Attributes, opts: &RenderOpts) -> Box<dyn Component> {
    Box::new(ContainedRaster::from_attrs(attrs, opts))
}

#[cfg(test)]
#[path = "../../tests/unit/components/registry.rs"]
mod tests;
