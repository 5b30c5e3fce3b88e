//! Where asset bytes come from: a directory on disk or an in-memory map.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{FacadeError, FacadeResult};

/// Something that can turn an asset URL into encoded bytes.
pub trait AssetSource: Send + Sync {
    /// Fetch the encoded bytes behind `url`.
    fn fetch(&self, url: &str) -> FacadeResult<Vec<u8>>;
}

/// Resolves URLs as relative paths under a root directory.
#[derive(Clone, Debug)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory used when resolving relative URLs.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for FsAssetSource {
    fn fetch(&self, url: &str) -> FacadeResult<Vec<u8>> {
        let norm = normalize_rel_path(url)?;
        let path = self.root.join(Path::new(&norm));
        std::fs::read(&path)
            .with_context(|| format!("read asset bytes from '{}'", path.display()))
            .map_err(FacadeError::from)
    }
}

/// In-memory URL -> bytes map.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetSource {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bytes under `url`.
    pub fn insert(&mut self, url: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(url.into(), bytes);
    }

    /// Builder-style [`MemoryAssetSource::insert`].
    pub fn with(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(url, bytes);
        self
    }
}

impl AssetSource for MemoryAssetSource {
    fn fetch(&self, url: &str) -> FacadeResult<Vec<u8>> {
        self.entries
            .get(url)
            .cloned()
            .ok_or_else(|| FacadeError::asset(format!("no in-memory asset for '{url}'")))
    }
}

/// Normalize and validate document-relative asset paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> FacadeResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(FacadeError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(FacadeError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(FacadeError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(FacadeError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
