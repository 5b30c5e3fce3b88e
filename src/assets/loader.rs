//! Fetching and decoding asset URLs, once per distinct URL.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use rayon::prelude::*;

use crate::assets::decode::decode_raster;
use crate::assets::gate::{AssetRequest, LoadEvent, LoadOutcome};
use crate::assets::source::AssetSource;

/// Fetches and decodes asset URLs through an [`AssetSource`].
///
/// Failures are never reported as errors: they become [`LoadOutcome::Failed`] and are logged at
/// `debug` level.
#[derive(Clone)]
pub struct AssetLoader {
    source: Arc<dyn AssetSource>,
    parallel: bool,
}

impl std::fmt::Debug for AssetLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetLoader")
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}

impl AssetLoader {
    /// Loader over `source`, parallel by default.
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            parallel: true,
        }
    }

    /// Toggle parallel fetching in [`AssetLoader::load_all`].
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Fetch and decode one URL.
    pub fn load(&self, url: &str) -> LoadOutcome {
        let result = self.source.fetch(url).and_then(|bytes| decode_raster(&bytes));
        match result {
            Ok(raster) => {
                tracing::debug!(url, width = raster.width(), height = raster.height(), "asset loaded");
                LoadOutcome::Loaded(Arc::new(raster))
            }
            Err(err) => {
                tracing::debug!(url, error = %err, "asset failed to load");
                LoadOutcome::Failed
            }
        }
    }

    /// Load every distinct URL once.
    pub fn load_all<'a>(
        &self,
        urls: impl IntoIterator<Item = &'a str>,
    ) -> HashMap<String, LoadOutcome> {
        let unique: Vec<&str> = urls.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        if self.parallel {
            unique
                .par_iter()
                .map(|url| (url.to_string(), self.load(url)))
                .collect()
        } else {
            unique
                .iter()
                .map(|url| (url.to_string(), self.load(url)))
                .collect()
        }
    }

    /// Load the URLs behind `requests` and turn them into one event per request.
    pub fn resolve(&self, requests: &[AssetRequest]) -> Vec<LoadEvent> {
        let outcomes = self.load_all(requests.iter().map(|r| r.url.as_str()));
        events_for(requests, &outcomes)
    }
}

/// One event per request, looked up in outcomes from [`AssetLoader::load_all`].
///
/// Requests whose URL is missing from `outcomes` settle as failed.
pub(crate) fn events_for(
    requests: &[AssetRequest],
    outcomes: &HashMap<String, LoadOutcome>,
) -> Vec<LoadEvent> {
    requests
        .iter()
        .map(|r| LoadEvent {
            slot: r.slot,
            outcome: outcomes
                .get(&r.url)
                .cloned()
                .unwrap_or(LoadOutcome::Failed),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
