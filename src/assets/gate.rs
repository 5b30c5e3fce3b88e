//! Per-component asset slots and the join that decides when a component may draw.

use std::sync::Arc;

use crate::assets::Raster;

/// Named asset slot of a component; each maps to one URL attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetSlot {
    /// Single source image (`src`).
    Src,
    /// Window background layer (`background`).
    Background,
    /// Window frame overlay (`frame`).
    Frame,
}

impl AssetSlot {
    /// Attribute that declares this slot's URL.
    pub fn attr_name(self) -> &'static str {
        match self {
            Self::Src => "src",
            Self::Background => "background",
            Self::Frame => "frame",
        }
    }
}

/// Render lifecycle shared by every component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Surface allocated, no asset requested yet.
    Constructed,
    /// Requests issued; at least one slot has not settled.
    AwaitingAssets,
    /// Every slot settled. Terminal.
    Ready,
}

/// One fetch a component needs before it can draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRequest {
    /// Slot the result belongs to.
    pub slot: AssetSlot,
    /// URL to load.
    pub url: String,
}

/// Result of loading one URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Decoded successfully.
    Loaded(Arc<Raster>),
    /// Fetch or decode failed; the slot never draws.
    Failed,
}

/// Completion signal delivered to a component for one of its slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadEvent {
    /// Slot being settled.
    pub slot: AssetSlot,
    /// What happened.
    pub outcome: LoadOutcome,
}

impl LoadEvent {
    /// Successful load of `raster` into `slot`.
    pub fn loaded(slot: AssetSlot, raster: Raster) -> Self {
        Self {
            slot,
            outcome: LoadOutcome::Loaded(Arc::new(raster)),
        }
    }

    /// Failed load for `slot`.
    pub fn failed(slot: AssetSlot) -> Self {
        Self {
            slot,
            outcome: LoadOutcome::Failed,
        }
    }
}

#[derive(Clone, Debug)]
enum SlotState {
    Pending(String),
    Loaded(Arc<Raster>),
    Failed,
}

/// Wait-for-all join over a component's declared asset slots.
///
/// Slots declared without a URL are settled as failed up front. The gate becomes
/// [`Lifecycle::Ready`] once every slot is loaded or failed; later events are ignored.
#[derive(Clone, Debug)]
pub struct LoadGate {
    lifecycle: Lifecycle,
    slots: Vec<(AssetSlot, SlotState)>,
}

impl LoadGate {
    /// Declare the slots of a component, in draw order.
    pub fn new(declared: impl IntoIterator<Item = (AssetSlot, Option<String>)>) -> Self {
        let slots = declared
            .into_iter()
            .map(|(slot, url)| {
                let state = match url {
                    Some(url) => SlotState::Pending(url),
                    None => SlotState::Failed,
                };
                (slot, state)
            })
            .collect();
        Self {
            lifecycle: Lifecycle::Constructed,
            slots,
        }
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Issue requests for every pending slot and leave [`Lifecycle::Constructed`].
    ///
    /// Only the first call returns requests. With nothing pending the gate is immediately ready.
    pub fn issue(&mut self) -> Vec<AssetRequest> {
        if self.lifecycle != Lifecycle::Constructed {
            return Vec::new();
        }
        let requests: Vec<AssetRequest> = self
            .slots
            .iter()
            .filter_map(|(slot, state)| match state {
                SlotState::Pending(url) => Some(AssetRequest {
                    slot: *slot,
                    url: url.clone(),
                }),
                SlotState::Loaded(_) | SlotState::Failed => None,
            })
            .collect();
        self.lifecycle = if requests.is_empty() {
            Lifecycle::Ready
        } else {
            Lifecycle::AwaitingAssets
        };
        requests
    }

    /// Apply one load signal. Returns `true` when this event made the gate ready.
    pub fn settle(&mut self, event: LoadEvent) -> bool {
        if self.lifecycle != Lifecycle::AwaitingAssets {
            tracing::debug!(slot = ?event.slot, lifecycle = ?self.lifecycle, "load event ignored");
            return false;
        }
        let Some((_, state)) = self.slots.iter_mut().find(|(slot, _)| *slot == event.slot) else {
            tracing::debug!(slot = ?event.slot, "load event for undeclared slot ignored");
            return false;
        };
        if !matches!(state, SlotState::Pending(_)) {
            tracing::debug!(slot = ?event.slot, "duplicate load event ignored");
            return false;
        }

        *state = match event.outcome {
            LoadOutcome::Loaded(raster) => SlotState::Loaded(raster),
            LoadOutcome::Failed => SlotState::Failed,
        };

        if self
            .slots
            .iter()
            .any(|(_, s)| matches!(s, SlotState::Pending(_)))
        {
            return false;
        }
        self.lifecycle = Lifecycle::Ready;
        true
    }

    /// Loaded raster for `slot`, if it settled successfully.
    pub fn raster(&self, slot: AssetSlot) -> Option<&Arc<Raster>> {
        self.slots.iter().find_map(|(s, state)| match state {
            SlotState::Loaded(r) if *s == slot => Some(r),
            _ => None,
        })
    }

    /// Loaded rasters in declaration order.
    pub fn loaded_layers(&self) -> impl Iterator<Item = (AssetSlot, &Arc<Raster>)> {
        self.slots.iter().filter_map(|(slot, state)| match state {
            SlotState::Loaded(r) => Some((*slot, r)),
            SlotState::Pending(_) | SlotState::Failed => None,
        })
    }

    /// Return `true` when at least one slot loaded.
    pub fn any_loaded(&self) -> bool {
        self.loaded_layers().next().is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/gate.rs"]
mod tests;
