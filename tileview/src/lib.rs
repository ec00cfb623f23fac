//! A headless windowed tile view engine.
//!
//! For a ready-made in-memory binder (useful for tests, demos and retained-mode hosts), see the
//! `tileview-adapter` crate.
//!
//! Given an item count, a container size and a tile size, the engine keeps a bounded pool of
//! row slots alive and remaps them to whichever rows are near the viewport as the user scrolls:
//! the first row leaving at one edge is rebound to the row entering at the other, so scrolling
//! costs O(rows entering view) rebinds and never allocates.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - a [`SlotBinder`] that creates, rebinds, positions and releases the actual visuals
//! - container size changes and logical scroll offsets
//! - timestamps, plus calls to [`TileView::tick`] and [`TileView::animation_frame`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod binder;
mod error;
mod layout;
mod options;
mod pool;
mod reconcile;
mod tile_view;
mod timer;
mod tracker;
mod types;


pub use binder::SlotBinder;
pub use error::{BindError, TileViewError};
pub use layout::compute_layout;
pub use options::{OnEventCallback, OnScrollEndCallback, OverflowPadding, TileViewOptions};
pub use pool::{PoolDelta, RowSlot, SlotPool};
pub use reconcile::Reconciliation;
pub use tile_view::TileView;
pub use timer::Timer;
pub use tracker::{ScrollTracker, WindowUpdate};
pub use types::{
    Axis, EngineState, LayoutConfig, RowPlacement, ScrollDirection, Size, TextDirection,
    TileBinding, TileViewEvent, VisibleRange,
};
