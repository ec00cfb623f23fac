//! Adapter utilities for the `tileview` crate.
//!
//! The `tileview` engine never builds visual output; it drives a `SlotBinder`. This crate
//! provides a framework-neutral binder that keeps the rendered tree in memory:
//!
//! - `TemplateCache`: named render functions, resolved when a view compiles its template key
//! - `HeadlessBinder`: rows and tiles as plain nodes, with bind/refresh counters
//! - `snapshot` / `visible_texts`: read the retained tree back, e.g. for tests or a text UI
//!
//! This crate has no UI toolkit bindings.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod headless;
mod template;

#[cfg(test)]
mod tests;

pub use headless::{
    BinderStats, HeadlessBinder, RowNode, RowSnapshot, TileNode, snapshot, visible_texts,
};
pub use template::{RenderFn, TemplateCache};
