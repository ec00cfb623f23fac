use alloc::string::String;
use alloc::vec::Vec;

use tileview::{Axis, BindError, RowPlacement, Size, SlotBinder, TileBinding, TileView};

use crate::{RenderFn, TemplateCache};

/// A row container in the headless tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowNode {
    pub id: u64,
    /// `None` until the row is first bound to a data row.
    pub placement: Option<RowPlacement>,
    pub tile_count: usize,
}

/// A tile in the headless tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileNode {
    pub id: u64,
    /// Id of the row the tile was attached to.
    pub row_id: u64,
    pub index: Option<usize>,
    /// Output of the active template for the bound item. Kept while hidden.
    pub text: String,
    pub visible: bool,
    pub size: Size,
    /// Number of visual refreshes since creation.
    pub paints: u64,
}

/// Lifetime counters kept by [`HeadlessBinder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinderStats {
    pub rows_live: usize,
    pub tiles_live: usize,
    pub rows_created: usize,
    pub tiles_created: usize,
    pub binds: usize,
    pub refreshes: usize,
}

/// An in-memory rendering collaborator.
///
/// Rows and tiles are plain nodes owned by the view's slot pool, so the pool in creation order is
/// the retained tree a DOM-like host would hold. Use [`snapshot`] to read it back.
pub struct HeadlessBinder<T> {
    templates: TemplateCache<T>,
    active: Option<(String, RenderFn<T>)>,
    next_id: u64,
    stats: BinderStats,
    content_extent: Option<(Axis, u64)>,
}

impl<T> HeadlessBinder<T> {
    pub fn new(templates: TemplateCache<T>) -> Self {
        Self {
            templates,
            active: None,
            next_id: 0,
            stats: BinderStats::default(),
            content_extent: None,
        }
    }

    pub fn templates(&self) -> &TemplateCache<T> {
        &self.templates
    }

    /// Templates registered here are picked up the next time the view resolves its template
    /// (e.g. through `TileView::update_options`).
    pub fn templates_mut(&mut self) -> &mut TemplateCache<T> {
        &mut self.templates
    }

    /// Name of the template slots are currently rendered with.
    pub fn active_template(&self) -> Option<&str> {
        self.active.as_ref().map(|(name, _)| name.as_str())
    }

    pub fn stats(&self) -> BinderStats {
        self.stats
    }

    /// The scrollable extent reported on the last layout pass.
    pub fn content_extent(&self) -> Option<(Axis, u64)> {
        self.content_extent
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl<T> SlotBinder<T> for HeadlessBinder<T> {
    type Row = RowNode;
    type Slot = TileNode;

    fn compile_template(&mut self, template: &str) -> Result<(), BindError> {
        let Some(render) = self.templates.get(template) else {
            self.active = None;
            return Err(BindError::TemplateNotFound(template.into()));
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "tileview_adapter", template, "template compiled");
        self.active = Some((template.into(), render.clone()));
        Ok(())
    }

    fn create_row(&mut self) -> RowNode {
        self.stats.rows_live += 1;
        self.stats.rows_created += 1;
        RowNode {
            id: self.next_id(),
            placement: None,
            tile_count: 0,
        }
    }

    fn release_row(&mut self, _row: RowNode) {
        self.stats.rows_live -= 1;
    }

    fn instantiate(&mut self, row: &mut RowNode, tile_size: Size) -> TileNode {
        row.tile_count += 1;
        self.stats.tiles_live += 1;
        self.stats.tiles_created += 1;
        TileNode {
            id: self.next_id(),
            row_id: row.id,
            index: None,
            text: String::new(),
            visible: false,
            size: tile_size,
            paints: 0,
        }
    }

    fn release(&mut self, row: &mut RowNode, _slot: TileNode) {
        row.tile_count -= 1;
        self.stats.tiles_live -= 1;
    }

    fn bind(&mut self, slot: &mut TileNode, binding: TileBinding<'_, T>) {
        self.stats.binds += 1;
        match binding {
            TileBinding::Item { index, item } => {
                slot.index = Some(index);
                slot.visible = true;
                slot.text = match &self.active {
                    Some((_, render)) => render(item, index),
                    None => String::new(),
                };
            }
            TileBinding::Hidden => {
                slot.index = None;
                slot.visible = false;
            }
        }
    }

    fn place_row(&mut self, row: &mut RowNode, placement: RowPlacement) {
        row.placement = Some(placement);
    }

    fn refresh(&mut self, slot: &mut TileNode) {
        slot.paints += 1;
        self.stats.refreshes += 1;
    }

    fn resize_slot(&mut self, slot: &mut TileNode, tile_size: Size) {
        slot.size = tile_size;
    }

    fn set_content_extent(&mut self, axis: Axis, extent: u64) {
        self.content_extent = Some((axis, extent));
    }
}

impl<T> core::fmt::Debug for HeadlessBinder<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeadlessBinder")
            .field("templates", &self.templates)
            .field("active", &self.active_template())
            .field("stats", &self.stats)
            .field("content_extent", &self.content_extent)
            .finish()
    }
}

/// One row of a [`snapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSnapshot {
    pub row: RowNode,
    /// Data row the resident row renders, `None` when it renders nothing.
    pub bound_row: Option<usize>,
    pub tiles: Vec<TileNode>,
}

/// Copies the resident rows of `view` in creation order (the order a retained tree holds them
/// in, which does not change while scrolling).
pub fn snapshot<T>(view: &TileView<T, HeadlessBinder<T>>) -> Vec<RowSnapshot> {
    let mut rows = Vec::with_capacity(view.pool().row_count());
    view.pool().for_each_row_in_creation_order(|slot| {
        rows.push(RowSnapshot {
            row: slot.row().clone(),
            bound_row: slot.bound_row(),
            tiles: slot.slots().to_vec(),
        });
    });
    rows
}

/// Texts of the visible tiles, in resident order (first row of the window first).
pub fn visible_texts<T>(view: &TileView<T, HeadlessBinder<T>>) -> Vec<String> {
    let mut texts = Vec::new();
    view.pool().for_each_slot(|_, slot| {
        texts.extend(
            slot.slots()
                .iter()
                .filter(|tile| tile.visible)
                .map(|tile| tile.text.clone()),
        );
    });
    texts
}
