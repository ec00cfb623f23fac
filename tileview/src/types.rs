/// The scroll axis of a tile view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Tiles flow in a grid, rows stack top to bottom.
    #[default]
    Vertical,
    /// Tiles are stacked left to right, one item per row.
    Horizontal,
}

impl Axis {
    pub fn from_align_horizontal(align_horizontal: bool) -> Self {
        if align_horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Inline text direction of the scroll container.
///
/// Only relevant for horizontal layouts: right-to-left containers place rows at negative
/// offsets along the x axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Width/height pair used for both the container and a single tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size along the scroll axis.
    pub fn main(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }

    /// Size across the scroll axis.
    pub fn cross(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Vertical => self.width,
            Axis::Horizontal => self.height,
        }
    }
}

/// Derived row geometry. Recomputed from scratch on every layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Always `>= 1`.
    pub items_per_row: usize,
    pub row_count: usize,
    /// Number of row slots kept alive, independent of `row_count`.
    pub resident_row_count: usize,
}

impl LayoutConfig {
    /// Number of item slots the pool holds for this layout.
    pub fn resident_slot_count(&self) -> usize {
        self.resident_row_count.saturating_mul(self.items_per_row)
    }

    /// Number of item slots that are bound to an existing row.
    pub fn bound_slot_count(&self) -> usize {
        self.resident_row_count
            .min(self.row_count)
            .saturating_mul(self.items_per_row)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_row: usize,
    pub end_row: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_row: 0,
        end_row: 0,
    };

    pub fn new(start_row: usize, end_row: usize) -> Self {
        debug_assert!(start_row <= end_row, "inverted range ({start_row}..{end_row})");
        Self { start_row, end_row }
    }

    pub fn len(&self) -> usize {
        self.end_row.saturating_sub(self.start_row)
    }

    pub fn is_empty(&self) -> bool {
        self.start_row >= self.end_row
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.start_row && row < self.end_row
    }

    pub fn overlaps(&self, other: &VisibleRange) -> bool {
        self.start_row < other.end_row && other.start_row < self.end_row
    }
}

/// Where a row sits along the scroll axis.
///
/// `offset` is signed: horizontal right-to-left layouts grow towards negative x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowPlacement {
    pub axis: Axis,
    pub offset: i64,
}

/// What an item slot should display after a rebind.
#[derive(Debug)]
pub enum TileBinding<'a, T> {
    /// The slot shows `item`, which lives at `index` in the item sequence.
    Item { index: usize, item: &'a T },
    /// Past the end of the data (sparse tail, or a row beyond `row_count`). The slot stays alive
    /// but must render nothing.
    Hidden,
}

impl<T> Clone for TileBinding<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TileBinding<'_, T> {}

impl<'a, T> TileBinding<'a, T> {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Item { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Item { index, .. } => Some(*index),
            Self::Hidden => None,
        }
    }

    pub fn item(&self) -> Option<&'a T> {
        match self {
            Self::Item { item, .. } => Some(item),
            Self::Hidden => None,
        }
    }
}

/// Outbound notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileViewEvent {
    /// Emitted after a layout pass that rebuilt the resident rows.
    LayoutChanged(LayoutConfig),
    /// The first scroll event after an idle period.
    ScrollStart,
    /// No scroll event arrived for `after_scroll_idle_ms`.
    ScrollEnd,
}

/// Lifecycle of a [`crate::TileView`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// No items, or no resolvable template yet.
    #[default]
    Uninitialized,
    Ready,
    Destroyed,
}
