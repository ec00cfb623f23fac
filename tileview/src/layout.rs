use crate::{Axis, LayoutConfig, Size, TextDirection};

/// Computes row geometry for a container/tile pair.
///
/// - `items_per_row` is `1` for horizontal layouts, otherwise the number of whole tiles that fit
///   across the container (never less than `1`).
/// - `resident_row_count` is the number of rows that fit along the scroll axis (rounded up) plus
///   `overflow_rows`. Callers padding both scroll directions pass the doubled overflow.
/// - An empty item sequence yields no rows and no resident rows.
///
/// Tile dimensions must be positive. A zero dimension is treated as `1` rather than dividing by
/// zero.
pub fn compute_layout(
    container: Size,
    tile: Size,
    item_count: usize,
    overflow_rows: usize,
    axis: Axis,
) -> LayoutConfig {
    debug_assert!(
        tile.width > 0 && tile.height > 0,
        "tile size must be positive (got {}x{})",
        tile.width,
        tile.height
    );

    let items_per_row = match axis {
        Axis::Horizontal => 1,
        Axis::Vertical => {
            let tile_cross = tile.cross(axis).max(1);
            (container.cross(axis) / tile_cross).max(1) as usize
        }
    };

    if item_count == 0 {
        return LayoutConfig {
            items_per_row,
            row_count: 0,
            resident_row_count: 0,
        };
    }

    let tile_main = tile.main(axis).max(1);
    let viewport_rows = container.main(axis).div_ceil(tile_main) as usize;

    LayoutConfig {
        items_per_row,
        row_count: item_count.div_ceil(items_per_row),
        resident_row_count: viewport_rows.saturating_add(overflow_rows),
    }
}

/// Everything a rendered row depends on besides its row index.
///
/// Two layout passes producing equal geometry leave every bound slot valid, so the second pass
/// can be skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Geometry {
    pub(crate) layout: LayoutConfig,
    pub(crate) tile: Size,
    pub(crate) axis: Axis,
    pub(crate) direction: TextDirection,
    /// Overflow the window start is shifted by, independent of the resident count.
    pub(crate) overflow_rows: usize,
}

impl Geometry {
    pub(crate) fn tile_main(&self) -> u32 {
        self.tile.main(self.axis).max(1)
    }

    /// Total scrollable extent along the axis.
    pub(crate) fn content_extent(&self) -> u64 {
        (self.layout.row_count as u64).saturating_mul(self.tile_main() as u64)
    }

    /// Visual offset of a row. Horizontal right-to-left rows are placed at negative x.
    pub(crate) fn row_offset(&self, row: usize) -> i64 {
        let offset = (row as i64).saturating_mul(self.tile_main() as i64);
        if self.axis.is_horizontal() && self.direction == TextDirection::Rtl {
            -offset
        } else {
            offset
        }
    }
}
