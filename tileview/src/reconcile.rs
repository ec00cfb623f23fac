use crate::layout::Geometry;
use crate::pool::{RowSlot, SlotPool};
use crate::{RowPlacement, SlotBinder, TileBinding, VisibleRange};

/// The minimal set of row rebinds that moves the resident rows from one window to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciliation {
    /// Same window, nothing to rebind.
    Unchanged,
    /// No usable overlap: every resident row is rebound in place.
    Full,
    /// Rows `first..first + count` entered at the trailing edge. Each one reuses the row at the
    /// front of the resident ordering.
    Forward { first: usize, count: usize },
    /// Rows `first - count..first` entered at the leading edge. Each one reuses the row at the
    /// back of the resident ordering.
    Backward { first: usize, count: usize },
}

impl Reconciliation {
    /// Decides how to get from `old` (the rendered window, if any) to `new`.
    pub fn plan(old: Option<VisibleRange>, new: VisibleRange) -> Self {
        let Some(old) = old else {
            return Self::Full;
        };
        if old == new {
            return Self::Unchanged;
        }
        // Rotation keeps the window length; anything else is a layout change.
        if old.len() != new.len() || !old.overlaps(&new) {
            return Self::Full;
        }

        let intersection_start = old.start_row.max(new.start_row);
        let intersection_end = old.end_row.min(new.end_row);
        if new.end_row > intersection_end {
            Self::Forward {
                first: intersection_end,
                count: new.end_row - intersection_end,
            }
        } else if new.start_row < intersection_start {
            Self::Backward {
                first: intersection_start,
                count: intersection_start - new.start_row,
            }
        } else {
            Self::Unchanged
        }
    }

    /// Number of rows this plan rebinds for a pool of `resident_rows` rows.
    pub fn rebind_count(&self, resident_rows: usize) -> usize {
        match *self {
            Self::Unchanged => 0,
            Self::Full => resident_rows,
            Self::Forward { count, .. } | Self::Backward { count, .. } => count,
        }
    }

    /// Applies the plan to `pool`. `bind_row` receives every row that must change together with
    /// its new row index (`None` for positions past the end of the data).
    pub(crate) fn apply<R, S>(
        self,
        pool: &mut SlotPool<R, S>,
        new: VisibleRange,
        mut bind_row: impl FnMut(&mut RowSlot<R, S>, Option<usize>),
    ) {
        match self {
            Self::Unchanged => {}
            Self::Full => {
                pool.for_each_slot_mut(|position, row| {
                    let index = new.start_row.saturating_add(position);
                    bind_row(row, new.contains(index).then_some(index));
                });
            }
            Self::Forward { first, count } => {
                for index in first..first + count {
                    if let Some(row) = pool.rotate_forward() {
                        bind_row(row, Some(index));
                    }
                }
            }
            Self::Backward { first, count } => {
                for index in (first - count..first).rev() {
                    if let Some(row) = pool.rotate_backward() {
                        bind_row(row, Some(index));
                    }
                }
            }
        }
    }
}

/// Points every slot of `row` at the items of row `bound` and moves the row into place.
///
/// Slots whose item index is past the end of `items` are hidden, not released. With `refresh`
/// set, each slot's visual output is brought up to date right after its rebind.
pub(crate) fn rebind_row<T, B>(
    binder: &mut B,
    items: &[T],
    geometry: &Geometry,
    row: &mut RowSlot<B::Row, B::Slot>,
    bound: Option<usize>,
    refresh: bool,
) where
    B: SlotBinder<T>,
{
    row.set_bound_row(bound);
    let items_per_row = geometry.layout.items_per_row;
    let (row_handle, slots) = row.parts_mut();

    for (column, slot) in slots.iter_mut().enumerate() {
        let binding = bound
            .map(|r| r * items_per_row + column)
            .and_then(|index| items.get(index).map(|item| TileBinding::Item { index, item }))
            .unwrap_or(TileBinding::Hidden);
        binder.bind(slot, binding);
        if refresh {
            binder.refresh(slot);
        }
    }

    if let Some(r) = bound {
        binder.place_row(
            row_handle,
            RowPlacement {
                axis: geometry.axis,
                offset: geometry.row_offset(r),
            },
        );
    }
}
