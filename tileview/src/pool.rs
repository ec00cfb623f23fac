use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{Size, SlotBinder};

/// A resident row: one row container plus its item slots.
#[derive(Debug)]
pub struct RowSlot<R, S> {
    row: R,
    slots: Vec<S>,
    bound_row: Option<usize>,
}

impl<R, S> RowSlot<R, S> {
    pub fn row(&self) -> &R {
        &self.row
    }

    pub fn slots(&self) -> &[S] {
        &self.slots
    }

    /// The row index this slot renders, or `None` when it renders nothing.
    pub fn bound_row(&self) -> Option<usize> {
        self.bound_row
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut R, &mut [S]) {
        (&mut self.row, &mut self.slots)
    }

    pub(crate) fn set_bound_row(&mut self, bound_row: Option<usize>) {
        self.bound_row = bound_row;
    }
}

/// Slot creation/release counts from a [`SlotPool::resize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolDelta {
    pub rows_created: usize,
    pub rows_released: usize,
    pub slots_created: usize,
    pub slots_released: usize,
}

impl PoolDelta {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Owns every resident row and item slot.
///
/// Rows are stored in creation order (`rows`), which is also the order a retained-mode binder
/// keeps them in. The resident ordering used by the reconciler is a ring of indexes into `rows`:
/// the row at ring position `i` renders `start_row + i`. Rotating the ring never touches `rows`.
#[derive(Debug)]
pub struct SlotPool<R, S> {
    rows: Vec<RowSlot<R, S>>,
    ring: VecDeque<usize>,
}

impl<R, S> Default for SlotPool<R, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, S> SlotPool<R, S> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            ring: VecDeque::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(|r| r.slots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Grows or shrinks the pool to `target_rows` rows of `items_per_row` slots each.
    ///
    /// Growth and shrinkage happen at row granularity first (trailing rows are released), then
    /// every row is filled or trimmed to `items_per_row`. The resident ordering is reset to
    /// creation order; callers must rebind every row afterwards.
    pub fn resize<T, B>(
        &mut self,
        binder: &mut B,
        target_rows: usize,
        items_per_row: usize,
        tile_size: Size,
    ) -> PoolDelta
    where
        B: SlotBinder<T, Row = R, Slot = S>,
    {
        let mut delta = PoolDelta::default();

        while self.rows.len() > target_rows {
            let Some(mut row) = self.rows.pop() else {
                break;
            };
            delta.slots_released += row.slots.len();
            while let Some(slot) = row.slots.pop() {
                binder.release(&mut row.row, slot);
            }
            binder.release_row(row.row);
            delta.rows_released += 1;
        }

        while self.rows.len() < target_rows {
            self.rows.push(RowSlot {
                row: binder.create_row(),
                slots: Vec::with_capacity(items_per_row),
                bound_row: None,
            });
            delta.rows_created += 1;
        }

        for row in &mut self.rows {
            while row.slots.len() > items_per_row {
                if let Some(slot) = row.slots.pop() {
                    binder.release(&mut row.row, slot);
                    delta.slots_released += 1;
                }
            }
            while row.slots.len() < items_per_row {
                let slot = binder.instantiate(&mut row.row, tile_size);
                row.slots.push(slot);
                delta.slots_created += 1;
            }
        }

        self.ring.clear();
        self.ring.extend(0..self.rows.len());

        if !delta.is_empty() {
            tv_trace!(
                rows = self.rows.len(),
                items_per_row,
                rows_created = delta.rows_created,
                rows_released = delta.rows_released,
                slots_created = delta.slots_created,
                slots_released = delta.slots_released,
                "SlotPool::resize"
            );
        }
        delta
    }

    /// Releases every row and slot.
    pub fn clear<T, B>(&mut self, binder: &mut B) -> PoolDelta
    where
        B: SlotBinder<T, Row = R, Slot = S>,
    {
        self.resize::<T, B>(binder, 0, 0, Size::default())
    }

    /// The row at resident position `position` (`0` renders the window's first row).
    pub fn slot_at(&self, position: usize) -> Option<&RowSlot<R, S>> {
        let &index = self.ring.get(position)?;
        self.rows.get(index)
    }

    /// Visits rows in resident order.
    pub fn for_each_slot(&self, mut f: impl FnMut(usize, &RowSlot<R, S>)) {
        for (position, &index) in self.ring.iter().enumerate() {
            f(position, &self.rows[index]);
        }
    }

    /// Visits rows in creation order (the order a retained tree holds them in).
    pub fn for_each_row_in_creation_order(&self, mut f: impl FnMut(&RowSlot<R, S>)) {
        for row in &self.rows {
            f(row);
        }
    }

    pub(crate) fn for_each_slot_mut(&mut self, mut f: impl FnMut(usize, &mut RowSlot<R, S>)) {
        let Self { rows, ring } = self;
        for (position, &index) in ring.iter().enumerate() {
            f(position, &mut rows[index]);
        }
    }

    /// Moves the front row to the back and returns it.
    pub(crate) fn rotate_forward(&mut self) -> Option<&mut RowSlot<R, S>> {
        let index = self.ring.pop_front()?;
        self.ring.push_back(index);
        self.rows.get_mut(index)
    }

    /// Moves the back row to the front and returns it.
    pub(crate) fn rotate_backward(&mut self) -> Option<&mut RowSlot<R, S>> {
        let index = self.ring.pop_back()?;
        self.ring.push_front(index);
        self.rows.get_mut(index)
    }
}
