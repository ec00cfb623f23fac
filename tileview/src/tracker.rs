use crate::{LayoutConfig, VisibleRange};

/// Result of feeding one scroll offset to a [`ScrollTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowUpdate {
    pub range: VisibleRange,
    /// The offset after clamping into `[0, max_scroll_offset]`.
    pub offset: u64,
    /// `true` exactly when this update crossed the near-end threshold from below.
    pub near_end: bool,
}

/// Maps scroll offsets to the resident row window.
///
/// Pure arithmetic over scroll state; the only memory is the previous offset, which turns the
/// near-end check into a rising-edge detector.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    overflow_rows: usize,
    scroll_end_offset_rows: usize,
    // `None` reads as "below every threshold".
    last_offset: Option<u64>,
}

impl ScrollTracker {
    pub fn new(overflow_rows: usize, scroll_end_offset_rows: usize) -> Self {
        Self {
            overflow_rows,
            scroll_end_offset_rows,
            last_offset: None,
        }
    }

    pub fn overflow_rows(&self) -> usize {
        self.overflow_rows
    }

    pub fn set_overflow_rows(&mut self, overflow_rows: usize) {
        self.overflow_rows = overflow_rows;
    }

    pub fn scroll_end_offset_rows(&self) -> usize {
        self.scroll_end_offset_rows
    }

    pub fn set_scroll_end_offset_rows(&mut self, rows: usize) {
        self.scroll_end_offset_rows = rows;
    }

    pub fn last_offset(&self) -> Option<u64> {
        self.last_offset
    }

    /// Forgets the previous offset, so the next update at or past the threshold fires again.
    ///
    /// Call this when the item sequence is replaced.
    pub fn reset(&mut self) {
        self.last_offset = None;
    }

    /// Largest reachable scroll offset. `0` when the content fits in the viewport.
    pub fn max_scroll_offset(layout: &LayoutConfig, tile_main: u32, viewport_main: u32) -> u64 {
        let content = (layout.row_count as u64).saturating_mul(tile_main as u64);
        content.saturating_sub(viewport_main as u64)
    }

    /// Offset at or beyond which the near-end notification fires.
    pub fn scroll_end_threshold(&self, max_scroll_offset: u64, tile_main: u32) -> u64 {
        let lead = (self.scroll_end_offset_rows as u64).saturating_mul(tile_main as u64);
        max_scroll_offset.saturating_sub(lead)
    }

    /// Computes the window for `scroll_offset` without touching the tracker state.
    pub fn range_for(
        &self,
        scroll_offset: u64,
        layout: &LayoutConfig,
        tile_main: u32,
    ) -> VisibleRange {
        let tile_main = tile_main.max(1) as u64;
        let first_visible = usize::try_from(scroll_offset / tile_main).unwrap_or(usize::MAX);
        let max_start = layout.row_count.saturating_sub(layout.resident_row_count);
        let start_row = first_visible.saturating_sub(self.overflow_rows).min(max_start);
        let end_row = start_row
            .saturating_add(layout.resident_row_count)
            .min(layout.row_count);
        VisibleRange::new(start_row, end_row)
    }

    pub fn update(
        &mut self,
        scroll_offset: u64,
        layout: &LayoutConfig,
        tile_main: u32,
        viewport_main: u32,
    ) -> WindowUpdate {
        let tile_main = tile_main.max(1);
        let max = Self::max_scroll_offset(layout, tile_main, viewport_main);
        let offset = scroll_offset.min(max);

        let threshold = self.scroll_end_threshold(max, tile_main);
        let was_below = self.last_offset.is_none_or(|prev| prev < threshold);
        let near_end = offset >= threshold && was_below;
        self.last_offset = Some(offset);

        WindowUpdate {
            range: self.range_for(offset, layout, tile_main),
            offset,
            near_end,
        }
    }
}
