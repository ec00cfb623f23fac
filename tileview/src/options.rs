use alloc::string::String;
use alloc::sync::Arc;

use crate::{Size, TileViewEvent};

/// Fired when the scroll position crosses the near-end threshold.
pub type OnScrollEndCallback = Arc<dyn Fn() + Send + Sync>;

/// Receives layout and scroll start/end notifications.
pub type OnEventCallback = Arc<dyn Fn(TileViewEvent) + Send + Sync>;

/// How `overflow_rows` contributes to the resident row count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPadding {
    /// Overflow is counted once, as a single trailing pad.
    Leading,
    /// Overflow pads both scroll directions and is counted twice.
    #[default]
    Symmetric,
}

impl OverflowPadding {
    pub fn resident_rows(self, overflow_rows: usize) -> usize {
        match self {
            Self::Leading => overflow_rows,
            Self::Symmetric => overflow_rows.saturating_mul(2),
        }
    }
}

/// Configuration for [`crate::TileView`].
///
/// Cheap to clone: callbacks live in `Arc`s.
#[derive(Clone)]
pub struct TileViewOptions {
    /// Template key handed to [`crate::SlotBinder::compile_template`].
    pub template: Option<String>,
    pub tile_size: Size,
    /// Stack tiles along the x axis (one item per row) instead of a vertical grid.
    pub align_horizontal: bool,
    /// Rows rendered beyond the viewport to mask pop-in while scrolling.
    pub overflow_rows: usize,
    pub overflow_padding: OverflowPadding,
    /// Fire `on_scroll_end` this many rows before the end of the data.
    pub scroll_end_offset_rows: usize,
    /// Scroll refresh debounce. `0` coalesces refreshes into the next animation frame instead.
    pub debounce_ms: u64,
    /// Idle time after the last scroll event before `ScrollEnd` is emitted.
    ///
    /// `None` disables scroll start/end notifications.
    pub after_scroll_idle_ms: Option<u64>,
    /// Debounce for [`crate::TileView::request_resize`].
    pub resize_debounce_ms: u64,
    /// Invoked when the user scrolls to the end of the data.
    pub on_scroll_end: Option<OnScrollEndCallback>,
    pub on_event: Option<OnEventCallback>,
}

impl Default for TileViewOptions {
    fn default() -> Self {
        Self {
            template: None,
            tile_size: Size::new(100, 100),
            align_horizontal: false,
            overflow_rows: 2,
            overflow_padding: OverflowPadding::Symmetric,
            scroll_end_offset_rows: 0,
            debounce_ms: 0,
            after_scroll_idle_ms: Some(100),
            resize_debounce_ms: 50,
            on_scroll_end: None,
            on_event: None,
        }
    }
}

impl TileViewOptions {
    pub fn new(template: impl Into<String>, tile_size: Size) -> Self {
        Self {
            template: Some(template.into()),
            tile_size,
            ..Self::default()
        }
    }

    pub fn with_template(mut self, template: Option<impl Into<String>>) -> Self {
        self.template = template.map(Into::into);
        self
    }

    pub fn with_tile_size(mut self, tile_size: Size) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_align_horizontal(mut self, align_horizontal: bool) -> Self {
        self.align_horizontal = align_horizontal;
        self
    }

    pub fn with_overflow_rows(mut self, overflow_rows: usize) -> Self {
        self.overflow_rows = overflow_rows;
        self
    }

    pub fn with_overflow_padding(mut self, overflow_padding: OverflowPadding) -> Self {
        self.overflow_padding = overflow_padding;
        self
    }

    pub fn with_scroll_end_offset_rows(mut self, rows: usize) -> Self {
        self.scroll_end_offset_rows = rows;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_after_scroll_idle_ms(mut self, idle_ms: Option<u64>) -> Self {
        self.after_scroll_idle_ms = idle_ms;
        self
    }

    pub fn with_resize_debounce_ms(mut self, resize_debounce_ms: u64) -> Self {
        self.resize_debounce_ms = resize_debounce_ms;
        self
    }

    pub fn with_on_scroll_end(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_scroll_end = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_event(
        mut self,
        f: Option<impl Fn(TileViewEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_event = f.map(|f| Arc::new(f) as _);
        self
    }

    /// Extra rows added to the viewport row count.
    pub fn overflow_resident_rows(&self) -> usize {
        self.overflow_padding.resident_rows(self.overflow_rows)
    }
}

impl core::fmt::Debug for TileViewOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TileViewOptions")
            .field("template", &self.template)
            .field("tile_size", &self.tile_size)
            .field("align_horizontal", &self.align_horizontal)
            .field("overflow_rows", &self.overflow_rows)
            .field("overflow_padding", &self.overflow_padding)
            .field("scroll_end_offset_rows", &self.scroll_end_offset_rows)
            .field("debounce_ms", &self.debounce_ms)
            .field("after_scroll_idle_ms", &self.after_scroll_idle_ms)
            .field("resize_debounce_ms", &self.resize_debounce_ms)
            .finish_non_exhaustive()
    }
}
