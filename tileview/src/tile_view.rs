use alloc::sync::Arc;
use core::cmp;
use core::mem;

use crate::layout::{Geometry, compute_layout};
use crate::pool::SlotPool;
use crate::reconcile::rebind_row;
use crate::{
    Axis, BindError, EngineState, LayoutConfig, Reconciliation, ScrollDirection, ScrollTracker,
    Size, SlotBinder, TextDirection, TileViewError, TileViewEvent, TileViewOptions, Timer,
    VisibleRange,
};

/// A windowed row recycler.
///
/// This type is UI-agnostic:
/// - It keeps a bounded pool of row/item slots created through a [`SlotBinder`].
/// - Your adapter drives it with container sizes, logical scroll offsets and timestamps.
/// - Deferred work is exposed as deadlines (`tick`) and an animation-frame request
///   (`needs_animation_frame` / `animation_frame`).
///
/// Lifecycle: the view starts [`EngineState::Uninitialized`], becomes
/// [`EngineState::Ready`] on the first layout with items and a resolved template, and ends
/// [`EngineState::Destroyed`] after [`TileView::destroy`] (or on drop). Every resident slot is
/// released on teardown.
pub struct TileView<T, B>
where
    B: SlotBinder<T>,
{
    options: TileViewOptions,
    binder: B,
    items: Option<Arc<[T]>>,
    container: Size,
    direction: TextDirection,
    state: EngineState,

    template_ready: bool,
    template_error: Option<BindError>,

    geometry: Option<Geometry>,
    tracker: ScrollTracker,
    scroll_offset: u64,
    scroll_direction: Option<ScrollDirection>,
    rendered: Option<VisibleRange>,
    pool: SlotPool<B::Row, B::Slot>,

    debounce: Timer,
    frame_requested: bool,
    scroll_idle: Timer,
    resize: Timer,
    pending_resize: Option<Size>,
}

impl<T, B> TileView<T, B>
where
    B: SlotBinder<T>,
{
    /// Creates a view and resolves `options.template` right away.
    ///
    /// Nothing is rendered until items are supplied with [`TileView::set_items`].
    pub fn new(options: TileViewOptions, binder: B) -> Self {
        tv_debug!(
            template = ?options.template,
            align_horizontal = options.align_horizontal,
            overflow_rows = options.overflow_rows,
            "TileView::new"
        );
        let tracker = ScrollTracker::new(options.overflow_rows, options.scroll_end_offset_rows);
        let mut tv = Self {
            options,
            binder,
            items: None,
            container: Size::default(),
            direction: TextDirection::Ltr,
            state: EngineState::Uninitialized,
            template_ready: false,
            template_error: None,
            geometry: None,
            tracker,
            scroll_offset: 0,
            scroll_direction: None,
            rendered: None,
            pool: SlotPool::new(),
            debounce: Timer::default(),
            frame_requested: false,
            scroll_idle: Timer::default(),
            resize: Timer::default(),
            pending_resize: None,
        };
        tv.resolve_template();
        tv
    }

    pub fn options(&self) -> &TileViewOptions {
        &self.options
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn binder(&self) -> &B {
        &self.binder
    }

    /// Mutable access to the binder, e.g. to register templates before a retry.
    pub fn binder_mut(&mut self) -> &mut B {
        &mut self.binder
    }

    pub fn pool(&self) -> &SlotPool<B::Row, B::Slot> {
        &self.pool
    }

    pub fn items(&self) -> Option<&Arc<[T]>> {
        self.items.as_ref()
    }

    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, |items| items.len())
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn axis(&self) -> Axis {
        Axis::from_align_horizontal(self.options.align_horizontal)
    }

    /// The layout of the resident rows, once the view has been laid out.
    pub fn layout(&self) -> Option<LayoutConfig> {
        self.geometry.map(|g| g.layout)
    }

    /// The row window the resident rows are currently bound to.
    pub fn rendered_range(&self) -> Option<VisibleRange> {
        self.rendered
    }

    /// The last logical scroll offset reported by the adapter (not clamped).
    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// `true` between `ScrollStart` and `ScrollEnd`.
    pub fn is_scrolling(&self) -> bool {
        self.scroll_idle.is_pending()
    }

    /// The last template resolution failure, if the current template could not be resolved.
    pub fn template_error(&self) -> Option<&BindError> {
        self.template_error.as_ref()
    }

    /// Whether a refresh is waiting for [`TileView::animation_frame`].
    pub fn needs_animation_frame(&self) -> bool {
        self.frame_requested
    }

    /// The earliest pending deadline, for adapters that schedule a single wake-up timer.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        [self.debounce, self.scroll_idle, self.resize]
            .iter()
            .filter_map(Timer::deadline_ms)
            .min()
    }

    /// Replaces the options.
    ///
    /// A changed template key empties the pool and rebuilds with the new template. Layout is
    /// recomputed, but skipped when the resulting geometry is unchanged.
    pub fn set_options(&mut self, options: TileViewOptions) -> Result<bool, TileViewError> {
        self.ensure_alive()?;
        let prev = mem::replace(&mut self.options, options);
        self.tracker.set_overflow_rows(self.options.overflow_rows);
        self.tracker
            .set_scroll_end_offset_rows(self.options.scroll_end_offset_rows);
        tv_trace!(options = ?self.options, "TileView::set_options");

        if prev.template != self.options.template || !self.template_ready {
            self.resolve_template();
        }
        if self.options.after_scroll_idle_ms.is_none() && self.scroll_idle.cancel() {
            // Close the notification pair that was already opened.
            self.scroll_direction = None;
            self.emit(TileViewEvent::ScrollEnd);
        }

        let tile_size = self.options.tile_size;
        let tile_changed = prev.tile_size != tile_size;
        let changed = self.layout_pass(false, false);
        if tile_changed {
            let Self { binder, pool, .. } = self;
            pool.for_each_slot_mut(|_, row| {
                let (_, slots) = row.parts_mut();
                for slot in slots {
                    binder.resize_slot(slot, tile_size);
                }
            });
        }
        Ok(changed)
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut TileViewOptions),
    ) -> Result<bool, TileViewError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Replaces the item sequence and rebinds every resident row.
    ///
    /// The near-end detector is re-armed, so reaching the end of the new data fires again.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) -> Result<(), TileViewError> {
        self.ensure_alive()?;
        let items = items.into();
        tv_debug!(count = items.len(), "TileView::set_items");
        self.items = Some(items);
        self.tracker.reset();
        self.layout_pass(true, false);
        Ok(())
    }

    /// Applies a container resize right away.
    ///
    /// Pending scroll refreshes are based on the old layout: they are cancelled, layout is
    /// recomputed synchronously, then the refresh is rescheduled. When layout changed, every
    /// resident slot is refreshed.
    ///
    /// Returns whether the resident rows were rebuilt.
    pub fn resize(&mut self, container: Size, now_ms: u64) -> Result<bool, TileViewError> {
        self.ensure_alive()?;
        self.resize.cancel();
        self.pending_resize = None;
        Ok(self.apply_resize(container, now_ms))
    }

    /// Requests a debounced resize, e.g. when the host knows the container changed size for a
    /// reason it cannot observe directly. Repeated requests restart the debounce.
    pub fn request_resize(&mut self, container: Size, now_ms: u64) -> Result<(), TileViewError> {
        self.ensure_alive()?;
        self.pending_resize = Some(container);
        self.resize.restart(now_ms, self.options.resize_debounce_ms);
        Ok(())
    }

    /// Recomputes layout for the current container now. Does nothing if the geometry is
    /// unchanged.
    pub fn relayout(&mut self, now_ms: u64) -> Result<bool, TileViewError> {
        let container = self.container;
        self.resize(container, now_ms)
    }

    /// Rebuilds and refreshes every resident row, even when nothing changed.
    pub fn rerender(&mut self) -> Result<(), TileViewError> {
        self.ensure_ready()?;
        self.layout_pass(true, true);
        Ok(())
    }

    pub fn set_direction(
        &mut self,
        direction: TextDirection,
        now_ms: u64,
    ) -> Result<bool, TileViewError> {
        self.ensure_alive()?;
        self.direction = direction;
        self.relayout(now_ms)
    }

    /// Records a logical scroll offset from the adapter and schedules a refresh.
    ///
    /// At most one refresh is pending at a time: a debounce deadline when `debounce_ms > 0`,
    /// otherwise an animation-frame request. Further scroll events only update the offset the
    /// pending refresh will read.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) -> Result<(), TileViewError> {
        self.ensure_ready()?;
        tv_trace!(scroll_offset, now_ms, "TileView::on_scroll");
        self.scroll_direction = match scroll_offset.cmp(&self.scroll_offset) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.scroll_offset = scroll_offset;
        self.detect_scroll_start_end(now_ms);
        self.schedule_refresh(now_ms);
        Ok(())
    }

    /// Runs every deadline that has passed: debounced resize, debounced scroll refresh and the
    /// scroll-idle notification.
    pub fn tick(&mut self, now_ms: u64) -> Result<(), TileViewError> {
        self.ensure_alive()?;
        if self.resize.fire_if_due(now_ms) {
            if let Some(container) = self.pending_resize.take() {
                self.apply_resize(container, now_ms);
            }
        }
        if self.debounce.fire_if_due(now_ms) {
            self.update();
        }
        if self.scroll_idle.fire_if_due(now_ms) {
            self.scroll_direction = None;
            self.emit(TileViewEvent::ScrollEnd);
        }
        Ok(())
    }

    /// Runs the refresh requested by a scroll event, if any.
    pub fn animation_frame(&mut self) -> Result<(), TileViewError> {
        self.ensure_alive()?;
        if mem::take(&mut self.frame_requested) {
            self.update();
        }
        Ok(())
    }

    /// Tears the view down: cancels every timer and releases every slot.
    ///
    /// Idempotent. Every later operation returns [`TileViewError::Destroyed`].
    pub fn destroy(&mut self) {
        if self.state == EngineState::Destroyed {
            return;
        }
        self.debounce.cancel();
        self.scroll_idle.cancel();
        self.resize.cancel();
        self.frame_requested = false;
        self.pending_resize = None;
        self.pool.clear::<T, B>(&mut self.binder);
        self.rendered = None;
        self.geometry = None;
        self.state = EngineState::Destroyed;
        tv_debug!("TileView::destroy");
    }

    fn ensure_alive(&self) -> Result<(), TileViewError> {
        if self.state == EngineState::Destroyed {
            tv_warn!("operation on a destroyed tile view");
            return Err(TileViewError::Destroyed);
        }
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), TileViewError> {
        self.ensure_alive()?;
        if self.state != EngineState::Ready {
            tv_warn!(state = ?self.state, "operation before the tile view is ready");
            return Err(TileViewError::NotReady);
        }
        Ok(())
    }

    fn resolve_template(&mut self) {
        let result = match self.options.template.as_deref() {
            Some(template) => self.binder.compile_template(template),
            None => Err(BindError::NoTemplate),
        };

        // Slots built from the previous template are stale either way.
        self.pool.clear::<T, B>(&mut self.binder);
        self.rendered = None;

        match result {
            Ok(()) => {
                self.template_ready = true;
                self.template_error = None;
            }
            Err(err) => {
                tv_error!(error = %err, "template could not be resolved");
                self.template_ready = false;
                self.template_error = Some(err);
                self.geometry = None;
                if self.state == EngineState::Ready {
                    self.state = EngineState::Uninitialized;
                }
                self.debounce.cancel();
                self.frame_requested = false;
            }
        }
    }

    fn apply_resize(&mut self, container: Size, now_ms: u64) -> bool {
        self.container = container;
        let had_pending = self.debounce.cancel() | mem::take(&mut self.frame_requested);
        let changed = self.layout_pass(false, true);
        if had_pending && self.state == EngineState::Ready {
            self.schedule_refresh(now_ms);
        }
        changed
    }

    fn schedule_refresh(&mut self, now_ms: u64) {
        // One pending refresh at most, even across a `debounce_ms` change.
        if self.frame_requested || self.debounce.is_pending() {
            return;
        }
        if self.options.debounce_ms > 0 {
            self.debounce.start_if_idle(now_ms, self.options.debounce_ms);
        } else {
            self.frame_requested = true;
        }
    }

    fn detect_scroll_start_end(&mut self, now_ms: u64) {
        let Some(idle_ms) = self.options.after_scroll_idle_ms else {
            return;
        };
        if !self.scroll_idle.is_pending() {
            self.emit(TileViewEvent::ScrollStart);
        }
        self.scroll_idle.restart(now_ms, idle_ms);
    }

    fn emit(&self, event: TileViewEvent) {
        if let Some(cb) = &self.options.on_event {
            cb(event);
        }
    }

    fn fire_scroll_end(&self) {
        tv_debug!(scroll_offset = self.scroll_offset, "near end of data");
        if let Some(cb) = &self.options.on_scroll_end {
            cb();
        }
    }

    /// Recomputes the layout. Unless `force` is set, nothing happens when the geometry matches
    /// the one the resident rows were built for.
    ///
    /// Returns whether the resident rows were rebuilt.
    fn layout_pass(&mut self, force: bool, refresh: bool) -> bool {
        if !self.template_ready {
            return false;
        }
        let Some(items) = self.items.clone() else {
            return false;
        };

        let axis = self.axis();
        let layout = compute_layout(
            self.container,
            self.options.tile_size,
            items.len(),
            self.options.overflow_resident_rows(),
            axis,
        );
        let geometry = Geometry {
            layout,
            tile: self.options.tile_size,
            axis,
            direction: self.direction,
            overflow_rows: self.tracker.overflow_rows(),
        };

        if !force && self.rendered.is_some() && self.geometry == Some(geometry) {
            tv_trace!(?layout, "layout unchanged");
            return false;
        }
        tv_debug!(?layout, force, "TileView::layout");

        self.geometry = Some(geometry);
        self.create_elements(&items, geometry, refresh);
        self.binder.set_content_extent(axis, geometry.content_extent());
        if self.state == EngineState::Uninitialized {
            self.state = EngineState::Ready;
        }
        self.emit(TileViewEvent::LayoutChanged(layout));
        true
    }

    /// Brings the pool to the resident count and binds every row to the current window.
    ///
    /// The structural change is complete before any slot is bound or refreshed.
    fn create_elements(&mut self, items: &[T], geometry: Geometry, refresh: bool) {
        let window = self.tracker.update(
            self.scroll_offset,
            &geometry.layout,
            geometry.tile_main(),
            self.container.main(geometry.axis),
        );
        if window.near_end {
            self.fire_scroll_end();
        }

        let layout = geometry.layout;
        self.pool.resize::<T, B>(
            &mut self.binder,
            layout.resident_row_count,
            layout.items_per_row,
            geometry.tile,
        );

        let range = window.range;
        let Self { binder, pool, .. } = self;
        Reconciliation::Full.apply(pool, range, |row, bound| {
            rebind_row(binder, items, &geometry, row, bound, false);
        });
        if refresh {
            pool.for_each_slot_mut(|_, row| {
                let (_, slots) = row.parts_mut();
                for slot in slots {
                    binder.refresh(slot);
                }
            });
        }
        self.rendered = Some(range);
    }

    /// Moves the resident rows to the window for the current scroll offset.
    fn update(&mut self) {
        if self.state != EngineState::Ready {
            return;
        }
        let (Some(geometry), Some(items)) = (self.geometry, self.items.clone()) else {
            return;
        };

        let window = self.tracker.update(
            self.scroll_offset,
            &geometry.layout,
            geometry.tile_main(),
            self.container.main(geometry.axis),
        );
        if window.near_end {
            self.fire_scroll_end();
        }

        let range = window.range;
        let plan = Reconciliation::plan(self.rendered, range);
        let Self { binder, pool, .. } = self;
        tv_trace!(?plan, ?range, "TileView::update");
        plan.apply(pool, range, |row, bound| {
            rebind_row(binder, &items, &geometry, row, bound, true);
        });
        self.rendered = Some(range);
    }
}

impl<T, B> Drop for TileView<T, B>
where
    B: SlotBinder<T>,
{
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T, B> core::fmt::Debug for TileView<T, B>
where
    B: SlotBinder<T>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TileView")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("item_count", &self.item_count())
            .field("container", &self.container)
            .field("direction", &self.direction)
            .field("layout", &self.layout())
            .field("rendered", &self.rendered)
            .field("scroll_offset", &self.scroll_offset)
            .field("resident_rows", &self.pool.row_count())
            .finish_non_exhaustive()
    }
}
