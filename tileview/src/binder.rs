use crate::{Axis, BindError, RowPlacement, Size, TileBinding};

/// The rendering collaborator.
///
/// The engine never builds visual output itself. It asks the binder to create and destroy row
/// containers and item slots, to rebind slots to items, and to move rows along the scroll axis.
///
/// A binder owns whatever per-slot context its slots need (a component scope, a widget state, a
/// DOM node handle, ...). Everything handed out by `create_row`/`instantiate` is handed back
/// through `release_row`/`release` exactly once.
pub trait SlotBinder<T> {
    /// A row container, holding `items_per_row` slots.
    type Row;
    /// A single item slot.
    type Slot;

    /// Resolves a template handle. Slots are only instantiated after this succeeded.
    fn compile_template(&mut self, template: &str) -> Result<(), BindError>;

    fn create_row(&mut self) -> Self::Row;

    fn release_row(&mut self, row: Self::Row);

    /// Creates a new slot sized `tile_size` and attaches it to the end of `row`.
    fn instantiate(&mut self, row: &mut Self::Row, tile_size: Size) -> Self::Slot;

    /// Detaches `slot` from `row` and disposes its binding context.
    fn release(&mut self, row: &mut Self::Row, slot: Self::Slot);

    /// Points `slot` at a new item (or hides it). Must not do expensive visual work when that
    /// can be deferred to [`SlotBinder::refresh`].
    fn bind(&mut self, slot: &mut Self::Slot, binding: TileBinding<'_, T>);

    fn place_row(&mut self, row: &mut Self::Row, placement: RowPlacement);

    /// Brings the visual output of `slot` up to date with its binding.
    fn refresh(&mut self, _slot: &mut Self::Slot) {}

    fn resize_slot(&mut self, _slot: &mut Self::Slot, _tile_size: Size) {}

    /// Total scrollable extent along `axis`, updated on every layout pass.
    fn set_content_extent(&mut self, _axis: Axis, _extent: u64) {}
}
