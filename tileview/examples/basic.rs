// Example: a minimal binder that prints what the engine asks of it.
use tileview::{BindError, RowPlacement, Size, SlotBinder, TileBinding, TileView, TileViewOptions};

#[derive(Default)]
struct PrintBinder {
    next_row: usize,
}

impl SlotBinder<u32> for PrintBinder {
    type Row = usize;
    type Slot = Option<u32>;

    fn compile_template(&mut self, template: &str) -> Result<(), BindError> {
        println!("compile template {template:?}");
        Ok(())
    }

    fn create_row(&mut self) -> usize {
        self.next_row += 1;
        self.next_row - 1
    }

    fn release_row(&mut self, row: usize) {
        println!("release row #{row}");
    }

    fn instantiate(&mut self, _row: &mut usize, _tile_size: Size) -> Option<u32> {
        None
    }

    fn release(&mut self, _row: &mut usize, _slot: Option<u32>) {}

    fn bind(&mut self, slot: &mut Option<u32>, binding: TileBinding<'_, u32>) {
        *slot = binding.item().copied();
    }

    fn place_row(&mut self, row: &mut usize, placement: RowPlacement) {
        println!("row #{row} -> offset {}", placement.offset);
    }
}

fn main() {
    let options = TileViewOptions::new("tile", Size::new(100, 100)).with_overflow_rows(1);
    let mut tv = TileView::new(options, PrintBinder::default());
    tv.resize(Size::new(400, 300), 0).unwrap();
    tv.set_items((0..1_000u32).collect::<Vec<_>>()).unwrap();
    println!("layout={:?}", tv.layout());
    println!("rendered={:?}", tv.rendered_range());

    // Scroll down two rows: only the rows entering view are rebound.
    tv.on_scroll(200, 16).unwrap();
    tv.animation_frame().unwrap();
    println!("rendered={:?}", tv.rendered_range());

    let mut window = Vec::new();
    tv.pool().for_each_slot(|_, row| window.push(row.slots().to_vec()));
    println!("first resident row items={:?}", window.first());
}
