use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tileview::{Size, TileView, TileViewOptions};
use tileview_adapter::{HeadlessBinder, TemplateCache, snapshot, visible_texts};

fn main() {
    // Example: an infinite feed driven by a fake frame loop.
    //
    // A host would typically:
    // - forward scroll offsets with on_scroll(offset, now_ms)
    // - call animation_frame() when needs_animation_frame() is set
    // - call tick(now_ms) on a timer (next_deadline_ms() says when)
    // - append items when the near-end callback fires
    let near_end = Arc::new(AtomicBool::new(false));
    let options = TileViewOptions::new("card", Size::new(120, 80))
        .with_scroll_end_offset_rows(2)
        .with_on_scroll_end(Some({
            let near_end = Arc::clone(&near_end);
            move || near_end.store(true, Ordering::Relaxed)
        }))
        .with_on_event(Some(|event| println!("event: {event:?}")));

    let templates = TemplateCache::new().with("card", |title: &String, index| {
        format!("[{index:>3}] {title}")
    });
    let mut tv = TileView::new(options, HeadlessBinder::new(templates));
    tv.resize(Size::new(480, 320), 0).unwrap();

    let mut items: Vec<String> = (0..40).map(|i| format!("post {i}")).collect();
    tv.set_items(items.clone()).unwrap();

    let mut now_ms = 0u64;
    let mut offset = 0u64;
    for _ in 0..120 {
        now_ms += 16;
        offset += 24;
        tv.on_scroll(offset, now_ms).unwrap();
        if tv.needs_animation_frame() {
            tv.animation_frame().unwrap();
        }
        tv.tick(now_ms).unwrap();

        if near_end.swap(false, Ordering::Relaxed) {
            let start = items.len();
            items.extend((start..start + 40).map(|i| format!("post {i}")));
            println!("t={now_ms} loaded more: {} items", items.len());
            tv.set_items(items.clone()).unwrap();
        }
    }

    // Let the scroll-idle deadline pass.
    while let Some(deadline) = tv.next_deadline_ms() {
        now_ms = deadline;
        tv.tick(now_ms).unwrap();
    }

    println!("rendered={:?}", tv.rendered_range());
    println!("first visible={:?}", visible_texts(&tv).first());
    println!("stats={:?}", tv.binder().stats());
    for row in snapshot(&tv) {
        println!("row {} bound={:?} at {:?}", row.row.id, row.bound_row, row.row.placement);
    }
}
