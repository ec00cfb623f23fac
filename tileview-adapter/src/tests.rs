use crate::*;

use std::collections::BTreeSet;
use std::format;
use std::string::{String, ToString};
use std::vec;
use std::vec::Vec;

use tileview::{Axis, EngineState, Size, TextDirection, TileView, TileViewError, TileViewOptions};

type View = TileView<String, HeadlessBinder<String>>;

fn binder() -> HeadlessBinder<String> {
    HeadlessBinder::new(TemplateCache::new().with("item", |name: &String, _| name.clone()))
}

fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("name {i}")).collect()
}

fn scenario(count: usize, overflow_rows: usize) -> View {
    let options =
        TileViewOptions::new("item", Size::new(100, 100)).with_overflow_rows(overflow_rows);
    let mut tv = TileView::new(options, binder());
    tv.resize(Size::new(400, 400), 0).unwrap();
    tv.set_items(names(count)).unwrap();
    tv
}

fn offsets(tv: &View) -> Vec<Option<i64>> {
    snapshot(tv)
        .iter()
        .map(|row| row.row.placement.map(|p| p.offset))
        .collect()
}

fn assert_unique_bindings(tv: &View) {
    let mut rows = BTreeSet::new();
    let mut items = BTreeSet::new();
    for row in snapshot(tv) {
        if let Some(bound) = row.bound_row {
            assert!(rows.insert(bound), "row {bound} bound twice");
        }
        for tile in row.tiles.iter().filter(|t| t.visible) {
            let index = tile.index.unwrap();
            assert!(items.insert(index), "item {index} shown twice");
            assert_eq!(tile.text, format!("name {index}"));
        }
    }
}

#[test]
fn scenario_a_first_rows() {
    let tv = scenario(25, 0);
    assert_eq!(tv.state(), EngineState::Ready);
    assert_eq!(offsets(&tv), vec![Some(0), Some(100), Some(200), Some(300)]);

    let rows = snapshot(&tv);
    let texts: Vec<_> = rows[0].tiles.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["name 0", "name 1", "name 2", "name 3"]);
    assert!(rows.iter().all(|r| r.row.tile_count == 4));
    assert_eq!(visible_texts(&tv).len(), 16);

    let stats = tv.binder().stats();
    assert_eq!(stats.rows_live, 4);
    assert_eq!(stats.tiles_live, 16);
    assert_eq!(tv.binder().content_extent(), Some((Axis::Vertical, 700)));
    assert_eq!(tv.binder().active_template(), Some("item"));
}

#[test]
fn scenario_b_scroll_rotates_rows() {
    let mut tv = scenario(25, 0);
    let ids_before: Vec<u64> = snapshot(&tv).iter().map(|r| r.row.id).collect();

    tv.on_scroll(300, 0).unwrap();
    tv.animation_frame().unwrap();

    assert_eq!(offsets(&tv), vec![Some(400), Some(500), Some(600), Some(300)]);
    let rows = snapshot(&tv);
    // No row was created or destroyed: the tree keeps its order.
    assert_eq!(rows.iter().map(|r| r.row.id).collect::<Vec<_>>(), ids_before);

    let tail = &rows[2];
    assert_eq!(tail.bound_row, Some(6));
    assert_eq!(tail.tiles[0].text, "name 24");
    assert!(tail.tiles[0].visible);
    assert!(tail.tiles[1..].iter().all(|t| !t.visible && t.index.is_none()));

    assert_eq!(visible_texts(&tv).first().map(String::as_str), Some("name 12"));
    assert_eq!(visible_texts(&tv).len(), 13);
    assert_eq!(tv.binder().stats().tiles_created, 16);
    assert_unique_bindings(&tv);
}

#[test]
fn scenario_c_overflow_rows() {
    let tv = scenario(25, 2);
    let rows = snapshot(&tv);
    assert_eq!(rows.len(), 8);
    assert_eq!(tv.binder().stats().tiles_live, 32);
    // Only seven data rows exist; the last resident row renders nothing.
    assert_eq!(rows[7].bound_row, None);
    assert_eq!(rows[7].row.placement, None);
    assert!(rows[7].tiles.iter().all(|t| !t.visible));
    assert_eq!(visible_texts(&tv).len(), 25);
    assert_unique_bindings(&tv);
}

#[test]
fn scenario_d_container_shrinks() {
    let mut tv = scenario(25, 0);
    tv.on_scroll(200, 0).unwrap();
    tv.animation_frame().unwrap();

    assert_eq!(tv.resize(Size::new(100, 400), 10), Ok(true));
    let layout = tv.layout().unwrap();
    assert_eq!(layout.items_per_row, 1);
    assert_eq!(layout.row_count, 25);

    let rows = snapshot(&tv);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.tiles.len() == 1 && r.row.tile_count == 1));
    assert_eq!(tv.binder().stats().tiles_live, 4);
    assert_eq!(visible_texts(&tv), ["name 2", "name 3", "name 4", "name 5"]);
    // The resize refreshed every remaining tile.
    assert!(rows.iter().all(|r| r.tiles[0].paints >= 1));
    assert_unique_bindings(&tv);

    for offset in [900, 2_100, 50, 1_300] {
        tv.on_scroll(offset, 20).unwrap();
        tv.animation_frame().unwrap();
        assert_unique_bindings(&tv);
    }
}

#[test]
fn template_registered_later_is_picked_up() {
    let options = TileViewOptions::new("card", Size::new(100, 100)).with_overflow_rows(0);
    let mut tv = TileView::new(options, binder());
    tv.resize(Size::new(400, 400), 0).unwrap();
    tv.set_items(names(8)).unwrap();
    assert_eq!(tv.state(), EngineState::Uninitialized);
    assert_eq!(tv.binder().active_template(), None);
    assert_eq!(tv.binder().stats().tiles_created, 0);

    tv.binder_mut()
        .templates_mut()
        .register("card", |name: &String, index| format!("#{index} {name}"));
    assert_eq!(tv.update_options(|_| {}), Ok(true));
    assert_eq!(tv.state(), EngineState::Ready);
    assert_eq!(visible_texts(&tv)[..2], ["#0 name 0", "#1 name 1"]);
}

#[test]
fn switching_template_renders_new_text() {
    let mut tv = scenario(8, 0);
    tv.binder_mut()
        .templates_mut()
        .register("upper", |name: &String, _| name.to_uppercase());
    tv.update_options(|o| o.template = Some("upper".to_string()))
        .unwrap();
    assert_eq!(tv.binder().active_template(), Some("upper"));
    assert_eq!(visible_texts(&tv)[0], "NAME 0");
    // The old rows were torn down and rebuilt.
    assert_eq!(tv.binder().stats().rows_created, 8);
    assert_eq!(tv.binder().stats().rows_live, 4);
}

#[test]
fn rtl_horizontal_tree() {
    let options = TileViewOptions::new("item", Size::new(100, 100))
        .with_overflow_rows(0)
        .with_align_horizontal(true);
    let mut tv = TileView::new(options, binder());
    tv.resize(Size::new(400, 100), 0).unwrap();
    tv.set_direction(TextDirection::Rtl, 0).unwrap();
    tv.set_items(names(10)).unwrap();

    assert_eq!(offsets(&tv), vec![Some(0), Some(-100), Some(-200), Some(-300)]);
    assert_eq!(tv.binder().content_extent(), Some((Axis::Horizontal, 1_000)));
    assert!(snapshot(&tv).iter().all(|r| r.tiles.len() == 1));
}

#[test]
fn destroy_releases_the_tree() {
    let mut tv = scenario(25, 2);
    tv.destroy();
    assert!(snapshot(&tv).is_empty());
    let stats = tv.binder().stats();
    assert_eq!(stats.rows_live, 0);
    assert_eq!(stats.tiles_live, 0);
    assert_eq!(tv.on_scroll(0, 0), Err(TileViewError::Destroyed));
}

#[test]
fn template_cache_registration() {
    let mut cache = TemplateCache::<u32>::new();
    assert!(cache.is_empty());
    assert!(cache.register("a", |v, _| format!("{v}")).is_none());
    assert!(cache.register("a", |v, _| format!("{v}!")).is_some());
    cache.register("b", |_, i| format!("{i}"));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.names().collect::<Vec<_>>(), ["a", "b"]);

    let render = cache.get("a").unwrap();
    assert_eq!(render(&7, 0), "7!");
    assert!(cache.remove("a").is_some());
    assert!(!cache.contains("a"));
}
