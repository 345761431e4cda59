//! Integration tests for splitter dragging in mirrored layouts
//!
//! Two equal tabsets share a 210px row with a 10px splitter. Under
//! right-to-left layout the logically second tabset sits on the left, and
//! dragging the splitter must still grow whichever tabset the pointer moves
//! away from.

use dock_model::{Model, Rect};
use layout_engine::{
    apply_weights, calc_min_max_size, calculate_split, set_rect, splitter_bounds,
    splitter_initials, LayoutError,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn two_tabsets(rtl: bool) -> Model {
    init_tracing();
    let mut model = Model::from_value(json!({
        "global": { "enableRtl": rtl, "splitterSize": 10 },
        "layout": {
            "type": "row",
            "id": "root",
            "children": [
                { "type": "tabset", "id": "ts1", "weight": 50,
                  "children": [ { "type": "tab", "id": "tab1", "name": "One" } ] },
                { "type": "tabset", "id": "ts2", "weight": 50,
                  "children": [ { "type": "tab", "id": "tab2", "name": "Two" } ] }
            ]
        }
    }))
    .unwrap();
    calc_min_max_size(&mut model).unwrap();
    set_rect(&mut model, "root", Rect::new(0.0, 0.0, 210.0, 100.0)).unwrap();
    model
}

#[test]
fn test_rtl_flag_follows_global_config() {
    let model = Model::from_value(json!({
        "global": { "enableRtl": true },
        "layout": { "type": "row", "children": [] }
    }))
    .unwrap();
    assert!(model.is_rtl());

    let model = Model::from_value(json!({
        "global": {},
        "layout": { "type": "row", "children": [] }
    }))
    .unwrap();
    assert!(!model.is_rtl());
}

#[test]
fn test_rtl_children_are_placed_right_to_left() {
    let model = two_tabsets(true);
    assert_eq!(model.rect_of("ts2"), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
    assert_eq!(model.rect_of("ts1"), Some(Rect::new(110.0, 0.0, 100.0, 100.0)));
    assert_eq!(model.rect_of("tab1"), model.rect_of("ts1"));
    assert_eq!(model.get_node("ts2").unwrap().rect(), model.rect_of("tab2"));
}

#[test]
fn test_rtl_bounds_and_initials() {
    let model = two_tabsets(true);

    assert_eq!(splitter_bounds(&model, "root", 1).unwrap(), (0.0, 200.0));

    let initials = splitter_initials(&model, "root", 1).unwrap();
    assert_eq!(initials.initial_sizes, vec![100.0, 100.0]);
    assert_eq!(initials.sum, 200.0);
    assert_eq!(initials.start_position, 100.0);
}

#[test]
fn test_rtl_split_reflects_pointer() {
    let model = two_tabsets(true);

    // dragging right shrinks the tabset on the right, which is ts1
    let weights = calculate_split(&model, "root", 1, 150.0, &[100.0, 100.0], 200.0, 100.0).unwrap();
    assert_eq!(weights, vec![25.0, 75.0]);

    let weights = calculate_split(&model, "root", 1, 50.0, &[100.0, 100.0], 200.0, 100.0).unwrap();
    assert_eq!(weights, vec![75.0, 25.0]);
}

#[test]
fn test_ltr_split_is_the_mirror_image() {
    let model = two_tabsets(false);
    assert_eq!(model.rect_of("ts1"), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));

    let initials = splitter_initials(&model, "root", 1).unwrap();
    assert_eq!(initials.start_position, 100.0);

    let weights = calculate_split(
        &model,
        "root",
        1,
        150.0,
        &initials.initial_sizes,
        initials.sum,
        initials.start_position,
    )
    .unwrap();
    assert_eq!(weights, vec![75.0, 25.0]);
}

#[test]
fn test_drag_round_trip_updates_geometry() {
    let mut model = two_tabsets(true);
    let initials = splitter_initials(&model, "root", 1).unwrap();

    let weights = calculate_split(
        &model,
        "root",
        1,
        150.0,
        &initials.initial_sizes,
        initials.sum,
        initials.start_position,
    )
    .unwrap();
    apply_weights(&mut model, "root", &weights).unwrap();
    set_rect(&mut model, "root", Rect::new(0.0, 0.0, 210.0, 100.0)).unwrap();

    // the splitter now sits where the pointer let go
    assert_eq!(model.rect_of("ts2"), Some(Rect::new(0.0, 0.0, 150.0, 100.0)));
    assert_eq!(model.rect_of("ts1"), Some(Rect::new(160.0, 0.0, 50.0, 100.0)));
    assert_eq!(splitter_initials(&model, "root", 1).unwrap().start_position, 150.0);
}

#[test]
fn test_splitter_queries_reject_bad_input() {
    let model = two_tabsets(true);

    assert!(matches!(
        splitter_bounds(&model, "root", 0),
        Err(LayoutError::InvalidSplitterIndex { index: 0, .. })
    ));
    assert!(matches!(
        splitter_initials(&model, "root", 2),
        Err(LayoutError::InvalidSplitterIndex { child_count: 2, .. })
    ));
    assert!(matches!(
        splitter_bounds(&model, "ts1", 1),
        Err(LayoutError::NotARow(_))
    ));
    assert!(matches!(
        calculate_split(&model, "root", 1, 150.0, &[100.0], 100.0, 100.0),
        Err(LayoutError::SnapshotMismatch { expected: 2, actual: 1 })
    ));
}
