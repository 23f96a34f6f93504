use mobotray_core::{merge, to_output_coords, Catalog, Layout, LayoutError, Point2D};

fn scenario_catalog() -> Catalog {
    Catalog::from_json_str(
        r#"{
            "Small": {"size": [170, 170], "holes": [[10, 10]]},
            "Large": {"size": [300, 250], "holes": [[10, 10], [290, 240]]}
        }"#,
    )
    .unwrap()
}

#[test]
fn test_scenario_small_and_large() {
    let merged = merge(&scenario_catalog(), &["Small", "Large"]).unwrap();
    assert_eq!(merged.size, Point2D::new(300.0, 250.0));
    let holes: Vec<Point2D> = merged.holes.iter().copied().collect();
    assert_eq!(
        holes,
        vec![Point2D::new(10.0, 10.0), Point2D::new(290.0, 240.0)]
    );
}

#[test]
fn test_merged_size_may_match_no_single_layout() {
    let mut catalog = Catalog::new();
    catalog.insert("Wide", Layout::new(Point2D::new(300.0, 100.0), vec![]));
    catalog.insert("Tall", Layout::new(Point2D::new(100.0, 250.0), vec![]));

    let merged = merge(&catalog, &["Wide", "Tall"]).unwrap();
    assert_eq!(merged.size, Point2D::new(300.0, 250.0));
}

#[test]
fn test_order_and_duplicates_do_not_matter() {
    let catalog = scenario_catalog();
    let ab = merge(&catalog, &["Small", "Large"]).unwrap();
    let ba = merge(&catalog, &["Large", "Small"]).unwrap();
    let aa = merge(&catalog, &["Small", "Small"]).unwrap();
    let a = merge(&catalog, &["Small"]).unwrap();
    assert_eq!(ab, ba);
    assert_eq!(aa, a);
}

#[test]
fn test_unknown_layout_produces_no_result() {
    let result = merge(&scenario_catalog(), &["Large", "BTX"]);
    assert!(matches!(result, Err(LayoutError::UnknownLayout { name }) if name == "BTX"));
}

#[test]
fn test_builtin_selection() {
    let catalog = Catalog::builtin().unwrap();
    let merged = merge(&catalog, &["MiniITX", "MicroATX", "ATX"]).unwrap();
    assert_eq!(merged.size, Point2D::new(305.0, 244.0));
    // ATX holes are a superset of the smaller boards.
    assert_eq!(merged.hole_count(), catalog.get("ATX").unwrap().holes.len());
}

#[test]
fn test_small_board_hole_keeps_offset_from_rear_corner() {
    let merged = merge(&scenario_catalog(), &["Small", "Large"]).unwrap();
    let out = to_output_coords(merged.size, Point2D::new(10.0, 10.0));
    assert_eq!(out, Point2D::new(290.0, 240.0));
}
