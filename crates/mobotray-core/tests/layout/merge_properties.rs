use mobotray_core::{merge, Catalog, Layout, Point2D};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn point() -> impl Strategy<Value = Point2D> {
    // A coarse grid so independent layouts share holes often.
    (0u32..40, 0u32..40).prop_map(|(x, y)| Point2D::new(x as f64 * 2.5, y as f64 * 2.5))
}

fn layout() -> impl Strategy<Value = Layout> {
    (1u32..400, 1u32..400, prop::collection::vec(point(), 0..8))
        .prop_map(|(w, h, holes)| Layout::new(Point2D::new(w as f64, h as f64), holes))
}

fn catalog_and_selection() -> impl Strategy<Value = (Catalog, Vec<String>)> {
    prop::collection::vec(layout(), 1..6).prop_flat_map(|layouts| {
        let count = layouts.len();
        let mut catalog = Catalog::new();
        for (i, layout) in layouts.into_iter().enumerate() {
            catalog.insert(format!("L{}", i), layout);
        }
        let selection =
            prop::collection::vec((0..count).prop_map(|i| format!("L{}", i)), 1..8);
        (Just(catalog), selection)
    })
}

proptest! {
    #[test]
    fn merged_size_covers_every_selected_layout((catalog, selection) in catalog_and_selection()) {
        let merged = merge(&catalog, &selection).unwrap();
        let max_x = selection.iter().map(|n| catalog.get(n).unwrap().size.x).fold(0.0, f64::max);
        let max_y = selection.iter().map(|n| catalog.get(n).unwrap().size.y).fold(0.0, f64::max);
        prop_assert!(merged.size.x >= max_x);
        prop_assert!(merged.size.y >= max_y);
        prop_assert_eq!(merged.size, Point2D::new(max_x, max_y));
    }

    #[test]
    fn merged_holes_are_the_union((catalog, selection) in catalog_and_selection()) {
        let merged = merge(&catalog, &selection).unwrap();
        let expected: BTreeSet<Point2D> = selection
            .iter()
            .flat_map(|n| catalog.get(n).unwrap().holes.iter().copied())
            .collect();
        prop_assert_eq!(merged.holes, expected);
    }

    #[test]
    fn merge_ignores_order((catalog, selection) in catalog_and_selection()) {
        let mut reversed = selection.clone();
        reversed.reverse();
        prop_assert_eq!(merge(&catalog, &selection).unwrap(), merge(&catalog, &reversed).unwrap());
    }

    #[test]
    fn merge_is_idempotent((catalog, selection) in catalog_and_selection()) {
        let mut doubled = selection.clone();
        doubled.extend(selection.iter().cloned());
        prop_assert_eq!(merge(&catalog, &doubled).unwrap(), merge(&catalog, &selection).unwrap());
    }
}
