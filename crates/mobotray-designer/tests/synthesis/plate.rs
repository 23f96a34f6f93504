use super::{scenario_layout, scenario_spec};
use mobotray_core::{LayoutError, MergedLayout, Point2D};
use mobotray_designer::{synthesize, CutoutSpec, TraySynthesizer};
use std::f64::consts::PI;

fn polygon_circle_area(diameter: f64, segments: usize) -> f64 {
    let r = diameter / 2.0;
    0.5 * segments as f64 * r * r * (2.0 * PI / segments as f64).sin()
}

#[test]
fn test_plate_spans_merged_footprint() {
    let geometry = synthesize(&scenario_layout(), &scenario_spec()).unwrap();
    assert_eq!(geometry.size, Point2D::new(300.0, 250.0));

    let (min_x, min_y, max_x, max_y) = geometry.bounds();
    assert!(min_x.abs() < 1e-9 && min_y.abs() < 1e-9);
    assert!((max_x - 300.0).abs() < 1e-9);
    assert!((max_y - 250.0).abs() < 1e-9);
}

#[test]
fn test_cutout_and_holes_use_output_coordinates() {
    let geometry = synthesize(&scenario_layout(), &scenario_spec()).unwrap();
    assert_eq!(geometry.cutout.center, Point2D::new(214.5, 165.0));
    assert_eq!(
        geometry.holes,
        vec![Point2D::new(290.0, 240.0), Point2D::new(10.0, 10.0)]
    );
}

#[test]
fn test_plate_area_accounts_for_every_cutout() {
    let spec = scenario_spec();
    let geometry = synthesize(&scenario_layout(), &spec).unwrap();

    let r = spec.cutout_corner_radius_mm;
    let cutout = 140.0 * 140.0 - (4.0 - PI) * r * r;
    let holes = 2.0 * polygon_circle_area(spec.screw_hole_diameter_mm, spec.geometry_resolution);
    let expected = 300.0 * 250.0 - cutout - holes;

    let area = geometry.area();
    assert!((area - expected).abs() < 3.0, "area {area} vs {expected}");
}

#[test]
fn test_plate_has_one_ring_per_cutout() {
    let geometry = synthesize(&scenario_layout(), &scenario_spec()).unwrap();
    let mp = geometry.sketch().to_multipolygon();
    assert_eq!(mp.0.len(), 1);
    assert_eq!(mp.0[0].interiors().len(), 3);
}

#[test]
fn test_zero_radius_cuts_sharp_rectangle() {
    let spec = CutoutSpec {
        cutout_corner_radius_mm: 0.0,
        ..scenario_spec()
    };
    let geometry = synthesize(&scenario_layout(), &spec).unwrap();
    let holes = 2.0 * polygon_circle_area(spec.screw_hole_diameter_mm, spec.geometry_resolution);
    let expected = 300.0 * 250.0 - 140.0 * 140.0 - holes;
    assert!((geometry.area() - expected).abs() < 1e-2);
}

#[test]
fn test_degenerate_radius_is_reported() {
    let spec = CutoutSpec {
        cutout_size_mm: Point2D::new(140.0, 100.0),
        cutout_corner_radius_mm: 50.0,
        ..scenario_spec()
    };
    let err = TraySynthesizer::new(spec)
        .synthesize(&scenario_layout())
        .unwrap_err();
    match err {
        LayoutError::DegenerateGeometry {
            radius,
            width,
            height,
        } => {
            assert_eq!((radius, width, height), (50.0, 140.0, 100.0));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_footprint_is_rejected() {
    let err = synthesize(&MergedLayout::default(), &scenario_spec()).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidParameter { ref name, .. } if name == "footprint"));
}

#[test]
fn test_plate_without_holes() {
    let merged = MergedLayout {
        size: Point2D::new(200.0, 200.0),
        ..MergedLayout::default()
    };
    let geometry = synthesize(&merged, &scenario_spec()).unwrap();
    assert!(geometry.holes.is_empty());
    assert_eq!(geometry.sketch().to_multipolygon().0[0].interiors().len(), 1);
}

#[test]
fn test_synthesis_is_repeatable() {
    let synthesizer = TraySynthesizer::new(scenario_spec());
    let a = synthesizer.synthesize(&scenario_layout()).unwrap();
    let b = synthesizer.synthesize(&scenario_layout()).unwrap();
    assert_eq!(a.holes, b.holes);
    assert_eq!(a.area(), b.area());
}
