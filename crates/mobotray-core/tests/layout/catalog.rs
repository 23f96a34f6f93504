use mobotray_core::{Catalog, LayoutError, Point2D};
use std::io::Write;

#[test]
fn test_catalog_from_json() {
    let json = r#"{
        "Small": {"size": [170, 170], "holes": [[10, 10]]},
        "Large": {"size": [300, 250], "holes": [[10, 10], [290, 240]]}
    }"#;

    let catalog = Catalog::from_json_str(json).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains("Small"));
    assert!(!catalog.contains("small"));

    let large = catalog.get("Large").unwrap();
    assert_eq!(large.size, Point2D::new(300.0, 250.0));
    assert_eq!(
        large.holes,
        vec![Point2D::new(10.0, 10.0), Point2D::new(290.0, 240.0)]
    );
}

#[test]
fn test_missing_size_is_malformed() {
    let err = Catalog::from_json_str(r#"{"NoSize": {"holes": []}}"#).unwrap_err();
    match err {
        LayoutError::MalformedLayout { name, reason } => {
            assert_eq!(name, "NoSize");
            assert_eq!(reason, "missing 'size'");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_holes_is_malformed() {
    let err = Catalog::from_json_str(r#"{"NoHoles": {"size": [1, 2]}}"#).unwrap_err();
    assert!(matches!(err, LayoutError::MalformedLayout { ref name, .. } if name == "NoHoles"));
}

#[test]
fn test_size_component_count() {
    let err = Catalog::from_json_str(r#"{"Flat": {"size": [1], "holes": []}}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed layout 'Flat': 'size' must have exactly two components, found 1"
    );

    let err =
        Catalog::from_json_str(r#"{"Deep": {"size": [1, 2, 3], "holes": []}}"#).unwrap_err();
    assert!(matches!(err, LayoutError::MalformedLayout { .. }));
}

#[test]
fn test_size_must_be_numeric() {
    let err =
        Catalog::from_json_str(r#"{"Text": {"size": ["wide", 2], "holes": []}}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed layout 'Text': 'size' component 0 is not a number"
    );
}

#[test]
fn test_no_other_validation() {
    let catalog =
        Catalog::from_json_str(r#"{"Odd": {"size": [-5, 0], "holes": []}}"#).unwrap();
    assert_eq!(catalog.get("Odd").unwrap().size, Point2D::new(-5.0, 0.0));
}

#[test]
fn test_root_must_be_object() {
    let err = Catalog::from_json_str("[]").unwrap_err();
    assert!(matches!(err, LayoutError::MalformedLayout { .. }));

    let err = Catalog::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, LayoutError::Json(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"MiniITX": {{"size": [170, 170], "holes": [[6.35, 10.16]]}}}}"#
    )
    .unwrap();

    let catalog = Catalog::load_from_file(file.path()).unwrap();
    assert_eq!(catalog.names(), vec!["MiniITX"]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load_from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LayoutError::Io(_)));
}
