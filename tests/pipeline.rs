//! End-to-end tests: fixture files through parse, composite and render.

use std::fs;
use std::path::PathBuf;

use glyphgrid::render::grid_to_csv;
use glyphgrid::{
    build_files, parse_document, validate_document, write_document, BoundaryPolicy, BuildOptions,
    Compositor, DensityRamp, Dialect, GridError, OutputFormat, OutputGrid, ParsedDocument,
};
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

fn compose(doc: &ParsedDocument) -> OutputGrid {
    Compositor::new().compose(doc).unwrap()
}

fn counts(grid: &OutputGrid) -> Vec<Vec<u32>> {
    grid.rows().map(|row| row.to_vec()).collect()
}

#[test]
fn test_cell_and_unit_fixtures_agree() {
    let cell = parse_document(&load_fixture("cell.txt")).unwrap();
    let unit = parse_document(&load_fixture("unit.txt")).unwrap();

    assert_eq!(cell.dialect, Dialect::Cell);
    assert_eq!(unit.dialect, Dialect::Unit);

    let expected = vec![
        vec![0, 0, 0, 0],
        vec![0, 1, 1, 0],
        vec![0, 1, 1, 0],
        vec![0, 0, 0, 0],
    ];
    assert_eq!(counts(&compose(&cell)), expected);
    assert_eq!(counts(&compose(&unit)), expected);
}

#[test]
fn test_overlap_counts() {
    let doc = parse_document(&load_fixture("overlap.txt")).unwrap();
    let grid = compose(&doc);

    assert_eq!(grid.total(), 8);
    assert_eq!(grid.get(1, 1), Some(2));
    assert_eq!(grid.max(), 2);
    assert_eq!(grid.occupied(), 7);
}

#[test]
fn test_named_fixture_csv() {
    let doc = parse_document(&load_fixture("named.txt")).unwrap();
    assert_eq!(doc.dialect, Dialect::Named);
    assert_eq!(doc.glyphs.len(), 2);

    let csv = grid_to_csv(&compose(&doc));
    insta::assert_snapshot!(csv.trim_end(), @r"
    1,1,1,0,0,0,0,0
    0,0,0,0,1,1,1,0
    0,0,1,0,0,0,0,0
    0,0,0,0,0,0,0,0
    ");
}

#[test]
fn test_bad_header_reports_line() {
    let err = parse_document(&load_fixture("bad_header.txt")).unwrap_err();

    match err {
        GridError::Format {
            line,
            expected,
            found,
            ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(expected, "nx,ny");
            assert_eq!(found, "nxx,nyy");
        }
        other => panic!("expected a format error, got {other:?}"),
    }
}

#[test]
fn test_converted_documents_composite_identically() {
    let cell = parse_document(&load_fixture("overlap.txt")).unwrap();
    let original = compose(&cell);

    for target in Dialect::ALL {
        let converted = cell.convert(target, "square").unwrap();
        let reparsed = parse_document(&write_document(&converted).unwrap()).unwrap();

        assert_eq!(reparsed.dialect, target);
        assert_eq!(counts(&compose(&reparsed)), counts(&original), "via {target}");
    }
}

#[test]
fn test_fixtures_validate_cleanly() {
    for name in ["named.txt", "cell.txt", "unit.txt", "overlap.txt"] {
        let doc = parse_document(&load_fixture(name)).unwrap();
        let result = validate_document(&doc, BoundaryPolicy::Reject);
        assert!(result.is_ok(), "{name}: {:?}", result.iter().collect::<Vec<_>>());
    }
}

#[test]
fn test_batch_build_continues_past_failures() {
    let dir = tempfile::tempdir().unwrap();
    let options = BuildOptions {
        output: dir.path().to_path_buf(),
        dialect: None,
        boundary: BoundaryPolicy::Clip,
        formats: vec![OutputFormat::Png, OutputFormat::Csv, OutputFormat::Json],
        scale: 2,
        ramp: DensityRamp::default(),
    };
    let inputs = vec![
        fixture_path("bad_header.txt"),
        fixture_path("cell.txt"),
        fixture_path("named.txt"),
    ];

    let report = build_files(&inputs, &options).unwrap();

    assert_eq!(report.built.len(), 2);
    assert_eq!(report.failed.len(), 1);
    for stem in ["cell", "named"] {
        for ext in ["png", "csv", "json"] {
            assert!(dir.path().join(format!("{stem}.{ext}")).exists(), "{stem}.{ext}");
        }
    }
    assert!(!dir.path().join("bad_header.csv").exists());

    let png = image::open(dir.path().join("cell.png")).unwrap();
    assert_eq!((png.width(), png.height()), (8, 8));

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("named.json")).unwrap()).unwrap();
    assert_eq!(summary["dialect"], "named");
    assert_eq!(summary["total"], 7);
    assert_eq!(summary["placements"], 3);
}

#[test]
fn test_extreme_origins_clip_or_reject() {
    let cell = load_fixture("cell.txt").replace("i,j\n1,1", "i,j\n9223372036854775807,0");
    let unit = load_fixture("unit.txt").replace("x,y\n0.25,0.25", "x,y\n1e300,0");

    for source in [cell, unit] {
        let doc = parse_document(&source).unwrap();

        assert_eq!(compose(&doc).total(), 0);
        let err = Compositor::new()
            .with_boundary(BoundaryPolicy::Reject)
            .compose(&doc)
            .unwrap_err();
        assert!(matches!(err, GridError::Bounds { index: 0, .. }));

        let result = validate_document(&doc, BoundaryPolicy::Reject);
        assert_eq!(result.with_code("out-of-bounds").count(), 1);
    }
}
