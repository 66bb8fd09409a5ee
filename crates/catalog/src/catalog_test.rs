use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::field::Field;
use crate::record::PlanetRecord;

const SAMPLE: &str = "\
No.,Planet Name,Planet Host,Orbit Semi-Major Axis,Stellar Effective Temperature,Stellar Radius,Comment
1, Kepler-22 b ,Kepler-22,0.812,5518,0.98,first
2,Proxima Cen b,Proxima Cen,0.04856,3050,0.14,
3,HD 1 b,HD 1,NaN,5000,1.1,nan axis
";

#[test]
fn reads_rows_and_trims_cells() {
    let catalog = Catalog::from_reader(SAMPLE.as_bytes(), b',').unwrap();

    assert_eq!(catalog.len(), 3);
    assert!(!catalog.is_empty());
    let names: Vec<_> = catalog
        .records()
        .map(|r| r.planet_name.clone().unwrap())
        .collect();
    assert_eq!(names, ["Kepler-22 b", "Proxima Cen b", "HD 1 b"]);
    assert_eq!(catalog.rows()[0].cell(1), Some("Kepler-22 b"));
    assert_eq!(catalog.rows()[2].record().orbit_semi_major_axis, None);
}

#[test]
fn columns_by_name() {
    let catalog = Catalog::from_reader(SAMPLE.as_bytes(), b',').unwrap();

    assert_eq!(catalog.column_index("Planet Host"), Some(2));
    assert_eq!(catalog.column_index("Albedo"), None);
    assert_eq!(catalog.column("Comment").unwrap(), ["first", "", "nan axis"]);
    assert!(catalog.flags("Comment").unwrap().iter().all(|&f| !f));
}

#[test]
fn write_preserves_unknown_columns() {
    let catalog = Catalog::from_reader(SAMPLE.as_bytes(), b',').unwrap();
    let text = catalog.to_csv_string(b',').unwrap();

    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("No.,Planet Name,Planet Host,Orbit Semi-Major Axis,Stellar Effective Temperature,Stellar Radius,Comment")
    );
    assert_eq!(lines.next(), Some("1,Kepler-22 b,Kepler-22,0.812,5518,0.98,first"));

    let reread = Catalog::from_reader(text.as_bytes(), b',').unwrap();
    assert_eq!(reread, catalog);
}

#[test]
fn alternate_delimiter() {
    let text = "Planet Name;Orbit Semi-Major Axis\nb;1.5\n";
    let catalog = Catalog::from_reader(text.as_bytes(), b';').unwrap();
    assert_eq!(catalog.records().next().unwrap().orbit_semi_major_axis, Some(1.5));
    assert_eq!(catalog.to_csv_string(b';').unwrap(), text);
}

#[test]
fn header_only_is_empty() {
    let catalog = Catalog::from_reader("Planet Name,Stellar Radius\n".as_bytes(), b',').unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.headers().count(), 2);
}

#[test]
fn malformed_number_names_line_and_column() {
    let text = "Planet Name,Stellar Radius\na,1.0\nb,abc\n";
    let err = Catalog::from_reader(text.as_bytes(), b',').unwrap_err();

    match err {
        CatalogError::Parse { line, ref message } => {
            assert_eq!(line, 3);
            assert!(message.contains("Stellar Radius"), "message: {}", message);
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn ragged_row_fails() {
    let text = "Planet Name,Stellar Radius\na,1.0,extra\n";
    let err = Catalog::from_reader(text.as_bytes(), b',').unwrap_err();
    assert!(matches!(err, CatalogError::Csv(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Catalog::read("/nonexistent/catalog.csv", b',').unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/catalog.csv"));
}

#[test]
fn from_records_uses_catalog_columns() {
    let catalog = Catalog::from_records(vec![
        PlanetRecord::named("b", "A").with_semi_major_axis(0.25),
    ]);

    let headers: Vec<_> = catalog.headers().collect();
    let expected: Vec<_> = Field::ALL.iter().map(|f| f.column()).collect();
    assert_eq!(headers, expected);
    assert_eq!(catalog.column("Orbit Semi-Major Axis").unwrap(), ["0.25"]);
    assert_eq!(catalog.column("Stellar Radius").unwrap(), [""]);

    let reread = Catalog::from_reader(catalog.to_csv_string(b',').unwrap().as_bytes(), b',')
        .unwrap();
    assert_eq!(reread.records().collect::<Vec<_>>(), catalog.records().collect::<Vec<_>>());
}
