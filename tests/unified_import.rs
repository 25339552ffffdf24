use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tabular_pipeline::import::{import_from_path, parse_from_path, ImportOptions, SourceFormat};
use tabular_pipeline::types::{FieldMapping, FieldValue};
use tabular_pipeline::ImportError;

fn tmp_file(name: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tabular-pipeline-{name}-{nanos}.{ext}"))
}

fn write_file(path: &PathBuf, contents: &str) {
    let mut f = std::fs::File::create(path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
}

#[test]
fn source_format_detection_by_extension() {
    assert_eq!(SourceFormat::from_extension("csv"), Some(SourceFormat::Csv));
    assert_eq!(SourceFormat::from_extension("CSV"), Some(SourceFormat::Csv));
    assert_eq!(
        SourceFormat::from_extension("xlsx"),
        Some(SourceFormat::Workbook)
    );
    assert_eq!(
        SourceFormat::from_extension("xls"),
        Some(SourceFormat::Workbook)
    );
    assert_eq!(SourceFormat::from_extension("pdf"), None);
}

#[test]
fn parse_from_path_auto_detects_csv() {
    let path = tmp_file("auto", "csv");
    write_file(&path, "Title,Author\nDune,Herbert\n");

    let table = parse_from_path(&path, &ImportOptions::default()).unwrap();
    assert_eq!(table.headers, vec!["Title", "Author"]);
    assert_eq!(table.row_count(), 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn parse_from_path_rejects_unknown_extension() {
    let path = tmp_file("unknown", "pdf");
    write_file(&path, "not tabular");

    let err = parse_from_path(&path, &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedFormat { .. }));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn parse_from_path_honors_format_override() {
    // No recognizable extension, but the caller declares the kind.
    let path = tmp_file("forced", "tmp");
    write_file(&path, "Title,Author\nDune,Herbert\n");

    let opts = ImportOptions {
        format: Some(SourceFormat::Csv),
        ..Default::default()
    };
    let table = parse_from_path(&path, &opts).unwrap();
    assert_eq!(table.row_count(), 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn import_from_path_parses_and_maps_in_one_call() {
    let path = tmp_file("end-to-end", "csv");
    write_file(&path, "Title,Author,Price\nDune,Herbert,1200\n");

    let mapping = FieldMapping::new()
        .assign("bookTitle", "Title")
        .assign("bookAuthor", "Author");
    let records = import_from_path(&path, &mapping, &ImportOptions::default()).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].get("bookTitle"),
        Some(&FieldValue::Text("Dune".into()))
    );
    assert_eq!(
        records[0].get("bookAuthor"),
        Some(&FieldValue::Text("Herbert".into()))
    );
    assert!(records[0].get("Price").is_none());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn import_preserves_source_row_order() {
    let path = tmp_file("order", "csv");
    write_file(&path, "ref\nCMD-3\nCMD-1\nCMD-2\n");

    let mapping = FieldMapping::new().assign("reference", "ref");
    let records = import_from_path(&path, &mapping, &ImportOptions::default()).unwrap();

    let refs: Vec<_> = records
        .iter()
        .map(|r| match r.get("reference") {
            Some(FieldValue::Text(s)) => s.clone(),
            other => panic!("unexpected value: {other:?}"),
        })
        .collect();
    assert_eq!(refs, vec!["CMD-3", "CMD-1", "CMD-2"]);

    let _ = std::fs::remove_file(&path);
}
